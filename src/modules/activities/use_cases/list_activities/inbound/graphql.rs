use async_graphql::{Context, Object, Result as GqlResult};
use std::num::TryFromIntError;

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
    pub spots_left: i64,
}

impl TryFrom<Activity> for GqlActivity {
    type Error = TryFromIntError;

    fn try_from(a: Activity) -> Result<Self, Self::Error> {
        Ok(Self {
            name: a.name().to_string(),
            description: a.description().to_string(),
            schedule: a.schedule().to_string(),
            max_participants: i64::try_from(a.max_participants())?,
            participants: a.participants().to_vec(),
            spots_left: i64::try_from(a.spots_left())?,
        })
    }
}

#[derive(Default)]
pub struct ListActivitiesQuery;

#[Object]
impl ListActivitiesQuery {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.list_activities.handle().await;
        let activities = list
            .into_iter()
            .map(GqlActivity::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(activities)
    }
}
