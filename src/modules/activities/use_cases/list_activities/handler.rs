use crate::modules::activities::adapters::outbound::activity_roster::ActivityRoster;
use crate::modules::activities::core::activity::Activity;
use std::sync::Arc;

pub struct ListActivitiesHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> ListActivitiesHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self) -> Vec<Activity> {
        self.roster.list().await
    }
}
