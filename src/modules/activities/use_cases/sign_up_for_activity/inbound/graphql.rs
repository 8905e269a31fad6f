use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpForActivityMutation;

#[Object]
impl SignUpForActivityMutation {
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();

        let signed_up = state
            .sign_up_for_activity
            .handle(SignUpForActivity::new(activity_name, email))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(signed_up.to_string())
    }
}
