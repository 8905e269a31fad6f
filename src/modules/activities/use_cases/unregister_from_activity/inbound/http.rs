use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::modules::activities::adapters::inbound::http_responses::{EmailParams, MessageResponse};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> impl IntoResponse {
    let command = UnregisterFromActivity::new(activity_name, params.email);

    match state.unregister_from_activity.handle(command).await {
        Ok(unregistered) => Json(MessageResponse {
            message: unregistered.to_string(),
        })
        .into_response(),
        Err(reason) => reason.into_response(),
    }
}
