use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::modules::activities::adapters::inbound::http_responses::{EmailParams, MessageResponse};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> impl IntoResponse {
    let command = SignUpForActivity::new(activity_name, params.email);

    match state.sign_up_for_activity.handle(command).await {
        Ok(signed_up) => Json(MessageResponse {
            message: signed_up.to_string(),
        })
        .into_response(),
        Err(reason) => reason.into_response(),
    }
}
