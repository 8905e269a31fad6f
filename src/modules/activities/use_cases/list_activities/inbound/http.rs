use axum::{Json, extract::State, response::IntoResponse};
use std::collections::BTreeMap;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let activities: BTreeMap<_, _> = state
        .list_activities
        .handle()
        .await
        .into_iter()
        .map(|activity| (activity.name().to_string(), activity))
        .collect();
    Json(activities)
}
