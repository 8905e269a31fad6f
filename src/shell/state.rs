use crate::modules::activities::adapters::outbound::activity_roster_in_memory::InMemoryActivityRoster;
use crate::modules::activities::use_cases::list_activities::handler::ListActivitiesHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<InMemoryActivityRoster>,
    pub list_activities: Arc<ListActivitiesHandler<InMemoryActivityRoster>>,
    pub sign_up_for_activity: Arc<SignUpForActivityHandler<InMemoryActivityRoster>>,
    pub unregister_from_activity: Arc<UnregisterFromActivityHandler<InMemoryActivityRoster>>,
}

impl AppState {
    pub fn new(roster: Arc<InMemoryActivityRoster>) -> Self {
        Self {
            list_activities: Arc::new(ListActivitiesHandler::new(roster.clone())),
            sign_up_for_activity: Arc::new(SignUpForActivityHandler::new(roster.clone())),
            unregister_from_activity: Arc::new(UnregisterFromActivityHandler::new(roster.clone())),
            roster,
        }
    }
}
