use crate::modules::activities::adapters::outbound::activity_roster::ActivityRoster;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregistered {
    pub activity_name: String,
    pub email: String,
}

impl fmt::Display for Unregistered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unregistered {} from {}", self.email, self.activity_name)
    }
}

pub struct UnregisterFromActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> UnregisterFromActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<Unregistered, RosterError> {
        match self
            .roster
            .unregister(&command.activity_name, &command.email)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "student unregistered"
                );
                Ok(Unregistered {
                    activity_name: command.activity_name,
                    email: command.email,
                })
            }
            Err(reason) => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %reason,
                    "unregister rejected"
                );
                Err(reason)
            }
        }
    }
}
