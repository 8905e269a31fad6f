use crate::modules::activities::adapters::outbound::activity_roster::ActivityRoster;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUp {
    pub activity_name: String,
    pub email: String,
}

impl fmt::Display for SignedUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signed up {} for {}", self.email, self.activity_name)
    }
}

pub struct SignUpForActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> SignUpForActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<SignedUp, RosterError> {
        match self
            .roster
            .sign_up(&command.activity_name, &command.email)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "student signed up"
                );
                Ok(SignedUp {
                    activity_name: command.activity_name,
                    email: command.email,
                })
            }
            Err(reason) => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %reason,
                    "signup rejected"
                );
                Err(reason)
            }
        }
    }
}
