use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::RosterError;
use async_trait::async_trait;

/// Storage port for activity rosters.
///
/// Implementations must run the existence check, the participant check and
/// the mutation of `sign_up` / `unregister` as one atomic step.
#[async_trait]
pub trait ActivityRoster: Send + Sync {
    /// All activities, ordered by name.
    async fn list(&self) -> Vec<Activity>;

    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), RosterError>;

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError>;
}
