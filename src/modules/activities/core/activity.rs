use serde::Serialize;
use std::collections::HashSet;

use crate::modules::activities::core::errors::{RosterError, SeedError};

/// An extracurricular offering and its roster.
///
/// The name is the identity of the activity and is carried by the enclosing
/// mapping when serialized. `participants` keeps signup order and never holds
/// more than `max_participants` distinct emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip_serializing)]
    name: String,
    description: String,
    schedule: String,
    max_participants: usize,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
        participants: Vec<String>,
    ) -> Result<Self, SeedError> {
        let name = name.into();
        if max_participants == 0 {
            return Err(SeedError::ZeroCapacity { activity: name });
        }
        if participants.len() > max_participants {
            return Err(SeedError::OverCapacity {
                activity: name,
                participants: participants.len(),
                max_participants,
            });
        }
        let mut seen = HashSet::new();
        for email in &participants {
            if !seen.insert(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Appends `email` to the roster. Nothing is mutated on rejection.
    pub fn sign_up(&mut self, email: &str) -> Result<(), RosterError> {
        if self.is_registered(email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if self.participants.len() >= self.max_participants {
            return Err(RosterError::AtCapacity);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email`, keeping the relative order of everyone else.
    pub fn unregister(&mut self, email: &str) -> Result<(), RosterError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotRegistered)?;
        self.participants.remove(position);
        Ok(())
    }
}
