use crate::modules::activities::adapters::outbound::activity_roster::ActivityRoster;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::{RosterError, SeedError};
use crate::modules::activities::core::seed::seed_activities;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

type ActivityMap = BTreeMap<String, Activity>;

fn index(activities: Vec<Activity>) -> Result<ActivityMap, SeedError> {
    let mut map = ActivityMap::new();
    for activity in activities {
        match map.entry(activity.name().to_string()) {
            Entry::Occupied(entry) => {
                return Err(SeedError::DuplicateActivity {
                    activity: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(activity);
            }
        }
    }
    Ok(map)
}

/// Process-wide roster held behind a single lock.
pub struct InMemoryActivityRoster {
    seed: ActivityMap,
    activities: RwLock<ActivityMap>,
}

impl InMemoryActivityRoster {
    /// Builds a store from `seed`. Names must be unique.
    pub fn new(seed: Vec<Activity>) -> Result<Self, SeedError> {
        let seed = index(seed)?;
        let activities = RwLock::new(seed.clone());
        Ok(Self { seed, activities })
    }

    pub fn seeded() -> Result<Self, SeedError> {
        Self::new(seed_activities()?)
    }

    /// Restores the initial dataset. Test support only.
    pub async fn reset(&self) {
        *self.activities.write().await = self.seed.clone();
    }
}

#[async_trait]
impl ActivityRoster for InMemoryActivityRoster {
    async fn list(&self) -> Vec<Activity> {
        self.activities.read().await.values().cloned().collect()
    }

    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;
        activities
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?
            .sign_up(email)
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;
        activities
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?
            .unregister(email)
    }
}
