// In memory activity store.
//
// Purpose
// - Hold the registry for the lifetime of the process.
//
// Responsibilities
// - Serve the write side (load + update) and the read side (list).
// - Run each decision under the write lock and fold its events in with `evolve`.

use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError, LoadedActivity,
};
use crate::modules::activities::core::activity::{Activities, Activity};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredActivity {
    activity: Activity,
    version: u64,
}

#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<BTreeMap<String, StoredActivity>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn seeded(activities: Activities) -> Self {
        let activities = activities
            .into_iter()
            .map(|(name, activity)| {
                (
                    name,
                    StoredActivity {
                        activity,
                        version: 0,
                    },
                )
            })
            .collect();
        Self {
            activities: RwLock::new(activities),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Stalls every update while it holds the write lock.
    pub fn set_delay_update_ms(&self, delay_ms: u64) {
        self.delay_update_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(
        &self,
        activity_name: &str,
    ) -> Result<Option<LoadedActivity>, ActivityStoreError> {
        self.ensure_online()?;
        let guard = self.activities.read().await;
        Ok(guard.get(activity_name).map(|stored| LoadedActivity {
            activity: stored.activity.clone(),
            version: stored.version,
        }))
    }

    async fn update<F, E>(&self, activity_name: &str, decide: F) -> Result<(), E>
    where
        F: FnOnce(Option<&Activity>) -> Result<Vec<ActivityEvent>, E> + Send,
        E: From<ActivityStoreError> + Send,
    {
        self.ensure_online()?;

        let mut guard = self.activities.write().await;

        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let stored = guard.get_mut(activity_name);
        let events = decide(stored.as_ref().map(|s| &s.activity))?;
        if events.is_empty() {
            return Ok(());
        }

        if let Some(foreign) = events.iter().find(|e| e.activity_name() != activity_name) {
            return Err(ActivityStoreError::Backend(format!(
                "event for '{}' applied to '{activity_name}'",
                foreign.activity_name()
            ))
            .into());
        }

        let Some(stored) = stored else {
            return Err(ActivityStoreError::Backend(format!(
                "events for unknown activity '{activity_name}'"
            ))
            .into());
        };

        stored.activity = events
            .iter()
            .cloned()
            .fold(stored.activity.clone(), evolve);
        stored.version += events.len() as u64;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Activities> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .map(|(name, stored)| (name.clone(), stored.activity.clone()))
            .collect())
    }
}
