use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: u64,
}

/// Write side of the registry.
///
/// `update` runs `decide` and applies the events it returns while holding exclusive access to
/// the registry, so no other write can land between the check and the mutation.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, activity_name: &str)
    -> Result<Option<LoadedActivity>, ActivityStoreError>;

    async fn update<F, E>(&self, activity_name: &str, decide: F) -> Result<(), E>
    where
        F: FnOnce(Option<&Activity>) -> Result<Vec<ActivityEvent>, E> + Send,
        E: From<ActivityStoreError> + Send;
}
