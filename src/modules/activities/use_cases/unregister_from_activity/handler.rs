use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use crate::modules::activities::use_cases::unregister_from_activity::decision::{
    DecideError, Decision,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<(), ApplicationError> {
        let activity_name = command.activity_name.clone();
        self.store
            .update(&activity_name, move |activity| {
                match decide_unregister(activity, command) {
                    Decision::Accepted { events } => Ok(events),
                    Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
                }
            })
            .await
    }
}
