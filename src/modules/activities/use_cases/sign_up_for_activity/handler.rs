use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError,
};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::{
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

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<(), ApplicationError> {
        let activity_name = command.activity_name.clone();
        self.store
            .update(&activity_name, move |activity| {
                match decide_sign_up(activity, command) {
                    Decision::Accepted { events } => Ok(events),
                    Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
                }
            })
            .await
    }
}
