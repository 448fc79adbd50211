use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = UnregisterFromActivity {
            activity_name,
            email,
        };

        match state.unregister_handler.handle(command.clone()).await {
            Ok(()) => Ok(command.confirmation()),
            Err(ApplicationError::Domain(reason)) => {
                Err(async_graphql::Error::new(reason.to_string()))
            }
            Err(ApplicationError::Store(error)) => {
                tracing::error!(activity = %command.activity_name, %error, "unregister failed");
                Err(async_graphql::Error::new("Internal server error"))
            }
        }
    }
}
