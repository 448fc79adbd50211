use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = SignUpForActivity {
            activity_name,
            email,
        };

        match state.sign_up_handler.handle(command.clone()).await {
            Ok(()) => Ok(command.confirmation()),
            Err(ApplicationError::Domain(reason)) => {
                Err(async_graphql::Error::new(reason.to_string()))
            }
            Err(ApplicationError::Store(error)) => {
                tracing::error!(activity = %command.activity_name, %error, "signup failed");
                Err(async_graphql::Error::new("Internal server error"))
            }
        }
    }
}
