use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::DecideError;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::ApplicationError;
use crate::shared::infrastructure::http::{error_response, message_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> impl IntoResponse {
    let command = SignUpForActivity {
        activity_name,
        email: params.email,
    };

    match state.sign_up_handler.handle(command.clone()).await {
        Ok(()) => {
            tracing::info!(activity = %command.activity_name, email = %command.email, "participant signed up");
            message_response(command.confirmation())
        }
        Err(ApplicationError::Domain(reason)) => {
            tracing::debug!(activity = %command.activity_name, %reason, "signup rejected");
            let status = match reason {
                DecideError::ActivityNotFound => StatusCode::NOT_FOUND,
                DecideError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            };
            error_response(status, reason.to_string())
        }
        Err(ApplicationError::Store(error)) => {
            tracing::error!(activity = %command.activity_name, %error, "signup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
