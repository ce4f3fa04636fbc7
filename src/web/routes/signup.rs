use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::{
    mailing_client::{self, SubscribeOutcome},
    web::{
        types::{DataParsingError, DeserSignup, ValidSignup},
        WebResult,
    },
    AppState,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
    #[error("mailing client error: {0}")]
    Mailing(#[from] mailing_client::Error),
}

// ###################################
// ->   API
// ###################################
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

#[tracing::instrument(
    name = "Relaying a signup to the mailing list",
    skip(app_state, signup),
    fields(signup_email = signup.email.as_deref().unwrap_or_default())
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Json(signup): Json<DeserSignup>,
) -> WebResult<Json<SignupResponse>> {
    let signup = ValidSignup::try_from(signup).map_err(SignupError::DataParsing)?;

    let outcome = app_state
        .mailing_client
        .subscribe_member(&signup.member_payload())
        .await
        .map_err(SignupError::Mailing)?;

    let message = match outcome {
        SubscribeOutcome::Subscribed => {
            info!("New signup successfully relayed to the mailing list.");
            "Successfully subscribed!"
        }
        SubscribeOutcome::AlreadyMember => {
            info!("Returning member re-submitted the signup form.");
            "Welcome back!"
        }
    };

    Ok(Json(SignupResponse {
        success: true,
        message: message.to_string(),
    }))
}
