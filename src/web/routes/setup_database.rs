use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::{database, web::WebResult, AppState};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("database not configured")]
    DatabaseNotConfigured,
    #[error("database error: {0}")]
    Database(#[from] database::Error),
}

// ###################################
// ->   API
// ###################################
#[derive(Debug, Serialize)]
pub struct SetupResponse {
    pub success: bool,
    pub message: String,
}

#[tracing::instrument(name = "Provisioning the prompt-library schema", skip(app_state))]
pub async fn setup_database(
    State(app_state): State<AppState>,
) -> WebResult<Json<SetupResponse>> {
    let database_mgr = app_state
        .database_mgr
        .as_ref()
        .ok_or(SetupError::DatabaseNotConfigured)?;

    database_mgr
        .provision_schema()
        .await
        .map_err(SetupError::Database)?;

    info!("Database tables created successfully.");

    Ok(Json(SetupResponse {
        success: true,
        message: "Database tables created successfully!".to_string(),
    }))
}
