//! Contains all the routes that this application can handle.

mod setup_database;
mod signup;

// re-export errors
pub use setup_database::SetupError;
pub use signup::SignupError;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::AppState;

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/setup-database", get(setup_database::setup_database))
        .route("/health", get(health))
        .with_state(app_state)
}

/// Liveness only: does not check the store or the mailing provider.
async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Server is running" }))
}
