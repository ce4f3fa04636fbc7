pub mod app;
pub mod config;
pub mod database;
mod error;
pub mod mailing_client;
pub mod web;

// re-export
pub use app::{App, AppState};
pub use error::{Error, Result};
pub use mailing_client::MailingClient;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Compact console tracing used in debug builds and tests.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .compact()
        .init();
}

/// We have a different logging mechanism for production.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
