use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{config::AppConfig, database::DbManager, MailingClient, Result};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let mailing_client = MailingClient::new(
            config.mailing_config.api_url(),
            config.mailing_config.list_id,
            config.mailing_config.api_key,
        )?;

        // The relational store is optional; the setup endpoint refuses to run
        // without one, everything else is unaffected.
        let database_mgr = config.db_config.as_ref().map(DbManager::init);
        match &database_mgr {
            Some(_) => info!("Database connected"),
            None => warn!("No database configured, '/setup-database' is disabled"),
        }

        let app_state = AppState::new(
            database_mgr,
            mailing_client,
            config.net_config.allowed_origins,
        );

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub database_mgr: Option<DbManager>,
    pub mailing_client: MailingClient,
    pub allowed_origins: Vec<String>,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(
        database_mgr: Option<DbManager>,
        mailing_client: MailingClient,
        allowed_origins: Vec<String>,
    ) -> Self {
        AppState(Arc::new(InternalState {
            database_mgr,
            mailing_client,
            allowed_origins,
        }))
    }
}
