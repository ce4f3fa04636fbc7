use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use reqwest::Client;
use sampler_signup::{web, App, AppState, MailingClient};
use secrecy::SecretString;
use serde_json::Value;
use tokio::net::TcpListener;
use wiremock::MockServer;

/// Trying to bind *port 0* will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    /// Stands in for the mailing-list provider.
    pub mailing_server: MockServer,
    pub http_client: Client,
}

impl TestApp {
    /// Spawns the app on an OS-assigned port, wired to a mock mailing
    /// provider and without a configured store.
    pub async fn spawn() -> Result<TestApp> {
        let mailing_server = MockServer::start().await;

        let mailing_client = MailingClient::new(
            mailing_server.uri(),
            "test-list".to_string(),
            SecretString::from("test-api-key"),
        )?;
        let app_state = AppState::new(None, mailing_client, vec!["http://localhost".to_string()]);

        let listener = TcpListener::bind(&TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(web::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            mailing_server,
            http_client: Client::new(),
        })
    }

    pub async fn post_signup(&self, body: &Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/signup", self.addr))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn get_setup_database(&self) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .get(format!("http://{}/setup-database", self.addr))
            .send()
            .await?;
        Ok(res)
    }
}
