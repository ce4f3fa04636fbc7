use crate::{config, database, mailing_client, web};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("web error: {0}")]
    Web(#[from] web::Error),
    #[error("mailing client error: {0}")]
    MailingClient(#[from] mailing_client::Error),
    #[error("database error: {0}")]
    Database(#[from] database::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
