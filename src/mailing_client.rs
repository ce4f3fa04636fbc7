use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Subscription status literal the provider expects for new members.
pub const MEMBER_STATUS_SUBSCRIBED: &str = "subscribed";

/// Error title the provider uses to report a duplicate-member conflict.
const MEMBER_EXISTS_TITLE: &str = "Member Exists";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The member was newly added to the list.
    Subscribed,
    /// The member was already on the list. Not an error: returning users
    /// re-submitting the form are welcomed back.
    AlreadyMember,
}

#[derive(Debug)]
pub struct MailingClient {
    pub http_client: Client,
    pub url: reqwest::Url,
    pub list_id: String,
    api_key: SecretString,
}

impl MailingClient {
    pub fn new<S: AsRef<str>>(url: S, list_id: String, api_key: SecretString) -> Result<Self> {
        let url =
            reqwest::Url::parse(url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::new();

        Ok(MailingClient {
            http_client,
            url,
            list_id,
            api_key,
        })
    }

    /// Posts a member-creation request to the configured list.
    /// A provider-reported duplicate is mapped to `AlreadyMember` instead of
    /// an error; every other non-2xx response surfaces as `Error::Api`.
    pub async fn subscribe_member(&self, member: &MemberPayload<'_>) -> Result<SubscribeOutcome> {
        let url = self
            .url
            .join(&format!("lists/{}/members", self.list_id))
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let resp = self
            .http_client
            .post(url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("apikey {}", self.api_key.expose_secret()),
            )
            .json(member)
            .send()
            .await?;

        if resp.status().is_success() {
            return Ok(SubscribeOutcome::Subscribed);
        }

        let status = resp.status();
        let api_error: ApiErrorBody = resp.json().await.unwrap_or_default();

        if is_member_exists(status, &api_error) {
            Ok(SubscribeOutcome::AlreadyMember)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                title: api_error.title,
                detail: api_error.detail,
            })
        }
    }
}

/// The conflict-as-success classifier.
pub fn is_member_exists(status: StatusCode, body: &ApiErrorBody) -> bool {
    status == StatusCode::BAD_REQUEST && body.title == MEMBER_EXISTS_TITLE
}

// ###################################
// ->   WIRE STRUCTS
// ###################################

/// The member-creation request body, assembled fresh for every signup.
#[derive(Debug, Serialize)]
pub struct MemberPayload<'a> {
    pub email_address: &'a str,
    pub status: &'a str,
    pub merge_fields: MergeFields<'a>,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MergeFields<'a> {
    #[serde(rename = "FNAME")]
    pub first_name: &'a str,
    #[serde(rename = "PROFESSION")]
    pub profession: &'a str,
}

/// Structured error body the provider returns on non-2xx responses.
/// Defaults to empty fields when the body is absent or not JSON, so an
/// unparseable failure still surfaces as a generic `Error::Api`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("mailing api error: {status} - {title}: {detail}")]
    Api {
        status: u16,
        title: String,
        detail: String,
    },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
