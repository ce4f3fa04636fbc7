//! Most of the structs in `web` module and their implementations live here.
//! Includes the signup structs, their validation and the profession tag map.

use serde::Deserialize;

use crate::mailing_client::{MemberPayload, MergeFields, MEMBER_STATUS_SUBSCRIBED};

/// Tag applied to every signup relayed by this service.
pub const FREE_SAMPLER_TAG: &str = "Free_Sampler";
/// Tag marking where the submission came in from.
pub const WEBSITE_SIGNUP_TAG: &str = "Website_Signup";
/// Tag and merge-field value used when the profession key is not recognized.
pub const FALLBACK_PROFESSION_TAG: &str = "Other_Professional";

/// Maps a profession key from the signup form to the mailing-list tag
/// vocabulary. Unrecognized keys fall back to `Other_Professional` instead
/// of being rejected.
pub fn profession_tag(key: &str) -> &'static str {
    match key {
        "legal" => "Legal_Professional",
        "financial" => "Financial_Advisor",
        "insurance" => "Insurance_Professional",
        "healthcare" => "Healthcare_Professional",
        "education" => "Educator",
        "data" => "Data_Analyst",
        "tech" => "Tech_Support",
        "social" => "Social_Worker",
        "other" => FALLBACK_PROFESSION_TAG,
        _ => FALLBACK_PROFESSION_TAG,
    }
}

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable Signup
/// A signup submission as it comes off the wire. Fields are optional so a
/// missing field and an empty one fail validation the same way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeserSignup {
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub profession: Option<String>,
    pub source: Option<String>,
}

/// Validated Signup
/// A signup with all the required fields present and non-empty.
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub first_name: String,
    pub email: String,
    pub profession: String,
    pub source: Option<String>,
}

// ###################################
// ->   IMPLS
// ###################################
impl TryFrom<DeserSignup> for ValidSignup {
    type Error = DataParsingError;

    fn try_from(deser: DeserSignup) -> Result<Self, Self::Error> {
        let first_name = required(deser.first_name, DataParsingError::FirstNameMissing)?;
        let email = required(deser.email, DataParsingError::EmailMissing)?;
        let profession = required(deser.profession, DataParsingError::ProfessionMissing)?;
        // An empty source is the same as no source at all.
        let source = deser.source.filter(|s| !s.is_empty());

        Ok(ValidSignup {
            first_name,
            email,
            profession,
            source,
        })
    }
}

fn required(field: Option<String>, err: DataParsingError) -> Result<String, DataParsingError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(err),
    }
}

impl ValidSignup {
    /// Every signup carries the two fixed tags, the mapped profession tag,
    /// and the source verbatim when one was submitted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = vec![
            FREE_SAMPLER_TAG.to_string(),
            WEBSITE_SIGNUP_TAG.to_string(),
            profession_tag(&self.profession).to_string(),
        ];
        if let Some(source) = &self.source {
            tags.push(source.clone());
        }
        tags
    }

    pub fn member_payload(&self) -> MemberPayload<'_> {
        MemberPayload {
            email_address: &self.email,
            status: MEMBER_STATUS_SUBSCRIBED,
            merge_fields: MergeFields {
                first_name: &self.first_name,
                profession: profession_tag(&self.profession),
            },
            tags: self.tags(),
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("signup field 'firstName' was missing or empty")]
    FirstNameMissing,
    #[error("signup field 'email' was missing or empty")]
    EmailMissing,
    #[error("signup field 'profession' was missing or empty")]
    ProfessionMissing,
}
