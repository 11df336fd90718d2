//! Wire types for the Harvest candidate and attachment endpoints.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/candidates`.
///
/// Optional contact fields serialize as empty lists when the applicant left
/// them blank; `company` and `title` serialize as `null`. The `applications`
/// list always holds exactly one entry for the configured job.
#[derive(Debug, Serialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub email_addresses: Vec<TypedValue>,
    pub phone_numbers: Vec<TypedValue>,
    pub addresses: Vec<TypedValue>,
    pub website_addresses: Vec<TypedValue>,
    pub social_media_addresses: Vec<SocialValue>,
    pub applications: Vec<NewApplication>,
}

/// A `{value, type}` pair as Harvest models emails, phones, and addresses.
#[derive(Debug, Serialize)]
pub struct TypedValue {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl TypedValue {
    pub fn personal(value: String) -> Self {
        Self {
            value,
            kind: "personal",
        }
    }

    pub fn mobile(value: String) -> Self {
        Self {
            value,
            kind: "mobile",
        }
    }

    pub fn home(value: String) -> Self {
        Self {
            value,
            kind: "home",
        }
    }
}

/// Social-media entries carry no type discriminator.
#[derive(Debug, Serialize)]
pub struct SocialValue {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct NewApplication {
    pub job_id: String,
}

/// Request body for `POST /v1/applications/{id}/attachments`.
#[derive(Debug, Serialize)]
pub struct NewAttachment {
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub content_type: String,
    /// Base64-encoded file bytes.
    pub content: String,
}

/// Response body of `POST /v1/candidates`. Harvest assigns numeric ids.
///
/// `applications` may be absent or empty in a malformed response; callers
/// must go through [`first_application_id`](Self::first_application_id)
/// rather than index into it.
#[derive(Debug, Deserialize)]
pub struct CandidateCreated {
    pub id: u64,
    #[serde(default)]
    pub applications: Vec<ApplicationRef>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationRef {
    pub id: u64,
}

impl CandidateCreated {
    pub fn first_application_id(&self) -> Option<u64> {
        self.applications.first().map(|a| a.id)
    }
}
