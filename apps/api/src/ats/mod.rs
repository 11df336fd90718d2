/// ATS Client — the single point of entry for all Harvest API calls.
///
/// ARCHITECTURAL RULE: No other module may call the ATS directly.
/// All applicant-tracking-system interactions MUST go through this module.
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub mod types;

pub use types::{CandidateCreated, NewAttachment, NewCandidate};

const ON_BEHALF_OF_HEADER: &str = "On-Behalf-Of";
/// Each outbound call is bounded; a hung ATS must not hang the submission.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum AtsError {
    #[error("ATS request timed out")]
    Timeout,

    #[error("Could not reach the ATS: {0}")]
    Connect(String),

    #[error("HTTP transport error: {0}")]
    Http(reqwest::Error),

    #[error("ATS rejected our credentials (status {status})")]
    Auth { status: u16 },

    #[error("ATS error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected ATS response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Deserialize)]
struct AtsErrorBody {
    errors: Vec<AtsErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct AtsErrorEntry {
    message: String,
}

/// The single ATS client used by the submission flow.
/// Wraps the Harvest REST API with auth headers and error triage.
#[derive(Clone)]
pub struct AtsClient {
    client: Client,
    base_url: String,
    auth_header: String,
    on_behalf_of: String,
}

impl AtsClient {
    pub fn new(base_url: String, api_key: &str, on_behalf_of: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            auth_header: basic_auth_header(api_key),
            on_behalf_of,
        }
    }

    /// POST /v1/candidates — creates a candidate with one application
    /// attached to the configured job.
    pub async fn create_candidate(
        &self,
        candidate: &NewCandidate,
    ) -> Result<CandidateCreated, AtsError> {
        let url = format!("{}/v1/candidates", self.base_url);
        let body = self.post_json(&url, candidate).await?;

        let created: CandidateCreated = serde_json::from_str(&body)
            .map_err(|e| AtsError::UnexpectedResponse(format!("candidate body: {e}")))?;

        debug!(candidate_id = created.id, "ATS candidate created");
        Ok(created)
    }

    /// POST /v1/applications/{id}/attachments — attaches a resume to an
    /// existing application. The response body carries no information we
    /// act on, so success is just a 2xx status.
    pub async fn attach_resume(
        &self,
        application_id: u64,
        attachment: &NewAttachment,
    ) -> Result<(), AtsError> {
        let url = format!(
            "{}/v1/applications/{}/attachments",
            self.base_url, application_id
        );
        self.post_json(&url, attachment).await?;

        debug!(application_id, "ATS resume attachment accepted");
        Ok(())
    }

    /// Shared POST path: sends a JSON body with the Harvest auth headers
    /// and triages the response status into the error taxonomy.
    async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        request_body: &T,
    ) -> Result<String, AtsError> {
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(ON_BEHALF_OF_HEADER, &self.on_behalf_of)
            .header(CONTENT_TYPE, "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AtsError::Auth {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            return Err(AtsError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(body)
    }
}

/// `Authorization: Basic base64(apiKey + ":")` — the Harvest convention of
/// Basic auth with the API key as username and an empty password.
fn basic_auth_header(api_key: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{api_key}:")))
}

fn classify_transport(e: reqwest::Error) -> AtsError {
    if e.is_timeout() {
        AtsError::Timeout
    } else if e.is_connect() {
        AtsError::Connect(e.to_string())
    } else {
        AtsError::Http(e)
    }
}

/// Pulls the first message out of a Harvest `{"errors":[{"message":...}]}`
/// body, falling back to the raw body when the shape doesn't match.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<AtsErrorBody>(body)
        .ok()
        .and_then(|e| e.errors.into_iter().next())
        .map(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header_empty_password() {
        // base64("my-api-key:")
        assert_eq!(basic_auth_header("my-api-key"), "Basic bXktYXBpLWtleTo=");
    }

    #[test]
    fn test_extract_error_message_harvest_shape() {
        let body = r#"{"errors":[{"message":"Invalid email address"}]}"#;
        assert_eq!(extract_error_message(body), "Invalid email address");
    }

    #[test]
    fn test_extract_error_message_fallback_to_raw_body() {
        let body = "upstream proxy error";
        assert_eq!(extract_error_message(body), "upstream proxy error");
    }
}
