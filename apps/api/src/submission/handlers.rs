use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;
use crate::submission::flow::{self, ResumeOutcome};
use crate::submission::form::ApplicationSubmission;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(rename = "candidateId", skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
}

/// POST /api/submit_application
///
/// Accepts the multipart form submission and proxies it to the ATS. A
/// failed resume attachment still returns success — the candidate exists
/// upstream — and is reported in the logs only.
pub async fn handle_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    let submission = ApplicationSubmission::from_multipart(multipart).await?;

    let outcome = flow::submit(&state.ats, &state.config.ats_job_id, &submission).await?;

    if outcome.resume == ResumeOutcome::Failed {
        warn!(
            candidate_id = outcome.candidate_id,
            "Submission completed without resume attachment"
        );
    }

    Ok(Json(SubmitResponse {
        success: true,
        candidate_id: Some(outcome.candidate_id.to_string()),
    }))
}
