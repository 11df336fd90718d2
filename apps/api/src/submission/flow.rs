//! The two-step proxy flow: create the candidate, then attach the resume.
//!
//! The attachment call is causally dependent on the candidate call — the
//! application id it targets only exists once the first call has returned.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::{error, info};

use crate::ats::{AtsClient, AtsError, NewAttachment};
use crate::submission::form::ApplicationSubmission;

/// Content type sent upstream when the uploading client declared none.
const FALLBACK_RESUME_TYPE: &str = "application/pdf";

/// What happened to the resume after the candidate was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeOutcome {
    Attached,
    /// The attachment call failed. The candidate record already exists
    /// upstream, so this is a partial failure, not a request failure.
    Failed,
    NotProvided,
}

#[derive(Debug)]
pub struct SubmissionOutcome {
    pub candidate_id: u64,
    pub resume: ResumeOutcome,
}

/// Runs one submission through the ATS. Step 2 only runs if step 1
/// succeeded and the response named at least one application.
pub async fn submit(
    ats: &AtsClient,
    job_id: &str,
    submission: &ApplicationSubmission,
) -> Result<SubmissionOutcome, AtsError> {
    let candidate = ats
        .create_candidate(&submission.to_candidate(job_id))
        .await?;

    let application_id = candidate.first_application_id().ok_or_else(|| {
        AtsError::UnexpectedResponse("candidate response contained no applications".to_string())
    })?;

    info!(
        candidate_id = candidate.id,
        application_id, "Candidate created"
    );

    let resume = match &submission.resume {
        None => ResumeOutcome::NotProvided,
        Some(file) => {
            let attachment = NewAttachment {
                filename: file.filename.clone(),
                kind: "resume",
                content_type: file
                    .content_type
                    .clone()
                    .unwrap_or_else(|| FALLBACK_RESUME_TYPE.to_string()),
                content: BASE64.encode(&file.bytes),
            };
            match ats.attach_resume(application_id, &attachment).await {
                Ok(()) => ResumeOutcome::Attached,
                Err(e) => {
                    error!(
                        candidate_id = candidate.id,
                        application_id, "Resume attachment failed: {e}"
                    );
                    ResumeOutcome::Failed
                }
            }
        }
    };

    Ok(SubmissionOutcome {
        candidate_id: candidate.id,
        resume,
    })
}
