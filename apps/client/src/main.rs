mod form;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::form::SubmissionForm;

const SUCCESS_NOTICE: &str = "Application submitted successfully! We'll be in touch soon.";
const ERROR_NOTICE: &str = "There was an error submitting your application. Please try again.";

/// Submit a job application to the intake endpoint.
#[derive(Debug, Parser)]
#[command(name = "apply", version)]
struct Args {
    /// Intake endpoint to post the application to
    #[arg(
        long,
        default_value = "http://localhost:8080/api/submit_application",
        value_name = "URL"
    )]
    endpoint: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    location: String,

    #[arg(long, default_value = "")]
    cover_letter: String,

    #[arg(long, default_value = "")]
    current_company: String,

    #[arg(long, default_value = "")]
    current_title: String,

    #[arg(long, default_value = "")]
    website_url: String,

    #[arg(long, default_value = "")]
    linkedin_url: String,

    /// Path to the resume file (required)
    #[arg(long, value_name = "FILE")]
    resume: PathBuf,
}

impl Args {
    fn into_form(self) -> SubmissionForm {
        SubmissionForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            cover_letter: self.cover_letter,
            current_company: self.current_company,
            current_title: self.current_title,
            website_url: self.website_url,
            linkedin_url: self.linkedin_url,
            resume_path: self.resume,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let endpoint = args.endpoint.clone();
    let form = args.into_form();

    // Local validation: no resume, no network call.
    let resume = match form.read_resume() {
        Ok(resume) => resume,
        Err(e) => {
            error!("Resume validation failed: {e:#}");
            eprintln!("{ERROR_NOTICE}");
            return ExitCode::FAILURE;
        }
    };

    match submit(&endpoint, form, resume).await {
        Ok(()) => {
            println!("{SUCCESS_NOTICE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Any transport error surfaces as the same generic notice.
            error!("Submission failed: {e:#}");
            eprintln!("{ERROR_NOTICE}");
            ExitCode::FAILURE
        }
    }
}

async fn submit(
    endpoint: &str,
    form: SubmissionForm,
    resume: form::ResumeUpload,
) -> anyhow::Result<()> {
    let multipart = form.into_multipart(resume)?;

    let response = reqwest::Client::new()
        .post(endpoint)
        .multipart(multipart)
        .send()
        .await?;

    // A non-success status is reported without reading the body; the
    // proxy never returns user-facing detail anyway.
    if !response.status().is_success() {
        anyhow::bail!("endpoint returned status {}", response.status());
    }
    Ok(())
}
