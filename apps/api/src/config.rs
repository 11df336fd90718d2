use anyhow::{Context, Result};

const DEFAULT_ATS_BASE_URL: &str = "https://harvest.greenhouse.io";

/// Application configuration loaded from environment variables.
/// The job id and the on-behalf-of actor id are configuration,
/// never compiled-in literals.
#[derive(Debug, Clone)]
pub struct Config {
    pub ats_api_key: String,
    pub ats_base_url: String,
    pub ats_job_id: String,
    pub ats_on_behalf_of: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ats_api_key: require_env("ATS_API_KEY")?,
            ats_base_url: std::env::var("ATS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ATS_BASE_URL.to_string()),
            ats_job_id: require_env("ATS_JOB_ID")?,
            ats_on_behalf_of: require_env("ATS_ON_BEHALF_OF")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
