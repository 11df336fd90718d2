use crate::ats::AtsClient;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub ats: AtsClient,
    pub config: Config,
}
