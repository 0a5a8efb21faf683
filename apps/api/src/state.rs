use std::sync::Arc;

use crate::analyzer::ResumeAnalyzer;
use crate::builder::sessions::SessionStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory builder sessions. Nothing outlives the process.
    pub sessions: SessionStore,
    /// Pluggable analyzer backend. Default: HttpAnalyzer against ANALYZER_BASE_URL.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    #[allow(dead_code)]
    pub config: Config,
}
