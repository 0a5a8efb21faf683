/// Analyzer client — the single point of entry for calls to the external
/// resume analysis service.
///
/// ARCHITECTURAL RULE: no other module may talk to the analyzer backend
/// directly. Handlers go through the `ResumeAnalyzer` trait object held in
/// `AppState`, so the HTTP backend can be swapped (or faked in tests)
/// without touching caller code.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

pub mod handlers;
pub mod models;

use crate::builder::models::ResumeDocument;
use crate::errors::AppError;
use models::{AnalysisReport, AssistantReply};

/// Upstream endpoint paths, fixed by the analyzer service.
const ANALYZE_WITH_JD_PATH: &str = "/analyze-resume-file";
const ANALYZE_QUICK_PATH: &str = "/analyze-resume-quick";
const ASSISTANT_PATH: &str = "/ai-assistant";

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analyzer returned status {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<AnalyzerError> for AppError {
    fn from(err: AnalyzerError) -> Self {
        AppError::Analyzer(err.to_string())
    }
}

/// An uploaded resume file, forwarded verbatim — parsing is the analyzer's
/// job, not ours.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Optional job description accompanying an analysis request.
#[derive(Debug, Clone)]
pub enum JobDescription {
    Text(String),
    File { file_name: String, bytes: Bytes },
}

/// Picks the upstream endpoint: quick analysis when no job description was
/// supplied, the full comparison endpoint otherwise.
fn analyze_path(job_description: Option<&JobDescription>) -> &'static str {
    if job_description.is_some() {
        ANALYZE_WITH_JD_PATH
    } else {
        ANALYZE_QUICK_PATH
    }
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume: ResumeUpload,
        job_description: Option<JobDescription>,
    ) -> Result<AnalysisReport, AnalyzerError>;

    async fn assist(
        &self,
        message: &str,
        resume_data: Option<&ResumeDocument>,
    ) -> Result<AssistantReply, AnalyzerError>;
}

/// Default `ResumeAnalyzer` over the real HTTP backend.
#[derive(Clone)]
pub struct HttpAnalyzer {
    client: Client,
    base_url: String,
}

impl HttpAnalyzer {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ResumeAnalyzer for HttpAnalyzer {
    async fn analyze(
        &self,
        resume: ResumeUpload,
        job_description: Option<JobDescription>,
    ) -> Result<AnalysisReport, AnalyzerError> {
        let path = analyze_path(job_description.as_ref());
        debug!(
            file = %resume.file_name,
            endpoint = path,
            "Forwarding resume to analyzer"
        );

        let mut form = Form::new().part(
            "resume_file",
            Part::bytes(resume.bytes.to_vec()).file_name(resume.file_name),
        );
        match job_description {
            Some(JobDescription::Text(text)) => {
                form = form.text("job_description_text", text);
            }
            Some(JobDescription::File { file_name, bytes }) => {
                form = form.part(
                    "job_description_file",
                    Part::bytes(bytes.to_vec()).file_name(file_name),
                );
            }
            None => {}
        }

        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<AnalysisReport>().await?)
    }

    async fn assist(
        &self,
        message: &str,
        resume_data: Option<&ResumeDocument>,
    ) -> Result<AssistantReply, AnalyzerError> {
        let body = json!({
            "message": message,
            "resume_data": resume_data,
        });

        let response = self
            .client
            .post(self.url(ASSISTANT_PATH))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<AssistantReply>().await?)
    }
}
