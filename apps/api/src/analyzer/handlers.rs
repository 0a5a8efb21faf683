use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::analyzer::models::{AnalysisReport, AssistantReply};
use crate::analyzer::{JobDescription, ResumeUpload};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Multipart intake matching the analyzer's form contract: `resume_file`
/// (required) plus at most one of `job_description_file` /
/// `job_description_text`. A file takes precedence over text; blank text is
/// treated as absent. The bytes are forwarded untouched.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume: Option<ResumeUpload> = None;
    let mut jd_file: Option<JobDescription> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume_file" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume file: {e}")))?;
                resume = Some(ResumeUpload { file_name, bytes });
            }
            "job_description_file" => {
                let file_name = field.file_name().unwrap_or("job_description").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job description file: {e}"))
                })?;
                jd_file = Some(JobDescription::File { file_name, bytes });
            }
            "job_description_text" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job description text: {e}"))
                })?;
                if !text.trim().is_empty() {
                    jd_text = Some(text.trim().to_string());
                }
            }
            // Unknown fields are ignored, not rejected.
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("resume_file is required".to_string()))?;
    if resume.bytes.is_empty() {
        return Err(AppError::Validation("resume_file is empty".to_string()));
    }

    let job_description = jd_file.or(jd_text.map(JobDescription::Text));
    let report = state.analyzer.analyze(resume, job_description).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
    /// Builder session to inline as `resume_data` context, if any.
    pub session_id: Option<Uuid>,
}

/// POST /api/v1/assistant
pub async fn handle_assistant(
    State(state): State<AppState>,
    Json(req): Json<AssistantRequest>,
) -> Result<Json<AssistantReply>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be blank".to_string()));
    }

    let document = match req.session_id {
        Some(id) => {
            let session = state
                .sessions
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
            Some(session.document)
        }
        None => None,
    };

    let reply = state
        .analyzer
        .assist(req.message.trim(), document.as_ref())
        .await?;
    Ok(Json(reply))
}
