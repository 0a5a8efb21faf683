use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::builder::document::DocumentError;
use crate::builder::models::{ListSection, SectionUpdate, SkillKind};
use crate::builder::scoring::LiveScore;
use crate::builder::sessions::ResumeSession;
use crate::errors::AppError;
use crate::state::AppState;

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// Runs a mutation against one session and returns the re-scored result.
fn mutate_session<F>(state: &AppState, id: Uuid, mutation: F) -> Result<Json<ResumeSession>, AppError>
where
    F: FnOnce(&mut ResumeSession) -> Result<(), DocumentError>,
{
    let session = state
        .sessions
        .mutate(id, mutation)
        .ok_or_else(|| session_not_found(id))??;
    Ok(Json(session))
}

/// POST /api/v1/resumes
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<ResumeSession>) {
    let session = state.sessions.create();
    tracing::info!(session_id = %session.id, "Builder session created");
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeSession>, AppError> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session))
}

/// GET /api/v1/resumes/:id/score
pub async fn handle_get_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LiveScore>, AppError> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session.score))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// PUT /api/v1/resumes/:id/section
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<SectionUpdate>,
) -> Result<Json<ResumeSession>, AppError> {
    mutate_session(&state, id, |session| {
        session.document.apply_section(update);
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub section: ListSection,
}

/// POST /api/v1/resumes/:id/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<ResumeSession>, AppError> {
    mutate_session(&state, id, |session| {
        session.document.add_entry(req.section);
        Ok(())
    })
}

/// DELETE /api/v1/resumes/:id/entries/:section/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, ListSection, usize)>,
) -> Result<Json<ResumeSession>, AppError> {
    mutate_session(&state, id, |session| {
        session.document.remove_entry(section, index)
    })
}

#[derive(Debug, Deserialize)]
pub struct SkillDraftRequest {
    pub kind: SkillKind,
    pub text: String,
}

/// PUT /api/v1/resumes/:id/skills/draft
///
/// Syncs a scratch input buffer. Draft text is UI state outside the scored
/// document, so the score is unchanged by this call (still recomputed, same
/// input, same output).
pub async fn handle_update_skill_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillDraftRequest>,
) -> Result<Json<ResumeSession>, AppError> {
    mutate_session(&state, id, |session| {
        session.drafts.set(req.kind, req.text);
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub kind: SkillKind,
    /// Explicit skill text; falls back to the stored draft buffer when absent.
    pub text: Option<String>,
}

/// POST /api/v1/resumes/:id/skills
///
/// Appends the trimmed skill and clears the matching draft buffer. Blank or
/// whitespace-only input is a no-op on the list (the draft is still cleared).
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<ResumeSession>, AppError> {
    mutate_session(&state, id, |session| {
        let text = req
            .text
            .unwrap_or_else(|| session.drafts.get(req.kind).to_string());
        session.document.add_skill(req.kind, &text);
        session.drafts.clear(req.kind);
        Ok(())
    })
}

/// DELETE /api/v1/resumes/:id/skills/:kind/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, kind, index)): Path<(Uuid, SkillKind, usize)>,
) -> Result<Json<ResumeSession>, AppError> {
    mutate_session(&state, id, |session| session.document.remove_skill(kind, index))
}
