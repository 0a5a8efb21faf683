//! In-memory builder sessions.
//!
//! A session holds one [`ResumeDocument`], the skill scratch buffers, and the
//! last computed [`LiveScore`]. Nothing is persisted: sessions live in a
//! `RwLock<HashMap>` inside `AppState` and vanish on delete or process exit.
//! Every mutating access re-runs the scoring engine before the updated
//! session is returned, so callers never observe a stale score.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::builder::document::DocumentError;
use crate::builder::models::{ResumeDocument, SkillKind};
use crate::builder::scoring::{compute_live_score, LiveScore};

/// Pending skill input text. Transient UI state — deliberately outside
/// [`ResumeDocument`] so the scoring engine never sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillDrafts {
    pub technical: String,
    pub soft: String,
}

impl SkillDrafts {
    pub fn get(&self, kind: SkillKind) -> &str {
        match kind {
            SkillKind::Technical => &self.technical,
            SkillKind::Soft => &self.soft,
        }
    }

    pub fn set(&mut self, kind: SkillKind, text: String) {
        match kind {
            SkillKind::Technical => self.technical = text,
            SkillKind::Soft => self.soft = text,
        }
    }

    pub fn clear(&mut self, kind: SkillKind) {
        self.set(kind, String::new());
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeSession {
    pub id: Uuid,
    pub document: ResumeDocument,
    pub drafts: SkillDrafts,
    pub score: LiveScore,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeSession {
    fn new() -> Self {
        let document = ResumeDocument::default();
        let score = compute_live_score(&document);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            document,
            drafts: SkillDrafts::default(),
            score,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Handle to the shared in-memory session map. Cheap to clone; lives in
/// `AppState`.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ResumeSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a fully blank document and its initial score.
    pub fn create(&self) -> ResumeSession {
        let session = ResumeSession::new();
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: Uuid) -> Option<ResumeSession> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Discards a session. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Applies a mutation under the write lock, then recomputes the live
    /// score from scratch and bumps `updated_at`. `None` when the session
    /// does not exist; the inner `Result` carries document-contract errors
    /// (in which case the session is left as the mutation left it — failed
    /// guards never partially apply).
    pub fn mutate<F>(&self, id: Uuid, mutation: F) -> Option<Result<ResumeSession, DocumentError>>
    where
        F: FnOnce(&mut ResumeSession) -> Result<(), DocumentError>,
    {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.get_mut(&id)?;
        if let Err(err) = mutation(session) {
            return Some(Err(err));
        }
        session.score = compute_live_score(&session.document);
        session.updated_at = Utc::now();
        Some(Ok(session.clone()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
