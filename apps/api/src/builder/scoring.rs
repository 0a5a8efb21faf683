//! Live ATS scoring — the pure function behind the builder's instant score.
//!
//! Six independently-capped sub-scores (header 20, summary 15, experience 30,
//! skills 15, education 10, projects 10) sum to a 100-point budget. Each
//! category is clipped to its band *before* summation; the float sum is
//! rounded exactly once and never re-clipped. Recomputed in full on every
//! document mutation — no memoization, no prior-score state.
//!
//! This is a heuristic proxy for parseability/completeness, distinct from the
//! remote analyzer's AI score shown after submission.

use serde::{Deserialize, Serialize};

use crate::builder::models::{ResumeDocument, HEADER_FIELD_COUNT};

const HEADER_MAX: f64 = 20.0;
const SUMMARY_MAX: f64 = 15.0;
const EXPERIENCE_MAX: f64 = 30.0;
const EXPERIENCE_POINTS_PER_ENTRY: f64 = 15.0;
const SKILLS_MAX: f64 = 15.0;
const SKILLS_POINTS_PER_SKILL: f64 = 1.5;
const EDUCATION_MAX: f64 = 10.0;
const EDUCATION_POINTS_PER_ENTRY: f64 = 10.0;
const PROJECTS_MAX: f64 = 10.0;
const PROJECTS_POINTS_PER_ENTRY: f64 = 5.0;

/// Header warning threshold: fewer than 4 of 6 fields filled.
const HEADER_WARN_BELOW: usize = 4;
/// Info nudge until the combined skill count reaches 8.
const SKILLS_NUDGE_BELOW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub severity: Severity,
    pub message: String,
}

impl FeedbackItem {
    fn warning(message: &str) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.to_string(),
        }
    }

    fn info(message: &str) -> Self {
        Self {
            severity: Severity::Info,
            message: message.to_string(),
        }
    }
}

/// Result of one scoring pass: a rounded total in [0, 100] and the feedback
/// items in rule order (header → summary → experience → skills).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveScore {
    pub total_score: u32,
    pub feedback: Vec<FeedbackItem>,
}

/// Derives the live ATS score from a document snapshot.
///
/// Pure, total, and deterministic: no I/O, no error states, identical output
/// for identical input. Education and projects contribute points but never
/// feedback.
pub fn compute_live_score(doc: &ResumeDocument) -> LiveScore {
    let mut score = 0.0_f64;
    let mut feedback = Vec::new();

    // Header completeness (20 points)
    let filled = doc.header.filled_count();
    score += f64::min(
        HEADER_MAX,
        filled as f64 / HEADER_FIELD_COUNT as f64 * HEADER_MAX,
    );
    if filled < HEADER_WARN_BELOW {
        feedback.push(FeedbackItem::warning(
            "Complete your contact information for better ATS compatibility",
        ));
    }

    // Summary (15 points), banded on trimmed length
    let summary_len = doc.summary.trim().chars().count();
    if summary_len > 100 {
        score += SUMMARY_MAX;
    } else if summary_len > 50 {
        score += 10.0;
        feedback.push(FeedbackItem::info(
            "Good summary! Consider adding more specific achievements",
        ));
    } else if summary_len > 0 {
        score += 5.0;
        feedback.push(FeedbackItem::warning(
            "Expand your summary to 2-3 sentences for better impact",
        ));
    } else {
        feedback.push(FeedbackItem::warning(
            "Add a professional summary to introduce yourself",
        ));
    }

    // Experience (30 points)
    let valid_experience = doc.experience.iter().filter(|e| e.is_scorable()).count();
    score += f64::min(
        EXPERIENCE_MAX,
        valid_experience as f64 * EXPERIENCE_POINTS_PER_ENTRY,
    );
    if valid_experience == 0 {
        feedback.push(FeedbackItem::warning(
            "Add at least one work experience with detailed descriptions",
        ));
    }

    // Skills (15 points)
    let total_skills = doc.skills.total();
    score += f64::min(SKILLS_MAX, total_skills as f64 * SKILLS_POINTS_PER_SKILL);
    if total_skills < SKILLS_NUDGE_BELOW {
        feedback.push(FeedbackItem::info(
            "Add more relevant skills to increase keyword matching",
        ));
    }

    // Education (10 points) — no feedback for this category
    let valid_education = doc.education.iter().filter(|e| e.is_scorable()).count();
    score += f64::min(
        EDUCATION_MAX,
        valid_education as f64 * EDUCATION_POINTS_PER_ENTRY,
    );

    // Projects (10 points) — no feedback for this category
    let valid_projects = doc.projects.iter().filter(|p| p.is_scorable()).count();
    score += f64::min(
        PROJECTS_MAX,
        valid_projects as f64 * PROJECTS_POINTS_PER_ENTRY,
    );

    LiveScore {
        total_score: score.round() as u32,
        feedback,
    }
}
