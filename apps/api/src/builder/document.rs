//! Guarded mutation operations on [`ResumeDocument`].
//!
//! The list-valued sections (education, experience, projects, certifications)
//! carry a minimum-length-1 invariant: removal is rejected when exactly one
//! entry remains, so a document always has a blank template to edit. The
//! guard lives here rather than in the UI layer.

use thiserror::Error;

use crate::builder::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, ListSection, ProjectEntry,
    ResumeDocument, SectionUpdate, SkillKind,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("cannot remove the last {0} entry")]
    LastEntry(ListSection),

    #[error("no {section} entry at index {index}")]
    EntryOutOfBounds { section: ListSection, index: usize },

    #[error("no {kind} skill at index {index}")]
    SkillOutOfBounds { kind: SkillKind, index: usize },
}

impl ResumeDocument {
    /// Replaces a non-list section wholesale. No validation beyond shape;
    /// blank values are legal document states.
    pub fn apply_section(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Header(header) => self.header = header,
            SectionUpdate::Summary(summary) => self.summary = summary,
            SectionUpdate::Skills(skills) => self.skills = skills,
        }
    }

    /// Appends a fresh blank template entry to the given list section.
    pub fn add_entry(&mut self, section: ListSection) {
        match section {
            ListSection::Education => self.education.push(EducationEntry::default()),
            ListSection::Experience => self.experience.push(ExperienceEntry::default()),
            ListSection::Projects => self.projects.push(ProjectEntry::default()),
            ListSection::Certifications => self.certifications.push(CertificationEntry::default()),
        }
    }

    /// Removes the entry at `index`, rejecting the removal that would empty
    /// the list.
    pub fn remove_entry(&mut self, section: ListSection, index: usize) -> Result<(), DocumentError> {
        let len = self.section_len(section);
        if index >= len {
            return Err(DocumentError::EntryOutOfBounds { section, index });
        }
        if len == 1 {
            return Err(DocumentError::LastEntry(section));
        }
        match section {
            ListSection::Education => {
                self.education.remove(index);
            }
            ListSection::Experience => {
                self.experience.remove(index);
            }
            ListSection::Projects => {
                self.projects.remove(index);
            }
            ListSection::Certifications => {
                self.certifications.remove(index);
            }
        }
        Ok(())
    }

    /// Appends a trimmed skill. Blank or whitespace-only input is a no-op;
    /// returns whether anything was added.
    pub fn add_skill(&mut self, kind: SkillKind, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match kind {
            SkillKind::Technical => self.skills.technical.push(trimmed.to_string()),
            SkillKind::Soft => self.skills.soft.push(trimmed.to_string()),
        }
        true
    }

    /// Removes the skill at `index`. Skill lists have no minimum length.
    pub fn remove_skill(&mut self, kind: SkillKind, index: usize) -> Result<(), DocumentError> {
        let list = match kind {
            SkillKind::Technical => &mut self.skills.technical,
            SkillKind::Soft => &mut self.skills.soft,
        };
        if index >= list.len() {
            return Err(DocumentError::SkillOutOfBounds { kind, index });
        }
        list.remove(index);
        Ok(())
    }

    fn section_len(&self, section: ListSection) -> usize {
        match section {
            ListSection::Education => self.education.len(),
            ListSection::Experience => self.experience.len(),
            ListSection::Projects => self.projects.len(),
            ListSection::Certifications => self.certifications.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::models::{Header, SkillSet};

    #[test]
    fn test_apply_section_replaces_header_wholesale() {
        let mut doc = ResumeDocument::default();
        doc.header.email = "old@example.com".to_string();
        doc.apply_section(SectionUpdate::Header(Header {
            full_name: "Ada".to_string(),
            ..Header::default()
        }));
        assert_eq!(doc.header.full_name, "Ada");
        assert!(doc.header.email.is_empty());
    }

    #[test]
    fn test_apply_section_replaces_skills() {
        let mut doc = ResumeDocument::default();
        doc.apply_section(SectionUpdate::Skills(SkillSet {
            technical: vec!["rust".to_string()],
            soft: vec![],
        }));
        assert_eq!(doc.skills.technical, vec!["rust".to_string()]);
    }

    #[test]
    fn test_add_entry_appends_blank_template() {
        let mut doc = ResumeDocument::default();
        doc.add_entry(ListSection::Experience);
        assert_eq!(doc.experience.len(), 2);
        assert!(doc.experience[1].title.is_empty());
        assert_eq!(doc.experience[1].achievements, vec![String::new()]);
    }

    #[test]
    fn test_remove_last_entry_is_rejected() {
        let mut doc = ResumeDocument::default();
        let err = doc.remove_entry(ListSection::Education, 0).unwrap_err();
        assert_eq!(err, DocumentError::LastEntry(ListSection::Education));
        assert_eq!(doc.education.len(), 1);
    }

    #[test]
    fn test_remove_entry_succeeds_above_minimum() {
        let mut doc = ResumeDocument::default();
        doc.add_entry(ListSection::Projects);
        doc.projects[0].title = "keep-me-not".to_string();
        doc.remove_entry(ListSection::Projects, 0).unwrap();
        assert_eq!(doc.projects.len(), 1);
        assert!(doc.projects[0].title.is_empty());
    }

    #[test]
    fn test_remove_entry_out_of_bounds() {
        let mut doc = ResumeDocument::default();
        doc.add_entry(ListSection::Certifications);
        let err = doc
            .remove_entry(ListSection::Certifications, 5)
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::EntryOutOfBounds {
                section: ListSection::Certifications,
                index: 5
            }
        );
    }

    #[test]
    fn test_add_skill_trims_input() {
        let mut doc = ResumeDocument::default();
        assert!(doc.add_skill(SkillKind::Technical, "  React  "));
        assert_eq!(doc.skills.technical, vec!["React".to_string()]);
    }

    #[test]
    fn test_add_blank_skill_is_noop() {
        let mut doc = ResumeDocument::default();
        assert!(!doc.add_skill(SkillKind::Technical, "   "));
        assert!(doc.skills.technical.is_empty());
    }

    #[test]
    fn test_skill_add_remove_round_trip() {
        let mut doc = ResumeDocument::default();
        let before = doc.skills.technical.clone();
        doc.add_skill(SkillKind::Technical, "  React  ");
        doc.remove_skill(SkillKind::Technical, 0).unwrap();
        assert_eq!(doc.skills.technical, before);
    }

    #[test]
    fn test_remove_skill_has_no_minimum() {
        let mut doc = ResumeDocument::default();
        doc.add_skill(SkillKind::Soft, "communication");
        doc.remove_skill(SkillKind::Soft, 0).unwrap();
        assert!(doc.skills.soft.is_empty());
    }

    #[test]
    fn test_remove_skill_out_of_bounds() {
        let mut doc = ResumeDocument::default();
        let err = doc.remove_skill(SkillKind::Soft, 0).unwrap_err();
        assert_eq!(
            err,
            DocumentError::SkillOutOfBounds {
                kind: SkillKind::Soft,
                index: 0
            }
        );
    }
}
