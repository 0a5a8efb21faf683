use serde::{Deserialize, Serialize};

/// Contact header. All six fields are individually optional; completeness is
/// measured by how many are non-blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

pub const HEADER_FIELD_COUNT: usize = 6;

impl Header {
    /// Number of non-blank header fields (out of [`HEADER_FIELD_COUNT`]).
    pub fn filled_count(&self) -> usize {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.linkedin,
            &self.github,
            &self.location,
        ]
        .iter()
        .filter(|f| !f.trim().is_empty())
        .count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub gpa: String,
    pub coursework: String,
}

impl EducationEntry {
    /// An entry counts toward the education sub-score when both degree and
    /// institution are filled.
    pub fn is_scorable(&self) -> bool {
        !self.degree.trim().is_empty() && !self.institution.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            duration: String::new(),
            description: String::new(),
            // Fresh entries start with one blank achievement line.
            achievements: vec![String::new()],
        }
    }
}

impl ExperienceEntry {
    /// An entry counts toward the experience sub-score when title, company,
    /// and description are all filled.
    pub fn is_scorable(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.company.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillSet {
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
    pub duration: String,
}

impl ProjectEntry {
    pub fn is_scorable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

/// The single mutable aggregate the live scoring engine reads.
///
/// Every list field holds at least one (possibly blank) entry at all times;
/// the guarded mutators in `document.rs` are the only way sessions change it.
/// The skill scratch buffers are deliberately NOT here — they are transient
/// UI state carried on the session (`SkillDrafts`), invisible to scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub header: Header,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            header: Header::default(),
            summary: String::new(),
            education: vec![EducationEntry::default()],
            experience: vec![ExperienceEntry::default()],
            skills: SkillSet::default(),
            projects: vec![ProjectEntry::default()],
            certifications: vec![CertificationEntry::default()],
        }
    }
}

/// The four list-valued sections subject to the minimum-length-1 invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSection {
    Education,
    Experience,
    Projects,
    Certifications,
}

impl ListSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSection::Education => "education",
            ListSection::Experience => "experience",
            ListSection::Projects => "projects",
            ListSection::Certifications => "certifications",
        }
    }
}

impl std::fmt::Display for ListSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Technical,
    Soft,
}

impl SkillKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillKind::Technical => "technical",
            SkillKind::Soft => "soft",
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wholesale replacement payload for the three non-list sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "snake_case")]
pub enum SectionUpdate {
    Header(Header),
    Summary(String),
    Skills(SkillSet),
}
