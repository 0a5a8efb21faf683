//! Wire types for the external analysis service.
//!
//! These shapes are a fixed contract with the remote analyzer — field names
//! must stay exactly as the service emits them (camelCase at the top level,
//! snake_case inside the breakdown), hence the explicit renames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "totalScore")]
    pub total_score: i64,
    #[serde(rename = "scoreCategory")]
    pub score_category: String,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
    #[serde(rename = "skillsAnalysis")]
    pub skills_analysis: SkillsAnalysis,
    #[serde(rename = "detectedSections")]
    pub detected_sections: DetectedSections,
    pub suggestions: Vec<String>,
    #[serde(rename = "markdownReport")]
    pub markdown_report: String,
    #[serde(rename = "hasJobDescription")]
    pub has_job_description: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ai_base_score: i64,
    pub section_bonus: i64,
    pub content_bonus: i64,
    pub formatting_penalty: i64,
    pub suggestion_penalty: i64,
    pub missing_section_penalty: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
    #[serde(rename = "keywordMatchPercentage")]
    pub keyword_match_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedSections {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_report_decodes_contract_field_names() {
        let body = json!({
            "totalScore": 72,
            "scoreCategory": "Good",
            "scoreBreakdown": {
                "ai_base_score": 65,
                "section_bonus": 12,
                "content_bonus": 2,
                "formatting_penalty": 5,
                "suggestion_penalty": 0,
                "missing_section_penalty": 2
            },
            "skillsAnalysis": {
                "matchedKeywords": ["rust", "sql"],
                "keywordMatchPercentage": 66.7
            },
            "detectedSections": {
                "present": ["Contact Info", "Skills"],
                "missing": ["Certifications"]
            },
            "suggestions": ["Add quantified achievements"],
            "markdownReport": "# Report",
            "hasJobDescription": true
        });

        let report: AnalysisReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.total_score, 72);
        assert_eq!(report.score_breakdown.section_bonus, 12);
        assert_eq!(report.skills_analysis.matched_keywords.len(), 2);
        assert_eq!(report.detected_sections.missing, vec!["Certifications"]);
        assert!(report.has_job_description);
    }

    #[test]
    fn test_analysis_report_round_trips_renames() {
        let report = AnalysisReport {
            total_score: 40,
            score_category: "Fair".to_string(),
            score_breakdown: ScoreBreakdown {
                ai_base_score: 50,
                section_bonus: 6,
                content_bonus: 0,
                formatting_penalty: 10,
                suggestion_penalty: 5,
                missing_section_penalty: 1,
            },
            skills_analysis: SkillsAnalysis {
                matched_keywords: vec![],
                keyword_match_percentage: 0.0,
            },
            detected_sections: DetectedSections {
                present: vec![],
                missing: vec![],
            },
            suggestions: vec![],
            markdown_report: String::new(),
            has_job_description: false,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("totalScore").is_some());
        assert!(value.get("hasJobDescription").is_some());
        assert!(value["scoreBreakdown"].get("ai_base_score").is_some());
    }
}
