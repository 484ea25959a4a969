//! Flattened analysis records for JSON output

use crate::history::HistoryEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One analysis flattened for machine-readable output. The nested shape of a
/// stored entry is an implementation detail; exports keep a stable, flat
/// field set.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub role_id: String,
    pub role_name: String,
    pub resume_name: String,
    pub match_percentage: u32,
    pub ats_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub detailed_feedback: Option<String>,
    pub is_ai_powered: bool,
}

impl ExportRecord {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            timestamp: entry.timestamp,
            role_id: entry.role_id.clone(),
            role_name: entry.role_name.clone(),
            resume_name: entry.resume_name.clone(),
            match_percentage: entry.result.match_percentage,
            ats_score: entry.result.ats_score,
            matched_skills: entry.result.matched_skills.clone(),
            missing_skills: entry.result.missing_skills.clone(),
            suggestions: entry.result.suggestions.clone(),
            detailed_feedback: entry.result.detailed_feedback.clone(),
            is_ai_powered: entry.result.is_ai_powered,
        }
    }

    /// Scalar fields in display order, for tabular console output.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.clone()),
            ("Date", self.timestamp.format("%Y-%m-%d %H:%M UTC").to_string()),
            ("Role", self.role_name.clone()),
            ("Resume", self.resume_name.clone()),
            ("Match", format!("{}%", self.match_percentage)),
            ("ATS score", format!("{}/100", self.ats_score)),
            (
                "Source",
                if self.is_ai_powered { "AI analysis" } else { "heuristic" }.to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisResult;
    use chrono::TimeZone;

    #[test]
    fn test_flattens_nested_result() {
        let entry = HistoryEntry {
            id: "analysis_1_abcdefghi".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).unwrap(),
            role_id: "backend".to_string(),
            role_name: "Backend Engineer".to_string(),
            resume_name: "My Resume".to_string(),
            result: AnalysisResult {
                match_percentage: 63,
                ats_score: 71,
                matched_skills: vec!["SQL".to_string()],
                missing_skills: vec!["Docker".to_string()],
                suggestions: vec!["tip".to_string()],
                detailed_feedback: Some("solid".to_string()),
                is_ai_powered: true,
            },
        };

        let record = ExportRecord::from_entry(&entry);
        assert_eq!(record.match_percentage, 63);
        assert_eq!(record.matched_skills, vec!["SQL"]);
        assert_eq!(record.detailed_feedback.as_deref(), Some("solid"));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["role_id"], "backend");
        assert_eq!(json["is_ai_powered"], true);

        let fields = record.fields();
        assert_eq!(fields[4], ("Match", "63%".to_string()));
        assert_eq!(fields[6].1, "AI analysis");
    }
}
