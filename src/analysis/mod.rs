//! Heuristic analysis pipeline: matching, scoring, and suggestions

pub mod matcher;
pub mod scorer;
pub mod suggestions;

use serde::{Deserialize, Serialize};

/// Outcome of one resume analysis.
///
/// `matched_skills` and `missing_skills` together always cover the role's
/// required skills exactly, with no overlap, regardless of whether the
/// result came from the heuristic pipeline or the AI path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percentage: u32,
    pub ats_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    /// Free-text feedback, present only on AI-derived results.
    pub detailed_feedback: Option<String>,
    /// Provenance: true when the result came from the language-model path.
    pub is_ai_powered: bool,
}
