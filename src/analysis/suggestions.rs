//! Actionable suggestion generation from analysis gaps

use crate::config::{ScoringConfig, SuggestionConfig};
use unicode_segmentation::UnicodeSegmentation;

/// Generic best-practice pool used to pad the suggestion list up to the
/// policy count. Ordered by usefulness; entries are distinct from every
/// generated specific suggestion.
const GENERIC_SUGGESTIONS: [&str; 7] = [
    "Start bullet points with strong action verbs like 'built', 'led', or 'shipped'",
    "Quantify achievements with concrete numbers, percentages, or timeframes",
    "Tailor your resume keywords to each job posting you apply for",
    "Keep formatting simple: standard fonts, clear headings, no tables or graphics",
    "Proofread carefully; typos are a common reason resumes get discarded",
    "List your most recent and relevant experience first",
    "Include links to your portfolio, GitHub, or published work where relevant",
];

#[derive(Clone)]
pub struct SuggestionGenerator {
    policy: SuggestionConfig,
    scoring: ScoringConfig,
}

impl SuggestionGenerator {
    pub fn new(policy: SuggestionConfig, scoring: ScoringConfig) -> Self {
        Self { policy, scoring }
    }

    /// Produce exactly `policy.count` distinct suggestions: missing skills
    /// first in their declaration order, a structural suggestion when the
    /// ATS score is below the threshold, generic advice as padding.
    pub fn suggest(&self, missing: &[String], resume_text: &str, ats_score: u32) -> Vec<String> {
        let count = self.policy.count;
        let mut suggestions: Vec<String> = Vec::with_capacity(count);

        let structural = if ats_score < self.policy.ats_threshold {
            Some(self.structural_advice(resume_text))
        } else {
            None
        };

        // Reserve one slot for the structural suggestion when it applies.
        let skill_slots = if structural.is_some() {
            count.saturating_sub(1)
        } else {
            count
        };
        for skill in missing.iter().take(skill_slots) {
            suggestions.push(format!(
                "Add evidence of {} experience, ideally in your skills and work history sections",
                skill
            ));
        }

        if let Some(advice) = structural {
            if !suggestions.contains(&advice) {
                suggestions.push(advice);
            }
        }

        for generic in GENERIC_SUGGESTIONS {
            if suggestions.len() >= count {
                break;
            }
            let generic = generic.to_string();
            if !suggestions.contains(&generic) {
                suggestions.push(generic);
            }
        }

        suggestions.truncate(count);
        suggestions
    }

    /// Pad an externally produced list (e.g. from the AI path) up to the
    /// policy count, dropping duplicates and overflow.
    pub fn pad(&self, mut suggestions: Vec<String>) -> Vec<String> {
        let count = self.policy.count;
        suggestions.retain(|s| !s.trim().is_empty());
        dedup_preserving_order(&mut suggestions);
        suggestions.truncate(count);

        for generic in GENERIC_SUGGESTIONS {
            if suggestions.len() >= count {
                break;
            }
            let generic = generic.to_string();
            if !suggestions.contains(&generic) {
                suggestions.push(generic);
            }
        }
        suggestions
    }

    /// Name the weakest structural aspect: length first, formatting advice
    /// otherwise.
    fn structural_advice(&self, resume_text: &str) -> String {
        let word_count = resume_text.unicode_words().count();
        if word_count < self.scoring.min_words {
            format!(
                "Your resume is on the short side ({} words); expand your experience and project descriptions",
                word_count
            )
        } else if word_count > self.scoring.max_words {
            format!(
                "Your resume is long ({} words); trim older or less relevant entries to keep it focused",
                word_count
            )
        } else {
            "Use clear section headers (Summary, Experience, Education, Skills) so screening software can parse your resume".to_string()
        }
    }
}

fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn generator() -> SuggestionGenerator {
        let config = Config::default();
        SuggestionGenerator::new(config.suggestions, config.scoring)
    }

    fn missing(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn assert_distinct(suggestions: &[String]) {
        let mut sorted = suggestions.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), suggestions.len());
    }

    #[test]
    fn test_exact_count_and_no_duplicates() {
        let gen = generator();
        for missing_set in [
            missing(&[]),
            missing(&["SQL"]),
            missing(&["a", "b", "c", "d", "e", "f", "g"]),
        ] {
            for ats in [10, 70, 95] {
                let suggestions = gen.suggest(&missing_set, "some resume text", ats);
                assert_eq!(suggestions.len(), 5);
                assert_distinct(&suggestions);
            }
        }
    }

    #[test]
    fn test_missing_skills_come_first_in_order() {
        let gen = generator();
        let suggestions = gen.suggest(&missing(&["Docker", "SQL"]), "text", 90);
        assert!(suggestions[0].contains("Docker"));
        assert!(suggestions[1].contains("SQL"));
    }

    #[test]
    fn test_structural_suggestion_below_threshold() {
        let gen = generator();
        let short_text = "too short";
        let suggestions = gen.suggest(&missing(&["a", "b", "c", "d", "e", "f"]), short_text, 40);
        assert_eq!(suggestions.len(), 5);
        assert!(
            suggestions.iter().any(|s| s.contains("short side")),
            "expected a structural suggestion: {:?}",
            suggestions
        );
    }

    #[test]
    fn test_no_structural_suggestion_above_threshold() {
        let gen = generator();
        let suggestions = gen.suggest(&missing(&[]), "too short", 90);
        assert!(!suggestions.iter().any(|s| s.contains("short side")));
    }

    #[test]
    fn test_length_advice_direction() {
        let gen = generator();
        let long_text = "word ".repeat(2000);
        let suggestions = gen.suggest(&missing(&[]), &long_text, 40);
        assert!(suggestions.iter().any(|s| s.contains("long")));

        let mid_text = "word ".repeat(400);
        let suggestions = gen.suggest(&missing(&[]), &mid_text, 40);
        assert!(suggestions.iter().any(|s| s.contains("section headers")));
    }

    #[test]
    fn test_pad_fills_and_dedups() {
        let gen = generator();
        let padded = gen.pad(vec![
            "One tip".to_string(),
            "One tip".to_string(),
            "  ".to_string(),
        ]);
        assert_eq!(padded.len(), 5);
        assert_eq!(padded[0], "One tip");
        assert_distinct(&padded);

        let overflow: Vec<String> = (0..10).map(|i| format!("tip {}", i)).collect();
        assert_eq!(gen.pad(overflow).len(), 5);
    }
}
