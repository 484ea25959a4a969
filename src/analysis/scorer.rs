//! Heuristic match-percentage and ATS compatibility scoring

use crate::analysis::matcher::SkillPartition;
use crate::config::ScoringConfig;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Section headers an applicant tracking system expects to find.
const EXPECTED_SECTIONS: [&[&str]; 4] = [
    &["experience", "employment", "work history"],
    &["education"],
    &["skills"],
    &["summary", "objective", "profile"],
];

/// Keyword occurrences per 100 words granting full density credit.
const DENSITY_TARGET_PER_100_WORDS: f64 = 4.0;

/// Per-signal point breakdown of the ATS composite. Each component is
/// already weighted; the total is their clamped sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtsBreakdown {
    pub sections: u32,
    pub length: u32,
    pub formatting: u32,
    pub density: u32,
}

impl AtsBreakdown {
    pub fn total(&self) -> u32 {
        (self.sections + self.length + self.formatting + self.density).min(100)
    }
}

pub struct HeuristicScorer {
    config: ScoringConfig,
    repeated_punct: Regex,
}

impl HeuristicScorer {
    pub fn new(config: ScoringConfig) -> Self {
        let repeated_punct = Regex::new(r"[!?.,;:]{3,}").expect("invalid punctuation regex");
        Self {
            config,
            repeated_punct,
        }
    }

    /// Percentage of required skills found, rounded; 0 for an empty
    /// requirement set.
    pub fn match_percentage(&self, partition: &SkillPartition) -> u32 {
        let required = partition.matched.len() + partition.missing.len();
        if required == 0 {
            return 0;
        }
        let pct = (100.0 * partition.matched.len() as f64 / required as f64).round() as i64;
        pct.clamp(0, 100) as u32
    }

    /// Composite ATS score in [0, 100] from four independent structural
    /// signals, each bounded by its configured weight and monotonic in its
    /// goodness direction.
    pub fn ats_score(&self, resume_text: &str, partition: &SkillPartition) -> u32 {
        self.ats_breakdown(resume_text, partition).total()
    }

    pub fn ats_breakdown(&self, resume_text: &str, partition: &SkillPartition) -> AtsBreakdown {
        let lowered = resume_text.to_lowercase();
        let word_count = resume_text.unicode_words().count();

        AtsBreakdown {
            sections: self.section_signal(&lowered),
            length: self.length_signal(word_count),
            formatting: self.formatting_signal(resume_text),
            density: self.density_signal(word_count, partition.hit_count),
        }
    }

    /// Fraction of expected section-header groups present.
    fn section_signal(&self, lowered: &str) -> u32 {
        let found = EXPECTED_SECTIONS
            .iter()
            .filter(|aliases| aliases.iter().any(|alias| lowered.contains(alias)))
            .count();
        scale(
            self.config.section_weight,
            found as f64 / EXPECTED_SECTIONS.len() as f64,
        )
    }

    /// Full credit inside the expected word-count range, tapering credit
    /// the further outside it the resume falls.
    fn length_signal(&self, word_count: usize) -> u32 {
        let min = self.config.min_words as f64;
        let max = self.config.max_words as f64;
        let count = word_count as f64;

        let goodness = if count < min {
            count / min
        } else if count > max {
            max / count
        } else {
            1.0
        };
        scale(self.config.length_weight, goodness)
    }

    /// Starts at full weight; each artifact class found deducts a third.
    fn formatting_signal(&self, resume_text: &str) -> u32 {
        let penalty_unit = self.config.formatting_weight / 3;
        let mut penalty = 0;

        if resume_text.contains('\t') {
            penalty += penalty_unit;
        }
        if self.repeated_punct.is_match(resume_text) {
            penalty += penalty_unit;
        }
        if resume_text.lines().any(|line| line.chars().count() > 300) {
            penalty += penalty_unit;
        }

        self.config.formatting_weight.saturating_sub(penalty)
    }

    /// Matched-keyword occurrences per 100 words, capped at the target.
    fn density_signal(&self, word_count: usize, hit_count: usize) -> u32 {
        if word_count == 0 || hit_count == 0 {
            return 0;
        }
        let per_100 = hit_count as f64 * 100.0 / word_count as f64;
        scale(
            self.config.density_weight,
            (per_100 / DENSITY_TARGET_PER_100_WORDS).min(1.0),
        )
    }
}

fn scale(weight: u32, goodness: f64) -> u32 {
    let clamped = goodness.clamp(0.0, 1.0);
    (weight as f64 * clamped).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn scorer() -> HeuristicScorer {
        HeuristicScorer::new(Config::default().scoring)
    }

    fn partition(matched: &[&str], missing: &[&str], hit_count: usize) -> SkillPartition {
        SkillPartition {
            matched: matched.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            hit_count,
        }
    }

    #[test]
    fn test_match_percentage_rounding() {
        let scorer = scorer();
        assert_eq!(
            scorer.match_percentage(&partition(&["a"], &["b", "c"], 1)),
            33
        );
        assert_eq!(
            scorer.match_percentage(&partition(&["a", "b"], &["c"], 2)),
            67
        );
        assert_eq!(scorer.match_percentage(&partition(&["a"], &[], 1)), 100);
    }

    #[test]
    fn test_empty_required_set_scores_zero() {
        let scorer = scorer();
        assert_eq!(scorer.match_percentage(&partition(&[], &[], 0)), 0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let scorer = scorer();
        let texts = [
            "",
            "short",
            &"word ".repeat(2000),
            "experience education skills summary python python python",
        ];
        for text in texts {
            let score = scorer.ats_score(text, &partition(&["Python"], &[], 3));
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_section_signal_monotonic() {
        let scorer = scorer();
        let none = scorer.ats_breakdown("plain text", &partition(&[], &["x"], 0));
        let some = scorer.ats_breakdown(
            "Experience\nEducation\nplain text",
            &partition(&[], &["x"], 0),
        );
        let all = scorer.ats_breakdown(
            "Summary\nExperience\nEducation\nSkills",
            &partition(&[], &["x"], 0),
        );
        assert!(none.sections < some.sections);
        assert!(some.sections < all.sections);
        assert_eq!(all.sections, Config::default().scoring.section_weight);
    }

    #[test]
    fn test_length_signal_tapers_outside_range() {
        let scorer = scorer();
        let cfg = Config::default().scoring;

        let in_range = scorer.ats_breakdown(&"word ".repeat(400), &partition(&[], &[], 0));
        assert_eq!(in_range.length, cfg.length_weight);

        let short = scorer.ats_breakdown(&"word ".repeat(50), &partition(&[], &[], 0));
        assert!(short.length < cfg.length_weight);

        let long = scorer.ats_breakdown(&"word ".repeat(3000), &partition(&[], &[], 0));
        assert!(long.length < cfg.length_weight);
    }

    #[test]
    fn test_formatting_artifacts_penalized() {
        let scorer = scorer();
        let clean = scorer.ats_breakdown("A clean resume line.", &partition(&[], &[], 0));
        let tabs = scorer.ats_breakdown("Tab\there!!!", &partition(&[], &[], 0));
        assert!(tabs.formatting < clean.formatting);
    }

    #[test]
    fn test_density_signal_caps() {
        let scorer = scorer();
        let cfg = Config::default().scoring;

        // 10 hits in 100 words is well above the target.
        let dense = scorer.ats_breakdown(&"word ".repeat(100), &partition(&["x"], &[], 10));
        assert_eq!(dense.density, cfg.density_weight);

        let sparse = scorer.ats_breakdown(&"word ".repeat(100), &partition(&["x"], &[], 1));
        assert!(sparse.density < cfg.density_weight);
        assert!(sparse.density > 0);
    }

    #[test]
    fn test_empty_text_scores_defined() {
        let scorer = scorer();
        let breakdown = scorer.ats_breakdown("", &partition(&[], &["Rust"], 0));
        assert_eq!(breakdown.length, 0);
        assert_eq!(breakdown.density, 0);
        assert!(breakdown.total() <= 100);
    }
}
