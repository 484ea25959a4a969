//! Lexical skill matching against resume text

use crate::catalog::SynonymTable;
use aho_corasick::AhoCorasick;
use regex::Regex;

/// Partition of a role's required skills by presence in the resume.
///
/// Both lists preserve the role's skill declaration order. `hit_count` is
/// the total number of occurrences of matched skills (canonical forms and
/// synonyms), used by the scorer's keyword-density signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillPartition {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub hit_count: usize,
}

/// Deterministic keyword matcher tolerating case, whitespace, and
/// registered synonym/abbreviation variants.
pub struct LexicalMatcher {
    synonyms: SynonymTable,
    whitespace: Regex,
}

impl LexicalMatcher {
    pub fn new(synonyms: SynonymTable) -> Self {
        let whitespace = Regex::new(r"\s+").expect("invalid whitespace regex");
        Self {
            synonyms,
            whitespace,
        }
    }

    /// Partition `skills` into matched and missing against `resume_text`.
    ///
    /// A skill is matched iff its canonical form or any registered synonym
    /// occurs in the normalized text on word boundaries. One automaton pass
    /// over the text; no backtracking.
    pub fn partition(&self, resume_text: &str, skills: &[String]) -> SkillPartition {
        if skills.is_empty() {
            return SkillPartition {
                matched: Vec::new(),
                missing: Vec::new(),
                hit_count: 0,
            };
        }

        let normalized = self.normalize(resume_text);

        // One pattern per canonical form and per synonym, each mapped back
        // to the index of the skill it stands for.
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_skill: Vec<usize> = Vec::new();
        for (idx, skill) in skills.iter().enumerate() {
            patterns.push(skill.to_lowercase());
            pattern_skill.push(idx);
            if let Some(alts) = self.synonyms.get(skill) {
                for alt in alts {
                    patterns.push(alt.to_lowercase());
                    pattern_skill.push(idx);
                }
            }
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .expect("failed to build skill automaton");

        let mut found = vec![false; skills.len()];
        let mut hit_count = 0usize;
        for mat in automaton.find_iter(&normalized) {
            if !on_word_boundary(&normalized, mat.start(), mat.end()) {
                continue;
            }
            found[pattern_skill[mat.pattern().as_usize()]] = true;
            hit_count += 1;
        }

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for (idx, skill) in skills.iter().enumerate() {
            if found[idx] {
                matched.push(skill.clone());
            } else {
                missing.push(skill.clone());
            }
        }

        SkillPartition {
            matched,
            missing,
            hit_count,
        }
    }

    /// Case-fold and collapse whitespace, once per call.
    pub fn normalize(&self, text: &str) -> String {
        self.whitespace
            .replace_all(&text.to_lowercase(), " ")
            .trim()
            .to_string()
    }
}

/// Both ends of the hit must sit on word boundaries so that e.g. "Java"
/// never matches inside "JavaScript". Non-alphanumeric pattern edges
/// ("C++", "Node.js") count as boundaries on their own.
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let left_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let right_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());

    let first = text[start..end].chars().next();
    let last = text[start..end].chars().next_back();
    let left_edge = first.map_or(true, |c| !c.is_alphanumeric());
    let right_edge = last.map_or(true, |c| !c.is_alphanumeric());

    (left_ok || left_edge) && (right_ok || right_edge)
}
