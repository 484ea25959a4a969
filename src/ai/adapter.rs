//! Adapter turning a completion provider reply into an AnalysisResult

use crate::analysis::suggestions::SuggestionGenerator;
use crate::analysis::AnalysisResult;
use crate::ai::prompts;
use crate::ai::provider::CompletionProvider;
use crate::catalog::Role;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Raw provider payload; the strict schema the reply must satisfy.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAnalysis {
    match_percentage: i64,
    ats_score: i64,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    suggestions: Vec<String>,
    #[serde(default)]
    detailed_feedback: Option<String>,
}

pub struct AiAnalyzer<'p> {
    provider: &'p dyn CompletionProvider,
    suggestions: SuggestionGenerator,
}

impl<'p> AiAnalyzer<'p> {
    pub fn new(provider: &'p dyn CompletionProvider, suggestions: SuggestionGenerator) -> Self {
        Self {
            provider,
            suggestions,
        }
    }

    /// One provider round trip. Any reply that does not parse into the
    /// expected shape with in-range scores is a `Error::Provider`. The
    /// resume text is sent to the provider and dropped with the call; it
    /// is never logged or persisted here.
    pub async fn analyze(&self, resume_text: &str, role: &Role) -> Result<AnalysisResult> {
        let prompt = prompts::render_analysis(resume_text, &role.name, &role.skills);
        let reply = self
            .provider
            .complete(prompts::SYSTEM_INSTRUCTION, &prompt)
            .await?;

        let wire: WireAnalysis = serde_json::from_str(strip_code_fences(&reply))
            .map_err(|e| Error::provider(format!("response failed schema validation: {}", e), false))?;

        validate_range("matchPercentage", wire.match_percentage)?;
        validate_range("atsScore", wire.ats_score)?;

        // Reconcile reported skills against the role's required set so the
        // matched/missing partition invariant holds for AI results too.
        let matched = reconcile_skills(&wire.matched_skills, &role.skills);
        let missing: Vec<String> = role
            .skills
            .iter()
            .filter(|skill| !matched.contains(skill))
            .cloned()
            .collect();

        Ok(AnalysisResult {
            match_percentage: wire.match_percentage as u32,
            ats_score: wire.ats_score as u32,
            matched_skills: matched,
            missing_skills: missing,
            suggestions: self.suggestions.pad(wire.suggestions),
            detailed_feedback: wire
                .detailed_feedback
                .filter(|feedback| !feedback.trim().is_empty()),
            is_ai_powered: true,
        })
    }
}

fn validate_range(field: &str, value: i64) -> Result<()> {
    if !(0..=100).contains(&value) {
        return Err(Error::provider(
            format!("{} out of range: {}", field, value),
            false,
        ));
    }
    Ok(())
}

/// Keep only reported skills that belong to the required set, in the
/// role's declaration order and canonical casing.
fn reconcile_skills(reported: &[String], required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|skill| {
            reported
                .iter()
                .any(|r| r.trim().eq_ignore_ascii_case(skill))
        })
        .cloned()
        .collect()
}

/// Providers occasionally wrap JSON-mode output in a markdown fence.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use async_trait::async_trait;

    struct CannedProvider {
        reply: String,
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.reply.clone())
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn analyzer_with(reply: &str) -> (CannedProvider, SuggestionGenerator) {
        let config = Config::default();
        (
            CannedProvider {
                reply: reply.to_string(),
            },
            SuggestionGenerator::new(config.suggestions, config.scoring),
        )
    }

    fn backend_role() -> Role {
        Role {
            id: "backend".to_string(),
            name: "Backend Engineer".to_string(),
            icon: "server".to_string(),
            skills: vec!["Node".to_string(), "SQL".to_string(), "Docker".to_string()],
        }
    }

    const VALID_REPLY: &str = r#"{
        "matchPercentage": 67,
        "atsScore": 80,
        "matchedSkills": ["node", "SQL"],
        "missingSkills": ["Docker"],
        "suggestions": ["Add Docker experience", "Quantify achievements"],
        "detailedFeedback": "Solid backend profile."
    }"#;

    #[tokio::test]
    async fn test_valid_reply_becomes_result() {
        let (provider, suggestions) = analyzer_with(VALID_REPLY);
        let analyzer = AiAnalyzer::new(&provider, suggestions);
        let result = analyzer.analyze("resume", &backend_role()).await.unwrap();

        assert_eq!(result.match_percentage, 67);
        assert_eq!(result.ats_score, 80);
        assert_eq!(result.matched_skills, vec!["Node", "SQL"]);
        assert_eq!(result.missing_skills, vec!["Docker"]);
        assert_eq!(result.suggestions.len(), 5);
        assert!(result.is_ai_powered);
        assert_eq!(
            result.detailed_feedback.as_deref(),
            Some("Solid backend profile.")
        );
    }

    #[tokio::test]
    async fn test_fenced_reply_is_accepted() {
        let fenced = format!("```json\n{}\n```", VALID_REPLY);
        let (provider, suggestions) = analyzer_with(&fenced);
        let analyzer = AiAnalyzer::new(&provider, suggestions);
        assert!(analyzer.analyze("resume", &backend_role()).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_field_is_provider_error() {
        let (provider, suggestions) = analyzer_with(r#"{"matchPercentage": 50}"#);
        let analyzer = AiAnalyzer::new(&provider, suggestions);
        let err = analyzer
            .analyze("resume", &backend_role())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Provider { retryable: false, .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_provider_error() {
        let reply = r#"{
            "matchPercentage": 150,
            "atsScore": 80,
            "matchedSkills": [],
            "missingSkills": [],
            "suggestions": []
        }"#;
        let (provider, suggestions) = analyzer_with(reply);
        let analyzer = AiAnalyzer::new(&provider, suggestions);
        let err = analyzer
            .analyze("resume", &backend_role())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("matchPercentage"));
    }

    #[tokio::test]
    async fn test_hallucinated_skills_are_reconciled() {
        let reply = r#"{
            "matchPercentage": 40,
            "atsScore": 60,
            "matchedSkills": ["Node", "Kubernetes", "Blockchain"],
            "missingSkills": [],
            "suggestions": ["tip"],
            "detailedFeedback": ""
        }"#;
        let (provider, suggestions) = analyzer_with(reply);
        let analyzer = AiAnalyzer::new(&provider, suggestions);
        let result = analyzer.analyze("resume", &backend_role()).await.unwrap();

        assert_eq!(result.matched_skills, vec!["Node"]);
        assert_eq!(result.missing_skills, vec!["SQL", "Docker"]);
        assert_eq!(result.detailed_feedback, None);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
    }
}
