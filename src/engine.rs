//! Analysis orchestration: AI first, heuristic pipeline as the baseline

use crate::ai::AiAnalyzer;
use crate::ai::provider::CompletionProvider;
use crate::analysis::matcher::LexicalMatcher;
use crate::analysis::scorer::HeuristicScorer;
use crate::analysis::suggestions::SuggestionGenerator;
use crate::analysis::AnalysisResult;
use crate::catalog::{Role, SkillCatalog};
use crate::config::Config;
use crate::error::{Error, Result};
use log::{debug, warn};

/// Coordinates the skill catalog, the optional AI path, and the heuristic
/// pipeline. The provider is an injected dependency; absence of one means
/// the heuristic pipeline runs directly.
pub struct Analyzer {
    catalog: SkillCatalog,
    matcher: LexicalMatcher,
    scorer: HeuristicScorer,
    suggestions: SuggestionGenerator,
    provider: Option<Box<dyn CompletionProvider>>,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        Self::build(config, None)
    }

    pub fn with_provider(config: &Config, provider: Box<dyn CompletionProvider>) -> Self {
        Self::build(config, Some(provider))
    }

    fn build(config: &Config, provider: Option<Box<dyn CompletionProvider>>) -> Self {
        Self {
            catalog: config.catalog(),
            matcher: LexicalMatcher::new(config.synonyms.clone()),
            scorer: HeuristicScorer::new(config.scoring.clone()),
            suggestions: SuggestionGenerator::new(
                config.suggestions.clone(),
                config.scoring.clone(),
            ),
            provider,
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Analyze `resume_text` against the role's required skills.
    ///
    /// Fails only with `Error::UnknownRole`; AI failures are logged and
    /// steer the fallback, never the caller. Empty resume text and roles
    /// with no required skills are valid inputs.
    pub async fn analyze(&self, resume_text: &str, role_id: &str) -> Result<AnalysisResult> {
        let role = self
            .catalog
            .get(role_id)
            .ok_or_else(|| Error::UnknownRole(role_id.to_string()))?;

        if let Some(provider) = self.provider.as_deref() {
            let ai = AiAnalyzer::new(provider, self.suggestion_generator());
            match ai.analyze(resume_text, role).await {
                Ok(result) => {
                    debug!("AI analysis succeeded via {}", provider.model_name());
                    return Ok(result);
                }
                Err(e) if e.is_ai_fallback() => {
                    warn!("AI analysis failed, using heuristic pipeline: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(self.analyze_heuristic(resume_text, role))
    }

    /// The guaranteed-available baseline: matcher, scorer, and suggestion
    /// generator, in that order.
    pub fn analyze_heuristic(&self, resume_text: &str, role: &Role) -> AnalysisResult {
        let partition = self.matcher.partition(resume_text, &role.skills);
        let match_percentage = self.scorer.match_percentage(&partition);
        let ats_score = self.scorer.ats_score(resume_text, &partition);
        let suggestions = self
            .suggestions
            .suggest(&partition.missing, resume_text, ats_score);

        AnalysisResult {
            match_percentage,
            ats_score,
            matched_skills: partition.matched,
            missing_skills: partition.missing,
            suggestions,
            detailed_feedback: None,
            is_ai_powered: false,
        }
    }

    fn suggestion_generator(&self) -> SuggestionGenerator {
        self.suggestions.clone()
    }
}
