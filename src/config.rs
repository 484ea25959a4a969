//! Configuration management for resume-radar

use crate::catalog::{default_roles, default_synonyms, Role, SkillCatalog, SynonymTable};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ai: AiConfig,
    pub scoring: ScoringConfig,
    pub suggestions: SuggestionConfig,
    pub history: HistoryConfig,
    pub roles: Vec<Role>,
    pub synonyms: SynonymTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Environment variable holding the provider API key.
    pub api_key_env: String,
    pub model: String,
    pub temperature: f32,
    /// Bound on the provider call so a hung provider cannot block the
    /// fallback path.
    pub timeout_secs: u64,
}

/// Weights for the ATS structural signals. Tunable data, not hidden
/// constants: the four weights must sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points for recognized section headers (Experience, Education, ...).
    pub section_weight: u32,
    /// Points for a word count inside the expected range.
    pub length_weight: u32,
    /// Points for the absence of problematic formatting artifacts.
    pub formatting_weight: u32,
    /// Points for matched-keyword density.
    pub density_weight: u32,
    /// Expected resume length, in words.
    pub min_words: usize,
    pub max_words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Fixed number of suggestions per analysis.
    pub count: usize,
    /// ATS score below which a structural suggestion is guaranteed.
    pub ats_threshold: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Rolling cap on stored analyses; oldest entries are evicted.
    pub max_entries: usize,
    /// History file location. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                api_key_env: "OPENAI_API_KEY".to_string(),
                model: "gpt-4o-mini".to_string(),
                temperature: 0.7,
                timeout_secs: 30,
            },
            scoring: ScoringConfig {
                section_weight: 30,
                length_weight: 25,
                formatting_weight: 20,
                density_weight: 25,
                min_words: 200,
                max_words: 900,
            },
            suggestions: SuggestionConfig {
                count: 5,
                ats_threshold: 70,
            },
            history: HistoryConfig {
                max_entries: 50,
                path: None,
            },
            roles: default_roles(),
            synonyms: default_synonyms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content)
                .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))?
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-radar")
            .join("config.toml")
    }

    /// Default history file location when `history.path` is unset.
    pub fn history_path(&self) -> PathBuf {
        self.history.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
                .join("resume-radar")
                .join("history.json")
        })
    }

    pub fn catalog(&self) -> SkillCatalog {
        SkillCatalog::new(self.roles.clone())
    }

    fn validate(&self) -> Result<()> {
        let total = self.scoring.section_weight
            + self.scoring.length_weight
            + self.scoring.formatting_weight
            + self.scoring.density_weight;
        if total != 100 {
            return Err(Error::Configuration(format!(
                "ATS signal weights must sum to 100, got {}",
                total
            )));
        }

        if self.scoring.min_words >= self.scoring.max_words {
            return Err(Error::Configuration(
                "scoring.min_words must be below scoring.max_words".to_string(),
            ));
        }

        if self.suggestions.count == 0 {
            return Err(Error::Configuration(
                "suggestions.count must be at least 1".to_string(),
            ));
        }

        if self.history.max_entries == 0 {
            return Err(Error::Configuration(
                "history.max_entries must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl AiConfig {
    /// The AI path is considered configured only when the env-supplied
    /// secret is present and not implausibly short.
    pub fn is_configured(&self) -> bool {
        self.api_key()
            .map(|key| key.len() > 20)
            .unwrap_or(false)
    }

    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}
