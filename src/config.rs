//! Configuration management for the ATS analyzer

use crate::error::{AtsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Weights of the composite score. They must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub skill_weight: f64,
    pub section_weight: f64,
    pub action_verb_weight: f64,
    pub quantifiable_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub enable_caching: bool,
    pub max_file_size_kb: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.30,
            skill_weight: 0.25,
            section_weight: 0.15,
            action_verb_weight: 0.10,
            quantifiable_weight: 0.10,
            experience_weight: 0.05,
            education_weight: 0.05,
        }
    }
}

impl ScoringConfig {
    fn weights(&self) -> [f64; 7] {
        [
            self.keyword_weight,
            self.skill_weight,
            self.section_weight,
            self.action_verb_weight,
            self.quantifiable_weight,
            self.experience_weight,
            self.education_weight,
        ]
    }

    pub fn total(&self) -> f64 {
        self.weights().iter().sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AtsError::Configuration(
                "Scoring weights must be finite and non-negative".to_string(),
            ));
        }

        let total = self.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(AtsError::Configuration(format!(
                "Scoring weights must sum to 1.0 (got {:.4})",
                total
            )));
        }

        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            enable_caching: true,
            max_file_size_kb: 1024,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.scoring.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-analyzer")
            .join("config.toml")
    }
}
