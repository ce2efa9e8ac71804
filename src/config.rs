//! Configuration management for resume insight

use crate::error::{Result, ResumeInsightError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Fallback character window for a skills section with no recognized end heading
    pub skills_window: usize,
    /// Fallback character window for the education section
    pub education_window: usize,
    /// Fallback character window for the experience section
    pub experience_window: usize,
    /// Below this many section-extracted skills, fall back to the global vocabulary scan
    pub min_section_skills: usize,
    pub enable_caching: bool,
    /// Cached ATS scores older than this are discarded
    pub cache_ttl_hours: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Match score at or above which a job is flagged as recommended
    pub recommendation_threshold: u32,
    /// Points awarded per overlapping skill during job matching
    pub skill_bonus_step: u32,
    /// Cap on the total skill-overlap bonus
    pub skill_bonus_cap: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                skills_window: 500,
                education_window: 1000,
                experience_window: 2000,
                min_section_skills: 5,
                enable_caching: true,
                cache_ttl_hours: 24,
            },
            scoring: ScoringConfig {
                recommendation_threshold: 70,
                skill_bonus_step: 5,
                skill_bonus_cap: 15,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeInsightError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeInsightError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn reset() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-insight")
            .join("config.toml")
    }

    /// Location of the JSON key/value store backing jobs, preferences, and cached scores
    pub fn store_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-insight")
            .join("store.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scoring.recommendation_threshold, 70);
        assert_eq!(config.scoring.skill_bonus_cap, 15);
        assert_eq!(config.processing.min_section_skills, 5);
        assert!(config.output.color_output);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(
            parsed.scoring.recommendation_threshold,
            config.scoring.recommendation_threshold
        );
        assert_eq!(parsed.output.format, config.output.format);
    }
}
