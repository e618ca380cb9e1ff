//! Configuration management for the resume checker

use crate::error::{Result, ResumeCheckerError};
use crate::processing::document::SectionKind;
use crate::processing::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringPolicy,
    pub thresholds: RuleThresholds,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub lexicon: Lexicon,
}

/// Penalties and faculty adjustment policy used by the score aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub base_score: i32,
    pub critical_penalty: i32,
    pub warning_penalty: i32,
    pub suggestion_penalty: i32,
    pub max_faculty_adjustment: i32,
    pub min_faculty_hits: usize,
    pub faculty_steps: Vec<FacultyStep>,
}

/// Adjustment applied once a resume has at least `min_hits` faculty keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyStep {
    pub min_hits: usize,
    pub adjustment: i32,
}

/// Per-rule thresholds for the rule catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    pub required_sections: Vec<SectionKind>,
    pub recommended_sections: Vec<SectionKind>,
    pub min_words: usize,
    pub brief_words: usize,
    pub max_words: usize,
    pub long_line_chars: usize,
    pub max_long_line_ratio: f32,
    pub min_lines_for_long_line_check: usize,
    pub excessive_blank_lines: usize,
    pub min_lines_for_bullet_check: usize,
    pub min_bullet_density: f32,
    pub max_bullet_density: f32,
    pub min_quantified_achievements: usize,
    pub words_per_quantified_achievement: usize,
    pub min_distinct_action_verbs: usize,
    pub min_action_verbs_per_100_words: f32,
    pub min_ats_keywords: usize,
    pub min_section_headings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_file_bytes: u64,
    pub min_text_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base_score: 100,
            critical_penalty: 15,
            warning_penalty: 7,
            suggestion_penalty: 3,
            max_faculty_adjustment: 10,
            min_faculty_hits: 2,
            faculty_steps: vec![
                FacultyStep { min_hits: 0, adjustment: -2 },
                FacultyStep { min_hits: 1, adjustment: 0 },
                FacultyStep { min_hits: 2, adjustment: 1 },
                FacultyStep { min_hits: 3, adjustment: 3 },
                FacultyStep { min_hits: 4, adjustment: 5 },
                FacultyStep { min_hits: 6, adjustment: 8 },
            ],
        }
    }
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            required_sections: vec![SectionKind::Education, SectionKind::Experience, SectionKind::Skills],
            recommended_sections: vec![SectionKind::Summary],
            min_words: 50,
            brief_words: 150,
            max_words: 1000,
            long_line_chars: 100,
            max_long_line_ratio: 0.3,
            min_lines_for_long_line_check: 5,
            excessive_blank_lines: 3,
            min_lines_for_bullet_check: 10,
            min_bullet_density: 0.15,
            max_bullet_density: 0.85,
            min_quantified_achievements: 3,
            words_per_quantified_achievement: 100,
            min_distinct_action_verbs: 3,
            min_action_verbs_per_100_words: 1.0,
            min_ats_keywords: 5,
            min_section_headings: 3,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 16 * 1024 * 1024,
            min_text_chars: 50,
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
    /// Load the config from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ResumeCheckerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeCheckerError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-checker")
            .join("config.toml")
    }

    /// Reject policies that would break the scoring invariants
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.suggestion_penalty < 0
            || scoring.warning_penalty < scoring.suggestion_penalty
            || scoring.critical_penalty < scoring.warning_penalty
        {
            return Err(ResumeCheckerError::Configuration(format!(
                "Penalties must satisfy critical >= warning >= suggestion >= 0 (got {}/{}/{})",
                scoring.critical_penalty, scoring.warning_penalty, scoring.suggestion_penalty
            )));
        }

        if scoring.max_faculty_adjustment < 0 {
            return Err(ResumeCheckerError::Configuration(
                "max_faculty_adjustment must not be negative".to_string(),
            ));
        }

        let mut steps = scoring.faculty_steps.clone();
        steps.sort_by_key(|s| s.min_hits);
        if steps.windows(2).any(|w| w[1].adjustment < w[0].adjustment) {
            return Err(ResumeCheckerError::Configuration(
                "faculty_steps adjustments must not decrease as hits increase".to_string(),
            ));
        }

        let thresholds = &self.thresholds;
        if thresholds.required_sections.is_empty() {
            return Err(ResumeCheckerError::Configuration(
                "At least one required section must be configured".to_string(),
            ));
        }

        if thresholds.min_bullet_density > thresholds.max_bullet_density {
            return Err(ResumeCheckerError::Configuration(format!(
                "Bullet density band is inverted ({} > {})",
                thresholds.min_bullet_density, thresholds.max_bullet_density
            )));
        }

        if thresholds.min_words > thresholds.brief_words || thresholds.brief_words > thresholds.max_words {
            return Err(ResumeCheckerError::Configuration(
                "Word thresholds must satisfy min_words <= brief_words <= max_words".to_string(),
            ));
        }

        if thresholds.words_per_quantified_achievement == 0 {
            return Err(ResumeCheckerError::Configuration(
                "words_per_quantified_achievement must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
