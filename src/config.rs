use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::RankOptions;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub min_score: Option<u8>,
    pub max_results: Option<usize>,
}

impl MatchingSettings {
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            min_score: self.min_score.unwrap_or(0),
            max_results: self.max_results,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_trait_weight")]
    pub sleep_schedule: f64,
    #[serde(default = "default_trait_weight")]
    pub cleanliness: f64,
    #[serde(default = "default_trait_weight")]
    pub study_preference: f64,
    #[serde(default = "default_trait_weight")]
    pub social_behavior: f64,
    #[serde(default = "default_trait_weight")]
    pub noise_tolerance: f64,
}

impl WeightsConfig {
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            sleep_schedule: self.sleep_schedule,
            cleanliness: self.cleanliness,
            study_preference: self.study_preference,
            social_behavior: self.social_behavior,
            noise_tolerance: self.noise_tolerance,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            sleep_schedule: default_trait_weight(),
            cleanliness: default_trait_weight(),
            study_preference: default_trait_weight(),
            social_behavior: default_trait_weight(),
            noise_tolerance: default_trait_weight(),
        }
    }
}

fn default_trait_weight() -> f64 {
    20.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMIE)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMIE__MATCHING__MIN_SCORE -> matching.min_score
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
