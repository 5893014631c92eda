//! Engine configuration
//!
//! [`Rules`] holds the tunable progression constants. Its defaults reproduce the
//! standard progression exactly, so a missing or empty config file changes nothing.
//! Configuration is read from TOML:
//!
//! ```toml
//! seed = 42
//!
//! [rules]
//! initial_fall_interval = 0.5
//! speed_multiplier = 0.9
//! max_level = 15
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    HARD_DROP_POINTS, INITIAL_FALL_INTERVAL_SECS, LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL,
    SOFT_DROP_POINTS, SPEED_MULTIPLIER, STARTING_LEVEL,
};

/// Environment variable naming a config file to load
pub const CONFIG_ENV_VAR: &str = "BLOCKFALL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Scoring and speed rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Seconds between automatic descents at level 1
    pub initial_fall_interval: f64,
    /// Interval factor per level gained
    pub speed_multiplier: f64,
    pub lines_per_level: u32,
    pub max_level: u32,
    /// Base points for 1, 2, 3 and 4+ rows, multiplied by level
    pub line_scores: [u32; 4],
    pub soft_drop_points: u32,
    pub hard_drop_points: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial_fall_interval: INITIAL_FALL_INTERVAL_SECS,
            speed_multiplier: SPEED_MULTIPLIER,
            lines_per_level: LINES_PER_LEVEL,
            max_level: MAX_LEVEL,
            line_scores: LINE_SCORES,
            soft_drop_points: SOFT_DROP_POINTS,
            hard_drop_points: HARD_DROP_POINTS,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_fall_interval.is_finite() && self.initial_fall_interval > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "initial_fall_interval must be positive, got {}",
                self.initial_fall_interval
            )));
        }
        if !(self.speed_multiplier > 0.0 && self.speed_multiplier <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "speed_multiplier must be in (0, 1], got {}",
                self.speed_multiplier
            )));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::Invalid("lines_per_level must be at least 1".into()));
        }
        if self.max_level < STARTING_LEVEL {
            return Err(ConfigError::Invalid(format!(
                "max_level must be at least {}, got {}",
                STARTING_LEVEL, self.max_level
            )));
        }
        if let Some(base) = self
            .line_scores
            .iter()
            .find(|base| base.checked_mul(self.max_level).is_none())
        {
            return Err(ConfigError::Invalid(format!(
                "line score {} overflows at level {}",
                base, self.max_level
            )));
        }
        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Randomizer seed; `None` picks one at session start
    pub seed: Option<u64>,
    pub rules: Rules,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.rules.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
