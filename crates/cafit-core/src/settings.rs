//! TOML-based caffeine settings.
//!
//! Per-user thresholds for the decay and recommendation engine:
//! - Daily intake limit (mg)
//! - Residual caffeine target at bedtime (mg)
//! - Bedtime (time of day)
//! - Decay half-life (hours)
//!
//! All four values must be strictly positive; a non-positive half-life makes
//! the decay exponent meaningless, so [`CaffeineSettings::validate`] runs at
//! every engine entry point and load.

use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Caffeine thresholds and decay parameters for one user.
///
/// Serialized to/from TOML; every field falls back to a sensible default so
/// partial files stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaffeineSettings {
    /// Acceptable raw intake total per calendar day (mg).
    #[serde(default = "default_daily_limit_mg")]
    pub daily_limit_mg: f64,
    /// Residual level considered safe for sleep (mg).
    #[serde(default = "default_target_sleep_caffeine_mg")]
    pub target_sleep_caffeine_mg: f64,
    /// Target bedtime, used to resolve the next bedtime instant.
    #[serde(default = "default_bedtime")]
    pub bedtime: NaiveTime,
    /// Caffeine elimination half-life (hours).
    #[serde(default = "default_half_life_hours")]
    pub half_life_hours: f64,
}

// Default functions
fn default_daily_limit_mg() -> f64 {
    400.0
}
fn default_target_sleep_caffeine_mg() -> f64 {
    50.0
}
fn default_bedtime() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 0, 0).unwrap()
}
fn default_half_life_hours() -> f64 {
    5.0
}

impl Default for CaffeineSettings {
    fn default() -> Self {
        Self {
            daily_limit_mg: default_daily_limit_mg(),
            target_sleep_caffeine_mg: default_target_sleep_caffeine_mg(),
            bedtime: default_bedtime(),
            half_life_hours: default_half_life_hours(),
        }
    }
}

impl CaffeineSettings {
    /// Reject non-positive thresholds or half-life.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_positive("daily_limit_mg", self.daily_limit_mg)?;
        Self::require_positive("target_sleep_caffeine_mg", self.target_sleep_caffeine_mg)?;
        Self::require_positive("half_life_hours", self.half_life_hours)?;
        Ok(())
    }

    fn require_positive(key: &str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: key.into(),
                message: format!("must be strictly positive, got {value}"),
            });
        }
        Ok(())
    }

    /// Load settings from a TOML file and validate them.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as TOML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, contents).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
