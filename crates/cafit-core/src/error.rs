//! Core error types for cafit-core.
//!
//! Two concerns are distinguished: configuration errors (caller supplied
//! unusable settings, a programming/deployment bug) and validation errors
//! (malformed input data). Neither is silently corrected; both are surfaced
//! before any decay math runs so the engine never emits NaN or Infinity.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cafit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: window end ({end}) precedes window start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Negative caffeine amount on an intake record
    #[error("Intake {intake_id} has a negative caffeine amount: {caffeine_mg} mg")]
    NegativeDose {
        intake_id: uuid::Uuid,
        caffeine_mg: f64,
    },

    /// NaN or infinite caffeine amount on an intake record
    #[error("Intake {intake_id} has a non-finite caffeine amount")]
    NonFiniteDose { intake_id: uuid::Uuid },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
