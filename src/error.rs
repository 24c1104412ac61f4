//! Error types for the bantam orchestration core.
//!
//! The resolution core itself has no fatal errors: inconsistencies surface as
//! [`crate::order::OrderWarning`] data and execution proceeds best-effort.
//! These errors belong to the ambient surface around it (configuration
//! loading, logging setup).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log directive: {0}")]
    LogDirective(String),

    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}
