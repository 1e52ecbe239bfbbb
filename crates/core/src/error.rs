//! # Errors
//!
//! Typed failures surfaced by the core. Every one of them ends in a rendered
//! fallback state; none is fatal to the process.

use thiserror::Error;

/// Failure while loading [`crate::config::SiteConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Failure while delivering a contact message to the external endpoint
///
/// The user only ever sees one generic message for all of these.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),

    #[error("contact endpoint rejected the message with status {0}")]
    Rejected(u16),
}
