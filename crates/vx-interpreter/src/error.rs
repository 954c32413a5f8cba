//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating an interpreter configuration.
///
/// Interpretation itself cannot fail; only building the engine can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid TOML: {0}")]
    Parse(String),

    #[error("threshold `{name}` must be within [0, 1], got {value}")]
    Threshold { name: String, value: f64 },

    #[error("empty {field} in {owner}")]
    EmptyEntry { owner: String, field: &'static str },

    #[error("{field} `{value}` in {owner} has leading or trailing whitespace")]
    Padded {
        owner: String,
        field: &'static str,
        value: String,
    },

    #[error("duplicate {kind} `{name}`")]
    Duplicate { kind: &'static str, name: String },

    #[error("{kind} `{name}` has no {field}")]
    Missing {
        kind: &'static str,
        name: String,
        field: &'static str,
    },

    #[error("correction `{pattern}` -> `{replacement}` can form pattern `{other}` again")]
    NonIdempotent {
        pattern: String,
        replacement: String,
        other: String,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
