//! Error types for decoding, validating and serializing configuration trees.

use thiserror::Error;

/// Errors that abort a cfgreport operation.
///
/// Rule violations found by the validator are not errors in this sense: they
/// are collected as [`ValidationError`](crate::validator::ValidationError)
/// values and returned in `Ok`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The input string was not valid YAML.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input parsed, but holds something the tree model cannot represent
    /// (e.g. a sequence used as a mapping key).
    #[error("Decode error: {0}")]
    Decode(String),

    /// The tree does not have the shape an operation requires, e.g. a
    /// scalar where a mapping was expected.
    #[error("Structural error at {path}: {message}")]
    Structural { path: String, message: String },
}

impl ConfigError {
    pub(crate) fn structural(path: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Structural {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout cfgreport-core.
pub type Result<T> = std::result::Result<T, ConfigError>;
