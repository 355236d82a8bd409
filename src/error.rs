use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scalar::input::SourceLocation;

/// Error raised at scalar definition time, before any value is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is missing the required `name` field.
    #[error("\"name\" is required")]
    MissingName,
    /// The configured pattern string failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Structured error raised when a value is rejected by the pipeline.
///
/// Carries a human-readable message and the source locations of the
/// offending value, when available. The host collects these into its
/// response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValueError {
    pub message: String,
    pub locations: Vec<SourceLocation>,
}

/// The categorical reason a value was rejected.
///
/// Serializes in lowercase, so a context handed to a non-throwing error
/// reporter renders as `{"type": "empty", ...}` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The literal's declared kind was not `String`.
    Type,
    /// The value was empty and the scalar does not allow empty strings.
    Empty,
    /// The value was shorter than the configured minimum length.
    Min,
    /// The value was longer than the configured maximum length.
    Max,
    /// The value did not match the configured pattern.
    Pattern,
    /// The custom test rejected the value.
    Test,
}

/// Context handed to the error reporter for a single rejected value.
///
/// Built per rejection and consumed within the same pipeline invocation.
/// Only the payload fields relevant to [`ErrorKind`] are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// The offending value, after whatever sanitization already ran.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl ErrorContext {
    /// Creates a context for the given kind and offending value, with all
    /// payload fields unset.
    pub fn new(kind: ErrorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            min: None,
            max: None,
            pattern: None,
            message: None,
            location: None,
        }
    }
}

/// StringScalar Error type
#[derive(Debug, Error)]
pub enum StringScalarError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Validation error: {0}")]
    Value(#[from] ValueError),
}

/// StringScalar Result type
pub type StringScalarResult<T> = Result<T, StringScalarError>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_serialize_context_with_lowercase_kind() {
        let context = ErrorContext {
            min: Some(3),
            ..ErrorContext::new(ErrorKind::Min, "ab")
        };

        let json = serde_json::to_value(&context).expect("context should serialize");
        assert_eq!(json["type"], "min");
        assert_eq!(json["value"], "ab");
        assert_eq!(json["min"], 3);
        assert!(json.get("max").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_should_display_value_error_message() {
        let error = ValueError {
            message: "Invalid value \"\". Expected non-empty string.".to_string(),
            locations: vec![SourceLocation::new(1, 9)],
        };

        assert_eq!(
            error.to_string(),
            "Invalid value \"\". Expected non-empty string."
        );
    }

    #[test]
    fn test_should_wrap_errors_in_umbrella_type() {
        let config_error: StringScalarError = ConfigError::MissingName.into();
        assert!(matches!(config_error, StringScalarError::Config(_)));

        let value_error: StringScalarError = ValueError {
            message: "Invalid value \"x\".".to_string(),
            locations: vec![],
        }
        .into();
        assert!(matches!(value_error, StringScalarError::Value(_)));
    }
}
