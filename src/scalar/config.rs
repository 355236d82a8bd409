use regex::Regex;
use serde_json::{Map, Value};

use crate::scalar::hooks::{Parse, ReportError, Test};
use crate::scalar::sanitize::{Capitalize, Sanitize};

/// A validation pattern, supplied either as source text or pre-compiled.
///
/// A source pattern is compiled exactly once, when the scalar is defined.
#[derive(Debug, Clone)]
pub enum Pattern {
    Source(String),
    Compiled(Regex),
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::Source(source.to_string())
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::Source(source)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::Compiled(regex)
    }
}

/// Declarative configuration for a string scalar.
///
/// All fields except `name` are optional; the `Default` implementation
/// leaves every sanitization and validation step disabled. Resolved once by
/// [`define_string_scalar`](crate::prelude::define_string_scalar) into an
/// immutable [`StringScalar`](crate::prelude::StringScalar).
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::StringScalarConfig;
///
/// let config = StringScalarConfig {
///     trim: true,
///     min: Some(3),
///     max: Some(64),
///     ..StringScalarConfig::named("Username")
/// };
/// assert_eq!(config.name, "Username");
/// assert!(config.strict_literal_type);
/// ```
pub struct StringScalarConfig {
    /// Identifies the scalar. Required; must be non-empty.
    pub name: String,
    /// Free-text description. Auto-generated when absent, unless a custom
    /// test is supplied.
    pub description: Option<String>,
    /// Strip whitespace from both ends.
    pub trim: bool,
    /// Strip leading whitespace.
    pub trim_left: bool,
    /// Strip trailing whitespace.
    pub trim_right: bool,
    /// Replace every run of newline characters with a single space.
    pub singleline: bool,
    /// Collapse whitespace runs to one space. Collapses across lines when
    /// `singleline` is also set, per line otherwise.
    pub collapse_whitespace: bool,
    /// Cut the value to at most this many characters.
    pub truncate: Option<usize>,
    /// Uppercase the whole value. Takes precedence over `lower_case`.
    pub upper_case: bool,
    /// Lowercase the whole value.
    pub lower_case: bool,
    /// Capitalization sub-mode.
    pub capitalize: Option<Capitalize>,
    /// Custom sanitize hook, run after every built-in step. Returning
    /// `None` treats the value as absent.
    pub sanitize: Option<Box<dyn Sanitize>>,
    /// Allow the empty string. Defaults to false.
    pub empty: bool,
    /// Minimum length in characters.
    pub min: Option<usize>,
    /// Maximum length in characters.
    pub max: Option<usize>,
    /// Pattern the value must match.
    pub pattern: Option<Pattern>,
    /// Custom predicate, run after all built-in checks.
    pub test: Option<Box<dyn Test>>,
    /// Final transform applied to accepted values.
    pub parse: Option<Box<dyn Parse>>,
    /// Custom error reporter. Defaults to
    /// [`DefaultErrorReporter`](crate::prelude::DefaultErrorReporter).
    pub error: Option<Box<dyn ReportError>>,
    /// Reject non-string literals with a type-mismatch error instead of
    /// coercing them to null. Defaults to true.
    pub strict_literal_type: bool,
    /// Unrecognized configuration keys, passed through opaquely to the
    /// host's scalar-definition construct. Never interpreted by the
    /// pipeline.
    pub extensions: Map<String, Value>,
}

impl Default for StringScalarConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            trim: false,
            trim_left: false,
            trim_right: false,
            singleline: false,
            collapse_whitespace: false,
            truncate: None,
            upper_case: false,
            lower_case: false,
            capitalize: None,
            sanitize: None,
            empty: false,
            min: None,
            max: None,
            pattern: None,
            test: None,
            parse: None,
            error: None,
            strict_literal_type: true,
            extensions: Map::new(),
        }
    }
}

impl StringScalarConfig {
    /// Creates a configuration with the given name and everything else at
    /// its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_default_to_strict_literal_mode() {
        let config = StringScalarConfig::default();
        assert!(config.strict_literal_type);
        assert!(!config.empty);
    }

    #[test]
    fn test_should_convert_pattern_sources() {
        assert!(matches!(Pattern::from(r"^\w+$"), Pattern::Source(_)));
        assert!(matches!(
            Pattern::from(r"^\w+$".to_string()),
            Pattern::Source(_)
        ));

        let regex = Regex::new(r"^\w+$").expect("pattern should compile");
        assert!(matches!(Pattern::from(regex), Pattern::Compiled(_)));
    }

    #[test]
    fn test_should_build_named_config() {
        let config = StringScalarConfig::named("Slug");
        assert_eq!(config.name, "Slug");
        assert!(config.description.is_none());
        assert!(config.extensions.is_empty());
    }
}
