//! User-supplied hooks injected through the configuration.
//!
//! Each hook is a small capability trait with a blanket implementation for
//! closures, so configurations can pass either a plain function or a struct
//! carrying its own state. All hooks are `Send + Sync`: a resolved scalar is
//! read-only and may be shared across threads.

use crate::error::{ErrorContext, ValueError};

/// Trait for the custom predicate run after all built-in checks.
///
/// Returning `false` rejects the value with kind `test`.
pub trait Test: Send + Sync {
    fn test(&self, value: &str) -> bool;
}

impl<F> Test for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn test(&self, value: &str) -> bool {
        self(value)
    }
}

/// Trait for the final value transform applied after validation.
///
/// The parsed value may be any JSON value, not necessarily a string.
pub trait Parse: Send + Sync {
    fn parse(&self, value: String) -> serde_json::Value;
}

impl<F> Parse for F
where
    F: Fn(String) -> serde_json::Value + Send + Sync,
{
    fn parse(&self, value: String) -> serde_json::Value {
        self(value)
    }
}

/// Trait for constructing the error surfaced for a rejected value.
///
/// The expected behavior is to return `Err` (the raise path). A reporter
/// that returns `Ok` instead makes that value the pipeline's result for the
/// invocation, which enables non-throwing error collection.
pub trait ReportError: Send + Sync {
    fn report(&self, context: ErrorContext) -> Result<serde_json::Value, ValueError>;
}

impl<F> ReportError for F
where
    F: Fn(ErrorContext) -> Result<serde_json::Value, ValueError> + Send + Sync,
{
    fn report(&self, context: ErrorContext) -> Result<serde_json::Value, ValueError> {
        self(context)
    }
}

/// The reporter installed when the configuration supplies no custom one.
///
/// Raises a [`ValueError`] embedding the JSON-rendered offending value, the
/// per-kind detail message when present, and the source location when
/// available.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{DefaultErrorReporter, ErrorContext, ErrorKind, ReportError as _};
///
/// let context = ErrorContext {
///     message: Some("Expected non-empty string".to_string()),
///     ..ErrorContext::new(ErrorKind::Empty, "")
/// };
/// let error = DefaultErrorReporter.report(context).unwrap_err();
/// assert_eq!(error.message, "Invalid value \"\". Expected non-empty string.");
/// ```
pub struct DefaultErrorReporter;

impl ReportError for DefaultErrorReporter {
    fn report(&self, context: ErrorContext) -> Result<serde_json::Value, ValueError> {
        let rendered = serde_json::Value::String(context.value).to_string();
        let detail = match context.message {
            Some(message) => format!(" {message}."),
            None => String::new(),
        };
        Err(ValueError {
            message: format!("Invalid value {rendered}.{detail}"),
            locations: context.location.into_iter().collect(),
        })
    }
}
