//! This module contains all the built-in sanitization steps which can be
//! applied to a candidate string before validation runs.
//!
//! Each sanitizer takes the current string and returns the next one; the
//! resolver assembles them into a fixed-order chain at definition time.

mod capitalize;
mod case;
mod collapse_whitespace;
mod singleline;
mod trim;
mod truncate;

pub use self::capitalize::{Capitalize, CapitalizeSanitizer};
pub use self::case::{LowerCaseSanitizer, UpperCaseSanitizer};
pub use self::collapse_whitespace::CollapseWhitespaceSanitizer;
pub use self::singleline::SinglelineSanitizer;
pub use self::trim::TrimSanitizer;
pub use self::truncate::TruncateSanitizer;

/// Trait for sanitizing candidate string values.
///
/// Returning `None` marks the value as absent: the pipeline short-circuits
/// and yields null without running any validation. Built-in sanitizers
/// always return `Some`; the escape hatch exists for the user-supplied
/// sanitize hook.
pub trait Sanitize: Send + Sync {
    fn sanitize(&self, value: String) -> Option<String>;
}

impl<F> Sanitize for F
where
    F: Fn(String) -> Option<String> + Send + Sync,
{
    fn sanitize(&self, value: String) -> Option<String> {
        self(value)
    }
}
