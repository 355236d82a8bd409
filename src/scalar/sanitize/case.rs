use super::Sanitize;

/// Sanitizer that converts strings to uppercase.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{Sanitize as _, UpperCaseSanitizer};
///
/// let sanitizer = UpperCaseSanitizer;
/// assert_eq!(sanitizer.sanitize("Hello, World!".into()), Some("HELLO, WORLD!".into()));
/// ```
pub struct UpperCaseSanitizer;

impl Sanitize for UpperCaseSanitizer {
    fn sanitize(&self, value: String) -> Option<String> {
        Some(value.to_uppercase())
    }
}

/// Sanitizer that converts strings to lowercase.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{LowerCaseSanitizer, Sanitize as _};
///
/// let sanitizer = LowerCaseSanitizer;
/// assert_eq!(sanitizer.sanitize("Hello, World!".into()), Some("hello, world!".into()));
/// ```
pub struct LowerCaseSanitizer;

impl Sanitize for LowerCaseSanitizer {
    fn sanitize(&self, value: String) -> Option<String> {
        Some(value.to_lowercase())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_uppercase_whole_string() {
        let sanitizer = UpperCaseSanitizer;
        assert_eq!(
            sanitizer.sanitize("hello".to_string()),
            Some("HELLO".to_string())
        );
    }

    #[test]
    fn test_should_lowercase_whole_string() {
        let sanitizer = LowerCaseSanitizer;
        assert_eq!(
            sanitizer.sanitize("HeLLo".to_string()),
            Some("hello".to_string())
        );
    }
}
