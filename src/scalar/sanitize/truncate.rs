use super::Sanitize;

/// Sanitizer that cuts a string down to at most the given number of
/// characters.
///
/// Counts characters rather than bytes, so it never splits a UTF-8 code
/// point. Strings already short enough pass through unchanged; short
/// strings are never padded.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{Sanitize as _, TruncateSanitizer};
///
/// let sanitizer = TruncateSanitizer(5);
/// assert_eq!(sanitizer.sanitize("hello world".into()), Some("hello".into()));
/// assert_eq!(sanitizer.sanitize("hi".into()), Some("hi".into()));
/// ```
pub struct TruncateSanitizer(pub usize);

impl Sanitize for TruncateSanitizer {
    fn sanitize(&self, mut value: String) -> Option<String> {
        if let Some((index, _)) = value.char_indices().nth(self.0) {
            value.truncate(index);
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_cut_to_exact_length() {
        let sanitizer = TruncateSanitizer(3);
        assert_eq!(
            sanitizer.sanitize("abcdef".to_string()),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_should_leave_short_strings_alone() {
        let sanitizer = TruncateSanitizer(10);
        assert_eq!(
            sanitizer.sanitize("abc".to_string()),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_should_count_characters_not_bytes() {
        let sanitizer = TruncateSanitizer(2);
        assert_eq!(
            sanitizer.sanitize("héllo".to_string()),
            Some("hé".to_string())
        );
    }

    #[test]
    fn test_should_truncate_to_zero() {
        let sanitizer = TruncateSanitizer(0);
        assert_eq!(sanitizer.sanitize("abc".to_string()), Some(String::new()));
    }

    #[test]
    fn test_should_never_increase_length() {
        let sanitizer = TruncateSanitizer(4);
        for input in ["", "a", "abcd", "abcdefgh"] {
            let output = sanitizer.sanitize(input.to_string()).unwrap();
            assert!(output.chars().count() <= 4);
        }
    }
}
