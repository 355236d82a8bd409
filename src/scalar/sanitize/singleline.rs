use lazy_regex::regex_replace_all;

use super::Sanitize;

/// Sanitizer that replaces every run of newline characters with a single
/// space.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{Sanitize as _, SinglelineSanitizer};
///
/// let sanitizer = SinglelineSanitizer;
/// assert_eq!(
///     sanitizer.sanitize("one\ntwo\r\n\nthree".into()),
///     Some("one two three".into()),
/// );
/// ```
pub struct SinglelineSanitizer;

impl Sanitize for SinglelineSanitizer {
    fn sanitize(&self, value: String) -> Option<String> {
        Some(regex_replace_all!(r"[\r\n]+", &value, " ").into_owned())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_collapse_newline_runs_to_one_space() {
        let sanitizer = SinglelineSanitizer;
        assert_eq!(
            sanitizer.sanitize("a\nb\n\n\nc".to_string()),
            Some("a b c".to_string())
        );
    }

    #[test]
    fn test_should_treat_crlf_as_one_run() {
        let sanitizer = SinglelineSanitizer;
        assert_eq!(
            sanitizer.sanitize("a\r\nb".to_string()),
            Some("a b".to_string())
        );
    }

    #[test]
    fn test_should_leave_other_whitespace_alone() {
        let sanitizer = SinglelineSanitizer;
        assert_eq!(
            sanitizer.sanitize("a \t b".to_string()),
            Some("a \t b".to_string())
        );
    }
}
