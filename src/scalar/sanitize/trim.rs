use super::Sanitize;

/// Sanitizer that strips whitespace from one or both ends of a string.
///
/// Setting both sides is equivalent to a full trim; the left and right
/// flags compose without conflict.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{Sanitize as _, TrimSanitizer};
///
/// let sanitizer = TrimSanitizer { left: true, right: true };
/// assert_eq!(sanitizer.sanitize("  hello  ".into()), Some("hello".into()));
/// ```
pub struct TrimSanitizer {
    pub left: bool,
    pub right: bool,
}

impl Sanitize for TrimSanitizer {
    fn sanitize(&self, value: String) -> Option<String> {
        let trimmed = match (self.left, self.right) {
            (true, true) => value.trim(),
            (true, false) => value.trim_start(),
            (false, true) => value.trim_end(),
            (false, false) => return Some(value),
        };
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_trim_both_sides() {
        let sanitizer = TrimSanitizer {
            left: true,
            right: true,
        };
        assert_eq!(
            sanitizer.sanitize("  hello  ".to_string()),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_should_trim_left_only() {
        let sanitizer = TrimSanitizer {
            left: true,
            right: false,
        };
        assert_eq!(
            sanitizer.sanitize("  hello  ".to_string()),
            Some("hello  ".to_string())
        );
    }

    #[test]
    fn test_should_trim_right_only() {
        let sanitizer = TrimSanitizer {
            left: false,
            right: true,
        };
        assert_eq!(
            sanitizer.sanitize("  hello  ".to_string()),
            Some("  hello".to_string())
        );
    }

    #[test]
    fn test_should_be_idempotent() {
        let sanitizer = TrimSanitizer {
            left: true,
            right: true,
        };
        let once = sanitizer.sanitize(" \t hello \n ".to_string()).unwrap();
        let twice = sanitizer.sanitize(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
