use lazy_regex::{regex, regex_replace_all};

use super::Sanitize;

/// Sanitizer that collapses whitespace runs to a single space.
///
/// With `across_lines` set (the scalar is also singleline), every
/// whitespace run collapses, including what used to be line breaks.
/// Otherwise line breaks are preserved: the value is split on each newline
/// together with its surrounding whitespace, interior runs collapse per
/// segment, and the segments are rejoined with single newlines.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{CollapseWhitespaceSanitizer, Sanitize as _};
///
/// let sanitizer = CollapseWhitespaceSanitizer { across_lines: false };
/// assert_eq!(
///     sanitizer.sanitize("a  b \n\t c  d".into()),
///     Some("a b\nc d".into()),
/// );
/// ```
pub struct CollapseWhitespaceSanitizer {
    pub across_lines: bool,
}

impl Sanitize for CollapseWhitespaceSanitizer {
    fn sanitize(&self, value: String) -> Option<String> {
        if self.across_lines {
            return Some(regex_replace_all!(r"\s+", &value, " ").into_owned());
        }

        let collapsed = regex!(r"\s*\n\s*")
            .split(&value)
            .map(|segment| regex_replace_all!(r"\s+", segment, " "))
            .collect::<Vec<_>>()
            .join("\n");
        Some(collapsed)
    }
}
