use lazy_regex::regex_replace_all;

use super::Sanitize;

/// Capitalization sub-modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capitalize {
    /// Uppercase every character.
    Characters,
    /// Uppercase the first character of every word. A word starts at the
    /// beginning of the string or after whitespace.
    Words,
    /// Uppercase the first character at the beginning of the string or
    /// following a ". " sequence.
    Sentences,
    /// Uppercase only the first character of the whole string.
    #[default]
    FirstLetter,
}

/// Sanitizer that applies one [`Capitalize`] sub-mode.
///
/// Applying any sub-mode to an empty string is a no-op.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{Capitalize, CapitalizeSanitizer, Sanitize as _};
///
/// let sanitizer = CapitalizeSanitizer(Capitalize::Words);
/// assert_eq!(
///     sanitizer.sanitize("hello brave new world".into()),
///     Some("Hello Brave New World".into()),
/// );
/// ```
pub struct CapitalizeSanitizer(pub Capitalize);

impl Sanitize for CapitalizeSanitizer {
    fn sanitize(&self, value: String) -> Option<String> {
        let capitalized = match self.0 {
            Capitalize::Characters => value.to_uppercase(),
            Capitalize::Words => {
                regex_replace_all!(r"(?:^|\s)\S", &value, |m: &str| m.to_uppercase()).into_owned()
            }
            Capitalize::Sentences => {
                regex_replace_all!(r"(?:^|\.\s)\S", &value, |m: &str| m.to_uppercase()).into_owned()
            }
            Capitalize::FirstLetter => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => value,
                }
            }
        };
        Some(capitalized)
    }
}
