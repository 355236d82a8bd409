//! Auto-generated scalar descriptions.
//!
//! Synthesized only when the configuration supplies neither a description
//! nor a custom test. Purely advisory metadata for schema introspection; it
//! has no effect on validation.

const PREFIX: &str = "A string";

pub(crate) fn synthesize(
    min: Option<usize>,
    max: Option<usize>,
    pattern: Option<&str>,
    trim: bool,
    trim_left: bool,
    trim_right: bool,
) -> String {
    let mut description = String::from(PREFIX);

    match (min, max) {
        (Some(min), Some(max)) => {
            description.push_str(&format!(" between {min} and {max} characters"));
        }
        (Some(min), None) => {
            description.push_str(&format!(" of at least {min} characters"));
        }
        (None, Some(max)) => {
            description.push_str(&format!(" at most {max} characters"));
        }
        (None, None) => {}
    }

    if let Some(pattern) = pattern {
        if description.len() > PREFIX.len() {
            description.push_str(" and");
        }
        description.push_str(&format!(" that matches the pattern '{pattern}'"));
    }

    if trim {
        description.push_str(" that is trimmed.");
    } else if trim_left {
        description.push_str(" that is trimmed to the left.");
    } else if trim_right {
        description.push_str(" that is trimmed to the right.");
    } else {
        description.push('.');
    }

    description
}
