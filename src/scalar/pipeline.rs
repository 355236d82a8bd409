//! The per-value processing unit.
//!
//! A [`Pipeline`] is assembled once by the resolver and bound to its
//! [`StringScalar`](crate::prelude::StringScalar). Each invocation is an
//! independent, side-effect-free computation over the resolved
//! configuration, so a pipeline may be shared across threads freely.

use regex::Regex;
use serde_json::Value;

use crate::error::{ErrorContext, ErrorKind, ValueError};
use crate::scalar::hooks::{Parse, ReportError, Test};
use crate::scalar::input::SourceLocation;
use crate::scalar::sanitize::Sanitize;

pub(crate) struct Pipeline {
    pub(crate) sanitizers: Vec<Box<dyn Sanitize>>,
    pub(crate) empty: bool,
    pub(crate) min: Option<usize>,
    pub(crate) max: Option<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) test: Option<Box<dyn Test>>,
    pub(crate) parse: Option<Box<dyn Parse>>,
    pub(crate) reporter: Box<dyn ReportError>,
}

impl Pipeline {
    /// Runs the sanitize, validate and parse phases over one candidate
    /// value.
    pub(crate) fn process(
        &self,
        mut value: String,
        location: Option<&SourceLocation>,
    ) -> Result<Value, ValueError> {
        for sanitizer in &self.sanitizers {
            value = match sanitizer.sanitize(value) {
                Some(next) => next,
                // an absent value skips validation entirely
                None => return Ok(Value::Null),
            };
        }

        if let Some(context) = self.check(&value, location) {
            return self.reporter.report(context);
        }

        match &self.parse {
            Some(parse) => Ok(parse.parse(value)),
            None => Ok(Value::String(value)),
        }
    }

    /// Routes a context through the configured reporter.
    pub(crate) fn report(&self, context: ErrorContext) -> Result<Value, ValueError> {
        self.reporter.report(context)
    }

    // First failing check wins; later checks never run.
    fn check(&self, value: &str, location: Option<&SourceLocation>) -> Option<ErrorContext> {
        let location = location.copied();

        if !self.empty && value.is_empty() {
            return Some(ErrorContext {
                message: Some("Expected non-empty string".to_string()),
                location,
                ..ErrorContext::new(ErrorKind::Empty, value)
            });
        }

        let length = value.chars().count();

        if let Some(min) = self.min
            && length < min
        {
            return Some(ErrorContext {
                min: Some(min),
                message: Some(format!("Expected minimum length \"{min}\"")),
                location,
                ..ErrorContext::new(ErrorKind::Min, value)
            });
        }

        if let Some(max) = self.max
            && length > max
        {
            return Some(ErrorContext {
                max: Some(max),
                message: Some(format!("Expected maximum length \"{max}\"")),
                location,
                ..ErrorContext::new(ErrorKind::Max, value)
            });
        }

        if let Some(pattern) = &self.pattern
            && !pattern.is_match(value)
        {
            return Some(ErrorContext {
                pattern: Some(pattern.as_str().to_string()),
                message: Some("Unexpected pattern".to_string()),
                location,
                ..ErrorContext::new(ErrorKind::Pattern, value)
            });
        }

        if let Some(test) = &self.test
            && !test.test(value)
        {
            return Some(ErrorContext {
                location,
                ..ErrorContext::new(ErrorKind::Test, value)
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::scalar::hooks::DefaultErrorReporter;
    use crate::scalar::sanitize::{TrimSanitizer, TruncateSanitizer};

    fn pipeline() -> Pipeline {
        Pipeline {
            sanitizers: vec![],
            empty: false,
            min: None,
            max: None,
            pattern: None,
            test: None,
            parse: None,
            reporter: Box::new(DefaultErrorReporter),
        }
    }

    #[test]
    fn test_should_return_value_unchanged_without_steps() {
        let value = pipeline()
            .process(" 921hluaocb1 au0[g2930,0.uh, ".to_string(), None)
            .unwrap();
        assert_eq!(value, " 921hluaocb1 au0[g2930,0.uh, ");
    }

    #[test]
    fn test_should_run_sanitizers_in_configured_order() {
        let mut pipeline = pipeline();
        pipeline.sanitizers = vec![
            Box::new(TrimSanitizer {
                left: true,
                right: true,
            }),
            Box::new(TruncateSanitizer(10)),
        ];

        let raw = " 921hluaocb1 au0[g2930,0.uh, ";
        let expected: String = raw.trim().chars().take(10).collect();
        let value = pipeline.process(raw.to_string(), None).unwrap();
        assert_eq!(value, expected.as_str());
    }

    #[test]
    fn test_should_short_circuit_when_sanitizer_drops_value() {
        let mut pipeline = pipeline();
        pipeline.min = Some(100);
        pipeline.sanitizers = vec![Box::new(|_: String| -> Option<String> { None })];

        // no min error: validation never runs for an absent value
        let value = pipeline.process("abc".to_string(), None).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_should_reject_first_failing_check_only() {
        let mut pipeline = pipeline();
        pipeline.min = Some(5);
        pipeline.pattern = Some(Regex::new(r"^\d+$").unwrap());

        // fails both min and pattern; min is reported because it runs first
        let error = pipeline.process("abc".to_string(), None).unwrap_err();
        assert!(error.message.contains("minimum length \"5\""));
    }

    #[test]
    fn test_should_attach_location_to_rejections() {
        let mut pipeline = pipeline();
        pipeline.min = Some(5);

        let location = SourceLocation::new(4, 2);
        let error = pipeline
            .process("abc".to_string(), Some(&location))
            .unwrap_err();
        assert_eq!(error.locations, vec![location]);
    }

    #[test]
    fn test_should_parse_accepted_value() {
        let mut pipeline = pipeline();
        pipeline.parse = Some(Box::new(|value: String| {
            Value::Number(serde_json::Number::from(value.chars().count() as u64))
        }));

        let value = pipeline.process("abc".to_string(), None).unwrap();
        assert_eq!(value, serde_json::json!(3));
    }

    #[test]
    fn test_should_measure_length_in_characters() {
        let mut pipeline = pipeline();
        pipeline.min = Some(3);
        pipeline.max = Some(3);

        // 3 characters, more than 3 bytes
        let value = pipeline.process("héé".to_string(), None).unwrap();
        assert_eq!(value, "héé");
    }

    #[test]
    fn test_should_accept_lengths_within_min_max_range() {
        let mut pipeline = pipeline();
        pipeline.min = Some(2);
        pipeline.max = Some(4);

        for input in ["ab", "abc", "abcd"] {
            let value = pipeline.process(input.to_string(), None).unwrap();
            let accepted = value.as_str().unwrap();
            let length = accepted.chars().count();
            assert!((2..=4).contains(&length));
        }
        assert!(pipeline.process("a".to_string(), None).is_err());
        assert!(pipeline.process("abcde".to_string(), None).is_err());
    }
}
