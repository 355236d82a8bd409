use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{ConfigError, ErrorContext, ErrorKind, ValueError};
use crate::scalar::config::{Pattern, StringScalarConfig};
use crate::scalar::describe;
use crate::scalar::hooks::DefaultErrorReporter;
use crate::scalar::input::{InputValue, Literal, LiteralKind};
use crate::scalar::pipeline::Pipeline;
use crate::scalar::sanitize::{
    CapitalizeSanitizer, CollapseWhitespaceSanitizer, LowerCaseSanitizer, Sanitize,
    SinglelineSanitizer, TrimSanitizer, TruncateSanitizer, UpperCaseSanitizer,
};

/// Defines a named string scalar from a declarative configuration.
///
/// The configuration is resolved exactly once: the pattern is compiled, the
/// description synthesized, the sanitizer chain assembled. Every subsequent
/// inbound value flows only through the resulting scalar's pipeline.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::{InputValue, StringScalarConfig, define_string_scalar};
///
/// let scalar = define_string_scalar(StringScalarConfig {
///     trim: true,
///     min: Some(3),
///     ..StringScalarConfig::named("Username")
/// })
/// .unwrap();
///
/// let value = scalar
///     .coerce_input_value(InputValue::Str("  alice  ".to_string()))
///     .unwrap();
/// assert_eq!(value, "alice");
/// ```
pub fn define_string_scalar(config: StringScalarConfig) -> Result<StringScalar, ConfigError> {
    StringScalar::define(config)
}

/// A resolved string scalar: a name, advisory metadata and the three host
/// hooks (output serialization, input coercion from value, input coercion
/// from literal).
///
/// Immutable after definition; never re-resolved.
pub struct StringScalar {
    name: String,
    description: Option<String>,
    strict_literal_type: bool,
    extensions: Map<String, Value>,
    pipeline: Pipeline,
}

impl StringScalar {
    /// Resolves a configuration into a scalar. See [`define_string_scalar`].
    pub fn define(config: StringScalarConfig) -> Result<Self, ConfigError> {
        let StringScalarConfig {
            name,
            description,
            trim,
            trim_left,
            trim_right,
            singleline,
            collapse_whitespace,
            truncate,
            upper_case,
            lower_case,
            capitalize,
            sanitize,
            empty,
            min,
            max,
            pattern,
            test,
            parse,
            error,
            strict_literal_type,
            extensions,
        } = config;

        if name.is_empty() {
            return Err(ConfigError::MissingName);
        }

        let pattern = match pattern {
            Some(Pattern::Compiled(regex)) => Some(regex),
            Some(Pattern::Source(source)) => Some(Regex::new(&source).map_err(|err| {
                ConfigError::InvalidPattern {
                    pattern: source,
                    source: err,
                }
            })?),
            None => None,
        };

        let description = match description {
            Some(description) => Some(description),
            None if test.is_none() => Some(describe::synthesize(
                min,
                max,
                pattern.as_ref().map(|regex| regex.as_str()),
                trim,
                trim_left,
                trim_right,
            )),
            None => None,
        };

        let mut sanitizers: Vec<Box<dyn Sanitize>> = Vec::new();
        if trim || trim_left || trim_right {
            sanitizers.push(Box::new(TrimSanitizer {
                left: trim || trim_left,
                right: trim || trim_right,
            }));
        }
        if singleline {
            sanitizers.push(Box::new(SinglelineSanitizer));
        }
        if collapse_whitespace {
            sanitizers.push(Box::new(CollapseWhitespaceSanitizer {
                across_lines: singleline,
            }));
        }
        if let Some(length) = truncate {
            sanitizers.push(Box::new(TruncateSanitizer(length)));
        }
        if upper_case {
            sanitizers.push(Box::new(UpperCaseSanitizer));
        } else if lower_case {
            sanitizers.push(Box::new(LowerCaseSanitizer));
        }
        if let Some(mode) = capitalize {
            sanitizers.push(Box::new(CapitalizeSanitizer(mode)));
        }
        if let Some(custom) = sanitize {
            sanitizers.push(custom);
        }

        let pipeline = Pipeline {
            sanitizers,
            empty,
            min,
            max,
            pattern,
            test,
            parse,
            reporter: error.unwrap_or_else(|| Box::new(DefaultErrorReporter)),
        };

        Ok(Self {
            name,
            description,
            strict_literal_type,
            extensions,
            pipeline,
        })
    }

    /// The scalar's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scalar's description, supplied or synthesized.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Configuration keys the pipeline does not interpret, preserved for
    /// the host's scalar-definition construct.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Serializes a value flowing out of the system.
    ///
    /// The output direction bypasses the pipeline entirely: strings and
    /// null pass through untouched, anything else gets a minimal string
    /// coercion.
    pub fn serialize_output(&self, value: Value) -> Value {
        match value {
            Value::String(_) | Value::Null => value,
            other => Value::String(other.to_string()),
        }
    }

    /// Coerces an inbound value supplied through a variable.
    ///
    /// Non-string values coerce to null rather than erroring; strings run
    /// the full pipeline.
    pub fn coerce_input_value(&self, raw: InputValue) -> Result<Value, ValueError> {
        match raw {
            InputValue::Str(text) => self.pipeline.process(text, None),
            InputValue::Other(_) => Ok(Value::Null),
        }
    }

    /// Coerces a literal embedded in a request document.
    ///
    /// The literal's declared kind must be `String` before its text enters
    /// the pipeline. Non-string literals fail with a type-mismatch error in
    /// strict mode (the default), or coerce to null when
    /// `strict_literal_type` is disabled.
    pub fn coerce_input_literal(&self, literal: &Literal) -> Result<Value, ValueError> {
        if literal.kind != LiteralKind::String {
            if !self.strict_literal_type {
                return Ok(Value::Null);
            }
            let context = ErrorContext {
                message: Some(format!("Expected type String, found {}", literal.kind)),
                location: literal.location,
                ..ErrorContext::new(ErrorKind::Type, literal.value.clone())
            };
            return self.pipeline.report(context);
        }
        self.pipeline
            .process(literal.value.clone(), literal.location.as_ref())
    }
}
