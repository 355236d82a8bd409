//! Tagged representations of inbound data.
//!
//! The host wraps raw data before invoking the scalar, so the pipeline never
//! probes runtime types: an already-typed value becomes an [`InputValue`], a
//! value embedded in a request document becomes a [`Literal`] carrying its
//! declared kind and source location.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An inbound value of unknown type, as supplied through a variable.
///
/// # Example
///
/// ```rust
/// use string_scalar::prelude::InputValue;
///
/// let input = InputValue::from(serde_json::json!("hello"));
/// assert_eq!(input, InputValue::Str("hello".to_string()));
///
/// let input = InputValue::from(serde_json::json!(42));
/// assert_eq!(input, InputValue::Other(serde_json::json!(42)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// A string value, eligible for the pipeline.
    Str(String),
    /// Anything else; coerced to null instead of erroring.
    Other(serde_json::Value),
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Str(text),
            other => Self::Other(other),
        }
    }
}

/// The declared kind of a [`Literal`] in the request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Int,
    Float,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
            Self::Enum => "Enum",
            Self::List => "List",
            Self::Object => "Object",
        };
        write!(f, "{name}")
    }
}

/// A value embedded directly in a request document's source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The kind declared by the document parser.
    pub kind: LiteralKind,
    /// The literal's textual value.
    pub value: String,
    /// Where the literal appears in the source document.
    pub location: Option<SourceLocation>,
}

impl Literal {
    /// Creates a string literal without a source location.
    ///
    /// # Example
    ///
    /// ```rust
    /// use string_scalar::prelude::{Literal, LiteralKind};
    ///
    /// let literal = Literal::string("hello");
    /// assert_eq!(literal.kind, LiteralKind::String);
    /// ```
    pub fn string(value: impl Into<String>) -> Self {
        Self::of_kind(LiteralKind::String, value)
    }

    /// Creates a literal of an arbitrary kind.
    pub fn of_kind(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            location: None,
        }
    }

    /// Attaches a source location to the literal.
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// A line/column reference into the request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
