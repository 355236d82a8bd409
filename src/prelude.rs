//! Prelude exposes all the public types of the `string-scalar` crate.

pub use crate::error::{
    ConfigError, ErrorContext, ErrorKind, StringScalarError, StringScalarResult, ValueError,
};
pub use crate::scalar::config::{Pattern, StringScalarConfig};
pub use crate::scalar::definition::{StringScalar, define_string_scalar};
pub use crate::scalar::hooks::{DefaultErrorReporter, Parse, ReportError, Test};
pub use crate::scalar::input::{InputValue, Literal, LiteralKind, SourceLocation};
pub use crate::scalar::sanitize::*;
