#![crate_name = "string_scalar"]
#![crate_type = "lib"]

//! # String Scalar
//!
//! This crate produces configurable string-validation/sanitization units for
//! schema-driven input layers. A declarative [`StringScalarConfig`](crate::prelude::StringScalarConfig)
//! is resolved once into a [`StringScalar`](crate::prelude::StringScalar), which applies a fixed
//! pipeline of sanitize, validate and parse steps to every inbound value and
//! returns either the cleaned value or a structured rejection.
//!
//! You can import all the useful types and traits by using the prelude module:
//!
//! ```rust
//! use string_scalar::prelude::*;
//! ```
//!
//! ## Types
//!
//! ### Definition
//!
//! - [`StringScalar`](crate::prelude::StringScalar)
//! - [`StringScalarConfig`](crate::prelude::StringScalarConfig)
//! - [`Pattern`](crate::prelude::Pattern)
//! - [`define_string_scalar`](crate::prelude::define_string_scalar)
//!
//! ### Input
//!
//! - [`InputValue`](crate::prelude::InputValue)
//! - [`Literal`](crate::prelude::Literal)
//! - [`LiteralKind`](crate::prelude::LiteralKind)
//! - [`SourceLocation`](crate::prelude::SourceLocation)
//!
//! ### Sanitizers
//!
//! - [`Sanitize`](crate::prelude::Sanitize)
//! - [`Capitalize`](crate::prelude::Capitalize)
//! - [`CapitalizeSanitizer`](crate::prelude::CapitalizeSanitizer)
//! - [`CollapseWhitespaceSanitizer`](crate::prelude::CollapseWhitespaceSanitizer)
//! - [`LowerCaseSanitizer`](crate::prelude::LowerCaseSanitizer)
//! - [`SinglelineSanitizer`](crate::prelude::SinglelineSanitizer)
//! - [`TrimSanitizer`](crate::prelude::TrimSanitizer)
//! - [`TruncateSanitizer`](crate::prelude::TruncateSanitizer)
//! - [`UpperCaseSanitizer`](crate::prelude::UpperCaseSanitizer)
//!
//! ### Hooks
//!
//! - [`Test`](crate::prelude::Test)
//! - [`Parse`](crate::prelude::Parse)
//! - [`ReportError`](crate::prelude::ReportError)
//! - [`DefaultErrorReporter`](crate::prelude::DefaultErrorReporter)
//!
//! ### Errors
//!
//! - [`ConfigError`](crate::prelude::ConfigError)
//! - [`ErrorContext`](crate::prelude::ErrorContext)
//! - [`ErrorKind`](crate::prelude::ErrorKind)
//! - [`StringScalarError`](crate::prelude::StringScalarError)
//! - [`StringScalarResult`](crate::prelude::StringScalarResult)
//! - [`ValueError`](crate::prelude::ValueError)

mod error;
pub mod prelude;
mod scalar;
