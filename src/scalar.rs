//! This module contains the string scalar abstractions: the declarative
//! configuration, the resolved scalar definition and the value pipeline.

pub mod config;
pub mod definition;
pub(crate) mod describe;
pub mod hooks;
pub mod input;
pub(crate) mod pipeline;
pub mod sanitize;
