//! Shared plumbing for the dsocr shim binaries.

pub mod command;
pub mod defaults;
pub mod error;
pub mod probe;
