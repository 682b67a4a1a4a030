//! extriage-core
//!
//! Core library for triaging exception logs produced by the JVMTI native
//! debug agent.
//!
//! This crate defines the record model, the log loader, classification by
//! exception class, the benign class-load-failure filter, and per-class
//! report writing.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, Python bindings, etc.).

pub mod model;
pub mod loader;
pub mod classify;
pub mod filter;
pub mod report;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
