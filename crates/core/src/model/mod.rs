//! Core data model for exception records pulled out of an agent log.
//!
//! The JVMTI agent writes one textual block per thrown exception. We keep
//! each block opaque (the stack trace is free-form), but the first lines
//! have a known shape:
//! - line 0 carries a `class=<slash-qualified-name>;` token,
//! - line 2 carries a `will be caught in: <catch site>` annotation
//!   whenever the exception has a catch handler.

use thiserror::Error;

/// How much of a record to quote when reporting a parse problem.
const SNIPPET_LEN: usize = 120;

/// One exception occurrence, as captured by the agent.
///
/// `index` is the record's 0-based position in the source log, kept so
/// errors can point a human at the offending block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ExceptionRecord {
    pub index: usize,
    pub text: String,
}

impl ExceptionRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self { index, text: text.into() }
    }

    /// Line at `idx` (0-based), if the record has that many lines.
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.text.lines().nth(idx)
    }

    /// Short quote of the record's first line for error messages.
    pub fn snippet(&self) -> String {
        let first = self.text.lines().next().unwrap_or("");
        match first.char_indices().nth(SNIPPET_LEN) {
            Some((cut, _)) => format!("{}...", &first[..cut]),
            None => first.to_string(),
        }
    }
}

/// Error type for record parsing and shape checks.
///
/// The original tooling sliced records with bare index arithmetic and an
/// `assert`; malformed input produced garbage class names or killed the
/// process. These variants make every shape violation explicit and point
/// at the record that triggered it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The record has no `class=` token, so no class name can be derived.
    #[error("record {index}: no `class=` token: {snippet:?}")]
    MissingClassToken { index: usize, snippet: String },

    /// A `class=` token was found but never terminated by `;`.
    #[error("record {index}: `class=` value not terminated by `;`: {snippet:?}")]
    UnterminatedClassName { index: usize, snippet: String },

    /// The record is too short to carry a catch-site annotation.
    #[error("record {index}: expected at least 3 lines, found {found}: {snippet:?}")]
    TooShort { index: usize, found: usize, snippet: String },

    /// Line 2 exists but does not carry `will be caught in: `.
    ///
    /// The agent emits a `will not be caught!!` line for uncaught
    /// exceptions, so this shape genuinely occurs; the caller decides
    /// whether it is fatal.
    #[error("record {index}: line 3 lacks `will be caught in: `: {snippet:?}")]
    MissingCatchAnnotation { index: usize, snippet: String },
}

impl RecordError {
    /// Index of the record this error refers to.
    pub fn record_index(&self) -> usize {
        match self {
            RecordError::MissingClassToken { index, .. }
            | RecordError::UnterminatedClassName { index, .. }
            | RecordError::TooShort { index, .. }
            | RecordError::MissingCatchAnnotation { index, .. } => *index,
        }
    }
}
