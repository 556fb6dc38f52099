//! Engine error types.

use crate::invariants::InvariantViolation;
use derive_more::{Display, Error};
use tracing::instrument;

/// Invariant violation with location tracking.
///
/// Raised only when a caller breaks the engine's contract (for example by
/// asking the computer to move on a full board). Illegal clicks are not
/// errors; they come back as [`crate::Ignored`].
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", message, file, line)]
pub struct EngineError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates an error listing every violated invariant.
    #[track_caller]
    pub fn from_violations(context: &str, violations: &[InvariantViolation]) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(format!("{}: {}", context, descriptions))
    }
}
