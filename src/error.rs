//! Error taxonomy for the triage pipeline.

use thiserror::Error;

/// Errors produced by the triage pipeline.
///
/// The two variants separate fault domains. [`InvalidInput`] means the
/// caller supplied bad data or parameters; it is raised before any gate
/// runs and names the offending field. [`InvariantViolation`] means the
/// assembled result failed a partition check after the pipeline ran,
/// which indicates a defect in this crate rather than in the input. A
/// server caller can map the two onto different response classes.
///
/// The pipeline is deterministic, so retrying either error reproduces it
/// identically.
///
/// [`InvalidInput`]: TriageError::InvalidInput
/// [`InvariantViolation`]: TriageError::InvariantViolation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriageError {
    /// The caller supplied bad data or parameters.
    #[error("invalid input ({field}): {message}")]
    InvalidInput {
        /// The offending input field or parameter.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// The assembled result bundle failed an internal consistency check.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl TriageError {
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
