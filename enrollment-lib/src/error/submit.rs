//! Submission error types

use thiserror::Error;

/// Failure reported by a submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The collaborator refused the record.
    #[error("submission rejected: {reason}")]
    Rejected { reason: String },

    /// The collaborator could not be reached or failed internally.
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

impl SubmitError {
    /// Creates a new rejection error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
