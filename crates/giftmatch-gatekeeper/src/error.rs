//! Gatekeeper error types

use crate::RejectionReason;
use thiserror::Error;

/// Errors that can occur while admitting an exchange draft
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatekeeperError {
    /// The draft failed validation
    #[error("Exchange rejected: {}", format_reasons(.0))]
    Rejected(Vec<RejectionReason>),

    /// Validation error (internal)
    #[error("Validation error: {0}")]
    Validation(String),
}

fn format_reasons(reasons: &[RejectionReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
