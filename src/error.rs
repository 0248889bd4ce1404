//! Domain error types
//!
//! Only two things can go wrong inside the vault itself: the editor form can be
//! incomplete, and the system clipboard can refuse a write. Both are reported to the
//! user as toasts and never abort the application.

use thiserror::Error;

/// Reasons the snippet editor refuses to produce a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    MissingTitle,

    #[error("Please enter some code")]
    MissingCode,
}

/// Failures while writing to the system clipboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available")]
    Unavailable,

    #[error("Clipboard write failed: {0}")]
    Write(String),
}
