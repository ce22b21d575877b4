//! Action dispatch errors.

use thiserror::Error;

use super::BrowserError;

/// Errors surfaced to the caller of an action.
///
/// Runtime failures a handler anticipates (missing element, wrong tag) are not
/// errors: they are reported through [`ActionResult::error`](crate::ActionResult)
/// so the model can correct itself in the next round.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The model supplied arguments that do not satisfy the action schema.
    /// The handler was not invoked.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate action name: {0}")]
    DuplicateAction(String),

    #[error("Action not found: {0}")]
    NotFound(String),

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ActionError {
    /// Whether this error came from schema validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
