//! Browser host errors.

use thiserror::Error;

use crate::browser::TabId;

/// Failures reported by the browser host.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Browser not connected")]
    NotConnected,

    #[error("No active page")]
    NoActivePage,

    #[error("Tab not found: {0}")]
    TabNotFound(TabId),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error("Script error: {0}")]
    Script(String),
}
