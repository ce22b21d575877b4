//! Error types for the WebHands protocol layer.

mod action;
mod browser;

pub use action::*;
pub use browser::*;
