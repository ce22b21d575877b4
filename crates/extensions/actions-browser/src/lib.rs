//! # WebHands Browser Actions
//!
//! The operations a navigator may request on a live browser session, plus
//! the pieces that expose them to a model and dispatch its choices.
//!
//! - [`Action`] - One named operation with a typed, schema-checked input
//! - [`build_dynamic_action_schema`] - Every action's schema merged into one
//! - [`ActionBuilder`] - The default catalog, optionally filtered
//! - [`ActionRegistry`] - Ordered lookup and sequential execution

mod action;
mod builder;
pub mod handlers;
mod registry;
mod schema;

pub use action::{Action, ActionHandler};
pub use builder::{ActionBuilder, DEFAULT_ACTION_NAMES};
pub use registry::{ActionRegistry, ActionRequest};
pub use schema::{ActionSchema, build_dynamic_action_schema};
