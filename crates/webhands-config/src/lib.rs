//! # WebHands Config
//!
//! Configuration for the action core: agent run options, scroll discipline
//! and catalog filtering, loaded from TOML.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
