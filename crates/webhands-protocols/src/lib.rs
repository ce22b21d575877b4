//! # WebHands Protocols
//!
//! Interface definitions shared by the WebHands crates. Contains only traits
//! and plain data types - no implementations of the browser host.
//!
//! ## Core Traits
//!
//! - [`BrowserContext`] - Tab-level browser session owned by the host
//! - [`Page`] - The active page and its DOM primitives
//! - [`MessageFormatter`] - Localized message lookup
//!
//! ## Core Types
//!
//! - [`ActionResult`] - Outcome of one executed action
//! - [`AgentEvent`] - Observational event emitted while acting
//! - [`PageState`] - Snapshot of the page including its selector map

pub mod browser;
pub mod error;
pub mod event;
pub mod messages;
pub mod result;

pub use browser::{
    BrowserContext, DomElementNode, DropdownOption, Page, PageState, ScrollInfo, SelectorMap,
    TabId, TabInfo,
};
pub use error::{ActionError, BrowserError};
pub use event::{Actor, AgentEvent, EventData, ExecutionState};
pub use messages::MessageFormatter;
pub use result::ActionResult;
