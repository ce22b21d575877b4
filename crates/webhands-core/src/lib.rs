//! # WebHands Core
//!
//! Per-task state and the pieces shared by every action handler.
//!
//! ## Components
//!
//! - [`AgentContext`] - Mutable per-task state handed to every action call
//! - [`event_channel`] - Non-blocking event sink for execution events
//! - [`DefaultMessages`] - English message catalog
//! - [`wrap_untrusted_content`] - Marks page-derived text as data
//! - [`prompts`] - Navigator and planner prompt rendering

pub mod context;
pub mod event;
pub mod messages;
pub mod prompts;

#[cfg(test)]
mod test_support;

pub use context::{AgentContext, AgentOptions, StepInfo};
pub use event::{EventReceiver, EventSender, event_channel};
pub use messages::{
    DefaultMessages, UNTRUSTED_CONTENT_TAG, USER_REQUEST_TAG, keys, wrap_untrusted_content,
    wrap_user_request,
};
pub use prompts::{
    NavigatorPrompt, PlannerPrompt, Prompt, PromptMessage, build_browser_state_message,
};
