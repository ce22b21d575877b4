//! Prompt rendering for the navigator and planner.

mod base;
mod navigator;
mod planner;
pub mod templates;

pub use base::{Prompt, PromptMessage, build_browser_state_message};
pub use navigator::NavigatorPrompt;
pub use planner::PlannerPrompt;
