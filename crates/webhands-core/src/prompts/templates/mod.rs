//! System prompt templates.

mod common;
mod navigator;
mod planner;

pub use common::SECURITY_RULES;
pub use navigator::NAVIGATOR_TEMPLATE;
pub use planner::PLANNER_TEMPLATE;

/// Placeholder replaced by [`SECURITY_RULES`].
pub const SECURITY_RULES_PLACEHOLDER: &str = "{{security_rules}}";

/// Placeholder for the per-step action limit in the navigator template.
pub const MAX_ACTIONS_PLACEHOLDER: &str = "{{max_actions}}";

/// Embed the shared security rules into a template.
pub fn with_security_rules(template: &str) -> String {
    template.replace(SECURITY_RULES_PLACEHOLDER, SECURITY_RULES)
}
