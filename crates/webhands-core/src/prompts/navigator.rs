//! Navigator prompt.

use async_trait::async_trait;

use webhands_protocols::ActionError;

use super::base::{Prompt, PromptMessage, build_browser_state_message};
use super::templates::{MAX_ACTIONS_PLACEHOLDER, NAVIGATOR_TEMPLATE, with_security_rules};
use crate::context::AgentContext;

/// Prompt for the agent that picks and executes actions.
#[derive(Debug, Clone)]
pub struct NavigatorPrompt {
    system_message: String,
}

impl NavigatorPrompt {
    pub fn new(max_actions_per_step: usize) -> Self {
        let system_message = with_security_rules(NAVIGATOR_TEMPLATE)
            .replace(MAX_ACTIONS_PLACEHOLDER, &max_actions_per_step.to_string())
            .trim()
            .to_string();
        Self { system_message }
    }
}

impl Default for NavigatorPrompt {
    fn default() -> Self {
        Self::new(10)
    }
}

#[async_trait]
impl Prompt for NavigatorPrompt {
    fn system_message(&self) -> &str {
        &self.system_message
    }

    async fn user_message(&self, ctx: &AgentContext) -> Result<PromptMessage, ActionError> {
        build_browser_state_message(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_actions_substituted() {
        let prompt = NavigatorPrompt::new(4);
        assert!(prompt.system_message().contains("Use maximum 4 actions per sequence"));
        assert!(!prompt.system_message().contains("{{max_actions}}"));
    }

    #[test]
    fn test_security_rules_embedded() {
        let prompt = NavigatorPrompt::default();
        assert!(prompt.system_message().contains("CONTENT ISOLATION"));
        assert!(!prompt.system_message().contains("{{security_rules}}"));
        assert!(prompt.system_message().starts_with("<system_instructions>"));
    }
}
