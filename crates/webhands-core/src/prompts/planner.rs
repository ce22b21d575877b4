//! Planner prompt.

use async_trait::async_trait;

use webhands_protocols::ActionError;

use super::base::{Prompt, PromptMessage, build_browser_state_message};
use super::templates::{PLANNER_TEMPLATE, with_security_rules};
use crate::context::AgentContext;

/// Prompt for the agent that breaks the task into steps and judges completion.
#[derive(Debug, Clone)]
pub struct PlannerPrompt {
    system_message: String,
}

impl PlannerPrompt {
    pub fn new() -> Self {
        Self {
            system_message: with_security_rules(PLANNER_TEMPLATE).trim().to_string(),
        }
    }
}

impl Default for PlannerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompt for PlannerPrompt {
    fn system_message(&self) -> &str {
        &self.system_message
    }

    async fn user_message(&self, ctx: &AgentContext) -> Result<PromptMessage, ActionError> {
        build_browser_state_message(ctx).await
    }
}
