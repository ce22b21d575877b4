//! Content caching.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use webhands_core::{AgentContext, keys, wrap_untrusted_content};
use webhands_protocols::{ActionError, ActionResult, Actor, ExecutionState};

use super::{intent_or, start};
use crate::action::ActionHandler;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CacheContentInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "content to cache")]
    pub content: String,
}

/// Stores findings in the results history.
///
/// The findings were read off the page, so the stored message is wrapped as
/// untrusted content.
pub struct CacheContentHandler;

#[async_trait]
impl ActionHandler for CacheContentHandler {
    type Input = CacheContentInput;
    const NAME: &'static str = "cache_content";
    const DESCRIPTION: &'static str = "Cache what you have found so far from the current page for future use";

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: CacheContentInput,
    ) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::CACHE_START, &[&input.content]));

        let message = ctx.t(keys::CACHE_OK, &[&input.content]);
        ctx.emit_event(Actor::Navigator, ExecutionState::ActOk, message.clone());

        Ok(ActionResult::memory(wrap_untrusted_content(&message)))
    }
}
