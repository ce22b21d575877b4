//! Element and keyboard interaction.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use webhands_core::{AgentContext, keys, wrap_untrusted_content};
use webhands_protocols::{
    ActionError, ActionResult, Actor, BrowserError, DomElementNode, ExecutionState, Page,
};

use super::{element_not_exist, intent_or, last_line, start, succeed};
use crate::action::ActionHandler;

// ============================================================================
// Click Element
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClickElementInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "index of the element")]
    pub index: usize,
    #[schemars(description = "xpath of the element")]
    pub xpath: Option<String>,
}

/// Clicks an element and follows a tab it opens.
pub struct ClickElementHandler;

impl ClickElementHandler {
    async fn click(
        ctx: &AgentContext,
        page: &dyn Page,
        node: &DomElementNode,
        index: usize,
    ) -> Result<String, BrowserError> {
        let tabs_before = ctx.browser.all_tab_ids().await?;
        page.click_element_node(ctx.options.use_vision, node).await?;

        let mut message = ctx.t(
            keys::CLICK_OK,
            &[&index.to_string(), &wrap_untrusted_content(node.text.trim())],
        );
        info!("{}", message);

        let tabs_after = ctx.browser.all_tab_ids().await?;
        if tabs_after.len() > tabs_before.len() {
            let note = ctx.t(keys::CLICK_NEW_TAB_OPENED, &[]);
            info!("{}", note);
            message.push_str(" - ");
            message.push_str(&note);
            if let Some(new_tab) = tabs_after.difference(&tabs_before).next() {
                ctx.browser.switch_tab(*new_tab).await?;
            }
        }
        Ok(message)
    }
}

#[async_trait]
impl ActionHandler for ClickElementHandler {
    type Input = ClickElementInput;
    const NAME: &'static str = "click_element";
    const DESCRIPTION: &'static str = "Click element by index";
    const HAS_INDEX: bool = true;

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: ClickElementInput,
    ) -> Result<ActionResult, ActionError> {
        let index = input.index.to_string();
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::CLICK_START, &[&index]));

        let page = ctx.browser.current_page().await?;
        let state = page.state().await?;
        let Some(node) = state.element(input.index) else {
            return Ok(element_not_exist(ctx, input.index));
        };

        if page.is_file_uploader(node) {
            let message = ctx.t(keys::CLICK_FILE_UPLOADER, &[&index]);
            info!("{}", message);
            return Ok(succeed(ctx, message));
        }

        match Self::click(ctx, page.as_ref(), node, input.index).await {
            Ok(message) => Ok(succeed(ctx, message)),
            Err(e) => {
                let message = ctx.t(keys::ERROR_ELEMENT_NO_LONGER_AVAILABLE, &[&index]);
                ctx.emit_event(Actor::Navigator, ExecutionState::ActFail, message);
                Ok(ActionResult::error(last_line(&e.to_string())))
            }
        }
    }
}

// ============================================================================
// Input Text
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InputTextInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "index of the element")]
    pub index: usize,
    #[schemars(description = "text to input")]
    pub text: String,
    #[schemars(description = "xpath of the element")]
    pub xpath: Option<String>,
}

/// Types text into an input element.
pub struct InputTextHandler;

#[async_trait]
impl ActionHandler for InputTextHandler {
    type Input = InputTextInput;
    const NAME: &'static str = "input_text";
    const DESCRIPTION: &'static str = "Input text into an interactive input element";
    const HAS_INDEX: bool = true;

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: InputTextInput,
    ) -> Result<ActionResult, ActionError> {
        let index = input.index.to_string();
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::INPUT_TEXT_START, &[&index]));

        let page = ctx.browser.current_page().await?;
        let state = page.state().await?;
        let Some(node) = state.element(input.index) else {
            return Ok(element_not_exist(ctx, input.index));
        };

        page.input_text_element_node(ctx.options.use_vision, node, &input.text)
            .await?;

        Ok(succeed(ctx, ctx.t(keys::INPUT_TEXT_OK, &[&input.text, &index])))
    }
}

// ============================================================================
// Send Keys
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SendKeysInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "keys to send")]
    pub keys: String,
}

/// Sends keyboard keys or shortcuts to the page.
pub struct SendKeysHandler;

#[async_trait]
impl ActionHandler for SendKeysHandler {
    type Input = SendKeysInput;
    const NAME: &'static str = "send_keys";
    const DESCRIPTION: &'static str = "Send strings of special keys like Backspace, Insert, PageDown, Delete, Enter. Shortcuts such as `Control+o`, `Control+Shift+T` are supported as well. This gets used in keyboard press. Be aware of different operating systems and their shortcuts";

    async fn handle(&self, ctx: &AgentContext, input: SendKeysInput) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::SEND_KEYS_START, &[&input.keys]));

        let page = ctx.browser.current_page().await?;
        page.send_keys(&input.keys).await?;

        Ok(succeed(ctx, ctx.t(keys::SEND_KEYS_OK, &[&input.keys])))
    }
}
