//! Tab management.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use webhands_core::{AgentContext, keys};
use webhands_protocols::{ActionError, ActionResult, TabId};

use super::{intent_or, start, succeed};
use crate::action::ActionHandler;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SwitchTabInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "id of the tab to switch to")]
    pub tab_id: TabId,
}

pub struct SwitchTabHandler;

#[async_trait]
impl ActionHandler for SwitchTabHandler {
    type Input = SwitchTabInput;
    const NAME: &'static str = "switch_tab";
    const DESCRIPTION: &'static str = "Switch to tab by tab id";

    async fn handle(&self, ctx: &AgentContext, input: SwitchTabInput) -> Result<ActionResult, ActionError> {
        let tab_id = input.tab_id.to_string();
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::SWITCH_TAB_START, &[&tab_id]));

        ctx.browser.switch_tab(input.tab_id).await?;

        Ok(succeed(ctx, ctx.t(keys::SWITCH_TAB_OK, &[&tab_id])))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OpenTabInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "url to open")]
    pub url: String,
}

pub struct OpenTabHandler;

#[async_trait]
impl ActionHandler for OpenTabHandler {
    type Input = OpenTabInput;
    const NAME: &'static str = "open_tab";
    const DESCRIPTION: &'static str = "Open URL in new tab";

    async fn handle(&self, ctx: &AgentContext, input: OpenTabInput) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::OPEN_TAB_START, &[&input.url]));

        ctx.browser.open_tab(&input.url).await?;

        Ok(succeed(ctx, ctx.t(keys::OPEN_TAB_OK, &[&input.url])))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CloseTabInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "id of the tab to close")]
    pub tab_id: TabId,
}

pub struct CloseTabHandler;

#[async_trait]
impl ActionHandler for CloseTabHandler {
    type Input = CloseTabInput;
    const NAME: &'static str = "close_tab";
    const DESCRIPTION: &'static str = "Close tab by tab id";

    async fn handle(&self, ctx: &AgentContext, input: CloseTabInput) -> Result<ActionResult, ActionError> {
        let tab_id = input.tab_id.to_string();
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::CLOSE_TAB_START, &[&tab_id]));

        ctx.browser.close_tab(input.tab_id).await?;

        Ok(succeed(ctx, ctx.t(keys::CLOSE_TAB_OK, &[&tab_id])))
    }
}
