//! Task completion, navigation and waiting.

use std::time::Duration;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use url::Url;

use webhands_core::{AgentContext, keys};
use webhands_protocols::{ActionError, ActionResult, Actor, ExecutionState};

use super::{intent_or, start, succeed};
use crate::action::ActionHandler;

const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";
const DEFAULT_WAIT_SECONDS: u64 = 3;

// ============================================================================
// Done
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DoneInput {
    #[schemars(description = "final answer for the user")]
    pub text: String,
    #[serde(default = "default_success")]
    #[schemars(description = "whether the ultimate task is fully completed")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

/// Completes the task with the final answer.
pub struct DoneHandler;

#[async_trait]
impl ActionHandler for DoneHandler {
    type Input = DoneInput;
    const NAME: &'static str = "done";
    const DESCRIPTION: &'static str = "Complete task";

    async fn handle(&self, ctx: &AgentContext, input: DoneInput) -> Result<ActionResult, ActionError> {
        start(ctx, Self::NAME.to_string());
        ctx.emit_event(Actor::Navigator, ExecutionState::ActOk, input.text.clone());
        Ok(ActionResult::done(input.text, input.success))
    }
}

// ============================================================================
// Search Google
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchGoogleInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "search query")]
    pub query: String,
}

/// Searches Google in the current tab.
pub struct SearchGoogleHandler;

impl SearchGoogleHandler {
    pub fn search_url(query: &str) -> Result<Url, ActionError> {
        Url::parse_with_params(GOOGLE_SEARCH_URL, &[("q", query)])
            .map_err(|e| ActionError::InvalidInput(e.to_string()))
    }
}

#[async_trait]
impl ActionHandler for SearchGoogleHandler {
    type Input = SearchGoogleInput;
    const NAME: &'static str = "search_google";
    const DESCRIPTION: &'static str =
        "Search the query in Google in the current tab, the query should be a search query like humans search in Google, concrete and not vague or super long. More the single most important items.";

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: SearchGoogleInput,
    ) -> Result<ActionResult, ActionError> {
        start(
            ctx,
            intent_or(ctx, input.intent.as_deref(), keys::SEARCH_GOOGLE_START, &[&input.query]),
        );

        let url = Self::search_url(&input.query)?;
        ctx.browser.navigate_to(url.as_str()).await?;

        Ok(succeed(ctx, ctx.t(keys::SEARCH_GOOGLE_OK, &[&input.query])))
    }
}

// ============================================================================
// Go To URL
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GoToUrlInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "url to navigate to")]
    pub url: String,
}

/// Navigates the current tab.
pub struct GoToUrlHandler;

#[async_trait]
impl ActionHandler for GoToUrlHandler {
    type Input = GoToUrlInput;
    const NAME: &'static str = "go_to_url";
    const DESCRIPTION: &'static str = "Navigate to URL in the current tab";

    async fn handle(&self, ctx: &AgentContext, input: GoToUrlInput) -> Result<ActionResult, ActionError> {
        start(
            ctx,
            intent_or(ctx, input.intent.as_deref(), keys::GO_TO_URL_START, &[&input.url]),
        );

        ctx.browser.navigate_to(&input.url).await?;

        Ok(succeed(ctx, ctx.t(keys::GO_TO_URL_OK, &[&input.url])))
    }
}

// ============================================================================
// Go Back
// ============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GoBackInput {}

/// Goes back in the current tab's history.
pub struct GoBackHandler;

#[async_trait]
impl ActionHandler for GoBackHandler {
    type Input = GoBackInput;
    const NAME: &'static str = "go_back";
    const DESCRIPTION: &'static str = "Go back to the previous page";

    async fn handle(&self, ctx: &AgentContext, _input: GoBackInput) -> Result<ActionResult, ActionError> {
        start(ctx, ctx.t(keys::GO_BACK_START, &[]));

        let page = ctx.browser.current_page().await?;
        page.go_back().await?;

        Ok(succeed(ctx, ctx.t(keys::GO_BACK_OK, &[])))
    }
}

// ============================================================================
// Wait
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WaitInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[serde(default = "default_wait_seconds")]
    #[schemars(description = "amount of seconds")]
    pub seconds: u64,
}

fn default_wait_seconds() -> u64 {
    DEFAULT_WAIT_SECONDS
}

/// Sleeps. Zero seconds falls back to the default.
pub struct WaitHandler;

#[async_trait]
impl ActionHandler for WaitHandler {
    type Input = WaitInput;
    const NAME: &'static str = "wait";
    const DESCRIPTION: &'static str = "Wait for x seconds default 3, do NOT use this action unless user asks to wait explicitly";

    async fn handle(&self, ctx: &AgentContext, input: WaitInput) -> Result<ActionResult, ActionError> {
        let seconds = match input.seconds {
            0 => DEFAULT_WAIT_SECONDS,
            n => n,
        };
        let seconds_text = seconds.to_string();
        start(
            ctx,
            intent_or(ctx, input.intent.as_deref(), keys::WAIT_START, &[&seconds_text]),
        );

        tokio::time::sleep(Duration::from_secs(seconds)).await;

        Ok(succeed(ctx, ctx.t(keys::WAIT_OK, &[&seconds_text])))
    }
}
