//! Scrolling.
//!
//! `previous_page` and `next_page` check the scroll boundary first and report
//! "already there" without scrolling. They also count against the page scroll
//! limit when one is configured. A failed scroll-info query skips the boundary
//! check. A scroll primitive that fails becomes an error result, cut to its
//! last line.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use webhands_core::{AgentContext, keys};
use webhands_protocols::{ActionError, ActionResult, BrowserError, DomElementNode, Page};

use super::{element_not_exist, fail, intent_or, last_line, start, succeed};
use crate::action::ActionHandler;

/// What a scroll applies to.
enum Target {
    Page,
    Element(usize, DomElementNode),
}

/// Resolve an optional index against the cached state. `Err` carries the
/// element-not-exist result to return as-is.
async fn resolve_target(
    ctx: &AgentContext,
    page: &dyn Page,
    index: Option<usize>,
) -> Result<Result<Target, ActionResult>, ActionError> {
    let Some(index) = index else {
        return Ok(Ok(Target::Page));
    };
    let state = page.cached_state().await?;
    match state.selector_map.get(&index) {
        Some(node) => Ok(Ok(Target::Element(index, node.clone()))),
        None => Ok(Err(element_not_exist(ctx, index))),
    }
}

fn scroll_limit_reached(ctx: &AgentContext) -> ActionResult {
    let limit = ctx.options.max_page_scrolls.unwrap_or_default().to_string();
    fail(ctx, ctx.t(keys::ERROR_SCROLL_LIMIT_REACHED, &[&limit]))
}

fn scroll_failed(ctx: &AgentContext, error: &BrowserError) -> ActionResult {
    fail(ctx, last_line(&error.to_string()).to_string())
}

/// Scroll to a fixed percentage, shared by percent, top and bottom.
/// `Some` carries an error result to return as-is.
async fn scroll_to(
    ctx: &AgentContext,
    y_percent: u32,
    index: Option<usize>,
) -> Result<Option<ActionResult>, ActionError> {
    let page = ctx.browser.current_page().await?;
    let scrolled = match resolve_target(ctx, page.as_ref(), index).await? {
        Err(result) => return Ok(Some(result)),
        Ok(Target::Page) => page.scroll_to_percent(y_percent, None).await,
        Ok(Target::Element(_, node)) => {
            info!("Scrolling to percent {} of element {}", y_percent, node.xpath);
            page.scroll_to_percent(y_percent, Some(&node)).await
        }
    };
    Ok(scrolled.err().map(|e| scroll_failed(ctx, &e)))
}

// ============================================================================
// Scroll To Percent / Top / Bottom
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScrollToPercentInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(
        description = "percentage to scroll to - min 0, max 100; 0 is top, 100 is bottom",
        range(max = 100)
    )]
    pub y_percent: u32,
    #[schemars(description = "index of the element")]
    pub index: Option<usize>,
}

/// Scrolls the page, or an element, to a vertical percentage.
pub struct ScrollToPercentHandler;

#[async_trait]
impl ActionHandler for ScrollToPercentHandler {
    type Input = ScrollToPercentInput;
    const NAME: &'static str = "scroll_to_percent";
    const DESCRIPTION: &'static str = "Scrolls to a particular vertical percentage of the document or an element. If no index of element is specified, scroll the whole document.";

    fn check(input: &ScrollToPercentInput) -> Result<(), String> {
        if input.y_percent > 100 {
            return Err(format!("y_percent must be between 0 and 100, got {}", input.y_percent));
        }
        Ok(())
    }

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: ScrollToPercentInput,
    ) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::SCROLL_TO_PERCENT_START, &[]));

        if let Some(result) = scroll_to(ctx, input.y_percent, input.index).await? {
            return Ok(result);
        }
        Ok(succeed(
            ctx,
            ctx.t(keys::SCROLL_TO_PERCENT_OK, &[&input.y_percent.to_string()]),
        ))
    }
}

/// Input shared by the scroll actions that only take an optional element.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScrollPageInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "index of the element")]
    pub index: Option<usize>,
}

/// Scrolls the page, or an element, to the top.
pub struct ScrollToTopHandler;

#[async_trait]
impl ActionHandler for ScrollToTopHandler {
    type Input = ScrollPageInput;
    const NAME: &'static str = "scroll_to_top";
    const DESCRIPTION: &'static str = "Scroll the document in the window or an element to the top";

    async fn handle(&self, ctx: &AgentContext, input: ScrollPageInput) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::SCROLL_TO_TOP_START, &[]));

        if let Some(result) = scroll_to(ctx, 0, input.index).await? {
            return Ok(result);
        }
        Ok(succeed(ctx, ctx.t(keys::SCROLL_TO_TOP_OK, &[])))
    }
}

/// Scrolls the page, or an element, to the bottom.
pub struct ScrollToBottomHandler;

#[async_trait]
impl ActionHandler for ScrollToBottomHandler {
    type Input = ScrollPageInput;
    const NAME: &'static str = "scroll_to_bottom";
    const DESCRIPTION: &'static str = "Scroll the document in the window or an element to the bottom";

    async fn handle(&self, ctx: &AgentContext, input: ScrollPageInput) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::SCROLL_TO_BOTTOM_START, &[]));

        if let Some(result) = scroll_to(ctx, 100, input.index).await? {
            return Ok(result);
        }
        Ok(succeed(ctx, ctx.t(keys::SCROLL_TO_BOTTOM_OK, &[])))
    }
}

// ============================================================================
// Previous / Next Page
// ============================================================================

/// Scrolls one page up.
pub struct PreviousPageHandler;

#[async_trait]
impl ActionHandler for PreviousPageHandler {
    type Input = ScrollPageInput;
    const NAME: &'static str = "previous_page";
    const DESCRIPTION: &'static str = "Scroll the document in the window or an element to the previous page. If no index is specified, scroll the whole document.";

    async fn handle(&self, ctx: &AgentContext, input: ScrollPageInput) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::PREVIOUS_PAGE_START, &[]));

        let page = ctx.browser.current_page().await?;
        let scrolled = match resolve_target(ctx, page.as_ref(), input.index).await? {
            Err(result) => return Ok(result),
            Ok(Target::Element(index, node)) => {
                match page.element_scroll_info(&node).await {
                    Ok(info) if info.is_at_top() => {
                        let message = ctx.t(keys::ERROR_ALREADY_AT_TOP, &[&index.to_string()]);
                        return Ok(succeed(ctx, message));
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Failed to get element scroll info: {}", e),
                }
                if !ctx.try_consume_page_scroll() {
                    return Ok(scroll_limit_reached(ctx));
                }
                page.scroll_to_previous_page(Some(&node)).await
            }
            Ok(Target::Page) => {
                match page.scroll_info().await {
                    Ok(info) if info.is_at_top() => {
                        return Ok(succeed(ctx, ctx.t(keys::ERROR_PAGE_ALREADY_AT_TOP, &[])));
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Failed to get page scroll info: {}", e),
                }
                if !ctx.try_consume_page_scroll() {
                    return Ok(scroll_limit_reached(ctx));
                }
                page.scroll_to_previous_page(None).await
            }
        };
        if let Err(e) = scrolled {
            return Ok(scroll_failed(ctx, &e));
        }
        Ok(succeed(ctx, ctx.t(keys::PREVIOUS_PAGE_OK, &[])))
    }
}

/// Scrolls one page down.
pub struct NextPageHandler;

#[async_trait]
impl ActionHandler for NextPageHandler {
    type Input = ScrollPageInput;
    const NAME: &'static str = "next_page";
    const DESCRIPTION: &'static str = "Scroll the document in the window or an element to the next page. If no index is specified, scroll the whole document.";

    async fn handle(&self, ctx: &AgentContext, input: ScrollPageInput) -> Result<ActionResult, ActionError> {
        start(ctx, intent_or(ctx, input.intent.as_deref(), keys::NEXT_PAGE_START, &[]));

        let page = ctx.browser.current_page().await?;
        let scrolled = match resolve_target(ctx, page.as_ref(), input.index).await? {
            Err(result) => return Ok(result),
            Ok(Target::Element(index, node)) => {
                match page.element_scroll_info(&node).await {
                    Ok(info) if info.is_at_bottom() => {
                        let message = ctx.t(keys::ERROR_ALREADY_AT_BOTTOM, &[&index.to_string()]);
                        return Ok(succeed(ctx, message));
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Failed to get element scroll info: {}", e),
                }
                if !ctx.try_consume_page_scroll() {
                    return Ok(scroll_limit_reached(ctx));
                }
                page.scroll_to_next_page(Some(&node)).await
            }
            Ok(Target::Page) => {
                match page.scroll_info().await {
                    Ok(info) if info.is_at_bottom() => {
                        return Ok(succeed(ctx, ctx.t(keys::ERROR_PAGE_ALREADY_AT_BOTTOM, &[])));
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Failed to get page scroll info: {}", e),
                }
                if !ctx.try_consume_page_scroll() {
                    return Ok(scroll_limit_reached(ctx));
                }
                page.scroll_to_next_page(None).await
            }
        };
        if let Err(e) = scrolled {
            return Ok(scroll_failed(ctx, &e));
        }
        Ok(succeed(ctx, ctx.t(keys::NEXT_PAGE_OK, &[])))
    }
}

// ============================================================================
// Scroll To Text
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScrollToTextInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "text to scroll to")]
    pub text: String,
    #[serde(default = "default_nth")]
    #[schemars(
        description = "which occurrence of the text to scroll to (1-indexed, default: 1)",
        range(min = 1)
    )]
    pub nth: u32,
}

fn default_nth() -> u32 {
    1
}

/// Scrolls to the nth occurrence of some text.
pub struct ScrollToTextHandler;

#[async_trait]
impl ActionHandler for ScrollToTextHandler {
    type Input = ScrollToTextInput;
    const NAME: &'static str = "scroll_to_text";
    const DESCRIPTION: &'static str = "If you dont find something which you want to interact with in current viewport, try to scroll to it";

    fn check(input: &ScrollToTextInput) -> Result<(), String> {
        if input.nth < 1 {
            return Err("nth must be at least 1".to_string());
        }
        Ok(())
    }

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: ScrollToTextInput,
    ) -> Result<ActionResult, ActionError> {
        let nth = input.nth.to_string();
        start(
            ctx,
            intent_or(ctx, input.intent.as_deref(), keys::SCROLL_TO_TEXT_START, &[&input.text, &nth]),
        );

        let page = ctx.browser.current_page().await?;
        match page.scroll_to_text(&input.text, input.nth).await {
            Ok(true) => Ok(succeed(ctx, ctx.t(keys::SCROLL_TO_TEXT_OK, &[&input.text, &nth]))),
            Ok(false) => Ok(succeed(
                ctx,
                ctx.t(keys::SCROLL_TO_TEXT_NOT_FOUND, &[&input.text, &nth]),
            )),
            Err(e) => Ok(fail(
                ctx,
                ctx.t(keys::SCROLL_TO_TEXT_FAILED, &[&e.to_string()]),
            )),
        }
    }
}
