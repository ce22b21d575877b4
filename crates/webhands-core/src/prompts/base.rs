//! Shared browser state rendering.

use std::fmt::Write;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use webhands_protocols::{ActionError, PageState, TabInfo};

use crate::context::AgentContext;
use crate::messages::wrap_untrusted_content;

/// A user-role message, optionally carrying a screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub text: String,
    /// Base64 JPEG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PromptMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The screenshot as a `data:` URL.
    pub fn image_url(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(|image| format!("data:image/jpeg;base64,{}", image))
    }
}

/// A system prompt plus a per-step user message.
#[async_trait]
pub trait Prompt: Send + Sync {
    fn system_message(&self) -> &str;

    async fn user_message(&self, ctx: &AgentContext) -> Result<PromptMessage, ActionError>;
}

/// Render the current browser state for the model.
///
/// The element list comes from the page and is wrapped as untrusted content.
/// Errors in the results history are cut to their last line.
pub async fn build_browser_state_message(
    ctx: &AgentContext,
) -> Result<PromptMessage, ActionError> {
    let page = ctx.browser.current_page().await?;
    let state = page.state().await?;

    let elements = render_elements(&state, &ctx.options.include_attributes);

    let mut step_description = format!(
        "Current step: {}/{}\n",
        ctx.step_info.step_number + 1,
        ctx.step_info.max_steps
    );
    let _ = write!(
        step_description,
        "Current date and time: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M")
    );

    let results = render_results(ctx);

    let current_tab = render_tab(&TabInfo {
        id: state.tab_id,
        url: state.url.clone(),
        title: state.title.clone(),
    });
    let other_tabs = state
        .other_tabs()
        .map(|tab| format!("- {}", render_tab(tab)))
        .collect::<Vec<_>>()
        .join("\n");

    let text = format!(
        "\n[Task history memory ends]\n\
         [Current state starts here]\n\
         The following is one-time information - if you need to remember it write it to memory:\n\
         Current tab: {current_tab}\n\
         Other available tabs:\n  {other_tabs}\n\
         Interactive elements from top layer of the current page inside the viewport:\n\
         {elements}\n\
         {step_description}\n\
         {results}\n"
    );

    let message = PromptMessage::text(text);
    match state.screenshot {
        Some(screenshot) if ctx.options.use_vision => Ok(message.with_image(screenshot)),
        _ => Ok(message),
    }
}

fn render_elements(state: &PageState, include_attributes: &[String]) -> String {
    let raw = state.clickable_elements_to_string(include_attributes);
    if raw.is_empty() {
        return "empty page".to_string();
    }

    let percentage = state
        .viewport_percentage()
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| "100%".to_string());
    let scroll_info = format!(
        "[Scroll info of current page] window.scrollY: {}, document.body.scrollHeight: {}, \
         window.visualViewport.height: {}, visual viewport height as percentage of scrollable \
         distance: {}",
        state.scroll_y, state.scroll_height, state.visual_viewport_height, percentage
    );
    debug!("{}", scroll_info);

    format!(
        "{}\n[Start of page]\n{}\n[End of page]\n",
        scroll_info,
        wrap_untrusted_content(&raw)
    )
}

fn render_results(ctx: &AgentContext) -> String {
    let total = ctx.action_results.len();
    let mut out = String::new();
    for (i, result) in ctx.action_results.iter().enumerate() {
        if let Some(content) = result.extracted_content.as_deref().filter(|c| !c.is_empty()) {
            let _ = write!(out, "\nAction result {}/{}: {}", i + 1, total, content);
        }
        if let Some(error) = result.error.as_deref() {
            let last = error.lines().last().unwrap_or_default();
            let _ = write!(out, "\nAction error {}/{}: ...{}", i + 1, total, last);
        }
    }
    out
}

fn render_tab(tab: &TabInfo) -> String {
    format!("{{id: {}, url: {}, title: {}}}", tab.id, tab.url, tab.title)
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
