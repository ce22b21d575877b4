//! Native `<select>` dropdowns.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use webhands_core::{AgentContext, keys};
use webhands_protocols::{ActionError, ActionResult, Actor, DropdownOption, ExecutionState};

use super::{element_not_exist, fail, intent_or, start, succeed};
use crate::action::ActionHandler;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDropdownOptionsInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "index of the dropdown element")]
    pub index: usize,
}

/// Lists the options of a dropdown.
pub struct GetDropdownOptionsHandler;

impl GetDropdownOptionsHandler {
    /// One `index: text="..."` line per option. The text is JSON-encoded so
    /// the model copies it exactly.
    fn format_options(options: &[DropdownOption]) -> Result<String, ActionError> {
        let mut lines = Vec::with_capacity(options.len());
        for option in options {
            lines.push(format!("{}: text={}", option.index, serde_json::to_string(&option.text)?));
        }
        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl ActionHandler for GetDropdownOptionsHandler {
    type Input = GetDropdownOptionsInput;
    const NAME: &'static str = "get_dropdown_options";
    const DESCRIPTION: &'static str = "Get all options from a native dropdown";
    const HAS_INDEX: bool = true;

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: GetDropdownOptionsInput,
    ) -> Result<ActionResult, ActionError> {
        let index = input.index.to_string();
        start(
            ctx,
            intent_or(ctx, input.intent.as_deref(), keys::GET_DROPDOWN_OPTIONS_START, &[&index]),
        );

        let page = ctx.browser.current_page().await?;
        let state = page.state().await?;
        if state.element(input.index).is_none() {
            return Ok(element_not_exist(ctx, input.index));
        }

        match page.dropdown_options(input.index).await {
            Ok(options) if !options.is_empty() => {
                let mut message = Self::format_options(&options)?;
                message.push('\n');
                message.push_str(&ctx.t(keys::GET_DROPDOWN_OPTIONS_USE_EXACT_TEXT, &[]));
                ctx.emit_event(
                    Actor::Navigator,
                    ExecutionState::ActOk,
                    ctx.t(keys::GET_DROPDOWN_OPTIONS_OK, &[&options.len().to_string()]),
                );
                Ok(ActionResult::memory(message))
            }
            Ok(_) => Ok(succeed(ctx, ctx.t(keys::GET_DROPDOWN_OPTIONS_NO_OPTIONS, &[]))),
            Err(e) => Ok(fail(
                ctx,
                ctx.t(keys::GET_DROPDOWN_OPTIONS_FAILED, &[&e.to_string()]),
            )),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SelectDropdownOptionInput {
    #[schemars(description = "purpose of this action")]
    pub intent: Option<String>,
    #[schemars(description = "index of the dropdown element")]
    pub index: usize,
    #[schemars(description = "text of the option")]
    pub text: String,
}

/// Selects a dropdown option by its exact text.
pub struct SelectDropdownOptionHandler;

#[async_trait]
impl ActionHandler for SelectDropdownOptionHandler {
    type Input = SelectDropdownOptionInput;
    const NAME: &'static str = "select_dropdown_option";
    const DESCRIPTION: &'static str = "Select dropdown option for interactive element index by the text of the option you want to select";
    const HAS_INDEX: bool = true;

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: SelectDropdownOptionInput,
    ) -> Result<ActionResult, ActionError> {
        let index = input.index.to_string();
        start(
            ctx,
            intent_or(
                ctx,
                input.intent.as_deref(),
                keys::SELECT_DROPDOWN_OPTION_START,
                &[&input.text, &index],
            ),
        );

        let page = ctx.browser.current_page().await?;
        let state = page.state().await?;
        let Some(node) = state.element(input.index) else {
            return Ok(element_not_exist(ctx, input.index));
        };

        if !node.is_tag("select") {
            let tag = if node.tag_name.is_empty() {
                "unknown"
            } else {
                node.tag_name.as_str()
            };
            return Ok(fail(
                ctx,
                ctx.t(keys::SELECT_DROPDOWN_OPTION_NOT_SELECT, &[&index, tag]),
            ));
        }

        debug!("Selecting '{}' with xpath: {}", input.text, node.xpath);

        match page.select_dropdown_option(input.index, &input.text).await {
            Ok(result) => {
                ctx.emit_event(
                    Actor::Navigator,
                    ExecutionState::ActOk,
                    ctx.t(keys::SELECT_DROPDOWN_OPTION_OK, &[&input.text, &index]),
                );
                Ok(ActionResult::memory(result))
            }
            Err(e) => Ok(fail(
                ctx,
                ctx.t(keys::SELECT_DROPDOWN_OPTION_FAILED, &[&e.to_string()]),
            )),
        }
    }
}
