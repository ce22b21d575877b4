//! Default action catalog.

use tracing::{debug, warn};

use webhands_config::ActionsConfig;
use webhands_protocols::ActionError;

use crate::action::Action;
use crate::handlers::*;
use crate::registry::ActionRegistry;

/// Names of every built-in action, in catalog order.
pub const DEFAULT_ACTION_NAMES: &[&str] = &[
    "done",
    "search_google",
    "go_to_url",
    "go_back",
    "wait",
    "click_element",
    "input_text",
    "switch_tab",
    "open_tab",
    "close_tab",
    "cache_content",
    "scroll_to_percent",
    "scroll_to_top",
    "scroll_to_bottom",
    "previous_page",
    "next_page",
    "scroll_to_text",
    "send_keys",
    "get_dropdown_options",
    "select_dropdown_option",
];

/// Builds the actions available to a navigator step.
pub struct ActionBuilder;

impl ActionBuilder {
    /// Every built-in action.
    pub fn build_default_actions() -> Result<Vec<Action>, ActionError> {
        Ok(vec![
            Action::new(DoneHandler)?,
            Action::new(SearchGoogleHandler)?,
            Action::new(GoToUrlHandler)?,
            Action::new(GoBackHandler)?,
            Action::new(WaitHandler)?,
            Action::new(ClickElementHandler)?,
            Action::new(InputTextHandler)?,
            Action::new(SwitchTabHandler)?,
            Action::new(OpenTabHandler)?,
            Action::new(CloseTabHandler)?,
            Action::new(CacheContentHandler)?,
            Action::new(ScrollToPercentHandler)?,
            Action::new(ScrollToTopHandler)?,
            Action::new(ScrollToBottomHandler)?,
            Action::new(PreviousPageHandler)?,
            Action::new(NextPageHandler)?,
            Action::new(ScrollToTextHandler)?,
            Action::new(SendKeysHandler)?,
            Action::new(GetDropdownOptionsHandler)?,
            Action::new(SelectDropdownOptionHandler)?,
        ])
    }

    /// Built-in actions minus the `disabled` names. Unknown names are logged
    /// and ignored.
    pub fn build_actions(disabled: &[String]) -> Result<Vec<Action>, ActionError> {
        for name in disabled {
            if !DEFAULT_ACTION_NAMES.contains(&name.as_str()) {
                warn!("Ignoring unknown disabled action: {}", name);
            }
        }

        let mut actions = Self::build_default_actions()?;
        actions.retain(|action| {
            let keep = !disabled.iter().any(|name| name == action.name());
            if !keep {
                debug!("Action disabled: {}", action.name());
            }
            keep
        });
        Ok(actions)
    }

    /// Registry of the actions enabled by configuration.
    pub fn build_registry(config: &ActionsConfig) -> Result<ActionRegistry, ActionError> {
        ActionRegistry::from_actions(Self::build_actions(&config.disabled)?)
    }
}
