//! Action handlers.
//!
//! Every handler follows the same shape: emit a start event carrying the
//! model's intent (or a default message), perform the side effect, then emit
//! an ok or fail event and return the result. Failures the model can correct
//! (missing element, wrong tag) become error results. Collaborator failures
//! propagate as [`ActionError::Browser`](webhands_protocols::ActionError).

mod content;
mod dropdown;
mod interaction;
mod navigation;
mod scroll;
mod tabs;

pub use content::{CacheContentHandler, CacheContentInput};
pub use dropdown::{
    GetDropdownOptionsHandler, GetDropdownOptionsInput, SelectDropdownOptionHandler,
    SelectDropdownOptionInput,
};
pub use interaction::{
    ClickElementHandler, ClickElementInput, InputTextHandler, InputTextInput, SendKeysHandler,
    SendKeysInput,
};
pub use navigation::{
    DoneHandler, DoneInput, GoBackHandler, GoBackInput, GoToUrlHandler, GoToUrlInput,
    SearchGoogleHandler, SearchGoogleInput, WaitHandler, WaitInput,
};
pub use scroll::{
    NextPageHandler, PreviousPageHandler, ScrollPageInput, ScrollToBottomHandler,
    ScrollToPercentHandler, ScrollToPercentInput, ScrollToTextHandler, ScrollToTextInput,
    ScrollToTopHandler,
};
pub use tabs::{
    CloseTabHandler, CloseTabInput, OpenTabHandler, OpenTabInput, SwitchTabHandler,
    SwitchTabInput,
};

use webhands_core::{AgentContext, keys};
use webhands_protocols::{ActionResult, Actor, ExecutionState};

/// The model's stated intent, or the default start message.
pub(crate) fn intent_or(
    ctx: &AgentContext,
    intent: Option<&str>,
    key: &str,
    args: &[&str],
) -> String {
    match intent.filter(|intent| !intent.is_empty()) {
        Some(intent) => intent.to_string(),
        None => ctx.t(key, args),
    }
}

pub(crate) fn start(ctx: &AgentContext, intent: String) {
    ctx.emit_event(Actor::Navigator, ExecutionState::ActStart, intent);
}

/// Emit ok and return `message` as a remembered result.
pub(crate) fn succeed(ctx: &AgentContext, message: String) -> ActionResult {
    ctx.emit_event(Actor::Navigator, ExecutionState::ActOk, message.clone());
    ActionResult::memory(message)
}

/// Emit fail and return `message` as an error result.
pub(crate) fn fail(ctx: &AgentContext, message: String) -> ActionResult {
    ctx.emit_event(Actor::Navigator, ExecutionState::ActFail, message.clone());
    ActionResult::error(message)
}

pub(crate) fn element_not_exist(ctx: &AgentContext, index: usize) -> ActionResult {
    fail(
        ctx,
        ctx.t(keys::ERROR_ELEMENT_NOT_EXIST, &[&index.to_string()]),
    )
}

/// Last line of a possibly multi-line error message.
pub(crate) fn last_line(message: &str) -> &str {
    message.lines().last().unwrap_or(message)
}
