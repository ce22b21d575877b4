//! Browser host protocol.
//!
//! The host owns DOM access, tab lifecycle and screenshots. The action core
//! only talks to it through [`BrowserContext`] and [`Page`].

mod dom;
mod state;

pub use dom::*;
pub use state::*;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BrowserError;

/// Tab-level browser session.
///
/// Switching tabs changes what [`BrowserContext::current_page`] returns for
/// every subsequent caller.
#[async_trait]
pub trait BrowserContext: Send + Sync {
    /// Navigate the current tab to a URL.
    async fn navigate_to(&self, url: &str) -> Result<(), BrowserError>;

    /// The page in the active tab.
    async fn current_page(&self) -> Result<Arc<dyn Page>, BrowserError>;

    /// Open a URL in a new tab and make it active.
    async fn open_tab(&self, url: &str) -> Result<(), BrowserError>;

    async fn close_tab(&self, tab_id: TabId) -> Result<(), BrowserError>;

    async fn switch_tab(&self, tab_id: TabId) -> Result<(), BrowserError>;

    /// Ids of every open tab.
    async fn all_tab_ids(&self) -> Result<BTreeSet<TabId>, BrowserError>;
}

/// A page and the DOM primitives the action handlers need.
#[async_trait]
pub trait Page: Send + Sync {
    /// Read a fresh state, rebuilding the selector map.
    async fn state(&self) -> Result<PageState, BrowserError>;

    /// The last state read, without touching the DOM.
    async fn cached_state(&self) -> Result<PageState, BrowserError>;

    async fn go_back(&self) -> Result<(), BrowserError>;

    async fn click_element_node(
        &self,
        use_vision: bool,
        node: &DomElementNode,
    ) -> Result<(), BrowserError>;

    async fn input_text_element_node(
        &self,
        use_vision: bool,
        node: &DomElementNode,
        text: &str,
    ) -> Result<(), BrowserError>;

    /// Whether the element is a file input.
    fn is_file_uploader(&self, node: &DomElementNode) -> bool;

    /// Scroll the document, or the given element, to a vertical percentage.
    async fn scroll_to_percent(
        &self,
        y_percent: u32,
        node: Option<&DomElementNode>,
    ) -> Result<(), BrowserError>;

    async fn scroll_to_previous_page(
        &self,
        node: Option<&DomElementNode>,
    ) -> Result<(), BrowserError>;

    async fn scroll_to_next_page(&self, node: Option<&DomElementNode>)
    -> Result<(), BrowserError>;

    /// Scroll to the `nth` (1-based) case-insensitive occurrence of `text`.
    /// Returns whether it was found.
    async fn scroll_to_text(&self, text: &str, nth: u32) -> Result<bool, BrowserError>;

    /// Page-relative scroll offsets.
    async fn scroll_info(&self) -> Result<ScrollInfo, BrowserError>;

    /// Scroll offsets of a scrollable element.
    async fn element_scroll_info(&self, node: &DomElementNode)
    -> Result<ScrollInfo, BrowserError>;

    async fn send_keys(&self, keys: &str) -> Result<(), BrowserError>;

    /// Options of the native `<select>` at `index`.
    async fn dropdown_options(&self, index: usize) -> Result<Vec<DropdownOption>, BrowserError>;

    /// Select an option by its exact text. Returns a host-provided message.
    async fn select_dropdown_option(&self, index: usize, text: &str)
    -> Result<String, BrowserError>;
}
