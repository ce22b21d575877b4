//! Recording mock browser for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use webhands_core::{AgentContext, AgentOptions, EventReceiver, event_channel};
use webhands_protocols::{
    AgentEvent, BrowserContext, BrowserError, DomElementNode, DropdownOption, ExecutionState,
    Page, PageState, ScrollInfo, TabId, TabInfo,
};

pub const BUTTON: usize = 0;
pub const TEXT_INPUT: usize = 1;
pub const SELECT: usize = 2;
pub const FILE_INPUT: usize = 3;
pub const SCROLL_BOX: usize = 4;

/// A primitive the handlers invoked.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Navigate(String),
    OpenTab(String),
    CloseTab(TabId),
    SwitchTab(TabId),
    GoBack,
    Click(String),
    InputText(String, String),
    ScrollToPercent(u32, Option<String>),
    PreviousPage(Option<String>),
    NextPage(Option<String>),
    ScrollToText(String, u32),
    SendKeys(String),
    DropdownOptions(usize),
    SelectDropdownOption(usize, String),
}

impl Call {
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            Call::ScrollToPercent(..) | Call::PreviousPage(_) | Call::NextPage(_)
        )
    }
}

/// Everything the mock knows and records.
pub struct World {
    pub state: PageState,
    pub tabs: BTreeSet<TabId>,
    pub calls: Vec<Call>,
    /// Tab a click opens, if any.
    pub open_tab_on_click: Option<TabId>,
    pub click_error: Option<String>,
    pub input_error: Option<String>,
    pub page_scroll: Result<ScrollInfo, String>,
    pub element_scroll: Result<ScrollInfo, String>,
    pub text_found: Result<bool, String>,
    pub dropdown_options: Result<Vec<DropdownOption>, String>,
    pub select_result: Result<String, String>,
    pub navigation_error: Option<String>,
    /// Error every scroll primitive returns, if any.
    pub scroll_error: Option<String>,
}

fn default_state() -> PageState {
    let mut state = PageState {
        tab_id: 1,
        url: "https://example.com".to_string(),
        title: "Example".to_string(),
        tabs: vec![TabInfo {
            id: 1,
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
        }],
        scroll_y: 0.0,
        scroll_height: 3000.0,
        visual_viewport_height: 1000.0,
        ..PageState::default()
    };
    let elements = [
        DomElementNode::new("button", "/html/body/button").with_text("Submit"),
        DomElementNode::new("input", "/html/body/input[1]").with_attribute("type", "text"),
        DomElementNode::new("select", "/html/body/select"),
        DomElementNode::new("input", "/html/body/input[2]").with_attribute("type", "file"),
        DomElementNode::new("div", "/html/body/div"),
    ];
    for (index, node) in elements.into_iter().enumerate() {
        state
            .selector_map
            .insert(index, node.with_highlight_index(index));
    }
    state
}

impl Default for World {
    fn default() -> Self {
        Self {
            state: default_state(),
            tabs: BTreeSet::from([1]),
            calls: Vec::new(),
            open_tab_on_click: None,
            click_error: None,
            input_error: None,
            page_scroll: Ok(ScrollInfo::new(500.0, 1000.0, 3000.0)),
            element_scroll: Ok(ScrollInfo::new(100.0, 200.0, 800.0)),
            text_found: Ok(true),
            dropdown_options: Ok(Vec::new()),
            select_result: Ok("selected".to_string()),
            navigation_error: None,
            scroll_error: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct MockBrowser {
    world: Arc<Mutex<World>>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate the world before running an action.
    pub fn configure(&self, f: impl FnOnce(&mut World)) {
        f(&mut self.world.lock());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.world.lock().calls.clone()
    }

    pub fn tabs(&self) -> BTreeSet<TabId> {
        self.world.lock().tabs.clone()
    }

    pub fn active_tab(&self) -> TabId {
        self.world.lock().state.tab_id
    }

    fn record(&self, call: Call) {
        self.world.lock().calls.push(call);
    }
}

#[async_trait]
impl BrowserContext for MockBrowser {
    async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.record(Call::Navigate(url.to_string()));
        let mut world = self.world.lock();
        if let Some(e) = world.navigation_error.clone() {
            return Err(BrowserError::NavigationFailed(e));
        }
        world.state.url = url.to_string();
        Ok(())
    }

    async fn current_page(&self) -> Result<Arc<dyn Page>, BrowserError> {
        Ok(Arc::new(MockPage {
            browser: self.clone(),
        }))
    }

    async fn open_tab(&self, url: &str) -> Result<(), BrowserError> {
        self.record(Call::OpenTab(url.to_string()));
        let mut world = self.world.lock();
        let id = world.tabs.iter().max().copied().unwrap_or(0) + 1;
        world.tabs.insert(id);
        world.state.tab_id = id;
        world.state.url = url.to_string();
        Ok(())
    }

    async fn close_tab(&self, tab_id: TabId) -> Result<(), BrowserError> {
        self.record(Call::CloseTab(tab_id));
        let mut world = self.world.lock();
        if !world.tabs.remove(&tab_id) {
            return Err(BrowserError::TabNotFound(tab_id));
        }
        Ok(())
    }

    async fn switch_tab(&self, tab_id: TabId) -> Result<(), BrowserError> {
        self.record(Call::SwitchTab(tab_id));
        let mut world = self.world.lock();
        if !world.tabs.contains(&tab_id) {
            return Err(BrowserError::TabNotFound(tab_id));
        }
        world.state.tab_id = tab_id;
        Ok(())
    }

    async fn all_tab_ids(&self) -> Result<BTreeSet<TabId>, BrowserError> {
        Ok(self.tabs())
    }
}

pub struct MockPage {
    browser: MockBrowser,
}

impl MockPage {
    fn world(&self) -> parking_lot::MutexGuard<'_, World> {
        self.browser.world.lock()
    }

    fn scrolled(&self) -> Result<(), BrowserError> {
        match self.world().scroll_error.clone() {
            Some(e) => Err(BrowserError::Script(e)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Page for MockPage {
    async fn state(&self) -> Result<PageState, BrowserError> {
        Ok(self.world().state.clone())
    }

    async fn cached_state(&self) -> Result<PageState, BrowserError> {
        Ok(self.world().state.clone())
    }

    async fn go_back(&self) -> Result<(), BrowserError> {
        self.browser.record(Call::GoBack);
        Ok(())
    }

    async fn click_element_node(
        &self,
        _use_vision: bool,
        node: &DomElementNode,
    ) -> Result<(), BrowserError> {
        self.browser.record(Call::Click(node.xpath.clone()));
        let mut world = self.world();
        if let Some(e) = world.click_error.clone() {
            return Err(BrowserError::ActionFailed(e));
        }
        if let Some(id) = world.open_tab_on_click {
            world.tabs.insert(id);
        }
        Ok(())
    }

    async fn input_text_element_node(
        &self,
        _use_vision: bool,
        node: &DomElementNode,
        text: &str,
    ) -> Result<(), BrowserError> {
        self.browser
            .record(Call::InputText(node.xpath.clone(), text.to_string()));
        match self.world().input_error.clone() {
            Some(e) => Err(BrowserError::ElementNotFound(e)),
            None => Ok(()),
        }
    }

    fn is_file_uploader(&self, node: &DomElementNode) -> bool {
        node.is_tag("input") && node.attributes.get("type").map(String::as_str) == Some("file")
    }

    async fn scroll_to_percent(
        &self,
        y_percent: u32,
        node: Option<&DomElementNode>,
    ) -> Result<(), BrowserError> {
        self.browser
            .record(Call::ScrollToPercent(y_percent, node.map(|n| n.xpath.clone())));
        self.scrolled()
    }

    async fn scroll_to_previous_page(
        &self,
        node: Option<&DomElementNode>,
    ) -> Result<(), BrowserError> {
        self.browser
            .record(Call::PreviousPage(node.map(|n| n.xpath.clone())));
        self.scrolled()
    }

    async fn scroll_to_next_page(&self, node: Option<&DomElementNode>) -> Result<(), BrowserError> {
        self.browser.record(Call::NextPage(node.map(|n| n.xpath.clone())));
        self.scrolled()
    }

    async fn scroll_to_text(&self, text: &str, nth: u32) -> Result<bool, BrowserError> {
        self.browser
            .record(Call::ScrollToText(text.to_string(), nth));
        self.world().text_found.clone().map_err(BrowserError::Script)
    }

    async fn scroll_info(&self) -> Result<ScrollInfo, BrowserError> {
        self.world().page_scroll.clone().map_err(BrowserError::Script)
    }

    async fn element_scroll_info(&self, _node: &DomElementNode) -> Result<ScrollInfo, BrowserError> {
        self.world().element_scroll.clone().map_err(BrowserError::Script)
    }

    async fn send_keys(&self, keys: &str) -> Result<(), BrowserError> {
        self.browser.record(Call::SendKeys(keys.to_string()));
        Ok(())
    }

    async fn dropdown_options(&self, index: usize) -> Result<Vec<DropdownOption>, BrowserError> {
        self.browser.record(Call::DropdownOptions(index));
        self.world()
            .dropdown_options
            .clone()
            .map_err(BrowserError::Script)
    }

    async fn select_dropdown_option(&self, index: usize, text: &str) -> Result<String, BrowserError> {
        self.browser
            .record(Call::SelectDropdownOption(index, text.to_string()));
        self.world()
            .select_result
            .clone()
            .map_err(BrowserError::ActionFailed)
    }
}

/// A context over `browser` with default options.
pub fn context(browser: &MockBrowser) -> (AgentContext, EventReceiver) {
    context_with(browser, AgentOptions::default())
}

pub fn context_with(browser: &MockBrowser, options: AgentOptions) -> (AgentContext, EventReceiver) {
    let (tx, rx) = event_channel();
    let ctx = AgentContext::new(Arc::new(browser.clone()), options, tx).with_task_id("test-task");
    (ctx, rx)
}

/// States of the queued events, in order.
pub fn states(events: &[AgentEvent]) -> Vec<ExecutionState> {
    events.iter().map(|e| e.state).collect()
}
