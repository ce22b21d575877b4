//! Minimal browser host for unit tests.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use webhands_protocols::{
    BrowserContext, BrowserError, DomElementNode, DropdownOption, Page, PageState, ScrollInfo,
    TabId,
};

/// A page that always reports the same state.
pub struct StaticPage {
    pub state: PageState,
}

#[async_trait]
impl Page for StaticPage {
    async fn state(&self) -> Result<PageState, BrowserError> {
        Ok(self.state.clone())
    }

    async fn cached_state(&self) -> Result<PageState, BrowserError> {
        Ok(self.state.clone())
    }

    async fn go_back(&self) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn click_element_node(&self, _: bool, _: &DomElementNode) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn input_text_element_node(
        &self,
        _: bool,
        _: &DomElementNode,
        _: &str,
    ) -> Result<(), BrowserError> {
        Ok(())
    }

    fn is_file_uploader(&self, _: &DomElementNode) -> bool {
        false
    }

    async fn scroll_to_percent(&self, _: u32, _: Option<&DomElementNode>) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn scroll_to_previous_page(&self, _: Option<&DomElementNode>) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn scroll_to_next_page(&self, _: Option<&DomElementNode>) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn scroll_to_text(&self, _: &str, _: u32) -> Result<bool, BrowserError> {
        Ok(false)
    }

    async fn scroll_info(&self) -> Result<ScrollInfo, BrowserError> {
        Ok(ScrollInfo::default())
    }

    async fn element_scroll_info(&self, _: &DomElementNode) -> Result<ScrollInfo, BrowserError> {
        Ok(ScrollInfo::default())
    }

    async fn send_keys(&self, _: &str) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn dropdown_options(&self, _: usize) -> Result<Vec<DropdownOption>, BrowserError> {
        Ok(Vec::new())
    }

    async fn select_dropdown_option(&self, _: usize, _: &str) -> Result<String, BrowserError> {
        Ok(String::new())
    }
}

/// A browser with a single static page.
pub struct StaticBrowser {
    page: Arc<StaticPage>,
}

impl StaticBrowser {
    pub fn new(state: PageState) -> Arc<Self> {
        Arc::new(Self {
            page: Arc::new(StaticPage { state }),
        })
    }
}

#[async_trait]
impl BrowserContext for StaticBrowser {
    async fn navigate_to(&self, _: &str) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn current_page(&self) -> Result<Arc<dyn Page>, BrowserError> {
        Ok(self.page.clone() as Arc<dyn Page>)
    }

    async fn open_tab(&self, _: &str) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn close_tab(&self, tab_id: TabId) -> Result<(), BrowserError> {
        Err(BrowserError::TabNotFound(tab_id))
    }

    async fn switch_tab(&self, _: TabId) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn all_tab_ids(&self) -> Result<BTreeSet<TabId>, BrowserError> {
        Ok(self.page.state.tabs.iter().map(|tab| tab.id).collect())
    }
}
