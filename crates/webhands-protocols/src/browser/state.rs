//! Page state snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DomElementNode;

/// Browser tab identifier.
pub type TabId = i64;

/// Element index to element, valid until the next state read.
pub type SelectorMap = BTreeMap<usize, DomElementNode>;

/// An open tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub url: String,
    pub title: String,
}

/// Snapshot of the active page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageState {
    #[serde(default)]
    pub selector_map: SelectorMap,
    pub tab_id: TabId,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub tabs: Vec<TabInfo>,
    /// Base64 JPEG, when captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub visual_viewport_height: f64,
}

impl PageState {
    pub fn element(&self, index: usize) -> Option<&DomElementNode> {
        self.selector_map.get(&index)
    }

    /// Every indexed element, one per line, in index order.
    pub fn clickable_elements_to_string(&self, include_attributes: &[String]) -> String {
        self.selector_map
            .iter()
            .map(|(index, node)| node.render(*index, include_attributes))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tabs other than the active one.
    pub fn other_tabs(&self) -> impl Iterator<Item = &TabInfo> {
        self.tabs.iter().filter(move |tab| tab.id != self.tab_id)
    }

    /// Viewport height as a percentage of the scrollable distance.
    pub fn viewport_percentage(&self) -> Option<i64> {
        let scrollable = self.scroll_height - self.visual_viewport_height;
        if scrollable <= 0.0 {
            return None;
        }
        Some((self.visual_viewport_height / scrollable * 100.0).round() as i64)
    }
}

/// Scroll offsets of the page or of one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollInfo {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollInfo {
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height
    }
}

/// One choice of a native `<select>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub index: usize,
    pub text: String,
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
