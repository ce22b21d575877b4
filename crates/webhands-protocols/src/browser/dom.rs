//! Interactive DOM element as seen through the selector map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An interactive element of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomElementNode {
    /// Tag name as reported by the host.
    pub tag_name: String,

    pub xpath: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Text up to the next clickable element.
    #[serde(default)]
    pub text: String,

    /// Index in the selector map, if highlighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_index: Option<usize>,

    /// Appeared since the previous state read.
    #[serde(default)]
    pub is_new: bool,
}

impl DomElementNode {
    pub fn new(tag_name: impl Into<String>, xpath: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            xpath: xpath.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_highlight_index(mut self, index: usize) -> Self {
        self.highlight_index = Some(index);
        self
    }

    /// Case-insensitive tag comparison.
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Render as `[index]<tag attr='value'>text</tag>`, keeping only the
    /// listed attributes. New elements are starred.
    pub fn render(&self, index: usize, include_attributes: &[String]) -> String {
        let tag = self.tag_name.to_ascii_lowercase();
        let attrs: String = include_attributes
            .iter()
            .filter_map(|name| {
                self.attributes
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| format!(" {}='{}'", name, value))
            })
            .collect();
        let marker = if self.is_new {
            format!("*[{}]*", index)
        } else {
            format!("[{}]", index)
        };
        format!("{}<{}{}>{}</{}>", marker, tag, attrs, self.text.trim(), tag)
    }
}
