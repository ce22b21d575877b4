//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub actions: ActionsConfig,
}

/// Per-task agent options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,

    /// Upper bound on actions executed from one model response.
    #[serde(default = "default_max_actions_per_step")]
    pub max_actions_per_step: usize,

    #[serde(default = "default_max_failures")]
    pub max_failures: u32,

    /// Attach screenshots to state messages and use coordinates when acting.
    #[serde(default)]
    pub use_vision: bool,

    /// Element attributes kept when rendering the selector map.
    #[serde(default = "default_include_attributes")]
    pub include_attributes: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            max_actions_per_step: default_max_actions_per_step(),
            max_failures: default_max_failures(),
            use_vision: false,
            include_attributes: default_include_attributes(),
        }
    }
}

fn default_max_steps() -> u32 {
    100
}

fn default_max_actions_per_step() -> usize {
    10
}

fn default_max_failures() -> u32 {
    3
}

fn default_include_attributes() -> Vec<String> {
    [
        "title",
        "type",
        "checked",
        "name",
        "role",
        "value",
        "placeholder",
        "data-date-format",
        "alt",
        "aria-label",
        "aria-expanded",
        "data-state",
        "aria-checked",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Page-scroll discipline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Page scrolls (`previous_page` / `next_page`) allowed per task.
    /// Unset means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_page_scrolls: Option<u32>,
}

/// Catalog filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionsConfig {
    /// Action names left out of the catalog.
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_agent_config() {
        let config = AgentConfig::default();
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.max_actions_per_step, 10);
        assert_eq!(config.max_failures, 3);
        assert!(!config.use_vision);
        assert!(config.include_attributes.contains(&"aria-label".to_string()));
    }

    #[test]
    fn test_default_scroll_is_unlimited() {
        assert!(ScrollConfig::default().max_page_scrolls.is_none());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = Config::default();
        config.scroll.max_page_scrolls = Some(10);
        config.actions.disabled.push("search_google".to_string());

        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
