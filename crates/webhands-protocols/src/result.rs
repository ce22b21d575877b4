//! Action execution result types.

use serde::{Deserialize, Serialize};

/// Outcome of one action call, fed back to the model on the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the task is finished.
    #[serde(default)]
    pub is_done: bool,

    /// Whether the finished task succeeded. Only meaningful with `is_done`.
    #[serde(default = "default_success")]
    pub success: bool,

    /// Content for the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_content: Option<String>,

    /// Error message for the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Whether the content should be kept in task memory.
    #[serde(default)]
    pub include_in_memory: bool,
}

fn default_success() -> bool {
    true
}

impl Default for ActionResult {
    fn default() -> Self {
        Self {
            is_done: false,
            success: true,
            extracted_content: None,
            error: None,
            include_in_memory: false,
        }
    }
}

impl ActionResult {
    /// Successful result whose content is kept in memory.
    pub fn memory(content: impl Into<String>) -> Self {
        Self {
            extracted_content: Some(content.into()),
            include_in_memory: true,
            ..Self::default()
        }
    }

    /// Failed result whose error is kept in memory.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            include_in_memory: true,
            ..Self::default()
        }
    }

    /// Terminal result carrying the final answer.
    pub fn done(text: impl Into<String>, success: bool) -> Self {
        Self {
            is_done: true,
            success,
            extracted_content: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_result() {
        let result = ActionResult::memory("clicked");
        assert_eq!(result.extracted_content.as_deref(), Some("clicked"));
        assert!(result.include_in_memory);
        assert!(!result.is_done);
        assert!(!result.has_error());
    }

    #[test]
    fn test_error_result() {
        let result = ActionResult::error("boom");
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert!(result.extracted_content.is_none());
        assert!(!result.success);
        assert!(result.has_error());
    }

    #[test]
    fn test_done_result() {
        let result = ActionResult::done("answer", true);
        assert!(result.is_done);
        assert!(result.success);
        assert!(!result.include_in_memory);
        assert_eq!(result.extracted_content.as_deref(), Some("answer"));
    }

    #[test]
    fn test_default_is_noop() {
        let result = ActionResult::default();
        assert!(result.extracted_content.is_none());
        assert!(result.error.is_none());
        assert!(result.success);
    }

    #[test]
    fn test_deserialize_defaults() {
        let result: ActionResult = serde_json::from_str(r#"{"error": "x"}"#).unwrap();
        assert!(!result.is_done);
        assert!(result.success);
        assert_eq!(result.error.as_deref(), Some("x"));
    }

    #[test]
    fn test_serialization_skips_empty() {
        let json = serde_json::to_string(&ActionResult::memory("ok")).unwrap();
        assert!(json.contains("extracted_content"));
        assert!(!json.contains("\"error\""));
    }
}
