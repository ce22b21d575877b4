//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_agent(config, &mut result);
        Self::validate_scroll(config, &mut result);
        Self::validate_actions(config, &mut result);

        Ok(result)
    }

    /// Like [`validate`](Self::validate), but turns the first error into a
    /// [`ConfigError::InvalidValue`].
    pub fn ensure_valid(config: &Config) -> Result<ValidationResult, ConfigError> {
        let result = Self::validate(config)?;
        if let Some(first) = result.errors.first() {
            return Err(ConfigError::InvalidValue {
                field: first.path.clone(),
                message: first.message.clone(),
            });
        }
        Ok(result)
    }

    fn validate_agent(config: &Config, result: &mut ValidationResult) {
        if config.agent.max_steps == 0 {
            result.add_error(ValidationError::new(
                "agent.max_steps",
                "max_steps must be greater than 0",
            ));
        }

        if config.agent.max_actions_per_step == 0 {
            result.add_error(ValidationError::new(
                "agent.max_actions_per_step",
                "max_actions_per_step must be greater than 0",
            ));
        }

        if config.agent.max_failures == 0 {
            result.add_warning(ValidationWarning::new(
                "agent.max_failures",
                "max_failures is 0, the first failed step ends the task",
            ));
        }

        if config.agent.include_attributes.is_empty() {
            result.add_warning(ValidationWarning::new(
                "agent.include_attributes",
                "no attributes are rendered, elements are described by text only",
            ));
        }
    }

    fn validate_scroll(config: &Config, result: &mut ValidationResult) {
        if config.scroll.max_page_scrolls == Some(0) {
            result.add_warning(ValidationWarning::new(
                "scroll.max_page_scrolls",
                "max_page_scrolls is 0, page scrolling is disabled",
            ));
        }
    }

    fn validate_actions(config: &Config, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for name in &config.actions.disabled {
            if !seen.insert(name.as_str()) {
                result.add_warning(ValidationWarning::new(
                    "actions.disabled",
                    format!("Action '{}' is listed more than once", name),
                ));
            }
        }

        if config.actions.disabled.iter().any(|name| name == "done") {
            result.add_error(ValidationError::new(
                "actions.disabled",
                "'done' cannot be disabled, tasks could never complete",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
