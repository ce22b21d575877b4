//! Action registry and sequential dispatcher.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use webhands_core::AgentContext;
use webhands_protocols::{ActionError, ActionResult};

use crate::action::Action;
use crate::schema::build_dynamic_action_schema;

/// One action requested by the model: `{"name": {params}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub name: String,
    pub params: Value,
}

impl ActionRequest {
    pub fn new(name: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Parse a single-key object. Null entries, as produced by the composed
    /// schema, are skipped.
    pub fn from_value(value: &Value) -> Result<Self, ActionError> {
        let object = value
            .as_object()
            .ok_or_else(|| ActionError::InvalidInput("action must be an object".to_string()))?;

        let mut entries = object.iter().filter(|(_, params)| !params.is_null());
        match (entries.next(), entries.next()) {
            (Some((name, params)), None) => Ok(Self::new(name.clone(), params.clone())),
            (None, _) => Err(ActionError::InvalidInput("no action specified".to_string())),
            (Some(_), Some(_)) => Err(ActionError::InvalidInput(
                "only one action name per item".to_string(),
            )),
        }
    }

    /// Parse a list of action objects.
    pub fn from_list(value: &Value) -> Result<Vec<Self>, ActionError> {
        value
            .as_array()
            .ok_or_else(|| ActionError::InvalidInput("actions must be an array".to_string()))?
            .iter()
            .map(Self::from_value)
            .collect()
    }
}

/// Actions in registration order, looked up by name.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<Action>,
    by_name: HashMap<String, usize>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_actions(actions: Vec<Action>) -> Result<Self, ActionError> {
        let mut registry = Self::new();
        for action in actions {
            registry.register(action)?;
        }
        Ok(registry)
    }

    /// Register an action. Names must be unique.
    pub fn register(&mut self, action: Action) -> Result<(), ActionError> {
        let name = action.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(ActionError::DuplicateAction(name));
        }
        self.by_name.insert(name, self.actions.len());
        self.actions.push(action);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.by_name.get(name).map(|&i| &self.actions[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(Action::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The composed schema of every registered action.
    pub fn schema(&self) -> Result<Value, ActionError> {
        build_dynamic_action_schema(&self.actions)
    }

    /// Every action's prompt, separated by blank lines.
    pub fn prompt_description(&self) -> String {
        self.actions
            .iter()
            .map(Action::prompt)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Run requests strictly in order.
    ///
    /// Each result is appended to `ctx.action_results` as soon as it is
    /// produced. Stops after a `done` result and never runs more than
    /// `max_actions_per_step` requests. An unknown name or invalid input
    /// aborts the remaining requests.
    pub async fn execute(
        &self,
        ctx: &mut AgentContext,
        requests: &[ActionRequest],
    ) -> Result<Vec<ActionResult>, ActionError> {
        let limit = ctx.options.max_actions_per_step;
        if requests.len() > limit {
            warn!(
                "Model requested {} actions, executing only the first {}",
                requests.len(),
                limit
            );
        }

        let mut results = Vec::new();
        for request in requests.iter().take(limit) {
            let action = self
                .get(&request.name)
                .ok_or_else(|| ActionError::NotFound(request.name.clone()))?;

            debug!("Executing action: {}", request.name);
            let result = action.call(ctx, request.params.clone()).await?;

            let is_done = result.is_done;
            ctx.action_results.push(result.clone());
            results.push(result);
            if is_done {
                break;
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
