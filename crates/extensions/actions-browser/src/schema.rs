//! Parameter schemas.

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Map, Value, json};

use webhands_protocols::ActionError;

use crate::action::Action;

/// Declarative description of one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSchema {
    pub name: String,
    pub description: String,
    /// JSON schema of the input object.
    pub parameters: Value,
    /// Whether the input carries an element `index`.
    pub has_index: bool,
}

impl ActionSchema {
    /// Generate the schema from a typed input struct.
    pub fn of<T: JsonSchema>(
        name: impl Into<String>,
        description: impl Into<String>,
        has_index: bool,
    ) -> Result<Self, ActionError> {
        let mut parameters = serde_json::to_value(schemars::schema_for!(T))?;
        if let Some(object) = parameters.as_object_mut() {
            object.remove("$schema");
            object.remove("title");
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            parameters,
            has_index,
        })
    }

    /// Top-level properties, in declaration order.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.parameters.get("properties").and_then(Value::as_object)
    }

    /// Whether the input has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.properties().is_none_or(Map::is_empty)
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .is_some_and(|required| required.iter().any(|r| r.as_str() == Some(field)))
    }
}

/// Merge every action's schema into one object schema keyed by action name.
///
/// Each entry accepts the action's input or `null` and is optional. Entries
/// carry no default. Order follows `actions`.
pub fn build_dynamic_action_schema(actions: &[Action]) -> Result<Value, ActionError> {
    let mut properties = Map::new();
    for action in actions {
        let schema = action.schema();
        if properties.contains_key(&schema.name) {
            return Err(ActionError::DuplicateAction(schema.name.clone()));
        }
        properties.insert(
            schema.name.clone(),
            json!({
                "anyOf": [schema.parameters, { "type": "null" }],
                "description": schema.description,
            }),
        );
    }
    Ok(json!({
        "type": "object",
        "properties": properties,
    }))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
