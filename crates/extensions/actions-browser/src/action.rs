//! Executable actions.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use webhands_core::AgentContext;
use webhands_protocols::{ActionError, ActionResult, Actor, ExecutionState};

use crate::schema::ActionSchema;

/// The behavior behind one action.
///
/// `Input` is both the parameter schema (through [`JsonSchema`]) and the
/// validated value the handler receives. `handle` is never called with input
/// that failed to deserialize or failed [`check`](Self::check).
#[async_trait]
pub trait ActionHandler: Send + Sync + 'static {
    type Input: DeserializeOwned + JsonSchema + Send + 'static;

    /// Dispatch key and model-facing identifier.
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    /// Whether `Input` carries an element `index`.
    const HAS_INDEX: bool = false;

    /// Constraints the type system does not express, such as numeric ranges.
    fn check(_input: &Self::Input) -> Result<(), String> {
        Ok(())
    }

    async fn handle(
        &self,
        ctx: &AgentContext,
        input: Self::Input,
    ) -> Result<ActionResult, ActionError>;
}

#[async_trait]
trait ErasedHandler: Send + Sync {
    async fn call(&self, ctx: &AgentContext, input: Value) -> Result<ActionResult, ActionError>;
}

struct Typed<H>(H);

#[async_trait]
impl<H: ActionHandler> ErasedHandler for Typed<H> {
    async fn call(&self, ctx: &AgentContext, input: Value) -> Result<ActionResult, ActionError> {
        let input: H::Input =
            serde_json::from_value(input).map_err(|e| ActionError::InvalidInput(e.to_string()))?;
        H::check(&input).map_err(ActionError::InvalidInput)?;

        let result = self.0.handle(ctx, input).await;
        if let Err(ref e) = result {
            // The handler already emitted its start event.
            ctx.emit_event(Actor::Navigator, ExecutionState::ActFail, e.to_string());
        }
        result
    }
}

/// One named operation: a catalog entry bound to its handler.
pub struct Action {
    schema: ActionSchema,
    handler: Box<dyn ErasedHandler>,
}

impl Action {
    pub fn new<H: ActionHandler>(handler: H) -> Result<Self, ActionError> {
        let schema = ActionSchema::of::<H::Input>(H::NAME, H::DESCRIPTION, H::HAS_INDEX)?;
        Ok(Self {
            schema,
            handler: Box::new(Typed(handler)),
        })
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn schema(&self) -> &ActionSchema {
        &self.schema
    }

    pub fn has_index(&self) -> bool {
        self.schema.has_index
    }

    /// Validate `input` and run the handler.
    ///
    /// Actions without parameters ignore `input` entirely. Otherwise invalid
    /// input yields [`ActionError::InvalidInput`] before any side effect.
    pub async fn call(&self, ctx: &AgentContext, input: Value) -> Result<ActionResult, ActionError> {
        if self.schema.is_empty() {
            return self.handler.call(ctx, Value::Object(Map::new())).await;
        }
        self.handler.call(ctx, input).await
    }

    /// Model-facing description of the action and its parameters, e.g.
    ///
    /// ```text
    /// Navigate to URL in the current tab:
    /// {go_to_url: {'intent': {'type': 'purpose of this action', 'optional': true}, ...}}
    /// ```
    pub fn prompt(&self) -> String {
        let fields: Vec<String> = self
            .schema
            .properties()
            .map(|properties| {
                properties
                    .iter()
                    .map(|(key, property)| {
                        let presence = if self.schema.is_required(key) {
                            "'required': true"
                        } else {
                            "'optional': true"
                        };
                        format!("'{}': {{'type': '{}', {}}}", key, describe(property), presence)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let shape = if fields.is_empty() {
            format!("{{{}: {{}}}}", self.name())
        } else {
            format!("{{{}: {{{}}}}}", self.name(), fields.join(", "))
        };
        format!("{}:\n{}", self.schema.description, shape)
    }

    /// The `index` argument, for indexed actions only.
    pub fn get_index_arg(&self, input: &Value) -> Option<usize> {
        if !self.has_index() {
            return None;
        }
        input
            .get("index")
            .and_then(Value::as_u64)
            .and_then(|index| usize::try_from(index).ok())
    }

    /// Rewrite the `index` argument in place. Returns whether it applied.
    pub fn set_index_arg(&self, input: &mut Value, index: usize) -> bool {
        if !self.has_index() {
            return false;
        }
        match input.as_object_mut() {
            Some(object) => {
                object.insert("index".to_string(), json!(index));
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action").field("schema", &self.schema).finish()
    }
}

/// A property's description, or its JSON type when undocumented.
fn describe(property: &Value) -> String {
    if let Some(description) = property.get("description").and_then(Value::as_str) {
        return description.to_string();
    }
    match property.get("type") {
        Some(Value::String(ty)) => ty.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .filter(|ty| *ty != "null")
            .collect::<Vec<_>>()
            .join("|"),
        _ => "any".to_string(),
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
