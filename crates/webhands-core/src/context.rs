//! Per-task execution context.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use webhands_config::Config;
use webhands_protocols::{
    ActionResult, Actor, AgentEvent, BrowserContext, EventData, ExecutionState, MessageFormatter,
};

use crate::event::EventSender;
use crate::messages::DefaultMessages;

/// Run options derived from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentOptions {
    pub max_steps: u32,
    pub max_actions_per_step: usize,
    pub max_failures: u32,
    pub use_vision: bool,
    pub include_attributes: Vec<String>,
    /// Page scrolls allowed per task. `None` means unlimited.
    pub max_page_scrolls: Option<u32>,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AgentOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_steps: config.agent.max_steps,
            max_actions_per_step: config.agent.max_actions_per_step,
            max_failures: config.agent.max_failures,
            use_vision: config.agent.use_vision,
            include_attributes: config.agent.include_attributes.clone(),
            max_page_scrolls: config.scroll.max_page_scrolls,
        }
    }
}

/// Position of the current step within the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Zero-based.
    pub step_number: u32,
    pub max_steps: u32,
}

/// Shared state for one task.
///
/// Owned by the orchestrator. Actions borrow it for the duration of a call,
/// so a tab switch made by one action is what the next one sees.
pub struct AgentContext {
    pub task_id: String,
    pub browser: Arc<dyn BrowserContext>,
    pub options: AgentOptions,
    /// Results of every action executed so far, oldest first.
    pub action_results: Vec<ActionResult>,
    pub step_info: StepInfo,
    events: EventSender,
    messages: Arc<dyn MessageFormatter>,
    page_scrolls: AtomicU32,
}

impl AgentContext {
    /// Create a context with a fresh task id and the default message catalog.
    pub fn new(browser: Arc<dyn BrowserContext>, options: AgentOptions, events: EventSender) -> Self {
        let step_info = StepInfo {
            step_number: 0,
            max_steps: options.max_steps,
        };
        Self {
            task_id: uuid::Uuid::new_v4().to_string(),
            browser,
            options,
            action_results: Vec::new(),
            step_info,
            events,
            messages: Arc::new(DefaultMessages::new()),
            page_scrolls: AtomicU32::new(0),
        }
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = task_id.into();
        self
    }

    /// Replace the message catalog.
    pub fn with_messages(mut self, messages: Arc<dyn MessageFormatter>) -> Self {
        self.messages = messages;
        self
    }

    /// Look up a message.
    pub fn t(&self, key: &str, args: &[&str]) -> String {
        self.messages.t(key, args)
    }

    /// Emit an event stamped with the task id and step info.
    pub fn emit_event(&self, actor: Actor, state: ExecutionState, details: impl Into<String>) {
        let data = EventData {
            task_id: self.task_id.clone(),
            step: self.step_info.step_number,
            max_steps: self.step_info.max_steps,
            details: details.into(),
        };
        self.events.send(AgentEvent::new(actor, state, data));
    }

    /// Move to the next step.
    pub fn next_step(&mut self) {
        self.step_info.step_number += 1;
    }

    pub fn is_last_step(&self) -> bool {
        self.step_info.step_number + 1 >= self.step_info.max_steps
    }

    /// Page scrolls performed so far.
    pub fn page_scrolls(&self) -> u32 {
        self.page_scrolls.load(Ordering::SeqCst)
    }

    /// Count one page scroll against the configured limit. Returns `false`,
    /// without counting, once the limit is reached.
    pub fn try_consume_page_scroll(&self) -> bool {
        match self.options.max_page_scrolls {
            None => {
                self.page_scrolls.fetch_add(1, Ordering::SeqCst);
                true
            }
            Some(limit) => self
                .page_scrolls
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                    (used < limit).then_some(used + 1)
                })
                .is_ok(),
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
