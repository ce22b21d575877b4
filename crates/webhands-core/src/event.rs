//! Event sink for execution events.
//!
//! Emission never blocks and never fails the caller. Events sent after the
//! receiver is gone are dropped.

use tokio::sync::mpsc;
use tracing::debug;

use webhands_protocols::AgentEvent;

/// Sending half of the event channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<AgentEvent>,
}

impl EventSender {
    /// Send an event, dropping it if nobody is listening.
    pub fn send(&self, event: AgentEvent) {
        if let Err(e) = self.tx.send(event) {
            debug!("Event dropped, receiver closed: {:?}", e.0.state);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half of the event channel.
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::UnboundedReceiver<AgentEvent>,
}

impl EventReceiver {
    /// Wait for the next event. Returns `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<AgentEvent> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<AgentEvent> {
        self.rx.try_recv().ok()
    }

    /// Take every event that is already queued.
    pub fn drain(&mut self) -> Vec<AgentEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Create a connected sender/receiver pair.
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, EventReceiver { rx })
}
