//! Change notification hub
//!
//! Services publish an event after every successful mutation; subscribers
//! (the SSE endpoint) receive the table name and operation kind only and are
//! expected to re-fetch. Events are advisory: lagged or absent subscribers
//! are skipped, never waited on.

use serde::Serialize;
use tokio::sync::broadcast;
use utoipa::ToSchema;

/// Capacity of the broadcast channel
const CHANNEL_CAPACITY: usize = 256;

/// Kind of mutation that happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// A change notification; carries no payload beyond "something changed"
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChangeEvent {
    /// Logical table that changed
    #[schema(value_type = String)]
    pub table: &'static str,
    pub op: ChangeOp,
}

/// Process-wide fan-out of change events
#[derive(Clone)]
pub struct ChangeHub {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish a change; having no subscribers is not an error
    pub fn publish(&self, table: &'static str, op: ChangeOp) {
        let _ = self.tx.send(ChangeEvent { table, op });
    }

    /// New subscription receiving all subsequent events
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let hub = ChangeHub::new();
        let mut rx = hub.subscribe();
        hub.publish("equipos_ti", ChangeOp::Insert);
        let event = rx.recv().await.unwrap();
        assert_eq!(event.table, "equipos_ti");
        assert_eq!(event.op, ChangeOp::Insert);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let hub = ChangeHub::new();
        hub.publish("news_updates", ChangeOp::Delete);
    }
}
