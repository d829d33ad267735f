//! Per-user event sockets, one slot per user.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use super::{connection::Connection, CONNECTED_ACK};
use crate::model::event::EventDto;

#[derive(Clone, Default)]
pub struct EventRegistry {
    slots: Arc<RwLock<HashMap<i32, Connection>>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a connection in its user's slot, replacing any previous one.
    ///
    /// The replaced connection's queue is dropped, which ends its writer task.
    pub async fn connect(&self, connection: Connection) {
        connection.send(CONNECTED_ACK);

        let user_id = connection.user_id();
        let previous = self.slots.write().await.insert(user_id, connection);

        if let Some(previous) = previous {
            tracing::debug!(
                "Event connection {} replaced for user {}",
                previous.id(),
                user_id
            );
        }
    }

    /// Clears the user's slot only if it still holds `connection_id`.
    pub async fn disconnect(&self, user_id: i32, connection_id: u64) -> bool {
        let mut slots = self.slots.write().await;

        match slots.get(&user_id) {
            Some(current) if current.id() == connection_id => {
                slots.remove(&user_id);
                true
            }
            _ => false,
        }
    }

    /// Sends a raw payload to the user if connected. A dead slot is cleared.
    ///
    /// # Returns
    /// - `true` - Queued to the user's socket
    /// - `false` - User not connected
    pub async fn send(&self, user_id: i32, payload: &str) -> bool {
        let mut slots = self.slots.write().await;

        let Some(connection) = slots.get(&user_id) else {
            return false;
        };

        if connection.send(payload) {
            return true;
        }

        slots.remove(&user_id);
        false
    }

    /// Serializes and sends an event to the user if connected.
    pub async fn notify(&self, user_id: i32, event: &EventDto) -> bool {
        match serde_json::to_string(event) {
            Ok(payload) => self.send(user_id, &payload).await,
            Err(e) => {
                tracing::error!("Failed to serialize event for user {}: {}", user_id, e);
                false
            }
        }
    }

    pub async fn is_connected(&self, user_id: i32) -> bool {
        self.slots.read().await.contains_key(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that an event reaches a connected user as tagged JSON.
    ///
    /// Expected: acknowledgement then the serialized event
    #[tokio::test]
    async fn notifies_connected_user() {
        let registry = EventRegistry::new();
        let (connection, mut rx) = Connection::new(5);
        registry.connect(connection).await;

        let delivered = registry
            .notify(
                5,
                &EventDto::TeamJoined {
                    team_id: 3,
                    team_name: "Owls".to_string(),
                },
            )
            .await;

        assert!(delivered);
        assert_eq!(rx.recv().await.as_deref(), Some(CONNECTED_ACK));
        let payload: serde_json::Value =
            serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(payload["event"], "team_joined");
        assert_eq!(payload["team_id"], 3);
    }

    /// Tests sending to a user without a socket.
    ///
    /// Expected: false, no error
    #[tokio::test]
    async fn send_to_absent_user_is_noop() {
        let registry = EventRegistry::new();

        assert!(!registry.send(5, "hello").await);
    }

    /// Tests that a new connection replaces the old one in the slot.
    ///
    /// Expected: only the new socket receives; old queue is closed
    #[tokio::test]
    async fn reconnect_replaces_slot() {
        let registry = EventRegistry::new();
        let (old, mut old_rx) = Connection::new(5);
        let (new, mut new_rx) = Connection::new(5);
        registry.connect(old).await;
        registry.connect(new).await;
        old_rx.recv().await;
        new_rx.recv().await;

        assert!(registry.send(5, "ping").await);

        assert_eq!(new_rx.recv().await.as_deref(), Some("ping"));
        assert_eq!(old_rx.recv().await, None);
    }

    /// Tests that a stale disconnect does not evict the newer connection.
    ///
    /// Expected: slot kept for the replacement socket
    #[tokio::test]
    async fn stale_disconnect_keeps_new_connection() {
        let registry = EventRegistry::new();
        let (old, _old_rx) = Connection::new(5);
        let (new, _new_rx) = Connection::new(5);
        let old_id = old.id();
        let new_id = new.id();
        registry.connect(old).await;
        registry.connect(new).await;

        assert!(!registry.disconnect(5, old_id).await);
        assert!(registry.is_connected(5).await);
        assert!(registry.disconnect(5, new_id).await);
        assert!(!registry.is_connected(5).await);
    }

    /// Tests that a dead slot is cleared on send.
    ///
    /// Expected: false and the user no longer connected
    #[tokio::test]
    async fn clears_dead_slot() {
        let registry = EventRegistry::new();
        let (connection, rx) = Connection::new(5);
        registry.connect(connection).await;
        drop(rx);

        assert!(!registry.send(5, "hello").await);
        assert!(!registry.is_connected(5).await);
    }
}
