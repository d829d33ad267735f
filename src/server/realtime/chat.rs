//! Chat sockets, many per chat id.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use super::{connection::Connection, CONNECTED_ACK};

#[derive(Clone, Default)]
pub struct ChatRegistry {
    channels: Arc<RwLock<HashMap<i32, Vec<Connection>>>>,
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection under a chat and queues the acknowledgement to it.
    pub async fn connect(&self, chat_id: i32, connection: Connection) {
        connection.send(CONNECTED_ACK);

        let mut channels = self.channels.write().await;
        let members = channels.entry(chat_id).or_default();
        members.push(connection);

        tracing::debug!(
            "Chat {} now has {} connection(s)",
            chat_id,
            members.len()
        );
    }

    /// Removes exactly the connection with `connection_id`. Empty chats are dropped.
    ///
    /// # Returns
    /// - `true` - The connection was registered and is now removed
    /// - `false` - No such connection under this chat
    pub async fn disconnect(&self, chat_id: i32, connection_id: u64) -> bool {
        let mut channels = self.channels.write().await;

        let Some(members) = channels.get_mut(&chat_id) else {
            return false;
        };

        let before = members.len();
        members.retain(|c| c.id() != connection_id);
        let removed = members.len() < before;

        if members.is_empty() {
            channels.remove(&chat_id);
        }

        if removed {
            tracing::debug!("Connection {} left chat {}", connection_id, chat_id);
        }

        removed
    }

    /// Drops every connection `user_id` holds in the chat.
    ///
    /// Dropping a connection ends its writer, which closes the socket.
    ///
    /// # Returns
    /// - Number of connections removed
    pub async fn disconnect_user(&self, chat_id: i32, user_id: i32) -> usize {
        let mut channels = self.channels.write().await;

        let Some(members) = channels.get_mut(&chat_id) else {
            return 0;
        };

        let before = members.len();
        members.retain(|c| c.user_id() != user_id);
        let removed = before - members.len();

        if members.is_empty() {
            channels.remove(&chat_id);
        }

        if removed > 0 {
            tracing::debug!(
                "Dropped {} connection(s) of user {} from chat {}",
                removed,
                user_id,
                chat_id
            );
        }

        removed
    }

    /// Drops every connection of a chat, closing all its sockets.
    ///
    /// # Returns
    /// - Number of connections removed
    pub async fn close(&self, chat_id: i32) -> usize {
        let removed = self
            .channels
            .write()
            .await
            .remove(&chat_id)
            .map_or(0, |members| members.len());

        if removed > 0 {
            tracing::debug!("Closed chat {} with {} connection(s)", chat_id, removed);
        }

        removed
    }

    /// Sends `payload` to every connection in the chat except those of `exclude_user_id`.
    ///
    /// Connections whose queue is closed are pruned on the way.
    ///
    /// # Returns
    /// - Number of connections the payload was queued to
    pub async fn broadcast(&self, chat_id: i32, payload: &str, exclude_user_id: Option<i32>) -> usize {
        let mut channels = self.channels.write().await;

        let Some(members) = channels.get_mut(&chat_id) else {
            return 0;
        };

        let mut delivered = 0;
        members.retain(|connection| {
            if Some(connection.user_id()) == exclude_user_id {
                return true;
            }

            if connection.send(payload) {
                delivered += 1;
                true
            } else {
                tracing::debug!(
                    "Pruning dead connection {} from chat {}",
                    connection.id(),
                    chat_id
                );
                false
            }
        });

        if members.is_empty() {
            channels.remove(&chat_id);
        }

        delivered
    }

    pub async fn connection_count(&self, chat_id: i32) -> usize {
        self.channels
            .read()
            .await
            .get(&chat_id)
            .map_or(0, |members| members.len())
    }
}
