use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to one live socket.
///
/// Cloning shares the queue. The id tells apart two sockets of the same user.
#[derive(Debug, Clone)]
pub struct Connection {
    id: u64,
    user_id: i32,
    tx: UnboundedSender<String>,
}

impl Connection {
    /// Creates a handle and the receiver its writer task should drain.
    pub fn new(user_id: i32) -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection = Self {
            id: NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
            user_id,
            tx,
        };

        (connection, rx)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    /// Queues a text frame.
    ///
    /// # Returns
    /// - `true` - Queued for the writer task
    /// - `false` - The writer is gone; the socket is dead
    pub fn send(&self, payload: impl Into<String>) -> bool {
        self.tx.send(payload.into()).is_ok()
    }
}
