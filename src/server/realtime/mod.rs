//! In-memory registries of live WebSocket connections.
//!
//! A socket is represented by a `Connection`: a handle onto an unbounded queue that a
//! per-socket writer task drains. Registries never touch sockets directly, so a send to
//! a closed socket is a failed enqueue instead of an I/O error, and the registry prunes
//! the dead handle.

pub mod chat;
pub mod connection;
pub mod event;

/// Acknowledgement queued to every new connection.
pub const CONNECTED_ACK: &str = "Connected";
