//! HTTP and WebSocket request handlers.
//!
//! Handlers authenticate through `AuthGuard`, load the target resource, apply the
//! ownership checks from `middleware::access`, then call into the service layer. The
//! order is fixed: a missing resource answers 404 before an ownership failure answers
//! 403, and conflicts are only reported to callers allowed to act.

pub mod auth;
pub mod chat;
pub mod game;
pub mod param;
pub mod task;
pub mod team;
pub mod user;
pub mod ws;
