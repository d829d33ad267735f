//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry the input of a single service
//! operation.

pub mod chat;
pub mod game;
pub mod task;
pub mod team;
pub mod user;
