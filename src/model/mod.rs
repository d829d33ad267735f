//! Data transfer objects shared by the HTTP and WebSocket surfaces.

pub mod api;
pub mod auth;
pub mod chat;
pub mod event;
pub mod game;
pub mod task;
pub mod team;
pub mod user;
