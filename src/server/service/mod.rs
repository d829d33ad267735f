//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce domain rules
//! (unique names, time windows, roster semantics), coordinate several repositories where
//! an operation spans tables, and work with domain models rather than DTOs or entity
//! models. Access checks stay in the controllers.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod game;
pub mod membership;
pub mod task;
pub mod team;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
