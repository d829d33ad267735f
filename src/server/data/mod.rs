//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees an entity. Roster tables share one generic repository in
//! `membership`.

pub mod chat;
pub mod game;
pub mod membership;
pub mod message;
pub mod task;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
