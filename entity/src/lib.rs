//! SeaORM entities for the Night Watch schema.
//!
//! One module per table. The migration crate owns the DDL; these models mirror it
//! and are also used by `test-utils` to build throwaway SQLite schemas.

pub mod prelude;

pub mod chat;
pub mod game;
pub mod game_task;
pub mod game_team;
pub mod message;
pub mod task;
pub mod team;
pub mod team_user;
pub mod user;
