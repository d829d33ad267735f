//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! the defaults. Factories insert rows directly and bypass service-level validation, so
//! the stored password hash is a placeholder unless one is supplied.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let team = factory::team::TeamFactory::new(&db)
//!     .owner(owner.id)
//!     .build()
//!     .await?;
//! factory::team::add_member(&db, team.id, owner.id).await?;
//! ```

pub mod chat;
pub mod game;
pub mod helpers;
pub mod task;
pub mod team;
pub mod user;

pub use chat::{create_chat, create_message};
pub use game::create_game;
pub use task::create_task;
pub use team::{add_member, create_team};
pub use user::{create_superuser, create_user};
