//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database handle is a pool and the
//! services share their inner state through `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::{
    realtime::{chat::ChatRegistry, event::EventRegistry},
    service::{admin::code::AdminCodeService, token::TokenService},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// One-time code used to promote the first superuser.
    pub admin_code_service: AdminCodeService,

    /// Live chat sockets keyed by chat id.
    pub chats: ChatRegistry,

    /// Live event sockets keyed by user id.
    pub events: EventRegistry,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        admin_code_service: AdminCodeService,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_code_service,
            chats: ChatRegistry::new(),
            events: EventRegistry::new(),
        }
    }
}
