use crate::server::data::chat::ChatRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active_with_team;
mod open;
