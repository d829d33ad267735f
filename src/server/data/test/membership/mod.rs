use crate::server::data::membership::{GameTasks, GameTeams, MembershipRepository, TeamUsers};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod insert;
mod members;
