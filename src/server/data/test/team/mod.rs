use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParam, UpdateTeamParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_member;
mod update;
