use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
mod superuser_exists;
mod update;

fn create_param(email: &str, phone_number: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Ivan".to_string(),
        surname: "Petrov".to_string(),
        patronymic: "Sergeevich".to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        hashed_password: "$argon2id$placeholder".to_string(),
    }
}
