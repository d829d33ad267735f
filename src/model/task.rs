use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub level: i32,
    pub mystery_of_place: String,
    pub place: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTaskDto {
    #[validate(range(min = 1))]
    pub level: i32,
    #[validate(length(min = 1, max = 1024))]
    pub mystery_of_place: String,
    #[validate(length(min = 1, max = 1024))]
    pub place: String,
    #[validate(length(min = 1, max = 64))]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskDto {
    #[validate(range(min = 1))]
    pub level: Option<i32>,
    #[validate(length(min = 1, max = 1024))]
    pub mystery_of_place: Option<String>,
    #[validate(length(min = 1, max = 1024))]
    pub place: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub answer: Option<String>,
}
