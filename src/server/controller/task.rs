use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, TaskDto, UpdateTaskDto},
        user::UserDto,
    },
    server::{
        controller::param::OwnerParam,
        error::AppError,
        middleware::{
            access::{ensure_owner_or_superuser, ensure_self_or_superuser},
            auth::AuthGuard,
        },
        model::{
            task::{CreateTaskParam, Task, UpdateTaskParam},
            user::User,
        },
        service::{task::TaskService, user::UserService},
        state::AppState,
        util::validation::validate,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

async fn owned_task(state: &AppState, user: &User, id: i32) -> Result<Task, AppError> {
    let task = TaskService::new(&state.db).get(id).await?;
    ensure_owner_or_superuser(user, task.owner_id)?;

    Ok(task)
}

/// Create a task owned by the caller.
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let task = TaskService::new(&state.db)
        .create(CreateTaskParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// List the tasks a user authored. `user_id` defaults to the caller.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    params(OwnerParam),
    responses(
        (status = 200, description = "Tasks owned by the user", body = Vec<TaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this user and not a superuser", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<OwnerParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let owner = UserService::new(&state.db)
        .get(params.user_id.unwrap_or(user.id))
        .await?;
    ensure_self_or_superuser(&user, owner.id)?;

    let tasks: Vec<TaskDto> = TaskService::new(&state.db)
        .get_by_owner(owner.id)
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(tasks)))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task", body = TaskDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let task = owned_task(&state, &user, id).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Updated task", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let task = owned_task(&state, &user, id).await?;
    let task = TaskService::new(&state.db)
        .update(task.id, UpdateTaskParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let task = owned_task(&state, &user, id).await?;
    TaskService::new(&state.db).delete(task.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}/user",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task owner", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Task not found or has no owner", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_task_owner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let task = owned_task(&state, &user, id).await?;
    let owner = TaskService::new(&state.db).owner(task.id).await?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}
