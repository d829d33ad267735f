use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
        task::TaskDto,
        team::TeamDto,
        user::UserDto,
    },
    server::{
        controller::param::{OwnerParam, TaskIdParam, TeamIdParam},
        error::AppError,
        middleware::{
            access::{ensure_owner_or_superuser, ensure_self_or_superuser},
            auth::AuthGuard,
        },
        model::{
            game::{CreateGameParam, Game, UpdateGameParam},
            user::User,
        },
        service::{game::GameService, user::UserService},
        state::AppState,
        util::validation::validate,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Loads a game and checks that `user` may manage it.
async fn owned_game(state: &AppState, user: &User, id: i32) -> Result<Game, AppError> {
    let game = GameService::new(&state.db).get(id).await?;
    ensure_owner_or_superuser(user, game.owner_id)?;

    Ok(game)
}

/// Create a game owned by the caller.
///
/// # Returns
/// - `201 Created` - The new game
/// - `400 Bad Request` - Invalid body, or end not after start
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let game = GameService::new(&state.db)
        .create(CreateGameParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// List the games a user owns.
///
/// `user_id` defaults to the caller. Listing another user's games requires superuser.
///
/// # Returns
/// - `200 OK` - Games, possibly none
/// - `403 Forbidden` - Another user's games and caller is not a superuser
/// - `404 Not Found` - User not found
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(OwnerParam),
    responses(
        (status = 200, description = "Games owned by the user", body = Vec<GameDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this user and not a superuser", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_games(
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

    let games: Vec<GameDto> = GameService::new(&state.db)
        .get_by_owner(owner.id)
        .await?
        .into_iter()
        .map(|g| g.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(games)))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game", body = GameDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Update a game.
///
/// Moving either end of the time window is checked against the stored other end.
#[utoipa::path(
    patch,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Updated game", body = GameDto),
        (status = 400, description = "Invalid game data, or end not after start", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let game = owned_game(&state, &user, id).await?;
    let game = GameService::new(&state.db)
        .update(game.id, UpdateGameParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    GameService::new(&state.db).delete(game.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the user who owns the game.
#[utoipa::path(
    get,
    path = "/api/games/{id}/user",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game owner", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found or has no owner", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_game_owner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    let owner = GameService::new(&state.db).owner(game.id).await?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/tasks",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Tasks of the game", body = Vec<TaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_game_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    let tasks: Vec<TaskDto> = GameService::new(&state.db)
        .tasks(game.id)
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(tasks)))
}

/// Add a task to the game.
///
/// # Returns
/// - `201 Created` - Updated task list
/// - `404 Not Found` - Game or task not found
/// - `409 Conflict` - Task already in the game
#[utoipa::path(
    post,
    path = "/api/games/{id}/tasks",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID"), TaskIdParam),
    responses(
        (status = 201, description = "Task added; updated task list", body = Vec<TaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game or task not found", body = ErrorDto),
        (status = 409, description = "Task already in the game", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_game_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<TaskIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    let tasks: Vec<TaskDto> = GameService::new(&state.db)
        .add_task(game.id, params.task_id)
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::CREATED, Json(tasks)))
}

#[utoipa::path(
    delete,
    path = "/api/games/{id}/tasks/{task_id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task removed from the game"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found or task not in it", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_game_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, task_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    GameService::new(&state.db)
        .remove_task(game.id, task_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/teams",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Teams playing the game", body = Vec<TeamDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_game_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    let teams: Vec<TeamDto> = GameService::new(&state.db)
        .teams(game.id)
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Register a team for the game.
///
/// Opens the team's chat for this game. Any other active chat of the team is closed.
///
/// # Returns
/// - `201 Created` - Updated team list
/// - `404 Not Found` - Game or team not found
/// - `409 Conflict` - Team already registered
#[utoipa::path(
    post,
    path = "/api/games/{id}/teams",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID"), TeamIdParam),
    responses(
        (status = 201, description = "Team added; updated team list", body = Vec<TeamDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game or team not found", body = ErrorDto),
        (status = 409, description = "Team already in the game", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_game_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<TeamIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    let teams: Vec<TeamDto> = GameService::new(&state.db)
        .add_team(game.id, params.team_id)
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::CREATED, Json(teams)))
}

/// Unregister a team from the game and close its chat, dropping every socket on it.
#[utoipa::path(
    delete,
    path = "/api/games/{id}/teams/{team_id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team removed from the game"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Game not found or team not in it", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_game_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let game = owned_game(&state, &user, id).await?;
    let closed = GameService::new(&state.db)
        .remove_team(game.id, team_id)
        .await?;

    if let Some(chat) = closed {
        state.chats.close(chat.id).await;
    }

    Ok(StatusCode::NO_CONTENT)
}
