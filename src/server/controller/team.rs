use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::EventDto,
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
        user::UserDto,
    },
    server::{
        controller::param::UserIdParam,
        error::AppError,
        middleware::{access::ensure_owner_or_superuser, auth::AuthGuard},
        model::team::{CreateTeamParam, UpdateTeamParam},
        service::{chat::ChatService, team::TeamService},
        state::AppState,
        util::validation::validate,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team owned by the caller.
///
/// The caller becomes the owner but is not put on the roster; owners add players,
/// themselves included, through `POST /api/teams/{id}/users`.
///
/// # Returns
/// - `201 Created` - The new team
/// - `400 Bad Request` - Invalid body
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Team name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParam {
            name: payload.name,
            owner_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let team = TeamService::new(&state.db).get(id).await?;
    ensure_owner_or_superuser(&user, team.owner_id)?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Updated team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team name taken", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let team_service = TeamService::new(&state.db);
    let team = team_service.get(id).await?;
    ensure_owner_or_superuser(&user, team.owner_id)?;

    let team = team_service
        .update(team.id, UpdateTeamParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let team_service = TeamService::new(&state.db);
    let team = team_service.get(id).await?;
    ensure_owner_or_superuser(&user, team.owner_id)?;

    team_service.delete(team.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the team's roster.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/users",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team members", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_team_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let team_service = TeamService::new(&state.db);
    let team = team_service.get(id).await?;
    ensure_owner_or_superuser(&user, team.owner_id)?;

    let members: Vec<UserDto> = team_service
        .members(team.id)
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Add a user to the team's roster.
///
/// The added user is notified with a `team_joined` event if their event socket is open.
///
/// # Returns
/// - `201 Created` - Updated roster
/// - `403 Forbidden` - Caller does not own the team
/// - `404 Not Found` - Team or user not found
/// - `409 Conflict` - User already on this team or on another one
#[utoipa::path(
    post,
    path = "/api/teams/{id}/users",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID"), UserIdParam),
    responses(
        (status = 201, description = "User added; updated roster", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Team or user not found", body = ErrorDto),
        (status = 409, description = "User already in a team", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_team_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<UserIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let team_service = TeamService::new(&state.db);
    let team = team_service.get(id).await?;
    ensure_owner_or_superuser(&user, team.owner_id)?;

    let members: Vec<UserDto> = team_service
        .add_member(team.id, params.user_id)
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    state
        .events
        .notify(
            params.user_id,
            &EventDto::TeamJoined {
                team_id: team.id,
                team_name: team.name,
            },
        )
        .await;

    Ok((StatusCode::CREATED, Json(members)))
}

/// Remove a user from the team's roster.
///
/// The removed user is notified with a `team_left` event if their event socket is open,
/// and their sockets on the team's active chat are dropped.
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/users/{user_id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Team not found or user not on it", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_team_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let team_service = TeamService::new(&state.db);
    let team = team_service.get(id).await?;
    ensure_owner_or_superuser(&user, team.owner_id)?;

    team_service.remove_member(team.id, user_id).await?;

    if let Some(chat) = ChatService::new(&state.db)
        .active_chat_for_team(team.id)
        .await?
    {
        state.chats.disconnect_user(chat.id, user_id).await;
    }

    state
        .events
        .notify(
            user_id,
            &EventDto::TeamLeft {
                team_id: team.id,
                team_name: team.name,
            },
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Ask to join a team.
///
/// Pushes a `join_request` event to the team owner's event socket. The request is not
/// stored; an owner who is offline never sees it.
///
/// # Returns
/// - `202 Accepted` - Request passed on
/// - `404 Not Found` - Team not found
/// - `409 Conflict` - Caller is already on this team
#[utoipa::path(
    post,
    path = "/api/teams/{id}/join-requests",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 202, description = "Join request sent to the owner"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Already a member", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn request_to_join(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let team_service = TeamService::new(&state.db);
    let team = team_service.get(id).await?;

    if team_service.is_member(team.id, user.id).await? {
        return Err(AppError::Conflict(
            "You are already a member of this team".to_string(),
        ));
    }

    if let Some(owner_id) = team.owner_id {
        let delivered = state
            .events
            .notify(
                owner_id,
                &EventDto::JoinRequest {
                    team_id: team.id,
                    team_name: team.name,
                    user_id: user.id,
                    user_name: user.display_name(),
                },
            )
            .await;

        tracing::debug!(
            "Join request from user {} to team {} delivered: {}",
            user.id,
            team.id,
            delivered
        );
    }

    Ok(StatusCode::ACCEPTED)
}
