use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ActiveChatDto, CreateMessageDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::chat::CreateMessageParam,
        service::chat::ChatService,
        state::AppState,
        util::validation::validate,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Post a message to a chat.
///
/// The caller is the author. The stored message is pushed as JSON to every socket
/// connected to the chat except the author's own.
///
/// # Access Control
/// - Members of the chat's team, or superusers
///
/// # Returns
/// - `201 Created` - The stored message
/// - `400 Bad Request` - Invalid body, or the chat is no longer active
/// - `403 Forbidden` - Caller is not on the chat's team
/// - `404 Not Found` - Chat not found, or `reply_to` is not a message of this chat
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = CHAT_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageDto),
        (status = 400, description = "Invalid message or inactive chat", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a chat participant", body = ErrorDto),
        (status = 404, description = "Chat or reply target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn post_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate(&payload)?;

    let (chat, message) = ChatService::new(&state.db)
        .post_message(&user, CreateMessageParam::from_dto(user.id, payload))
        .await?;

    let dto = message.into_dto();
    let payload = serde_json::to_string(&dto)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize message: {}", e)))?;

    let delivered = state.chats.broadcast(chat.id, &payload, Some(user.id)).await;
    tracing::debug!(
        "Message {} in chat {} delivered to {} socket(s)",
        dto.id,
        chat.id,
        delivered
    );

    Ok((StatusCode::CREATED, Json(dto)))
}

/// List all active chats with their team names. Superuser only.
#[utoipa::path(
    get,
    path = "/api/chats/active",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Active chats", body = Vec<ActiveChatDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a superuser", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_active_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Superuser])
        .await?;

    let chats: Vec<ActiveChatDto> = ChatService::new(&state.db)
        .active_chats()
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(chats)))
}

/// Get the message history of a chat, oldest first.
#[utoipa::path(
    get,
    path = "/api/chats/{id}/messages",
    tag = CHAT_TAG,
    params(("id" = i32, Path, description = "Chat ID")),
    responses(
        (status = 200, description = "Messages in date order", body = Vec<MessageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a chat participant", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_chat_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let chat_service = ChatService::new(&state.db);
    let chat = chat_service.get_for_participant(&user, id).await?;

    let messages: Vec<MessageDto> = chat_service
        .history(chat.id)
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(messages)))
}
