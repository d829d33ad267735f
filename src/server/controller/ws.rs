//! WebSocket endpoints for chat fan-out and per-user events.
//!
//! Both sockets share a handshake: the first text frame must be the bearer token and must
//! arrive within `SOCKET_AUTH_TIMEOUT`. Any failure closes the socket with code 1008.
//! After the handshake the socket is split: a writer task drains the connection's queue
//! while the upgrade task reads until the client goes away.

use std::time::Duration;

use axum::{
    extract::{
        ws::{close_code, CloseFrame, Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    middleware::auth::authenticate, model::user::User, realtime::connection::Connection,
    service::chat::ChatService, state::AppState,
};

pub const SOCKET_AUTH_TIMEOUT: Duration = Duration::from_secs(10);

/// GET /ws/chat - Live feed of the caller's active team chat
pub async fn chat_socket(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_chat_socket(state, socket))
}

/// GET /ws/events - Personal notification feed
pub async fn event_socket(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_event_socket(state, socket))
}

async fn handle_chat_socket(state: AppState, mut socket: WebSocket) {
    let user = match authenticate_socket(&state, &mut socket).await {
        Ok(user) => user,
        Err(reason) => return close_with_policy(socket, reason).await,
    };

    let chat = match ChatService::new(&state.db)
        .active_chat_for_user(user.id)
        .await
    {
        Ok(Some(chat)) => chat,
        Ok(None) => return close_with_policy(socket, "No active chat for your team").await,
        Err(e) => {
            tracing::error!("Failed to resolve chat for user {}: {}", user.id, e);
            return close_with_policy(socket, "Internal server error").await;
        }
    };

    let (connection, rx) = Connection::new(user.id);
    let connection_id = connection.id();
    state.chats.connect(chat.id, connection).await;

    tracing::info!(
        "User {} connected to chat {} (connection {})",
        user.id,
        chat.id,
        connection_id
    );

    pump(socket, rx).await;

    state.chats.disconnect(chat.id, connection_id).await;

    tracing::info!(
        "User {} disconnected from chat {} (connection {})",
        user.id,
        chat.id,
        connection_id
    );
}

async fn handle_event_socket(state: AppState, mut socket: WebSocket) {
    let user = match authenticate_socket(&state, &mut socket).await {
        Ok(user) => user,
        Err(reason) => return close_with_policy(socket, reason).await,
    };

    let (connection, rx) = Connection::new(user.id);
    let connection_id = connection.id();
    state.events.connect(connection).await;

    tracing::info!(
        "User {} connected to events (connection {})",
        user.id,
        connection_id
    );

    pump(socket, rx).await;

    state.events.disconnect(user.id, connection_id).await;

    tracing::info!(
        "User {} disconnected from events (connection {})",
        user.id,
        connection_id
    );
}

/// Waits for the token frame and resolves it to an active user.
async fn authenticate_socket(
    state: &AppState,
    socket: &mut WebSocket,
) -> Result<User, &'static str> {
    let frame = tokio::time::timeout(SOCKET_AUTH_TIMEOUT, socket.recv())
        .await
        .map_err(|_| "Authentication timed out")?;

    let text = match frame {
        Some(Ok(Message::Text(text))) => text,
        _ => return Err("Expected bearer token as first message"),
    };

    let token = text.as_str().trim();
    let token = token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token);

    authenticate(&state.db, &state.tokens, token)
        .await
        .map_err(|e| {
            tracing::debug!("WebSocket authentication failed: {}", e);
            "Could not validate credentials"
        })
}

async fn close_with_policy(mut socket: WebSocket, reason: &str) {
    let frame = CloseFrame {
        code: close_code::POLICY,
        reason: reason.to_string().into(),
    };

    if let Err(e) = socket.send(Message::Close(Some(frame))).await {
        tracing::debug!("Failed to send close frame: {}", e);
    }
}

/// Runs the socket until the client leaves or the connection's queue is dropped.
///
/// Inbound frames other than close are ignored.
async fn pump(socket: WebSocket, mut rx: UnboundedReceiver<String>) {
    let (mut sender, mut receiver) = socket.split();

    let mut writer = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }

        let _ = sender.close().await;
    });

    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            _ = &mut writer => return,
        }
    }

    writer.abort();
}
