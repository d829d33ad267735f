//! Route table and OpenAPI document.
//!
//! REST handlers are registered through `OpenApiRouter` so the generated document always
//! matches the routes actually served. Handlers sharing a path are registered in one
//! `routes!` call.

use axum::{routing::get, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, chat, game, task, team, user, ws},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Night Watch API", description = "Game management backend"),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and superuser bootstrap"),
        (name = "user", description = "User accounts"),
        (name = "team", description = "Teams and rosters"),
        (name = "game", description = "Games, their tasks and teams"),
        (name = "task", description = "Tasks"),
        (name = "chat", description = "Team chats")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::redeem_admin_code))
        .routes(routes!(user::get_me, user::update_me))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(team::create_team))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::get_team_users, team::add_team_user))
        .routes(routes!(team::remove_team_user))
        .routes(routes!(team::request_to_join))
        .routes(routes!(game::create_game, game::get_games))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .routes(routes!(game::get_game_owner))
        .routes(routes!(game::get_game_tasks, game::add_game_task))
        .routes(routes!(game::remove_game_task))
        .routes(routes!(game::get_game_teams, game::add_game_team))
        .routes(routes!(game::remove_game_team))
        .routes(routes!(task::create_task, task::get_tasks))
        .routes(routes!(task::get_task, task::update_task, task::delete_task))
        .routes(routes!(task::get_task_owner))
        .routes(routes!(chat::post_message))
        .routes(routes!(chat::get_active_chats))
        .routes(routes!(chat::get_chat_messages))
        .split_for_parts();

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .route("/ws/chat", get(ws::chat_socket))
        .route("/ws/events", get(ws::event_socket))
}
