use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminCodeDto, LoginForm, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState, util::validation::validate,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The password must be at least 8 characters and must not contain the email. Email and
/// phone number must not belong to another account.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid body or weak password
/// - `409 Conflict` - Email or phone number already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email or phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let user = AuthService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Takes a form body where `username` is the account email and answers with a bearer
/// token for the `Authorization` header.
///
/// # Returns
/// - `200 OK` - Access token
/// - `401 Unauthorized` - Wrong email or password, or inactive account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state.db)
        .login(&state.tokens, form)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}

/// Redeem the startup admin code.
///
/// Promotes the caller to superuser. The code is printed to the server log at startup
/// when no superuser exists and is valid once, for 60 seconds.
///
/// # Returns
/// - `200 OK` - The promoted user
/// - `401 Unauthorized` - Not logged in, or the code is invalid or expired
#[utoipa::path(
    post,
    path = "/api/auth/admin-code",
    tag = AUTH_TAG,
    request_body = AdminCodeDto,
    responses(
        (status = 200, description = "Caller promoted to superuser", body = UserDto),
        (status = 401, description = "Not authenticated, or invalid admin code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn redeem_admin_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AdminCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = AuthService::new(&state.db)
        .redeem_admin_code(&state.admin_code_service, user.id, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
