// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{LoginOutcome, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = UserDto),
        (status = 400, description = "Missing field or duplicate username/email.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    let user = state.services.user_commands.register(command).await.into_http()?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Always 200 for a well-formed body; the outcome string tells the caller
/// whether the credentials matched.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "\"Success\", \"Incorrect password\" or \"User not found\".", body = LoginOutcome),
        (status = 400, description = "Malformed body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<LoginOutcome>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .verify_credentials(command)
        .await
        .into_http()
        .map(Json)
}
