use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::user::LoginRequest;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::AppJson;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct LoginDto {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LoginResponseDto {
    pub(crate) token: String,
    pub(crate) username: String,
    pub(crate) name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 401, description = "Invalid username or password"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    AppJson(dto): AppJson<LoginDto>,
) -> AppResult<Json<LoginResponseDto>> {
    let req = LoginRequest {
        username: dto.username,
        password: dto.password,
    };

    let result = state.auth_service.login(req).await?;

    Ok(Json(LoginResponseDto {
        token: result.token,
        username: result.account.username,
        name: result.account.name,
    }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "auth",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Logged out; the client discards its token"),
        (status = 401, description = "Token missing or invalid")
    )
)]
pub(crate) async fn logout(auth: AuthenticatedUser) -> StatusCode {
    info!(user_id = auth.user_id, username = %auth.username, "user logged out");
    StatusCode::NO_CONTENT
}
