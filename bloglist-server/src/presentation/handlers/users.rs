use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::{BlogSummary, RegisterRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct RegisterDto {
    #[validate(length(max = 64, message = "username must be at most 64 characters long"))]
    pub(crate) username: Option<String>,
    #[validate(length(max = 128, message = "name must be at most 128 characters long"))]
    pub(crate) name: Option<String>,
    #[validate(length(max = 128, message = "password must be at most 128 characters long"))]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserBlogDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
}

/// Public view of a user; the password hash never leaves the service layer.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: Option<String>,
    pub(crate) blogs: Vec<UserBlogDto>,
}

impl From<BlogSummary> for UserBlogDto {
    fn from(blog: BlogSummary) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs: user.blogs.into_iter().map(UserBlogDto::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users with their blogs", body = [UserDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing/short password or username, or username taken"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    AppJson(dto): AppJson<RegisterDto>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    dto.validate()?;

    let req = RegisterRequest {
        username: dto.username,
        name: dto.name,
        password: dto.password,
    };

    let user = state.user_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}
