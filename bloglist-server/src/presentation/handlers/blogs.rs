use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::blog_service::BlogStats;
use crate::domain::blog::{Blog, BlogInput, BlogOwner};
use crate::domain::list_helper::{AuthorBlogs, AuthorLikes, FavoriteBlog};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::{AppJson, IdPath};
use crate::presentation::middleware::auth::AuthenticatedUser;

/// Body of both `POST /api/blogs` and `PUT /api/blogs/{id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct BlogPayloadDto {
    #[validate(length(max = 255, message = "title must be at most 255 characters long"))]
    pub(crate) title: Option<String>,
    #[validate(length(max = 255, message = "author must be at most 255 characters long"))]
    pub(crate) author: Option<String>,
    #[validate(length(max = 2048, message = "url must be at most 2048 characters long"))]
    pub(crate) url: Option<String>,
    pub(crate) likes: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogOwnerDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
    pub(crate) user: Option<BlogOwnerDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct FavoriteBlogDto {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorBlogsDto {
    pub(crate) author: Option<String>,
    pub(crate) blogs: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorLikesDto {
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogStatsDto {
    pub(crate) total_likes: i64,
    pub(crate) favorite_blog: Option<FavoriteBlogDto>,
    pub(crate) most_blogs: Option<AuthorBlogsDto>,
    pub(crate) most_likes: Option<AuthorLikesDto>,
}

impl From<BlogPayloadDto> for BlogInput {
    fn from(dto: BlogPayloadDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            url: dto.url,
            likes: dto.likes,
        }
    }
}

impl From<BlogOwner> for BlogOwnerDto {
    fn from(owner: BlogOwner) -> Self {
        Self {
            id: owner.id,
            username: owner.username,
            name: owner.name,
        }
    }
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: blog.user.map(BlogOwnerDto::from),
        }
    }
}

impl From<BlogStats> for BlogStatsDto {
    fn from(stats: BlogStats) -> Self {
        Self {
            total_likes: stats.total_likes,
            favorite_blog: stats.favorite_blog.map(|FavoriteBlog { title, author, likes }| {
                FavoriteBlogDto {
                    title,
                    author,
                    likes,
                }
            }),
            most_blogs: stats
                .most_blogs
                .map(|AuthorBlogs { author, blogs }| AuthorBlogsDto { author, blogs }),
            most_likes: stats
                .most_likes
                .map(|AuthorLikes { author, likes }| AuthorLikesDto { author, likes }),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "blogs",
    responses(
        (status = 200, description = "All blogs with their owners", body = [BlogDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<BlogDto>>> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs.into_iter().map(BlogDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/blogs/stats",
    tag = "blogs",
    responses(
        (status = 200, description = "Aggregates over all blogs", body = BlogStatsDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn blog_stats(State(state): State<AppState>) -> AppResult<Json<BlogStatsDto>> {
    let stats = state.blog_service.stats().await?;

    Ok(Json(BlogStatsDto::from(stats)))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    responses(
        (status = 200, description = "Blog found", body = BlogDto),
        (status = 400, description = "Malformatted id"),
        (status = 404, description = "Blog not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_blog(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<BlogDto>> {
    let blog = state.blog_service.get_blog(id).await?;

    Ok(Json(BlogDto::from(blog)))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = "blogs",
    security(
        ("bearer_auth" = [])
    ),
    request_body = BlogPayloadDto,
    responses(
        (status = 201, description = "Blog created", body = BlogDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Token missing or invalid"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_blog(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppJson(dto): AppJson<BlogPayloadDto>,
) -> AppResult<(StatusCode, Json<BlogDto>)> {
    dto.validate()?;

    let blog = state
        .blog_service
        .create_blog(auth.user_id, dto.into())
        .await?;
    Ok((StatusCode::CREATED, Json(BlogDto::from(blog))))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    request_body = BlogPayloadDto,
    responses(
        (status = 200, description = "Blog replaced", body = BlogDto),
        (status = 400, description = "Validation error or malformatted id"),
        (status = 404, description = "Blog not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_blog(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(dto): AppJson<BlogPayloadDto>,
) -> AppResult<Json<BlogDto>> {
    dto.validate()?;

    let blog = state.blog_service.update_blog(id, dto.into()).await?;
    Ok(Json(BlogDto::from(blog)))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = "blogs",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    responses(
        (status = 204, description = "Blog deleted, or already gone"),
        (status = 400, description = "Malformatted id"),
        (status = 401, description = "Token missing or invalid, or caller is not the creator"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_blog(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    state.blog_service.delete_blog(auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
