use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::auth::{LoginDto, LoginResponseDto};
use crate::presentation::handlers::blogs::{
    AuthorBlogsDto, AuthorLikesDto, BlogDto, BlogOwnerDto, BlogPayloadDto, BlogStatsDto,
    FavoriteBlogDto,
};
use crate::presentation::handlers::users::{RegisterDto, UserBlogDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::blogs::list_blogs,
        crate::presentation::handlers::blogs::blog_stats,
        crate::presentation::handlers::blogs::get_blog,
        crate::presentation::handlers::blogs::create_blog,
        crate::presentation::handlers::blogs::update_blog,
        crate::presentation::handlers::blogs::delete_blog,
        crate::presentation::handlers::users::list_users,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::logout
    ),
    components(
        schemas(
            BlogPayloadDto,
            BlogDto,
            BlogOwnerDto,
            BlogStatsDto,
            FavoriteBlogDto,
            AuthorBlogsDto,
            AuthorLikesDto,
            RegisterDto,
            UserDto,
            UserBlogDto,
            LoginDto,
            LoginResponseDto
        )
    ),
    tags(
        (name = "blogs", description = "Blog endpoints"),
        (name = "users", description = "User registration and listing"),
        (name = "auth", description = "Token login and logout")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
