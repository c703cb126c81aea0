use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::blog_service::BlogService;
use crate::application::user_service::UserService;
use crate::data::blog_repository::DynBlogRepository;
use crate::data::user_repository::DynUserRepository;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;


#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<DynUserRepository>>,
    pub(crate) user_service: Arc<UserService<DynUserRepository>>,
    pub(crate) blog_service: Arc<BlogService<DynBlogRepository>>,
}

impl AppState {
    pub(crate) fn new(users: DynUserRepository, blogs: DynBlogRepository, jwt: JwtService) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users.clone(), jwt)),
            user_service: Arc::new(UserService::new(users)),
            blog_service: Arc::new(BlogService::new(blogs)),
        }
    }
}
