use axum::Router;

use super::AppState;

pub(crate) mod auth;
pub(crate) mod blogs;
pub(crate) mod users;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/blogs", blogs::router(state.clone()))
        .nest("/api/users", users::router())
        .merge(auth::router(state))
}
