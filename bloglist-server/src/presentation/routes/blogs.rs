use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::blogs::{
    blog_stats, create_blog, delete_blog, get_blog, list_blogs, update_blog,
};
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_blogs))
        .route("/stats", get(blog_stats))
        .route("/{id}", get(get_blog).put(update_blog));

    let protected = Router::new()
        .route("/", post(create_blog))
        .route("/{id}", delete(delete_blog))
        .layer(middleware::from_fn_with_state(state, jwt_auth_middleware));

    public.merge(protected)
}
