use axum::{Router, middleware, routing::post};

use crate::presentation::AppState;
use crate::presentation::handlers::auth::{login, logout};
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/logout", post(logout))
        .layer(middleware::from_fn_with_state(state, jwt_auth_middleware));

    Router::new().route("/api/login", post(login)).merge(protected)
}
