use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::handlers::users::{create_user, list_users};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}
