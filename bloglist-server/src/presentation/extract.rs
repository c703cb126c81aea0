use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
};

use super::app_error::AppError;

/// `Json` whose rejections render as `{"error": ...}` bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub(crate) struct AppJson<T>(pub(crate) T);

/// A positive numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdPath(pub(crate) i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::MalformedId)?;

        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(AppError::MalformedId),
        }
    }
}
