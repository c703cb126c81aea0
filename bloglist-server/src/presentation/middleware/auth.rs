use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::domain::error::{DomainError, TokenFailure};
use crate::presentation::AppState;
use crate::presentation::app_error::AppError;

/// The user resolved from the bearer token, attached by [`jwt_auth_middleware`].
#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) user_id: i64,
    pub(crate) username: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Domain(DomainError::Token(TokenFailure::Missing)))
    }
}

pub(crate) async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?.to_owned();

    let account = state.auth_service.authenticate(&token).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: account.id,
        username: account.username,
    });

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, DomainError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(DomainError::Token(TokenFailure::Missing))?;

    let mut parts = raw.split_whitespace();
    let scheme = parts.next().ok_or(DomainError::Token(TokenFailure::Missing))?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(DomainError::Token(TokenFailure::Missing));
    }
    let token = parts
        .next()
        .ok_or(DomainError::Token(TokenFailure::Missing))?;
    if parts.next().is_some() {
        return Err(DomainError::Token(TokenFailure::Invalid));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use super::bearer_token;
    use crate::domain::error::{DomainError, TokenFailure};

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(value).expect("valid header value"),
        );
        headers
    }

    fn failure(result: Result<&str, DomainError>) -> TokenFailure {
        match result {
            Err(DomainError::Token(failure)) => failure,
            other => panic!("expected token failure, got {other:?}"),
        }
    }

    #[test]
    fn extracts_token_case_insensitively() {
        assert_eq!(bearer_token(&headers("bearer abc.def")).ok(), Some("abc.def"));
        assert_eq!(bearer_token(&headers("Bearer  abc.def ")).ok(), Some("abc.def"));
    }

    #[test]
    fn absent_or_foreign_scheme_counts_as_missing() {
        assert_eq!(failure(bearer_token(&HeaderMap::new())), TokenFailure::Missing);
        assert_eq!(failure(bearer_token(&headers("Basic dXNlcg=="))), TokenFailure::Missing);
        assert_eq!(failure(bearer_token(&headers("Bearer"))), TokenFailure::Missing);
    }

    #[test]
    fn trailing_garbage_is_invalid() {
        assert_eq!(failure(bearer_token(&headers("Bearer a b"))), TokenFailure::Invalid);
    }
}
