use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenFailure {
    Missing,
    Invalid,
    Expired,
}

impl fmt::Display for TokenFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TokenFailure::Missing => "token missing",
            TokenFailure::Invalid => "invalid token",
            TokenFailure::Expired => "token expired",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("{field} {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("expected `{0}` to be unique")]
    AlreadyExists(String),

    #[error("only the creator can delete a blog")]
    NotOwner,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    Token(TokenFailure),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
