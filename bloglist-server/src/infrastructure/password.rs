use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;

use crate::domain::user::MIN_PASSWORD_CHARS;

#[derive(Debug, Error)]
pub(crate) enum PasswordError {
    #[error("password must be at least 3 characters long")]
    TooShort,

    #[error("malformed password hash: {0}")]
    MalformedHash(String),

    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Argon2id hash in PHC string format, with a fresh random salt.
pub(crate) fn hash_password(raw_password: &str) -> Result<String, PasswordError> {
    if raw_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PasswordError::TooShort);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = argon2()?
        .hash_password(raw_password.as_bytes(), &salt)
        .map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(password_hash.to_string())
}

/// `Ok(false)` on mismatch; errors only when `password_hash` can't be parsed.
pub(crate) fn verify_password(
    raw_password: &str,
    password_hash: &str,
) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|err| PasswordError::MalformedHash(err.to_string()))?;

    match argon2()?.verify_password(raw_password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(err) => Err(PasswordError::Hash(err.to_string())),
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(19 * 1024, 2, 1, None)
        .map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[cfg(test)]
mod tests {
    use super::{PasswordError, hash_password, verify_password};

    #[test]
    fn hash_then_verify_accepts_original_password() {
        let hash = hash_password("sekret").expect("hash must be created");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("sekret", &hash).expect("verify must run"));
    }

    #[test]
    fn verify_returns_false_on_mismatch() {
        let hash = hash_password("sekret").expect("hash must be created");
        assert!(!verify_password("wrong", &hash).expect("verify must run"));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let first = hash_password("sekret").expect("hash must be created");
        let second = hash_password("sekret").expect("hash must be created");
        assert_ne!(first, second);
    }

    #[test]
    fn short_password_is_rejected_before_hashing() {
        let err = hash_password("ab").expect_err("short password must fail");
        assert!(matches!(err, PasswordError::TooShort));
        assert_eq!(err.to_string(), "password must be at least 3 characters long");
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = verify_password("sekret", "not-a-phc-string").expect_err("must fail");
        assert!(matches!(err, PasswordError::MalformedHash(_)));
    }
}
