use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum JwtError {
    #[error("token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token expired")]
    Expired,

    #[error("token decode/validation failed")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Claims {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) exp: i64,
}

pub(crate) struct JwtService {
    secret: String,
    ttl_seconds: i64,
}

impl JwtService {
    const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;
    const LEEWAY_SECONDS: u64 = 10;

    pub(crate) fn new(secret: &str, ttl_seconds: i64) -> Self {
        let ttl_seconds = if ttl_seconds > 0 {
            ttl_seconds
        } else {
            Self::DEFAULT_TTL_SECONDS
        };

        JwtService {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub(crate) fn issue(&self, user_id: i64, username: &str) -> Result<String, JwtError> {
        let exp = (Utc::now() + Duration::seconds(self.ttl_seconds)).timestamp();

        let claims = Claims {
            id: user_id,
            username: username.into(),
            exp,
        };

        self.encode_claims(&claims)
    }

    pub(crate) fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = Self::LEEWAY_SECONDS;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            _ => JwtError::Invalid(err),
        })?;

        Ok(token_data.claims)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(JwtError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Claims, JwtError, JwtService};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn issued_token_round_trips_user_id() {
        let jwt = JwtService::new(SECRET, 3600);
        let token = jwt.issue(42, "mluukkai").expect("token must be issued");

        let claims = jwt.verify(&token).expect("token must verify");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "mluukkai");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn non_positive_ttl_falls_back_to_default() {
        let jwt = JwtService::new(SECRET, 0);
        assert_eq!(jwt.ttl_seconds, JwtService::DEFAULT_TTL_SECONDS);
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let issuer = JwtService::new("ffffffffffffffffffffffffffffffff", 3600);
        let token = issuer.issue(1, "root").expect("token must be issued");

        let err = JwtService::new(SECRET, 3600)
            .verify(&token)
            .expect_err("foreign signature must be rejected");
        assert!(matches!(err, JwtError::Invalid(_)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let err = JwtService::new(SECRET, 3600)
            .verify("not-a-jwt")
            .expect_err("garbage must be rejected");
        assert!(matches!(err, JwtError::Invalid(_)));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let jwt = JwtService::new(SECRET, 3600);
        let token = jwt
            .encode_claims(&Claims {
                id: 1,
                username: "root".to_string(),
                exp: Utc::now().timestamp() - 3600,
            })
            .expect("token must be encoded");

        let err = jwt.verify(&token).expect_err("expired token must fail");
        assert!(matches!(err, JwtError::Expired));
    }
}
