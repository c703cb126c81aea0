use tracing::debug;

use crate::data::user_repository::UserRepository;
use crate::domain::error::{DomainError, TokenFailure};
use crate::domain::user::{LoginRequest, UserAccount};
use crate::infrastructure::jwt::{JwtError, JwtService};
use crate::infrastructure::password::verify_password;

#[derive(Debug, Clone)]
pub(crate) struct LoginResult {
    pub(crate) account: UserAccount,
    pub(crate) token: String,
}

pub(crate) struct AuthService<R: UserRepository> {
    repo: R,
    jwt: JwtService,
}

impl<R: UserRepository> AuthService<R> {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub(crate) fn new(repo: R, jwt: JwtService) -> Self {
        Self { repo, jwt }
    }

    pub(crate) async fn login(&self, req: LoginRequest) -> Result<LoginResult, DomainError> {
        let req = req.validate()?;

        let Some(creds) = self.repo.find_by_username(&req.username).await? else {
            // keep the unknown-user path as slow as a real password check
            let _ = verify_password(&req.password, Self::DUMMY_PASSWORD_HASH);
            return Err(DomainError::InvalidCredentials);
        };

        let matches = verify_password(&req.password, &creds.password_hash)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        if !matches {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .jwt
            .issue(creds.account.id, &creds.account.username)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        Ok(LoginResult {
            account: creds.account,
            token,
        })
    }

    /// Resolves a bearer token to a user that still exists.
    pub(crate) async fn authenticate(&self, token: &str) -> Result<UserAccount, DomainError> {
        let claims = self.jwt.verify(token).map_err(|err| {
            debug!(error = %err, "token rejected");
            match err {
                JwtError::Expired => DomainError::Token(TokenFailure::Expired),
                _ => DomainError::Token(TokenFailure::Invalid),
            }
        })?;

        self.repo
            .find_by_id(claims.id)
            .await?
            .ok_or(DomainError::Token(TokenFailure::Invalid))
    }
}
