use tracing::info;

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{RegisterRequest, User};
use crate::infrastructure::password::{PasswordError, hash_password};

pub(crate) struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<User, DomainError> {
        let registration = req.validate()?;

        let password_hash = hash_password(&registration.password).map_err(|err| match err {
            PasswordError::TooShort => DomainError::Validation {
                field: "password",
                message: "must be at least 3 characters long",
            },
            other => DomainError::Unexpected(other.to_string()),
        })?;

        let user = self
            .repo
            .create_user(NewUser {
                username: registration.username,
                name: registration.name,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list_users().await
    }
}
