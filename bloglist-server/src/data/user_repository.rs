use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{User, UserAccount};

#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub(crate) account: UserAccount,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) username: String,
    pub(crate) name: Option<String>,
    pub(crate) password_hash: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    /// Fails with `DomainError::AlreadyExists("username")` on a taken username.
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<UserAccount>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserCredentials>, DomainError>;
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
}

pub(crate) type DynUserRepository = Arc<dyn UserRepository>;

#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        (**self).create_user(input).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserAccount>, DomainError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserCredentials>, DomainError> {
        (**self).find_by_username(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        (**self).list_users().await
    }
}
