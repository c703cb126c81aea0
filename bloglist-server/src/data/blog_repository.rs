use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogFields};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct NewBlog {
    pub(crate) fields: BlogFields,
    pub(crate) user_id: i64,
}

/// Outcome of a delete that only removes blogs owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlogDeletion {
    Deleted,
    NotOwned,
    Missing,
}

/// Blogs are returned with their owner already resolved.
#[async_trait]
pub(crate) trait BlogRepository: Send + Sync {
    async fn create_blog(&self, input: NewBlog) -> Result<Blog, DomainError>;
    async fn get_blog(&self, id: i64) -> Result<Option<Blog>, DomainError>;
    async fn replace_blog(&self, id: i64, fields: BlogFields) -> Result<Option<Blog>, DomainError>;
    /// Check and removal happen in one step: a blog owned by someone else is never removed.
    async fn delete_owned_blog(&self, id: i64, owner_id: i64)
    -> Result<BlogDeletion, DomainError>;
    async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError>;
}

pub(crate) type DynBlogRepository = Arc<dyn BlogRepository>;

#[async_trait]
impl<T: BlogRepository + ?Sized> BlogRepository for Arc<T> {
    async fn create_blog(&self, input: NewBlog) -> Result<Blog, DomainError> {
        (**self).create_blog(input).await
    }

    async fn get_blog(&self, id: i64) -> Result<Option<Blog>, DomainError> {
        (**self).get_blog(id).await
    }

    async fn replace_blog(&self, id: i64, fields: BlogFields) -> Result<Option<Blog>, DomainError> {
        (**self).replace_blog(id, fields).await
    }

    async fn delete_owned_blog(
        &self,
        id: i64,
        owner_id: i64,
    ) -> Result<BlogDeletion, DomainError> {
        (**self).delete_owned_blog(id, owner_id).await
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        (**self).list_blogs().await
    }
}
