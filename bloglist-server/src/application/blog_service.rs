use tracing::{debug, info};

use crate::data::blog_repository::{BlogDeletion, BlogRepository, NewBlog};
use crate::domain::blog::{Blog, BlogInput};
use crate::domain::error::DomainError;
use crate::domain::list_helper::{
    AuthorBlogs, AuthorLikes, FavoriteBlog, favorite_blog, most_blogs, most_likes, total_likes,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlogStats {
    pub(crate) total_likes: i64,
    pub(crate) favorite_blog: Option<FavoriteBlog>,
    pub(crate) most_blogs: Option<AuthorBlogs>,
    pub(crate) most_likes: Option<AuthorLikes>,
}

pub(crate) struct BlogService<R: BlogRepository> {
    repo: R,
}

impl<R: BlogRepository> BlogService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo.list_blogs().await
    }

    pub(crate) async fn get_blog(&self, id: i64) -> Result<Blog, DomainError> {
        self.repo
            .get_blog(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("blog".to_string()))
    }

    pub(crate) async fn create_blog(
        &self,
        user_id: i64,
        input: BlogInput,
    ) -> Result<Blog, DomainError> {
        let fields = input.validate()?;

        let blog = self.repo.create_blog(NewBlog { fields, user_id }).await?;
        info!(blog_id = blog.id, user_id, "blog created");
        Ok(blog)
    }

    pub(crate) async fn update_blog(&self, id: i64, input: BlogInput) -> Result<Blog, DomainError> {
        let fields = input.validate()?;

        self.repo
            .replace_blog(id, fields)
            .await?
            .ok_or_else(|| DomainError::NotFound("blog".to_string()))
    }

    /// Deleting an id that no longer exists succeeds without doing anything.
    pub(crate) async fn delete_blog(&self, actor_user_id: i64, id: i64) -> Result<(), DomainError> {
        match self.repo.delete_owned_blog(id, actor_user_id).await? {
            BlogDeletion::Deleted => {
                info!(blog_id = id, user_id = actor_user_id, "blog deleted");
                Ok(())
            }
            BlogDeletion::NotOwned => Err(DomainError::NotOwner),
            BlogDeletion::Missing => {
                debug!(blog_id = id, "delete of missing blog ignored");
                Ok(())
            }
        }
    }

    pub(crate) async fn stats(&self) -> Result<BlogStats, DomainError> {
        let blogs = self.repo.list_blogs().await?;

        Ok(BlogStats {
            total_likes: total_likes(&blogs),
            favorite_blog: favorite_blog(&blogs),
            most_blogs: most_blogs(&blogs),
            most_likes: most_likes(&blogs),
        })
    }
}
