use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::data::blog_repository::{BlogDeletion, BlogRepository, NewBlog};
use crate::domain::blog::{Blog, BlogFields, BlogOwner};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
    user_id: Option<i64>,
    username: Option<String>,
    user_name: Option<String>,
}

#[derive(FromRow)]
struct DeletionRow {
    deleted: bool,
    found: bool,
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create_blog(&self, input: NewBlog) -> Result<Blog, DomainError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            WITH inserted AS (
                INSERT INTO blogs (title, author, url, likes, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, title, author, url, likes, user_id
            )
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                   u.username, u.name AS user_name
            FROM inserted b
            LEFT JOIN users u ON u.id = b.user_id
            "#,
        )
        .bind(input.fields.title)
        .bind(input.fields.author)
        .bind(input.fields.url)
        .bind(input.fields.likes)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_blog_db_error)?;

        Ok(map_row_to_blog(row))
    }

    async fn get_blog(&self, id: i64) -> Result<Option<Blog>, DomainError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                   u.username, u.name AS user_name
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_blog_db_error)?;

        Ok(row.map(map_row_to_blog))
    }

    async fn replace_blog(&self, id: i64, fields: BlogFields) -> Result<Option<Blog>, DomainError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            WITH updated AS (
                UPDATE blogs
                SET title = $2,
                    author = $3,
                    url = $4,
                    likes = $5
                WHERE id = $1
                RETURNING id, title, author, url, likes, user_id
            )
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                   u.username, u.name AS user_name
            FROM updated b
            LEFT JOIN users u ON u.id = b.user_id
            "#,
        )
        .bind(id)
        .bind(fields.title)
        .bind(fields.author)
        .bind(fields.url)
        .bind(fields.likes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_blog_db_error)?;

        Ok(row.map(map_row_to_blog))
    }

    async fn delete_owned_blog(
        &self,
        id: i64,
        owner_id: i64,
    ) -> Result<BlogDeletion, DomainError> {
        // the outer SELECT still sees the row the CTE removed
        let row = sqlx::query_as::<_, DeletionRow>(
            r#"
            WITH removed AS (
                DELETE FROM blogs
                WHERE id = $1 AND user_id = $2
                RETURNING id
            )
            SELECT
                EXISTS (SELECT 1 FROM removed) AS deleted,
                EXISTS (SELECT 1 FROM blogs WHERE id = $1) AS found
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_blog_db_error)?;

        Ok(match (row.deleted, row.found) {
            (true, _) => BlogDeletion::Deleted,
            (false, true) => BlogDeletion::NotOwned,
            (false, false) => BlogDeletion::Missing,
        })
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                   u.username, u.name AS user_name
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_blog_db_error)?;

        Ok(rows.into_iter().map(map_row_to_blog).collect())
    }
}

fn map_row_to_blog(row: BlogRow) -> Blog {
    let user = match (row.user_id, row.username) {
        (Some(id), Some(username)) => Some(BlogOwner {
            id,
            username,
            name: row.user_name,
        }),
        _ => None,
    };

    Blog {
        id: row.id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user,
    }
}

fn map_blog_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23503") => return DomainError::NotFound("user".to_string()),
            Some("23514") => {
                return DomainError::Validation {
                    field: "likes",
                    message: "must be a non-negative integer",
                };
            }
            _ => {}
        }
    }
    DomainError::Unexpected(err.to_string())
}
