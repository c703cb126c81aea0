use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{BlogSummary, User, UserAccount};

#[derive(Debug, Clone)]
pub(crate) struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn blogs_by_owner(
        &self,
        user_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<BlogSummary>>, DomainError> {
        let rows = sqlx::query_as::<_, BlogSummaryRow>(
            r#"
            SELECT id, title, author, url, user_id
            FROM blogs
            WHERE user_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        let mut grouped: HashMap<i64, Vec<BlogSummary>> = HashMap::new();
        for row in rows {
            grouped.entry(row.user_id).or_default().push(BlogSummary {
                id: row.id,
                title: row.title,
                author: row.author,
                url: row.url,
            });
        }
        Ok(grouped)
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    name: Option<String>,
}

#[derive(FromRow)]
struct UserCredentialsRow {
    id: i64,
    username: String,
    name: Option<String>,
    password_hash: String,
}

#[derive(FromRow)]
struct BlogSummaryRow {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    user_id: i64,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, name
            "#,
        )
        .bind(input.username)
        .bind(input.name)
        .bind(input.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(User {
            id: row.id,
            username: row.username,
            name: row.name,
            blogs: Vec::new(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserAccount>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, name
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(|row| UserAccount {
            id: row.id,
            username: row.username,
            name: row.name,
        }))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let row = sqlx::query_as::<_, UserCredentialsRow>(
            r#"
            SELECT id, username, name, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(|row| UserCredentials {
            account: UserAccount {
                id: row.id,
                username: row.username,
                name: row.name,
            },
            password_hash: row.password_hash,
        }))
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, name
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut blogs = self.blogs_by_owner(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| User {
                blogs: blogs.remove(&row.id).unwrap_or_default(),
                id: row.id,
                username: row.username,
                name: row.name,
            })
            .collect())
    }
}

fn map_user_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
    {
        let field = match db_err.constraint() {
            Some("users_username_key") => "username",
            _ => "user",
        };
        return DomainError::AlreadyExists(field.to_string());
    }
    DomainError::Unexpected(err.to_string())
}
