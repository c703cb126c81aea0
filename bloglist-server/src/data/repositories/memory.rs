//! Mutex-guarded in-process store with the same observable behaviour as the
//! Postgres repositories: unique usernames, owner foreign key, id order.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::data::blog_repository::{BlogDeletion, BlogRepository, NewBlog};
use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
use crate::domain::blog::{Blog, BlogFields, BlogOwner};
use crate::domain::error::DomainError;
use crate::domain::user::{BlogSummary, User, UserAccount};

#[derive(Debug, Clone)]
struct StoredUser {
    id: i64,
    username: String,
    name: Option<String>,
    password_hash: String,
}

impl StoredUser {
    fn account(&self) -> UserAccount {
        UserAccount {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredBlog {
    id: i64,
    fields: BlogFields,
    user_id: Option<i64>,
}

#[derive(Debug, Default)]
struct State {
    users: Vec<StoredUser>,
    blogs: Vec<StoredBlog>,
    next_user_id: i64,
    next_blog_id: i64,
}

impl State {
    fn owner(&self, user_id: Option<i64>) -> Option<BlogOwner> {
        let user = self.users.iter().find(|user| Some(user.id) == user_id)?;
        Some(BlogOwner {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        })
    }

    fn blog(&self, stored: &StoredBlog) -> Blog {
        Blog {
            id: stored.id,
            title: stored.fields.title.clone(),
            author: stored.fields.author.clone(),
            url: stored.fields.url.clone(),
            likes: stored.fields.likes,
            user: self.owner(stored.user_id),
        }
    }

    fn user(&self, stored: &StoredUser) -> User {
        let blogs = self
            .blogs
            .iter()
            .filter(|blog| blog.user_id == Some(stored.id))
            .map(|blog| BlogSummary {
                id: blog.id,
                title: blog.fields.title.clone(),
                author: blog.fields.author.clone(),
                url: blog.fields.url.clone(),
            })
            .collect();

        User {
            id: stored.id,
            username: stored.username.clone(),
            name: stored.name.clone(),
            blogs,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn blogs(&self) -> MemoryBlogRepository {
        MemoryBlogRepository {
            store: self.clone(),
        }
    }

    pub(crate) fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository {
            store: self.clone(),
        }
    }

    pub(crate) fn blog_count(&self) -> usize {
        self.lock().blogs.len()
    }

    pub(crate) fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store mutex poisoned")
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MemoryBlogRepository {
    store: MemoryStore,
}

#[derive(Debug, Clone)]
pub(crate) struct MemoryUserRepository {
    store: MemoryStore,
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn create_blog(&self, input: NewBlog) -> Result<Blog, DomainError> {
        let mut state = self.store.lock();
        if !state.users.iter().any(|user| user.id == input.user_id) {
            return Err(DomainError::NotFound("user".to_string()));
        }

        state.next_blog_id += 1;
        let stored = StoredBlog {
            id: state.next_blog_id,
            fields: input.fields,
            user_id: Some(input.user_id),
        };
        let blog = state.blog(&stored);
        state.blogs.push(stored);
        Ok(blog)
    }

    async fn get_blog(&self, id: i64) -> Result<Option<Blog>, DomainError> {
        let state = self.store.lock();
        Ok(state
            .blogs
            .iter()
            .find(|blog| blog.id == id)
            .map(|blog| state.blog(blog)))
    }

    async fn replace_blog(&self, id: i64, fields: BlogFields) -> Result<Option<Blog>, DomainError> {
        let mut state = self.store.lock();
        let Some(index) = state.blogs.iter().position(|blog| blog.id == id) else {
            return Ok(None);
        };
        state.blogs[index].fields = fields;
        let stored = state.blogs[index].clone();
        Ok(Some(state.blog(&stored)))
    }

    async fn delete_owned_blog(
        &self,
        id: i64,
        owner_id: i64,
    ) -> Result<BlogDeletion, DomainError> {
        let mut state = self.store.lock();
        let Some(index) = state.blogs.iter().position(|blog| blog.id == id) else {
            return Ok(BlogDeletion::Missing);
        };
        if state.blogs[index].user_id != Some(owner_id) {
            return Ok(BlogDeletion::NotOwned);
        }
        state.blogs.remove(index);
        Ok(BlogDeletion::Deleted)
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        let state = self.store.lock();
        Ok(state.blogs.iter().map(|blog| state.blog(blog)).collect())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut state = self.store.lock();
        if state.users.iter().any(|user| user.username == input.username) {
            return Err(DomainError::AlreadyExists("username".to_string()));
        }

        state.next_user_id += 1;
        let stored = StoredUser {
            id: state.next_user_id,
            username: input.username,
            name: input.name,
            password_hash: input.password_hash,
        };
        let user = state.user(&stored);
        state.users.push(stored);
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserAccount>, DomainError> {
        let state = self.store.lock();
        Ok(state
            .users
            .iter()
            .find(|user| user.id == id)
            .map(StoredUser::account))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let state = self.store.lock();
        Ok(state
            .users
            .iter()
            .find(|user| user.username == username)
            .map(|user| UserCredentials {
                account: user.account(),
                password_hash: user.password_hash.clone(),
            }))
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let state = self.store.lock();
        Ok(state.users.iter().map(|user| state.user(user)).collect())
    }
}
