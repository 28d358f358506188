use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTodoData, Todo, User};
use async_trait::async_trait;

// Re-export domain modules
pub mod todos;
pub mod users;

/// Domain-specific trait for user operations
#[async_trait]
pub trait UserRepository {
    async fn add_user(&self, email: &str) -> Result<User, CoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CoreError>;
}

/// Domain-specific trait for todo operations
#[async_trait]
pub trait TodoRepository {
    async fn add_todo(&self, data: NewTodoData) -> Result<Todo, CoreError>;
    async fn find_todos_by_owner_email(&self, email: &str) -> Result<Vec<Todo>, CoreError>;
}

/// Main repository trait that composes all domain traits
#[async_trait]
pub trait Repository: UserRepository + TodoRepository {}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Repository for SqliteRepository {}
