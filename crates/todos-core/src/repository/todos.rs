use crate::error::CoreError;
use crate::models::{self, NewTodoData, Todo};
use crate::repository::{SqliteRepository, UserRepository};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl super::TodoRepository for SqliteRepository {
    async fn add_todo(&self, data: NewTodoData) -> Result<Todo, CoreError> {
        models::validate_email(&data.owner_email)?;
        models::validate_title(&data.title)?;

        let owner = self
            .find_user_by_email(&data.owner_email)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!(
                    "No user with the email '{}'. Create the user first.",
                    data.owner_email
                ))
            })?;

        let todo = sqlx::query_as(
            r#"INSERT INTO todos (id, title, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, user_id, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&data.title)
        .bind(owner.id)
        .bind(Utc::now())
        .fetch_one(self.pool())
        .await?;

        Ok(todo)
    }

    async fn find_todos_by_owner_email(&self, email: &str) -> Result<Vec<Todo>, CoreError> {
        models::validate_email(email)?;

        // A user with zero todos (or no user at all) yields an empty list,
        // never an error.
        let todos = sqlx::query_as(
            r#"SELECT t.id, t.title, t.user_id, t.created_at
            FROM todos t
            JOIN users u ON t.user_id = u.id
            WHERE u.email = $1
            ORDER BY t.created_at
            "#,
        )
        .bind(email)
        .fetch_all(self.pool())
        .await?;

        Ok(todos)
    }
}
