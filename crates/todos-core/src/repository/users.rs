use crate::error::CoreError;
use crate::models::{self, User};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl super::UserRepository for SqliteRepository {
    async fn add_user(&self, email: &str) -> Result<User, CoreError> {
        models::validate_email(email)?;

        let result = sqlx::query_as(
            r#"INSERT INTO users (id, email, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, email, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(email)
        .bind(Utc::now())
        .fetch_one(self.pool())
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(CoreError::Conflict(format!(
                "A user with the email '{}' already exists.",
                email
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        let user = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool())
            .await?;
        Ok(user)
    }
}

/// The UNIQUE index on users.email is the only unique constraint in the
/// schema, so any unique violation on this insert is a duplicate email.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
