use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    /// Foreign key to the owning user
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new todo. The owner is resolved by email at
/// insertion time and must already exist.
#[derive(Debug, Clone)]
pub struct NewTodoData {
    pub title: String,
    pub owner_email: String,
}

/// Checks that an email has a plausible `local@domain` shape before it is
/// used as an identifier in a store call. This is not RFC 5322 validation;
/// the store remains the authority on uniqueness.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(
            "Email must not be empty".to_string(),
        ));
    }
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !trimmed.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::InvalidInput(format!(
            "Invalid email address: '{}'",
            email
        )));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Todo title must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada@exam@ple.com").is_err());
        assert!(validate_email("ada smith@example.com").is_err());
    }

    #[test]
    fn rejects_blank_title() {
        assert!(validate_title("Buy milk").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }
}
