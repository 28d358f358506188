//! # Todos Core Library
//!
//! SQLite-backed storage for users and their todo items, exposed through a
//! small repository seam.
//!
//! ## Core Modules
//!
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and input validation
//! - [`repository`]: Data access layer with Repository pattern
//! - [`error`]: Classified error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use todos_core::db;
//! use todos_core::error::CoreError;
//! use todos_core::models::NewTodoData;
//! use todos_core::repository::{SqliteRepository, TodoRepository, UserRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CoreError> {
//!     // Initialize database
//!     let pool = db::establish_connection("todos.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     // Create a user and a todo owned by it
//!     let user = repo.add_user("ada@example.com").await?;
//!     let todo = repo
//!         .add_todo(NewTodoData {
//!             title: "Write more Rust".to_string(),
//!             owner_email: user.email.clone(),
//!         })
//!         .await?;
//!     println!("Created todo: {}", todo.title);
//!
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod repository;
