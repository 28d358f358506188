use anyhow::Result;
use todos_core::repository::{Repository, TodoRepository};

use crate::views::table::{display_todos, ViewTodo};

pub async fn list_todos(repo: &impl Repository, email: String) -> Result<()> {
    let todos = repo.find_todos_by_owner_email(&email).await?;

    let view_todos: Vec<ViewTodo> = todos
        .into_iter()
        .map(|t| ViewTodo {
            id: t.id,
            title: t.title,
            created_at: t.created_at,
        })
        .collect();

    display_todos(&email, &view_todos);

    Ok(())
}
