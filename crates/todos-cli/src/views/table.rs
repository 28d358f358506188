use chrono::{DateTime, Utc};
use comfy_table::{Cell, Row, Table};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ViewTodo {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

pub fn display_todos(owner_email: &str, todos: &[ViewTodo]) {
    if todos.is_empty() {
        println!("No todos found for '{}'.", owner_email);
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Created At"]);

    for todo in todos {
        let mut row = Row::new();
        // Short ID prefix is enough to tell todos apart in a terminal
        row.add_cell(Cell::new(&todo.id.to_string()[..7]));
        row.add_cell(Cell::new(&todo.title));
        row.add_cell(Cell::new(
            todo.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ));
        table.add_row(row);
    }

    println!("{table}");
}
