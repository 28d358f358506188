use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use todos_core::models::NewTodoData;
use todos_core::repository::{Repository, TodoRepository};

pub async fn create_todo(repo: &impl Repository, email: String, title: String) -> Result<()> {
    let todo = repo
        .add_todo(NewTodoData {
            title,
            owner_email: email.clone(),
        })
        .await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Created todo: {}",
        "✓".style(success_style),
        todo.title.bright_white().bold()
    );
    println!(
        "  {} Todo ID: {}",
        "→".style(info_style),
        todo.id.to_string().yellow()
    );
    println!("  {} Owner: {}", "→".style(info_style), email.cyan());

    Ok(())
}
