use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use todos_core::repository::{Repository, UserRepository};

pub async fn create_user(repo: &impl Repository, email: String) -> Result<()> {
    let user = repo.add_user(&email).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Created user: {}",
        "✓".style(success_style),
        user.email.bright_white().bold()
    );
    println!(
        "  {} User ID: {}",
        "→".style(info_style),
        user.id.to_string().yellow()
    );

    Ok(())
}
