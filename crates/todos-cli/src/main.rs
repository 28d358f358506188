use clap::Parser;
use owo_colors::{OwoColorize, Style};
use todos_core::db;
use todos_core::error::CoreError;
use todos_core::repository::SqliteRepository;

mod cli;
mod commands;
mod config;
mod views;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_DATA: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    EXIT_SUCCESS
                }
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let config = config::Config::new().unwrap_or_default();

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(EXIT_DATA);
        }
    };
    let repository = SqliteRepository::new(db_pool);

    let result = match cli.into_command() {
        cli::Command::CreateUser { email } => commands::user::create_user(&repository, email).await,
        cli::Command::CreateTodo { email, title } => {
            commands::todo::create_todo(&repository, email, title).await
        }
        cli::Command::ListTodos { email } => commands::read::list_todos(&repository, email).await,
    };

    if let Err(e) = result {
        std::process::exit(handle_error(&e));
    }
}

/// Reports an operation failure on stderr and picks the exit code:
/// malformed operands are usage errors, everything else is a data error.
fn handle_error(err: &anyhow::Error) -> i32 {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Conflict(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
            EXIT_DATA
        }
        Some(CoreError::NotFound(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
            EXIT_DATA
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            EXIT_USAGE
        }
        _ => {
            eprintln!("{} {}", "Error:".style(error_style), err);
            EXIT_DATA
        }
    }
}
