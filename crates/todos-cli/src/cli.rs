use clap::{ArgGroup, Parser};

/// Create users and todo items in a local SQLite store
///
/// Exactly one of --user, --todo or --read must be given per invocation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("command")
        .required(true)
        .multiple(false)
        .args(["user", "todo", "read"])
))]
pub struct Cli {
    /// Create a user with the given email address
    #[arg(long, value_name = "EMAIL")]
    pub user: Option<String>,

    /// Create a todo item owned by an existing user
    #[arg(long, num_args = 2, value_names = ["EMAIL", "TITLE"])]
    pub todo: Option<Vec<String>>,

    /// List all todo items for a user
    #[arg(long, value_name = "EMAIL")]
    pub read: Option<String>,
}

/// A fully-dispatched command with its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateUser { email: String },
    CreateTodo { email: String, title: String },
    ListTodos { email: String },
}

impl Cli {
    pub fn into_command(self) -> Command {
        if let Some(email) = self.user {
            Command::CreateUser { email }
        } else if let Some(mut operands) = self.todo {
            // Arity 2 is enforced by clap; operands are [email, title]
            let title = operands.pop().unwrap_or_default();
            let email = operands.pop().unwrap_or_default();
            Command::CreateTodo { email, title }
        } else if let Some(email) = self.read {
            Command::ListTodos { email }
        } else {
            unreachable!("clap requires exactly one command flag")
        }
    }
}
