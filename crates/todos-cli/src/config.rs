use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_database_path() -> String {
    "todos.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl Config {
    /// Layered configuration: `config.toml` in the working directory,
    /// overridden by `TODOS_`-prefixed environment variables
    /// (e.g. `TODOS_DATABASE_PATH`).
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TODOS_"))
            .extract()
    }
}
