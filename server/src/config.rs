use std::path::PathBuf;

use clap::Parser;

/// Command-line and environment configuration for the todo service.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "Todo list HTTP service")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// JSON file holding the todo list. Created on first write.
    #[arg(long, env = "TODO_DATA_FILE", default_value = "tmp/todos.json")]
    pub data_file: PathBuf,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
