use std::process::ExitCode;

use clap::Parser;
use todo_server::Config;

#[tokio::main]
async fn main() -> ExitCode {
    todo_server::logging::init();
    let config = Config::parse();

    match todo_server::start(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "todo server stopped");
            ExitCode::FAILURE
        }
    }
}
