use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsearch_cli::cli::{Cli, Command};
use docsearch_cli::commands;
use docsearch_cli::server::{self, AppState};
use docsearch_core::config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let mut settings = config.settings()?;
    cli.apply(&mut settings);
    settings.validate()?;

    // A corpus that fails to load leaves nothing to search: exit non-zero.
    let engine = commands::load_engine(&settings)?;

    let stdout = std::io::stdout();
    match cli.command {
        Command::Query { query, limit } => {
            let limit = limit.unwrap_or(settings.search.default_limit);
            commands::query(&engine, &query, limit, &mut stdout.lock())?;
        }
        Command::Inspect { top } => commands::inspect(&engine, top, &mut stdout.lock())?,
        Command::Serve { .. } => {
            let state = AppState::new(Arc::new(engine), settings.search.clone());
            let (host, port) = (settings.server.host.as_str(), settings.server.port);
            tokio::runtime::Runtime::new()?.block_on(server::serve(state, host, port))?;
        }
    }
    Ok(())
}
