use std::path::PathBuf;

use clap::{Parser, Subcommand};

use docsearch_core::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "docsearch", version, about = "Search a static site's prebuilt search index")]
pub struct Cli {
    /// Artifact file or built site directory (overrides `index.path`)
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one query and print ranked hits
    Query {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the index configuration, documents and most frequent terms
    Inspect {
        #[arg(long, default_value_t = 15)]
        top: usize,
    },
    /// Serve `GET /search?q=` over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Fold command-line overrides into the loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(index) = &self.index {
            settings.index.path = index.to_string_lossy().into_owned();
        }
        if let Command::Serve { host, port } = &self.command {
            if let Some(host) = host {
                settings.server.host.clone_from(host);
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_override_settings() {
        let cli = Cli::parse_from(["docsearch", "--index", "public", "serve", "--port", "9000"]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);
        assert_eq!(settings.index.path, "public");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn query_takes_positional_text() {
        let cli = Cli::parse_from(["docsearch", "query", "burgers equation", "-l", "3"]);
        match cli.command {
            Command::Query { query, limit } => {
                assert_eq!(query, "burgers equation");
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["docsearch"]).is_err());
    }
}
