//! Landing CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the landing page server

mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landing")]
#[command(about = "Landing page server", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the landing page server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["landing", "serve", "--port", "8080"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn test_rejects_unknown_environment() {
        let result = Cli::try_parse_from(["landing", "serve", "--environment", "staging"]);
        assert!(result.is_err());
    }
}
