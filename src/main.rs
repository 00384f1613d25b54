use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod enforce;
mod error;
mod output;
mod parser;
mod pipeline;
mod provider;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("pubcheck=debug")
    } else {
        EnvFilter::new("pubcheck=warn")
    };

    // stdout carries packages and JSON, so logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => cli::run::execute(args, &cli.config).await,
        Commands::Batch(args) => cli::batch::execute(args, &cli.config).await,
        Commands::Enforce(args) => cli::enforce::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
