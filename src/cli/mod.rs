pub mod batch;
pub mod enforce;
pub mod run;
pub mod schema;

use crate::config::{default_config_path, Config};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pubcheck")]
#[command(
    author,
    version,
    about = "Planner/Reviewer content tagging pipeline with schema-enforced publish packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long, global = true, default_value_os_t = default_config_path())]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run Planner and Reviewer on one piece of content and print the package
    Run(RunArgs),

    /// Run the pipeline for every submission in a YAML/JSON file
    Batch(BatchArgs),

    /// Extract and enforce a model reply offline (no model call)
    Enforce(EnforceArgs),

    /// Print JSON Schema for config validation
    Schema,
}

/// Model connection overrides shared by commands that call the model
#[derive(Args, Clone, Debug, Default)]
pub struct ModelArgs {
    /// Model identifier
    #[arg(long, env = "PUBCHECK_MODEL")]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, env = "PUBCHECK_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_sec: Option<u64>,
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Content title
    #[arg(long)]
    pub title: String,

    /// Content body
    #[arg(long)]
    pub content: String,

    /// Author name to include in the package
    #[arg(long)]
    pub author: Option<String>,

    /// Contact email to include in the package
    #[arg(long)]
    pub email: Option<String>,

    /// Category to include in the package
    #[arg(long)]
    pub category: Option<String>,

    /// Print only the publish package as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Parser, Clone)]
pub struct BatchArgs {
    /// YAML or JSON file holding a list of submissions
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write one package file per submission here instead of printing
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Override max pipelines in flight
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Exit 1 if any submission was skipped or failed
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Parser, Clone)]
pub struct EnforceArgs {
    /// Title used for fallback tags and summary
    #[arg(long)]
    pub title: String,

    /// File holding the raw model reply (reads stdin if omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Load the config file and apply CLI overrides
pub fn load_config(path: &std::path::Path, overrides: &ModelArgs) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {:?}", path);
    let mut config = Config::load_or_default(path)?;

    if let Some(model) = &overrides.model {
        config.model = model.clone();
    }
    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout_sec) = overrides.timeout_sec {
        config.timeout_sec = timeout_sec;
    }

    config.validate()?;
    Ok(config)
}
