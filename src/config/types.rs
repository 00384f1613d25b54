use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout enforced by the model client
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    /// Ask the provider to constrain output to JSON
    #[serde(default = "default_true")]
    pub json_format: bool,

    #[serde(default)]
    pub temperature: Option<f32>,

    /// Max pipelines in flight during `batch`
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Content must be longer than this many characters (after trimming)
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,

    #[serde(default)]
    pub prompts: PromptsConfig,
}

/// Optional system prompt overrides (markdown files)
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct PromptsConfig {
    #[serde(default)]
    pub planner: Option<PathBuf>,

    #[serde(default)]
    pub reviewer: Option<PathBuf>,
}
