use crate::config::PromptsConfig;
use crate::error::ConfigError;
use std::path::Path;

use super::types::Submission;

// Embedded default prompts
const DEFAULT_PLANNER_PROMPT: &str = include_str!("../../prompts/planner.md");
const DEFAULT_REVIEWER_PROMPT: &str = include_str!("../../prompts/reviewer.md");

/// Header placed before the serialized Planner block in the Reviewer's user message
pub const REVIEWER_CONTEXT_HEADER: &str = "Here is the Planner JSON:\n";

/// System prompts for both stages
#[derive(Debug, Clone)]
pub struct Prompts {
    pub planner: String,
    pub reviewer: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            planner: DEFAULT_PLANNER_PROMPT.to_string(),
            reviewer: DEFAULT_REVIEWER_PROMPT.to_string(),
        }
    }
}

impl Prompts {
    /// Embedded prompts, replaced by any override files named in the config
    pub fn from_config(config: &PromptsConfig) -> Result<Self, ConfigError> {
        let mut prompts = Self::default();
        if let Some(path) = &config.planner {
            prompts.planner = read_prompt(path)?;
        }
        if let Some(path) = &config.reviewer {
            prompts.reviewer = read_prompt(path)?;
        }
        Ok(prompts)
    }
}

fn read_prompt(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadPrompt {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn planner_user_prompt(submission: &Submission) -> String {
    format!(
        "Title: {}\n\nContent:\n{}\n\nProduce the JSON now.",
        submission.title, submission.content
    )
}

pub fn reviewer_user_prompt(planner_json: &str) -> String {
    format!("{}{}", REVIEWER_CONTEXT_HEADER, planner_json)
}
