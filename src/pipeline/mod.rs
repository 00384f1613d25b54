//! Planner → Reviewer → Finalize
//!
//! Each transition is a typed value: `Pipeline::plan` yields `Planned`,
//! `Pipeline::review` consumes it and yields `Reviewed`, and `Reviewed::finalize`
//! produces the `PipelineReport` carrying the publish package. The Reviewer
//! only ever sees the Planner block through its serialized wire form.

mod agent;
mod orchestrator;
mod prompts;
mod types;

pub use orchestrator::{Pipeline, PipelineReport};
pub use prompts::Prompts;
pub use types::{PublishPackage, Submission};

/// Agent stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Planner,
    Reviewer,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Planner => "planner",
            Stage::Reviewer => "reviewer",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Planner => write!(f, "Planner"),
            Stage::Reviewer => write!(f, "Reviewer"),
        }
    }
}
