use crate::enforce::enforce;
use crate::error::PipelineError;
use crate::parser::AgentBlock;
use crate::provider::ModelClient;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, Instrument};
use uuid::Uuid;

use super::agent::run_agent;
use super::prompts::{planner_user_prompt, reviewer_user_prompt, Prompts};
use super::types::{PublishPackage, Review, StageRun, Submission};
use super::Stage;

const FINALIZED_THOUGHT: &str = "Consolidated schema-checked output.";

/// Runs submissions through the two agent stages.
/// Cheap to clone; runs share nothing but the client and prompts.
#[derive(Clone)]
pub struct Pipeline {
    client: Arc<dyn ModelClient>,
    prompts: Arc<Prompts>,
}

/// Planner stage completed
#[derive(Debug, Clone)]
pub struct Planned {
    pub submission: Submission,
    pub planner: StageRun,
}

/// Reviewer stage completed
#[derive(Debug, Clone)]
pub struct Reviewed {
    pub submission: Submission,
    pub planner: StageRun,
    pub reviewer: StageRun,
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub planner: StageRun,
    pub reviewer: StageRun,
    /// Enforced draft in block form, issues taken from the Reviewer
    pub finalized: AgentBlock,
    pub package: PublishPackage,
}

impl Pipeline {
    pub fn new(client: Arc<dyn ModelClient>, prompts: Prompts) -> Self {
        Self {
            client,
            prompts: Arc::new(prompts),
        }
    }

    /// Run Planner, Reviewer and finalization for one submission
    pub async fn run(&self, submission: Submission) -> Result<PipelineReport, PipelineError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("pipeline", run_id = %run_id);

        async move {
            info!("Starting pipeline for {:?}", submission.title);
            let planned = self.plan(submission).await?;
            let reviewed = self.review(planned).await?;
            Ok::<_, PipelineError>(reviewed.finalize(run_id))
        }
        .instrument(span)
        .await
    }

    pub async fn plan(&self, submission: Submission) -> Result<Planned, PipelineError> {
        let user = planner_user_prompt(&submission);
        let planner = run_agent(self.client.as_ref(), Stage::Planner, &self.prompts.planner, &user)
            .await
            .map_err(|source| PipelineError::Stage {
                stage: Stage::Planner,
                source,
            })?;

        Ok(Planned {
            submission,
            planner,
        })
    }

    pub async fn review(&self, planned: Planned) -> Result<Reviewed, PipelineError> {
        let user = planned.reviewer_prompt()?;
        let reviewer =
            run_agent(self.client.as_ref(), Stage::Reviewer, &self.prompts.reviewer, &user)
                .await
                .map_err(|source| PipelineError::Stage {
                    stage: Stage::Reviewer,
                    source,
                })?;

        Ok(Reviewed {
            submission: planned.submission,
            planner: planned.planner,
            reviewer,
        })
    }
}

impl Planned {
    /// The Planner block serialized in wire shape, exactly as the Reviewer receives it
    pub fn planner_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(&self.planner.block.to_wire())?)
    }

    pub fn reviewer_prompt(&self) -> Result<String, PipelineError> {
        Ok(reviewer_user_prompt(&self.planner_json()?))
    }
}

impl Reviewed {
    /// Enforce the chosen draft and assemble the package.
    /// The timestamp is taken once assembly is done.
    pub fn finalize(self, run_id: Uuid) -> PipelineReport {
        let Reviewed {
            submission,
            planner,
            reviewer,
        } = self;

        let draft = if reviewer.block.has_draft() {
            &reviewer.block
        } else {
            info!("Reviewer returned no draft, enforcing Planner output");
            &planner.block
        };
        let enforced = enforce(&draft.tags, &draft.summary, &submission.title);
        let issues = reviewer.block.issues.clone();

        let message = if planner.block.message.is_empty() {
            reviewer.block.message.clone()
        } else {
            planner.block.message.clone()
        };

        let finalized = AgentBlock {
            thought: FINALIZED_THOUGHT.to_string(),
            message,
            tags: enforced.tags.clone(),
            summary: enforced.summary.clone(),
            issues: issues.clone(),
        };

        let reviews = vec![
            Review {
                role: Stage::Planner.as_str().to_string(),
                content: planner.block.message.clone(),
            },
            Review {
                role: Stage::Reviewer.as_str().to_string(),
                content: reviewer.block.message.clone(),
            },
        ];

        let Submission {
            title,
            content,
            author,
            email,
            category,
        } = submission;

        let package = PublishPackage {
            title,
            content: content.trim().to_string(),
            author,
            email,
            category,
            reviews,
            tags: enforced.tags,
            summary: enforced.summary,
            issues,
            // Last field, so the clock is read after everything else is built
            submission_date: Utc::now(),
        };

        info!(
            "Finalized package: tags {:?}, {} issues",
            package.tags,
            package.issues.len()
        );

        PipelineReport {
            run_id,
            planner,
            reviewer,
            finalized,
            package,
        }
    }
}
