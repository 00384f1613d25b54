use crate::error::ProviderError;
use crate::parser::parse_block;
use crate::provider::ModelClient;
use std::time::Instant;
use tracing::{debug, info};

use super::types::StageRun;
use super::Stage;

/// Make exactly one model call and decode its reply into a block.
///
/// Only transport failures surface as errors; unparseable text yields an
/// empty block. Elapsed time covers the model call alone.
pub async fn run_agent(
    client: &dyn ModelClient,
    stage: Stage,
    system: &str,
    user: &str,
) -> Result<StageRun, ProviderError> {
    let start = Instant::now();
    let raw = client.generate(system, user).await?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    info!("{} responded via {} in {} ms", stage, client.name(), elapsed_ms);
    debug!(
        "{} raw output: {}",
        stage,
        raw.chars().take(500).collect::<String>()
    );

    Ok(StageRun {
        block: parse_block(&raw, stage.as_str()),
        elapsed_ms,
    })
}
