mod block;
mod json;

pub use block::AgentBlock;

use json::{extract_object, Extracted};

/// Decode raw model text into an AgentBlock.
/// Never fails: text without a usable JSON object decodes to an empty block.
pub fn parse_block(raw: &str, stage: &str) -> AgentBlock {
    match extract_object(raw) {
        Extracted::Found(object) => AgentBlock::from_object(&object),
        Extracted::NotFound => {
            tracing::warn!("No JSON object found in {} output, using empty block", stage);
            AgentBlock::default()
        }
    }
}
