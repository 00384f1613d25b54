use crate::cli::EnforceArgs;
use crate::enforce::enforce;
use crate::parser::parse_block;
use anyhow::Context;
use std::io::Read;

pub fn execute(args: EnforceArgs) -> anyhow::Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model reply from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read model reply from stdin")?;
            buf
        }
    };

    let block = parse_block(&raw, "input");
    let enforced = enforce(&block.tags, &block.summary, &args.title);

    println!("{}", serde_json::to_string_pretty(&enforced)?);
    Ok(())
}
