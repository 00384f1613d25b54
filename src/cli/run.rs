use crate::cli::{load_config, RunArgs};
use crate::output::render_report;
use crate::pipeline::{Pipeline, Prompts, Submission};
use crate::provider::create_client;
use std::path::Path;
use tracing::info;

pub async fn execute(args: RunArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path, &args.model)?;

    let submission = Submission {
        title: args.title,
        content: args.content,
        author: args.author,
        email: args.email,
        category: args.category,
    };
    submission.validate(config.min_content_chars)?;

    let prompts = Prompts::from_config(&config.prompts)?;
    let client = create_client(&config)?;
    info!("Using model {} at {}", config.model, config.base_url);

    let report = Pipeline::new(client, prompts).run(submission).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.package)?);
    } else {
        print!("{}", render_report(&report)?);
    }

    Ok(())
}
