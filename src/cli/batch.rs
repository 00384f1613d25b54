use crate::cli::{load_config, BatchArgs};
use crate::error::BatchError;
use crate::output::write_package;
use crate::pipeline::{Pipeline, PipelineReport, Prompts, PublishPackage, Submission};
use crate::provider::create_client;
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// Outcome counts for a batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchTotals {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Parse a YAML or JSON list of submissions
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>, BatchError> {
    let content = std::fs::read_to_string(path).map_err(|e| BatchError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    // JSON is valid YAML, so one parser covers both
    Ok(serde_yaml::from_str(&content)?)
}

pub async fn execute(args: BatchArgs, config_path: &Path) -> anyhow::Result<()> {
    let mut config = load_config(config_path, &args.model)?;
    if let Some(concurrency) = args.concurrency {
        anyhow::ensure!(concurrency > 0, "--concurrency must be greater than 0");
        config.concurrency = concurrency;
    }

    let submissions = load_submissions(&args.file)?;
    info!("Loaded {} submissions from {:?}", submissions.len(), args.file);

    let prompts = Prompts::from_config(&config.prompts)?;
    let pipeline = Pipeline::new(create_client(&config)?, prompts);

    let (packages, totals) = run_batch(
        &pipeline,
        submissions,
        config.concurrency,
        config.min_content_chars,
    )
    .await?;

    match &args.out_dir {
        Some(out_dir) => {
            for (index, package) in &packages {
                let path = write_package(out_dir, *index, package)?;
                info!("Wrote {:?}", path);
            }
        }
        None => {
            let list: Vec<&PublishPackage> = packages.iter().map(|(_, p)| p).collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
    }

    eprintln!(
        "Successful submissions: {} ({} skipped, {} failed)",
        totals.succeeded, totals.skipped, totals.failed
    );

    if args.strict && (totals.skipped > 0 || totals.failed > 0) {
        error!(
            "Exiting with error: {} skipped, {} failed",
            totals.skipped, totals.failed
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Run every valid submission through its own pipeline, at most `concurrency`
/// at a time. Packages come back paired with their input index, in input order.
pub async fn run_batch(
    pipeline: &Pipeline,
    submissions: Vec<Submission>,
    concurrency: usize,
    min_content_chars: usize,
) -> Result<(Vec<(usize, PublishPackage)>, BatchTotals), BatchError> {
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut totals = BatchTotals::default();
    let mut futures = FuturesUnordered::new();

    for (index, submission) in submissions.into_iter().enumerate() {
        if let Err(e) = submission.validate(min_content_chars) {
            warn!("Skipping submission #{} ({:?}): {}", index + 1, submission.title, e);
            totals.skipped += 1;
            continue;
        }

        let permit = semaphore.clone().acquire_owned().await?;
        let pipeline = pipeline.clone();

        futures.push(tokio::spawn(async move {
            let _permit = permit;
            (index, pipeline.run(submission).await)
        }));
    }

    let mut packages = Vec::new();
    while let Some(result) = futures.next().await {
        match result {
            Ok((index, Ok(PipelineReport { run_id, package, .. }))) => {
                totals.succeeded += 1;
                info!("Submission #{} done (run {})", index + 1, run_id);
                info!("Successful submissions: {}", totals.succeeded);
                packages.push((index, package));
            }
            Ok((index, Err(e))) => {
                warn!("Submission #{} failed: {}", index + 1, e);
                totals.failed += 1;
            }
            Err(e) => {
                warn!("Task panicked: {}", e);
                totals.failed += 1;
            }
        }
    }

    packages.sort_by_key(|(index, _)| *index);
    Ok((packages, totals))
}
