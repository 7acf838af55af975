//! The `unibuzz` run: load colleges, enrich each one, write the manifest.
//!
//! Per-college failures are logged and skipped rather than propagated so a
//! single bad college does not abort the full run.

mod enrich;
mod paths;
mod runner;

use anyhow::Context;
use unibuzz_core::{AppConfig, BatchReport, College};
use unibuzz_images::{Downloader, ImageSearchClient};

use crate::report;
use enrich::Enricher;
use runner::run_batch;

/// Narrow the loaded records to the requested college, if any.
pub(crate) fn select_colleges(
    colleges: Vec<College>,
    college_filter: Option<&str>,
) -> anyhow::Result<Vec<College>> {
    let Some(id) = college_filter else {
        return Ok(colleges);
    };
    let college = colleges
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| anyhow::anyhow!("college '{id}' not found in the records file"))?;
    Ok(vec![college])
}

/// Run the full enrichment batch and write `urls.json` / `urls.csv`.
///
/// When `dry_run` is `true` the function prints what would be fetched and
/// returns without any network call or file write.
///
/// # Errors
///
/// Returns an error if the records file cannot be loaded (an empty report is
/// still written, unless this is a dry run), the college filter matches
/// nothing, an HTTP client cannot be built, the report cannot be written, or
/// every college failed.
pub(crate) async fn run_collect(
    config: &AppConfig,
    college_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let colleges = match unibuzz_core::load_colleges(&config.records_path) {
        Ok(colleges) => colleges,
        Err(e) => {
            tracing::error!(
                path = %config.records_path.display(),
                error = %e,
                "failed to load college records"
            );
            if !dry_run {
                let paths = report::write_report(&config.output_dir, &BatchReport::default())?;
                println!("wrote empty report to {}", paths.json.display());
            }
            return Err(e).context("failed to load college records");
        }
    };
    let colleges = select_colleges(colleges, college_filter)?;

    if dry_run {
        let ids: Vec<&str> = colleges.iter().map(|c| c.id.as_str()).collect();
        println!(
            "dry-run: would fetch logos and images for {} colleges: [{}]",
            colleges.len(),
            ids.join(", ")
        );
        return Ok(());
    }

    let search = ImageSearchClient::with_endpoint(
        &config.bing_api_key,
        config.search_params.clone(),
        config.request_timeout_secs,
        &config.user_agent,
        &config.search_endpoint,
    )?;
    let downloader = Downloader::new(config.request_timeout_secs, &config.user_agent)?;
    let enricher = Enricher::new(search, downloader, config.output_dir.clone());

    println!(
        "fetching logos and images for {} colleges...",
        colleges.len()
    );
    let outcome = run_batch(
        &enricher,
        &colleges,
        config.max_concurrent_colleges,
        |progress| println!("processed {} of {}", progress.completed, progress.total),
    )
    .await;

    let paths = report::write_report(&config.output_dir, &outcome.report)?;
    println!(
        "saved {} results to {} and {}",
        outcome.report.len(),
        paths.json.display(),
        paths.csv.display()
    );

    for failure in &outcome.failures {
        println!(
            "failed: {} ({}): {}",
            failure.name, failure.id, failure.error
        );
    }

    if !colleges.is_empty() && outcome.failures.len() == colleges.len() {
        anyhow::bail!("all {} colleges failed enrichment", colleges.len());
    }

    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
