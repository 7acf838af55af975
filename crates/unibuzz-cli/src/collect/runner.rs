//! Batch orchestration over all colleges of a run.
//!
//! Colleges are enriched through a bounded pool (`max_concurrent = 1` is a
//! plain sequential loop). Each task carries its input index and the report
//! is rebuilt in input order, never arrival order.

use futures::stream::{self, StreamExt};
use unibuzz_core::{BatchReport, College, EnrichmentResult};

use super::enrich::{EnrichError, Enricher};

/// Progress after one more college finished, successfully or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Progress {
    pub completed: usize,
    pub total: usize,
}

/// A college left out of the report because its enrichment failed.
#[derive(Debug)]
pub(crate) struct CollegeFailure {
    pub id: String,
    pub name: String,
    pub error: EnrichError,
}

/// Result of [`run_batch`]: the report plus the colleges it omits.
#[derive(Debug, Default)]
pub(crate) struct BatchOutcome {
    pub report: BatchReport,
    pub failures: Vec<CollegeFailure>,
}

/// Enrich every college and collect the results in input order.
///
/// A college whose enrichment returns an error is logged, left out of the
/// report, and listed in [`BatchOutcome::failures`]; the batch continues.
/// `on_progress` is called once per finished college.
pub(crate) async fn run_batch<F>(
    enricher: &Enricher,
    colleges: &[College],
    max_concurrent: usize,
    mut on_progress: F,
) -> BatchOutcome
where
    F: FnMut(Progress),
{
    let total = colleges.len();
    let mut tasks = stream::iter(colleges.iter().enumerate())
        .map(|(index, college)| async move { (index, college, enricher.enrich(college).await) })
        .buffer_unordered(max_concurrent.max(1));

    let mut results: Vec<(usize, EnrichmentResult)> = Vec::with_capacity(total);
    let mut failures: Vec<(usize, CollegeFailure)> = Vec::new();
    let mut completed = 0usize;

    while let Some((index, college, outcome)) = tasks.next().await {
        completed += 1;
        match outcome {
            Ok(result) => results.push((index, result)),
            Err(error) => {
                tracing::error!(
                    college_id = %college.id,
                    college = %college.name,
                    error = %error,
                    "unexpected error enriching college; omitting it from the report"
                );
                failures.push((
                    index,
                    CollegeFailure {
                        id: college.id.clone(),
                        name: college.name.clone(),
                        error,
                    },
                ));
            }
        }
        on_progress(Progress { completed, total });
    }

    results.sort_by_key(|(index, _)| *index);
    failures.sort_by_key(|(index, _)| *index);

    if !failures.is_empty() {
        tracing::warn!(
            failed_colleges = failures.len(),
            total_colleges = total,
            "some colleges failed during enrichment"
        );
    }

    BatchOutcome {
        report: BatchReport {
            results: results.into_iter().map(|(_, r)| r).collect(),
        },
        failures: failures.into_iter().map(|(_, f)| f).collect(),
    }
}
