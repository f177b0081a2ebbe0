use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::BenchmarkConfig;
use crate::error::AppResult;
use crate::metrics::{BenchmarkResult, RoundCounter, RoundResult, StatusLabel};

use super::executor::{RequestPlan, execute};
use super::transport::{Transport, build_transport};

/// Builds the transport, runs every round, and releases the transport.
///
/// # Errors
///
/// Returns an error only when the transport cannot be built; individual
/// request failures are part of the result.
pub async fn run_benchmark(config: &BenchmarkConfig) -> AppResult<BenchmarkResult> {
    let transport = build_transport(config)?;
    let result = run_rounds(&transport, config).await;
    drop(transport);
    debug!("Released shared transport");
    Ok(result)
}

/// Runs `count` strictly sequential rounds of `concurrency` parallel
/// requests on an existing transport.
pub async fn run_rounds(transport: &Transport, config: &BenchmarkConfig) -> BenchmarkResult {
    let plan = Arc::new(RequestPlan::from_config(config));
    let rounds = config.count.get();
    let concurrency = config.concurrency.get();
    let mut result = BenchmarkResult::with_capacity(rounds);

    for round in 0..rounds {
        let finished = run_round(transport, &plan, concurrency).await;
        info!(round = round.saturating_add(1), counts = %finished, "Round finished");
        result.push(finished);

        let is_last = round.saturating_add(1) == rounds;
        if !is_last && !config.gap_time.is_zero() {
            sleep(config.gap_time).await;
        }
    }

    result
}

async fn run_round(
    transport: &Transport,
    plan: &Arc<RequestPlan>,
    concurrency: usize,
) -> RoundResult {
    let counter = Arc::new(RoundCounter::new());
    let mut tasks = JoinSet::new();

    for _ in 0..concurrency {
        let transport = transport.clone();
        let plan = Arc::clone(plan);
        let counter = Arc::clone(&counter);
        tasks.spawn(async move {
            let label = execute(&transport, &plan).await;
            counter.record(label);
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            // The task never reached `record`, so count it here.
            warn!("Request task did not complete: {}", err);
            counter.record(StatusLabel::FAILED);
        }
    }

    counter.snapshot()
}
