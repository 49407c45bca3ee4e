//! The range orchestrator: plans how many simulations each hero hand gets,
//! drives the kernel for every hand (optionally across a worker pool),
//! republishes progress, and rolls everything up into a [`JobOutcome`].

use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    time::Instant,
};

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use super::{
    error::EngineError,
    job::{Algorithm, JobOutcome, JobRequest, Optimizations, PerformanceMetrics},
    kernel::simulate_hand,
    result::EquityResult,
    telemetry::{JobStatus, Telemetry},
};
use crate::evaluate::Evaluator;

/// How many trials elapse between telemetry pushes and cancellation checks
/// within a single hero hand's kernel run.
pub const UPDATE_INTERVAL: u32 = 1000;

/// Progress callback contract: `(fraction_done, snapshot_of_per_key_equity)`.
/// Guaranteed monotonically non-decreasing `fraction_done`, with a final call
/// at `1.0` on success. Must not mutate engine state; if it panics, the panic
/// is caught, logged, and swallowed (the run continues).
pub type ProgressHook<'a> = dyn Fn(f64, &HashMap<String, f64>) + Send + Sync + 'a;

/// Run an equity job to completion.
///
/// `telemetry` is optional: when [`Telemetry::create`] failed up-stream, the
/// caller passes `None` and the job proceeds without shared-memory
/// publication — matching `TelemetryUnavailable`'s "not fatal" disposition.
pub fn run(
    request: &JobRequest,
    progress_hook: &ProgressHook<'_>,
    cancel_signal: &AtomicBool,
    telemetry: Option<&Telemetry>,
) -> Result<JobOutcome, EngineError> {
    let start = Instant::now();
    info!(
        "starting equity job: {} hero hand(s), {} opponent(s), {} simulations, algorithm={:?}",
        request.range().len(),
        request.num_opponents(),
        request.num_simulations(),
        request.algorithm()
    );

    if matches!(request.algorithm(), Algorithm::Naive) {
        // The naive evaluator is an oracle used only to cross-check the
        // lookup-table evaluator in tests; it is not wired into the hot
        // simulation path here because no caller needs Monte Carlo speed
        // out of it.
        warn!("NAIVE algorithm requested; this mode is intended for test oracles only");
    }

    let evaluator = Evaluator::new();
    let sims_per_hand = request.sims_per_hand();
    let total_hands = request.range().len();
    let use_threads = request.optimizations().contains(Optimizations::MULTITHREADING);
    let effective_workers = use_threads.then(|| {
        request.num_workers().unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
        })
    });

    // Total completed trials across the whole job, shared across worker
    // threads when running multithreaded. Workers only ever touch this
    // atomic counter; only the orchestrator thread (here, single-threaded
    // mode) publishes it to the telemetry region directly, matching the
    // "telemetry is written only by the orchestrator" resource policy. In
    // multithreaded mode sub-hand telemetry polling would need a background
    // thread to drain this counter while the parallel map is in flight;
    // that's out of scope here, so telemetry there only updates once per
    // completed hero hand (still within UPDATE_INTERVAL-driven cancellation
    // checks, which every worker observes on its own).
    let total_trials_done = AtomicU64::new(0);

    let run_one = |idx: usize, name: &str, hero: [crate::Card; 2]| -> (String, HashMap<String, EquityResult>, u32) {
        let seed = request
            .seed()
            .map(|s| s ^ idx as u64)
            .unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let (buckets, completed) = simulate_hand(
            &evaluator,
            request.algorithm(),
            hero,
            request.board(),
            request.num_opponents(),
            request.opponent_hand(),
            sims_per_hand,
            &mut rng,
            UPDATE_INTERVAL,
            |_done_this_hand| {
                let total = total_trials_done.fetch_add(u64::from(UPDATE_INTERVAL), Ordering::Relaxed)
                    + u64::from(UPDATE_INTERVAL);
                if !use_threads {
                    if let Some(t) = telemetry {
                        t.update_hands_processed(total);
                    }
                }
                !cancel_signal.load(Ordering::Relaxed)
            },
        );
        (name.to_string(), buckets, completed)
    };

    let per_hand: Vec<(String, HashMap<String, EquityResult>, u32)> = if use_threads {
        if let Some(workers) = effective_workers {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| EngineError::Internal(e.to_string()))?;
            pool.install(|| {
                request
                    .range()
                    .par_iter()
                    .enumerate()
                    .map(|(idx, (name, hero))| run_one(idx, name, *hero))
                    .collect()
            })
        } else {
            request
                .range()
                .par_iter()
                .enumerate()
                .map(|(idx, (name, hero))| run_one(idx, name, *hero))
                .collect()
        }
    } else {
        request
            .range()
            .iter()
            .enumerate()
            .map(|(idx, (name, hero))| run_one(idx, name, *hero))
            .collect()
    };

    let hands_completed = per_hand.iter().filter(|(_, _, completed)| *completed == sims_per_hand).count();

    // Merge whatever buckets each hero hand produced before looking at the
    // cancellation signal: a hand aborted mid-run by `on_checkpoint` still
    // contributes its completed trials, and SPEC_FULL.md's cancellation
    // contract promises partial results are returned alongside the error,
    // not discarded.
    let mut results: HashMap<(String, String), EquityResult> = HashMap::new();
    let mut hero_summary: HashMap<String, EquityResult> = HashMap::new();
    let mut equity_snapshot: HashMap<String, f64> = HashMap::new();

    for (idx, (hero_name, buckets, _)) in per_hand.into_iter().enumerate() {
        let mut summary = EquityResult::new(hero_name.clone());
        for (label, mut bucket) in buckets {
            bucket.hand_name = hero_name.clone();
            summary.merge(&bucket);
            results.insert((hero_name.clone(), label), bucket);
        }
        debug!("hero hand '{hero_name}' equity={:.4}", summary.equity());
        equity_snapshot.insert(hero_name.clone(), summary.equity());
        hero_summary.insert(hero_name.clone(), summary);

        if let Some(t) = telemetry {
            t.update_hands_processed(total_trials_done.load(Ordering::Relaxed));
            t.publish_results(hero_summary.iter().map(|(k, v)| (k.as_str(), v)));
        }

        let fraction = (idx + 1) as f64 / total_hands as f64;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            progress_hook(fraction, &equity_snapshot)
        }));
        if result.is_err() {
            warn!("progress callback panicked; swallowing and continuing job");
        }
    }

    let duration = start.elapsed();
    let mode = match request.algorithm() {
        Algorithm::Naive => "naive",
        Algorithm::CactusKev => "cactus_kev",
    };
    let metrics = PerformanceMetrics {
        mode: mode.to_string(),
        duration_seconds: duration.as_secs_f64(),
        simulations_per_second: f64::from(request.num_simulations()) / duration.as_secs_f64().max(f64::EPSILON),
        num_workers: effective_workers,
    };

    let outcome = JobOutcome {
        results,
        hero_summary,
        metrics,
    };

    if cancel_signal.load(Ordering::Relaxed) {
        if let Some(t) = telemetry {
            t.set_status(JobStatus::Failed);
        }
        warn!(
            "equity job aborted by cancellation signal after {hands_completed} hero hand(s); \
             returning partial results"
        );
        return Err(EngineError::SimulationAborted {
            hands_completed,
            partial: Box::new(outcome),
        });
    }

    if let Some(t) = telemetry {
        t.set_status(JobStatus::Completed);
    }
    info!(
        "equity job finished in {:.3}s ({:.0} sims/sec)",
        outcome.metrics.duration_seconds, outcome.metrics.simulations_per_second
    );

    Ok(outcome)
}
