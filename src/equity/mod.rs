//! A Monte Carlo equity simulation engine for Texas Hold'em.
//!
//! Given a named range of hero starting hands, an optional partial board,
//! an opponent count, and a simulation budget, [`run`] estimates each hero
//! hand's win/tie/loss probability, broken down by the opponent's starting
//! hand category and by the showdown hand-category pairing — while
//! optionally publishing live progress to a separate reader process through
//! a lock-free shared-memory channel (see [`telemetry`]).
//!
//! This module sits on top of the card-encoding and evaluator machinery in
//! [`crate::evaluate`]; it owns the Monte Carlo sampling, the per-hero-hand
//! kernel, and the orchestration and telemetry around them.

pub mod error;
pub mod job;
pub mod kernel;
pub mod label;
pub mod naive;
pub mod orchestrator;
pub mod result;
pub mod sampler;
pub mod telemetry;

use std::sync::atomic::AtomicBool;

pub use error::EngineError;
pub use job::{Algorithm, HeroRange, JobOutcome, JobRequest, Optimizations, PerformanceMetrics};
pub use label::label_hole_cards;
pub use naive::NaiveRank;
pub use orchestrator::ProgressHook;
pub use result::{CategoryMatrix, EquityResult};
pub use telemetry::{read_progress, JobStatus, ProgressSnapshot, Telemetry};

/// Run an equity job to completion.
///
/// `telemetry` is optional: pass `None` to skip shared-memory publication
/// entirely, or a region created with [`Telemetry::create`] (the caller
/// decides how to handle that creation failing — see
/// [`EngineError::TelemetryUnavailable`]).
///
/// # Example
///
/// ```
/// use std::sync::atomic::AtomicBool;
///
/// use holdem_equity::{
///     cards,
///     equity::{Algorithm, JobRequest, Optimizations},
/// };
///
/// let hole_cards: Vec<holdem_equity::Card> = cards!("As Ah").try_collect().unwrap();
/// let aces: [holdem_equity::Card; 2] = hole_cards.try_into().unwrap();
/// let range = vec![("AA".to_string(), aces)];
/// let request = JobRequest::new(
///     range,
///     vec![],
///     1,
///     1_000,
///     Algorithm::CactusKev,
///     Optimizations::none(),
///     None,
///     Some(7),
///     None,
/// )
/// .expect("valid job request");
///
/// let cancel = AtomicBool::new(false);
/// let outcome = holdem_equity::equity::run(&request, &|_frac, _snapshot| {}, &cancel, None)
///     .expect("job should succeed");
/// assert_eq!(outcome.hero_summary["AA"].total_simulations, 1_000);
/// ```
pub fn run(
    request: &JobRequest,
    progress_hook: &ProgressHook<'_>,
    cancel_signal: &AtomicBool,
    telemetry: Option<&Telemetry>,
) -> Result<JobOutcome, EngineError> {
    orchestrator::run(request, progress_hook, cancel_signal, telemetry)
}

/// Classify a numeric evaluation rank into the 0..9 hand-category scale
/// (9 = royal flush, 0 = high card). Thin convenience wrapper so callers
/// outside `crate::evaluate` don't need to reach into its internals.
pub fn category_of(eval: crate::Eval) -> u8 { eval.category() }
