//! The error type surfaced by the equity engine, layered above the
//! lower-level [`EvalError`](crate::EvalError) produced while scoring
//! individual hands.

use thiserror::Error;

use super::job::JobOutcome;

/// Everything that can go wrong while planning or running an equity job.
///
/// Unlike [`ParseCardError`](crate::ParseCardError) and
/// [`EvalError`](crate::EvalError), which are hand-rolled to match the rest
/// of this crate's card/evaluation layer, this type is `thiserror`-derived:
/// it sits above those two and mostly exists to wrap them with job-level
/// context.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The job request failed validation before any simulation work started:
    /// duplicate cards, an out-of-range field, or an empty hero range.
    #[error("invalid job request: {0}")]
    InvalidInput(String),

    /// The caller's cancellation signal was observed mid-job. Whatever
    /// results had already been merged are still valid and are carried in
    /// `partial`.
    #[error("simulation aborted by cancellation signal after {hands_completed} hero hand(s)")]
    SimulationAborted {
        /// How many hero hands had fully completed before cancellation.
        hands_completed: usize,
        /// Results merged from every hero hand that had produced at least
        /// partial trial data before the signal was observed. Hero hands cut
        /// off mid-run still contribute whatever trials they completed.
        /// Boxed so this variant doesn't blow up `size_of::<EngineError>()`
        /// for every other variant's callers.
        partial: Box<JobOutcome>,
    },

    /// The shared-memory telemetry region could not be created. Not fatal —
    /// logged at `warn` and the simulation proceeds without telemetry.
    #[error("telemetry shared memory unavailable: {0}")]
    TelemetryUnavailable(String),

    /// An internal invariant was violated, e.g. a lookup-table miss or deck
    /// exhaustion under otherwise-legal inputs. Always a bug.
    #[error("internal engine error: {0}")]
    Internal(String),

    /// A hand evaluation failed while scoring a trial.
    #[error(transparent)]
    Eval(#[from] crate::EvalError),
}
