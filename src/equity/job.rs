//! Job request and configuration surface for an equity run.

use std::collections::{HashMap, HashSet};

use crate::{ext::AllUnique, Card};

use super::error::EngineError;

/// An ordered mapping from hand-name (≤7 bytes, opaque to the engine) to
/// exactly two hole cards.
pub type HeroRange = Vec<(String, [Card; 2])>;

/// Which evaluator strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Brute-force evaluator with no lookup tables; slow, used as an oracle
    /// to cross-check [`Algorithm::CactusKev`] in tests.
    Naive,
    /// The lookup-table evaluator described by this crate's `evaluate`
    /// module.
    #[default]
    CactusKev,
}

/// Implementation-level optimization hints. Only [`Optimizations::MULTITHREADING`]
/// has an observable effect on how the job runs; the rest are accepted and
/// ignored, matching the requirement that they must never change results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Optimizations(u8);

impl Optimizations {
    /// Enable the worker pool; `num_workers` on [`JobRequest`] controls size.
    pub const MULTITHREADING: Self = Self(1 << 0);
    /// Reserved: batched evaluation of multiple 5-card subsets.
    pub const SIMD: Self = Self(1 << 1);
    /// Reserved: perfect-hashing the lookup tables into dense arrays.
    pub const PERFECT_HASH: Self = Self(1 << 2);
    /// Reserved: prefetching hints around lookup-table access.
    pub const PREFETCHING: Self = Self(1 << 3);

    /// No optimizations requested.
    pub const fn none() -> Self { Self(0) }

    /// Combine two optimization flag sets.
    pub const fn union(self, other: Self) -> Self { Self(self.0 | other.0) }

    /// Whether `flag` is set.
    pub const fn contains(self, flag: Self) -> bool { self.0 & flag.0 == flag.0 }
}

/// A fully-validated request for an equity job.
///
/// Construction goes through [`JobRequest::new`], which performs the
/// bit-exact validation this engine requires rather than panicking on a bad
/// field, mirroring how the original job model raised a `ValueError` out of
/// its constructor.
#[derive(Debug, Clone)]
pub struct JobRequest {
    range: HeroRange,
    board: Vec<Card>,
    num_opponents: u8,
    num_simulations: u32,
    algorithm: Algorithm,
    optimizations: Optimizations,
    num_workers: Option<usize>,
    seed: Option<u64>,
    opponent_hand: Option<[Card; 2]>,
}

impl JobRequest {
    /// Validate and construct a job request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the hero range is empty, the
    /// board length is not one of 0/3/4/5, `num_opponents` is outside
    /// `1..=9`, `num_simulations` is outside `1000..=10_000_000`, any card
    /// (across the hero range, the board, and `opponent_hand`) is
    /// duplicated, or `opponent_hand` is given while `num_opponents != 1`.
    ///
    /// `opponent_hand`, when set, pins the single opponent's hole cards to an
    /// exact pair instead of drawing them at random each trial — disabling
    /// opponent randomness for a direct hero-vs-hero comparison (the board is
    /// still sampled at random). Only meaningful alongside `num_opponents ==
    /// 1`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        range: HeroRange,
        board: Vec<Card>,
        num_opponents: u8,
        num_simulations: u32,
        algorithm: Algorithm,
        optimizations: Optimizations,
        num_workers: Option<usize>,
        seed: Option<u64>,
        opponent_hand: Option<[Card; 2]>,
    ) -> Result<Self, EngineError> {
        if range.is_empty() {
            return Err(EngineError::InvalidInput(
                "hero range must contain at least one hand".into(),
            ));
        }
        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            return Err(EngineError::InvalidInput(format!(
                "board length must be 0, 3, 4, or 5; got {}",
                board.len()
            )));
        }
        if !(1..=9).contains(&num_opponents) {
            return Err(EngineError::InvalidInput(format!(
                "num_opponents must be 1-9, got {num_opponents}"
            )));
        }
        if !(1_000..=10_000_000).contains(&num_simulations) {
            return Err(EngineError::InvalidInput(format!(
                "num_simulations must be 1000-10000000, got {num_simulations}"
            )));
        }
        if opponent_hand.is_some() && num_opponents != 1 {
            return Err(EngineError::InvalidInput(format!(
                "opponent_hand requires num_opponents == 1, got {num_opponents}"
            )));
        }
        if let Some(hole) = opponent_hand {
            if !hole.iter().copied().all_unique() {
                return Err(EngineError::InvalidInput(
                    "opponent_hand has duplicate hole cards".into(),
                ));
            }
            if hole.iter().any(|c| board.contains(c)) {
                return Err(EngineError::InvalidInput(
                    "opponent_hand shares a card with the known board".into(),
                ));
            }
        }

        if !board.iter().copied().all_unique() {
            return Err(EngineError::InvalidInput(
                "duplicate card on board".into(),
            ));
        }
        let board_cards: HashSet<Card> = board.iter().copied().collect();
        for (name, hole) in &range {
            if name.len() > 7 {
                return Err(EngineError::InvalidInput(format!(
                    "hand name '{name}' exceeds 7 bytes"
                )));
            }
            if !hole.iter().copied().all_unique() {
                return Err(EngineError::InvalidInput(format!(
                    "hero hand '{name}' has duplicate hole cards"
                )));
            }
            // Hero hands are independent what-if scenarios and may share hole
            // cards with each other, but never with the known board.
            if hole.iter().any(|c| board_cards.contains(c)) {
                return Err(EngineError::InvalidInput(format!(
                    "hero hand '{name}' shares a card with the known board"
                )));
            }
            if let Some(opp) = opponent_hand {
                if hole.iter().any(|c| opp.contains(c)) {
                    return Err(EngineError::InvalidInput(format!(
                        "hero hand '{name}' shares a card with opponent_hand"
                    )));
                }
            }
        }

        Ok(Self {
            range,
            board,
            num_opponents,
            num_simulations,
            algorithm,
            optimizations,
            num_workers,
            seed,
            opponent_hand,
        })
    }

    /// The hero range.
    pub fn range(&self) -> &HeroRange { &self.range }

    /// The known, possibly-partial community board.
    pub fn board(&self) -> &[Card] { &self.board }

    /// Number of simulated opponents per trial.
    pub fn num_opponents(&self) -> u8 { self.num_opponents }

    /// Total simulation budget across the whole hero range.
    pub fn num_simulations(&self) -> u32 { self.num_simulations }

    /// Which evaluator strategy to run.
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Requested implementation hints.
    pub fn optimizations(&self) -> Optimizations { self.optimizations }

    /// Worker count override; `None` defers to the platform default.
    pub fn num_workers(&self) -> Option<usize> { self.num_workers }

    /// Deterministic seed, if reproducibility was requested.
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// A pinned opponent hole-card pair, disabling opponent-hand sampling for
    /// a direct hero-vs-hero comparison. Only set alongside `num_opponents ==
    /// 1`.
    pub fn opponent_hand(&self) -> Option<[Card; 2]> { self.opponent_hand }

    /// Simulations allotted per hero hand: `floor(total / |range|)`.
    /// Any remainder is discarded rather than redistributed, since the
    /// per-hand trial count only needs to be close to even, not exact.
    pub fn sims_per_hand(&self) -> u32 { self.num_simulations / self.range.len() as u32 }
}

/// Wall-clock timing and throughput figures captured per job. Kept separate
/// from [`crate::equity::result::EquityResult`]: it's an operational
/// artifact, not an equity statistic.
#[derive(Debug, Clone)]
pub struct PerformanceMetrics {
    /// The algorithm/mode the job ran under, e.g. `"cactus_kev"`.
    pub mode: String,
    /// Total wall-clock duration of the job.
    pub duration_seconds: f64,
    /// Throughput, simulations per second across the whole job.
    pub simulations_per_second: f64,
    /// Worker count actually used.
    pub num_workers: Option<usize>,
}

/// The combined return value of [`crate::equity::run`]: equity results keyed
/// by `(hero_name, opponent_label)`, a per-hero-hand summary, and
/// performance metrics for the job as a whole.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// Equity results keyed by `(hero_name, opponent_label)`. See the design
    /// note on result-bucket keying: this is strictly more informative than
    /// keying by `opponent_label` alone, since different hero hands never
    /// collide.
    pub results: HashMap<(String, String), super::result::EquityResult>,
    /// Totals rolled up across each hero hand's opponent-label buckets,
    /// keyed by hero name alone — the older, coarser output shape.
    pub hero_summary: HashMap<String, super::result::EquityResult>,
    /// Timing and throughput for the job.
    pub metrics: PerformanceMetrics,
}
