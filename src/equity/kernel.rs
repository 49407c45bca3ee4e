//! The per-hero-hand simulation kernel: sample, evaluate, compare, classify,
//! accumulate. This is the hot loop; everything else in the engine exists to
//! set it up and report on it.

use std::{cmp::Ordering, collections::HashMap};

use rand::Rng;

use super::{
    job::Algorithm,
    label::label_hole_cards,
    naive,
    result::EquityResult,
    sampler::{sample_board_completion, sample_opponent_hands, Sampler},
};
use crate::{evaluate::Evaluator, Card};

/// The outcome of a single trial, from the hero's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Tie,
    Loss,
}

/// A hand strength computed by whichever [`Algorithm`] the job selected.
/// Both variants expose `category()`; comparison only ever happens between
/// two values produced by the same algorithm within a trial, so mixing
/// variants is a programmer error rather than a case this needs to handle.
#[derive(Debug, Clone, Copy)]
enum HandStrength {
    CactusKev(crate::Eval),
    Naive(naive::NaiveRank),
}

impl HandStrength {
    fn category(self) -> u8 {
        match self {
            Self::CactusKev(eval) => eval.category(),
            Self::Naive(rank) => rank.category(),
        }
    }

    /// Whether `self` beats `other`. [`crate::Eval`]'s `Ord` is deliberately
    /// inverted relative to the internal rank scale (a *better* hand
    /// compares *greater*), while [`naive::NaiveRank`]'s `Ord` is natural —
    /// both agree that "greater compares better", so the comparison here is
    /// uniform across algorithms.
    fn is_better_than(self, other: Self) -> bool {
        match (self, other) {
            (Self::CactusKev(a), Self::CactusKev(b)) => a > b,
            (Self::Naive(a), Self::Naive(b)) => a > b,
            _ => unreachable!("a single trial never mixes evaluation algorithms"),
        }
    }

    fn cmp_eq(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::CactusKev(a), Self::CactusKev(b)) => a.cmp(&b),
            (Self::Naive(a), Self::Naive(b)) => a.cmp(&b),
            _ => unreachable!("a single trial never mixes evaluation algorithms"),
        }
    }
}

fn evaluate(evaluator: &Evaluator, algorithm: Algorithm, cards: &[Card]) -> Option<HandStrength> {
    match algorithm {
        Algorithm::CactusKev => evaluator.evaluate(cards).ok().map(HandStrength::CactusKev),
        Algorithm::Naive => Some(HandStrength::Naive(naive::evaluate_best(cards))),
    }
}

/// Run `trials` Monte Carlo trials for one hero hand and return one
/// [`EquityResult`] per opponent starting-hand label encountered, along with
/// the number of trials actually completed (less than `trials` only if
/// `on_checkpoint` signalled an abort).
///
/// Trials where the remaining deck can't satisfy the board completion plus
/// every opponent's hole cards (pathological with many opponents on a
/// near-complete board) are abandoned and reported as a neutral outcome: a
/// tie is recorded with no category update, so `total_simulations` still
/// reaches `trials` exactly.
///
/// `on_checkpoint` is invoked every `checkpoint_interval` completed trials
/// with the running completed-trial count; returning `false` aborts the
/// remaining trials for this hand early (used to observe a cancellation
/// signal without checking it on every single trial).
///
/// `fixed_opponent`, when set, pins the single opponent's hole cards to an
/// exact pair instead of drawing them from the deck each trial — only the
/// board is still sampled at random. Requires `num_opponents == 1`;
/// validated by [`super::job::JobRequest::new`] before this is ever called.
#[allow(clippy::too_many_arguments)]
pub fn simulate_hand<R: Rng + ?Sized>(
    evaluator: &Evaluator,
    algorithm: Algorithm,
    hero: [Card; 2],
    known_board: &[Card],
    num_opponents: u8,
    fixed_opponent: Option<[Card; 2]>,
    trials: u32,
    rng: &mut R,
    checkpoint_interval: u32,
    mut on_checkpoint: impl FnMut(u32) -> bool,
) -> (HashMap<String, EquityResult>, u32) {
    let mut buckets: HashMap<String, EquityResult> = HashMap::new();
    let known: Vec<Card> = hero
        .iter()
        .copied()
        .chain(known_board.iter().copied())
        .chain(fixed_opponent.into_iter().flatten())
        .collect();
    let mut completed = 0u32;

    for _ in 0..trials {
        let Some(mut sampler) = Sampler::new(&known) else {
            // Duplicate cards should have been rejected by JobRequest::new;
            // if we get here regardless, treat the trial as neutral rather
            // than panicking mid-simulation.
            record_neutral(&mut buckets);
            continue;
        };

        let Some(board) = sample_board_completion(&mut sampler, known_board, rng) else {
            record_neutral(&mut buckets);
            continue;
        };
        let Some(opponents) = (match fixed_opponent {
            Some(hole) => Some(vec![hole]),
            None => sample_opponent_hands(&mut sampler, num_opponents as usize, rng),
        }) else {
            record_neutral(&mut buckets);
            continue;
        };

        let mut hero_cards = board.clone();
        hero_cards.extend(hero);
        let Some(hero_eval) = evaluate(evaluator, algorithm, &hero_cards) else {
            record_neutral(&mut buckets);
            continue;
        };

        let mut best_opp_eval = None;
        let mut best_opp_hole = opponents[0];
        for &hole in &opponents {
            let mut opp_cards = board.clone();
            opp_cards.extend(hole);
            let Some(opp_eval) = evaluate(evaluator, algorithm, &opp_cards) else {
                continue;
            };
            match best_opp_eval {
                None => {
                    best_opp_eval = Some(opp_eval);
                    best_opp_hole = hole;
                }
                Some(current_best) if opp_eval.is_better_than(current_best) => {
                    best_opp_eval = Some(opp_eval);
                    best_opp_hole = hole;
                }
                _ => {}
            }
        }
        let Some(opp_eval) = best_opp_eval else {
            record_neutral(&mut buckets);
            continue;
        };

        let outcome = match hero_eval.cmp_eq(opp_eval) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::Loss,
        };

        let hero_cat = hero_eval.category() as usize;
        let opp_cat = opp_eval.category() as usize;
        let label = label_hole_cards(best_opp_hole[0], best_opp_hole[1]);
        let bucket = buckets
            .entry(label)
            .or_insert_with(|| EquityResult::new(String::new()));
        bucket.total_simulations += 1;
        match outcome {
            Outcome::Win => {
                bucket.wins += 1;
                bucket.win_method_matrix[hero_cat][opp_cat] += 1;
            }
            Outcome::Tie => bucket.ties += 1,
            Outcome::Loss => {
                bucket.losses += 1;
                bucket.loss_method_matrix[opp_cat][hero_cat] += 1;
            }
        }

        completed += 1;
        if completed % checkpoint_interval == 0 && !on_checkpoint(completed) {
            return (buckets, completed);
        }
    }

    (buckets, completed)
}

/// An abandoned trial is recorded as a tie with no category update, so the
/// bucket's total still advances even though nothing could be resolved.
fn record_neutral(buckets: &mut HashMap<String, EquityResult>) {
    let bucket = buckets
        .entry("??".to_string())
        .or_insert_with(|| EquityResult::new(String::new()));
    bucket.total_simulations += 1;
    bucket.ties += 1;
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;
    use crate::cards;

    #[test]
    fn pocket_aces_vs_random_is_roughly_85_percent() {
        let evaluator = Evaluator::new();
        let hero: Vec<Card> = cards!("As Ah").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let (buckets, completed) = simulate_hand(
            &evaluator,
            Algorithm::CactusKev,
            [hero[0], hero[1]],
            &[],
            1,
            None,
            50_000,
            &mut rng,
            1_000,
            |_| true,
        );
        assert_eq!(completed, 50_000);
        let mut total = EquityResult::new("AA");
        for bucket in buckets.values() {
            total.merge(bucket);
        }
        assert_eq!(total.total_simulations, 50_000);
        let equity = total.equity();
        assert!(
            (0.80..=0.90).contains(&equity),
            "expected pocket aces equity near 0.8517, got {equity}"
        );
    }

    #[test]
    fn royal_flush_board_dominates() {
        let evaluator = Evaluator::new();
        let hero: Vec<Card> = cards!("As Ks").try_collect().unwrap();
        let board: Vec<Card> = cards!("Qs Js Ts").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let (buckets, _) = simulate_hand(
            &evaluator,
            Algorithm::CactusKev,
            [hero[0], hero[1]],
            &board,
            1,
            None,
            2_000,
            &mut rng,
            1_000,
            |_| true,
        );
        let mut total = EquityResult::new("AKs");
        for bucket in buckets.values() {
            total.merge(bucket);
        }
        assert!(total.equity() >= 0.999);
    }

    #[test]
    fn chop_board_always_ties() {
        let evaluator = Evaluator::new();
        let hero: Vec<Card> = cards!("2s 3s").try_collect().unwrap();
        let board: Vec<Card> = cards!("As Ks Qs Js Ts").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let (buckets, _) = simulate_hand(
            &evaluator,
            Algorithm::CactusKev,
            [hero[0], hero[1]],
            &board,
            1,
            None,
            500,
            &mut rng,
            1_000,
            |_| true,
        );
        let mut total = EquityResult::new("23s");
        for bucket in buckets.values() {
            total.merge(bucket);
        }
        assert_eq!(total.equity(), 0.5);
        assert_eq!(total.wins, 0);
        assert_eq!(total.losses, 0);
        assert_eq!(total.ties, 500);
    }

    #[test]
    fn category_matrix_sums_to_trial_count() {
        let evaluator = Evaluator::new();
        let hero: Vec<Card> = cards!("As Ah").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let (buckets, _) = simulate_hand(
            &evaluator,
            Algorithm::CactusKev,
            [hero[0], hero[1]],
            &[],
            1,
            None,
            10_000,
            &mut rng,
            1_000,
            |_| true,
        );
        let mut total = EquityResult::new("AA");
        for bucket in buckets.values() {
            total.merge(bucket);
        }
        let matrix_sum: u32 = total.win_method_matrix.iter().flatten().sum();
        assert_eq!(matrix_sum + total.ties + total.losses, 10_000);
    }

    #[test]
    fn checkpoint_returning_false_stops_trials_early() {
        let evaluator = Evaluator::new();
        let hero: Vec<Card> = cards!("As Ah").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let mut checkpoints = 0;
        let (_, completed) = simulate_hand(
            &evaluator,
            Algorithm::CactusKev,
            [hero[0], hero[1]],
            &[],
            1,
            None,
            10_000,
            &mut rng,
            500,
            |_| {
                checkpoints += 1;
                checkpoints < 3
            },
        );
        assert_eq!(completed, 1_500);
    }

    #[test]
    fn naive_algorithm_agrees_roughly_with_cactus_kev_equity() {
        let evaluator = Evaluator::new();
        let hero: Vec<Card> = cards!("As Ah").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let (buckets, _) = simulate_hand(
            &evaluator,
            Algorithm::Naive,
            [hero[0], hero[1]],
            &[],
            1,
            None,
            5_000,
            &mut rng,
            1_000,
            |_| true,
        );
        let mut total = EquityResult::new("AA");
        for bucket in buckets.values() {
            total.merge(bucket);
        }
        let equity = total.equity();
        assert!(
            (0.75..=0.95).contains(&equity),
            "expected pocket aces equity near 0.8517 under the naive oracle too, got {equity}"
        );
    }

    #[test]
    fn fixed_opponent_reproduces_heads_up_coin_flip_benchmark() {
        let evaluator = Evaluator::new();
        let ak: Vec<Card> = cards!("As Kh").try_collect().unwrap();
        let qq: Vec<Card> = cards!("Qs Qh").try_collect().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        let (buckets, completed) = simulate_hand(
            &evaluator,
            Algorithm::CactusKev,
            [ak[0], ak[1]],
            &[],
            1,
            Some([qq[0], qq[1]]),
            100_000,
            &mut rng,
            1_000,
            |_| true,
        );
        assert_eq!(completed, 100_000);
        let mut total = EquityResult::new("AKo");
        for bucket in buckets.values() {
            total.merge(bucket);
        }
        assert_eq!(total.total_simulations, 100_000);
        // Benchmark AKo vs QQ heads-up equity is ~43.3% / 56.2% / 0.5%; allow
        // a little slack above the spec's 0.5% target to absorb PRNG noise
        // at this sample size.
        let equity = total.equity();
        assert!(
            (0.423..=0.443).contains(&equity),
            "expected AKo equity near 0.433 against a fixed QQ opponent, got {equity}"
        );
    }
}
