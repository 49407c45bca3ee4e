//! A brute-force hand evaluator used only as a test oracle to cross-check
//! [`crate::evaluate::Evaluator`]'s lookup-table results. It never consults
//! the lookup tables: flushes and straights are found by direct rank-bit
//! inspection, multiples by counting, and a hand's exact strength by
//! grouping cards into pair/triple subsets via
//! [`crate::evaluate::utils::combinations_generator`]. Deliberately slow;
//! [`super::job::Algorithm::Naive`] selects it in place of the fast
//! evaluator, never on a latency-sensitive path.

use crate::{card::Suit, evaluate::utils::combinations_generator, Card};

/// A naively-computed hand strength: `category` is the same 0..9 scale as
/// [`crate::evaluate::hand_rank::PokerHandRank::category`] (9 = royal
/// flush), and `tiebreak` breaks ties within a category by listing ranks in
/// order of significance (e.g. trips-then-kickers for three of a kind).
/// `Ord` is natural here — a *greater* `NaiveRank` is a *better* hand —
/// unlike [`crate::Eval`]'s deliberately inverted `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaiveRank {
    category: u8,
    tiebreak: [u8; 5],
}

impl NaiveRank {
    /// The 0..9 hand category this rank falls into.
    pub const fn category(self) -> u8 { self.category }
}

/// Classify the best 5-card hand obtainable from `cards` (5..=7 of them) by
/// enumerating every 5-card subset and keeping the strongest.
pub fn evaluate_best(cards: &[Card]) -> NaiveRank {
    combinations_generator(cards.iter().copied(), 5)
        .map(|five| classify5(&five))
        .max()
        .expect("at least one 5-card subset exists for 5..=7 input cards")
}

/// Classify a single five-card hand.
fn classify5(cards: &[Card]) -> NaiveRank {
    debug_assert_eq!(cards.len(), 5);

    let ranks: Vec<u8> = cards.iter().map(|c| c.rank() as u8 + 2).collect();
    let suits: Vec<Suit> = cards.iter().map(|c| c.suit()).collect();
    let is_flush = suits.iter().all(|&s| s == suits[0]);
    let straight_high = straight_high(&ranks);

    // Count how many same-rank pairs/triples appear among the five cards
    // (a quad contains 6 same-rank pairs and 4 same-rank triples, a full
    // house 3 pairs + 1 triple + 1 ... and so on) -- this is the "multiples
    // by counting" the pair/triple groupings from `combinations_generator`.
    let pair_matches = combinations_generator(cards.iter().copied(), 2)
        .filter(|pair| pair[0].rank() == pair[1].rank())
        .count();
    let triple_matches = combinations_generator(cards.iter().copied(), 3)
        .filter(|triple| triple[0].rank() == triple[1].rank() && triple[1].rank() == triple[2].rank())
        .count();

    let mut histogram = [0u8; 13];
    for &r in &ranks {
        histogram[(r - 2) as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = histogram
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(rank, &count)| (count, rank as u8 + 2))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let is_straight = straight_high.is_some();

    let category = if is_straight && is_flush {
        if straight_high == Some(14) { 9 } else { 8 }
    } else if triple_matches == 4 {
        7 // four of a kind
    } else if groups[0].0 == 3 && groups.len() == 2 {
        6 // full house: trips + pair
    } else if is_flush {
        5
    } else if is_straight {
        4
    } else if triple_matches >= 1 {
        3 // three of a kind
    } else if pair_matches == 2 {
        2 // two pair
    } else if pair_matches == 1 {
        1 // one pair
    } else {
        0
    };

    let tiebreak = if is_straight {
        let high = straight_high.unwrap();
        [high, 0, 0, 0, 0]
    } else {
        let mut flat = [0u8; 5];
        let mut i = 0;
        for &(count, rank) in &groups {
            for _ in 0..count {
                flat[i] = rank;
                i += 1;
            }
        }
        flat
    };

    NaiveRank { category, tiebreak }
}

/// The high card of a 5-straight among `ranks` (each in `2..=14`), or `None`.
/// Ace also plays low for the wheel (A-2-3-4-5), which straight-highs as 5.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut present = [false; 15]; // index by rank value directly, 2..=14
    for &r in ranks {
        present[r as usize] = true;
    }
    if ranks.iter().collect::<std::collections::HashSet<_>>().len() != 5 {
        return None; // a straight needs five distinct ranks
    }
    for high in (5..=14u8).rev() {
        if (0..5).all(|i| present[(high - i) as usize]) {
            return Some(high);
        }
    }
    if present[14] && present[5] && present[4] && present[3] && present[2] {
        return Some(5); // wheel: A-2-3-4-5, plays as a 5-high straight
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cards, evaluate::Evaluator};

    fn hand(spec: &str) -> Vec<Card> { cards!(spec).try_collect().unwrap() }

    #[test]
    fn royal_flush_is_category_nine() {
        assert_eq!(evaluate_best(&hand("As Ks Qs Js Ts")).category(), 9);
    }

    #[test]
    fn steel_wheel_is_straight_flush_not_royal() {
        assert_eq!(evaluate_best(&hand("5s 4s 3s 2s As")).category(), 8);
    }

    #[test]
    fn quads_beat_full_house() {
        let quads = evaluate_best(&hand("Ah Ac As Ad 2h"));
        let boat = evaluate_best(&hand("Kh Kc Ks Qd Qh"));
        assert_eq!(quads.category(), 7);
        assert_eq!(boat.category(), 6);
        assert!(quads > boat);
    }

    #[test]
    fn wheel_straight_ranks_below_six_high() {
        let wheel = evaluate_best(&hand("5h 4c 3s 2d Ah"));
        let six_high = evaluate_best(&hand("6h 5c 4s 3d 2h"));
        assert_eq!(wheel.category(), 4);
        assert_eq!(six_high.category(), 4);
        assert!(six_high > wheel);
    }

    #[test]
    fn agrees_with_cactus_kev_category_across_random_seven_card_hands() {
        use rand::{seq::SliceRandom, SeedableRng};
        use rand_xoshiro::Xoshiro256PlusPlus;

        let evaluator = Evaluator::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(123);
        let mut deck: Vec<Card> = crate::card::Card::generate_deck().collect();

        for _ in 0..200 {
            deck.shuffle(&mut rng);
            let seven: Vec<Card> = deck[..7].to_vec();
            let naive_cat = evaluate_best(&seven).category();
            let fast_cat = evaluator.evaluate(&seven).unwrap().category();
            assert_eq!(
                naive_cat, fast_cat,
                "category mismatch for hand {seven:?}: naive={naive_cat} cactus_kev={fast_cat}"
            );
        }
    }
}
