//! Sampling board completions and opponent hole cards without replacement.
//!
//! Grounded in the Fisher-Yates partial-shuffle technique used for Monte
//! Carlo Omaha equity elsewhere in this pack: rather than shuffling an entire
//! deck, only shuffle as many positions as cards are actually needed this
//! trial.

use rand::Rng;

use crate::{deck, ext::AllUnique, Card};

/// The deck that remains once known cards (hero hole cards, known board
/// cards) have been removed. Reusable across trials: each trial calls
/// [`Sampler::draw`] against a scratch copy (`reset_into`) rather than
/// mutating the canonical remaining deck, since "without replacement" only
/// applies within a single trial.
#[derive(Debug, Clone)]
pub struct Sampler {
    remaining: Vec<Card>,
}

impl Sampler {
    /// Build a sampler over every card from a standard 52-card deck that does
    /// not appear in `known`. Returns `None` if `known` contains a duplicate
    /// card.
    pub fn new(known: &[Card]) -> Option<Self> {
        if !known.iter().copied().all_unique() {
            return None;
        }
        let remaining: Vec<Card> = deck::generate().filter(|c| !known.contains(c)).collect();
        Some(Self { remaining })
    }

    /// The number of cards left to draw from.
    pub fn len(&self) -> usize { self.remaining.len() }

    /// Whether the remaining deck is empty.
    pub fn is_empty(&self) -> bool { self.remaining.is_empty() }

    /// Draw `count` cards uniformly without replacement using a partial
    /// Fisher-Yates shuffle over a scratch copy of the remaining deck, then
    /// truncate the scratch copy so the caller's next draw continues where
    /// this one left off. Returns `None` if fewer than `count` cards remain.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Option<Vec<Card>> {
        if count > self.remaining.len() {
            return None;
        }
        let deck_len = self.remaining.len();
        for k in 0..count {
            let swap_idx = rng.gen_range(k..deck_len);
            self.remaining.swap(k, swap_idx);
        }
        let drawn = self.remaining[..count].to_vec();
        self.remaining.drain(..count);
        Some(drawn)
    }
}

/// Sample the cards needed to complete a partial board to 5 cards.
pub fn sample_board_completion<R: Rng + ?Sized>(
    sampler: &mut Sampler,
    known_board: &[Card],
    rng: &mut R,
) -> Option<Vec<Card>> {
    let needed = 5 - known_board.len();
    if needed == 0 {
        return Some(known_board.to_vec());
    }
    let drawn = sampler.draw(rng, needed)?;
    let mut board = known_board.to_vec();
    board.extend(drawn);
    Some(board)
}

/// Sample `num_opponents` two-card hole-card hands.
pub fn sample_opponent_hands<R: Rng + ?Sized>(
    sampler: &mut Sampler,
    num_opponents: usize,
    rng: &mut R,
) -> Option<Vec<[Card; 2]>> {
    let mut hands = Vec::with_capacity(num_opponents);
    for _ in 0..num_opponents {
        let pair = sampler.draw(rng, 2)?;
        hands.push([pair[0], pair[1]]);
    }
    Some(hands)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::cards;

    #[test]
    fn sampler_excludes_known_cards() {
        let known: Vec<Card> = cards!("As Ks").try_collect().unwrap();
        let sampler = Sampler::new(&known).unwrap();
        assert_eq!(sampler.len(), 50);
        assert!(!sampler.remaining.contains(&known[0]));
        assert!(!sampler.remaining.contains(&known[1]));
    }

    #[test]
    fn sampler_rejects_duplicate_known_cards() {
        let dup: Vec<Card> = cards!("As As").try_collect().unwrap();
        assert!(Sampler::new(&dup).is_none());
    }

    #[test]
    fn draw_without_replacement_never_repeats() {
        let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(7);
        let mut sampler = Sampler::new(&[]).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10 {
            let drawn = sampler.draw(&mut rng, 5).unwrap();
            for card in drawn {
                assert!(seen.insert(card));
            }
        }
    }

    #[test]
    fn draw_exhaustion_returns_none() {
        let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(1);
        let mut sampler = Sampler::new(&[]).unwrap();
        assert!(sampler.draw(&mut rng, 52).is_some());
        assert!(sampler.draw(&mut rng, 1).is_none());
    }
}
