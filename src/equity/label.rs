//! Canonical starting-hand labels, e.g. `"AKs"`, `"72o"`, `"TT"`.

use crate::{Card, Rank};

/// Classify two hole cards into the canonical starting-hand label used to key
/// opponent-category buckets: `"XX"` for a pocket pair, `"XYs"` for suited,
/// `"XYo"` for offsuit, with the higher rank always listed first.
///
/// ```
/// use holdem_equity::{card, equity::label_hole_cards};
/// assert_eq!(label_hole_cards(card!(Ace, Spades), card!(King, Spades)), "AKs");
/// assert_eq!(label_hole_cards(card!(Seven, Clubs), card!(Two, Diamonds)), "72o");
/// assert_eq!(label_hole_cards(card!(Ten, Hearts), card!(Ten, Clubs)), "TT");
/// ```
pub fn label_hole_cards(a: Card, b: Card) -> String {
    let (hi, lo) = if a.rank() >= b.rank() { (a, b) } else { (b, a) };

    if hi.rank() == lo.rank() {
        let c = hi.rank().as_char();
        return [c, c].iter().collect();
    }

    let suited = hi.suit() == lo.suit();
    let mut label = String::with_capacity(3);
    label.push(hi.rank().as_char());
    label.push(lo.rank().as_char());
    label.push(if suited { 's' } else { 'o' });
    label
}

/// Count of distinct starting-hand labels: 13 pocket pairs + 78 suited + 78
/// offsuit combinations = 169. Matches `MAX_HANDS` in the telemetry layout.
pub const MAX_STARTING_HAND_LABELS: usize = 169;

const _: () = assert!(Rank::ALL_VARIANTS.len() == 13);
