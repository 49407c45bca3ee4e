use crate::evaluate::lookup_table;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct PokerHandRank(pub(crate) i16);

impl PokerHandRank {
    pub const BEST: Self = Self(1);
    pub const WORST: Self = Self(lookup_table::constants::MAX_HIGH_CARD as i16);

    #[inline]
    pub const fn is_better_than(self, other: Self) -> bool { self.0 < other.0 }

    /// Classify this rank into the 0..9 hand-category scale used by the
    /// equity engine, where 9 is a royal flush and 0 is a high card. This is
    /// the inverse of the internal 1..7462 rank scale, where 1 is strongest.
    pub const fn category(self) -> u8 {
        use lookup_table::constants::*;
        if self.0 == Self::BEST.0 {
            9 // royal flush: the single best straight flush
        } else if self.0 <= WORST_STRAIGHT_FLUSH {
            8
        } else if self.0 <= WORST_FOUR_OF_A_KIND {
            7
        } else if self.0 <= WORST_FULL_HOUSE {
            6
        } else if self.0 <= WORST_FLUSH {
            5
        } else if self.0 <= WORST_STRAIGHT {
            4
        } else if self.0 <= WORST_THREE_OF_A_KIND {
            3
        } else if self.0 <= WORST_TWO_PAIR {
            2
        } else if self.0 <= WORST_PAIR {
            1
        } else {
            0
        }
    }

    /// The raw 1..7462 rank value, with 1 being the strongest possible hand.
    pub const fn as_i16(self) -> i16 { self.0 }
}
