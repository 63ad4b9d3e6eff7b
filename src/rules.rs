//! Win conditions for games, sets and matches.

use crate::types::Entity;

/// Returns true iff one score has reached `threshold` and leads the other by
/// at least `win_by`.
#[inline]
pub const fn wins(threshold: u8, win_by: u8, score_a: u8, score_b: u8) -> bool {
    (score_a >= threshold && score_a >= score_b && score_a - score_b >= win_by)
        || (score_b >= threshold && score_b >= score_a && score_b - score_a >= win_by)
}

/// A "first to `threshold`, ahead by `win_by`" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WinRule {
    /// Minimum score the winner must reach.
    pub threshold: u8,

    /// Minimum lead over the opponent.
    pub win_by: u8,
}

impl WinRule {
    /// First to 4 points, by 2.
    pub const GAME: WinRule = WinRule::new(4, 2);

    /// First to 6 games, by 2.
    pub const SET: WinRule = WinRule::new(6, 2);

    /// Creates a rule.
    pub const fn new(threshold: u8, win_by: u8) -> Self {
        Self { threshold, win_by }
    }

    /// Majority of `sets_per_match` sets, by 1.
    pub const fn match_of(sets_per_match: usize) -> Self {
        Self::new((sets_per_match / 2 + 1) as u8, 1)
    }

    /// Whether either score satisfies this rule.
    #[inline]
    pub const fn is_won(&self, score_a: u8, score_b: u8) -> bool {
        wins(self.threshold, self.win_by, score_a, score_b)
    }

    /// The entity that satisfies this rule, if any.
    pub fn winner(&self, score_a: u8, score_b: u8) -> Option<Entity> {
        if !self.is_won(score_a, score_b) {
            None
        } else if score_a > score_b {
            Some(Entity::A)
        } else {
            Some(Entity::B)
        }
    }
}
