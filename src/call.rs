//! Translating raw game points into what the umpire calls out.

use crate::types::Side;

/// Tennis name for a point count below game point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointLabel {
    Love,
    Fifteen,
    Thirty,
    Forty,
}

impl PointLabel {
    /// Label for `points`.
    ///
    /// # Panics
    /// If `points` is above 3. A game that far along is either decided or
    /// called as deuce/advantage, so reaching this is a scoring bug.
    pub fn from_points(points: u8) -> Self {
        match points {
            0 => PointLabel::Love,
            1 => PointLabel::Fifteen,
            2 => PointLabel::Thirty,
            3 => PointLabel::Forty,
            _ => panic!("no point label for {} points", points),
        }
    }

    /// Scoreboard text for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PointLabel::Love => "Love",
            PointLabel::Fifteen => "15",
            PointLabel::Thirty => "30",
            PointLabel::Forty => "40",
        }
    }
}

impl core::fmt::Display for PointLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The call for a game in progress, seen from the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameCall {
    /// Plain score while either side is below 40.
    Points { west: PointLabel, east: PointLabel },

    /// Both sides on 40 or beyond, level.
    Deuce,

    /// The side one point ahead past deuce.
    Advantage(Side),
}

impl GameCall {
    /// Builds the call from the West and East point counts of an undecided game.
    ///
    /// # Panics
    /// If the counts describe a game that is already won.
    pub fn from_points(west: u8, east: u8) -> Self {
        if west < 3 || east < 3 {
            return GameCall::Points {
                west: PointLabel::from_points(west),
                east: PointLabel::from_points(east),
            };
        }

        match west as i16 - east as i16 {
            0 => GameCall::Deuce,
            1 => GameCall::Advantage(Side::West),
            -1 => GameCall::Advantage(Side::East),
            _ => panic!("no call for a decided game ({}-{})", west, east),
        }
    }
}
