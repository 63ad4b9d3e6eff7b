//! Core types shared by the debouncer and the score engine.

/// A fixed physical position of a button, independent of who stands there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Left-hand button.
    West,

    /// Right-hand button.
    East,
}

impl Side {
    /// Both sides, West first.
    pub const ALL: [Side; 2] = [Side::West, Side::East];

    /// Returns the opposite side.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::West => Side::East,
            Side::East => Side::West,
        }
    }
}

/// One of the two competitors. Persists across side swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entity {
    /// Player A.
    A,

    /// Player B.
    B,
}

impl Entity {
    /// Returns the opponent.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Entity::A => Entity::B,
            Entity::B => Entity::A,
        }
    }

    /// Index into per-entity arrays (`A` = 0, `B` = 1).
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Entity::A => 0,
            Entity::B => 1,
        }
    }

    /// Single-letter name, as shown on the scoreboard.
    pub fn letter(self) -> char {
        match self {
            Entity::A => 'A',
            Entity::B => 'B',
        }
    }
}

/// Processor sleep depth requested while waiting for a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
    /// Deepest mode. Only the button edge wake sources remain active.
    PowerDown,

    /// Lighter mode that keeps the debounce timer running.
    PowerSave,
}

/// Which transitions on the button lines raise a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeTrigger {
    /// High-to-low only, i.e. a button going down.
    Falling,

    /// Any level change on either line.
    Change,
}
