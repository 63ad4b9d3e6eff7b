//! The match score aggregate.
//!
//! [`MatchState`] holds every counter the scoreboard shows. It is mutated only
//! by [`ScoreEngine`](crate::ScoreEngine) and handed to the display by
//! reference for rendering.

use crate::call::GameCall;
use crate::rules::WinRule;
use crate::types::{Entity, Side};
use heapless::Vec;

/// Sets per match in the reference configuration (best of three).
pub const SETS_PER_MATCH: usize = 3;

/// Games won by each entity in one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetScore {
    /// Games won by A.
    pub a: u8,

    /// Games won by B.
    pub b: u8,
}

impl SetScore {
    /// Games won by `entity`.
    pub fn of(&self, entity: Entity) -> u8 {
        match entity {
            Entity::A => self.a,
            Entity::B => self.b,
        }
    }

    /// Total games played in the set.
    pub fn total(&self) -> u8 {
        self.a + self.b
    }
}

/// Score of a match in progress.
///
/// # Type Parameters
/// * `SETS` - Sets per match. Must be odd and positive; checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchState<const SETS: usize = SETS_PER_MATCH> {
    serving: Entity,
    sides_swapped: bool,
    game_points: [u8; 2],
    set_number: usize,
    set_games: [[u8; SETS]; 2],
    sets_won: [u8; 2],
}

impl<const SETS: usize> Default for MatchState<SETS> {
    fn default() -> Self {
        Self::new(Side::West)
    }
}

impl<const SETS: usize> MatchState<SETS> {
    const VALID: () = assert!(
        SETS > 0 && SETS % 2 == 1 && SETS < 256,
        "sets per match must be odd and positive"
    );

    /// Creates an all-zero state with entity A standing on `entity_a_side`.
    ///
    /// A serves until [`ScoreEngine::choose_server`](crate::ScoreEngine::choose_server)
    /// says otherwise.
    pub fn new(entity_a_side: Side) -> Self {
        let () = Self::VALID;

        Self {
            serving: Entity::A,
            sides_swapped: entity_a_side == Side::East,
            game_points: [0; 2],
            set_number: 0,
            set_games: [[0; SETS]; 2],
            sets_won: [0; 2],
        }
    }

    /// The entity currently serving.
    pub fn serving_entity(&self) -> Entity {
        self.serving
    }

    /// True if West currently holds entity B.
    pub fn sides_swapped(&self) -> bool {
        self.sides_swapped
    }

    /// Index of the set being played, `0..SETS`.
    pub fn set_number(&self) -> usize {
        self.set_number
    }

    /// The entity standing on `side`.
    #[inline]
    pub fn entity_of(&self, side: Side) -> Entity {
        if (side == Side::West) != self.sides_swapped {
            Entity::A
        } else {
            Entity::B
        }
    }

    /// The side `entity` is standing on.
    #[inline]
    pub fn side_of(&self, entity: Entity) -> Side {
        if (entity == Entity::A) != self.sides_swapped {
            Side::West
        } else {
            Side::East
        }
    }

    /// The entity standing on the West side.
    pub fn west_entity(&self) -> Entity {
        self.entity_of(Side::West)
    }

    /// The entity standing on the East side.
    pub fn east_entity(&self) -> Entity {
        self.entity_of(Side::East)
    }

    /// The side of the serving entity.
    pub fn serving_side(&self) -> Side {
        self.side_of(self.serving)
    }

    /// Points `entity` has in the current game.
    pub fn game_points(&self, entity: Entity) -> u8 {
        self.game_points[entity.index()]
    }

    /// Points of the West entity in the current game.
    pub fn west_game_points(&self) -> u8 {
        self.game_points(self.west_entity())
    }

    /// Points of the East entity in the current game.
    pub fn east_game_points(&self) -> u8 {
        self.game_points(self.east_entity())
    }

    /// Games `entity` has won in the current set.
    pub fn set_games(&self, entity: Entity) -> u8 {
        self.set_games[entity.index()][self.set_number]
    }

    /// Games `entity` won in set `set`. Sets not yet played read as zero.
    pub fn games_in_set(&self, set: usize, entity: Entity) -> u8 {
        self.set_games[entity.index()].get(set).copied().unwrap_or(0)
    }

    /// Completed sets won by `entity`.
    pub fn sets_won(&self, entity: Entity) -> u8 {
        self.sets_won[entity.index()]
    }

    /// Game scores of every set started so far, current set last.
    pub fn set_history(&self) -> Vec<SetScore, SETS> {
        let mut history = Vec::new();
        for set in 0..=self.set_number {
            let pushed = history.push(SetScore {
                a: self.set_games[0][set],
                b: self.set_games[1][set],
            });
            debug_assert!(pushed.is_ok());
        }
        history
    }

    /// The umpire's call for the current game, from the West/East perspective.
    pub fn game_call(&self) -> GameCall {
        GameCall::from_points(self.west_game_points(), self.east_game_points())
    }

    /// Whether the current game has a winner.
    pub fn game_decided(&self) -> bool {
        WinRule::GAME.is_won(self.game_points[0], self.game_points[1])
    }

    /// Whether the current set has a winner.
    pub fn set_decided(&self) -> bool {
        WinRule::SET.is_won(self.set_games(Entity::A), self.set_games(Entity::B))
    }

    /// Whether the match has a winner.
    pub fn match_decided(&self) -> bool {
        self.match_winner().is_some()
    }

    /// The match winner, once one entity holds a majority of sets.
    pub fn match_winner(&self) -> Option<Entity> {
        WinRule::match_of(SETS).winner(self.sets_won[0], self.sets_won[1])
    }

    pub(crate) fn choose_server(&mut self, side: Side) {
        self.serving = self.entity_of(side);
    }

    /// Adds a point for whoever stands on `side`. Returns that entity.
    pub(crate) fn add_point(&mut self, side: Side) -> Entity {
        let entity = self.entity_of(side);
        self.game_points[entity.index()] += 1;
        // back to deuce: fold to 3-3 so a long game stays in range
        if self.game_points[0] == self.game_points[1] && self.game_points[0] > 3 {
            self.game_points = [3; 2];
        }
        entity
    }

    /// Books a game for `winner`: rotates serve, clears the points and changes
    /// ends after every odd game of the set.
    pub(crate) fn close_game(&mut self, winner: Entity) {
        self.set_games[winner.index()][self.set_number] += 1;
        self.game_points = [0; 2];
        self.serving = self.serving.other();

        let played = self.set_games(Entity::A) + self.set_games(Entity::B);
        if played % 2 != 0 {
            self.sides_swapped = !self.sides_swapped;
        }
    }

    /// Books a set for `winner` and moves on to the next one.
    pub(crate) fn close_set(&mut self, winner: Entity) {
        self.sets_won[winner.index()] += 1;
        if self.set_number + 1 < SETS {
            self.set_number += 1;
        }
    }
}
