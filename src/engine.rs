//! Score progression: points into games, games into sets, sets into a match.
//!
//! Provides [`ScoreEngine`], which owns the [`MatchState`] and applies the
//! game, set and match rules strictly in that order after every point.

use crate::rules::WinRule;
use crate::state::{MatchState, SETS_PER_MATCH};
use crate::types::{Entity, Side};

/// Scoring level a win predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    Game,
    Set,
    Match,
}

/// Errors that can occur during score engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScoreError {
    /// A finish operation was called before its win condition held.
    NotDecided(Stage),

    /// A point was recorded after the match was decided but before it was finished.
    MatchOver,
}

impl core::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScoreError::NotDecided(stage) => {
                write!(f, "{:?} has no winner yet", stage)
            }
            ScoreError::MatchOver => {
                write!(f, "match is already decided")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScoreError {}

/// Deepest scoring level completed by a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointOutcome {
    /// The point was scored; the game goes on.
    Point(Entity),

    /// The point won a game for this entity.
    Game(Entity),

    /// The point won a set for this entity.
    Set(Entity),

    /// The point won the match for this entity. Call
    /// [`ScoreEngine::finish_match`] once the win has been acknowledged.
    Match(Entity),
}

/// Enforces the win rules and keeps serve and ends bookkeeping.
///
/// Pure and single-threaded: every mutation goes through `&mut self`.
///
/// # Type Parameters
/// * `SETS` - Sets per match (odd).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScoreEngine<const SETS: usize = SETS_PER_MATCH> {
    state: MatchState<SETS>,
}

impl<const SETS: usize> Default for ScoreEngine<SETS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SETS: usize> ScoreEngine<SETS> {
    /// Creates an engine holding a fresh match with A on West, serving.
    pub fn new() -> Self {
        Self {
            state: MatchState::default(),
        }
    }

    /// Current score.
    pub fn state(&self) -> &MatchState<SETS> {
        &self.state
    }

    /// Discards the current score and places entity A on `entity_a_side`.
    pub fn start_match(&mut self, entity_a_side: Side) {
        self.state = MatchState::new(entity_a_side);
        debug!("match started, A on {}", entity_a_side);
    }

    /// The entity on `side` serves first.
    pub fn choose_server(&mut self, side: Side) {
        self.state.choose_server(side);
        debug!("{} serves first", self.state.serving_entity());
    }

    /// Credits a point to the entity on `side`.
    ///
    /// Callers must check [`MatchState::game_decided`] afterwards, or use
    /// [`score_point`](Self::score_point) which does the whole cascade.
    pub fn record_point(&mut self, side: Side) -> Result<Entity, ScoreError> {
        if self.state.match_decided() {
            return Err(ScoreError::MatchOver);
        }

        let entity = self.state.add_point(side);
        trace!(
            "point {} ({}-{})",
            entity,
            self.state.game_points(Entity::A),
            self.state.game_points(Entity::B)
        );
        Ok(entity)
    }

    /// Closes the current game. Must be called exactly once per decided game.
    pub fn finish_game(&mut self) -> Result<Entity, ScoreError> {
        let winner = WinRule::GAME
            .winner(self.state.game_points(Entity::A), self.state.game_points(Entity::B))
            .ok_or(ScoreError::NotDecided(Stage::Game))?;

        self.state.close_game(winner);
        debug!(
            "game {}, set {} games {}-{}",
            winner,
            self.state.set_number(),
            self.state.set_games(Entity::A),
            self.state.set_games(Entity::B)
        );
        Ok(winner)
    }

    /// Closes the current set. Must be called exactly once per decided set.
    pub fn finish_set(&mut self) -> Result<Entity, ScoreError> {
        let winner = WinRule::SET
            .winner(self.state.set_games(Entity::A), self.state.set_games(Entity::B))
            .ok_or(ScoreError::NotDecided(Stage::Set))?;

        self.state.close_set(winner);
        debug!(
            "set {}, sets {}-{}",
            winner,
            self.state.sets_won(Entity::A),
            self.state.sets_won(Entity::B)
        );
        Ok(winner)
    }

    /// Ends a decided match and resets the score to a fresh all-zero state.
    ///
    /// Returns the match winner.
    pub fn finish_match(&mut self) -> Result<Entity, ScoreError> {
        let winner = self
            .state
            .match_winner()
            .ok_or(ScoreError::NotDecided(Stage::Match))?;

        info!("match won by {}", winner);
        self.state = MatchState::default();
        Ok(winner)
    }

    /// Records a point and runs game, set and match checks in order.
    pub fn score_point(&mut self, side: Side) -> Result<PointOutcome, ScoreError> {
        let scorer = self.record_point(side)?;
        if !self.state.game_decided() {
            return Ok(PointOutcome::Point(scorer));
        }

        let game_winner = self.finish_game()?;
        if !self.state.set_decided() {
            return Ok(PointOutcome::Game(game_winner));
        }

        let set_winner = self.finish_set()?;
        match self.state.match_winner() {
            Some(winner) => Ok(PointOutcome::Match(winner)),
            None => Ok(PointOutcome::Set(set_winner)),
        }
    }
}
