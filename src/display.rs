//! Display abstraction for prompts and the live scoreboard.

use crate::state::{MatchState, SETS_PER_MATCH};
use crate::types::Entity;

/// Trait for abstracting the score display.
///
/// Implement this for your display hardware (LCD, OLED, segment driver, etc.).
/// Every call replaces the whole screen. Handle any hardware errors
/// internally - these methods cannot fail.
///
/// [`MatchState::game_call`] gives the point labels for the current game.
pub trait DisplayPort<const SETS: usize = SETS_PER_MATCH> {
    /// Title screen shown once at power-up.
    fn render_splash(&mut self);

    /// Asks which side entity A starts on.
    fn render_start_side_prompt(&mut self);

    /// Asks who serves first. `state` tells which entity stands on which side.
    fn render_serve_prompt(&mut self, state: &MatchState<SETS>);

    /// Set games, current game call and the server.
    fn render_score(&mut self, state: &MatchState<SETS>);

    /// Announces the match winner.
    fn render_match_winner(&mut self, winner: Entity);
}
