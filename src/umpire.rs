//! Top-level control flow tying buttons, engine and display together.

use crate::debounce::{ButtonLines, DebounceTimer};
use crate::display::DisplayPort;
use crate::engine::{PointOutcome, ScoreEngine};
use crate::state::SETS_PER_MATCH;
use crate::types::{Entity, Side};
use crate::wait::{SharedDebouncer, Sleep};

/// Trait for anything that yields confirmed button presses.
pub trait PressSource {
    /// Blocks until a press and returns its side.
    fn wait_for_press(&mut self) -> Side;
}

/// [`PressSource`] backed by a [`SharedDebouncer`] and a [`Sleep`] implementation.
pub struct Buttons<'d, L: ButtonLines, T: DebounceTimer, S: Sleep> {
    debouncer: &'d SharedDebouncer<L, T>,
    sleep: S,
}

impl<'d, L: ButtonLines, T: DebounceTimer, S: Sleep> Buttons<'d, L, T, S> {
    /// Reads presses from `debouncer`, sleeping through `sleep` while waiting.
    pub fn new(debouncer: &'d SharedDebouncer<L, T>, sleep: S) -> Self {
        Self { debouncer, sleep }
    }
}

impl<L: ButtonLines, T: DebounceTimer, S: Sleep> PressSource for Buttons<'_, L, T, S> {
    fn wait_for_press(&mut self) -> Side {
        self.debouncer.wait_for_press(&mut self.sleep)
    }
}

/// Runs matches: prompts, scoring loop and winner announcement.
///
/// # Type Parameters
/// * `D` - Display implementation type
/// * `P` - Press source implementation type
/// * `SETS` - Sets per match
pub struct Umpire<D: DisplayPort<SETS>, P: PressSource, const SETS: usize = SETS_PER_MATCH> {
    display: D,
    presses: P,
    engine: ScoreEngine<SETS>,
}

impl<D: DisplayPort<SETS>, P: PressSource, const SETS: usize> Umpire<D, P, SETS> {
    /// Creates an umpire with a fresh score.
    pub fn new(display: D, presses: P) -> Self {
        Self {
            display,
            presses,
            engine: ScoreEngine::new(),
        }
    }

    /// Shows the splash screen, then plays matches forever.
    pub fn run(&mut self) -> ! {
        self.display.render_splash();
        loop {
            self.play_match();
        }
    }

    /// Plays one match from the opening prompts to the acknowledged winner.
    ///
    /// Returns the winner. The engine holds a fresh score afterwards.
    pub fn play_match(&mut self) -> Entity {
        self.display.render_start_side_prompt();
        let a_side = self.presses.wait_for_press();
        self.engine.start_match(a_side);

        self.display.render_serve_prompt(self.engine.state());
        let server_side = self.presses.wait_for_press();
        self.engine.choose_server(server_side);

        let winner = loop {
            self.display.render_score(self.engine.state());
            let side = self.presses.wait_for_press();
            match self.engine.score_point(side) {
                Ok(PointOutcome::Match(winner)) => break winner,
                Ok(_) => {}
                Err(_) => unreachable!("points are only scored while the match is open"),
            }
        };

        self.display.render_match_winner(winner);
        self.presses.wait_for_press();
        let finished = self.engine.finish_match();
        debug_assert_eq!(finished, Ok(winner));
        winner
    }

    /// Score of the match in progress.
    pub fn engine(&self) -> &ScoreEngine<SETS> {
        &self.engine
    }

    /// The display being driven.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The press source being read.
    pub fn presses(&self) -> &P {
        &self.presses
    }
}
