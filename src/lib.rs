#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonDebouncer`**: Turns noisy edges on two buttons into one confirmed press
//! - **`SharedDebouncer`**: Makes the debouncer reachable from interrupt handlers and blocks in `wait_for_press`
//! - **`ButtonLines`** / **`DebounceTimer`** / **`Sleep`**: Traits to implement for your input, timer and sleep hardware
//! - **`ScoreEngine`**: Applies the game, set and match rules, serve rotation and change of ends
//! - **`MatchState`**: The score, with West/East views for rendering
//! - **`DisplayPort`**: Trait to implement for your display
//! - **`Umpire`**: Runs prompts, the scoring loop and the winner announcement
//!
//! A `Side` is a fixed button position (West/East); an `Entity` is a player (A/B)
//! and moves between sides as ends change.

#[macro_use]
mod fmt;

pub mod types;
pub mod rules;
pub mod call;
pub mod state;
pub mod engine;
pub mod debounce;
pub mod wait;
pub mod display;
pub mod umpire;

pub use types::{EdgeTrigger, Entity, Side, SleepMode};
pub use rules::{WinRule, wins};
pub use call::{GameCall, PointLabel};
pub use state::{MatchState, SETS_PER_MATCH, SetScore};
pub use engine::{PointOutcome, ScoreEngine, ScoreError, Stage};
pub use debounce::{ButtonDebouncer, ButtonLines, DebounceConfig, DebounceTimer, Phase, WaitStatus};
pub use wait::{SharedDebouncer, Sleep};
pub use display::DisplayPort;
pub use umpire::{Buttons, PressSource, Umpire};
