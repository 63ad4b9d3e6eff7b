//! Shared test infrastructure for tennis-scorer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use heapless::{Deque, Vec};
use tennis_scorer::{
    ButtonDebouncer, ButtonLines, DebounceConfig, DebounceTimer, DisplayPort, EdgeTrigger, Entity,
    MatchState, PressSource, ScoreEngine, SharedDebouncer, Side, Sleep, SleepMode,
};

// ============================================================================
// Simulated Board
// ============================================================================

fn slot(side: Side) -> usize {
    match side {
        Side::West => 0,
        Side::East => 1,
    }
}

/// Button levels, attached edge trigger and debounce timer on a virtual
/// millisecond clock.
pub struct SimBoard {
    now_ms: Cell<u32>,
    pressed: [Cell<bool>; 2],
    trigger: Cell<Option<EdgeTrigger>>,
    interval_ms: Cell<u32>,
    next_fire_ms: Cell<Option<u32>>,
    configured: Cell<bool>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
            pressed: [Cell::new(false), Cell::new(false)],
            trigger: Cell::new(None),
            interval_ms: Cell::new(0),
            next_fire_ms: Cell::new(None),
            configured: Cell::new(false),
        }
    }

    pub fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }

    pub fn trigger(&self) -> Option<EdgeTrigger> {
        self.trigger.get()
    }

    pub fn timer_running(&self) -> bool {
        self.next_fire_ms.get().is_some()
    }

    pub fn is_pressed(&self, side: Side) -> bool {
        self.pressed[slot(side)].get()
    }

    pub fn configured(&self) -> bool {
        self.configured.get()
    }

    pub fn lines(&self) -> SimLines<'_> {
        SimLines(self)
    }

    pub fn timer(&self) -> SimTimer<'_> {
        SimTimer(self)
    }
}

pub struct SimLines<'a>(&'a SimBoard);

impl ButtonLines for SimLines<'_> {
    fn configure(&mut self) {
        self.0.configured.set(true);
    }

    fn is_pressed(&mut self, side: Side) -> bool {
        self.0.is_pressed(side)
    }

    fn listen(&mut self, trigger: EdgeTrigger) {
        self.0.trigger.set(Some(trigger));
    }

    fn unlisten(&mut self) {
        self.0.trigger.set(None);
    }
}

pub struct SimTimer<'a>(&'a SimBoard);

impl DebounceTimer for SimTimer<'_> {
    fn configure(&mut self, interval_ms: u32) {
        self.0.interval_ms.set(interval_ms);
    }

    fn restart(&mut self) {
        let board = self.0;
        board
            .next_fire_ms
            .set(Some(board.now_ms.get() + board.interval_ms.get()));
    }

    fn cancel(&mut self) {
        self.0.next_fire_ms.set(None);
    }
}

pub type SimDebouncer<'a> = SharedDebouncer<SimLines<'a>, SimTimer<'a>>;

/// Installs a debouncer wired to `board` with the default 16 ms x 2 timing.
pub fn install<'a>(shared: &SimDebouncer<'a>, board: &'a SimBoard) {
    shared.install(ButtonDebouncer::new(
        board.lines(),
        board.timer(),
        DebounceConfig::default(),
    ));
}

// ============================================================================
// Scripted Button Activity
// ============================================================================

/// A level change on one button at an absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub at_ms: u32,
    pub side: Side,
    pub pressed: bool,
}

pub fn down(at_ms: u32, side: Side) -> LevelChange {
    LevelChange {
        at_ms,
        side,
        pressed: true,
    }
}

pub fn up(at_ms: u32, side: Side) -> LevelChange {
    LevelChange {
        at_ms,
        side,
        pressed: false,
    }
}

/// Sleep implementation that plays scripted button activity and timer
/// matches on each suspend, delivering the matching callback.
pub struct SimSleep<'s, 'a> {
    board: &'a SimBoard,
    shared: &'s SimDebouncer<'a>,
    script: Deque<LevelChange, 128>,
    modes: Vec<SleepMode, 512>,
    callbacks: u32,
}

impl<'s, 'a> SimSleep<'s, 'a> {
    pub fn new(board: &'a SimBoard, shared: &'s SimDebouncer<'a>) -> Self {
        Self {
            board,
            shared,
            script: Deque::new(),
            modes: Vec::new(),
            callbacks: 0,
        }
    }

    /// Queues level changes. Times must be non-decreasing.
    pub fn script(&mut self, changes: &[LevelChange]) {
        for change in changes {
            self.script.push_back(*change).unwrap();
        }
    }

    /// A clean press and release on `side`.
    pub fn tap(&mut self, side: Side, at_ms: u32) {
        self.script(&[down(at_ms, side), up(at_ms + 40, side)]);
    }

    pub fn modes(&self) -> &[SleepMode] {
        &self.modes
    }

    pub fn callbacks(&self) -> u32 {
        self.callbacks
    }

    pub fn pending(&self) -> usize {
        self.script.len()
    }

    fn apply(&mut self, change: LevelChange) {
        let board = self.board;
        board.now_ms.set(change.at_ms);

        let line = &board.pressed[slot(change.side)];
        if line.get() == change.pressed {
            return;
        }
        line.set(change.pressed);

        match board.trigger.get() {
            Some(EdgeTrigger::Falling) if change.pressed => {
                self.callbacks += 1;
                self.shared.on_press_edge(change.side);
            }
            Some(EdgeTrigger::Change) => {
                self.callbacks += 1;
                self.shared.on_edge();
            }
            _ => {}
        }
    }

    fn fire_timer(&mut self, at_ms: u32) {
        let board = self.board;
        board.now_ms.set(at_ms);
        board.next_fire_ms.set(Some(at_ms + board.interval_ms.get()));
        self.callbacks += 1;
        self.shared.on_timer();
    }
}

impl Sleep for SimSleep<'_, '_> {
    fn suspend(&mut self, mode: SleepMode) {
        self.modes.push(mode).unwrap();

        let next_change = self.script.front().copied();
        // only the light sleep keeps the timer clock running
        let next_fire = match mode {
            SleepMode::PowerSave => self.board.next_fire_ms.get(),
            SleepMode::PowerDown => None,
        };

        match (next_change, next_fire) {
            (Some(change), Some(fire)) if fire < change.at_ms => self.fire_timer(fire),
            (Some(change), _) => {
                self.script.pop_front();
                self.apply(change);
            }
            (None, Some(fire)) => self.fire_timer(fire),
            (None, None) => panic!("simulation stalled at {} ms in {:?}", self.board.now_ms(), mode),
        }
    }
}

// ============================================================================
// Recording Display
// ============================================================================

/// What the umpire asked the display to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    StartSidePrompt,
    ServePrompt { west: Entity, east: Entity },
    Score(MatchState),
    Winner(Entity),
}

/// Display that records every screen.
pub struct RecordingDisplay {
    screens: std::vec::Vec<Screen>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            screens: std::vec::Vec::new(),
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn last_score(&self) -> Option<&MatchState> {
        self.screens.iter().rev().find_map(|screen| match screen {
            Screen::Score(state) => Some(state),
            _ => None,
        })
    }
}

impl DisplayPort for RecordingDisplay {
    fn render_splash(&mut self) {
        self.screens.push(Screen::Splash);
    }

    fn render_start_side_prompt(&mut self) {
        self.screens.push(Screen::StartSidePrompt);
    }

    fn render_serve_prompt(&mut self, state: &MatchState) {
        self.screens.push(Screen::ServePrompt {
            west: state.west_entity(),
            east: state.east_entity(),
        });
    }

    fn render_score(&mut self, state: &MatchState) {
        self.screens.push(Screen::Score(*state));
    }

    fn render_match_winner(&mut self, winner: Entity) {
        self.screens.push(Screen::Winner(winner));
    }
}

// ============================================================================
// Scripted Presses
// ============================================================================

/// Press source that replays a fixed list of sides.
pub struct ScriptedPresses {
    presses: std::vec::Vec<Side>,
    next: usize,
}

impl ScriptedPresses {
    pub fn new(presses: std::vec::Vec<Side>) -> Self {
        Self { presses, next: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.presses.len() - self.next
    }
}

impl PressSource for ScriptedPresses {
    fn wait_for_press(&mut self) -> Side {
        let side = *self
            .presses
            .get(self.next)
            .expect("press script exhausted");
        self.next += 1;
        side
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Side presses that give each point in `winners` to that entity, replaying a
/// shadow engine to follow the players as they change ends.
pub fn presses_for(a_side: Side, server_side: Side, winners: &[Entity]) -> std::vec::Vec<Side> {
    let mut shadow: ScoreEngine = ScoreEngine::new();
    shadow.start_match(a_side);
    shadow.choose_server(server_side);

    let mut presses = std::vec![a_side, server_side];
    for &winner in winners {
        let side = shadow.state().side_of(winner);
        shadow.score_point(side).unwrap();
        presses.push(side);
    }
    presses
}

/// Points for `winner` taking a 6-0 set of love games.
pub fn love_set(winner: Entity) -> std::vec::Vec<Entity> {
    std::vec![winner; 24]
}
