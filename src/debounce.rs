//! Two-button debouncing driven by edge and timer callbacks.
//!
//! Provides [`ButtonDebouncer`], the state machine that turns noisy switch
//! edges into one confirmed press, and the [`ButtonLines`] and
//! [`DebounceTimer`] traits it drives the hardware through.
//!
//! A wait moves through [`Phase::Armed`] (deepest sleep, waiting for a button
//! to go down), [`Phase::Settling`] (lighter sleep, waiting for both buttons to
//! stay up long enough) and [`Phase::Settled`]. Every bounce while settling
//! restarts the timer, so continued activity postpones the result.

use crate::types::{EdgeTrigger, Side, SleepMode};

/// Trait for abstracting the two button input lines.
///
/// Lines are pull-up biased and active low. Implement this for your GPIO and
/// external interrupt hardware.
pub trait ButtonLines {
    /// Configures both pins as pull-up inputs with no callback attached.
    fn configure(&mut self);

    /// Returns true while the button on `side` is held down.
    fn is_pressed(&mut self, side: Side) -> bool;

    /// Attaches edge callbacks to both lines, replacing any previous trigger.
    ///
    /// Lines configured with [`EdgeTrigger::Falling`] must call
    /// [`ButtonDebouncer::on_press_edge`]; lines configured with
    /// [`EdgeTrigger::Change`] must call [`ButtonDebouncer::on_edge`].
    fn listen(&mut self, trigger: EdgeTrigger);

    /// Detaches the edge callbacks from both lines.
    fn unlisten(&mut self);
}

/// Trait for abstracting the periodic debounce timer.
///
/// The timer must be able to fire while the processor is in
/// [`SleepMode::PowerSave`]. Each compare match calls
/// [`ButtonDebouncer::on_timer`].
pub trait DebounceTimer {
    /// Sets the compare interval. Leaves the timer stopped.
    fn configure(&mut self, interval_ms: u32);

    /// Zeroes the counter and (re)starts periodic compare callbacks.
    fn restart(&mut self);

    /// Stops compare callbacks.
    fn cancel(&mut self);
}

/// Debounce timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Timer compare interval.
    pub interval_ms: u32,

    /// Consecutive compare matches with both buttons up that confirm a press.
    pub confirmations: u8,
}

impl DebounceConfig {
    /// ~16 ms, twice.
    pub const DEFAULT: DebounceConfig = DebounceConfig {
        interval_ms: 16,
        confirmations: 2,
    };

    /// How long both buttons must stay up before a press is reported.
    pub fn settle_time_ms(&self) -> u32 {
        self.interval_ms.saturating_mul(self.confirmations as u32)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where a single wait for a press currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not waiting. Callbacks are detached.
    Idle,

    /// Waiting for either button to go down.
    Armed,

    /// A button went down on this side; waiting for both to stay up.
    Settling(Side),

    /// Press confirmed on this side, not yet collected.
    Settled(Side),
}

/// Result of checking on a wait in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitStatus {
    /// Keep sleeping in this mode.
    Pending(SleepMode),

    /// The wait is over; this side was pressed.
    Ready(Side),
}

/// Debounce state machine for two buttons and one timer.
///
/// The `on_*` methods are the callback entry points. They must run with
/// callback delivery masked, which [`SharedDebouncer`](crate::SharedDebouncer)
/// takes care of.
///
/// # Type Parameters
/// * `L` - Button line implementation type
/// * `T` - Debounce timer implementation type
pub struct ButtonDebouncer<L: ButtonLines, T: DebounceTimer> {
    lines: L,
    timer: T,
    config: DebounceConfig,
    phase: Phase,
    confirmations: u8,
}

impl<L: ButtonLines, T: DebounceTimer> ButtonDebouncer<L, T> {
    /// Creates an idle debouncer. Call [`setup`](Self::setup) before first use.
    pub fn new(lines: L, timer: T, config: DebounceConfig) -> Self {
        Self {
            lines,
            timer,
            config,
            phase: Phase::Idle,
            confirmations: 0,
        }
    }

    /// Configures the input pins and arms, but does not start, the timer.
    pub fn setup(&mut self) {
        self.lines.configure();
        self.lines.unlisten();
        self.timer.cancel();
        self.timer.configure(self.config.interval_ms);
        self.phase = Phase::Idle;
        self.confirmations = 0;
    }

    /// Begins a new wait: listens for a button going down.
    ///
    /// Both buttons are expected to be up.
    pub fn arm(&mut self) {
        self.timer.cancel();
        self.confirmations = 0;
        self.lines.listen(EdgeTrigger::Falling);
        self.phase = Phase::Armed;
        trace!("debounce armed");
    }

    /// Checks on the wait. Collecting a `Ready` result returns the machine to idle.
    pub fn poll(&mut self) -> WaitStatus {
        match self.phase {
            Phase::Settled(side) => {
                self.phase = Phase::Idle;
                WaitStatus::Ready(side)
            }
            Phase::Settling(_) => WaitStatus::Pending(SleepMode::PowerSave),
            Phase::Idle | Phase::Armed => WaitStatus::Pending(SleepMode::PowerDown),
        }
    }

    /// Callback for a button going down while listening with [`EdgeTrigger::Falling`].
    ///
    /// The first side to arrive is recorded. If both lines fire in the same
    /// wake cycle the second call lands after the switch to change detection
    /// and is treated as a plain edge.
    pub fn on_press_edge(&mut self, side: Side) {
        if self.phase != Phase::Armed {
            self.on_edge();
            return;
        }

        self.phase = Phase::Settling(side);
        self.lines.listen(EdgeTrigger::Change);
        debug!("press on {}, settling", side);
        self.on_edge();
    }

    /// Callback for any level change while settling.
    pub fn on_edge(&mut self) {
        if !matches!(self.phase, Phase::Settling(_)) {
            return;
        }

        if self.both_released() {
            self.confirmations = 0;
            self.timer.restart();
        } else {
            self.timer.cancel();
        }
    }

    /// Callback for a debounce timer compare match.
    pub fn on_timer(&mut self) {
        let Phase::Settling(side) = self.phase else {
            self.timer.cancel();
            return;
        };

        self.confirmations = self.confirmations.saturating_add(1);
        if self.confirmations >= self.config.confirmations {
            self.timer.cancel();
            self.lines.unlisten();
            self.phase = Phase::Settled(side);
            debug!("press on {} settled", side);
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Timing in use.
    pub fn config(&self) -> DebounceConfig {
        self.config
    }

    /// Gives back the hardware.
    pub fn into_parts(self) -> (L, T) {
        (self.lines, self.timer)
    }

    fn both_released(&mut self) -> bool {
        !self.lines.is_pressed(Side::West) && !self.lines.is_pressed(Side::East)
    }
}
