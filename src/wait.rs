//! Blocking wait for a debounced press, shared with callback context.
//!
//! [`SharedDebouncer`] can live in a `static` so that edge and timer interrupt
//! handlers reach the same [`ButtonDebouncer`] as the main loop. The main loop
//! blocks in [`SharedDebouncer::wait_for_press`], which checks the wait and
//! suspends the processor inside one critical section so an interrupt landing
//! between the check and the sleep stays pending instead of being lost.

use core::cell::RefCell;

use critical_section::{CriticalSection, Mutex};

use crate::debounce::{ButtonDebouncer, ButtonLines, DebounceTimer, Phase, WaitStatus};
use crate::types::{Side, SleepMode};

/// Trait for abstracting processor sleep.
pub trait Sleep {
    /// Halts the processor in `mode` until a wake event is pending.
    ///
    /// Called with callback delivery masked. The implementation must return
    /// once an edge or timer event is pending even though it cannot be
    /// delivered yet (`wfi` semantics); the callback runs when the caller
    /// unmasks. Returning early on a spurious wake is harmless.
    fn suspend(&mut self, mode: SleepMode);
}

/// A [`ButtonDebouncer`] reachable from both the main loop and interrupt handlers.
///
/// ```ignore
/// static BUTTONS: SharedDebouncer<BoardLines, BoardTimer> = SharedDebouncer::new();
///
/// #[interrupt]
/// fn EXTI0() {
///     BUTTONS.on_press_edge(Side::West);
/// }
/// ```
pub struct SharedDebouncer<L: ButtonLines, T: DebounceTimer> {
    inner: Mutex<RefCell<Option<ButtonDebouncer<L, T>>>>,
}

impl<L: ButtonLines, T: DebounceTimer> Default for SharedDebouncer<L, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ButtonLines, T: DebounceTimer> SharedDebouncer<L, T> {
    /// Creates an empty slot. Call [`install`](Self::install) before waiting.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Runs [`ButtonDebouncer::setup`] and makes the debouncer reachable.
    ///
    /// Must be called exactly once, before the first wait.
    pub fn install(&self, mut debouncer: ButtonDebouncer<L, T>) {
        critical_section::with(|cs| {
            debouncer.setup();
            self.inner.replace(cs, Some(debouncer));
        });
    }

    /// Removes the debouncer, handing back ownership.
    pub fn take(&self) -> Option<ButtonDebouncer<L, T>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Current phase, or `None` before [`install`](Self::install).
    pub fn phase(&self) -> Option<Phase> {
        critical_section::with(|cs| self.inner.borrow_ref(cs).as_ref().map(ButtonDebouncer::phase))
    }

    /// Falling-edge callback. Does nothing before installation.
    pub fn on_press_edge(&self, side: Side) {
        self.dispatch(|debouncer| debouncer.on_press_edge(side));
    }

    /// Change-edge callback. Does nothing before installation.
    pub fn on_edge(&self) {
        self.dispatch(ButtonDebouncer::on_edge);
    }

    /// Timer compare callback. Does nothing before installation.
    pub fn on_timer(&self) {
        self.dispatch(ButtonDebouncer::on_timer);
    }

    /// Sleeps until a debounced press, then returns its side.
    ///
    /// Both buttons must be up when this is called.
    ///
    /// # Panics
    /// If no debouncer has been installed.
    pub fn wait_for_press<S: Sleep>(&self, sleep: &mut S) -> Side {
        critical_section::with(|cs| self.installed(cs, ButtonDebouncer::arm));

        loop {
            let ready = critical_section::with(|cs| match self.installed(cs, ButtonDebouncer::poll) {
                WaitStatus::Ready(side) => Some(side),
                WaitStatus::Pending(mode) => {
                    sleep.suspend(mode);
                    None
                }
            });
            if let Some(side) = ready {
                return side;
            }
        }
    }

    fn dispatch(&self, f: impl FnOnce(&mut ButtonDebouncer<L, T>)) {
        critical_section::with(|cs| {
            if let Some(debouncer) = self.inner.borrow_ref_mut(cs).as_mut() {
                f(debouncer);
            }
        });
    }

    fn installed<R>(&self, cs: CriticalSection<'_>, f: impl FnOnce(&mut ButtonDebouncer<L, T>) -> R) -> R {
        match self.inner.borrow_ref_mut(cs).as_mut() {
            Some(debouncer) => f(debouncer),
            None => panic!("button debouncer used before setup"),
        }
    }
}
