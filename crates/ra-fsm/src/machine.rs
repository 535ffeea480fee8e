//! Generic timed state machine.

use std::fmt::Debug;

/// A state of a lifecycle machine.
pub trait MachineState: Copy + Eq + Debug + 'static {
    /// `true` if a request to move from `self` to `next` is honored.
    fn can_enter(self, next: Self) -> bool;

    fn name(self) -> &'static str;
}

/// A state change that happened during a call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub from: S,
    pub to:   S,
}

/// Current state plus the simulated seconds spent in it.
#[derive(Clone, Debug)]
pub struct StateMachine<S: MachineState> {
    state:   S,
    elapsed: f32,
}

impl<S: MachineState> StateMachine<S> {
    pub fn new(initial: S) -> Self {
        Self { state: initial, elapsed: 0.0 }
    }

    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    /// Seconds since the current state was entered.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Move to `next` if the current state allows it.
    pub fn enter(&mut self, next: S) -> Option<Transition<S>> {
        if self.state.can_enter(next) {
            Some(self.force_enter(next))
        } else {
            None
        }
    }

    /// Move to `next` unconditionally and restart the state timer.
    pub fn force_enter(&mut self, next: S) -> Transition<S> {
        let from = self.state;
        self.state = next;
        self.elapsed = 0.0;
        Transition { from, to: next }
    }
}
