//! Simulation observer trait for presentation, tracing and data collection.

use ra_actor::ActorStore;
use ra_brain::{DebugPath, Mandate};
use ra_core::{ActorId, Alignment, Tick};
use ra_fsm::AnimationRequest;

use crate::mind::{ActorMind, ActorState};

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick:               Tick,
    /// `true` if rules were evaluated this tick.
    pub evaluated:          bool,
    pub bad_bot_percentage: f32,
    /// Robots holding a `HuntAgent` mandate at the end of the tick.
    pub hunting:            usize,
    /// Contact hits on players.
    pub hits:               usize,
    pub flips:              usize,
}

/// Callbacks invoked synchronously by [`Sim`][crate::Sim] while a tick runs.
///
/// All methods have default no-op implementations so implementors only
/// override what they need.  The render, animation and debug-draw
/// collaborators are all observers.
///
/// # Example: flip counter
///
/// ```rust,ignore
/// struct FlipCounter(usize);
///
/// impl SimObserver for FlipCounter {
///     fn on_alignment_flipped(&mut self, _tick: Tick, _actor: ActorId, _to: Alignment) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// A robot's mandate was replaced by rule evaluation, return arrival or
    /// an alignment flip.
    fn on_mandate_changed(&mut self, _tick: Tick, _actor: ActorId, _from: Mandate, _to: Mandate) {}

    fn on_state_changed(&mut self, _tick: Tick, _actor: ActorId, _from: ActorState, _to: ActorState) {}

    fn on_alignment_flipped(&mut self, _tick: Tick, _actor: ActorId, _to: Alignment) {}

    /// The clip or facing an actor should show changed.
    fn on_animation(&mut self, _tick: Tick, _actor: ActorId, _request: &AnimationRequest) {}

    /// Only called when `SimConfig::debug_draw` is set.
    fn on_debug_path(&mut self, _tick: Tick, _actor: ActorId, _path: &DebugPath) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to actor data and machine state.
    fn on_snapshot(&mut self, _tick: Tick, _actors: &ActorStore, _minds: &[ActorMind]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
