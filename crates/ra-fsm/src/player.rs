//! Player lifecycle.
//!
//! ```text
//! Appear ──► PlayerControlled ◄──► Hit
//!                  ▲   │            │
//!                  │   ▼            ▼
//!                  └─ Recharging ◄──┘
//! ```

use ra_actor::{Charge, PlayerInput};
use ra_core::PlayerTuning;
use tracing::debug;

use crate::machine::{MachineState, StateMachine, Transition};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerState {
    /// Spawn effect; input disabled.
    Appear,
    PlayerControlled,
    /// Just lost charge; input disabled for a moment.
    Hit,
    /// Powered down until fully recharged.
    Recharging,
}

impl MachineState for PlayerState {
    fn can_enter(self, next: Self) -> bool {
        use PlayerState::*;
        matches!(
            (self, next),
            (Appear, PlayerControlled)
                | (PlayerControlled, Hit)
                | (PlayerControlled, Recharging)
                | (Hit, PlayerControlled)
                | (Hit, Recharging)
                | (Recharging, PlayerControlled)
        )
    }

    fn name(self) -> &'static str {
        match self {
            PlayerState::Appear           => "appear",
            PlayerState::PlayerControlled => "player_controlled",
            PlayerState::Hit              => "hit",
            PlayerState::Recharging       => "recharging",
        }
    }
}

impl PlayerState {
    /// Robots may only hunt a player that is in play.
    #[inline]
    pub fn is_targetable(self) -> bool {
        matches!(self, PlayerState::PlayerControlled | PlayerState::Hit)
    }

    #[inline]
    pub fn accepts_input(self) -> bool {
        self == PlayerState::PlayerControlled
    }
}

/// The player's state machine.
#[derive(Clone, Debug)]
pub struct PlayerMachine {
    machine:      StateMachine<PlayerState>,
    powered_down: bool,
}

impl Default for PlayerMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerMachine {
    /// A machine in `Appear`.
    pub fn new() -> Self {
        Self { machine: StateMachine::new(PlayerState::Appear), powered_down: false }
    }

    #[inline]
    pub fn state(&self) -> PlayerState {
        self.machine.state()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.machine.elapsed()
    }

    #[inline]
    pub fn is_powered_down(&self) -> bool {
        self.powered_down
    }

    /// Request a transition.  Returns `false` and changes nothing if the
    /// current state does not allow `next`.
    pub fn request(&mut self, next: PlayerState, input: &mut PlayerInput) -> bool {
        self.try_enter(next, input).is_some()
    }

    /// Advance timers by `dt` and fire any timed transition.
    pub fn update(
        &mut self,
        dt:     f32,
        charge: &mut Charge,
        input:  &mut PlayerInput,
        tuning: &PlayerTuning,
    ) -> Option<Transition<PlayerState>> {
        let before = self.machine.elapsed();
        self.machine.advance(dt);
        let elapsed = self.machine.elapsed();

        match self.machine.state() {
            PlayerState::Appear => {
                input.enabled = false;
                if elapsed > tuning.appear_duration {
                    return self.try_enter(PlayerState::PlayerControlled, input);
                }
            }
            PlayerState::PlayerControlled => {}
            PlayerState::Hit => {
                if elapsed > tuning.hit_duration {
                    let next = if charge.has_charge() {
                        PlayerState::PlayerControlled
                    } else {
                        PlayerState::Recharging
                    };
                    return self.try_enter(next, input);
                }
            }
            PlayerState::Recharging => {
                // Only the part of this tick after the delay counts.
                let charging = elapsed - before.max(tuning.recharge_delay);
                if charging > 0.0 {
                    charge.add(tuning.recharge_per_second * charging);
                }
                if charge.is_fully_charged() {
                    self.powered_down = false;
                    return self.try_enter(PlayerState::PlayerControlled, input);
                }
            }
        }
        None
    }

    /// React to the player losing charge.
    ///
    /// Only `PlayerControlled` reacts: to `Hit` while charge remains, to
    /// `Recharging` once it is gone.
    pub fn on_charge_lost(
        &mut self,
        charge: &Charge,
        input:  &mut PlayerInput,
    ) -> Option<Transition<PlayerState>> {
        if self.machine.state() != PlayerState::PlayerControlled {
            return None;
        }
        let next = if charge.has_charge() { PlayerState::Hit } else { PlayerState::Recharging };
        self.try_enter(next, input)
    }

    fn try_enter(
        &mut self,
        next:  PlayerState,
        input: &mut PlayerInput,
    ) -> Option<Transition<PlayerState>> {
        let t = self.machine.enter(next)?;
        input.enabled = next.accepts_input();
        if next == PlayerState::Recharging {
            self.powered_down = true;
        }
        debug!(from = t.from.name(), to = t.to.name(), "player state");
        Some(t)
    }
}
