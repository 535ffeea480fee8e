//! Per-tick world snapshots.
//!
//! # Construction
//!
//! `LevelStateSnapshot::build` measures every unordered actor pair once and
//! hands an oriented copy of the measurement to both endpoints.  Each actor's
//! list is then stable-sorted by distance.  Because actors are visited in
//! ascending `ActorId` order, equal distances keep id order, so the nearest
//! target on a tie is always the lower id.

use ra_actor::ActorStore;
use ra_core::ActorId;

/// Distance from `source` (the snapshot owner) to `target`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityDistance {
    pub source:   ActorId,
    pub target:   ActorId,
    pub distance: f32,
}

impl EntityDistance {
    /// The same measurement seen from the other endpoint.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { source: self.target, target: self.source, distance: self.distance }
    }
}

/// A chosen target and its distance from the snapshot owner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetRef {
    pub actor:    ActorId,
    pub distance: f32,
}

/// What one actor's rules see this evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub actor:              ActorId,
    /// Share of robots that are bad, in `[0, 1]`.
    pub bad_bot_percentage: f32,
    pub proximity_factor:   f32,
    /// Every other actor, nearest first.
    pub entity_distances:   Vec<EntityDistance>,
    /// Nearest targetable player.
    pub player_target:      Option<TargetRef>,
    pub nearest_good_robot: Option<TargetRef>,
}

impl EntitySnapshot {
    #[inline]
    pub fn player_distance(&self) -> Option<f32> {
        self.player_target.map(|t| t.distance)
    }

    #[inline]
    pub fn good_robot_distance(&self) -> Option<f32> {
        self.nearest_good_robot.map(|t| t.distance)
    }
}

/// One `EntitySnapshot` per live actor, indexed by `ActorId`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelStateSnapshot {
    pub bad_bot_percentage: f32,
    pub proximity_factor:   f32,
    entities:               Vec<EntitySnapshot>,
}

impl LevelStateSnapshot {
    /// Build snapshots from the actors' current render positions.
    ///
    /// `targetable[i]` says whether actor `i` may be chosen as a player
    /// target; it is only consulted for players.
    pub fn build(store: &ActorStore, targetable: &[bool], proximity_factor: f32) -> Self {
        let n = store.count;
        let bad_bot_percentage = store.bad_bot_percentage();

        let mut lists: Vec<Vec<EntityDistance>> =
            (0..n).map(|_| Vec::with_capacity(n.saturating_sub(1))).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = EntityDistance {
                    source:   ActorId(i as u32),
                    target:   ActorId(j as u32),
                    distance: store.position[i].distance(store.position[j]),
                };
                lists[i].push(d);
                lists[j].push(d.reversed());
            }
        }

        let entities = lists
            .into_iter()
            .enumerate()
            .map(|(i, mut entity_distances)| {
                // Pushed in ascending target id; sort_by is stable.
                entity_distances.sort_by(|a, b| a.distance.total_cmp(&b.distance));
                let to_target = |d: &EntityDistance| TargetRef { actor: d.target, distance: d.distance };
                let player_target = entity_distances
                    .iter()
                    .find(|d| {
                        store.is_player(d.target)
                            && targetable.get(d.target.index()).copied().unwrap_or(false)
                    })
                    .map(to_target);
                let nearest_good_robot = entity_distances
                    .iter()
                    .find(|d| store.is_good_robot(d.target))
                    .map(to_target);
                EntitySnapshot {
                    actor: ActorId(i as u32),
                    bad_bot_percentage,
                    proximity_factor,
                    entity_distances,
                    player_target,
                    nearest_good_robot,
                }
            })
            .collect();

        Self { bad_bot_percentage, proximity_factor, entities }
    }

    #[inline]
    pub fn get(&self, actor: ActorId) -> Option<&EntitySnapshot> {
        self.entities.get(actor.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.entities.iter()
    }
}
