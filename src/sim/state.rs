//! Round state and core value types
//!
//! Pure bookkeeping: counters, phase and which host entities are still live.
//! Nothing here knows how entities are drawn or moved.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::RoundError;
use crate::consts::PAUSE_HINT;

/// Lifecycle phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    #[default]
    Running,
    /// Scene frozen, waiting for resume
    Paused,
    /// Won or lost; only a restart leaves this phase
    Ended,
}

/// Opaque reference to a host-owned visual/physics object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityHandle(pub u32);

impl std::fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Group a movable entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Coin,
    Enemy,
}

/// Score, health, phase and live entity membership for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    score: u32,
    health: u32,
    phase: RoundPhase,
    /// Sorted by handle for stable iteration
    live_coins: BTreeSet<EntityHandle>,
    live_enemies: BTreeSet<EntityHandle>,
}

impl RoundState {
    /// Fresh running round seeded with the spawned entities
    pub fn new(
        initial_health: u32,
        coins: impl IntoIterator<Item = EntityHandle>,
        enemies: impl IntoIterator<Item = EntityHandle>,
    ) -> Self {
        Self {
            score: 0,
            health: initial_health,
            phase: RoundPhase::Running,
            live_coins: coins.into_iter().collect(),
            live_enemies: enemies.into_iter().collect(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// One coin collected. Ignored unless running.
    pub fn increase_score(&mut self) {
        if self.phase == RoundPhase::Running {
            self.score += 1;
        }
    }

    /// One enemy hit, floored at zero. Ignored unless running.
    pub fn decrease_health(&mut self) {
        if self.phase == RoundPhase::Running {
            self.health = self.health.saturating_sub(1);
        }
    }

    /// Returns whether the handle was live
    pub fn remove_coin(&mut self, handle: EntityHandle) -> bool {
        self.live_coins.remove(&handle)
    }

    /// Returns whether the handle was live
    pub fn remove_enemy(&mut self, handle: EntityHandle) -> bool {
        self.live_enemies.remove(&handle)
    }

    pub fn is_live_coin(&self, handle: EntityHandle) -> bool {
        self.live_coins.contains(&handle)
    }

    pub fn is_live_enemy(&self, handle: EntityHandle) -> bool {
        self.live_enemies.contains(&handle)
    }

    pub fn remaining_coins(&self) -> usize {
        self.live_coins.len()
    }

    pub fn remaining_enemies(&self) -> usize {
        self.live_enemies.len()
    }

    pub fn live_coins(&self) -> impl Iterator<Item = EntityHandle> + '_ {
        self.live_coins.iter().copied()
    }

    pub fn live_enemies(&self) -> impl Iterator<Item = EntityHandle> + '_ {
        self.live_enemies.iter().copied()
    }

    /// HUD line shown while the round is in progress
    pub fn status_summary(&self) -> String {
        format!(
            "Coin count: {}, Health: {}\n{}",
            self.score, self.health, PAUSE_HINT
        )
    }

    /// Move to `to`. Running<->Paused and Running->Ended are legal;
    /// staying in the same phase is a no-op.
    pub fn set_phase(&mut self, to: RoundPhase) -> Result<(), RoundError> {
        use RoundPhase::*;

        let from = self.phase;
        match (from, to) {
            _ if from == to => Ok(()),
            (Running, Paused) | (Paused, Running) | (Running, Ended) => {
                self.phase = to;
                Ok(())
            }
            _ => Err(RoundError::IllegalTransition { from, to }),
        }
    }

    /// Drop every live coin and enemy, returning the handles (coins first)
    /// so the host can destroy them
    pub fn clear_entities(&mut self) -> Vec<EntityHandle> {
        let mut cleared: Vec<EntityHandle> =
            std::mem::take(&mut self.live_coins).into_iter().collect();
        cleared.extend(std::mem::take(&mut self.live_enemies));
        cleared
    }
}
