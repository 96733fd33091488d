//! Round simulation module
//!
//! All gameplay rules live here. This module must stay engine-agnostic:
//! - Entities are opaque handles owned by the host
//! - Seeded RNG only
//! - Stable iteration order (by handle)
//! - State changes only through the controller's event methods

pub mod controller;
pub mod error;
pub mod input;
pub mod outcome;
pub mod spawn;
pub mod state;

pub use controller::RoundController;
pub use error::{RoundError, RoundEvent};
pub use input::DirectionalInput;
pub use outcome::{Outcome, evaluate};
pub use spawn::{COIN_PROFILE, ENEMY_PROFILE, SpawnPlan, SpawnProfile, plan_coins, plan_enemies};
pub use state::{EntityHandle, EntityKind, RoundPhase, RoundState};
