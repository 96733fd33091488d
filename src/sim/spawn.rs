//! Random spawn planning for coins and enemies
//!
//! Decides how many entities to spawn and where/how fast they start. The
//! caller materializes them on the host.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Initial position and velocity of one spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPlan {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Count range and per-axis speed band for one entity group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnProfile {
    pub min_count: u32,
    pub max_count: u32,
    pub min_speed: i32,
    pub max_speed: i32,
}

/// Slow drifting coins
pub const COIN_PROFILE: SpawnProfile = SpawnProfile {
    min_count: COIN_COUNT_MIN,
    max_count: COIN_COUNT_MAX,
    min_speed: COIN_SPEED_MIN,
    max_speed: COIN_SPEED_MAX,
};

/// Fast enemies
pub const ENEMY_PROFILE: SpawnProfile = SpawnProfile {
    min_count: ENEMY_COUNT_MIN,
    max_count: ENEMY_COUNT_MAX,
    min_speed: ENEMY_SPEED_MIN,
    max_speed: ENEMY_SPEED_MAX,
};

/// Plan a coin wave for an arena of the given size
pub fn plan_coins<R: Rng + ?Sized>(
    rng: &mut R,
    area_width: f32,
    area_height: f32,
) -> Vec<SpawnPlan> {
    plan(&COIN_PROFILE, rng, area_width, area_height)
}

/// Plan the enemy set for an arena of the given size
pub fn plan_enemies<R: Rng + ?Sized>(
    rng: &mut R,
    area_width: f32,
    area_height: f32,
) -> Vec<SpawnPlan> {
    plan(&ENEMY_PROFILE, rng, area_width, area_height)
}

/// Draw a count from the profile, then an independent position and
/// velocity per entity
pub fn plan<R: Rng + ?Sized>(
    profile: &SpawnProfile,
    rng: &mut R,
    area_width: f32,
    area_height: f32,
) -> Vec<SpawnPlan> {
    let count = rng.random_range(profile.min_count..=profile.max_count);

    (0..count)
        .map(|_| {
            let position = Vec2::new(
                axis_position(rng, area_width),
                axis_position(rng, area_height),
            );
            let velocity = Vec2::new(
                drift_component(rng, profile.min_speed, profile.max_speed),
                drift_component(rng, profile.min_speed, profile.max_speed),
            );
            SpawnPlan { position, velocity }
        })
        .collect()
}

/// Safe spawn interval along one axis, or `None` if the inset leaves no room
pub fn safe_range(extent: f32) -> Option<(i32, i32)> {
    let lo = SPAWN_INSET.ceil() as i32;
    let hi = (extent - SPAWN_INSET).floor() as i32;
    (hi >= lo).then_some((lo, hi))
}

/// Whole-pixel position inset from both edges; collapses to the midpoint
/// on axes too small for the inset
fn axis_position<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    match safe_range(extent) {
        Some((lo, hi)) => rng.random_range(lo..=hi) as f32,
        None => extent / 2.0,
    }
}

/// Signed speed from the band. A zero primary draw falls back to the
/// opposite sign, floored at 1, so entities always drift.
fn drift_component<R: Rng + ?Sized>(rng: &mut R, min_speed: i32, max_speed: i32) -> f32 {
    let min = min_speed.max(0);
    let max = max_speed.max(min);
    let sign = if rng.random_bool(0.5) { -1 } else { 1 };

    let primary = sign * rng.random_range(min..=max);
    let component = if primary != 0 {
        primary
    } else {
        -sign * rng.random_range(min..=max).max(1)
    };
    component as f32
}
