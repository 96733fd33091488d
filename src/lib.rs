//! Coin Rush - collect every coin in a bounded arena while dodging enemies
//!
//! Core modules:
//! - `sim`: Engine-agnostic round logic (state, spawning, outcome, lifecycle)
//! - `host`: Contract with the rendering/physics host plus a headless reference host
//! - `settings`: Arena size, seeding and demo configuration

pub mod host;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed frame timestep used by the headless driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Health at the start of every round
    pub const INITIAL_HEALTH: u32 = 3;

    /// Player movement speed per axis (pixels/s)
    pub const PLAYER_SPEED: f32 = 500.0;
    /// Player spawn point (clamped into the arena)
    pub const PLAYER_START: (f32, f32) = (400.0, 400.0);
    /// Player square side length
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_COLOR: u32 = 0xffffff;

    /// Spawned entities keep this distance from every arena edge
    pub const SPAWN_INSET: f32 = 100.0;

    /// Coin count range (inclusive)
    pub const COIN_COUNT_MIN: u32 = 1;
    pub const COIN_COUNT_MAX: u32 = 9;
    /// Coin speed band per axis (pixels/s, inclusive)
    pub const COIN_SPEED_MIN: i32 = 50;
    pub const COIN_SPEED_MAX: i32 = 100;
    pub const COIN_SIZE: (f32, f32) = (20.0, 25.0);
    pub const COIN_COLOR: u32 = 0xffff00;

    /// Enemy count range (inclusive)
    pub const ENEMY_COUNT_MIN: u32 = 3;
    pub const ENEMY_COUNT_MAX: u32 = 9;
    /// Enemy speed band per axis (pixels/s, inclusive)
    pub const ENEMY_SPEED_MIN: i32 = 200;
    pub const ENEMY_SPEED_MAX: i32 = 300;
    pub const ENEMY_SIZE: (f32, f32) = (15.0, 20.0);
    pub const ENEMY_COLOR: u32 = 0xff0000;

    /// Key code that toggles pause/resume
    pub const PAUSE_KEY: &str = "Space";
    /// Overlay launched on top of a paused scene
    pub const PAUSE_OVERLAY: &str = "Pause";
    pub const PAUSE_HINT: &str = "Press 'Space' to pause";
    pub const PAUSED_TEXT: &str = "Game Paused!";
    pub const RESTART_LABEL: &str = "Restart";

    /// HUD text anchor (top-left)
    pub const INFO_TEXT_POS: (f32, f32) = (10.0, 10.0);
    pub const INFO_TEXT_COLOR: u32 = 0x00ff00;
    pub const HUD_FONT_PX: u32 = 24;
    pub const BANNER_FONT_PX: u32 = 48;
    /// Outcome banner sits this far above the arena center
    pub const BANNER_OFFSET_Y: f32 = 80.0;

    /// Player flash when hit by an enemy (ms per half cycle)
    pub const HIT_FLASH_MS: u32 = 200;
}
