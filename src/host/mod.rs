//! Contract with the rendering/physics host
//!
//! The round core never touches engine objects directly. It asks a
//! [`SceneHost`] to create shapes and text, and the host reports overlaps
//! back as [`Overlap`] values.
//!
//! - `recording`: call-recording host for tests and tooling
//! - `headless`: minimal arcade physics host used by the native binary
//! - `driver`: fixed-timestep loop and autopilot input source

pub mod collision;
pub mod driver;
pub mod headless;
pub mod recording;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{EntityHandle, EntityKind, SpawnPlan};

pub use driver::{Autopilot, run_round};
pub use headless::HeadlessHost;
pub use recording::{HostCall, RecordingHost};

/// Opaque reference to a host-owned text object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextHandle(pub u32);

/// Visual primitive for a movable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// Everything the host needs to materialize a movable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// Overlap group the entity joins
    pub kind: EntityKind,
    pub shape: ShapeKind,
    /// Center position
    pub position: Vec2,
    pub size: Vec2,
    pub color: u32,
    pub velocity: Vec2,
    /// Reflect off world bounds instead of stopping at them
    pub bounce: bool,
}

impl ShapeSpec {
    pub fn player(position: Vec2) -> Self {
        Self {
            kind: EntityKind::Player,
            shape: ShapeKind::Rectangle,
            position,
            size: Vec2::splat(PLAYER_SIZE),
            color: PLAYER_COLOR,
            velocity: Vec2::ZERO,
            bounce: false,
        }
    }

    pub fn coin(plan: &SpawnPlan) -> Self {
        Self {
            kind: EntityKind::Coin,
            shape: ShapeKind::Ellipse,
            position: plan.position,
            size: Vec2::new(COIN_SIZE.0, COIN_SIZE.1),
            color: COIN_COLOR,
            velocity: plan.velocity,
            bounce: true,
        }
    }

    pub fn enemy(plan: &SpawnPlan) -> Self {
        Self {
            kind: EntityKind::Enemy,
            shape: ShapeKind::Ellipse,
            position: plan.position,
            size: Vec2::new(ENEMY_SIZE.0, ENEMY_SIZE.1),
            color: ENEMY_COLOR,
            velocity: plan.velocity,
            bounce: true,
        }
    }
}

/// Text rendering hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_px: u32,
    pub color: Option<u32>,
    pub background: Option<u32>,
    /// Anchor at the text center instead of its top-left corner
    pub centered: bool,
}

impl TextStyle {
    /// Score/health line
    pub const HUD: TextStyle = TextStyle {
        font_px: HUD_FONT_PX,
        color: Some(INFO_TEXT_COLOR),
        background: None,
        centered: false,
    };

    pub const PAUSED: TextStyle = TextStyle {
        font_px: HUD_FONT_PX,
        color: None,
        background: None,
        centered: true,
    };

    /// Win/lose announcement
    pub const BANNER: TextStyle = TextStyle {
        font_px: BANNER_FONT_PX,
        color: None,
        background: None,
        centered: true,
    };

    /// Restart affordance shown when a round ends
    pub const BUTTON: TextStyle = TextStyle {
        font_px: BANNER_FONT_PX,
        color: None,
        background: Some(0x111111),
        centered: true,
    };
}

/// Overlap between the player and a member of another group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlap {
    Coin(EntityHandle),
    Enemy(EntityHandle),
}

/// Scene surface consumed by the round controller
///
/// Entity lifetime belongs to the host: the controller only requests
/// creation and destruction. Destroying an unknown handle must be a no-op.
pub trait SceneHost {
    /// Confine movable entities to `[0, width] x [0, height]`
    fn set_world_bounds(&mut self, width: f32, height: f32);

    /// Create a movable shape and add it to the group named by `spec.kind`
    fn create_shape(&mut self, spec: &ShapeSpec) -> EntityHandle;

    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec2);

    /// Remove from its group and destroy the visual/physics body
    fn destroy(&mut self, entity: EntityHandle);

    /// Briefly blink an entity (hit feedback)
    fn flash(&mut self, entity: EntityHandle, duration_ms: u32);

    fn create_text(&mut self, position: Vec2, content: &str, style: &TextStyle) -> TextHandle;

    fn set_text(&mut self, text: TextHandle, content: &str);

    fn set_text_visible(&mut self, text: TextHandle, visible: bool);

    /// Freeze the scene (physics and frame updates)
    fn pause(&mut self);

    fn resume(&mut self);

    /// Run a named overlay scene on top of the paused one
    fn launch_overlay(&mut self, name: &str);

    /// Present a clickable restart affordance
    fn show_restart_button(&mut self, position: Vec2, label: &str, style: &TextStyle);

    /// Tear down every scene object ahead of a new round
    fn restart(&mut self);
}
