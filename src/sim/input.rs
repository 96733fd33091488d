//! Directional input and movement intent

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SPEED;

/// Arrow key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    /// Player velocity for this frame. Axes are independent; up wins over
    /// down and right wins over left when both are held.
    pub fn movement_intent(&self) -> Vec2 {
        let vx = if self.right {
            PLAYER_SPEED
        } else if self.left {
            -PLAYER_SPEED
        } else {
            0.0
        };
        let vy = if self.up {
            -PLAYER_SPEED
        } else if self.down {
            PLAYER_SPEED
        } else {
            0.0
        };
        Vec2::new(vx, vy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_input_stops_player() {
        assert_eq!(DirectionalInput::default().movement_intent(), Vec2::ZERO);
    }

    #[test]
    fn test_axes_are_independent() {
        let input = DirectionalInput {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(input.movement_intent(), Vec2::new(-500.0, -500.0));

        let input = DirectionalInput {
            down: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.movement_intent(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_opposing_keys_priority() {
        let input = DirectionalInput {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(input.movement_intent(), Vec2::new(500.0, -500.0));
    }
}
