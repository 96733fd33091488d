//! Overlap detection and world-bounds response for rectangular bodies
//!
//! Bodies are treated as axis-aligned boxes around their center. Ellipses
//! use their bounding box, which is what arcade-style physics does too.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Result of resolving a body against the world bounds
#[derive(Debug, Clone)]
pub struct BoundsResult {
    /// Whether any wall was touched
    pub hit: bool,
    /// Corrected center position
    pub position: Vec2,
    /// Velocity after response
    pub velocity: Vec2,
}

/// Keep a body inside `[0, bounds]`, reflecting velocity off any wall it
/// is moving into (bounce 1)
pub fn bounce_in_bounds(position: Vec2, velocity: Vec2, size: Vec2, bounds: Vec2) -> BoundsResult {
    let mut result = BoundsResult {
        hit: false,
        position,
        velocity,
    };

    // (penetration, inward normal) for each wall
    let half = size / 2.0;
    let walls = [
        (half.x - position.x, Vec2::X),
        (position.x + half.x - bounds.x, Vec2::NEG_X),
        (half.y - position.y, Vec2::Y),
        (position.y + half.y - bounds.y, Vec2::NEG_Y),
    ];

    for (penetration, normal) in walls {
        if penetration > 0.0 {
            result.hit = true;
            if result.velocity.dot(normal) < 0.0 {
                result.velocity = reflect_velocity(result.velocity, normal);
            }
        }
    }

    result.position = clamp_in_bounds(position, size, bounds);
    result
}

/// Clamp a body's center so its box stays inside `[0, bounds]`. Axes
/// narrower than the body collapse to their midpoint.
pub fn clamp_in_bounds(position: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    let half = size / 2.0;
    let axis = |p: f32, h: f32, extent: f32| {
        if extent < 2.0 * h {
            extent / 2.0
        } else {
            p.clamp(h, extent - h)
        }
    };
    Vec2::new(
        axis(position.x, half.x, bounds.x),
        axis(position.y, half.y, bounds.y),
    )
}

/// Reflect velocity off a surface with the given normal
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_aabb_overlap() {
        let player = Aabb::from_center(Vec2::new(100.0, 100.0), Vec2::splat(50.0));
        let near = Aabb::from_center(Vec2::new(130.0, 110.0), Vec2::new(20.0, 25.0));
        let far = Aabb::from_center(Vec2::new(200.0, 100.0), Vec2::new(20.0, 25.0));
        assert!(player.overlaps(&near));
        assert!(near.overlaps(&player));
        assert!(!player.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_reflect_velocity() {
        // Moving right into a wall whose normal points left
        let reflected = reflect_velocity(Vec2::new(100.0, 30.0), Vec2::NEG_X);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!((reflected.y - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_bounce_off_right_wall() {
        let result = bounce_in_bounds(
            Vec2::new(795.0, 300.0),
            Vec2::new(250.0, -200.0),
            Vec2::new(15.0, 20.0),
            BOUNDS,
        );
        assert!(result.hit);
        assert_eq!(result.velocity, Vec2::new(-250.0, -200.0));
        assert_eq!(result.position, Vec2::new(792.5, 300.0));
    }

    #[test]
    fn test_bounce_off_corner() {
        let result = bounce_in_bounds(
            Vec2::new(2.0, 3.0),
            Vec2::new(-60.0, -70.0),
            Vec2::new(20.0, 25.0),
            BOUNDS,
        );
        assert!(result.hit);
        assert_eq!(result.velocity, Vec2::new(60.0, 70.0));
        assert_eq!(result.position, Vec2::new(10.0, 12.5));
    }

    #[test]
    fn test_moving_away_keeps_velocity() {
        let result = bounce_in_bounds(
            Vec2::new(5.0, 300.0),
            Vec2::new(80.0, 0.0),
            Vec2::new(20.0, 25.0),
            BOUNDS,
        );
        assert!(result.hit);
        assert_eq!(result.velocity, Vec2::new(80.0, 0.0));
    }

    #[test]
    fn test_inside_is_untouched() {
        let result = bounce_in_bounds(
            Vec2::new(400.0, 300.0),
            Vec2::new(80.0, 90.0),
            Vec2::new(20.0, 25.0),
            BOUNDS,
        );
        assert!(!result.hit);
        assert_eq!(result.position, Vec2::new(400.0, 300.0));
        assert_eq!(result.velocity, Vec2::new(80.0, 90.0));
    }

    #[test]
    fn test_clamp_narrow_axis() {
        let bounds = Vec2::new(30.0, 600.0);
        let clamped = clamp_in_bounds(Vec2::new(5.0, 5.0), Vec2::splat(50.0), bounds);
        assert_eq!(clamped, Vec2::new(15.0, 25.0));
    }
}
