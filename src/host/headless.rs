//! Headless scene host with minimal arcade physics
//!
//! Integrates velocities, keeps bodies inside the world bounds and reports
//! player overlaps each step. Nothing is drawn; text objects are kept so
//! the HUD can be inspected or printed.

use std::collections::BTreeMap;

use glam::Vec2;

use super::collision::{Aabb, bounce_in_bounds, clamp_in_bounds};
use super::{Overlap, SceneHost, ShapeSpec, TextHandle, TextStyle};
use crate::sim::{EntityHandle, EntityKind};

/// A movable physics body
#[derive(Debug, Clone)]
pub struct Body {
    pub kind: EntityKind,
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub bounce: bool,
    /// Remaining hit-flash time (ms)
    pub flash_ms: f32,
}

impl Body {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }

    /// Still blinking from a recent hit
    pub fn is_flashing(&self) -> bool {
        self.flash_ms > 0.0
    }
}

/// A text object
#[derive(Debug, Clone)]
pub struct Text {
    pub position: Vec2,
    pub content: String,
    pub style: TextStyle,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    bounds: Vec2,
    /// Sorted by handle for deterministic overlap order
    bodies: BTreeMap<EntityHandle, Body>,
    texts: BTreeMap<TextHandle, Text>,
    paused: bool,
    overlays: Vec<String>,
    restart_button: Option<Text>,
    next_entity: u32,
    next_text: u32,
    /// Physics steps taken since the last restart
    steps: u64,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance physics by `dt` seconds and report player overlaps in
    /// handle order. A paused scene does not move.
    pub fn step(&mut self, dt: f32) -> Vec<Overlap> {
        if self.paused {
            return Vec::new();
        }
        self.steps += 1;

        let bounds = self.bounds;
        for (handle, body) in self.bodies.iter_mut() {
            let moved = body.position + body.velocity * dt;
            if body.bounce {
                let result = bounce_in_bounds(moved, body.velocity, body.size, bounds);
                if result.hit {
                    log::trace!("{:?} {} hit a wall at {:?}", body.kind, handle, result.position);
                }
                body.position = result.position;
                body.velocity = result.velocity;
            } else {
                body.position = clamp_in_bounds(moved, body.size, bounds);
            }

            if body.is_flashing() {
                body.flash_ms = (body.flash_ms - dt * 1000.0).max(0.0);
                if !body.is_flashing() {
                    log::trace!("{} flash finished", handle);
                }
            }
        }

        self.overlaps()
    }

    /// Player-vs-coin and player-vs-enemy overlaps at the current positions
    pub fn overlaps(&self) -> Vec<Overlap> {
        let players: Vec<Aabb> = self
            .bodies
            .values()
            .filter(|b| b.kind == EntityKind::Player)
            .map(Body::aabb)
            .collect();

        self.bodies
            .iter()
            .filter(|(_, body)| {
                let bounds = body.aabb();
                players.iter().any(|p| p.overlaps(&bounds))
            })
            .filter_map(|(&handle, body)| match body.kind {
                EntityKind::Coin => Some(Overlap::Coin(handle)),
                EntityKind::Enemy => Some(Overlap::Enemy(handle)),
                EntityKind::Player => None,
            })
            .collect()
    }

    pub fn body(&self, entity: EntityHandle) -> Option<&Body> {
        self.bodies.get(&entity)
    }

    pub fn position(&self, entity: EntityHandle) -> Option<Vec2> {
        self.bodies.get(&entity).map(|b| b.position)
    }

    /// Live bodies in a group
    pub fn count(&self, kind: EntityKind) -> usize {
        self.bodies.values().filter(|b| b.kind == kind).count()
    }

    pub fn text(&self, text: TextHandle) -> Option<&Text> {
        self.texts.get(&text)
    }

    /// Visible text contents in creation order
    pub fn visible_texts(&self) -> impl Iterator<Item = &str> {
        self.texts
            .values()
            .filter(|t| t.visible)
            .map(|t| t.content.as_str())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn overlays(&self) -> &[String] {
        &self.overlays
    }

    pub fn restart_shown(&self) -> bool {
        self.restart_button.is_some()
    }

    pub fn restart_button(&self) -> Option<&Text> {
        self.restart_button.as_ref()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl SceneHost for HeadlessHost {
    fn set_world_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    fn create_shape(&mut self, spec: &ShapeSpec) -> EntityHandle {
        self.next_entity += 1;
        let entity = EntityHandle(self.next_entity);
        self.bodies.insert(
            entity,
            Body {
                kind: spec.kind,
                position: spec.position,
                size: spec.size,
                velocity: spec.velocity,
                bounce: spec.bounce,
                flash_ms: 0.0,
            },
        );
        entity
    }

    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.velocity = velocity;
        }
    }

    fn destroy(&mut self, entity: EntityHandle) {
        self.bodies.remove(&entity);
    }

    fn flash(&mut self, entity: EntityHandle, duration_ms: u32) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            // Fade out and back in, twice
            body.flash_ms = duration_ms as f32 * 4.0;
        }
    }

    fn create_text(&mut self, position: Vec2, content: &str, style: &TextStyle) -> TextHandle {
        self.next_text += 1;
        let text = TextHandle(self.next_text);
        self.texts.insert(
            text,
            Text {
                position,
                content: content.to_string(),
                style: *style,
                visible: true,
            },
        );
        text
    }

    fn set_text(&mut self, text: TextHandle, content: &str) {
        if let Some(t) = self.texts.get_mut(&text) {
            t.content = content.to_string();
        }
    }

    fn set_text_visible(&mut self, text: TextHandle, visible: bool) {
        if let Some(t) = self.texts.get_mut(&text) {
            t.visible = visible;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn launch_overlay(&mut self, name: &str) {
        log::debug!("Overlay {} launched", name);
        self.overlays.push(name.to_string());
    }

    fn show_restart_button(&mut self, position: Vec2, label: &str, style: &TextStyle) {
        self.restart_button = Some(Text {
            position,
            content: label.to_string(),
            style: *style,
            visible: true,
        });
    }

    fn restart(&mut self) {
        log::debug!(
            "Scene restart after {} steps ({} bodies, {} texts)",
            self.steps,
            self.bodies.len(),
            self.texts.len()
        );
        self.bodies.clear();
        self.texts.clear();
        self.overlays.clear();
        self.restart_button = None;
        self.paused = false;
        self.steps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SpawnPlan;

    fn host() -> HeadlessHost {
        let mut host = HeadlessHost::new();
        host.set_world_bounds(800.0, 600.0);
        host
    }

    fn plan(x: f32, y: f32, vx: f32, vy: f32) -> SpawnPlan {
        SpawnPlan {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut host = host();
        let coin = host.create_shape(&ShapeSpec::coin(&plan(400.0, 300.0, 60.0, -80.0)));
        host.step(0.5);
        assert_eq!(host.position(coin), Some(Vec2::new(430.0, 260.0)));
        assert_eq!(host.steps(), 1);
    }

    #[test]
    fn test_enemy_bounces_off_wall() {
        let mut host = host();
        let enemy = host.create_shape(&ShapeSpec::enemy(&plan(790.0, 300.0, 300.0, 0.0)));
        host.step(0.1);
        let body = host.body(enemy).unwrap();
        assert_eq!(body.velocity, Vec2::new(-300.0, 0.0));
        assert_eq!(body.position.x, 792.5);
    }

    #[test]
    fn test_player_stops_at_wall() {
        let mut host = host();
        let player = host.create_shape(&ShapeSpec::player(Vec2::new(30.0, 300.0)));
        host.set_velocity(player, Vec2::new(-500.0, 0.0));
        host.step(0.1);
        let body = host.body(player).unwrap();
        assert_eq!(body.position, Vec2::new(25.0, 300.0));
        assert_eq!(body.velocity, Vec2::new(-500.0, 0.0));
    }

    #[test]
    fn test_overlaps_in_handle_order() {
        let mut host = host();
        host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        let enemy = host.create_shape(&ShapeSpec::enemy(&plan(410.0, 300.0, 0.0, 0.0)));
        let coin = host.create_shape(&ShapeSpec::coin(&plan(390.0, 310.0, 0.0, 0.0)));
        host.create_shape(&ShapeSpec::coin(&plan(100.0, 100.0, 0.0, 0.0)));

        assert_eq!(
            host.step(0.01),
            vec![Overlap::Enemy(enemy), Overlap::Coin(coin)]
        );
    }

    #[test]
    fn test_paused_scene_is_frozen() {
        let mut host = host();
        host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        let coin = host.create_shape(&ShapeSpec::coin(&plan(400.0, 300.0, 50.0, 50.0)));
        host.pause();
        assert!(host.step(0.1).is_empty());
        assert_eq!(host.position(coin), Some(Vec2::new(400.0, 300.0)));
        host.resume();
        assert_eq!(host.step(0.0), vec![Overlap::Coin(coin)]);
    }

    #[test]
    fn test_flash_decays() {
        let mut host = host();
        let player = host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        host.flash(player, 200);
        assert_eq!(host.body(player).unwrap().flash_ms, 800.0);
        host.step(0.5);
        assert!(host.body(player).unwrap().is_flashing());
        host.step(0.5);
        assert!(!host.body(player).unwrap().is_flashing());
    }

    #[test]
    fn test_huge_flash_duration() {
        let mut host = host();
        let player = host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        host.flash(player, u32::MAX);
        assert!(host.body(player).unwrap().flash_ms > u32::MAX as f32);
    }

    #[test]
    fn test_restart_clears_scene() {
        let mut host = host();
        host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        let text = host.create_text(Vec2::ZERO, "hello", &TextStyle::HUD);
        host.show_restart_button(Vec2::ZERO, "Restart", &TextStyle::BUTTON);
        host.pause();
        host.restart();

        assert_eq!(host.count(EntityKind::Player), 0);
        assert!(host.text(text).is_none());
        assert!(!host.restart_shown());
        assert!(host.restart_button().is_none());
        assert!(!host.is_paused());
        // Handles are never reused
        let next = host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        assert_eq!(next, EntityHandle(2));
    }
}
