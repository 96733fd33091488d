//! Fixed-timestep driver for the headless host
//!
//! Plays the adapter role a real engine would: samples input each frame,
//! steps physics, and forwards overlaps to the controller in program order.

use glam::Vec2;

use super::headless::HeadlessHost;
use crate::consts::SIM_DT;
use crate::sim::{DirectionalInput, EntityHandle, Outcome, RoundController, RoundState};

/// Input source that plays the game: chase the nearest coin, back away
/// from enemies that get too close
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Enemies closer than this take priority over coins
    pub danger_radius: f32,
    /// Ignore axis offsets smaller than this (prevents jitter)
    pub deadzone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            danger_radius: 90.0,
            deadzone: 4.0,
        }
    }
}

impl Autopilot {
    /// Arrow key state for this frame
    pub fn sample(
        &self,
        host: &HeadlessHost,
        state: &RoundState,
        player: EntityHandle,
    ) -> DirectionalInput {
        let Some(me) = host.position(player) else {
            return DirectionalInput::default();
        };

        let threat = nearest(host, me, state.live_enemies())
            .filter(|enemy| enemy.distance(me) < self.danger_radius);

        let heading = match threat {
            Some(enemy) => me - enemy,
            None => match nearest(host, me, state.live_coins()) {
                Some(coin) => coin - me,
                None => Vec2::ZERO,
            },
        };

        DirectionalInput {
            up: heading.y < -self.deadzone,
            down: heading.y > self.deadzone,
            left: heading.x < -self.deadzone,
            right: heading.x > self.deadzone,
        }
    }
}

/// Closest live body position to `me`
fn nearest(
    host: &HeadlessHost,
    me: Vec2,
    handles: impl Iterator<Item = EntityHandle>,
) -> Option<Vec2> {
    handles
        .filter_map(|h| host.position(h))
        .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))
}

/// Run frames until the round ends or `max_frames` is reached. Returns the
/// terminal outcome, or `Continue` if the cap was hit first.
pub fn run_round(
    controller: &mut RoundController<HeadlessHost>,
    max_frames: u32,
    autopilot: Option<&Autopilot>,
) -> Outcome {
    for frame in 0..max_frames {
        let input = autopilot
            .map(|pilot| pilot.sample(controller.host(), controller.state(), controller.player()))
            .unwrap_or_default();

        // Rejections are logged by the controller
        if controller.on_frame(input).is_err() && controller.outcome().is_terminal() {
            return controller.outcome();
        }

        let overlaps = controller.host_mut().step(SIM_DT);
        for overlap in overlaps {
            match controller.on_overlap(overlap) {
                Ok(outcome) if outcome.is_terminal() => {
                    log::debug!("Round {} decided on frame {}", controller.round(), frame);
                    return outcome;
                }
                Ok(_) | Err(_) => {}
            }
        }
    }

    log::info!(
        "Round {} still running after {} frames",
        controller.round(),
        max_frames
    );
    controller.outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{SceneHost, ShapeSpec};
    use crate::sim::SpawnPlan;

    fn still(x: f32, y: f32) -> SpawnPlan {
        SpawnPlan {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
        }
    }

    #[test]
    fn test_autopilot_chases_coin() {
        let mut host = HeadlessHost::new();
        host.set_world_bounds(800.0, 600.0);
        let player = host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        let coin = host.create_shape(&ShapeSpec::coin(&still(600.0, 100.0)));
        let enemy = host.create_shape(&ShapeSpec::enemy(&still(100.0, 500.0)));
        let state = RoundState::new(3, [coin], [enemy]);

        let input = Autopilot::default().sample(&host, &state, player);
        assert_eq!(
            input,
            DirectionalInput {
                up: true,
                right: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_autopilot_flees_close_enemy() {
        let mut host = HeadlessHost::new();
        host.set_world_bounds(800.0, 600.0);
        let player = host.create_shape(&ShapeSpec::player(Vec2::new(400.0, 300.0)));
        let coin = host.create_shape(&ShapeSpec::coin(&still(600.0, 300.0)));
        let enemy = host.create_shape(&ShapeSpec::enemy(&still(450.0, 300.0)));
        let state = RoundState::new(3, [coin], [enemy]);

        let input = Autopilot::default().sample(&host, &state, player);
        assert_eq!(
            input,
            DirectionalInput {
                left: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_autopilot_without_player_is_idle() {
        let host = HeadlessHost::new();
        let state = RoundState::new(3, [], []);
        let input = Autopilot::default().sample(&host, &state, EntityHandle(1));
        assert_eq!(input, DirectionalInput::default());
    }

    #[test]
    fn test_idle_round_hits_frame_cap() {
        let arena = Vec2::new(1080.0, 680.0);
        let mut controller = RoundController::with_seed(HeadlessHost::new(), arena, 4);
        controller.on_pause_requested().unwrap();

        assert_eq!(run_round(&mut controller, 50, None), Outcome::Continue);
        assert_eq!(controller.host().steps(), 0, "paused scene never steps");
    }
}
