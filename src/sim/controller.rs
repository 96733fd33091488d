//! Round lifecycle controller
//!
//! Translates host events into round state changes, consults the outcome
//! evaluator after every coin/enemy event, and drives the host through
//! pause, end-of-round and restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::error::{RoundError, RoundEvent};
use super::input::DirectionalInput;
use super::outcome::{Outcome, evaluate};
use super::spawn::{plan_coins, plan_enemies};
use super::state::{EntityHandle, RoundPhase, RoundState};
use crate::consts::*;
use crate::host::{Overlap, SceneHost, ShapeSpec, TextHandle, TextStyle};
use crate::settings::Settings;

/// Host text objects owned by one round
#[derive(Debug, Clone, Copy)]
struct Hud {
    info: TextHandle,
    paused: TextHandle,
}

/// Everything created when a round begins
struct RoundSetup {
    state: RoundState,
    player: EntityHandle,
    hud: Hud,
}

pub struct RoundController<H: SceneHost> {
    host: H,
    arena: Vec2,
    rng: Pcg32,
    seed: u64,
    state: RoundState,
    player: EntityHandle,
    hud: Hud,
    /// 1-based round counter, bumped on restart
    round: u32,
    outcome: Outcome,
}

impl<H: SceneHost> RoundController<H> {
    /// Start the first round using the configured arena and seed
    pub fn new(host: H, settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(host, settings.arena_size(), seed)
    }

    /// Start the first round with an explicit seed
    pub fn with_seed(mut host: H, arena: Vec2, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let setup = Self::begin_round(&mut host, &mut rng, arena, 1);
        log::info!("Round controller ready (seed {})", seed);

        Self {
            host,
            arena,
            rng,
            seed,
            state: setup.state,
            player: setup.player,
            hud: setup.hud,
            round: 1,
            outcome: Outcome::Continue,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn player(&self) -> EntityHandle {
        self.player
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    /// Verdict of the most recent coin/enemy event this round
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Per-frame movement intent. Suppressed unless running.
    pub fn on_frame(&mut self, input: DirectionalInput) -> Result<Vec2, RoundError> {
        self.ensure_phase(RoundPhase::Running, RoundEvent::Frame)?;

        let velocity = input.movement_intent();
        self.host.set_velocity(self.player, velocity);
        log::trace!("Player velocity {:?}", velocity);
        Ok(velocity)
    }

    pub fn on_overlap(&mut self, overlap: Overlap) -> Result<Outcome, RoundError> {
        match overlap {
            Overlap::Coin(coin) => self.on_coin_overlap(coin),
            Overlap::Enemy(enemy) => self.on_enemy_overlap(enemy),
        }
    }

    /// Player touched a coin
    pub fn on_coin_overlap(&mut self, coin: EntityHandle) -> Result<Outcome, RoundError> {
        self.ensure_phase(RoundPhase::Running, RoundEvent::CoinOverlap)?;

        if !self.state.remove_coin(coin) {
            log::debug!("Coin {} already collected", coin);
            return Ok(evaluate(&self.state));
        }
        self.host.destroy(coin);
        self.state.increase_score();
        self.refresh_info();
        Ok(self.settle())
    }

    /// Player touched an enemy
    pub fn on_enemy_overlap(&mut self, enemy: EntityHandle) -> Result<Outcome, RoundError> {
        self.ensure_phase(RoundPhase::Running, RoundEvent::EnemyOverlap)?;

        if !self.state.remove_enemy(enemy) {
            log::debug!("Enemy {} already removed", enemy);
            return Ok(evaluate(&self.state));
        }
        self.host.destroy(enemy);
        self.state.decrease_health();
        self.host.flash(self.player, HIT_FLASH_MS);
        self.refresh_info();
        Ok(self.settle())
    }

    pub fn on_pause_requested(&mut self) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::Running, RoundEvent::PauseRequested)?;

        self.state.set_phase(RoundPhase::Paused)?;
        self.host.set_text_visible(self.hud.paused, true);
        self.host.pause();
        self.host.launch_overlay(PAUSE_OVERLAY);
        log::info!("Round {} paused", self.round);
        Ok(())
    }

    pub fn on_resume_requested(&mut self) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::Paused, RoundEvent::ResumeRequested)?;

        self.state.set_phase(RoundPhase::Running)?;
        self.host.set_text_visible(self.hud.paused, false);
        self.host.resume();
        log::info!("Round {} resumed", self.round);
        Ok(())
    }

    /// Discrete key press. The pause key toggles pause/resume; other keys
    /// are not bound.
    pub fn on_key_down(&mut self, code: &str) -> Result<(), RoundError> {
        if code != PAUSE_KEY {
            log::trace!("Unbound key {}", code);
            return Ok(());
        }

        match self.state.phase() {
            RoundPhase::Running => self.on_pause_requested(),
            RoundPhase::Paused => self.on_resume_requested(),
            RoundPhase::Ended => Err(self.reject(RoundEvent::KeyDown)),
        }
    }

    /// Throw the current round away and start a fresh one. Accepted in
    /// every phase.
    pub fn on_restart_requested(&mut self) {
        self.host.restart();
        self.round += 1;

        let setup = Self::begin_round(&mut self.host, &mut self.rng, self.arena, self.round);
        self.state = setup.state;
        self.player = setup.player;
        self.hud = setup.hud;
        self.outcome = Outcome::Continue;
    }

    /// Spawn the player, coins, enemies and HUD for a new round
    fn begin_round(host: &mut H, rng: &mut Pcg32, arena: Vec2, round: u32) -> RoundSetup {
        host.set_world_bounds(arena.x, arena.y);

        let half = PLAYER_SIZE / 2.0;
        let start = Vec2::new(PLAYER_START.0, PLAYER_START.1)
            .min(arena - half)
            .max(Vec2::splat(half));
        let player = host.create_shape(&ShapeSpec::player(start));

        let coins: Vec<EntityHandle> = plan_coins(rng, arena.x, arena.y)
            .iter()
            .map(|plan| host.create_shape(&ShapeSpec::coin(plan)))
            .collect();
        let enemies: Vec<EntityHandle> = plan_enemies(rng, arena.x, arena.y)
            .iter()
            .map(|plan| host.create_shape(&ShapeSpec::enemy(plan)))
            .collect();

        log::info!(
            "Round {} started: {} coins, {} enemies, arena {}x{}",
            round,
            coins.len(),
            enemies.len(),
            arena.x,
            arena.y
        );

        let state = RoundState::new(INITIAL_HEALTH, coins, enemies);

        let info = host.create_text(
            Vec2::new(INFO_TEXT_POS.0, INFO_TEXT_POS.1),
            &state.status_summary(),
            &TextStyle::HUD,
        );
        let paused = host.create_text(arena / 2.0, PAUSED_TEXT, &TextStyle::PAUSED);
        host.set_text_visible(paused, false);

        RoundSetup {
            state,
            player,
            hud: Hud { info, paused },
        }
    }

    /// Evaluate after a coin/enemy mutation and end the round on a verdict
    fn settle(&mut self) -> Outcome {
        let outcome = evaluate(&self.state);
        self.outcome = outcome;
        if outcome.is_terminal() {
            self.end_round(outcome);
        }
        outcome
    }

    fn end_round(&mut self, outcome: Outcome) {
        if let Err(err) = self.state.set_phase(RoundPhase::Ended) {
            log::warn!("Ending round {}: {}", self.round, err);
            return;
        }

        let center = self.arena / 2.0;
        self.host.set_text(self.hud.info, PAUSE_HINT);
        if let Some(banner) = outcome.banner() {
            let position = center - Vec2::new(0.0, BANNER_OFFSET_Y);
            self.host.create_text(position, &banner, &TextStyle::BANNER);
        }

        for entity in self.state.clear_entities() {
            self.host.destroy(entity);
        }
        self.host.set_velocity(self.player, Vec2::ZERO);
        self.host.show_restart_button(center, RESTART_LABEL, &TextStyle::BUTTON);

        log::info!("Round {} ended: {:?}", self.round, outcome);
    }

    fn refresh_info(&mut self) {
        let summary = self.state.status_summary();
        self.host.set_text(self.hud.info, &summary);
    }

    fn ensure_phase(&self, expected: RoundPhase, event: RoundEvent) -> Result<(), RoundError> {
        if self.state.phase() == expected {
            Ok(())
        } else {
            Err(self.reject(event))
        }
    }

    /// Build and log an invalid-phase rejection
    fn reject(&self, event: RoundEvent) -> RoundError {
        let err = RoundError::InvalidPhase {
            event,
            phase: self.state.phase(),
        };
        if event == RoundEvent::Frame {
            log::trace!("{}", err);
        } else {
            log::debug!("{}", err);
        }
        err
    }
}
