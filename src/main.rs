//! Coin Rush entry point
//!
//! Plays demo rounds on the headless host. A rendering/physics engine plugs
//! in through `coin_rush::host::SceneHost` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use coin_rush::Settings;
    use coin_rush::host::{Autopilot, HeadlessHost, run_round};
    use coin_rush::sim::{Outcome, RoundController};

    env_logger::init();
    log::info!("Coin Rush (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = match Settings::load(path.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{}; using default settings", err);
            Settings::default()
        }
    };

    let autopilot = settings.autopilot.then(Autopilot::default);
    let mut controller = RoundController::new(HeadlessHost::new(), &settings);
    let arena = controller.arena();
    println!("Seed: {} | Arena: {}x{}", controller.seed(), arena.x, arena.y);

    let (mut wins, mut losses) = (0u32, 0u32);
    for round in 1..=settings.rounds {
        if round > 1 {
            controller.on_restart_requested();
        }

        let outcome = run_round(&mut controller, settings.max_frames, autopilot.as_ref());
        match outcome {
            Outcome::Won(_) => wins += 1,
            Outcome::Lost(_) => losses += 1,
            Outcome::Continue => {}
        }

        match outcome.banner() {
            Some(banner) => println!("Round {}: {}", round, banner),
            None => println!(
                "Round {}: unfinished after {} frames ({})",
                round,
                settings.max_frames,
                controller.state().status_summary().replace('\n', " | ")
            ),
        }
    }

    println!("Won {} / Lost {} / Played {}", wins, losses, settings.rounds);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds embed the library in a host engine; there is no standalone binary
}
