//! Dodge Runner entry point
//!
//! Native build runs headless: a simple autopilot plays through every life,
//! restarting after each crash, and the final frame is printed as JSON.
//! Pass a settings JSON file as the first argument to override the defaults.

use dodge_runner::consts::*;
use dodge_runner::sim::{Game, GameEvent, HeldIntents, SessionPhase};
use dodge_runner::{AudioManager, Settings};

/// Stop after this much simulated time even if lives remain
const MAX_RUN_SECS: f32 = 600.0;
/// The autopilot flaps whenever the runner sinks below this height
const CRUISE_Y: f32 = 360.0;
/// How far ahead the autopilot looks for obstacles
const LOOKAHEAD: f32 = 220.0;

fn main() {
    env_logger::init();
    log::info!("Dodge Runner (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut audio = AudioManager::from_settings(&settings);
    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut elapsed = 0.0;
    while elapsed < MAX_RUN_SECS {
        game.set_held(autopilot(&game));
        game.update(SIM_DT);
        elapsed += SIM_DT;

        let events = game.drain_events();
        audio.handle_events(&events);
        for event in &events {
            if let GameEvent::GameOver { score, final_game } = event {
                println!(
                    "Attempt {} over: score {}{}",
                    game.session().attempt() + 1,
                    score,
                    if *final_game { " (no more lives)" } else { "" }
                );
            }
        }

        match game.session().phase() {
            SessionPhase::Playing => {}
            SessionPhase::GameOverRetryable => game.request_restart(),
            SessionPhase::GameOverFinal => break,
        }
    }

    log::info!(
        "Finished after {:.1}s simulated, {} ticks, last session ran {} ms",
        elapsed,
        game.ticks(),
        game.session().elapsed_ms()
    );
    match game.snapshot().to_json() {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize final frame: {}", err),
    }
}

/// Hold altitude and slide away from the nearest obstacle on our line
fn autopilot(game: &Game) -> HeldIntents {
    let session = game.session();
    let player = session.player();

    let threat = session
        .obstacles()
        .iter()
        .filter(|o| {
            let ahead = o.pos.x - player.pos.x;
            ahead > -o.width() && ahead < LOOKAHEAD && (o.pos.y - player.pos.y).abs() < 60.0
        })
        .min_by(|a, b| {
            a.pos
                .x
                .partial_cmp(&b.pos.x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut held = HeldIntents {
        up: player.pos.y > CRUISE_Y,
        ..Default::default()
    };
    if let Some(obstacle) = threat {
        // Climb over low obstacles, otherwise back away from it
        if obstacle.pos.y > player.pos.y && player.pos.y > 150.0 {
            held.up = true;
        } else {
            held.left = true;
        }
    }
    held
}
