//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically. Within one tick
//! the order is fixed: restart command, input, physics, collision
//! resolution, background/obstacle scroll, then timers. A crash found by
//! physics therefore stops both the scroll and the timers in the same tick.

use super::error::SimError;
use super::physics::ArcadePhysics;
use super::player::HeldIntents;
use super::state::{GameEvent, GameSession};
use crate::consts::*;
use crate::settings::Settings;
use crate::snapshot::RenderSnapshot;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional keys and the on-screen move-up button
    pub held: HeldIntents,
    /// Restart button pressed (one-shot)
    pub restart: bool,
}

/// Advance the session by one fixed timestep
///
/// Rejected commands and stale events are logged and dropped here.
pub fn tick(session: &mut GameSession, physics: &ArcadePhysics, input: &TickInput, dt: f32) {
    if input.restart {
        match session.restart() {
            Ok(next) => {
                *session = next;
                return;
            }
            Err(err) => log::warn!("Restart ignored: {}", err),
        }
    }

    session.steer(&input.held);

    if !session.physics_paused() {
        let (player, obstacles) = session.bodies_mut();
        let contacts = physics.step(player, obstacles, dt);
        for contact in contacts {
            if let Err(err) = session.handle_collision(contact) {
                log::debug!("{}", err);
            }
        }
    }

    session.scroll();
    session.advance_clock_secs(dt);
}

/// Host-facing game: owns the current session and turns variable frame
/// times into fixed ticks
#[derive(Debug)]
pub struct Game {
    session: GameSession,
    physics: ArcadePhysics,
    accumulator: f32,
    input: TickInput,
    /// Events from every session so far, waiting for the host
    events: Vec<GameEvent>,
    ticks: u64,
}

impl Game {
    pub fn new(settings: Settings) -> Result<Self, SimError> {
        Ok(Self {
            session: GameSession::new(settings)?,
            physics: ArcadePhysics::default(),
            accumulator: 0.0,
            input: TickInput::default(),
            events: Vec::new(),
            ticks: 0,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Total fixed ticks run across all sessions
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Replace the held input state (polled once per frame by the host)
    pub fn set_held(&mut self, held: HeldIntents) {
        self.input.held = held;
    }

    /// Queue the restart button for the next tick
    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Run as many fixed ticks as the elapsed frame time allows
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.session, &self.physics, &self.input, SIM_DT);
            self.events.extend(self.session.drain_events());
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.ticks += 1;

            // Clear one-shot inputs after processing
            self.input.restart = false;
        }

        substeps
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from_session(&self.session)
    }
}
