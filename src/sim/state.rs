//! Game session and its state machine
//!
//! A session owns everything one play-through touches: world counters, the
//! obstacle pool, the player, the two periodic timers and the HUD text.
//! Restarting builds a brand new session that only inherits the lives count.

use serde::{Deserialize, Serialize};

use super::clock::{Clock, TimerHandle};
use super::collision::{self, CollisionEvent};
use super::error::SimError;
use super::obstacle::{ObstacleKind, ObstaclePool};
use super::player::{HeldIntents, Player};
use super::world::WorldState;
use crate::audio::SoundEffect;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Crashed with lives left; restart allowed
    GameOverRetryable,
    /// Crashed with no lives left; nothing more happens
    GameOverFinal,
}

impl SessionPhase {
    pub fn is_playing(self) -> bool {
        self == SessionPhase::Playing
    }

    pub fn is_game_over(self) -> bool {
        !self.is_playing()
    }
}

/// Payload of the two periodic timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    Score,
    Difficulty,
}

/// Things that happened during a session, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    LevelUp { level: u32 },
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    LifeLost { remaining: u32 },
    GameOver { score: u32, final_game: bool },
    PlaySound(SoundEffect),
}

/// Text shown by the HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub score: String,
    pub lives: String,
    pub level: String,
    pub game_over: String,
    pub final_score: String,
}

impl HudText {
    fn new(lives: u32) -> Self {
        Self {
            score: "Score: 0".to_string(),
            lives: format!("Lives: {}", lives),
            level: "level: 0".to_string(),
            game_over: String::new(),
            final_score: String::new(),
        }
    }
}

/// One play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: SessionPhase,
    world: WorldState,
    obstacles: ObstaclePool,
    player: Player,
    clock: Clock<TimerKind>,
    score_timer: TimerHandle,
    difficulty_timer: TimerHandle,
    physics_paused: bool,
    hud: HudText,
    events: Vec<GameEvent>,
    settings: Settings,
    /// 0 for the first session, +1 per restart
    attempt: u32,
}

impl GameSession {
    /// Start the first session of a run
    pub fn new(settings: Settings) -> Result<Self, SimError> {
        settings.validate()?;
        let lives = settings.starting_lives;
        log::info!("New session: {} lives, seed {:#x}", lives, settings.seed);
        Ok(Self::start(settings, lives, 0))
    }

    fn start(settings: Settings, lives: u32, attempt: u32) -> Self {
        let seed = settings
            .seed
            .wrapping_add(u64::from(attempt).wrapping_mul(2654435761));

        let mut clock = Clock::new();
        let score_timer = clock.schedule(settings.score_interval_ms, TimerKind::Score);
        let difficulty_timer =
            clock.schedule(settings.difficulty_interval_ms, TimerKind::Difficulty);

        Self {
            phase: SessionPhase::Playing,
            world: WorldState::new(&settings, lives),
            obstacles: ObstaclePool::new(
                settings.obstacle_kinds.clone(),
                settings.max_obstacles,
                seed,
            ),
            player: Player::default(),
            clock,
            score_timer,
            difficulty_timer,
            physics_paused: false,
            hud: HudText::new(lives),
            events: Vec::new(),
            settings,
            attempt,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn obstacles(&self) -> &ObstaclePool {
        &self.obstacles
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hud(&self) -> &HudText {
        &self.hud
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn physics_paused(&self) -> bool {
        self.physics_paused
    }

    /// Milliseconds of session time seen by the timers
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Whether either periodic timer can still fire
    pub fn timers_active(&self) -> bool {
        self.clock.is_active(self.score_timer) || self.clock.is_active(self.difficulty_timer)
    }

    /// Mutable access for the physics step
    pub fn bodies_mut(&mut self) -> (&mut Player, &mut ObstaclePool) {
        (&mut self.player, &mut self.obstacles)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply this frame's held input to the player. Does nothing once the game is over.
    pub fn steer(&mut self, held: &HeldIntents) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        self.player.apply_intent(held.resolve());
        true
    }

    /// Scroll the background and obstacles, recycling any that left the screen.
    ///
    /// Runs after collisions are resolved, so the crash frame does not scroll.
    pub fn scroll(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }

        self.world.scroll_background();
        let recycled = self.obstacles.advance(self.world.scroll_speed);
        if recycled > 0 {
            log::debug!("Recycled {} obstacle(s)", recycled);
        }
        true
    }

    /// Input then scroll, for hosts that run their own physics in between elsewhere
    pub fn update(&mut self, held: &HeldIntents) -> bool {
        self.steer(held) && self.scroll()
    }

    /// Deliver one timer firing
    pub fn fire_timer(&mut self, kind: TimerKind) -> Result<(), SimError> {
        if !self.phase.is_playing() {
            return Err(SimError::StaleEvent {
                event: match kind {
                    TimerKind::Score => "score tick",
                    TimerKind::Difficulty => "difficulty tick",
                },
                phase: self.phase,
            });
        }

        match kind {
            TimerKind::Score => {
                self.world.tick_score();
                self.hud.score = format!("Score: {}", self.world.score);
                self.events.push(GameEvent::ScoreChanged {
                    score: self.world.score,
                });
            }
            TimerKind::Difficulty => {
                // Fail before touching the world so a bad pool leaves no partial level-up
                self.obstacles.ensure_spawnable()?;

                self.world.tick_difficulty(&self.settings);
                self.hud.level = format!("level:{}", self.world.level);
                log::info!(
                    "Level {}: scroll {} obstacle speed {}",
                    self.world.level,
                    self.world.scroll_speed,
                    self.world.obstacle_speed
                );
                self.events.push(GameEvent::LevelUp {
                    level: self.world.level,
                });

                if let Some(id) = self.obstacles.spawn(self.world.obstacle_speed)? {
                    if let Some(obstacle) = self.obstacles.get(id) {
                        self.events.push(GameEvent::ObstacleSpawned {
                            id,
                            kind: obstacle.kind,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Advance the session clock and apply every timer firing that fell due.
    ///
    /// Late firings are absorbed. Returns the number of ticks applied.
    pub fn advance_clock(&mut self, elapsed_ms: u64) -> usize {
        let fired = self.clock.advance(elapsed_ms);
        self.apply_firings(fired)
    }

    /// Same as [`advance_clock`](Self::advance_clock) with a frame duration in seconds
    pub fn advance_clock_secs(&mut self, dt: f32) -> usize {
        let fired = self.clock.advance_secs(dt);
        self.apply_firings(fired)
    }

    fn apply_firings(&mut self, fired: Vec<TimerKind>) -> usize {
        let mut applied = 0;
        for kind in fired {
            match self.fire_timer(kind) {
                Ok(()) => applied += 1,
                Err(err @ SimError::StaleEvent { .. }) => log::debug!("{}", err),
                Err(err) => log::warn!("{}", err),
            }
        }
        applied
    }

    /// The player hit a platform or an obstacle
    pub fn handle_collision(&mut self, event: CollisionEvent) -> Result<SessionPhase, SimError> {
        collision::costs_life(self.phase, &event)?;
        log::info!("Player hit {}", event.describe());
        Ok(self.lose_life())
    }

    fn lose_life(&mut self) -> SessionPhase {
        let remaining = self.world.lose_life();
        self.hud.lives = format!("Lives: {}", remaining);
        self.events.push(GameEvent::LifeLost { remaining });

        let final_game = remaining == 0;
        self.phase = if final_game {
            SessionPhase::GameOverFinal
        } else {
            SessionPhase::GameOverRetryable
        };

        // Both timers stop before anything else can be delivered
        self.clock.cancel(self.score_timer);
        self.clock.cancel(self.difficulty_timer);

        self.hud.game_over = if final_game {
            "Game Over! No more lives".to_string()
        } else {
            "Game Over!".to_string()
        };
        self.hud.final_score = format!("Total Score: {}", self.world.score);
        self.player.crash();
        self.physics_paused = true;

        self.events.push(GameEvent::PlaySound(SoundEffect::GameOver));
        self.events.push(GameEvent::GameOver {
            score: self.world.score,
            final_game,
        });
        log::info!(
            "Game over ({:?}): score {}, {} lives left",
            self.phase,
            self.world.score,
            remaining
        );
        self.phase
    }

    /// Build the next session, keeping the remaining lives
    pub fn restart(&self) -> Result<GameSession, SimError> {
        match self.phase {
            SessionPhase::GameOverRetryable if self.world.lives > 0 => {
                log::info!(
                    "Restarting with {} lives (attempt {})",
                    self.world.lives,
                    self.attempt + 1
                );
                Ok(Self::start(
                    self.settings.clone(),
                    self.world.lives,
                    self.attempt + 1,
                ))
            }
            phase => Err(SimError::InvalidTransition {
                command: "restart",
                phase,
            }),
        }
    }
}
