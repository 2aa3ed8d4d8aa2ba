//! Dodge Runner - An endless-runner game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (timers, world state, obstacles, game state machine)
//! - `audio`: Sound effect triggers handed to the audio collaborator
//! - `snapshot`: Per-frame render outputs handed to the rendering collaborator
//! - `settings`: Data-driven game balance

pub mod audio;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use audio::{AudioManager, SoundEffect};
pub use settings::Settings;
pub use snapshot::RenderSnapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the host render loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame we are willing to catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Scene dimensions
    pub const WORLD_WIDTH: f32 = 1420.0;
    pub const WORLD_HEIGHT: f32 = 650.0;

    /// Obstacles enter (and re-enter) at the right edge of the scene
    pub const RIGHT_BOUND: f32 = WORLD_WIDTH;
    /// Vertical band for freshly spawned obstacles (inclusive)
    pub const SPAWN_Y_MIN: i32 = 100;
    pub const SPAWN_Y_MAX: i32 = 550;
    /// Vertical band for recycled obstacles (inclusive, wider than spawn)
    pub const RECYCLE_Y_MIN: i32 = 100;
    pub const RECYCLE_Y_MAX: i32 = 600;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 700.0;
    pub const PLAYER_START_Y: f32 = 200.0;
    pub const PLAYER_SIZE: f32 = 28.0;
    /// Upward impulse applied by the Up intent (negative = up)
    pub const PLAYER_JUMP_VELOCITY: f32 = -200.0;
    /// Horizontal speed applied by Left/Right intents
    pub const PLAYER_RUN_SPEED: f32 = 180.0;
    /// Fraction of vertical speed kept when bouncing off the world bounds
    pub const PLAYER_BOUNCE: f32 = 0.6;

    /// Downward acceleration for the player (pixels/s²)
    pub const GRAVITY: f32 = 300.0;

    /// Platforms: a 400x32 ground tile scaled 5x2, one at the floor, one at the ceiling
    pub const PLATFORM_WIDTH: f32 = 400.0 * 5.0;
    pub const PLATFORM_HEIGHT: f32 = 32.0 * 2.0;
    pub const FLOOR_PLATFORM_CENTER: (f32, f32) = (400.0, 600.0);
    pub const CEILING_PLATFORM_CENTER: (f32, f32) = (400.0, 10.0);
}

/// Uniform integer in `[min, max]` as a float coordinate
#[inline]
pub fn random_coord<R: rand::Rng>(rng: &mut R, min: i32, max: i32) -> f32 {
    rng.random_range(min..=max) as f32
}

