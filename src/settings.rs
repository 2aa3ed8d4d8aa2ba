//! Game settings and balance
//!
//! Loaded from a JSON file on native; any missing field falls back to the default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{ObstacleKind, SimError};

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed for reproducible obstacle kinds and heights
    pub seed: u64,

    // === Lives & timers ===
    pub starting_lives: u32,
    /// Score timer cadence
    pub score_interval_ms: u64,
    /// Difficulty timer cadence (one level and one obstacle per firing)
    pub difficulty_interval_ms: u64,

    // === Difficulty curve ===
    pub initial_scroll_speed: f32,
    /// Negative = leftward
    pub initial_obstacle_speed: f32,
    pub scroll_speed_step: f32,
    pub obstacle_speed_step: f32,

    // === Obstacles ===
    pub obstacle_kinds: Vec<ObstacleKind>,
    /// Optional cap on live obstacles. `None` = grow by one per level, unbounded.
    pub max_obstacles: Option<usize>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,

            starting_lives: 3,
            score_interval_ms: 1000,
            difficulty_interval_ms: 10_000,

            initial_scroll_speed: 1.5,
            initial_obstacle_speed: -100.0,
            scroll_speed_step: 0.5,
            obstacle_speed_step: -30.0,

            obstacle_kinds: ObstacleKind::ALL.to_vec(),
            max_obstacles: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| SimError::Configuration(format!("invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SimError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimError::Configuration(format!("cannot serialize settings: {}", e)))
    }

    /// Reject settings that would break the game's invariants
    pub fn validate(&self) -> Result<(), SimError> {
        let problem = if self.starting_lives == 0 {
            Some("starting_lives must be at least 1")
        } else if self.obstacle_kinds.is_empty() {
            Some("obstacle_kinds must not be empty")
        } else if self.score_interval_ms == 0 || self.difficulty_interval_ms == 0 {
            Some("timer intervals must be positive")
        } else if self.initial_scroll_speed <= 0.0 {
            Some("initial_scroll_speed must be positive")
        } else if self.initial_obstacle_speed >= 0.0 {
            Some("initial_obstacle_speed must be negative (leftward)")
        } else if self.scroll_speed_step < 0.0 || self.obstacle_speed_step > 0.0 {
            Some("difficulty steps must not slow the game down")
        } else if self.max_obstacles == Some(0) {
            Some("max_obstacles must be at least 1 when set")
        } else {
            None
        };

        match problem {
            Some(msg) => Err(SimError::Configuration(msg.to_string())),
            None => Ok(()),
        }
    }
}
