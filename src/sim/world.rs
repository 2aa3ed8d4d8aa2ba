//! Per-session world counters and speeds

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Score, lives, level and the speeds they drive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Background scroll rate, also the per-step leftward shift of every obstacle
    pub scroll_speed: f32,
    /// Horizontal velocity handed to newly spawned obstacles (negative = leftward)
    pub obstacle_speed: f32,
    /// Cadence of the difficulty timer (one spawn per firing)
    pub spawn_interval_ms: u64,
    /// Accumulated background tile offset
    pub background_offset: f32,
}

impl WorldState {
    /// Fresh counters for a session starting with `lives`
    pub fn new(settings: &Settings, lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            level: 0,
            scroll_speed: settings.initial_scroll_speed,
            obstacle_speed: settings.initial_obstacle_speed,
            spawn_interval_ms: settings.difficulty_interval_ms,
            background_offset: 0.0,
        }
    }

    pub fn tick_score(&mut self) {
        self.score += 1;
    }

    /// Level up: scroll faster and send new obstacles in faster.
    /// The caller spawns the obstacle that goes with it.
    pub fn tick_difficulty(&mut self, settings: &Settings) {
        self.level += 1;
        self.scroll_speed += settings.scroll_speed_step;
        self.obstacle_speed += settings.obstacle_speed_step;
    }

    /// Take one life, returning how many remain
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn scroll_background(&mut self) {
        self.background_offset += self.scroll_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_uses_settings() {
        let settings = Settings::default();
        let world = WorldState::new(&settings, 2);
        assert_eq!(world.lives, 2);
        assert_eq!(world.score, 0);
        assert_eq!(world.level, 0);
        assert_eq!(world.scroll_speed, 1.5);
        assert_eq!(world.obstacle_speed, -100.0);
        assert_eq!(world.spawn_interval_ms, 10_000);
    }

    #[test]
    fn test_difficulty_moves_level_and_speeds_together() {
        let settings = Settings::default();
        let mut world = WorldState::new(&settings, 3);

        world.tick_difficulty(&settings);
        assert_eq!(world.level, 1);
        assert_eq!(world.scroll_speed, 2.0);
        assert_eq!(world.obstacle_speed, -130.0);

        world.tick_difficulty(&settings);
        assert_eq!(world.level, 2);
        assert_eq!(world.scroll_speed, 2.5);
        assert_eq!(world.obstacle_speed, -160.0);
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut world = WorldState::new(&Settings::default(), 1);
        assert_eq!(world.lose_life(), 0);
        assert_eq!(world.lose_life(), 0);
    }

    #[test]
    fn test_scroll_background_accumulates() {
        let mut world = WorldState::new(&Settings::default(), 3);
        world.scroll_background();
        world.scroll_background();
        assert_eq!(world.background_offset, 3.0);
    }
}
