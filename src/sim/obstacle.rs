//! Obstacle entities and the pool that spawns and recycles them
//!
//! Obstacles are never destroyed. Once one scrolls off the left edge it is
//! moved back to the right edge at a new height. By default the pool grows by
//! one obstacle per difficulty tick for the whole session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use crate::consts::*;
use crate::random_coord;

/// Obstacle sprite types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[serde(rename = "obstacle1")]
    FireBall,
    #[serde(rename = "obstacle2")]
    Dynamite,
    #[serde(rename = "obstacle3")]
    FireArrow,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::FireBall,
        ObstacleKind::Dynamite,
        ObstacleKind::FireArrow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::FireBall => "obstacle1",
            ObstacleKind::Dynamite => "obstacle2",
            ObstacleKind::FireArrow => "obstacle3",
        }
    }

    /// Sprite size in pixels (width, height)
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::FireBall => Vec2::new(40.0, 40.0),
            ObstacleKind::Dynamite => Vec2::new(30.0, 50.0),
            ObstacleKind::FireArrow => Vec2::new(80.0, 20.0),
        }
    }
}

/// An obstacle entity (position is the sprite center)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    /// Set once at spawn from the world's obstacle speed; no gravity
    pub vel_x: f32,
}

impl Obstacle {
    pub fn width(&self) -> f32 {
        self.kind.size().x
    }

    /// Fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -self.width()
    }
}

/// All obstacles of one session
#[derive(Debug, Clone)]
pub struct ObstaclePool {
    obstacles: Vec<Obstacle>,
    kinds: Vec<ObstacleKind>,
    /// `None` keeps the classic behavior: one more obstacle per difficulty tick, forever
    capacity: Option<usize>,
    rng: Pcg32,
    next_id: u32,
}

impl ObstaclePool {
    pub fn new(kinds: Vec<ObstacleKind>, capacity: Option<usize>, seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            kinds,
            capacity,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Fails when there is no kind to pick from
    pub fn ensure_spawnable(&self) -> Result<(), SimError> {
        if self.kinds.is_empty() {
            return Err(SimError::Configuration(
                "cannot spawn an obstacle: no obstacle kinds configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Spawn one obstacle of a random kind at the right edge.
    ///
    /// Returns the new obstacle's id, or `None` when a configured cap is reached.
    pub fn spawn(&mut self, obstacle_speed: f32) -> Result<Option<u32>, SimError> {
        self.ensure_spawnable()?;
        if let Some(cap) = self.capacity {
            if self.obstacles.len() >= cap {
                log::debug!("Obstacle pool at capacity ({}), skipping spawn", cap);
                return Ok(None);
            }
        }

        let kind = self.kinds[self.rng.random_range(0..self.kinds.len())];
        let y = random_coord(&mut self.rng, SPAWN_Y_MIN, SPAWN_Y_MAX);
        let id = self.next_id;
        self.next_id += 1;

        self.obstacles.push(Obstacle {
            id,
            kind,
            pos: Vec2::new(RIGHT_BOUND, y),
            vel_x: obstacle_speed,
        });
        log::debug!("Spawned {} #{} at y={}", kind.as_str(), id, y);
        Ok(Some(id))
    }

    /// Shift every obstacle left by the scroll speed, recycling any that left the screen.
    ///
    /// Returns the number of obstacles recycled this step.
    pub fn advance(&mut self, scroll_speed: f32) -> usize {
        let mut recycled = 0;
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= scroll_speed;

            if obstacle.is_offscreen() {
                obstacle.pos.x = RIGHT_BOUND;
                obstacle.pos.y = random_coord(&mut self.rng, RECYCLE_Y_MIN, RECYCLE_Y_MAX);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }
}
