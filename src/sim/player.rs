//! Player entity and intent handling
//!
//! The player only receives velocity commands here. Gravity, bounce and
//! position integration belong to the physics step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A discrete movement signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Up,
    Right,
    Left,
    None,
}

impl Intent {
    /// Held intents are checked in this order; the first one held wins
    pub const PRIORITY: [Intent; 3] = [Intent::Up, Intent::Right, Intent::Left];
}

/// Input state polled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldIntents {
    pub up: bool,
    pub left: bool,
    pub right: bool,
    /// On-screen "move up" button; same effect as Up
    pub pointer_up: bool,
}

impl HeldIntents {
    pub fn is_held(&self, intent: Intent) -> bool {
        match intent {
            Intent::Up => self.up || self.pointer_up,
            Intent::Right => self.right,
            Intent::Left => self.left,
            Intent::None => true,
        }
    }

    /// Pick the single intent to apply this frame
    pub fn resolve(&self) -> Intent {
        Intent::PRIORITY
            .into_iter()
            .find(|&intent| self.is_held(intent))
            .unwrap_or(Intent::None)
    }
}

/// The player's runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Sprite center
    pub pos: Vec2,
    pub vel: Vec2,
    pub alive: bool,
    /// Red tint shown after a crash
    pub tinted: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            alive: true,
            tinted: false,
        }
    }
}

impl Player {
    pub fn size(&self) -> Vec2 {
        Vec2::splat(PLAYER_SIZE)
    }

    /// Turn an intent into a velocity command
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Up => self.vel.y = PLAYER_JUMP_VELOCITY,
            Intent::Right => self.vel.x = PLAYER_RUN_SPEED,
            Intent::Left => self.vel.x = -PLAYER_RUN_SPEED,
            Intent::None => self.vel.x = 0.0,
        }
    }

    /// Crash: tint red and stop counting as alive
    pub fn crash(&mut self) {
        self.tinted = true;
        self.alive = false;
    }
}
