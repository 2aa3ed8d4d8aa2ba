//! Render outputs for one frame
//!
//! Everything the rendering collaborator needs, copied out of the session so
//! the host never has to hold a borrow on it while drawing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameSession, ObstacleKind, SessionPhase};

/// One obstacle sprite to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSprite {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: SessionPhase,
    pub score_text: String,
    pub lives_text: String,
    pub level_text: String,
    /// Empty while playing
    pub game_over_text: String,
    /// Empty while playing
    pub final_score_text: String,
    pub player_pos: Vec2,
    pub player_tinted: bool,
    pub obstacles: Vec<ObstacleSprite>,
    /// Horizontal tile offset of the scrolling background
    pub background_offset: f32,
    /// Restart button is live (game over with lives left)
    pub restart_enabled: bool,
}

impl RenderSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let hud = session.hud();
        let player = session.player();
        let world = session.world();

        Self {
            phase: session.phase(),
            score_text: hud.score.clone(),
            lives_text: hud.lives.clone(),
            level_text: hud.level.clone(),
            game_over_text: hud.game_over.clone(),
            final_score_text: hud.final_score.clone(),
            player_pos: player.pos,
            player_tinted: player.tinted,
            obstacles: session
                .obstacles()
                .iter()
                .map(|o| ObstacleSprite {
                    id: o.id,
                    kind: o.kind,
                    pos: o.pos,
                })
                .collect(),
            background_offset: world.background_offset,
            restart_enabled: session.phase() == SessionPhase::GameOverRetryable && world.lives > 0,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
