//! Collision geometry and the life-loss rule
//!
//! Collision is axis-aligned overlap only. A contact carries no gameplay
//! payload beyond "the player hit something"; which body was hit is kept for
//! logging and rendering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::state::SessionPhase;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only touch edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The two static platforms bounding the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformSide {
    Floor,
    Ceiling,
}

/// Reported by the physics step when the player overlaps something solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEvent {
    Platform(PlatformSide),
    Obstacle { id: u32 },
}

impl CollisionEvent {
    pub fn describe(&self) -> String {
        match self {
            CollisionEvent::Platform(PlatformSide::Floor) => "floor platform".to_string(),
            CollisionEvent::Platform(PlatformSide::Ceiling) => "ceiling platform".to_string(),
            CollisionEvent::Obstacle { id } => format!("obstacle #{}", id),
        }
    }
}

/// Decide whether a contact costs a life.
///
/// Any contact while playing does; contacts arriving after the game stopped are stale.
pub fn costs_life(phase: SessionPhase, _event: &CollisionEvent) -> Result<(), SimError> {
    match phase {
        SessionPhase::Playing => Ok(()),
        phase => Err(SimError::StaleEvent {
            event: "collision",
            phase,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(8.0, 8.0), Vec2::splat(10.0));
        let c = Aabb::from_center(Vec2::new(30.0, 0.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contact_while_playing_costs_life() {
        let hit = CollisionEvent::Obstacle { id: 3 };
        assert_eq!(costs_life(SessionPhase::Playing, &hit), Ok(()));
    }

    #[test]
    fn test_contact_after_game_over_is_stale() {
        let hit = CollisionEvent::Platform(PlatformSide::Floor);
        for phase in [SessionPhase::GameOverRetryable, SessionPhase::GameOverFinal] {
            assert_eq!(
                costs_life(phase, &hit),
                Err(SimError::StaleEvent {
                    event: "collision",
                    phase
                })
            );
        }
    }
}
