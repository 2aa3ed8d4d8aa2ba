//! Minimal arcade physics stand-in
//!
//! Integrates player gravity and bounce, moves obstacles along their spawn
//! velocity, keeps the player inside the scene and reports overlaps.
//! Overlap is axis-aligned only; there is no collision response against
//! platforms or obstacles because any contact ends the run.

use glam::Vec2;

use super::collision::{Aabb, CollisionEvent, PlatformSide};
use super::obstacle::ObstaclePool;
use super::player::Player;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct ArcadePhysics {
    /// Downward acceleration applied to the player (obstacles ignore gravity)
    pub gravity: f32,
    /// Velocity kept when bouncing off the scene edges
    pub bounce: f32,
    pub world_size: Vec2,
    pub platforms: Vec<(PlatformSide, Aabb)>,
}

impl Default for ArcadePhysics {
    fn default() -> Self {
        let platform_size = Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT);
        Self {
            gravity: GRAVITY,
            bounce: PLAYER_BOUNCE,
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            platforms: vec![
                (
                    PlatformSide::Floor,
                    Aabb::from_center(FLOOR_PLATFORM_CENTER.into(), platform_size),
                ),
                (
                    PlatformSide::Ceiling,
                    Aabb::from_center(CEILING_PLATFORM_CENTER.into(), platform_size),
                ),
            ],
        }
    }
}

impl ArcadePhysics {
    /// Advance bodies by `dt` seconds and return every contact, platforms first
    pub fn step(
        &self,
        player: &mut Player,
        obstacles: &mut ObstaclePool,
        dt: f32,
    ) -> Vec<CollisionEvent> {
        self.integrate_player(player, dt);

        for obstacle in obstacles.iter_mut() {
            obstacle.pos.x += obstacle.vel_x * dt;
        }

        let player_box = Aabb::from_center(player.pos, player.size());
        let mut contacts = Vec::new();

        for (side, platform) in &self.platforms {
            if player_box.overlaps(platform) {
                contacts.push(CollisionEvent::Platform(*side));
            }
        }
        for obstacle in obstacles.iter() {
            if player_box.overlaps(&Aabb::from_center(obstacle.pos, obstacle.kind.size())) {
                contacts.push(CollisionEvent::Obstacle { id: obstacle.id });
            }
        }

        contacts
    }

    fn integrate_player(&self, player: &mut Player, dt: f32) {
        player.vel.y += self.gravity * dt;
        player.pos += player.vel * dt;

        let half = player.size() * 0.5;
        let min = half;
        let max = self.world_size - half;

        if player.pos.x < min.x {
            player.pos.x = min.x;
            player.vel.x = -player.vel.x * self.bounce;
        } else if player.pos.x > max.x {
            player.pos.x = max.x;
            player.vel.x = -player.vel.x * self.bounce;
        }

        if player.pos.y < min.y {
            player.pos.y = min.y;
            player.vel.y = -player.vel.y * self.bounce;
        } else if player.pos.y > max.y {
            player.pos.y = max.y;
            player.vel.y = -player.vel.y * self.bounce;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::ObstacleKind;

    fn empty_pool() -> ObstaclePool {
        ObstaclePool::new(ObstacleKind::ALL.to_vec(), None, 1)
    }

    #[test]
    fn test_gravity_pulls_player_down() {
        let physics = ArcadePhysics::default();
        let mut player = Player::default();
        let mut pool = empty_pool();

        let contacts = physics.step(&mut player, &mut pool, SIM_DT);
        assert!(contacts.is_empty());
        assert!(player.vel.y > 0.0);
        assert!(player.pos.y > PLAYER_START_Y);
    }

    #[test]
    fn test_falling_player_hits_floor() {
        let physics = ArcadePhysics::default();
        let mut player = Player::default();
        let mut pool = empty_pool();

        let mut hit = None;
        for _ in 0..600 {
            let contacts = physics.step(&mut player, &mut pool, SIM_DT);
            if let Some(first) = contacts.first() {
                hit = Some(*first);
                break;
            }
        }
        assert_eq!(hit, Some(CollisionEvent::Platform(PlatformSide::Floor)));
    }

    #[test]
    fn test_obstacle_moves_with_spawn_velocity() {
        let physics = ArcadePhysics::default();
        let mut player = Player::default();
        let mut pool = empty_pool();
        let id = pool.spawn(-120.0).unwrap().unwrap();

        physics.step(&mut player, &mut pool, 0.5);
        assert_eq!(pool.get(id).unwrap().pos.x, RIGHT_BOUND - 60.0);
    }

    #[test]
    fn test_overlapping_obstacle_reported() {
        let physics = ArcadePhysics::default();
        let mut player = Player::default();
        let mut pool = empty_pool();
        let id = pool.spawn(0.0).unwrap().unwrap();
        pool.get_mut(id).unwrap().pos = player.pos;

        let contacts = physics.step(&mut player, &mut pool, 0.0);
        assert_eq!(contacts, vec![CollisionEvent::Obstacle { id }]);
    }

    #[test]
    fn test_player_bounces_off_left_edge() {
        let physics = ArcadePhysics::default();
        let mut player = Player::default();
        let mut pool = empty_pool();
        player.pos.x = PLAYER_SIZE * 0.5 + 1.0;
        player.vel.x = -180.0;

        physics.step(&mut player, &mut pool, SIM_DT);
        assert_eq!(player.pos.x, PLAYER_SIZE * 0.5);
        assert!((player.vel.x - 108.0).abs() < 0.001);
    }
}
