//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Integer-millisecond timers
//! - No rendering, audio or platform dependencies

pub mod clock;
pub mod collision;
pub mod error;
pub mod obstacle;
pub mod physics;
pub mod player;
pub mod state;
pub mod tick;
pub mod world;

pub use clock::{Clock, TimerHandle};
pub use collision::{Aabb, CollisionEvent, PlatformSide, costs_life};
pub use error::SimError;
pub use obstacle::{Obstacle, ObstacleKind, ObstaclePool};
pub use physics::ArcadePhysics;
pub use player::{HeldIntents, Intent, Player};
pub use state::{GameEvent, GameSession, HudText, SessionPhase, TimerKind};
pub use tick::{Game, TickInput, tick};
pub use world::WorldState;
