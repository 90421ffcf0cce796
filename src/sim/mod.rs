//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are per tick)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies; outcomes are returned as events

pub mod collision;
pub mod difficulty;
pub mod input;
pub mod kinematics;
pub mod obstacle;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionKind, collides, detect};
pub use difficulty::DifficultyRamp;
pub use input::{Activation, dispatch};
pub use kinematics::{Flyer, Physics, integrate};
pub use obstacle::{GapLayout, ObstaclePair};
pub use session::GameSession;
pub use state::{GameEvent, ObstacleView, SessionSnapshot, SessionState};
