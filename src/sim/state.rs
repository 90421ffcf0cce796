//! Session state, events, and read-only views for renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::obstacle::ObstaclePair;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Start prompt shown, simulation frozen
    Idle,
    /// Active gameplay
    Running,
    /// Crashed; held only while a game-over pause is configured
    Terminated,
}

/// Outcomes reported to the app shell (audio, prompt, ads, score label)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Run began, hide the start prompt
    Started,
    Flapped,
    /// New score after passing an obstacle
    Scored(u32),
    Collided(CollisionKind),
    /// Carries the score the run ended with
    GameOver(u32),
    /// Back at the start prompt with a fresh layout
    SessionReset,
}

/// Obstacle pair as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_center: f32,
    pub gap_height: f32,
}

impl From<&ObstaclePair> for ObstacleView {
    fn from(pair: &ObstaclePair) -> Self {
        Self {
            x: pair.x,
            gap_center: pair.gap_center,
            gap_height: pair.gap_height,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub score: u32,
    pub flyer: Vec2,
    pub flyer_velocity: f32,
    pub obstacles: Vec<ObstacleView>,
    pub scroll_speed: f32,
    pub time_ticks: u64,
}
