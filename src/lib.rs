//! Fluffy Hop - a one-button side-scrolling flyer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, session state machine)
//! - `clock`: Fixed-step accumulator that decouples real frame time from simulation ticks
//! - `config`: Data-driven game balance with validation
//! - `cues`: Maps simulation events to presentation cues for the app shell
//! - `autopilot`: Demo controller that plays the game

pub mod autopilot;
pub mod clock;
pub mod config;
pub mod cues;
pub mod sim;

pub use clock::FixedStep;
pub use config::{ConfigError, SessionConfig};
pub use sim::{GameEvent, GameSession, SessionState};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; physics constants are per-tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Reference playfield dimensions
    pub const SCREEN_WIDTH: f32 = 289.0;
    pub const SCREEN_HEIGHT: f32 = 511.0;
    /// Height of the ground strip; its top is the ground plane
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Flyer defaults
    pub const FLYER_WIDTH: f32 = 44.0;
    pub const FLYER_HEIGHT: f32 = 34.0;
    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = -0.15;
    /// Upward velocity set by a flap, units/tick
    pub const FLAP_IMPULSE: f32 = 3.0;
    /// Terminal fall speed, units/tick
    pub const MAX_FALL_SPEED: f32 = 10.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_HEIGHT: f32 = 320.0;
    pub const GAP_MIN: f32 = 80.0;
    pub const GAP_MAX: f32 = 180.0;
    /// Band the gap center is drawn from
    pub const GAP_BAND_MIN: f32 = 200.0;
    pub const GAP_BAND_MAX: f32 = 400.0;
    /// Extra room a gap must leave above the flyer's height
    pub const GAP_CLEARANCE: f32 = 20.0;

    /// Scroll speed at score 0 (negative = leftward), units/tick
    pub const BASE_SCROLL_SPEED: f32 = -2.0;
    /// Speed ramps up every this many points
    pub const SPEED_STEP_EVERY: u32 = 10;
    pub const SPEED_STEP_AMOUNT: f32 = 1.0;
    /// Scroll speed magnitude cap (must stay below obstacle width)
    pub const MAX_SCROLL_SPEED: f32 = 12.0;

    /// Final scores above this trigger an interstitial ad in the shell
    pub const AD_SCORE_THRESHOLD: u32 = 5;
}
