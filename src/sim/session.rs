//! The game session
//!
//! One explicitly owned value holding the flyer, the obstacle pairs, the score and the
//! state machine. The app shell drives it with `tick`/`advance` and `on_activate`, and
//! reads it back through snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::DifficultyRamp;
use super::kinematics::{Flyer, Physics};
use super::obstacle::{GapLayout, ObstaclePair};
use super::state::{ObstacleView, SessionSnapshot, SessionState};
use crate::clock::FixedStep;
use crate::config::{ConfigError, SessionConfig};

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) config: SessionConfig,
    /// Playfield size; x is also where pairs re-enter, y is the ceiling
    pub(super) screen: Vec2,
    pub(super) seed: u64,
    pub(super) rng: Pcg32,
    pub(super) physics: Physics,
    pub(super) ramp: DifficultyRamp,
    pub(super) gaps: GapLayout,
    pub(super) state: SessionState,
    pub(super) flyer: Flyer,
    pub(super) obstacles: Vec<ObstaclePair>,
    pub(super) score: u32,
    pub(super) scroll_speed: f32,
    /// Boolean, not a counter: several activations before a tick flap once
    pub(super) flap_requested: bool,
    /// Ticks left in the terminated state
    pub(super) terminal_ticks: u32,
    pub(super) time_ticks: u64,
    pub(super) clock: FixedStep,
}

impl GameSession {
    /// Validate the config and build an idle session with a seeded obstacle layout
    pub fn new(
        screen_width: f32,
        screen_height: f32,
        config: SessionConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let screen = Vec2::new(screen_width, screen_height);
        config.validate(screen)?;

        let physics = Physics {
            gravity: config.gravity,
            flap_impulse: config.flap_impulse,
            max_fall_speed: config.max_fall_speed,
        };
        let ramp = DifficultyRamp {
            base_speed: config.base_scroll_speed,
            step_every: config.speed_step_every,
            step_amount: config.speed_step_amount,
            max_speed: config.max_scroll_speed,
        };
        let gaps = GapLayout {
            band: config.obstacle_gap_band,
            range: config.obstacle_gap_range,
        };
        let flyer = Flyer::new(Self::flyer_start(screen), config.flyer_size());

        let mut session = Self {
            screen,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            physics,
            ramp,
            gaps,
            state: SessionState::Idle,
            flyer,
            obstacles: Vec::with_capacity(config.obstacle_count as usize),
            score: 0,
            scroll_speed: config.base_scroll_speed,
            flap_requested: false,
            terminal_ticks: 0,
            time_ticks: 0,
            clock: FixedStep::default(),
            config,
        };
        session.reset();

        log::info!(
            "Session created: {}x{} playfield, {} obstacle pair(s), seed {}",
            screen_width,
            screen_height,
            session.obstacles.len(),
            seed
        );
        Ok(session)
    }

    fn flyer_start(screen: Vec2) -> Vec2 {
        Vec2::new(screen.x / 5.0, screen.y / 2.0)
    }

    /// Put everything back to the start-of-run layout. Leaves `state` alone.
    pub(super) fn reset(&mut self) {
        self.flyer = Flyer::new(Self::flyer_start(self.screen), self.config.flyer_size());
        self.score = 0;
        self.scroll_speed = self.ramp.speed_for(0);
        self.flap_requested = false;
        self.terminal_ticks = 0;

        let size = self.config.obstacle_size();
        let spacing = self.config.obstacle_spacing;
        self.obstacles.clear();
        for i in 0..self.config.obstacle_count {
            let (center, height) = self.gaps.sample(&mut self.rng);
            let x = self.screen.x + i as f32 * spacing;
            self.obstacles.push(ObstaclePair::new(x, center, height, size));
        }
    }

    /// Where a pair leaving the screen re-enters: the right edge, or one spacing
    /// behind the rightmost other pair if that is further right.
    pub(super) fn recycle_x(&self, index: usize) -> f32 {
        let spacing = self.config.obstacle_spacing;
        self.obstacles
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, o)| o.x + spacing)
            .fold(self.screen.x, f32::max)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Bottom-left corner of the flyer's box
    pub fn flyer_position(&self) -> Vec2 {
        self.flyer.pos
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn obstacles(&self) -> &[ObstaclePair] {
        &self.obstacles
    }

    pub fn obstacle_positions(&self) -> Vec<ObstacleView> {
        self.obstacles.iter().map(ObstacleView::from).collect()
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn difficulty(&self) -> &DifficultyRamp {
        &self.ramp
    }

    /// Height of the ground plane
    pub fn ground_y(&self) -> f32 {
        self.config.ground_height
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Fraction of a tick pending in the frame clock
    pub fn interpolation_alpha(&self) -> f32 {
        self.clock.alpha()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            score: self.score,
            flyer: self.flyer.pos,
            flyer_velocity: self.flyer.vel_y,
            obstacles: self.obstacle_positions(),
            scroll_speed: self.scroll_speed,
            time_ticks: self.time_ticks,
        }
    }
}
