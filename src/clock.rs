//! Fixed-step accumulator
//!
//! Physics constants are expressed per tick, so real frame time is never fed into the
//! simulation directly. Frames add elapsed time here and run however many whole ticks fit.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            max_frame_dt: MAX_FRAME_DT,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's elapsed seconds and return how many ticks to run.
    ///
    /// Negative or NaN durations count as zero. If the backlog exceeds `max_substeps`
    /// the remainder is dropped rather than carried into the next frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.max(0.0).min(self.max_frame_dt);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "Dropping {:.1} ms of simulation backlog",
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Fraction of a tick left in the accumulator (for render interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
