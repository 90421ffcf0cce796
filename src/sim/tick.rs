//! Fixed timestep simulation tick
//!
//! Per-tick order while running: kinematics, obstacle advance and recycle, scoring,
//! difficulty recompute, collision.

use super::collision::{self, Aabb};
use super::input::{self, Activation};
use super::kinematics;
use super::session::GameSession;
use super::state::{GameEvent, SessionState};

impl GameSession {
    /// Advance the simulation by exactly one tick
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.state {
            SessionState::Idle => return events,
            SessionState::Terminated => {
                self.terminal_ticks = self.terminal_ticks.saturating_sub(1);
                if self.terminal_ticks == 0 {
                    self.return_to_idle(&mut events);
                }
                return events;
            }
            SessionState::Running => {}
        }

        self.time_ticks += 1;

        let impulse = std::mem::take(&mut self.flap_requested);
        self.flyer = kinematics::integrate(self.flyer, &self.physics, impulse);

        let pass_x = self.flyer.pos.x;
        let speed = self.scroll_speed;
        let passes = self
            .obstacles
            .iter_mut()
            .map(|o| o.advance(speed, pass_x))
            .filter(|&passed| passed)
            .count();

        // Recycle only after every pair has moved, so spacing is measured this tick
        for i in 0..self.obstacles.len() {
            if self.obstacles[i].is_off_screen() {
                let x = self.recycle_x(i);
                let (center, height) = self.gaps.sample(&mut self.rng);
                self.obstacles[i].recycle(x, center, height);
            }
        }

        for _ in 0..passes {
            self.score += 1;
            log::debug!("Scored: {}", self.score);
            events.push(GameEvent::Scored(self.score));
        }

        let speed = self.ramp.speed_for(self.score);
        if speed != self.scroll_speed {
            log::info!(
                "Difficulty tier {}: scroll speed {} -> {}",
                self.ramp.tier(self.score),
                self.scroll_speed,
                speed
            );
            self.scroll_speed = speed;
        }

        let boxes: Vec<Aabb> = self.obstacles.iter().flat_map(|o| o.bounds()).collect();
        if let Some(kind) = collision::detect(
            &self.flyer.bounds(),
            &boxes,
            self.config.ground_height,
            self.screen.y,
        ) {
            log::info!("Game over: {:?} at score {}", kind, self.score);
            events.push(GameEvent::Collided(kind));
            events.push(GameEvent::GameOver(self.score));

            self.state = SessionState::Terminated;
            self.terminal_ticks = self.config.game_over_pause_ticks;
            if self.terminal_ticks == 0 {
                self.return_to_idle(&mut events);
            }
        }

        events
    }

    /// Feed real elapsed seconds through the fixed-step clock and run the ticks that fit
    pub fn advance(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let steps = self.clock.accumulate(frame_dt);
        let mut events = Vec::new();
        for _ in 0..steps {
            events.extend(self.tick());
        }
        events
    }

    /// The single player input: start a run from idle, otherwise flap
    pub fn on_activate(&mut self) -> Vec<GameEvent> {
        match input::dispatch(self.state) {
            Activation::Start => {
                self.reset();
                self.clock.reset();
                self.state = SessionState::Running;
                log::info!("Run started (seed {})", self.seed);
                vec![GameEvent::Started]
            }
            Activation::Flap => {
                self.flap_requested = true;
                vec![GameEvent::Flapped]
            }
            Activation::Ignored => Vec::new(),
        }
    }

    fn return_to_idle(&mut self, events: &mut Vec<GameEvent>) {
        self.reset();
        self.state = SessionState::Idle;
        events.push(GameEvent::SessionReset);
    }
}
