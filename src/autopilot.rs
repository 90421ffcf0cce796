//! Demo controller
//!
//! Flaps whenever the flyer sinks toward the bottom of the next gap. Good enough to
//! keep attract-mode runs going for a while; not meant to be unbeatable.

use crate::sim::{GameSession, ObstaclePair, SessionState};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// How far above the gap bottom the flyer may sink before flapping
    pub margin: f32,
    /// Restart automatically from the start prompt
    pub auto_restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            margin: 6.0,
            auto_restart: true,
        }
    }
}

impl Autopilot {
    /// The pair the flyer has to get through next: the nearest one not yet passed,
    /// or the furthest right if all are behind it.
    pub fn next_pair(session: &GameSession) -> Option<&ObstaclePair> {
        let flyer_x = session.flyer_position().x;
        session
            .obstacles()
            .iter()
            .filter(|o| o.trailing_edge() >= flyer_x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .or_else(|| session.obstacles().iter().max_by(|a, b| a.x.total_cmp(&b.x)))
    }

    /// Whether to activate before the next tick
    pub fn wants_activate(&self, session: &GameSession) -> bool {
        match session.state() {
            SessionState::Idle => self.auto_restart,
            SessionState::Terminated => false,
            SessionState::Running => {
                let flyer = session.flyer();
                if flyer.vel_y > 0.0 {
                    return false;
                }
                let floor = match Self::next_pair(session) {
                    Some(pair) => pair.gap_bottom(),
                    None => session.ground_y(),
                };
                flyer.pos.y < floor + self.margin
            }
        }
    }
}
