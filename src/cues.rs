//! Presentation cues
//!
//! The simulation only reports events. This module turns them into what the app shell
//! should do: which sound to play, when to show or hide the start prompt, when to
//! refresh the score label, and when an interstitial ad is due.

use serde::{Deserialize, Serialize};

use crate::consts::AD_SCORE_THRESHOLD;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Flap
    Wing,
    /// Obstacle passed
    Point,
    /// Impact
    Hit,
    /// Run over
    Die,
}

/// One thing the shell should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Sound(SoundEffect),
    ShowPrompt,
    HidePrompt,
    ScoreLabel(u32),
    ShowAd { final_score: u32 },
}

/// Ad display policy: an ad follows a run that scored strictly more than `min_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdPolicy {
    pub min_score: u32,
}

impl Default for AdPolicy {
    fn default() -> Self {
        Self {
            min_score: AD_SCORE_THRESHOLD,
        }
    }
}

impl AdPolicy {
    pub fn should_show(&self, final_score: u32) -> bool {
        final_score > self.min_score
    }
}

/// Event-to-cue mapper for the app shell
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    pub ads: AdPolicy,
    muted: bool,
    best_score: u32,
    runs: u32,
}

impl Presenter {
    pub fn new(ads: AdPolicy) -> Self {
        Self {
            ads,
            ..Default::default()
        }
    }

    /// Mute/unmute sound cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Completed runs
    pub fn runs(&self) -> u32 {
        self.runs
    }

    fn sound(&self, effect: SoundEffect, out: &mut Vec<Cue>) {
        if !self.muted {
            out.push(Cue::Sound(effect));
        }
    }

    /// Cues for one event, in the order the shell should apply them
    pub fn cues_for(&mut self, event: &GameEvent) -> Vec<Cue> {
        let mut cues = Vec::new();
        match *event {
            GameEvent::Started => {
                cues.push(Cue::HidePrompt);
                cues.push(Cue::ScoreLabel(0));
            }
            GameEvent::Flapped => self.sound(SoundEffect::Wing, &mut cues),
            GameEvent::Scored(score) => {
                cues.push(Cue::ScoreLabel(score));
                self.sound(SoundEffect::Point, &mut cues);
            }
            GameEvent::Collided(kind) => {
                log::debug!("Impact: {:?}", kind);
                self.sound(SoundEffect::Hit, &mut cues);
                self.sound(SoundEffect::Die, &mut cues);
            }
            GameEvent::GameOver(final_score) => {
                self.runs += 1;
                if final_score > self.best_score {
                    log::info!("New best score: {}", final_score);
                    self.best_score = final_score;
                }
                if self.ads.should_show(final_score) {
                    cues.push(Cue::ShowAd { final_score });
                }
            }
            GameEvent::SessionReset => {
                cues.push(Cue::ScoreLabel(0));
                cues.push(Cue::ShowPrompt);
            }
        }
        cues
    }

    /// Cues for a batch of events, flattened
    pub fn present(&mut self, events: &[GameEvent]) -> Vec<Cue> {
        events.iter().flat_map(|e| self.cues_for(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CollisionKind;

    #[test]
    fn test_ad_threshold_is_strict() {
        let policy = AdPolicy::default();
        assert!(!policy.should_show(0));
        assert!(!policy.should_show(5));
        assert!(policy.should_show(6));
    }

    #[test]
    fn test_crash_sequence_cues() {
        let mut presenter = Presenter::default();
        let cues = presenter.present(&[
            GameEvent::Collided(CollisionKind::Obstacle),
            GameEvent::GameOver(8),
            GameEvent::SessionReset,
        ]);
        assert_eq!(
            cues,
            vec![
                Cue::Sound(SoundEffect::Hit),
                Cue::Sound(SoundEffect::Die),
                Cue::ShowAd { final_score: 8 },
                Cue::ScoreLabel(0),
                Cue::ShowPrompt,
            ]
        );
        assert_eq!(presenter.best_score(), 8);
        assert_eq!(presenter.runs(), 1);
    }

    #[test]
    fn test_low_score_gets_no_ad() {
        let mut presenter = Presenter::default();
        let cues = presenter.cues_for(&GameEvent::GameOver(5));
        assert!(cues.is_empty());
    }

    #[test]
    fn test_mute_drops_only_sounds() {
        let mut presenter = Presenter::default();
        presenter.set_muted(true);
        assert!(presenter.cues_for(&GameEvent::Flapped).is_empty());
        assert_eq!(
            presenter.cues_for(&GameEvent::Scored(3)),
            vec![Cue::ScoreLabel(3)]
        );
    }

    #[test]
    fn test_start_hides_prompt() {
        let mut presenter = Presenter::new(AdPolicy { min_score: 0 });
        assert_eq!(
            presenter.cues_for(&GameEvent::Started),
            vec![Cue::HidePrompt, Cue::ScoreLabel(0)]
        );
        assert_eq!(
            presenter.cues_for(&GameEvent::GameOver(1)),
            vec![Cue::ShowAd { final_score: 1 }]
        );
    }
}
