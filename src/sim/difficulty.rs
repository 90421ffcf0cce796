//! Score-driven scroll speed

/// Step function from score to scroll speed. Stateless; recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyRamp {
    /// Speed at score 0 (negative = leftward)
    pub base_speed: f32,
    pub step_every: u32,
    pub step_amount: f32,
    /// Magnitude cap
    pub max_speed: f32,
}

impl DifficultyRamp {
    pub fn speed_for(&self, score: u32) -> f32 {
        let steps = (score / self.step_every.max(1)) as f32;
        (self.base_speed - steps * self.step_amount).max(-self.max_speed)
    }

    /// Tier index (0 at the start, +1 every `step_every` points)
    pub fn tier(&self, score: u32) -> u32 {
        score / self.step_every.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RAMP: DifficultyRamp = DifficultyRamp {
        base_speed: -2.0,
        step_every: 10,
        step_amount: 1.0,
        max_speed: 12.0,
    };

    #[test]
    fn test_steps_every_ten_points() {
        assert_eq!(RAMP.speed_for(0), -2.0);
        assert_eq!(RAMP.speed_for(9), -2.0);
        assert_eq!(RAMP.speed_for(10), -3.0);
        assert_eq!(RAMP.speed_for(19), RAMP.speed_for(10));
        assert!(RAMP.speed_for(20) < RAMP.speed_for(19));
        assert_eq!(RAMP.speed_for(20), -4.0);
    }

    #[test]
    fn test_crossing_ten_is_one_step() {
        assert_eq!(RAMP.speed_for(9) - RAMP.speed_for(10), RAMP.step_amount);
        assert_eq!(RAMP.tier(9), 0);
        assert_eq!(RAMP.tier(10), 1);
    }

    #[test]
    fn test_speed_is_capped() {
        assert_eq!(RAMP.speed_for(100), -12.0);
        assert_eq!(RAMP.speed_for(5000), -12.0);
    }

    proptest! {
        #[test]
        fn prop_monotonic_non_increasing(score in 0u32..100_000) {
            prop_assert!(RAMP.speed_for(score + 1) <= RAMP.speed_for(score));
            prop_assert!(RAMP.speed_for(score) < 0.0);
            prop_assert!(RAMP.speed_for(score) >= -RAMP.max_speed);
        }
    }
}
