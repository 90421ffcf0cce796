//! Session configuration
//!
//! Loaded from JSON (or defaulted) and validated once, when a session is created.
//! Every invariant the simulation relies on (passable gaps, no tunneling) is checked
//! here so the tick loop never has to.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen must have positive size, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("base scroll speed must be negative (leftward), got {0}")]
    ScrollNotLeftward(f32),
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("speed step interval must be at least 1 point")]
    ZeroSpeedStep,
    #[error("minimum gap {gap_min} must exceed flyer height {flyer_height} plus clearance {clearance}")]
    GapTooNarrow {
        gap_min: f32,
        flyer_height: f32,
        clearance: f32,
    },
    #[error("gaps centered in [{band_min}, {band_max}] with height up to {gap_max} leave the playfield [{ground}, {ceiling}]")]
    GapOutsidePlayfield {
        band_min: f32,
        band_max: f32,
        gap_max: f32,
        ground: f32,
        ceiling: f32,
    },
    #[error("obstacle height {0} cannot cover the space between gap and boundaries")]
    ObstacleTooShort(f32),
    #[error("ground height {ground} must sit below the flyer start height {start}")]
    GroundTooHigh { ground: f32, start: f32 },
    #[error("max scroll speed {max_scroll_speed} must be at least |base speed| {base} and below obstacle width {obstacle_width}")]
    ScrollSpeedCap {
        max_scroll_speed: f32,
        base: f32,
        obstacle_width: f32,
    },
    #[error("vertical step {step} per tick must stay below obstacle height {obstacle_height}")]
    VerticalStepTooLarge { step: f32, obstacle_height: f32 },
    #[error("at least one obstacle pair is required")]
    NoObstacles,
    #[error("obstacle spacing {spacing} must exceed obstacle width {obstacle_width}")]
    SpacingTooTight { spacing: f32, obstacle_width: f32 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Per-tick velocity change (negative = downward)
    pub gravity: f32,
    /// Velocity a flap sets (not adds)
    pub flap_impulse: f32,
    /// Downward speed cap; bounds the per-tick vertical step
    pub max_fall_speed: f32,
    /// Scroll speed at score 0 (negative = leftward)
    pub base_scroll_speed: f32,
    pub speed_step_every: u32,
    pub speed_step_amount: f32,
    /// Scroll speed magnitude is never allowed past this
    pub max_scroll_speed: f32,
    /// (min, max) gap height
    pub obstacle_gap_range: (f32, f32),
    /// (min_y, max_y) band for the gap center
    pub obstacle_gap_band: (f32, f32),
    /// Room a minimal gap must leave beyond the flyer's height
    pub gap_clearance: f32,
    /// (w, h)
    pub flyer_size: (f32, f32),
    /// (w, h) of each obstacle rectangle
    pub obstacle_size: (f32, f32),
    pub obstacle_count: u32,
    /// Horizontal distance between consecutive pairs (only used with several pairs)
    pub obstacle_spacing: f32,
    /// Height of the ground strip; collisions start at its top
    pub ground_height: f32,
    /// Ticks spent in the terminated state before returning to idle
    pub game_over_pause_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            max_fall_speed: MAX_FALL_SPEED,
            base_scroll_speed: BASE_SCROLL_SPEED,
            speed_step_every: SPEED_STEP_EVERY,
            speed_step_amount: SPEED_STEP_AMOUNT,
            max_scroll_speed: MAX_SCROLL_SPEED,
            obstacle_gap_range: (GAP_MIN, GAP_MAX),
            obstacle_gap_band: (GAP_BAND_MIN, GAP_BAND_MAX),
            gap_clearance: GAP_CLEARANCE,
            flyer_size: (FLYER_WIDTH, FLYER_HEIGHT),
            obstacle_size: (OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            obstacle_count: 1,
            obstacle_spacing: (SCREEN_WIDTH + OBSTACLE_WIDTH) / 2.0,
            ground_height: GROUND_HEIGHT,
            game_over_pause_ticks: 0,
        }
    }
}

impl SessionConfig {
    /// Parse a JSON document; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    pub fn flyer_size(&self) -> Vec2 {
        Vec2::new(self.flyer_size.0, self.flyer_size.1)
    }

    pub fn obstacle_size(&self) -> Vec2 {
        Vec2::new(self.obstacle_size.0, self.obstacle_size.1)
    }

    /// Check every invariant the simulation depends on for a given playfield
    pub fn validate(&self, screen: Vec2) -> Result<(), ConfigError> {
        if !(screen.is_finite() && screen.x > 0.0 && screen.y > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: screen.x,
                height: screen.y,
            });
        }

        self.check_finite()?;

        positive("flap_impulse", self.flap_impulse)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("flyer width", self.flyer_size.0)?;
        positive("flyer height", self.flyer_size.1)?;
        positive("obstacle width", self.obstacle_size.0)?;
        positive("obstacle height", self.obstacle_size.1)?;
        positive("ground_height", self.ground_height)?;

        if !(self.base_scroll_speed < 0.0) {
            return Err(ConfigError::ScrollNotLeftward(self.base_scroll_speed));
        }
        if self.speed_step_every == 0 {
            return Err(ConfigError::ZeroSpeedStep);
        }
        if !(self.speed_step_amount >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "speed_step_amount",
                value: self.speed_step_amount,
            });
        }

        let (gap_min, gap_max) = self.obstacle_gap_range;
        ordered("obstacle_gap_range", gap_min, gap_max)?;
        let (band_min, band_max) = self.obstacle_gap_band;
        ordered("obstacle_gap_band", band_min, band_max)?;

        if !(self.gap_clearance >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "gap_clearance",
                value: self.gap_clearance,
            });
        }
        positive("minimum gap", gap_min)?;
        if !(gap_min > self.flyer_size.1 && gap_min > self.flyer_size.1 + self.gap_clearance) {
            return Err(ConfigError::GapTooNarrow {
                gap_min,
                flyer_height: self.flyer_size.1,
                clearance: self.gap_clearance,
            });
        }

        let ground = self.ground_height;
        let ceiling = screen.y;
        let start = screen.y / 2.0;
        if ground >= start {
            return Err(ConfigError::GroundTooHigh { ground, start });
        }

        if band_min - gap_max / 2.0 < ground || band_max + gap_max / 2.0 > ceiling {
            return Err(ConfigError::GapOutsidePlayfield {
                band_min,
                band_max,
                gap_max,
                ground,
                ceiling,
            });
        }

        // Upper rectangle must reach the ceiling and the lower one the ground, even for
        // the narrowest gap at the extremes of the band.
        let height = self.obstacle_size.1;
        let upper_top = band_min + gap_min / 2.0 + height;
        let lower_bottom = band_max - gap_min / 2.0 - height;
        if upper_top < ceiling || lower_bottom > ground {
            return Err(ConfigError::ObstacleTooShort(height));
        }

        let base = self.base_scroll_speed.abs();
        if self.max_scroll_speed < base || self.max_scroll_speed >= self.obstacle_size.0 {
            return Err(ConfigError::ScrollSpeedCap {
                max_scroll_speed: self.max_scroll_speed,
                base,
                obstacle_width: self.obstacle_size.0,
            });
        }

        let step = self.flap_impulse.max(self.max_fall_speed);
        if step >= height {
            return Err(ConfigError::VerticalStepTooLarge {
                step,
                obstacle_height: height,
            });
        }

        if self.obstacle_count == 0 {
            return Err(ConfigError::NoObstacles);
        }
        if self.obstacle_count > 1 && self.obstacle_spacing <= self.obstacle_size.0 {
            return Err(ConfigError::SpacingTooTight {
                spacing: self.obstacle_spacing,
                obstacle_width: self.obstacle_size.0,
            });
        }

        Ok(())
    }
}

impl SessionConfig {
    fn check_finite(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("max_fall_speed", self.max_fall_speed),
            ("base_scroll_speed", self.base_scroll_speed),
            ("speed_step_amount", self.speed_step_amount),
            ("max_scroll_speed", self.max_scroll_speed),
            ("gap range min", self.obstacle_gap_range.0),
            ("gap range max", self.obstacle_gap_range.1),
            ("gap band min", self.obstacle_gap_band.0),
            ("gap band max", self.obstacle_gap_band.1),
            ("gap_clearance", self.gap_clearance),
            ("flyer width", self.flyer_size.0),
            ("flyer height", self.flyer_size.1),
            ("obstacle width", self.obstacle_size.0),
            ("obstacle height", self.obstacle_size.1),
            ("obstacle_spacing", self.obstacle_spacing),
            ("ground_height", self.ground_height),
        ];
        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ConfigError::NotFinite { name, value }),
            None => Ok(()),
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Vec2 {
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[test]
    fn test_default_config_is_valid() {
        SessionConfig::default().validate(screen()).unwrap();
    }

    #[test]
    fn test_rejects_gap_smaller_than_flyer() {
        let config = SessionConfig {
            obstacle_gap_range: (30.0, 180.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::GapTooNarrow { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_flap() {
        let config = SessionConfig {
            flap_impulse: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::NotPositive {
                name: "flap_impulse",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_rightward_scroll() {
        let config = SessionConfig {
            base_scroll_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::ScrollNotLeftward(_))
        ));
    }

    #[test]
    fn test_rejects_scroll_cap_wider_than_obstacle() {
        let config = SessionConfig {
            max_scroll_speed: 60.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::ScrollSpeedCap { .. })
        ));
    }

    #[test]
    fn test_rejects_gap_band_touching_ground() {
        let config = SessionConfig {
            obstacle_gap_band: (120.0, 400.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::GapOutsidePlayfield { .. })
        ));
    }

    #[test]
    fn test_rejects_short_obstacles() {
        let config = SessionConfig {
            obstacle_size: (52.0, 150.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::ObstacleTooShort(_))
        ));
    }

    #[test]
    fn test_rejects_bad_screen() {
        let err = SessionConfig::default().validate(Vec2::new(0.0, 511.0));
        assert!(matches!(err, Err(ConfigError::InvalidScreen { .. })));
    }

    #[test]
    fn test_rejects_tight_spacing_with_several_pairs() {
        let config = SessionConfig {
            obstacle_count: 2,
            obstacle_spacing: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::SpacingTooTight { .. })
        ));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = SessionConfig::from_json(r#"{ "gravity": -0.2, "obstacle_count": 2 }"#)
            .unwrap();
        assert_eq!(config.gravity, -0.2);
        assert_eq!(config.obstacle_count, 2);
        assert_eq!(config.flap_impulse, FLAP_IMPULSE);
        assert_eq!(config.obstacle_gap_range, (GAP_MIN, GAP_MAX));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            SessionConfig::from_json("{ gravity: nope }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_negative_clearance() {
        let config = SessionConfig {
            gap_clearance: -20.0,
            obstacle_gap_range: (20.0, 180.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::NotPositive {
                name: "gap_clearance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_positive_gap() {
        let config = SessionConfig {
            obstacle_gap_range: (-10.0, 180.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::NotPositive {
                name: "minimum gap",
                ..
            })
        ));
    }

    #[test]
    fn test_gap_must_fit_flyer_without_clearance() {
        let config = SessionConfig {
            gap_clearance: 0.0,
            obstacle_gap_range: (34.0, 180.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(screen()),
            Err(ConfigError::GapTooNarrow { .. })
        ));

        let config = SessionConfig {
            gap_clearance: 0.0,
            obstacle_gap_range: (40.0, 180.0),
            ..Default::default()
        };
        config.validate(screen()).unwrap();
    }

    #[test]
    fn test_rejects_non_finite_fields() {
        let nan_gravity = SessionConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_gravity.validate(screen()),
            Err(ConfigError::NotFinite { name: "gravity", .. })
        ));

        let nan_cap = SessionConfig {
            max_scroll_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_cap.validate(screen()),
            Err(ConfigError::NotFinite {
                name: "max_scroll_speed",
                ..
            })
        ));

        let nan_spacing = SessionConfig {
            obstacle_count: 2,
            obstacle_spacing: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_spacing.validate(screen()),
            Err(ConfigError::NotFinite {
                name: "obstacle_spacing",
                ..
            })
        ));

        let infinite_screen = SessionConfig::default().validate(Vec2::new(f32::INFINITY, 511.0));
        assert!(matches!(
            infinite_screen,
            Err(ConfigError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_load_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{ "flap_impulse": 4.0, "game_over_pause_ticks": 30 }"#)
            .unwrap();

        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.flap_impulse, 4.0);
        assert_eq!(config.game_over_pause_ticks, 30);
        assert_eq!(config.gravity, GRAVITY);
        config.validate(screen()).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
