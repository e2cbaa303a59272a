//! Data-driven game balance
//!
//! Every gameplay constant that shapes pacing lives in [`Tuning`]. Defaults
//! reproduce the classic feel; a JSON file can override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// When the obstacle spawn cooldown restarts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownPolicy {
    /// Only a placed obstacle restarts the cooldown; a blocked roll retries next tick
    #[default]
    OnPlacement,
    /// Any successful roll restarts the cooldown, even if every lane was blocked
    OnAttempt,
}

/// Errors raised while loading a tuning table
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning value `{field}` is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

/// Largest accepted scroll speed at episode start
pub const MAX_BASE_SPEED: f32 = 1000.0;
/// Largest accepted per-tick speed ramp
pub const MAX_SPEED_INCREMENT: f32 = 10.0;
/// Largest accepted distance per unit of speed
pub const MAX_DISTANCE_SCALE: f32 = 100.0;
/// Largest accepted score bonus per fish
pub const MAX_PICKUP_POINTS: u64 = 1_000_000;

/// Game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll speed at episode start (pixels per tick)
    pub base_speed: f32,
    /// Added to the scroll speed every tick
    pub speed_increment: f32,
    /// Distance gained per unit of speed each tick
    pub distance_scale: f32,
    /// Scenery scroll rate relative to obstacles
    pub scenery_parallax: f32,
    /// Wave scroll rate relative to obstacles
    pub wave_parallax: f32,

    /// Ticks that must pass before an obstacle roll is allowed
    pub min_obstacle_gap: u32,
    /// Per-tick obstacle spawn probability once the gap has elapsed
    pub obstacle_chance: f64,
    /// Per-tick fish spawn probability
    pub collectible_chance: f64,
    /// Cooldown reset rule
    pub cooldown_policy: CooldownPolicy,

    /// A lane is blocked by an obstacle closer than this horizontally...
    pub lane_clear_x: f32,
    /// ...whose top edge is above this line
    pub lane_clear_y: f32,
    /// Starting y for new obstacles (just above the playfield)
    pub obstacle_spawn_y: f32,
    /// Starting y for new fish
    pub collectible_spawn_y: f32,

    /// Score bonus per fish
    pub pickup_points: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            speed_increment: 0.001,
            distance_scale: 0.1,
            scenery_parallax: 0.3,
            wave_parallax: 0.2,

            min_obstacle_gap: 60,
            obstacle_chance: 0.03,
            collectible_chance: 0.015,
            cooldown_policy: CooldownPolicy::OnPlacement,

            lane_clear_x: 50.0,
            lane_clear_y: 100.0,
            obstacle_spawn_y: -80.0,
            collectible_spawn_y: -30.0,

            pickup_points: 10,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.base_speed > 0.0 && self.base_speed <= MAX_BASE_SPEED) {
            return Err(TuningError::OutOfRange {
                field: "base_speed",
                reason: "must be positive and at most 1000",
            });
        }
        // Speed must never decrease within an episode
        if !(self.speed_increment >= 0.0 && self.speed_increment <= MAX_SPEED_INCREMENT) {
            return Err(TuningError::OutOfRange {
                field: "speed_increment",
                reason: "must be within [0, 10]",
            });
        }
        if !(self.distance_scale > 0.0 && self.distance_scale <= MAX_DISTANCE_SCALE) {
            return Err(TuningError::OutOfRange {
                field: "distance_scale",
                reason: "must be positive and at most 100",
            });
        }
        if self.pickup_points > MAX_PICKUP_POINTS {
            return Err(TuningError::OutOfRange {
                field: "pickup_points",
                reason: "must be at most 1000000",
            });
        }
        for (field, value) in [
            ("scenery_parallax", self.scenery_parallax),
            ("wave_parallax", self.wave_parallax),
            ("lane_clear_x", self.lane_clear_x),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::OutOfRange {
                    field,
                    reason: "must be zero or positive",
                });
            }
        }
        for (field, value) in [
            ("obstacle_chance", self.obstacle_chance),
            ("collectible_chance", self.collectible_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::OutOfRange {
                    field,
                    reason: "probability must be within [0, 1]",
                });
            }
        }
        for (field, value) in [
            ("lane_clear_y", self.lane_clear_y),
            ("obstacle_spawn_y", self.obstacle_spawn_y),
            ("collectible_spawn_y", self.collectible_spawn_y),
        ] {
            if !value.is_finite() {
                return Err(TuningError::OutOfRange {
                    field,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_speed": 7.5, "cooldown_policy": "on_attempt" }"#)
            .unwrap();
        assert_eq!(tuning.base_speed, 7.5);
        assert_eq!(tuning.cooldown_policy, CooldownPolicy::OnAttempt);
        assert_eq!(tuning.min_obstacle_gap, 60);
        assert_eq!(tuning.pickup_points, 10);
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ base_speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "obstacle_chance": 1.5 }"#).unwrap_err();
        match err {
            TuningError::OutOfRange { field, .. } => assert_eq!(field, "obstacle_chance"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_oversized_scales() {
        for (json, expected) in [
            (r#"{ "pickup_points": 18446744073709551615 }"#, "pickup_points"),
            (r#"{ "base_speed": 1e30 }"#, "base_speed"),
            (r#"{ "distance_scale": 1e30 }"#, "distance_scale"),
            (r#"{ "speed_increment": 1e30 }"#, "speed_increment"),
        ] {
            match Tuning::from_json(json) {
                Err(TuningError::OutOfRange { field, .. }) => assert_eq!(field, expected),
                other => panic!("{json} gave {other:?}"),
            }
        }
        let edge = Tuning {
            pickup_points: MAX_PICKUP_POINTS,
            base_speed: MAX_BASE_SPEED,
            ..Default::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_ramp() {
        let tuning = Tuning {
            speed_increment: -0.01,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::OutOfRange {
                field: "speed_increment",
                ..
            })
        ));
    }
}
