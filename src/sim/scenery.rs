//! Background props and waves
//!
//! Purely visual. They scroll slower than the track for parallax and wrap
//! back to the top instead of being destroyed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Scenery, SceneryKind, Wave};
use crate::consts::*;

/// Scatter a fresh set of props over the whole playfield
pub fn generate_scenery(rng: &mut impl Rng) -> Vec<Scenery> {
    (0..SCENERY_COUNT)
        .map(|_| Scenery {
            pos: Vec2::new(
                rng.random::<f32>() * FIELD_WIDTH,
                rng.random::<f32>() * FIELD_HEIGHT,
            ),
            size: rng.random::<f32>() * 30.0 + 10.0,
            kind: if rng.random::<f32>() > 0.5 {
                SceneryKind::Iceberg
            } else {
                SceneryKind::Snowflake
            },
        })
        .collect()
}

/// Evenly spaced waves with randomized shape
pub fn generate_waves(rng: &mut impl Rng) -> Vec<Wave> {
    (0..WAVE_COUNT)
        .map(|i| Wave {
            pos: Vec2::new(i as f32 * WAVE_SPACING, rng.random::<f32>() * FIELD_HEIGHT),
            amplitude: rng.random::<f32>() * 20.0 + 10.0,
            frequency: rng.random::<f32>() * 0.02 + 0.01,
            phase: rng.random::<f32>() * TAU,
        })
        .collect()
}

/// Scroll props down by `step`, wrapping any that left the bottom
pub fn update_scenery(scenery: &mut [Scenery], step: f32, rng: &mut impl Rng) {
    for prop in scenery {
        prop.pos.y += step;
        if prop.pos.y > FIELD_HEIGHT + prop.size {
            prop.pos.y = -prop.size;
            prop.pos.x = rng.random::<f32>() * FIELD_WIDTH;
        }
    }
}

/// Animate wave phase with `speed` and scroll by `step`, wrapping at the bottom
pub fn update_waves(waves: &mut [Wave], speed: f32, step: f32, rng: &mut impl Rng) {
    for wave in waves {
        wave.phase += wave.frequency * speed;
        wave.pos.y += step;
        if wave.pos.y > FIELD_HEIGHT + WAVE_WRAP_MARGIN {
            wave.pos.y = -WAVE_WRAP_MARGIN;
            wave.phase = rng.random::<f32>() * TAU;
        }
    }
}
