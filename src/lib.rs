//! Penguin Dash - A three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `renderer`: Triangle tessellation and WebGPU pipeline
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::Engine;
pub use tuning::{CooldownPolicy, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, y grows toward the viewer)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Lane centre x-coordinates, left to right
    pub const LANES: [f32; 3] = [200.0, 400.0, 600.0];
    pub const LANE_COUNT: usize = LANES.len();
    /// Lane the player starts each episode in
    pub const CENTER_LANE: usize = 1;

    /// Player defaults
    pub const PLAYER_Y: f32 = 450.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Obstacle boxes (width, height)
    pub const ICE_BLOCK_SIZE: (f32, f32) = (60.0, 50.0);
    pub const ICEBERG_SIZE: (f32, f32) = (80.0, 60.0);

    /// Fish box (width, height)
    pub const FISH_SIZE: (f32, f32) = (25.0, 25.0);

    /// Decorative element counts
    pub const SCENERY_COUNT: usize = 10;
    pub const WAVE_COUNT: usize = 8;
    /// Horizontal spacing between wave oscillators
    pub const WAVE_SPACING: f32 = 100.0;
    /// How far past the edges a wave travels before wrapping
    pub const WAVE_WRAP_MARGIN: f32 = 50.0;
}

/// X coordinate of a lane. Out-of-range indices clamp to the nearest lane.
#[inline]
pub fn lane_x(lane: usize) -> f32 {
    consts::LANES[lane.min(consts::LANE_COUNT - 1)]
}
