//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod scenery;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Bounded, collides};
pub use engine::Engine;
pub use spawn::SpawnOutcome;
pub use state::{
    Collectible, CollectibleKind, GameEvent, GamePhase, GameState, Hud, Obstacle, ObstacleKind,
    Player, Scenery, SceneryKind, Wave,
};
pub use tick::{Command, apply_command, tick};
