//! Per-frame simulation tick
//!
//! One call advances the run by one frame. There is no timestep: the speed
//! ramp is applied per call, so pacing follows the host's frame rate.

use super::collision::collides;
use super::scenery;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Player commands (edge-triggered, applied immediately)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Leave the menu
    Start,
    /// Play again after a crash
    Restart,
}

impl Command {
    /// Map a `KeyboardEvent.code` to a command valid in `phase`
    pub fn from_key(code: &str, phase: GamePhase) -> Option<Self> {
        match (phase, code) {
            (GamePhase::Playing, "ArrowLeft" | "KeyA") => Some(Command::MoveLeft),
            (GamePhase::Playing, "ArrowRight" | "KeyD") => Some(Command::MoveRight),
            (GamePhase::Menu, "Space") => Some(Command::Start),
            (GamePhase::GameOver, "Space" | "Enter") => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Apply a command. Returns false if it was ignored (wrong phase or lane edge).
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    match (command, state.phase) {
        (Command::MoveLeft, GamePhase::Playing) => {
            let moved = state.player.move_left();
            if moved {
                state.events.push(GameEvent::LaneChanged {
                    lane: state.player.lane,
                });
            }
            moved
        }
        (Command::MoveRight, GamePhase::Playing) => {
            let moved = state.player.move_right();
            if moved {
                state.events.push(GameEvent::LaneChanged {
                    lane: state.player.lane,
                });
            }
            moved
        }
        (Command::Start, GamePhase::Menu) | (Command::Restart, GamePhase::GameOver) => {
            state.begin_episode();
            true
        }
        _ => false,
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    // Menu and GameOver freeze everything
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Difficulty ramp
    state.speed += state.tuning.speed_increment;

    // Distance (score is derived from it)
    state.distance += f64::from(state.speed * state.tuning.distance_scale);

    scroll_track(state);

    let speed = state.speed;
    scenery::update_scenery(
        &mut state.scenery,
        speed * state.tuning.scenery_parallax,
        &mut state.rng,
    );
    scenery::update_waves(
        &mut state.waves,
        speed,
        speed * state.tuning.wave_parallax,
        &mut state.rng,
    );

    spawn::spawn_obstacle(state);
    spawn::spawn_collectible(state);

    resolve_collisions(state);
}

/// Move obstacles and fish toward the viewer, dropping those past the bottom
fn scroll_track(state: &mut GameState) {
    let speed = state.speed;

    for obstacle in &mut state.obstacles {
        obstacle.pos.y += speed;
    }
    state.obstacles.retain(|o| o.pos.y <= FIELD_HEIGHT);

    for fish in &mut state.collectibles {
        fish.pos.y += speed;
    }
    state.collectibles.retain(|c| c.pos.y <= FIELD_HEIGHT);
}

/// Crash check first, then pickups
fn resolve_collisions(state: &mut GameState) {
    if state.obstacles.iter().any(|o| collides(&state.player, o)) {
        state.end_episode();
        return;
    }

    let before = state.collectibles.len();
    let player = &state.player;
    state.collectibles.retain(|c| !collides(player, c));
    let collected = (before - state.collectibles.len()) as u32;

    for _ in 0..collected {
        state.pickups += 1;
        state.events.push(GameEvent::FishCollected {
            total: state.pickups,
        });
    }
}
