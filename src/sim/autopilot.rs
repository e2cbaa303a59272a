//! Idle/demo mode - a simple lane-dodging AI
//!
//! Looks a short distance up the track and sidesteps obstacles, drifting
//! toward fish when the current lane is safe. Used by the headless host.

use super::state::{GamePhase, GameState};
use super::tick::Command;
use crate::consts::*;

/// Ticks of travel the AI looks ahead
const LOOKAHEAD_TICKS: f32 = 24.0;

/// Pick the next command, or None to stay put
pub fn suggest(state: &GameState) -> Option<Command> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let lane = state.player.lane;
    let lookahead = state.speed * LOOKAHEAD_TICKS;

    let neighbours = [
        (lane.checked_sub(1), Command::MoveLeft),
        (Some(lane + 1).filter(|&l| l < LANE_COUNT), Command::MoveRight),
    ];

    if lane_threatened(state, lane, lookahead) {
        // Sidestep into whichever neighbour is clear, left first
        return neighbours
            .iter()
            .find(|(l, _)| l.is_some_and(|l| !lane_threatened(state, l, lookahead)))
            .map(|&(_, command)| command);
    }

    // Safe here: go after a fish in a clear neighbouring lane
    neighbours
        .iter()
        .find(|(l, _)| {
            l.is_some_and(|l| {
                fish_ahead(state, l, lookahead) && !lane_threatened(state, l, lookahead)
            })
        })
        .map(|&(_, command)| command)
}

/// Vertical window from `lookahead` above the player to its bottom edge
fn window(state: &GameState, lookahead: f32) -> (f32, f32) {
    let top = state.player.pos.y - lookahead;
    let bottom = state.player.pos.y + state.player.size.y;
    (top, bottom)
}

fn lane_threatened(state: &GameState, lane: usize, lookahead: f32) -> bool {
    let (top, bottom) = window(state, lookahead);
    state
        .obstacles
        .iter()
        .filter(|o| o.lane == lane)
        .any(|o| o.pos.y < bottom && o.pos.y + o.size.y > top)
}

fn fish_ahead(state: &GameState, lane: usize, lookahead: f32) -> bool {
    let (top, bottom) = window(state, lookahead);
    state
        .collectibles
        .iter()
        .filter(|c| c.lane == lane)
        .any(|c| c.pos.y < bottom && c.pos.y + c.size.y > top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, Obstacle, ObstacleKind};
    use crate::sim::tick::{apply_command, tick};
    use crate::tuning::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::with_tuning(
            10,
            Tuning {
                obstacle_chance: 0.0,
                collectible_chance: 0.0,
                ..Default::default()
            },
        );
        state.begin_episode();
        state
    }

    #[test]
    fn test_idle_outside_playing() {
        let state = GameState::new(1);
        assert_eq!(suggest(&state), None);
    }

    #[test]
    fn test_stays_when_clear() {
        let state = playing();
        assert_eq!(suggest(&state), None);
    }

    #[test]
    fn test_dodges_left_first() {
        let mut state = playing();
        state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, 1, 380.0));
        assert_eq!(suggest(&state), Some(Command::MoveLeft));
    }

    #[test]
    fn test_dodges_right_when_left_blocked() {
        let mut state = playing();
        state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, 1, 380.0));
        state.obstacles.push(Obstacle::new(ObstacleKind::IceBlock, 0, 400.0));
        assert_eq!(suggest(&state), Some(Command::MoveRight));
    }

    #[test]
    fn test_chases_fish() {
        let mut state = playing();
        state.collectibles.push(Collectible::fish(2, 400.0));
        assert_eq!(suggest(&state), Some(Command::MoveRight));
    }

    #[test]
    fn test_dodge_avoids_crash() {
        let mut state = playing();
        state.obstacles.push(Obstacle::new(ObstacleKind::IceBlock, 1, 300.0));
        for _ in 0..120 {
            if let Some(command) = suggest(&state) {
                apply_command(&mut state, command);
            }
            tick(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.player.lane, 1);
    }
}
