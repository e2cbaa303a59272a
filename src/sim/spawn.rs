//! Obstacle and fish spawners
//!
//! Obstacles are rate limited by a cooldown and a per-tick roll, and never
//! land on top of another obstacle near the spawn line. Fish use a bare roll.

use rand::Rng;

use super::state::{Collectible, GameState, Obstacle, ObstacleKind};
use crate::consts::*;
use crate::lane_x;
use crate::tuning::CooldownPolicy;

/// What the obstacle spawner did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Still cooling down, or the roll failed
    Idle,
    /// The roll succeeded but every lane was occupied near the spawn line
    Blocked,
    /// An obstacle was placed in this lane
    Placed { lane: usize },
}

/// Lanes free of obstacles near the top of the playfield
pub fn open_lanes(state: &GameState) -> Vec<usize> {
    let clear_x = state.tuning.lane_clear_x;
    let clear_y = state.tuning.lane_clear_y;
    (0..LANE_COUNT)
        .filter(|&lane| {
            let x = lane_x(lane);
            !state
                .obstacles
                .iter()
                .any(|o| (o.pos.x - x).abs() < clear_x && o.pos.y < clear_y)
        })
        .collect()
}

/// Advance the cooldown and maybe place an obstacle
pub fn spawn_obstacle(state: &mut GameState) -> SpawnOutcome {
    state.obstacle_cooldown = state.obstacle_cooldown.saturating_add(1);

    if state.obstacle_cooldown < state.tuning.min_obstacle_gap {
        return SpawnOutcome::Idle;
    }
    if state.rng.random::<f64>() >= state.tuning.obstacle_chance {
        return SpawnOutcome::Idle;
    }

    let lanes = open_lanes(state);
    if lanes.is_empty() {
        if state.tuning.cooldown_policy == CooldownPolicy::OnAttempt {
            state.obstacle_cooldown = 0;
        }
        log::debug!("Obstacle spawn blocked: no open lane");
        return SpawnOutcome::Blocked;
    }

    let lane = lanes[state.rng.random_range(0..lanes.len())];
    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    state
        .obstacles
        .push(Obstacle::new(kind, lane, state.tuning.obstacle_spawn_y));
    state.obstacle_cooldown = 0;

    log::debug!("Spawned {:?} in lane {} at tick {}", kind, lane, state.time_ticks);
    SpawnOutcome::Placed { lane }
}

/// Maybe place a fish in a random lane. Returns the lane if one spawned.
pub fn spawn_collectible(state: &mut GameState) -> Option<usize> {
    if state.rng.random::<f64>() >= state.tuning.collectible_chance {
        return None;
    }

    let lane = state.rng.random_range(0..LANE_COUNT);
    state
        .collectibles
        .push(Collectible::fish(lane, state.tuning.collectible_spawn_y));
    Some(lane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn always_spawn(policy: CooldownPolicy) -> GameState {
        let tuning = Tuning {
            obstacle_chance: 1.0,
            collectible_chance: 1.0,
            cooldown_policy: policy,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(42, tuning);
        state.begin_episode();
        state
    }

    #[test]
    fn test_cooldown_gates_spawn() {
        let mut state = always_spawn(CooldownPolicy::OnPlacement);
        for _ in 0..59 {
            assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Idle);
        }
        assert!(matches!(
            spawn_obstacle(&mut state),
            SpawnOutcome::Placed { .. }
        ));
        assert_eq!(state.obstacle_cooldown, 0);
        assert_eq!(state.obstacles.len(), 1);

        let o = &state.obstacles[0];
        assert_eq!(o.pos.y, -80.0);
        assert_eq!(o.pos.x, lane_x(o.lane));
        assert_eq!(o.size, o.kind.size());
    }

    #[test]
    fn test_zero_chance_never_spawns() {
        let mut state = GameState::with_tuning(
            1,
            Tuning {
                obstacle_chance: 0.0,
                collectible_chance: 0.0,
                ..Default::default()
            },
        );
        state.begin_episode();
        for _ in 0..500 {
            assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Idle);
            assert_eq!(spawn_collectible(&mut state), None);
        }
        assert_eq!(state.obstacle_cooldown, 500);
    }

    #[test]
    fn test_open_lanes_skips_occupied() {
        let mut state = always_spawn(CooldownPolicy::OnPlacement);
        state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, 0, 50.0));
        // Far enough down the track to no longer block
        state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, 2, 150.0));
        assert_eq!(open_lanes(&state), vec![1, 2]);
    }

    #[test]
    fn test_spawn_picks_only_open_lane() {
        let mut state = always_spawn(CooldownPolicy::OnPlacement);
        state.obstacles.push(Obstacle::new(ObstacleKind::IceBlock, 0, -80.0));
        state.obstacles.push(Obstacle::new(ObstacleKind::IceBlock, 2, 0.0));
        state.obstacle_cooldown = 59;
        assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Placed { lane: 1 });
    }

    #[test]
    fn test_blocked_attempt_keeps_cooldown_on_placement_policy() {
        let mut state = always_spawn(CooldownPolicy::OnPlacement);
        for lane in 0..LANE_COUNT {
            state.obstacles.push(Obstacle::new(ObstacleKind::IceBlock, lane, -80.0));
        }
        state.obstacle_cooldown = 59;
        assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Blocked);
        assert_eq!(state.obstacle_cooldown, 60);
        // Retries on the very next tick
        assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Blocked);
        assert_eq!(state.obstacles.len(), LANE_COUNT);
    }

    #[test]
    fn test_blocked_attempt_resets_cooldown_on_attempt_policy() {
        let mut state = always_spawn(CooldownPolicy::OnAttempt);
        for lane in 0..LANE_COUNT {
            state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, lane, -80.0));
        }
        state.obstacle_cooldown = 59;
        assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Blocked);
        assert_eq!(state.obstacle_cooldown, 0);
        assert_eq!(spawn_obstacle(&mut state), SpawnOutcome::Idle);
    }

    #[test]
    fn test_collectible_spawns_above_field() {
        let mut state = always_spawn(CooldownPolicy::OnPlacement);
        let lane = spawn_collectible(&mut state).unwrap();
        assert!(lane < LANE_COUNT);
        let fish = &state.collectibles[0];
        assert_eq!(fish.pos.y, -30.0);
        assert_eq!(fish.pos.x, lane_x(lane));
    }

    #[test]
    fn test_collectibles_ignore_obstacles() {
        let mut state = always_spawn(CooldownPolicy::OnPlacement);
        for lane in 0..LANE_COUNT {
            state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, lane, -80.0));
        }
        assert!(spawn_collectible(&mut state).is_some());
    }
}
