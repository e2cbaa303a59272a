//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], including the
//! seeded RNG, so a state value fully determines the rest of the run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounded};
use super::scenery;
use crate::consts::*;
use crate::lane_x;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for Start
    Menu,
    /// Active episode
    Playing,
    /// Episode ended by a crash, waiting for Restart
    GameOver,
}

/// The penguin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-centre of the box; x always equals the current lane's x
    pub pos: Vec2,
    pub size: Vec2,
    /// Lane index, always < LANE_COUNT
    pub lane: usize,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(lane_x(CENTER_LANE), PLAYER_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            lane: CENTER_LANE,
        }
    }
}

impl Player {
    /// Back to the centre lane
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Step one lane left. Returns false at the left edge.
    pub fn move_left(&mut self) -> bool {
        if self.lane == 0 {
            return false;
        }
        self.snap_to(self.lane - 1);
        true
    }

    /// Step one lane right. Returns false at the right edge.
    pub fn move_right(&mut self) -> bool {
        if self.lane + 1 >= LANE_COUNT {
            return false;
        }
        self.snap_to(self.lane + 1);
        true
    }

    fn snap_to(&mut self, lane: usize) {
        self.lane = lane;
        self.pos.x = lane_x(lane);
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::from_top_center(self.pos, self.size)
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    IceBlock,
    Iceberg,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::IceBlock, ObstacleKind::Iceberg];

    /// Box dimensions for this kind
    pub fn size(self) -> Vec2 {
        let (w, h) = match self {
            ObstacleKind::IceBlock => ICE_BLOCK_SIZE,
            ObstacleKind::Iceberg => ICEBERG_SIZE,
        };
        Vec2::new(w, h)
    }
}

/// Something to dodge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    /// Lane it was spawned in
    pub lane: usize,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, lane: usize, y: f32) -> Self {
        Self {
            pos: Vec2::new(lane_x(lane), y),
            size: kind.size(),
            kind,
            lane,
        }
    }
}

impl Bounded for Obstacle {
    fn bounds(&self) -> Aabb {
        Aabb::from_top_center(self.pos, self.size)
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollectibleKind {
    #[default]
    Fish,
}

/// Something to grab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: CollectibleKind,
    pub lane: usize,
}

impl Collectible {
    pub fn fish(lane: usize, y: f32) -> Self {
        let (w, h) = FISH_SIZE;
        Self {
            pos: Vec2::new(lane_x(lane), y),
            size: Vec2::new(w, h),
            kind: CollectibleKind::Fish,
            lane,
        }
    }
}

impl Bounded for Collectible {
    fn bounds(&self) -> Aabb {
        Aabb::from_top_center(self.pos, self.size)
    }
}

/// Background prop types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneryKind {
    Iceberg,
    Snowflake,
}

/// Visual-only background prop (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenery {
    pub pos: Vec2,
    pub size: f32,
    pub kind: SceneryKind,
}

/// Animated sine line drifting down the background
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub pos: Vec2,
    pub amplitude: f32,
    /// Radians per pixel along x, also scales the phase advance
    pub frequency: f32,
    pub phase: f32,
}

impl Wave {
    /// Height of the wave line at horizontal position `x`
    pub fn sample(&self, x: f32) -> f32 {
        self.pos.y + (x * self.frequency + self.phase).sin() * self.amplitude
    }
}

/// Values shown on the HUD and the Game Over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    /// Distance travelled, floored
    pub distance: u64,
    pub pickups: u32,
}

/// Notifications for the host (UI, audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    LaneChanged { lane: usize },
    FishCollected { total: u32 },
    /// Final values of the episode that just ended
    Crashed(Hud),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// RNG driving spawns and scenery placement
    pub rng: Pcg32,
    /// Balance table
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Episodes started so far
    pub episode: u32,
    /// Ticks simulated in the current episode
    pub time_ticks: u64,
    /// Current scroll speed
    pub speed: f32,
    /// Distance travelled this episode
    pub distance: f64,
    /// Fish collected this episode
    pub pickups: u32,
    /// Ticks since the last obstacle spawn
    pub obstacle_cooldown: u32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    /// Background props (not gameplay-affecting)
    pub scenery: Vec<Scenery>,
    /// Background waves (not gameplay-affecting)
    pub waves: Vec<Wave>,
    /// Pending host notifications
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state in the menu with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state in the menu
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.base_speed,
            tuning,
            phase: GamePhase::Menu,
            episode: 0,
            time_ticks: 0,
            distance: 0.0,
            pickups: 0,
            obstacle_cooldown: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            scenery: Vec::new(),
            waves: Vec::new(),
            events: Vec::new(),
        };

        // The menu shows the background as well
        state.regenerate_decor();

        state
    }

    /// Score is always derived, never tracked separately. Saturates at `u64::MAX`.
    pub fn score(&self) -> u64 {
        let bonus = u64::from(self.pickups).saturating_mul(self.tuning.pickup_points);
        self.distance_floor().saturating_add(bonus)
    }

    pub fn distance_floor(&self) -> u64 {
        self.distance.floor() as u64
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score(),
            distance: self.distance_floor(),
            pickups: self.pickups,
        }
    }

    /// Enter Playing with a fresh episode
    pub fn begin_episode(&mut self) {
        self.speed = self.tuning.base_speed;
        self.distance = 0.0;
        self.pickups = 0;
        self.time_ticks = 0;
        self.obstacle_cooldown = 0;
        self.player.reset();
        self.obstacles.clear();
        self.collectibles.clear();
        self.regenerate_decor();
        self.episode += 1;

        log::info!("Episode {} started (seed {})", self.episode, self.seed);
        self.set_phase(GamePhase::Playing);
    }

    /// End the current episode after a crash
    pub fn end_episode(&mut self) {
        let hud = self.hud();
        log::info!(
            "Episode {} over after {} ticks: score {}, distance {}, fish {}",
            self.episode,
            self.time_ticks,
            hud.score,
            hud.distance,
            hud.pickups
        );
        self.set_phase(GamePhase::GameOver);
        self.events.push(GameEvent::Crashed(hud));
    }

    /// Fresh randomized background
    pub fn regenerate_decor(&mut self) {
        self.scenery = scenery::generate_scenery(&mut self.rng);
        self.waves = scenery::generate_waves(&mut self.rng);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.player.lane, CENTER_LANE);
        assert_eq!(state.player.pos, Vec2::new(400.0, 450.0));
        assert_eq!(state.scenery.len(), SCENERY_COUNT);
        assert_eq!(state.waves.len(), WAVE_COUNT);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_player_lane_clamps() {
        let mut player = Player::default();
        assert!(player.move_right());
        assert!(!player.move_right());
        assert_eq!(player.lane, 2);
        assert_eq!(player.pos.x, 600.0);

        assert!(player.move_left());
        assert!(player.move_left());
        assert!(!player.move_left());
        assert_eq!(player.lane, 0);
        assert_eq!(player.pos.x, 200.0);
    }

    #[test]
    fn test_obstacle_sizes() {
        let block = Obstacle::new(ObstacleKind::IceBlock, 0, -80.0);
        assert_eq!(block.size, Vec2::new(60.0, 50.0));
        assert_eq!(block.pos, Vec2::new(200.0, -80.0));
        let berg = Obstacle::new(ObstacleKind::Iceberg, 2, -80.0);
        assert_eq!(berg.size, Vec2::new(80.0, 60.0));
        assert_eq!(berg.pos.x, 600.0);
    }

    #[test]
    fn test_score_derivation() {
        let mut state = GameState::new(3);
        state.distance = 123.9;
        state.pickups = 4;
        assert_eq!(state.score(), 123 + 40);
        assert_eq!(
            state.hud(),
            Hud {
                score: 163,
                distance: 123,
                pickups: 4
            }
        );
    }

    #[test]
    fn test_score_saturates() {
        let mut state = GameState::new(3);
        state.tuning.pickup_points = u64::MAX;
        state.pickups = 2;
        assert_eq!(state.score(), u64::MAX);

        state.tuning.pickup_points = 10;
        state.distance = f64::INFINITY;
        assert_eq!(state.distance_floor(), u64::MAX);
        assert_eq!(state.hud().score, u64::MAX);
    }

    #[test]
    fn test_begin_episode_resets() {
        let mut state = GameState::new(5);
        state.begin_episode();
        state.speed = 9.0;
        state.distance = 500.0;
        state.pickups = 3;
        state.obstacle_cooldown = 17;
        state.player.move_left();
        state.obstacles.push(Obstacle::new(ObstacleKind::Iceberg, 0, 10.0));
        state.collectibles.push(Collectible::fish(2, 10.0));
        let old_waves: Vec<f32> = state.waves.iter().map(|w| w.phase).collect();

        state.end_episode();
        state.begin_episode();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.episode, 2);
        assert_eq!(state.speed, state.tuning.base_speed);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.pickups, 0);
        assert_eq!(state.obstacle_cooldown, 0);
        assert_eq!(state.player.lane, CENTER_LANE);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
        let new_waves: Vec<f32> = state.waves.iter().map(|w| w.phase).collect();
        assert_ne!(old_waves, new_waves);
    }

    #[test]
    fn test_end_episode_reports_final_stats() {
        let mut state = GameState::new(9);
        state.begin_episode();
        state.distance = 42.5;
        state.pickups = 1;
        state.events.clear();

        state.end_episode();

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.events,
            vec![
                GameEvent::PhaseChanged {
                    from: GamePhase::Playing,
                    to: GamePhase::GameOver
                },
                GameEvent::Crashed(Hud {
                    score: 52,
                    distance: 42,
                    pickups: 1
                }),
            ]
        );
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut state = GameState::new(77);
        state.begin_episode();
        state.obstacles.push(Obstacle::new(ObstacleKind::IceBlock, 1, 20.0));

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.phase, GamePhase::Playing);
        assert_eq!(restored.obstacles.len(), 1);
        assert_eq!(restored.obstacles[0].kind, ObstacleKind::IceBlock);
        // RNG state survives, so both continue identically
        let mut a = state.rng.clone();
        let mut b = restored.rng.clone();
        use rand::Rng;
        assert_eq!(a.random::<u32>(), b.random::<u32>());
    }
}
