//! Game state and core entity types
//!
//! Everything the simulation mutates lives here. The state owns its RNG so a
//! session is fully reproducible from a seed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawner::{self, EnemySpawner};
use crate::config::GameConfig;
use crate::consts::*;
use crate::geom::point_in_box;
use crate::sim::enemy::Enemy;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player reached home
    Won,
    /// An enemy caught the player
    Lost,
}

/// The player's current movement target, set by pointer clicks
#[derive(Debug, Clone, Copy)]
pub struct Waypoint {
    pub pos: Vec2,
    active: bool,
}

impl Waypoint {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            active: false,
        }
    }

    /// Point the player at a new target
    pub fn activate(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.active = true;
    }

    /// Mark as arrived; an inactive waypoint never steers the player
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Waypoint {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed goal region; reaching it wins the session
#[derive(Debug, Clone, Copy)]
pub struct Home {
    pub pos: Vec2,
    pub size: f32,
}

impl Home {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    /// Inclusive containment test against the home square
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_box(p, self.pos, self.size / 2.0, self.size / 2.0)
    }

    /// Half-side of the camping patrol square anchored on home
    pub fn multiplier(&self) -> f32 {
        self.size / 2.0 * 5.0
    }
}

/// The player avatar
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: PLAYER_SPEED,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub level: u32,
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    /// Simulated time, advanced TICK_MS per tick
    pub time_ms: f64,
    pub waypoint: Waypoint,
    pub home: Home,
    pub player: Player,
    /// Live enemies in insertion order
    pub enemies: Vec<Enemy>,
    pub spawner: EnemySpawner,
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Set up a session: place home and player, populate the initial enemy
    /// wave, and schedule the first recurring spawn.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let width = config.width as f32;
        let height = config.height as f32;

        let mut state = Self {
            level: config.level,
            width,
            height,
            phase: GamePhase::Running,
            time_ms: 0.0,
            waypoint: Waypoint::new(),
            home: Home::new(Vec2::new(width - HOME_INSET_X, height / 2.0), HOME_SIZE),
            player: Player::new(Vec2::new(PLAYER_START_X, height / 2.0)),
            enemies: Vec::new(),
            spawner: EnemySpawner::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        spawner::populate_initial(&mut state);
        spawner::schedule_first(&mut state);

        log::info!(
            "session started: level {}, field {}x{}, seed {}",
            state.level,
            config.width,
            config.height,
            seed
        );

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Transition to the won state. Idempotent: only the first terminal
    /// transition in a session takes effect.
    pub fn game_over_win(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Won;
            log::info!("player reached home at t={}ms", self.time_ms);
        }
    }

    /// Transition to the lost state. Idempotent; the first collision wins.
    pub fn game_over_lose(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Lost;
            log::info!("player caught at t={}ms", self.time_ms);
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        GameState::new(&GameConfig::default(), 7)
    }

    #[test]
    fn home_contains_is_edge_inclusive() {
        let home = Home::new(Vec2::new(100.0, 100.0), 20.0);
        assert!(home.contains(Vec2::new(90.0, 100.0)));
        assert!(home.contains(Vec2::new(110.0, 100.0)));
        assert!(home.contains(Vec2::new(100.0, 90.0)));
        assert!(home.contains(Vec2::new(100.0, 110.0)));
        assert!(home.contains(Vec2::new(90.0, 90.0)));
        assert!(!home.contains(Vec2::new(89.9, 100.0)));
        assert!(!home.contains(Vec2::new(100.0, 110.1)));
    }

    #[test]
    fn patrol_multiplier_scales_with_home_size() {
        let home = Home::new(Vec2::ZERO, 20.0);
        assert_eq!(home.multiplier(), 50.0);
    }

    #[test]
    fn waypoint_starts_inactive() {
        let mut wp = Waypoint::new();
        assert!(!wp.is_active());
        wp.activate(3.0, 4.0);
        assert!(wp.is_active());
        assert_eq!(wp.pos, Vec2::new(3.0, 4.0));
        wp.deactivate();
        assert!(!wp.is_active());
    }

    #[test]
    fn initial_population_is_level_times_archetypes() {
        let state = test_state();
        assert_eq!(state.enemies.len(), 5);

        let config = GameConfig {
            level: 3,
            ..Default::default()
        };
        let state = GameState::new(&config, 7);
        assert_eq!(state.enemies.len(), 15);
    }

    #[test]
    fn terminal_transitions_are_idempotent_and_exclusive() {
        let mut state = test_state();
        state.game_over_win();
        assert_eq!(state.phase, GamePhase::Won);
        // A later collision in the same tick must not override the win
        state.game_over_lose();
        assert_eq!(state.phase, GamePhase::Won);
        state.game_over_win();
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn same_seed_builds_identical_sessions() {
        let a = test_state();
        let b = test_state();
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.size, eb.size);
        }
    }
}
