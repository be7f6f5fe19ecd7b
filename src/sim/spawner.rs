//! Enemy generation and the recurring spawn schedule
//!
//! Initial population places one enemy of every archetype per level
//! increment. Afterward a recurring deadline spawns `floor(level * 1.5) + 1`
//! random-archetype enemies at a randomized cadence. The deadline is only
//! serviced while the session is running; a terminal state silences it.

use glam::Vec2;
use rand::Rng;

use super::enemy::{self, Behavior, Enemy};
use super::state::GameState;
use crate::consts::*;
use crate::geom::point_in_box;

/// The archetypes the spawner can create. Bullets are never spawned
/// directly; only turrets produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    RandomWalk,
    Homing,
    Camping,
    Bouncing,
    Turret,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::RandomWalk,
        Archetype::Homing,
        Archetype::Camping,
        Archetype::Bouncing,
        Archetype::Turret,
    ];
}

/// Recurring spawn schedule state
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawner {
    /// Simulated time at which the next batch spawns
    pub next_spawn_at_ms: f64,
}

impl EnemySpawner {
    pub fn new() -> Self {
        Self {
            next_spawn_at_ms: 0.0,
        }
    }
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Place the initial enemies: one of each archetype per level increment.
pub fn populate_initial(state: &mut GameState) {
    for _ in 0..state.level {
        for archetype in Archetype::ALL {
            create_enemy(state, archetype);
        }
    }
}

/// Schedule the first recurring spawn after a short random delay.
pub fn schedule_first(state: &mut GameState) {
    let delay = state.rng.random_range(SPAWN_DELAY_FIRST_MS);
    state.spawner.next_spawn_at_ms = state.time_ms + delay as f64;
}

/// Service the recurring spawn deadline. Called once per tick; does nothing
/// before the deadline and never fires once the session has ended.
pub fn service(state: &mut GameState) {
    if !state.is_running() || state.time_ms < state.spawner.next_spawn_at_ms {
        return;
    }

    let count = spawn_batch_size(state.level);
    for _ in 0..count {
        let idx = state.rng.random_range(0..Archetype::ALL.len());
        create_enemy(state, Archetype::ALL[idx]);
    }
    log::info!(
        "spawned {} more enemies at t={}ms ({} total)",
        count,
        state.time_ms,
        state.enemies.len()
    );

    let delay = state.rng.random_range(SPAWN_DELAY_MS);
    state.spawner.next_spawn_at_ms = state.time_ms + delay as f64;
}

/// Number of enemies per recurring batch
pub fn spawn_batch_size(level: u32) -> u32 {
    (level as f32 * 1.5) as u32 + 1
}

/// Create one enemy of the given archetype and append it to the collection.
pub fn create_enemy(state: &mut GameState, archetype: Archetype) {
    let size = state
        .rng
        .random_range(ENEMY_SIZE_MIN..ENEMY_SIZE_MAX) as f32;

    let pos = if archetype == Archetype::Camping {
        // Camping enemies start exactly at the patrol's top-left corner
        let m = state.home.multiplier();
        Vec2::new(state.home.pos.x - m, state.home.pos.y - m)
    } else {
        sample_position(state, size)
    };

    let behavior = match archetype {
        Archetype::RandomWalk => Behavior::RandomWalk,
        Archetype::Homing => Behavior::homing(pos, state.player.pos),
        Archetype::Camping => {
            let speed = state.rng.random_range(3..5) as f32;
            Behavior::camping(speed)
        }
        Archetype::Bouncing => Behavior::bouncing(),
        Archetype::Turret => Behavior::turret(),
    };

    let color = match archetype {
        Archetype::RandomWalk => enemy::RANDOM_WALK_COLOR,
        Archetype::Homing => enemy::HOMING_COLOR,
        Archetype::Camping => enemy::CAMPING_COLOR,
        Archetype::Bouncing => enemy::BOUNCING_COLOR,
        Archetype::Turret => enemy::TURRET_COLOR,
    };

    let id = state.next_entity_id();
    state.enemies.push(Enemy::new(id, pos, size, color, behavior));
}

/// Rejection-sample a spawn point inside the field but outside both the
/// player's safe zone and home's patrol vicinity.
fn sample_position(state: &mut GameState, size: f32) -> Vec2 {
    let half = (size / 2.0) as i32;
    let player = state.player.pos;
    let home = state.home;
    loop {
        let x = state.rng.random_range(half..state.width as i32 - half) as f32;
        let y = state.rng.random_range(half..state.height as i32 - half) as f32;
        let candidate = Vec2::new(x, y);
        if !in_safe_area(candidate, player) && !in_home_area(candidate, home) {
            return candidate;
        }
    }
}

/// The 200x200 no-spawn zone centered on the player
fn in_safe_area(p: Vec2, player: Vec2) -> bool {
    point_in_box(p, player, SAFE_ZONE_HALF, SAFE_ZONE_HALF)
}

/// The patrol-square vicinity around home, sized by the patrol half-side
fn in_home_area(p: Vec2, home: super::state::Home) -> bool {
    let dist = home.multiplier();
    point_in_box(p, home.pos, dist, dist)
}
