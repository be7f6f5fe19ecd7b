//! Homebound - a 2D chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, enemy behaviors, spawning)
//! - `geom`: Point/box collision primitives
//! - `surface`: Display surface abstraction (primitive shapes, opaque handles)
//! - `render`: Maps simulation state onto surface primitives
//! - `session`: Owns state + renderer, drives the fixed tick

pub mod config;
pub mod geom;
pub mod render;
pub mod session;
pub mod sim;
pub mod surface;

pub use config::GameConfig;
pub use session::GameSession;
pub use surface::{NullSurface, ShapeId, Surface};

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval in milliseconds (~30 Hz)
    pub const TICK_MS: f32 = 33.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 50.0;

    /// Home defaults
    pub const HOME_SIZE: f32 = 20.0;
    /// Home sits this far in from the right field edge
    pub const HOME_INSET_X: f32 = 100.0;

    /// Half-side of the no-spawn zone centered on the player (200x200 total)
    pub const SAFE_ZONE_HALF: f32 = 100.0;

    /// Enemy sizes are sampled from [ENEMY_SIZE_MIN, ENEMY_SIZE_MAX)
    pub const ENEMY_SIZE_MIN: i32 = 15;
    pub const ENEMY_SIZE_MAX: i32 = 30;

    /// Fixed hit radius around the player, independent of enemy size
    pub const PLAYER_HIT_HALF: f32 = 7.0;

    /// Random-walk jitter magnitude per axis per tick
    pub const JITTER_RANGE: i32 = 15;

    /// Turret defaults
    pub const TURRET_FIRE_RATE: f32 = 1.3;
    pub const BULLET_SPEED: f32 = 18.0;
    pub const BULLET_SIZE: f32 = 5.0;
    /// Bullet motion substeps per tick (anti-tunneling)
    pub const BULLET_SUBSTEPS: u32 = 10;

    /// Recurring spawn delay ranges in milliseconds
    pub const SPAWN_DELAY_FIRST_MS: std::ops::Range<u32> = 500..1000;
    pub const SPAWN_DELAY_MS: std::ops::Range<u32> = 1000..1500;
}
