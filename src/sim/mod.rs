//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the state
//! - Entities update in insertion order
//! - No rendering or platform dependencies

pub mod enemy;
pub mod spawner;
pub mod state;
pub mod tick;

pub use enemy::{Behavior, BulletSeed, Enemy, FieldCtx, HDir, PatrolLeg, VDir};
pub use spawner::{Archetype, EnemySpawner};
pub use state::{GamePhase, GameState, Home, Player, Waypoint};
pub use tick::tick;
