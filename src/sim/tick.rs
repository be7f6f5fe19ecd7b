//! Fixed-interval simulation tick
//!
//! Update order per tick: player first (may win), then every live enemy in
//! insertion order (may lose), then the spawner deadline. Bullets requested
//! by turrets during the pass are appended afterward and participate
//! starting the next tick. A terminal phase makes the tick a no-op, so no
//! scheduled work can mutate state after the session ends.

use crate::consts::TICK_MS;
use crate::geom::distance;
use crate::sim::enemy::{Behavior, BulletSeed, Enemy, FieldCtx};
use crate::sim::spawner;
use crate::sim::state::GameState;

/// Advance the session by one fixed tick.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.time_ms += TICK_MS as f64;

    step_player(state);
    if state.is_running() {
        step_enemies(state);
    }
    spawner::service(state);
}

/// Move the player toward the active waypoint, or win if home is reached.
fn step_player(state: &mut GameState) {
    if state.home.contains(state.player.pos) {
        state.game_over_win();
        return;
    }
    if !state.waypoint.is_active() {
        return;
    }

    let target = state.waypoint.pos;
    let heading = target - state.player.pos;
    if heading != glam::Vec2::ZERO {
        state.player.pos += heading.normalize() * state.player.speed;
    }
    // Arrived: closer than one step, stop steering so the player cannot
    // oscillate around the target.
    if distance(state.player.pos, target) < state.player.speed {
        state.waypoint.deactivate();
    }
}

/// Update all enemies present at the start of the tick, in insertion order.
fn step_enemies(state: &mut GameState) {
    let ctx = FieldCtx {
        player: state.player.pos,
        width: state.width,
        height: state.height,
        home: state.home,
    };

    let mut seeds: Vec<BulletSeed> = Vec::new();
    let mut player_hit = false;
    let count = state.enemies.len();

    {
        let GameState { enemies, rng, .. } = state;
        for enemy in enemies.iter_mut().take(count) {
            let step = enemy.update(&ctx, rng);
            if let Some(seed) = step.fired {
                seeds.push(seed);
            }
            if step.hit_player {
                player_hit = true;
                break;
            }
        }
    }

    if player_hit {
        // First collision wins; the rest of the pass is abandoned.
        state.game_over_lose();
        return;
    }

    // Bullets that left the field this tick
    state.enemies.retain(|e| e.alive);

    // Turret bullets join the collection now and update from the next tick
    for seed in seeds {
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(
            id,
            seed.pos,
            seed.size,
            seed.color,
            Behavior::Bullet { vel: seed.vel },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::enemy::{Behavior, Enemy, TURRET_COLOR};
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    /// A session with no enemies and the spawner silenced, so player and
    /// single-enemy behaviors can be observed in isolation.
    fn quiet_state() -> GameState {
        let mut state = GameState::new(&GameConfig::default(), 42);
        state.enemies.clear();
        state.spawner.next_spawn_at_ms = f64::MAX;
        state
    }

    #[test]
    fn player_walks_toward_active_waypoint() {
        let mut state = quiet_state();
        let start = state.player.pos;
        state.waypoint.activate(start.x + 100.0, start.y);
        tick(&mut state);
        assert!((state.player.pos.x - (start.x + 5.0)).abs() < 1e-4);
        assert_eq!(state.player.pos.y, start.y);
    }

    #[test]
    fn player_stays_put_without_waypoint() {
        let mut state = quiet_state();
        let start = state.player.pos;
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.player.pos, start);
    }

    #[test]
    fn arrival_one_step_away_deactivates_waypoint() {
        let mut state = quiet_state();
        let start = state.player.pos;
        // Exactly one step of travel left
        state.waypoint.activate(start.x + state.player.speed, start.y);
        tick(&mut state);
        assert!(!state.waypoint.is_active());
        let arrived = state.player.pos;
        // And the player stops on subsequent ticks
        tick(&mut state);
        assert_eq!(state.player.pos, arrived);
    }

    #[test]
    fn player_already_on_waypoint_does_not_jitter() {
        let mut state = quiet_state();
        let start = state.player.pos;
        state.waypoint.activate(start.x, start.y);
        tick(&mut state);
        assert_eq!(state.player.pos, start);
        assert!(!state.waypoint.is_active());
    }

    #[test]
    fn reaching_home_wins() {
        let mut state = quiet_state();
        state.player.pos = state.home.pos;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn enemy_contact_loses() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        // Size 40 box keeps the player inside even after the maximum jitter
        state.enemies.push(Enemy::new(
            id,
            state.player.pos,
            40.0,
            "#000000",
            Behavior::RandomWalk,
        ));
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn terminal_state_freezes_the_world() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(
            id,
            Vec2::new(400.0, 100.0),
            20.0,
            "#000000",
            Behavior::bouncing(),
        ));
        state.game_over_lose();

        let player = state.player.pos;
        let enemy = state.enemies[0].pos;
        let time = state.time_ms;
        state.waypoint.activate(600.0, 400.0);
        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.player.pos, player);
        assert_eq!(state.enemies[0].pos, enemy);
        assert_eq!(state.time_ms, time);
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn turret_bullet_joins_on_the_next_tick() {
        let mut state = quiet_state();
        let turret_pos = Vec2::new(400.0, 100.0);
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(
            id,
            turret_pos,
            20.0,
            TURRET_COLOR,
            Behavior::turret(),
        ));

        for _ in 0..23 {
            tick(&mut state);
            assert_eq!(state.enemies.len(), 1);
        }
        // Tick 24: the turret fires; the bullet is appended unmoved
        tick(&mut state);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.enemies[1].pos, turret_pos);
        assert!(matches!(state.enemies[1].behavior, Behavior::Bullet { .. }));

        // Tick 25: the bullet starts moving
        tick(&mut state);
        assert_ne!(state.enemies[1].pos, turret_pos);
    }

    #[test]
    fn offscreen_bullet_is_removed() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(
            id,
            Vec2::new(state.width - 10.0, 100.0),
            5.0,
            TURRET_COLOR,
            Behavior::Bullet {
                vel: Vec2::new(18.0, 0.0),
            },
        ));
        tick(&mut state);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn spawner_fires_through_the_tick_loop() {
        let mut state = GameState::new(&GameConfig::default(), 42);
        // Drop the initial wave so nothing can end the session before the
        // spawner's first deadline.
        state.enemies.clear();
        let before = state.enemies.len();
        let deadline = state.spawner.next_spawn_at_ms;
        while state.time_ms < deadline {
            tick(&mut state);
            if !state.is_running() {
                break;
            }
        }
        assert!(state.enemies.len() > before);
    }
}
