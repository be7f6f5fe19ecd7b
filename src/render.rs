//! Maps simulation state onto surface primitives
//!
//! The renderer owns the shape handles: one oval per enemy, an oval for the
//! player, an outlined rectangle for home, two crossed lines for the
//! waypoint marker, and a one-shot banner on game over. Shapes are created
//! lazily on first sight and deleted when their entity disappears.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::sim::state::{GamePhase, GameState};
use crate::surface::{ShapeId, Surface};

const WAYPOINT_COLOR: &str = "green";
const WAYPOINT_ARM: f32 = 10.0;
const HOME_COLOR: &str = "brown";
const PLAYER_COLOR: &str = "green";
const PLAYER_VISUAL_SIZE: f32 = 20.0;
const WIN_COLOR: &str = "green";
const LOSE_COLOR: &str = "red";

/// Retained shape handles for the whole scene
pub struct SceneRenderer {
    waypoint: Option<(ShapeId, ShapeId)>,
    home: Option<ShapeId>,
    player: Option<ShapeId>,
    enemies: HashMap<u32, ShapeId>,
    banner: Option<ShapeId>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            waypoint: None,
            home: None,
            player: None,
            enemies: HashMap::new(),
            banner: None,
        }
    }

    /// Draw one frame of the current state.
    pub fn render<S: Surface>(&mut self, state: &GameState, surface: &mut S) {
        self.render_waypoint(state, surface);
        self.render_home(state, surface);
        self.render_player(state, surface);
        self.render_enemies(state, surface);
        self.render_banner(state, surface);
    }

    fn render_waypoint<S: Surface>(&mut self, state: &GameState, surface: &mut S) {
        let (line1, line2) = *self.waypoint.get_or_insert_with(|| {
            (
                surface.create_line(WAYPOINT_COLOR),
                surface.create_line(WAYPOINT_COLOR),
            )
        });

        let active = state.waypoint.is_active();
        surface.set_visible(line1, active);
        surface.set_visible(line2, active);
        if active {
            let p = state.waypoint.pos;
            let a = WAYPOINT_ARM;
            surface.set_coords(line1, p.x - a, p.y - a, p.x + a, p.y + a);
            surface.set_coords(line2, p.x - a, p.y + a, p.x + a, p.y - a);
        }
    }

    fn render_home<S: Surface>(&mut self, state: &GameState, surface: &mut S) {
        let rect = *self
            .home
            .get_or_insert_with(|| surface.create_rect(HOME_COLOR));
        let half = state.home.size / 2.0;
        let p = state.home.pos;
        surface.set_coords(rect, p.x - half, p.y - half, p.x + half, p.y + half);
    }

    fn render_player<S: Surface>(&mut self, state: &GameState, surface: &mut S) {
        let oval = *self
            .player
            .get_or_insert_with(|| surface.create_oval(PLAYER_COLOR));
        let half = PLAYER_VISUAL_SIZE / 2.0;
        let p = state.player.pos;
        surface.set_coords(oval, p.x - half, p.y - half, p.x + half, p.y + half);
    }

    fn render_enemies<S: Surface>(&mut self, state: &GameState, surface: &mut S) {
        for enemy in &state.enemies {
            let oval = *self
                .enemies
                .entry(enemy.id)
                .or_insert_with(|| surface.create_oval(enemy.color));
            let half = enemy.size / 2.0;
            surface.set_coords(
                oval,
                enemy.pos.x - half,
                enemy.pos.y - half,
                enemy.pos.x + half,
                enemy.pos.y + half,
            );
        }

        // Drop shapes for entities that no longer exist (despawned bullets)
        let live: HashSet<u32> = state.enemies.iter().map(|e| e.id).collect();
        self.enemies.retain(|id, shape| {
            if live.contains(id) {
                true
            } else {
                surface.delete(*shape);
                false
            }
        });
    }

    fn render_banner<S: Surface>(&mut self, state: &GameState, surface: &mut S) {
        if self.banner.is_some() {
            return;
        }
        let (text, color) = match state.phase {
            GamePhase::Won => ("You Win", WIN_COLOR),
            GamePhase::Lost => ("You Lose", LOSE_COLOR),
            GamePhase::Running => return,
        };
        let id = surface.create_text(text, color);
        surface.set_coords(
            id,
            state.width / 2.0,
            state.height / 2.0,
            state.width / 2.0,
            state.height / 2.0,
        );
        self.banner = Some(id);
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}
