//! Game session controller
//!
//! Owns the simulation state, the renderer, and the display surface. The
//! host drives `tick()` at a fixed interval (TICK_MS) and forwards pointer
//! clicks; everything else happens inside.

use crate::config::GameConfig;
use crate::render::SceneRenderer;
use crate::sim::state::{GamePhase, GameState};
use crate::sim::tick;
use crate::surface::Surface;

pub struct GameSession<S: Surface> {
    state: GameState,
    renderer: SceneRenderer,
    surface: S,
}

impl<S: Surface> GameSession<S> {
    /// Set up a session and draw the initial frame.
    pub fn new(config: &GameConfig, surface: S) -> Self {
        let seed = config.effective_seed();
        let mut session = Self {
            state: GameState::new(config, seed),
            renderer: SceneRenderer::new(),
            surface,
        };
        session.renderer.render(&session.state, &mut session.surface);
        session
    }

    /// Pointer click in field coordinates: retarget the waypoint. Ignored
    /// once the session has ended.
    pub fn pointer_click(&mut self, x: f32, y: f32) {
        if self.state.is_running() {
            self.state.waypoint.activate(x, y);
        }
    }

    /// One fixed-interval tick: update every live entity, then render. After
    /// a terminal transition the update is a no-op and the terminal banner
    /// stays up.
    pub fn tick(&mut self) {
        tick(&mut self.state);
        self.renderer.render(&self.state, &mut self.surface);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
