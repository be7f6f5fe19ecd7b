//! Homebound entry point
//!
//! Headless demo run: builds a session from an optional JSON config file,
//! sends the player toward home, and ticks until the session ends. A real
//! front end supplies its own `Surface` and pointer events instead.

use std::path::Path;

use homebound::{GameConfig, GameSession, NullSurface};

/// Safety valve for the demo loop (~5.5 minutes of simulated time)
const MAX_TICKS: u32 = 10_000;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(Path::new(&path))?,
        None => GameConfig::default(),
    };

    let surface = NullSurface::new(config.width as f32, config.height as f32);
    let mut session = GameSession::new(&config, surface);

    // Demo pilot: march straight at home, re-clicking whenever the waypoint
    // is consumed on arrival.
    let home = session.state().home.pos;
    session.pointer_click(home.x, home.y);

    let mut ticks = 0;
    while session.is_running() && ticks < MAX_TICKS {
        if !session.state().waypoint.is_active() {
            session.pointer_click(home.x, home.y);
        }
        session.tick();
        ticks += 1;
    }

    log::info!(
        "demo finished after {} ticks: {:?}, {} enemies on the field",
        ticks,
        session.phase(),
        session.state().enemies.len()
    );
    println!("{:?} after {} ticks", session.phase(), ticks);

    Ok(())
}
