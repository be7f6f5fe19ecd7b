//! Enemy entities and their behavior state machines
//!
//! Each archetype is a variant of [`Behavior`], a tagged enum dispatched
//! through a match in [`Enemy::update`]. Variants that need a movement mode
//! carry it as plain data (`HDir`/`VDir`/`PatrolLeg`), so state transitions
//! are explicit assignments rather than rebinding function pointers.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Home;
use crate::consts::*;
use crate::geom::point_in_box;

pub const RANDOM_WALK_COLOR: &str = "#7e7e7e";
pub const BOUNCING_COLOR: &str = "#a72afe";
pub const HOMING_COLOR: &str = "#42ffbf";
pub const CAMPING_COLOR: &str = "#ff0000";
pub const TURRET_COLOR: &str = "#ff8929";

/// Horizontal movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HDir {
    Left,
    Right,
}

/// Vertical movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VDir {
    Up,
    Down,
}

/// Current leg of the camping patrol loop (right -> down -> left -> up)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolLeg {
    Right,
    Down,
    Left,
    Up,
}

/// Behavior archetype plus its movement state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Independent per-axis jitter each tick, biased inward near field edges
    RandomWalk,
    /// Fixed per-axis speeds with exact reflection at field boundaries
    Bouncing {
        x_dir: HDir,
        y_dir: VDir,
        x_speed: f32,
        y_speed: f32,
    },
    /// Continuously re-homes on the player, splitting speed across both axes
    Homing {
        x_dir: HDir,
        y_dir: VDir,
        speed: f32,
    },
    /// Fixed patrol loop around home's patrol square, blind to the player
    Camping { leg: PatrolLeg, speed: f32 },
    /// Stationary; fires a bullet at the player on a timer
    Turret {
        timer_ms: f32,
        fire_interval_ms: f32,
        bullet_speed: f32,
        bullet_size: f32,
    },
    /// Fire-and-forget projectile; aimed once at creation, destroyed offscreen
    Bullet { vel: Vec2 },
}

impl Behavior {
    pub fn bouncing() -> Self {
        Behavior::Bouncing {
            x_dir: HDir::Right,
            y_dir: VDir::Down,
            x_speed: 5.0,
            y_speed: 5.0,
        }
    }

    /// Initial homing modes point at the player's side at creation time
    pub fn homing(enemy_pos: Vec2, player_pos: Vec2) -> Self {
        Behavior::Homing {
            x_dir: if player_pos.x <= enemy_pos.x {
                HDir::Left
            } else {
                HDir::Right
            },
            y_dir: if player_pos.y <= enemy_pos.y {
                VDir::Up
            } else {
                VDir::Down
            },
            speed: 3.8,
        }
    }

    pub fn camping(speed: f32) -> Self {
        Behavior::Camping {
            leg: PatrolLeg::Right,
            speed,
        }
    }

    pub fn turret() -> Self {
        Behavior::Turret {
            timer_ms: 0.0,
            fire_interval_ms: 1000.0 / TURRET_FIRE_RATE,
            bullet_speed: BULLET_SPEED,
            bullet_size: BULLET_SIZE,
        }
    }
}

/// Read-only context an enemy needs for one update step
#[derive(Debug, Clone, Copy)]
pub struct FieldCtx {
    pub player: Vec2,
    pub width: f32,
    pub height: f32,
    pub home: Home,
}

/// A bullet requested by a turret; the tick loop assigns it an entity ID and
/// appends it after the current update pass.
#[derive(Debug, Clone, Copy)]
pub struct BulletSeed {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: &'static str,
}

/// Outcome of one enemy update
#[derive(Debug, Clone, Copy, Default)]
pub struct EnemyStep {
    pub hit_player: bool,
    pub fired: Option<BulletSeed>,
}

/// An enemy entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub color: &'static str,
    /// Cleared when the entity should be removed (bullets leaving the field)
    pub alive: bool,
    pub behavior: Behavior,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, size: f32, color: &'static str, behavior: Behavior) -> Self {
        Self {
            id,
            pos,
            size,
            color,
            alive: true,
            behavior,
        }
    }

    /// True iff the player's position lies inside this enemy's size-box, or
    /// this enemy's center lies inside the fixed +/-7 box around the player.
    /// The second check is a generous hit radius independent of visual size.
    pub fn hits_player(&self, player: Vec2) -> bool {
        point_in_box(player, self.pos, self.size / 2.0, self.size / 2.0)
            || point_in_box(self.pos, player, PLAYER_HIT_HALF, PLAYER_HIT_HALF)
    }

    /// Advance one tick: mutate position/state, then check the player hit.
    pub fn update(&mut self, ctx: &FieldCtx, rng: &mut Pcg32) -> EnemyStep {
        let mut step = EnemyStep::default();

        match self.behavior {
            Behavior::RandomWalk => {
                self.pos.x += jitter(rng, self.pos.x, ctx.width);
                self.pos.y += jitter(rng, self.pos.y, ctx.height);
            }

            Behavior::Bouncing {
                ref mut x_dir,
                ref mut y_dir,
                x_speed,
                y_speed,
            } => {
                match *x_dir {
                    HDir::Right => {
                        self.pos.x += x_speed;
                        if self.pos.x >= ctx.width {
                            *x_dir = HDir::Left;
                        }
                    }
                    HDir::Left => {
                        self.pos.x -= x_speed;
                        if self.pos.x <= 0.0 {
                            *x_dir = HDir::Right;
                        }
                    }
                }
                match *y_dir {
                    VDir::Down => {
                        self.pos.y += y_speed;
                        if self.pos.y >= ctx.height {
                            *y_dir = VDir::Up;
                        }
                    }
                    VDir::Up => {
                        self.pos.y -= y_speed;
                        if self.pos.y <= 0.0 {
                            *y_dir = VDir::Down;
                        }
                    }
                }
            }

            Behavior::Homing {
                ref mut x_dir,
                ref mut y_dir,
                speed,
            } => {
                let dx = ctx.player.x - self.pos.x;
                let dy = ctx.player.y - self.pos.y;
                // Split the scalar speed across axes by the angle to the
                // player; dx == 0 degenerates to pure vertical motion.
                let (x_component, y_component) = if dx == 0.0 {
                    (0.0, speed)
                } else {
                    let angle = (dy.abs() / dx.abs()).atan();
                    (speed * angle.cos(), speed * angle.sin())
                };

                match *x_dir {
                    HDir::Right => {
                        self.pos.x += x_component;
                        if ctx.player.x <= self.pos.x {
                            *x_dir = HDir::Left;
                        }
                    }
                    HDir::Left => {
                        self.pos.x -= x_component;
                        if ctx.player.x >= self.pos.x {
                            *x_dir = HDir::Right;
                        }
                    }
                }
                match *y_dir {
                    VDir::Down => {
                        self.pos.y += y_component;
                        if ctx.player.y <= self.pos.y {
                            *y_dir = VDir::Up;
                        }
                    }
                    VDir::Up => {
                        self.pos.y -= y_component;
                        if ctx.player.y >= self.pos.y {
                            *y_dir = VDir::Down;
                        }
                    }
                }
            }

            Behavior::Camping { ref mut leg, speed } => {
                let m = ctx.home.multiplier();
                let home = ctx.home.pos;
                // Snap exactly onto each corner before switching legs, so
                // the patrol never drifts off the square.
                match *leg {
                    PatrolLeg::Right => {
                        self.pos.x += speed;
                        if self.pos.x >= home.x + m {
                            self.pos = Vec2::new(home.x + m, home.y - m);
                            *leg = PatrolLeg::Down;
                        }
                    }
                    PatrolLeg::Down => {
                        self.pos.y += speed;
                        if self.pos.y >= home.y + m {
                            self.pos = Vec2::new(home.x + m, home.y + m);
                            *leg = PatrolLeg::Left;
                        }
                    }
                    PatrolLeg::Left => {
                        self.pos.x -= speed;
                        if self.pos.x <= home.x - m {
                            self.pos = Vec2::new(home.x - m, home.y + m);
                            *leg = PatrolLeg::Up;
                        }
                    }
                    PatrolLeg::Up => {
                        self.pos.y -= speed;
                        if self.pos.y <= home.y - m {
                            self.pos = Vec2::new(home.x - m, home.y - m);
                            *leg = PatrolLeg::Right;
                        }
                    }
                }
            }

            Behavior::Turret {
                ref mut timer_ms,
                fire_interval_ms,
                bullet_speed,
                bullet_size,
            } => {
                *timer_ms += TICK_MS;
                if *timer_ms >= fire_interval_ms {
                    step.fired = Some(BulletSeed {
                        pos: self.pos,
                        vel: aimed_velocity(self.pos, ctx.player, bullet_speed),
                        size: bullet_size,
                        color: self.color,
                    });
                    *timer_ms = 0.0;
                }
            }

            Behavior::Bullet { vel } => {
                // Ten substeps per tick so a fast bullet cannot tunnel
                // through the player's hit box.
                let substep = vel / BULLET_SUBSTEPS as f32;
                for _ in 0..BULLET_SUBSTEPS {
                    self.pos += substep;
                    if self.hits_player(ctx.player) {
                        step.hit_player = true;
                        return step;
                    }
                }
                if self.pos.x <= 0.0
                    || self.pos.x >= ctx.width
                    || self.pos.y <= 0.0
                    || self.pos.y >= ctx.height
                {
                    self.alive = false;
                }
                return step;
            }
        }

        step.hit_player = self.hits_player(ctx.player);
        step
    }
}

/// Velocity vector of `speed` magnitude pointing from `from` toward
/// `target`, decomposed per axis. Computed once at bullet creation; bullets
/// are never re-aimed.
pub fn aimed_velocity(from: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let (mut vx, mut vy) = if dx == 0.0 {
        (0.0, speed)
    } else {
        let angle = (dy.abs() / dx.abs()).atan();
        (speed * angle.cos(), speed * angle.sin())
    };
    if from.x >= target.x {
        vx = -vx;
    }
    if from.y >= target.y {
        vy = -vy;
    }
    Vec2::new(vx, vy)
}

/// Per-axis random-walk offset; the range narrows to point back into the
/// field when the enemy sits at or past an edge.
fn jitter(rng: &mut Pcg32, pos: f32, max: f32) -> f32 {
    let offset = if pos <= 0.0 {
        rng.random_range(0..JITTER_RANGE)
    } else if pos >= max {
        rng.random_range(-JITTER_RANGE..0)
    } else {
        rng.random_range(-JITTER_RANGE..JITTER_RANGE)
    };
    offset as f32
}
