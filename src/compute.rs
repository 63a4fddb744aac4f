//! Pure game-logic functions.
//!
//! Every public function takes immutable references to the current values
//! (and, where needed, an RNG handle) and returns brand-new values.  Side
//! effects are limited to the injected RNG.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Actor, Animation, Background, GameState, GameStatus, Obstacle, ObstacleSpawner, Player,
};
use crate::input::{Direction, InputState};

/// Sprite-sheet rows of the player's animation sets.
pub const RUNNING_ROW: u32 = 0;
pub const JUMPING_ROW: u32 = 1;

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_animation(frame_y: u32, max_frame: u32, config: &GameConfig) -> Animation {
    Animation {
        frame_x: 0,
        frame_y,
        max_frame,
        frame_timer: 0.0,
        frame_interval: config.frame_interval(),
    }
}

/// The player starts at the left edge, standing on the ground.
pub fn new_player(config: &GameConfig) -> Player {
    Player {
        x: 0.0,
        y: config.player_ground_y(),
        width: config.player_width,
        height: config.player_height,
        vx: 0.0,
        vy: 0.0,
        animation: new_animation(RUNNING_ROW, config.running_max_frame, config),
        is_game_over: false,
    }
}

/// A fresh obstacle sits just past the right edge, in the ground lane.
pub fn new_obstacle(config: &GameConfig) -> Obstacle {
    Obstacle {
        x: config.field_width,
        y: config.obstacle_ground_y(),
        width: config.obstacle_width,
        height: config.obstacle_height,
        velocity_x: config.obstacle_speed,
        animation: new_animation(0, config.obstacle_max_frame, config),
        marked_for_removal: false,
    }
}

pub fn new_background(config: &GameConfig) -> Background {
    Background {
        x: 0.0,
        y: 0.0,
        width: config.background_width,
        height: config.background_height,
        speed_x: config.scroll_speed,
    }
}

/// Uniform draw from `[-spawn_jitter, spawn_jitter)`.
pub fn draw_jitter(config: &GameConfig, rng: &mut impl Rng) -> f64 {
    if config.spawn_jitter > 0.0 {
        rng.gen_range(-config.spawn_jitter..config.spawn_jitter)
    } else {
        0.0
    }
}

/// Build the initial game state.  The first spawn's jitter is drawn here.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let jitter = draw_jitter(&config, rng);
    GameState {
        player: new_player(&config),
        spawner: ObstacleSpawner {
            obstacles: Vec::new(),
            timer: 0.0,
            jitter,
        },
        background: new_background(&config),
        score: 0,
        status: GameStatus::Running,
        last_timestamp: 0.0,
        tick: 0,
        config,
    }
}

// ── Animation ────────────────────────────────────────────────────────────────

/// Advance the sprite frame once the current one has been up for longer
/// than `frame_interval`; otherwise just accumulate time.
pub fn advance_animation(animation: &Animation, delta_time: f64) -> Animation {
    if animation.frame_timer > animation.frame_interval {
        let frame_x = if animation.frame_x >= animation.max_frame {
            0
        } else {
            animation.frame_x + 1
        };
        Animation {
            frame_x,
            frame_timer: 0.0,
            ..animation.clone()
        }
    } else {
        Animation {
            frame_timer: animation.frame_timer + delta_time,
            ..animation.clone()
        }
    }
}

/// Switch to another animation set (sheet row).  A frame index past the new
/// set's last frame restarts at 0.
pub fn select_animation(animation: &Animation, frame_y: u32, max_frame: u32) -> Animation {
    let frame_x = if animation.frame_x > max_frame {
        0
    } else {
        animation.frame_x
    };
    Animation {
        frame_x,
        frame_y,
        max_frame,
        ..animation.clone()
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

pub fn center(actor: &impl Actor) -> (f64, f64) {
    let (x, y, w, h) = actor.bounds();
    (x + w / 2.0, y + h / 2.0)
}

/// Radius of the collision circle: half the sprite width.
pub fn hit_radius(actor: &impl Actor) -> f64 {
    let (_, _, w, _) = actor.bounds();
    w / 2.0
}

/// Circle-circle overlap between the player and an obstacle.
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    let (px, py) = center(player);
    let (ox, oy) = center(obstacle);
    let distance = (ox - px).hypot(oy - py);
    distance < hit_radius(obstacle) + hit_radius(player)
}

// ── Player ───────────────────────────────────────────────────────────────────

pub fn on_ground(player: &Player, config: &GameConfig) -> bool {
    player.y >= config.field_height - player.height
}

/// Advance the player by one tick.
///
/// Order matters: collisions are checked against the positions at the start
/// of the tick, and the jump branch relies on the vertical displacement
/// below lifting the player off the ground before the next tick's
/// `on_ground` test, so holding Up yields a single impulse.
pub fn update_player(
    player: &Player,
    input: &InputState,
    delta_time: f64,
    obstacles: &[Obstacle],
    config: &GameConfig,
) -> Player {
    let mut p = player.clone();

    // ── 1. Collisions (game over latches) ────────────────────────────────────
    if obstacles.iter().any(|o| collides(player, o)) {
        p.is_game_over = true;
    }

    // ── 2. Sprite animation ──────────────────────────────────────────────────
    p.animation = advance_animation(&p.animation, delta_time);

    // ── 3. Controls ──────────────────────────────────────────────────────────
    if input.is_pressed(Direction::Right) {
        p.vx = config.run_speed;
    } else if input.is_pressed(Direction::Left) {
        p.vx = -config.run_speed;
    } else if input.is_pressed(Direction::Up) && on_ground(&p, config) {
        p.vy -= config.jump_impulse;
    } else {
        p.vx = 0.0;
    }

    // ── 4. Horizontal movement ───────────────────────────────────────────────
    let max_x = config.field_width - p.width;
    p.x = (p.x + p.vx).max(0.0).min(max_x);

    // ── 5. Vertical movement ─────────────────────────────────────────────────
    p.y += p.vy;
    if !on_ground(&p, config) {
        p.vy += config.gravity;
        p.animation = select_animation(&p.animation, JUMPING_ROW, config.jumping_max_frame);
    } else {
        p.vy = 0.0;
        p.animation = select_animation(&p.animation, RUNNING_ROW, config.running_max_frame);
    }
    let ground_y = config.field_height - p.height;
    p.y = p.y.max(0.0).min(ground_y);

    p
}

// ── Obstacles ────────────────────────────────────────────────────────────────

pub fn update_obstacle(obstacle: &Obstacle, delta_time: f64) -> Obstacle {
    let x = obstacle.x - obstacle.velocity_x;
    Obstacle {
        x,
        animation: advance_animation(&obstacle.animation, delta_time),
        marked_for_removal: obstacle.marked_for_removal || x < -obstacle.width,
        ..obstacle.clone()
    }
}

/// Spawn decision for one tick.  At most one obstacle is appended; the
/// jitter for the following spawn is redrawn each time one is.
pub fn spawn_check(
    spawner: &ObstacleSpawner,
    delta_time: f64,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> ObstacleSpawner {
    if spawner.timer > config.spawn_interval + spawner.jitter {
        let mut obstacles = spawner.obstacles.clone();
        obstacles.push(new_obstacle(config));
        let jitter = draw_jitter(config, rng);
        debug!(
            "spawned obstacle after {:.0}ms; next in {:.0}ms",
            spawner.timer,
            config.spawn_interval + jitter
        );
        ObstacleSpawner {
            obstacles,
            timer: 0.0,
            jitter,
        }
    } else {
        ObstacleSpawner {
            timer: spawner.timer + delta_time,
            ..spawner.clone()
        }
    }
}

// ── Scenery ──────────────────────────────────────────────────────────────────

/// Scroll the background left, wrapping once the first copy is fully off
/// the field.
pub fn update_background(background: &Background) -> Background {
    let x = background.x - background.speed_x;
    Background {
        x: if x < -background.width { 0.0 } else { x },
        ..background.clone()
    }
}
