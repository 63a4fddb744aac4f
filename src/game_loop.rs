//! Per-tick orchestration.
//!
//! A tick interleaves the pure updates from [`crate::compute`] with draw
//! calls, in a fixed order: clear, background, player, obstacles (spawn,
//! then draw/update/cull each), player update, score overlay.  The host
//! calls [`tick`] once per frame until the returned state is `GameOver`.

use std::io;

use log::{debug, info};
use rand::Rng;

use crate::compute::{spawn_check, update_background, update_obstacle, update_player};
use crate::config::GameConfig;
use crate::display::{self, SpriteSheet, Surface};
use crate::entities::{GameState, GameStatus, ObstacleSpawner};
use crate::input::InputState;

/// Run one spawner tick: spawn decision first, then draw and update every
/// obstacle (a just-spawned one included), then cull those that left the
/// field.  Returns the new spawner and the number of obstacles removed.
pub fn tick_spawner<S: Surface, R: Rng>(
    spawner: &ObstacleSpawner,
    delta_time: f64,
    config: &GameConfig,
    surface: &mut S,
    rng: &mut R,
) -> io::Result<(ObstacleSpawner, u32)> {
    let mut spawner = spawn_check(spawner, delta_time, config, rng);

    let mut removed = 0;
    let mut live = Vec::with_capacity(spawner.obstacles.len());
    for obstacle in &spawner.obstacles {
        display::draw_actor(surface, SpriteSheet::Obstacle, obstacle, config.show_hitboxes)?;
        let updated = update_obstacle(obstacle, delta_time);
        if updated.marked_for_removal {
            if !obstacle.marked_for_removal {
                removed += 1;
            }
        } else {
            live.push(updated);
        }
    }
    if removed > 0 {
        debug!("{} obstacle(s) left the field, {} live", removed, live.len());
    }
    spawner.obstacles = live;

    Ok((spawner, removed))
}

/// Advance the game by one frame at host time `timestamp` (ms).
///
/// A game-over state is final: ticking it draws nothing and returns it
/// unchanged.
pub fn tick<S: Surface, R: Rng>(
    state: &GameState,
    input: &InputState,
    timestamp: f64,
    surface: &mut S,
    rng: &mut R,
) -> io::Result<GameState> {
    if state.status == GameStatus::GameOver {
        return Ok(state.clone());
    }
    let config = &state.config;
    let delta_time = timestamp - state.last_timestamp;

    surface.clear(display::field_rect(config))?;
    display::draw_background(surface, &state.background)?;
    let background = update_background(&state.background);
    display::draw_actor(surface, SpriteSheet::Player, &state.player, config.show_hitboxes)?;

    let (spawner, removed) = tick_spawner(&state.spawner, delta_time, config, surface, rng)?;
    let player = update_player(&state.player, input, delta_time, &spawner.obstacles, config);

    let score = state.score + removed;
    display::draw_score(surface, score)?;

    let status = if player.is_game_over {
        info!("game over after {} ticks, score {}", state.tick + 1, score);
        display::draw_game_over(surface, config)?;
        GameStatus::GameOver
    } else {
        GameStatus::Running
    };
    surface.present()?;

    Ok(GameState {
        player,
        spawner,
        background,
        score,
        status,
        last_timestamp: timestamp,
        tick: state.tick + 1,
        ..state.clone()
    })
}
