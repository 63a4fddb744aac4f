//! Tunable constants of the simulation.
//!
//! Every number the game logic depends on lives here, and a single value is
//! threaded through `GameState`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("animation rate must be positive, got {0}")]
    InvalidAnimationFps(f64),

    #[error("{what} ({size}px) does not fit in a {field}px field")]
    SpriteTooLarge {
        what: &'static str,
        size: f64,
        field: f64,
    },

    #[error("spawn interval must be positive, got {0}ms")]
    InvalidSpawnInterval(f64),

    #[error("spawn jitter {jitter}ms must be non-negative and below the {interval}ms interval")]
    InvalidSpawnJitter { jitter: f64, interval: f64 },

    #[error("{what} must be non-negative, got {value}")]
    NegativeSpeed { what: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Field ────────────────────────────────────────────────────────────────
    pub field_width: f64,
    pub field_height: f64,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_width: f64,
    pub player_height: f64,
    /// Horizontal speed while Left/Right is held (px per tick).
    pub run_speed: f64,
    /// Upward velocity added when a jump fires (px per tick).
    pub jump_impulse: f64,
    /// Added to the vertical velocity every airborne tick (px per tick²).
    pub gravity: f64,
    pub running_max_frame: u32,
    pub jumping_max_frame: u32,

    // ── Obstacles ────────────────────────────────────────────────────────────
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    /// Leftward speed (px per tick).
    pub obstacle_speed: f64,
    pub obstacle_max_frame: u32,
    /// Base time between spawns (ms).
    pub spawn_interval: f64,
    /// Half-width of the uniform jitter range applied to `spawn_interval` (ms).
    pub spawn_jitter: f64,

    // ── Scenery & presentation ───────────────────────────────────────────────
    /// Sprite-sheet frames per second, shared by every animated actor.
    pub animation_fps: f64,
    pub background_width: f64,
    pub background_height: f64,
    pub scroll_speed: f64,
    pub show_hitboxes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 720.0,

            player_width: 200.0,
            player_height: 200.0,
            run_speed: 5.0,
            jump_impulse: 30.0,
            gravity: 0.9,
            running_max_frame: 8,
            jumping_max_frame: 5,

            obstacle_width: 160.0,
            obstacle_height: 119.0,
            obstacle_speed: 5.0,
            obstacle_max_frame: 5,
            spawn_interval: 2000.0,
            spawn_jitter: 500.0,

            animation_fps: 20.0,
            background_width: 2400.0,
            background_height: 720.0,
            scroll_speed: 0.0,
            show_hitboxes: true,
        }
    }
}

impl GameConfig {
    /// Milliseconds each sprite frame stays on screen.
    pub fn frame_interval(&self) -> f64 {
        1000.0 / self.animation_fps
    }

    /// Resting `y` of the player's top edge.
    pub fn player_ground_y(&self) -> f64 {
        self.field_height - self.player_height
    }

    /// Lane `y` of every obstacle's top edge.
    pub fn obstacle_ground_y(&self) -> f64 {
        self.field_height - self.obstacle_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.animation_fps > 0.0) {
            return Err(ConfigError::InvalidAnimationFps(self.animation_fps));
        }

        let sprites = [
            ("player width", self.player_width, self.field_width),
            ("player height", self.player_height, self.field_height),
            ("obstacle height", self.obstacle_height, self.field_height),
        ];
        for (what, size, field) in sprites {
            if !(size > 0.0 && size <= field) {
                return Err(ConfigError::SpriteTooLarge { what, size, field });
            }
        }

        if !(self.spawn_interval > 0.0) {
            return Err(ConfigError::InvalidSpawnInterval(self.spawn_interval));
        }
        if !(self.spawn_jitter >= 0.0 && self.spawn_jitter < self.spawn_interval) {
            return Err(ConfigError::InvalidSpawnJitter {
                jitter: self.spawn_jitter,
                interval: self.spawn_interval,
            });
        }

        let speeds = [
            ("run speed", self.run_speed),
            ("jump impulse", self.jump_impulse),
            ("gravity", self.gravity),
            ("obstacle speed", self.obstacle_speed),
            ("scroll speed", self.scroll_speed),
        ];
        for (what, value) in speeds {
            if value < 0.0 {
                return Err(ConfigError::NegativeSpeed { what, value });
            }
        }
        Ok(())
    }
}

