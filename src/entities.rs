//! All game entity types: pure data, no logic.

use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Animation ─────────────────────────────────────────────────────────────────

/// Sprite-sheet playback state, embedded in every animated actor.
///
/// `frame_x` selects the column of the sheet, `frame_y` the row (one row per
/// animation set).  `frame_x` stays within `0..=max_frame`.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub frame_x: u32,
    pub frame_y: u32,
    pub max_frame: u32,
    /// Time accumulated since the last frame advance (ms).
    pub frame_timer: f64,
    /// Time each frame stays up (ms).
    pub frame_interval: f64,
}

// ── Actors ────────────────────────────────────────────────────────────────────

/// Shape shared by everything drawn from a sprite sheet and tested for
/// collisions.
pub trait Actor {
    /// `(x, y, width, height)` of the top-left anchored bounding box.
    fn bounds(&self) -> (f64, f64, f64, f64);
    fn animation(&self) -> &Animation;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub vx: f64,
    pub vy: f64,
    pub animation: Animation,
    /// Latches once an obstacle touches the player.
    pub is_game_over: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Leftward speed (px per tick).
    pub velocity_x: f64,
    pub animation: Animation,
    /// Latches once the obstacle has fully left the field.
    pub marked_for_removal: bool,
}

impl Actor for Player {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }

    fn animation(&self) -> &Animation {
        &self.animation
    }
}

impl Actor for Obstacle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }

    fn animation(&self) -> &Animation {
        &self.animation
    }
}

// ── Spawner & scenery ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleSpawner {
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    /// Time since the last spawn (ms).
    pub timer: f64,
    /// Offset applied to the base interval for the next spawn (ms).
    pub jitter: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed_x: f64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub spawner: ObstacleSpawner,
    pub background: Background,
    pub score: u32,
    pub status: GameStatus,
    /// Host timestamp of the previous tick (ms).
    pub last_timestamp: f64,
    /// Number of ticks run so far.
    pub tick: u64,
}
