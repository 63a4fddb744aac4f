//! Held-key tracking for the four arrow keys.
//!
//! Raw key events are fed in by the host between ticks; the game logic
//! only ever queries the set.

use std::collections::HashSet;

use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a raw key to a direction; anything but an arrow key is `None`.
    pub fn from_key_code(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InputState {
    pressed: HashSet<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns the direction if the key was recognised.
    pub fn press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = Direction::from_key_code(code)?;
        self.pressed.insert(dir);
        Some(dir)
    }

    /// Record a key-up. Returns the direction if the key was recognised.
    pub fn release(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = Direction::from_key_code(code)?;
        self.pressed.remove(&dir);
        Some(dir)
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        self.pressed.contains(&dir)
    }

    /// Drop every held key (e.g. after the terminal loses focus).
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
