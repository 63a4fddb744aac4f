//! A side-scrolling runner: jump over obstacles that stream in from the
//! right edge of the field, scoring one point for every obstacle that
//! makes it off-screen.
//!
//! The simulation is split the same way throughout:
//! * [`entities`]: pure data
//! * [`compute`]: pure update functions
//! * [`game_loop`]: the per-tick orchestration that interleaves updates
//!   with draw calls against a [`display::Surface`].

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod game_loop;
pub mod input;
