//! Rendering layer.
//!
//! The game draws through the [`Surface`] trait only: sprites cut from a
//! sheet, text, and collision-circle outlines, all in field coordinates.
//! No game logic is performed here; these helpers only translate state
//! into draw calls.  [`terminal::TerminalSurface`] is the crossterm backend.

pub mod terminal;

use std::io;

use crate::compute::{center, hit_radius};
use crate::config::GameConfig;
use crate::entities::{Actor, Background};

/// Axis-aligned rectangle in field (or sheet) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Pre-loaded sprite sheets, addressed by frame column × row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Background,
    Player,
    Obstacle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
    pub align: TextAlign,
}

pub const HUD_FONT: Font = Font {
    size_px: 40.0,
    family: "Helvetica",
    align: TextAlign::Left,
};

pub const BANNER_FONT: Font = Font {
    size_px: 40.0,
    family: "Helvetica",
    align: TextAlign::Center,
};

pub const GAME_OVER_TEXT: &str = "GAME OVER, try again!";

/// A 2D drawing target.
///
/// Implementations: `TerminalSurface` (crossterm), recording surfaces in
/// tests.
pub trait Surface {
    fn clear(&mut self, region: Rect) -> io::Result<()>;

    /// Copy `src` of `sheet` onto `dst` of the field.
    fn draw_sprite(&mut self, sheet: SpriteSheet, src: Rect, dst: Rect) -> io::Result<()>;

    /// `y` is the text baseline; `x` is interpreted per `font.align`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: Font) -> io::Result<()>;

    fn draw_circle_outline(&mut self, cx: f64, cy: f64, r: f64) -> io::Result<()>;

    /// End of frame.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn field_rect(config: &GameConfig) -> Rect {
    Rect::new(0.0, 0.0, config.field_width, config.field_height)
}

/// The background image twice, side by side, so a scrolled copy never
/// leaves a gap.
pub fn draw_background<S: Surface>(surface: &mut S, background: &Background) -> io::Result<()> {
    let src = Rect::new(0.0, 0.0, background.width, background.height);
    surface.draw_sprite(
        SpriteSheet::Background,
        src,
        Rect::new(background.x, background.y, background.width, background.height),
    )?;
    surface.draw_sprite(
        SpriteSheet::Background,
        src,
        Rect::new(
            background.x + background.width - background.speed_x,
            background.y,
            background.width,
            background.height,
        ),
    )
}

/// Current animation frame of `actor`, plus its collision circle when
/// `show_hitbox` is set.
pub fn draw_actor<S: Surface, A: Actor>(
    surface: &mut S,
    sheet: SpriteSheet,
    actor: &A,
    show_hitbox: bool,
) -> io::Result<()> {
    let (x, y, w, h) = actor.bounds();
    let anim = actor.animation();
    let src = Rect::new(anim.frame_x as f64 * w, anim.frame_y as f64 * h, w, h);
    surface.draw_sprite(sheet, src, Rect::new(x, y, w, h))?;

    if show_hitbox {
        let (cx, cy) = center(actor);
        surface.draw_circle_outline(cx, cy, hit_radius(actor))?;
    }
    Ok(())
}

pub fn draw_score<S: Surface>(surface: &mut S, score: u32) -> io::Result<()> {
    surface.draw_text(&format!("Score: {}", score), 20.0, 50.0, HUD_FONT)
}

pub fn draw_game_over<S: Surface>(surface: &mut S, config: &GameConfig) -> io::Result<()> {
    surface.draw_text(GAME_OVER_TEXT, config.field_width / 2.0, 200.0, BANNER_FONT)
}
