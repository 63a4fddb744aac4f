//! crossterm backend. All terminal I/O lives here.
//!
//! The field is scaled onto whatever cell grid the terminal offers.  Sprite
//! sheets are rendered procedurally: one glyph and colour per sheet, row and
//! frame, filling the sprite's destination cells.

use std::f64::consts::TAU;
use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use super::{Font, Rect, SpriteSheet, Surface, TextAlign};
use crate::compute::JUMPING_ROW;
use crate::config::GameConfig;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GROUND: Color = Color::DarkGreen;
const C_GROUND_STONE: Color = Color::DarkYellow;
const C_PLAYER_RUNNING: Color = Color::White;
const C_PLAYER_JUMPING: Color = Color::Cyan;
const C_OBSTACLE: Color = Color::Red;
const C_HITBOX: Color = Color::DarkGrey;
const C_TEXT: Color = Color::Yellow;

/// Points sampled along a collision circle.
const CIRCLE_STEPS: u32 = 64;
/// Columns between two stones on the ground strip.
const STONE_SPACING: i64 = 6;

/// A block of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    field_width: f64,
    field_height: f64,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16, config: &GameConfig) -> Self {
        Self {
            out,
            cols,
            rows,
            field_width: config.field_width,
            field_height: config.field_height,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn col(&self, x: f64) -> f64 {
        x * self.cols as f64 / self.field_width
    }

    fn row(&self, y: f64) -> f64 {
        y * self.rows as f64 / self.field_height
    }

    /// Cells covered by `rect`, clipped to the screen.  `None` when nothing
    /// of it is visible.
    pub fn cell_span(&self, rect: Rect) -> Option<CellSpan> {
        let c0 = self.col(rect.x).floor().max(0.0);
        let c1 = self.col(rect.x + rect.w).ceil().min(self.cols as f64);
        let r0 = self.row(rect.y).floor().max(0.0);
        let r1 = self.row(rect.y + rect.h).ceil().min(self.rows as f64);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some(CellSpan {
            col: c0 as u16,
            row: r0 as u16,
            width: (c1 - c0) as u16,
            height: (r1 - r0) as u16,
        })
    }

    /// The single cell containing a field point, if on screen.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let c = self.col(x).floor();
        let r = self.row(y).floor();
        if c < 0.0 || r < 0.0 || c >= self.cols as f64 || r >= self.rows as f64 {
            return None;
        }
        Some((c as u16, r as u16))
    }

    fn fill(&mut self, span: CellSpan, glyph: char, color: Color) -> io::Result<()> {
        let line: String = std::iter::repeat(glyph).take(span.width as usize).collect();
        self.out.queue(style::SetForegroundColor(color))?;
        for r in 0..span.height {
            self.out.queue(cursor::MoveTo(span.col, span.row + r))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    /// The scenery sheet becomes a ground strip along the bottom row of
    /// `dst`, with stones anchored to `dst.x` so scrolling shows.
    fn draw_ground(&mut self, dst: Rect) -> io::Result<()> {
        let Some(span) = self.cell_span(dst) else {
            return Ok(());
        };
        let origin = self.col(dst.x).floor() as i64;
        let bottom = span.row + span.height - 1;

        self.out.queue(cursor::MoveTo(span.col, bottom))?;
        self.out.queue(style::SetForegroundColor(C_GROUND))?;
        self.out.queue(Print("▀".repeat(span.width as usize)))?;

        self.out.queue(style::SetForegroundColor(C_GROUND_STONE))?;
        for c in span.col..span.col + span.width {
            if (c as i64 - origin).rem_euclid(STONE_SPACING) == 0 {
                self.out.queue(cursor::MoveTo(c, bottom))?;
                self.out.queue(Print('▓'))?;
            }
        }
        Ok(())
    }
}

/// Glyph and colour standing in for one frame of a sheet.
pub fn sprite_style(sheet: SpriteSheet, frame_x: u32, frame_y: u32) -> (char, Color) {
    let even = frame_x % 2 == 0;
    match sheet {
        SpriteSheet::Player if frame_y == JUMPING_ROW => ('▒', C_PLAYER_JUMPING),
        SpriteSheet::Player => (if even { '█' } else { '▓' }, C_PLAYER_RUNNING),
        SpriteSheet::Obstacle => (if even { '▓' } else { '▒' }, C_OBSTACLE),
        SpriteSheet::Background => ('▀', C_GROUND),
    }
}

fn frame_index(offset: f64, cell: f64) -> u32 {
    if cell > 0.0 {
        (offset / cell).round().max(0.0) as u32
    } else {
        0
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, region: Rect) -> io::Result<()> {
        let whole = region.x <= 0.0
            && region.y <= 0.0
            && region.x + region.w >= self.field_width
            && region.y + region.h >= self.field_height;
        if whole {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            return Ok(());
        }
        match self.cell_span(region) {
            Some(span) => self.fill(span, ' ', Color::Reset),
            None => Ok(()),
        }
    }

    fn draw_sprite(&mut self, sheet: SpriteSheet, src: Rect, dst: Rect) -> io::Result<()> {
        if sheet == SpriteSheet::Background {
            return self.draw_ground(dst);
        }
        let Some(span) = self.cell_span(dst) else {
            return Ok(());
        };
        let (glyph, color) =
            sprite_style(sheet, frame_index(src.x, src.w), frame_index(src.y, src.h));
        self.fill(span, glyph, color)
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: Font) -> io::Result<()> {
        let Some((col, row)) = self.cell_at(x.clamp(0.0, self.field_width - 1.0), y) else {
            return Ok(());
        };
        let col = match font.align {
            TextAlign::Left => col,
            TextAlign::Center => col.saturating_sub(text.chars().count() as u16 / 2),
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(C_TEXT))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn draw_circle_outline(&mut self, cx: f64, cy: f64, r: f64) -> io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_HITBOX))?;
        for i in 0..CIRCLE_STEPS {
            let angle = TAU * i as f64 / CIRCLE_STEPS as f64;
            if let Some((col, row)) = self.cell_at(cx + r * angle.cos(), cy + r * angle.sin()) {
                self.out.queue(cursor::MoveTo(col, row))?;
                self.out.queue(Print('·'))?;
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
