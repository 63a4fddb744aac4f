#![allow(dead_code)]

use std::io;

use side_runner::display::{Font, Rect, SpriteSheet, Surface};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rect),
    Sprite(SpriteSheet, Rect, Rect),
    Text(String, f64, f64),
    Circle(f64, f64, f64),
    Present,
}

/// Surface that remembers every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self, sheet: SpriteSheet) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite(s, _, dst) if *s == sheet => Some(*dst),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t, _, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, region: Rect) -> io::Result<()> {
        self.calls.push(DrawCall::Clear(region));
        Ok(())
    }

    fn draw_sprite(&mut self, sheet: SpriteSheet, src: Rect, dst: Rect) -> io::Result<()> {
        self.calls.push(DrawCall::Sprite(sheet, src, dst));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, _font: Font) -> io::Result<()> {
        self.calls.push(DrawCall::Text(text.to_string(), x, y));
        Ok(())
    }

    fn draw_circle_outline(&mut self, cx: f64, cy: f64, r: f64) -> io::Result<()> {
        self.calls.push(DrawCall::Circle(cx, cy, r));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}
