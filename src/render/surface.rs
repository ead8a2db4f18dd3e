//! Render surfaces tools draw their feedback into

use serde::{Serialize, Deserialize};
use crate::geometry::Vec3;

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Anything that accepts world-space line primitives
pub trait RenderSurface {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color);
}

/// A single recorded line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Line vertex buffer filled during a render pass and flushed by the host
#[derive(Debug, Clone, Default)]
pub struct LineBatch {
    lines: Vec<Line>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl RenderSurface for LineBatch {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.lines.push(Line { start, end, color });
    }
}
