//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use super::{Canvas, Color, font};

/// Two triangles covering an axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: Color) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Triangle list for one frame, in logical board coordinates
#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for ShapeBatch {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.vertices.extend_from_slice(&rect(pos, size, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        for (pixel_pos, pixel_size) in font::text_rects(text, pos) {
            self.fill_rect(pixel_pos, pixel_size, colors::TEXT);
        }
    }
}
