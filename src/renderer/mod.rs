//! Rendering module
//!
//! Drawing is split in two: `scene` walks the match state and emits
//! rectangles and text to a `Canvas`; `ShapeBatch` turns those into
//! triangles that `RenderState` draws with WebGPU at a fixed logical
//! resolution.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use pipeline::RenderState;
pub use scene::draw_match;
pub use shapes::ShapeBatch;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Drawing surface in logical board coordinates (origin top-left, y down)
pub trait Canvas {
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    /// Single line of text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2);
}
