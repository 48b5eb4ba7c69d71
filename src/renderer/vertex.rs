//! Vertex format shared by the batch builder and the GPU pipeline

use bytemuck::{Pod, Zeroable};

use super::Color;

/// Board-space (or NDC, after upload) position plus a flat fill colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Palette. The board is monochrome; only the letterbox bars differ.
pub mod colors {
    use super::Color;

    const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

    pub const PADDLE: Color = WHITE;
    pub const BALL: Color = WHITE;
    pub const TEXT: Color = WHITE;
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    /// Bars outside the logical board when the window aspect differs
    pub const LETTERBOX: Color = [0.02, 0.02, 0.02, 1.0];
}
