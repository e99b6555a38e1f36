//! Vertex types for 2D line meshes

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::shape::Rgba;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(point: Vec2, color: Rgba) -> Self {
        Self::new(point.x, point.y, color)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for runner lines
pub mod colors {
    pub const LANE_DIVIDER: [f32; 4] = [0.9, 0.85, 0.3, 1.0];
    pub const HAZARD: [f32; 4] = [1.0, 0.4, 0.2, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(bytemuck::bytes_of(&Vertex::new(0.0, 0.0, colors::HAZARD)).len(), 24);
    }
}
