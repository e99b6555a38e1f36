//! Mesh sink - where generated fragments end up

use log::debug;

use super::shapes;
use super::vertex::Vertex;
use crate::shape::{Fragment, Rgba};

/// Receives a line's fragments and color, replacing whatever it held before
pub trait MeshSink {
    fn submit(&mut self, fragments: &[Fragment], color: Rgba);
}

/// CPU-side triangle mesh for one line
#[derive(Debug, Clone, Default)]
pub struct LineMesh {
    /// Triangle list in local unit space
    pub vertices: Vec<Vertex>,
    pub color: Rgba,
    /// Number of fragments in the last submit
    pub fragment_count: usize,
    /// How many times the mesh was rebuilt
    pub submits: u64,
}

impl LineMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes for upload to a vertex buffer laid out by `Vertex::desc`
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl MeshSink for LineMesh {
    fn submit(&mut self, fragments: &[Fragment], color: Rgba) {
        self.vertices = shapes::fragments(fragments, color);
        self.color = color;
        self.fragment_count = fragments.len();
        self.submits += 1;
        debug!(
            "Line mesh rebuilt: {} fragments, {} vertices",
            fragments.len(),
            self.vertices.len()
        );
    }
}
