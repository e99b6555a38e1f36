//! Rendering module
//!
//! Turns generated fragments into triangle vertices for the host pipeline.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{LineMesh, MeshSink};
pub use vertex::Vertex;
