//! Per-frame synchronization between a line and its host
//!
//! The host owns the transform, the mesh and the style registry; a
//! `LineRenderer` only borrows them for the duration of `tick`.

pub mod defaults;
pub mod line_renderer;
pub mod transform;

pub use defaults::{DefaultLineStyle, LineStyle, StyleDefaults};
pub use line_renderer::{LineRenderer, TickOutcome};
pub use transform::{LocalTransform, TransformProvider};
