//! Line shapes and their geometry
//!
//! Everything in here is pure: no transform, mesh or registry access.

pub mod fragment;
pub mod generator;
pub mod property;

pub use fragment::Fragment;
pub use generator::{GeometryError, color_for, generate, generate_with_limit};
pub use property::{BorderStyle, LineProperty, Rgba};
