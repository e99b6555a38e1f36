//! Runner Lines - border line geometry for a 2D vertical runner
//!
//! Core modules:
//! - `shape`: Line properties, fragments and the pure geometry generator
//! - `renderer`: Vertex/mesh sink that turns fragments into triangles
//! - `sync`: Per-frame property <-> transform synchronization
//! - `settings`: Generator limits and comparison tolerance

pub mod renderer;
pub mod settings;
pub mod shape;
pub mod sync;

pub use settings::{Settings, SettingsError};
pub use shape::{BorderStyle, Fragment, GeometryError, LineProperty, Rgba, color_for, generate};
pub use sync::{LineRenderer, TickOutcome};

/// Geometry constants
pub mod consts {
    /// Hard cap on dashed fragments per line
    pub const MAX_FRAGMENTS: usize = 10_000;
    /// Default epsilon for approximate float comparison
    pub const DEFAULT_TOLERANCE: f32 = 1e-5;
    /// Relative epsilon for large magnitudes
    pub const RELATIVE_TOLERANCE: f32 = 1e-6;
}

/// Approximate float equality: `tolerance` absolute, `RELATIVE_TOLERANCE`
/// relative for large values
#[inline]
pub fn approximately(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance.max(consts::RELATIVE_TOLERANCE * a.abs().max(b.abs()))
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Approximate equality of two angles in degrees, modulo 360
#[inline]
pub fn angles_approximately(a: f32, b: f32, tolerance: f32) -> bool {
    let diff = normalize_degrees(a - b);
    diff <= tolerance.max(tolerance * 360.0) || 360.0 - diff <= tolerance.max(tolerance * 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-45.0) - 315.0).abs() < 1e-4);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_angles_approximately_wraps() {
        assert!(angles_approximately(-45.0, 315.0, 1e-5));
        assert!(angles_approximately(359.9999, 0.0, 1e-5));
        assert!(!angles_approximately(10.0, 11.0, 1e-5));
    }

    #[test]
    fn test_approximately_scales_with_magnitude() {
        assert!(approximately(100_000.0, 100_000.05, 1e-5));
        assert!(!approximately(1.0, 1.001, 1e-5));
        // A 10 unit move a million units out still counts as a change
        assert!(!approximately(1_000_000.0, 1_000_010.0, 1e-5));
        assert!(approximately(1_000_000.0, 1_000_000.5, 1e-5));
    }
}
