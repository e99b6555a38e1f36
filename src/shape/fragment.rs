//! Rectangular pieces of line geometry in normalized local space

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the line's local unit square.
///
/// The unit square spans [-0.5, 0.5] on both axes; the host transform maps
/// it onto the world. Dashed fragments may overhang x = 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub min: Vec2,
    pub max: Vec2,
}

impl Fragment {
    /// The whole unit square
    pub const UNIT: Fragment = Fragment {
        min: Vec2::splat(-0.5),
        max: Vec2::splat(0.5),
    };

    pub const fn with_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Corners counter-clockwise starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Whether the fragment stays inside the unit square
    pub fn within_unit(&self) -> bool {
        self.min.cmpge(Fragment::UNIT.min).all() && self.max.cmple(Fragment::UNIT.max).all()
    }
}
