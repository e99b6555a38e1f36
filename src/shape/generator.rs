//! Border geometry generator
//!
//! Turns a `LineProperty` into fragments in the local unit square:
//! - Solid (or gapless dash): one fragment covering the square
//! - Dash: `ceil(length / (dash + gap))` fragments spaced along x
//!
//! The last dash is not clipped, so it can overhang x = 0.5 when the length
//! is not a whole number of periods.

use glam::Vec2;

use super::fragment::Fragment;
use super::property::{LineProperty, Rgba};
use crate::consts::MAX_FRAGMENTS;

/// Why a line could not be turned into geometry
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid line property: {reason}")]
    InvalidProperty { reason: String },
    #[error("line has too many fragments ({fragments}, limit {limit})")]
    OversizedGeometry { fragments: u64, limit: usize },
}

impl GeometryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GeometryError::InvalidProperty {
            reason: reason.into(),
        }
    }
}

/// Generate fragments using the default fragment cap
pub fn generate(property: &LineProperty) -> Result<Vec<Fragment>, GeometryError> {
    generate_with_limit(property, MAX_FRAGMENTS)
}

/// Generate fragments, failing if a dashed line would need more than `limit`
pub fn generate_with_limit(
    property: &LineProperty,
    limit: usize,
) -> Result<Vec<Fragment>, GeometryError> {
    property.validate()?;

    if property.is_dashed() {
        dashed(property, limit)
    } else {
        Ok(vec![Fragment::UNIT])
    }
}

/// Color the mesh sink should use for this line
#[inline]
pub fn color_for(property: &LineProperty) -> Rgba {
    property.color
}

fn dashed(property: &LineProperty, limit: usize) -> Result<Vec<Fragment>, GeometryError> {
    let period = property.period();
    let count = (property.length / period).ceil();

    // Compare as float first so absurd ratios can't overflow the cast
    if !count.is_finite() || count > limit as f32 {
        let fragments = if count.is_finite() { count as u64 } else { u64::MAX };
        return Err(GeometryError::OversizedGeometry { fragments, limit });
    }
    let count = count as usize;

    let dash = property.dash_length / property.length;
    let fragments = (0..count)
        .map(|i| {
            let delta_x = i as f32 * period / property.length;
            Fragment::with_min_max(
                Vec2::new(-0.5 + delta_x, -0.5),
                Vec2::new(-0.5 + delta_x + dash, 0.5),
            )
        })
        .collect();

    Ok(fragments)
}
