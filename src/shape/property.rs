//! Line property - the authoritative description of a line's look
//!
//! A line lives in the XY plane. Its local frame is a unit square that the
//! host transform scales by (length, width), rotates by `angle` degrees and
//! moves to `center`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::generator::GeometryError;

/// RGBA color, components in 0.0 - 1.0
pub type Rgba = [f32; 4];

/// How a line's border is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BorderStyle {
    /// Rendered as a solid rectangle (no border pattern)
    None,
    #[default]
    Solid,
    Dash,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::None => "None",
            BorderStyle::Solid => "Solid",
            BorderStyle::Dash => "Dash",
        }
    }
}

/// Geometric and visual description of one line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineProperty {
    /// Length along the local x axis (world units)
    pub length: f32,
    /// Thickness along the local y axis (world units)
    pub width: f32,
    /// World position of the line's midpoint
    pub center: Vec2,
    /// Rotation about the depth axis (degrees)
    pub angle: f32,
    pub style: BorderStyle,
    /// Length of one dash (only used by `BorderStyle::Dash`)
    pub dash_length: f32,
    /// Space between dashes; 0 draws the dashed line as solid
    pub gap_length: f32,
    pub color: Rgba,
}

impl Default for LineProperty {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 0.1,
            center: Vec2::ZERO,
            angle: 0.0,
            style: BorderStyle::Solid,
            dash_length: 0.2,
            gap_length: 0.1,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl LineProperty {
    /// Solid line of the given size, centered at the origin
    pub fn solid(length: f32, width: f32) -> Self {
        Self {
            length,
            width,
            style: BorderStyle::Solid,
            ..Self::default()
        }
    }

    /// Dashed line of the given size, centered at the origin
    pub fn dashed(length: f32, width: f32, dash_length: f32, gap_length: f32) -> Self {
        Self {
            length,
            width,
            style: BorderStyle::Dash,
            dash_length,
            gap_length,
            ..Self::default()
        }
    }

    /// Line spanning two world points
    pub fn from_end_points(p1: Vec2, p2: Vec2, width: f32) -> Self {
        let mut property = Self {
            width,
            ..Self::default()
        };
        property.set_end_points(p1, p2);
        property
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Re-aim the line so its centerline runs from `p1` to `p2`.
    /// Coincident points give a zero length, which `validate` rejects.
    pub fn set_end_points(&mut self, p1: Vec2, p2: Vec2) {
        let delta = p2 - p1;
        self.center = (p1 + p2) * 0.5;
        self.length = delta.length();
        self.angle = if delta == Vec2::ZERO {
            0.0
        } else {
            delta.y.atan2(delta.x).to_degrees()
        };
    }

    /// World-space end points of the centerline (start, end)
    pub fn end_points(&self) -> (Vec2, Vec2) {
        let half = Vec2::from_angle(self.angle.to_radians()) * (self.length * 0.5);
        (self.center - half, self.center + half)
    }

    /// Whether the generator will emit dashes rather than a single rectangle
    pub fn is_dashed(&self) -> bool {
        self.style == BorderStyle::Dash && self.gap_length != 0.0
    }

    /// Length of one dash + gap cycle
    #[inline]
    pub fn period(&self) -> f32 {
        self.dash_length + self.gap_length
    }

    /// Reject properties that would divide by zero or emit degenerate geometry.
    /// Dash and gap lengths are only checked for `BorderStyle::Dash`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let finite = [self.length, self.width, self.angle]
            .iter()
            .all(|v| v.is_finite())
            && self.center.is_finite();
        if !finite {
            return Err(GeometryError::invalid("non-finite field"));
        }
        if self.length <= 0.0 {
            return Err(GeometryError::invalid(format!(
                "length must be positive, got {}",
                self.length
            )));
        }
        if self.width <= 0.0 {
            return Err(GeometryError::invalid(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.style != BorderStyle::Dash {
            return Ok(());
        }

        if !self.dash_length.is_finite() || !self.gap_length.is_finite() {
            return Err(GeometryError::invalid("non-finite dash or gap length"));
        }
        if self.dash_length <= 0.0 {
            return Err(GeometryError::invalid(format!(
                "dash length must be positive, got {}",
                self.dash_length
            )));
        }
        if self.gap_length < 0.0 {
            return Err(GeometryError::invalid(format!(
                "gap length must not be negative, got {}",
                self.gap_length
            )));
        }
        if !self.period().is_finite() {
            return Err(GeometryError::invalid("dash + gap length overflows"));
        }
        Ok(())
    }

    /// Field-by-field equality on raw float bits, so a NaN field equals itself
    pub fn same_bits(&self, other: &LineProperty) -> bool {
        let bits = |p: &LineProperty| {
            [
                p.length,
                p.width,
                p.center.x,
                p.center.y,
                p.angle,
                p.dash_length,
                p.gap_length,
                p.color[0],
                p.color[1],
                p.color[2],
                p.color[3],
            ]
            .map(f32::to_bits)
        };
        self.style == other.style && bits(self) == bits(other)
    }
}
