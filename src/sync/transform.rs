//! Host transform access

use glam::Vec2;

use crate::normalize_degrees;

/// Scale/rotation/position of the object a line is attached to
pub trait TransformProvider {
    /// (x, y) scale; a line maps x to length and y to width
    fn scale(&self) -> Vec2;
    fn set_scale(&mut self, scale: Vec2);
    /// Rotation about the depth axis (degrees)
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, degrees: f32);
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
}

/// Plain in-memory transform for headless hosts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub scale: Vec2,
    /// Degrees, as last written
    pub rotation: f32,
    pub position: Vec2,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            scale: Vec2::ONE,
            rotation: 0.0,
            position: Vec2::ZERO,
        }
    }
}

impl TransformProvider for LocalTransform {
    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Reads back in [0, 360) like engine euler angles
    fn rotation(&self) -> f32 {
        normalize_degrees(self.rotation)
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
