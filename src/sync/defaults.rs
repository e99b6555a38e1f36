//! Style defaults for newly created lines
//!
//! Every successful render records the line's style, so the next line an
//! author creates looks like the last one they touched.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;
use crate::shape::{BorderStyle, LineProperty, Rgba};

/// Sink for "last used" line styles
pub trait StyleDefaults {
    fn record_default(&mut self, property: &LineProperty);
}

/// The style part of a line (everything except placement and length)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub style: BorderStyle,
    pub width: f32,
    pub dash_length: f32,
    pub gap_length: f32,
    pub color: Rgba,
}

impl From<&LineProperty> for LineStyle {
    fn from(p: &LineProperty) -> Self {
        Self {
            style: p.style,
            width: p.width,
            dash_length: p.dash_length,
            gap_length: p.gap_length,
            color: p.color,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::from(&LineProperty::default())
    }
}

/// In-memory registry of the last recorded line style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultLineStyle {
    pub last: Option<LineStyle>,
    /// Number of records since creation/load
    #[serde(skip)]
    pub records: u64,
}

impl DefaultLineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style new lines get
    pub fn style(&self) -> LineStyle {
        self.last.unwrap_or_default()
    }

    /// A new line from `p1` to `p2` carrying the default style
    pub fn new_line(&self, p1: Vec2, p2: Vec2) -> LineProperty {
        let s = self.style();
        let mut line = LineProperty {
            style: s.style,
            width: s.width,
            dash_length: s.dash_length,
            gap_length: s.gap_length,
            color: s.color,
            ..LineProperty::default()
        };
        line.set_end_points(p1, p2);
        line
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl StyleDefaults for DefaultLineStyle {
    fn record_default(&mut self, property: &LineProperty) {
        self.last = Some(LineStyle::from(property));
        self.records += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_uses_recorded_style() {
        let mut defaults = DefaultLineStyle::new();
        assert_eq!(defaults.style(), LineStyle::default());

        let dashed = LineProperty::dashed(8.0, 0.3, 1.0, 0.5).with_color([0.0, 0.0, 1.0, 1.0]);
        defaults.record_default(&dashed);

        let line = defaults.new_line(Vec2::ZERO, Vec2::new(0.0, 2.0));
        assert_eq!(line.style, BorderStyle::Dash);
        assert_eq!(line.width, 0.3);
        assert_eq!(line.gap_length, 0.5);
        assert_eq!(line.color, [0.0, 0.0, 1.0, 1.0]);
        assert!((line.length - 2.0).abs() < 1e-6);
        assert_eq!(defaults.records, 1);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "runner-lines-defaults-{}.json",
            std::process::id()
        ));
        let mut defaults = DefaultLineStyle::new();
        defaults.record_default(&LineProperty::dashed(1.0, 0.2, 0.1, 0.1));
        defaults.save(&path).unwrap();

        let loaded = DefaultLineStyle::load(&path).unwrap();
        assert_eq!(loaded.last, defaults.last);
        let _ = std::fs::remove_file(&path);
    }
}
