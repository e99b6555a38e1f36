//! Line renderer - keeps a line property and its transform in step
//!
//! Called once per frame. Whichever side changed since the last tick wins:
//! - property edited: push property -> transform, re-render if needed
//! - transform edited: pull transform -> property, re-render
//! - both edited: the property wins and the transform edit is dropped

use glam::Vec2;
use log::{debug, error, info, warn};

use super::defaults::StyleDefaults;
use super::transform::TransformProvider;
use crate::renderer::MeshSink;
use crate::settings::Settings;
use crate::shape::{BorderStyle, GeometryError, LineProperty, color_for, generate_with_limit};
use crate::{angles_approximately, approximately};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Property and transform already agree
    Unchanged,
    /// Property was written to the transform
    Pushed {
        /// Mesh was rebuilt
        rendered: bool,
        /// The transform had also been edited; that edit was overwritten
        overrode_transform: bool,
    },
    /// Transform was read back into the property and the mesh rebuilt
    Pulled,
}

/// Drives one line: owns its property and the copy seen last tick
#[derive(Debug, Clone)]
pub struct LineRenderer {
    pub property: LineProperty,
    cached: Option<LineProperty>,
    settings: Settings,
}

impl LineRenderer {
    pub fn new(property: LineProperty) -> Self {
        Self::with_settings(property, Settings::default())
    }

    pub fn with_settings(property: LineProperty, settings: Settings) -> Self {
        Self {
            property,
            cached: None,
            settings,
        }
    }

    /// Property as of the end of the last tick
    pub fn cached(&self) -> Option<&LineProperty> {
        self.cached.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Move the line so it runs from `p1` to `p2`; applied on the next tick
    pub fn set_end_points(&mut self, p1: Vec2, p2: Vec2) {
        self.property.set_end_points(p1, p2);
    }

    /// Bitwise so a NaN field does not look like a fresh edit every frame
    fn property_has_changed(&self) -> bool {
        self.cached.is_none_or(|prev| !prev.same_bits(&self.property))
    }

    /// Whether the transform still matches what `property` would set
    fn transform_matches<T>(&self, property: &LineProperty, transform: &T) -> bool
    where
        T: TransformProvider + ?Sized,
    {
        let tol = self.settings.tolerance;
        let scale = transform.scale();
        let position = transform.position();
        let close = |a: f32, b: f32| a.to_bits() == b.to_bits() || approximately(a, b, tol);
        let rotation = transform.rotation();
        close(property.length, scale.x)
            && close(property.width, scale.y)
            && (rotation.to_bits() == property.angle.to_bits()
                || angles_approximately(property.angle, rotation, tol))
            && close(property.center.x, position.x)
            && close(property.center.y, position.y)
    }

    /// Solid geometry is the unit square, so only dashes, a style switch or
    /// a color change need a new mesh
    fn needs_rerender(&self) -> bool {
        match self.cached {
            None => true,
            Some(prev) => {
                (self.property.style == BorderStyle::Dash && !prev.same_bits(&self.property))
                    || prev.style != self.property.style
                    || prev.color != self.property.color
            }
        }
    }

    /// Run one frame of synchronization.
    ///
    /// On a geometry error the sink and defaults are left untouched and the
    /// cache still advances, so a bad line is reported once rather than
    /// every frame.
    pub fn tick<T, M, D>(
        &mut self,
        transform: &mut T,
        sink: &mut M,
        defaults: &mut D,
    ) -> Result<TickOutcome, GeometryError>
    where
        T: TransformProvider + ?Sized,
        M: MeshSink + ?Sized,
        D: StyleDefaults + ?Sized,
    {
        if self.property_has_changed() {
            let overrode_transform = self
                .cached
                .is_some_and(|prev| !self.transform_matches(&prev, &*transform));
            if overrode_transform {
                warn!("Line property and transform both changed; keeping property");
            }

            let rendered = self.needs_rerender();
            transform.set_scale(Vec2::new(self.property.length, self.property.width));
            transform.set_rotation(self.property.angle);
            transform.set_position(self.property.center);
            self.cached = Some(self.property);

            if rendered {
                self.render_now(sink, defaults)?;
            }
            Ok(TickOutcome::Pushed {
                rendered,
                overrode_transform,
            })
        } else if !self.transform_matches(&self.property, transform) {
            let scale = transform.scale();
            self.property.length = scale.x;
            self.property.width = scale.y;
            self.property.angle = transform.rotation();
            self.property.center = transform.position();
            self.cached = Some(self.property);
            debug!(
                "Line pulled from transform: length={} width={} angle={}",
                scale.x, scale.y, self.property.angle
            );

            self.render_now(sink, defaults)?;
            Ok(TickOutcome::Pulled)
        } else {
            Ok(TickOutcome::Unchanged)
        }
    }

    /// Rebuild the mesh from the current property right away
    pub fn render_now<M, D>(&self, sink: &mut M, defaults: &mut D) -> Result<(), GeometryError>
    where
        M: MeshSink + ?Sized,
        D: StyleDefaults + ?Sized,
    {
        let fragments = match generate_with_limit(&self.property, self.settings.max_fragments) {
            Ok(fragments) => fragments,
            Err(e) => {
                error!("Line not rendered: {}", e);
                return Err(e);
            }
        };

        sink.submit(&fragments, color_for(&self.property));
        defaults.record_default(&self.property);

        if self.settings.log_renders {
            info!(
                "Rendered {} line with {} fragments",
                self.property.style.as_str(),
                fragments.len()
            );
        } else {
            debug!(
                "Rendered {} line with {} fragments",
                self.property.style.as_str(),
                fragments.len()
            );
        }
        Ok(())
    }
}
