//! Drives line renderers through multi-frame host loops

use glam::Vec2;
use runner_lines::renderer::{LineMesh, MeshSink};
use runner_lines::sync::{DefaultLineStyle, LocalTransform, StyleDefaults, TransformProvider};
use runner_lines::{Fragment, GeometryError, LineProperty, LineRenderer, Rgba, TickOutcome};

/// Sink that only remembers what it was handed
#[derive(Default)]
struct RecordingSink {
    calls: Vec<(Vec<Fragment>, Rgba)>,
}

impl MeshSink for RecordingSink {
    fn submit(&mut self, fragments: &[Fragment], color: Rgba) {
        self.calls.push((fragments.to_vec(), color));
    }
}

#[derive(Default)]
struct CountingDefaults(u32);

impl StyleDefaults for CountingDefaults {
    fn record_default(&mut self, _property: &LineProperty) {
        self.0 += 1;
    }
}

#[test]
fn test_property_and_transform_take_turns() {
    let mut transform = LocalTransform::default();
    let mut sink = RecordingSink::default();
    let mut defaults = CountingDefaults::default();
    let mut line = LineRenderer::new(LineProperty::dashed(10.0, 0.5, 2.0, 3.0));

    let mut outcomes = Vec::new();
    for frame in 0..5 {
        match frame {
            1 => line.property.gap_length = 1.0,
            3 => transform.set_position(Vec2::new(0.0, 7.5)),
            _ => {}
        }
        outcomes.push(line.tick(&mut transform, &mut sink, &mut defaults).unwrap());
    }

    assert_eq!(
        outcomes,
        vec![
            TickOutcome::Pushed {
                rendered: true,
                overrode_transform: false
            },
            TickOutcome::Pushed {
                rendered: true,
                overrode_transform: false
            },
            TickOutcome::Unchanged,
            TickOutcome::Pulled,
            TickOutcome::Unchanged,
        ]
    );
    assert_eq!(line.property.center, Vec2::new(0.0, 7.5));
    assert_eq!(sink.calls.len(), 3);
    assert_eq!(defaults.0, 3);
    // ceil(10 / 3) = 4 dashes after the gap edit
    assert_eq!(sink.calls[1].0.len(), 4);
}

#[test]
fn test_sink_never_sees_partial_geometry() {
    let mut transform = LocalTransform::default();
    let mut sink = RecordingSink::default();
    let mut defaults = CountingDefaults::default();
    let mut line = LineRenderer::new(LineProperty::dashed(1.0, 0.1, 0.00001, 0.00001));

    let result = line.tick(&mut transform, &mut sink, &mut defaults);
    assert!(matches!(result, Err(GeometryError::OversizedGeometry { .. })));
    assert!(sink.calls.is_empty());
    assert_eq!(defaults.0, 0);
    // Transform still follows the property
    assert_eq!(transform.scale(), Vec2::new(1.0, 0.1));
}

#[test]
fn test_lines_share_style_registry() {
    let mut defaults = DefaultLineStyle::new();
    let mut first = LineRenderer::new(
        LineProperty::dashed(6.0, 0.3, 1.0, 1.0).with_color([0.2, 0.9, 0.2, 1.0]),
    );
    let mut t1 = LocalTransform::default();
    let mut m1 = LineMesh::new();
    first.tick(&mut t1, &mut m1, &mut defaults).unwrap();

    let mut second = LineRenderer::new(defaults.new_line(Vec2::ZERO, Vec2::new(4.0, 0.0)));
    let mut t2 = LocalTransform::default();
    let mut m2 = LineMesh::new();
    second.tick(&mut t2, &mut m2, &mut defaults).unwrap();

    assert_eq!(m2.color, [0.2, 0.9, 0.2, 1.0]);
    // ceil(4 / 2) = 2 dashes
    assert_eq!(m2.fragment_count, 2);
    assert_eq!(t2.position, Vec2::new(2.0, 0.0));
    assert_eq!(defaults.records, 2);
}
