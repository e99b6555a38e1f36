//! Triangle generation for line fragments

use glam::{Affine2, Vec2};

use super::vertex::Vertex;
use crate::shape::{Fragment, LineProperty, Rgba};

/// Two triangles covering one fragment
pub fn rect(fragment: &Fragment, color: Rgba) -> [Vertex; 6] {
    let [bl, br, tr, tl] = fragment.corners();
    [
        Vertex::at(bl, color),
        Vertex::at(br, color),
        Vertex::at(tr, color),
        Vertex::at(tr, color),
        Vertex::at(tl, color),
        Vertex::at(bl, color),
    ]
}

/// Vertices for every fragment of a line, in local unit space
pub fn fragments(fragments: &[Fragment], color: Rgba) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(fragments.len() * 6);
    for fragment in fragments {
        vertices.extend_from_slice(&rect(fragment, color));
    }
    vertices
}

/// Local unit space -> world space for a line (scale, rotate, translate)
pub fn local_to_world(property: &LineProperty) -> Affine2 {
    Affine2::from_scale_angle_translation(
        Vec2::new(property.length, property.width),
        property.angle.to_radians(),
        property.center,
    )
}

/// Map local vertices into world space
pub fn to_world(vertices: &[Vertex], property: &LineProperty) -> Vec<Vertex> {
    let xform = local_to_world(property);
    vertices
        .iter()
        .map(|v| Vertex::at(xform.transform_point2(v.pos()), v.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_fragment() {
        let verts = rect(&Fragment::UNIT, [1.0; 4]);
        let min = verts.iter().map(|v| v.pos()).fold(Vec2::MAX, Vec2::min);
        let max = verts.iter().map(|v| v.pos()).fold(Vec2::MIN, Vec2::max);
        assert_eq!(min, Vec2::splat(-0.5));
        assert_eq!(max, Vec2::splat(0.5));
    }

    #[test]
    fn test_triangles_are_counter_clockwise() {
        let verts = rect(&Fragment::UNIT, [1.0; 4]);
        for tri in verts.chunks(3) {
            let a = tri[1].pos() - tri[0].pos();
            let b = tri[2].pos() - tri[0].pos();
            assert!(a.perp_dot(b) > 0.0);
        }
    }

    #[test]
    fn test_to_world_places_line() {
        let line = LineProperty::solid(4.0, 1.0)
            .with_center(Vec2::new(10.0, 0.0))
            .with_angle(90.0);
        let world = to_world(&fragments(&[Fragment::UNIT], [1.0; 4]), &line);
        assert_eq!(world.len(), 6);

        // Rotated 90 degrees, the 4-long line runs along y
        let ys: Vec<f32> = world.iter().map(|v| v.position[1]).collect();
        let span = ys.iter().cloned().fold(f32::MIN, f32::max) - ys.iter().cloned().fold(f32::MAX, f32::min);
        assert!((span - 4.0).abs() < 1e-4);
        for v in &world {
            assert!((v.position[0] - 10.0).abs() <= 0.5 + 1e-4);
        }
    }
}
