//! Runner Lines demo host
//!
//! Drives a few lines through a headless frame loop and logs what each tick
//! did. Pass a settings JSON path as the first argument to override limits.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use runner_lines::renderer::{LineMesh, shapes, vertex::colors};
    use runner_lines::sync::{DefaultLineStyle, LocalTransform};
    use runner_lines::{LineProperty, LineRenderer, Settings};

    env_logger::init();
    log::info!("Runner Lines (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut transform = LocalTransform::default();
    let mut mesh = LineMesh::new();
    let mut defaults = DefaultLineStyle::new();

    let divider = LineProperty::dashed(10.0, 0.2, 2.0, 3.0)
        .with_center(Vec2::new(0.0, 4.0))
        .with_color(colors::LANE_DIVIDER);
    let mut line = LineRenderer::with_settings(divider, settings);

    for frame in 0..6 {
        match frame {
            // Author drags the line in the editor
            2 => transform.scale.x = 14.0,
            // Author shortens the dashes in the inspector
            4 => line.property.dash_length = 1.0,
            _ => {}
        }
        match line.tick(&mut transform, &mut mesh, &mut defaults) {
            Ok(outcome) => log::info!(
                "Frame {}: {:?} ({} fragments, {} triangles)",
                frame,
                outcome,
                mesh.fragment_count,
                mesh.triangle_count()
            ),
            Err(e) => log::warn!("Frame {}: {}", frame, e),
        }
    }

    let world = shapes::to_world(&mesh.vertices, &line.property);
    if let Some(first) = world.first() {
        log::info!("First world vertex: {:?}", first.position);
    }

    // A new line picks up the style used last
    let hazard = defaults
        .new_line(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0))
        .with_color(colors::HAZARD);
    let mut hazard = LineRenderer::new(hazard);
    hazard.property.dash_length = 0.00001;
    hazard.property.gap_length = 0.00001;
    let mut hazard_transform = LocalTransform::default();
    let mut hazard_mesh = LineMesh::new();
    if let Err(e) = hazard.tick(&mut hazard_transform, &mut hazard_mesh, &mut defaults) {
        log::warn!("Hazard line skipped: {}", e);
    }

    println!(
        "divider: {} fragments, hazard mesh empty: {}",
        mesh.fragment_count,
        hazard_mesh.is_empty()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library only on wasm; hosts call LineRenderer::tick from their own loop
}
