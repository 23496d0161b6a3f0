mod common;

use hifitime::Duration;
use nalgebra::Vector3;
use orrery::input::{ButtonAction, Key, MouseButton};
use orrery::kepler::position;
use orrery::scene::{DrawCommand, Scene, SceneSettings};
use orrery::seed::default_bodies;

use crate::common::assert_vec_close;

fn frame() -> Duration {
    Duration::from_seconds(1.0 / 60.0)
}

#[test]
fn test_sixty_frames_is_one_simulated_minute() {
    let mut scene = Scene::new(default_bodies(), SceneSettings::default()).unwrap();
    for _ in 0..60 {
        scene.advance(frame());
    }
    let t = scene.clock().time();
    // hifitime keeps whole nanoseconds, so 1/60 s is rounded per frame
    assert!((t - 60.0).abs() < 1e-4);

    for (index, body) in scene.bodies().iter().enumerate().skip(1) {
        let p = scene.points()[index];
        let expected = position(t, &body.orbit);
        assert_vec_close(
            &Vector3::new(p[0] as f64, p[1] as f64, p[2] as f64),
            &expected,
            1e-5,
        );
    }
}

#[test]
fn test_pause_freezes_points() {
    let mut scene = Scene::new(default_bodies(), SceneSettings::default()).unwrap();
    scene.advance(frame());
    scene.handle_key(Key::P);
    let frozen = scene.points().to_vec();
    let t = scene.clock().time();

    for _ in 0..30 {
        scene.advance(frame());
    }
    assert_eq!(scene.clock().time(), t);
    assert_eq!(scene.points(), frozen.as_slice());

    scene.handle_key(Key::P);
    scene.advance(frame());
    assert!(scene.clock().time() > t);
}

#[test]
fn test_orbit_buffer_is_static() {
    let mut scene = Scene::new(default_bodies(), SceneSettings::default()).unwrap();
    let before = scene.orbit_paths().clone();
    for _ in 0..10 {
        scene.advance(frame());
    }
    assert_eq!(scene.orbit_paths(), &before);
}

#[test]
fn test_body_sits_on_its_drawn_orbit_at_sample_times() {
    let settings = SceneSettings {
        path_samples: 5,
        ..SceneSettings::default()
    };
    let mut scene = Scene::new(default_bodies(), settings).unwrap();
    let period = scene.bodies()[1].orbit.period().unwrap();

    // run the clock to a quarter period: the point must coincide with vertex 1 of its path
    let range = scene.orbit_paths().ranges[0];
    scene.update_positions(period / 4.0);
    let point = scene.points()[1];
    let vertex = scene.orbit_paths().vertices[range.first + 1];
    for k in 0..3 {
        assert!((point[k] - vertex[k]).abs() < 1e-5);
    }
}

#[test]
fn test_camera_input_changes_view_projection() {
    let mut scene = Scene::new(default_bodies(), SceneSettings::default()).unwrap();
    let vp0 = scene.view_projection();

    scene.handle_mouse_button(MouseButton::Left, ButtonAction::Press);
    scene.handle_cursor(0.0, 0.0);
    scene.handle_cursor(120.0, 30.0);
    scene.handle_mouse_button(MouseButton::Left, ButtonAction::Release);
    assert_ne!(scene.view_projection(), vp0);

    scene.handle_key(Key::R);
    assert_eq!(scene.view_projection(), vp0);

    scene.resize(800, 800);
    assert_ne!(scene.view_projection(), vp0);
}

#[test]
fn test_draw_list_covers_every_vertex() {
    let scene = Scene::new(default_bodies(), SceneSettings::default()).unwrap();
    let line_vertices: usize = scene
        .draw_list()
        .iter()
        .filter_map(|d| match d {
            DrawCommand::LineStrip { count, .. } => Some(*count),
            DrawCommand::Clear { .. } | DrawCommand::Point { .. } => None,
        })
        .sum();
    assert_eq!(line_vertices, scene.orbit_paths().vertices.len());
}
