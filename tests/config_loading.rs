use std::path::Path;

use orrery::config::{ConfigLoader, OrreryConfig};
use orrery::orrery_errors::OrreryError;
use orrery::scene::Scene;
use orrery::seed::default_bodies;

fn default_config_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml")
}

#[test]
fn test_shipped_config_matches_seed() {
    let config = ConfigLoader::load_from_path(&default_config_path()).unwrap();
    assert_eq!(config.bodies().unwrap(), default_bodies());
    assert_eq!(config.simulation, OrreryConfig::default().simulation);
    assert_eq!(config.camera(), OrreryConfig::default().camera());
}

#[test]
fn test_scene_from_shipped_config() {
    let config = ConfigLoader::load_from_path(&default_config_path()).unwrap();
    let scene = Scene::from_config(&config).unwrap();
    assert_eq!(scene.bodies().len(), 6);
    assert_eq!(scene.viewport(), (1280, 720));
    assert_eq!(scene.orbit_paths().vertices.len(), 5 * 256);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ConfigLoader::load_from_path(Path::new("does/not/exist.toml"));
    assert!(matches!(err, Err(OrreryError::IoError(_))));
}

#[test]
fn test_custom_file_round_trip_through_disk() {
    let path = std::env::temp_dir().join(format!("orrery-config-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[simulation]
time_scale = 300.0
paused = true
path_samples = 8
period_hint = 4.0

[[bodies]]
name = "Star"
color = [1.0, 1.0, 1.0]
radius = 2.0

[[bodies]]
name = "Rock"
color = [0.5, 0.5, 0.5]
radius = 0.25
orbit = { semi_major_axis = 3.0, mean_angular_velocity = 0.0 }
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    // a still orbit is drawable thanks to the period hint
    let scene = Scene::from_config(&config).unwrap();
    assert!(scene.clock().is_paused());
    assert_eq!(scene.clock().time_scale(), 300.0);
    assert_eq!(scene.orbit_paths().vertices.len(), 8);
    assert!(scene
        .orbit_paths()
        .vertices
        .iter()
        .all(|v| *v == [3.0, 0.0, 0.0]));
}
