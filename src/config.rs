//! # Scene configuration
//!
//! TOML description of the star system and of the startup state of the viewer. Every section
//! is optional; an empty document gives the built-in system of
//! [`default_bodies`](crate::seed::default_bodies) with default settings.
//!
//! ```toml
//! [simulation]
//! time_scale = 60.0     # simulation seconds per real second
//! paused = false
//! path_samples = 256    # vertices per orbit polyline
//! period_hint = 0.0     # <= 0: sample 2π/n for each body
//!
//! [camera]
//! yaw_deg = 45.0
//! pitch_deg = -20.0
//! distance = 30.0
//!
//! [viewport]
//! width = 1280
//! height = 720
//!
//! [[bodies]]            # first entry is the central body
//! name = "Sun"
//! color = [1.0, 0.95, 0.3]
//! radius = 1.5
//!
//! [[bodies]]
//! name = "Timber Hearth"
//! color = [0.3, 0.8, 0.9]
//! radius = 0.5
//! orbit = { semi_major_axis = 6.0, eccentricity = 0.02, periapsis_argument = 0.2, inclination = 0.05, mean_angular_velocity = 0.6 }
//! ```
//!
//! Validation happens at load time, so a bad element set stops the program before the first
//! frame instead of drawing NaN vertices.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    camera::OrbitCamera,
    constants::{
        Rgb, CAMERA_DEFAULT_DISTANCE, CAMERA_DEFAULT_PITCH_DEG, CAMERA_DEFAULT_YAW_DEG,
        DEFAULT_PATH_SAMPLES, DEFAULT_TIME_SCALE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
        MAX_PATH_SAMPLES, MAX_TIME_SCALE,
    },
    orbit_type::{Body, Orbit},
    orrery_errors::OrreryError,
    seed::default_bodies,
};

/// Load and validate a configuration file.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_path(path: &Path) -> Result<OrreryConfig, OrreryError> {
        info!("Loading configuration from {}", path.display());
        let raw = fs::read_to_string(path)?;
        OrreryConfig::from_toml_str(&raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrreryConfig {
    pub simulation: SimulationConfig,
    pub camera: CameraConfig,
    pub viewport: ViewportConfig,
    pub bodies: Vec<BodyConfig>,
}

impl OrreryConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, OrreryError> {
        let config: OrreryConfig = toml::from_str(raw)?;
        config.validate()?;
        debug!(
            bodies = config.bodies.len(),
            path_samples = config.simulation.path_samples,
            "configuration parsed"
        );
        Ok(config)
    }

    /// Check every section. Called by [`OrreryConfig::from_toml_str`].
    pub fn validate(&self) -> Result<(), OrreryError> {
        let sim = &self.simulation;
        if !sim.time_scale.is_finite()
            || sim.time_scale <= 0.0
            || sim.time_scale > MAX_TIME_SCALE
        {
            return Err(OrreryError::InvalidTimeScale(sim.time_scale));
        }
        if sim.path_samples < 2 {
            return Err(OrreryError::TooFewSamples(sim.path_samples));
        }
        if sim.path_samples > MAX_PATH_SAMPLES {
            return Err(OrreryError::TooManySamples {
                got: sim.path_samples,
                max: MAX_PATH_SAMPLES,
            });
        }
        if !sim.period_hint.is_finite() {
            return Err(OrreryError::InvalidConfig(
                "simulation.period_hint must be finite".into(),
            ));
        }
        if !self.camera.distance.is_finite()
            || !self.camera.yaw_deg.is_finite()
            || !self.camera.pitch_deg.is_finite()
        {
            return Err(OrreryError::InvalidConfig(
                "camera angles and distance must be finite".into(),
            ));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(OrreryError::InvalidConfig(
                "viewport dimensions must be non-zero".into(),
            ));
        }
        self.bodies().map(|_| ())
    }

    /// Bodies described by the document, or the built-in system when none are listed.
    pub fn bodies(&self) -> Result<Vec<Body>, OrreryError> {
        if self.bodies.is_empty() {
            return Ok(default_bodies());
        }
        self.bodies.iter().map(BodyConfig::to_body).collect()
    }

    pub fn camera(&self) -> OrbitCamera {
        OrbitCamera::from_degrees(
            self.camera.yaw_deg,
            self.camera.pitch_deg,
            self.camera.distance,
        )
    }

    /// Human friendly description of key configuration choices.
    pub fn summary_lines(&self) -> Vec<String> {
        let sim = &self.simulation;
        let bodies = if self.bodies.is_empty() {
            "bodies: built-in system".to_string()
        } else {
            let names: Vec<&str> = self.bodies.iter().map(|b| b.name.as_str()).collect();
            format!("bodies: {} ({})", names.len(), names.join(", "))
        };
        let clock = format!(
            "clock: scale={}x, {}",
            sim.time_scale,
            if sim.paused { "paused" } else { "running" }
        );
        let paths = if sim.period_hint > 0.0 {
            format!(
                "paths: {} samples over {} s",
                sim.path_samples, sim.period_hint
            )
        } else {
            format!("paths: {} samples over one period", sim.path_samples)
        };
        let camera = format!(
            "camera: yaw={}°, pitch={}°, distance={}",
            self.camera.yaw_deg, self.camera.pitch_deg, self.camera.distance
        );
        let viewport = format!(
            "viewport: {}x{}",
            self.viewport.width, self.viewport.height
        );

        vec![bodies, clock, paths, camera, viewport]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub time_scale: f64,
    pub paused: bool,
    pub path_samples: usize,
    /// Time span covered by every orbit polyline; `<= 0` uses each orbit's own period.
    pub period_hint: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
            paused: false,
            path_samples: DEFAULT_PATH_SAMPLES,
            period_hint: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            yaw_deg: CAMERA_DEFAULT_YAW_DEG,
            pitch_deg: CAMERA_DEFAULT_PITCH_DEG,
            distance: CAMERA_DEFAULT_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,
    pub color: Rgb,
    pub radius: f32,
    /// Omitted for the central body.
    #[serde(default)]
    pub orbit: Option<Orbit>,
}

impl BodyConfig {
    pub fn to_body(&self) -> Result<Body, OrreryError> {
        Body::new(
            self.name.clone(),
            self.orbit.unwrap_or(Orbit::FIXED),
            self.color,
            self.radius,
        )
    }
}
