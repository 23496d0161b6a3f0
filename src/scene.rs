//! # Scene
//!
//! The application context handed to the render loop. It owns the body list, the simulation
//! clock, the orbit camera and the two vertex arrays the renderer uploads:
//!
//! ```text
//! Scene
//! ├── bodies        Vec<Body>, central body first, never resized
//! ├── orbit_paths   static line buffer: one polyline per orbiting body, built once
//! ├── points        dynamic point buffer: one vertex per body, rewritten every frame
//! ├── clock         SimulationClock
//! ├── camera        OrbitCamera
//! └── frame_timer   FrameTimer (FPS for the status line)
//! ```
//!
//! ## Frame cycle
//!
//! ```rust
//! use hifitime::Duration;
//! use orrery::scene::{Scene, SceneSettings};
//! use orrery::seed::default_bodies;
//!
//! let mut scene = Scene::new(default_bodies(), SceneSettings::default()).unwrap();
//!
//! // once per frame
//! scene.advance(Duration::from_seconds(1.0 / 60.0));
//! for command in scene.draw_list() {
//!     // hand `command` and `scene.points()` / `scene.orbit_paths()` to the GPU layer
//!     let _ = command;
//! }
//! ```
//!
//! The solver itself stays stateless; the scene only calls
//! [`position`](crate::kepler::position) and [`sample_path`](crate::kepler::sample_path).

use hifitime::Duration;
use nalgebra::{Matrix4, Vector3};
use tracing::{debug, info, warn};

use crate::{
    camera::OrbitCamera,
    clock::SimulationClock,
    config::OrreryConfig,
    constants::{
        Rgb, BODY_POINT_SIZE_SCALE, CLEAR_COLOR, CENTRAL_BODY_INDEX, CENTRAL_POINT_SIZE, DEFAULT_PATH_SAMPLES,
        DEFAULT_TIME_SCALE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
        MAX_ACCURATE_ECCENTRICITY, MAX_PATH_SAMPLES, ORBIT_LINE_COLOR,
    },
    frame_timer::FrameTimer,
    input::{ButtonAction, Command, Key, MouseButton},
    kepler::{path_length, position, sample_path},
    orbit_type::Body,
    orrery_errors::OrreryError,
};

/// Startup parameters of a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub time_scale: f64,
    pub paused: bool,
    pub path_samples: usize,
    pub period_hint: f64,
    pub camera: OrbitCamera,
    pub viewport: (u32, u32),
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
            paused: false,
            path_samples: DEFAULT_PATH_SAMPLES,
            period_hint: 0.0,
            camera: OrbitCamera::default(),
            viewport: (DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

impl From<&OrreryConfig> for SceneSettings {
    fn from(config: &OrreryConfig) -> Self {
        Self {
            time_scale: config.simulation.time_scale,
            paused: config.simulation.paused,
            path_samples: config.simulation.path_samples,
            period_hint: config.simulation.period_hint,
            camera: config.camera(),
            viewport: (config.viewport.width, config.viewport.height),
        }
    }
}

/// Slice of the static line buffer holding one body's orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRange {
    pub body_index: usize,
    pub first: usize,
    pub count: usize,
}

/// Concatenated orbit polylines of every orbiting body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbitPaths {
    pub vertices: Vec<[f32; 3]>,
    pub ranges: Vec<PathRange>,
}

impl OrbitPaths {
    /// Sample every body except the central one.
    ///
    /// `samples` above [`MAX_PATH_SAMPLES`] is rejected before anything is allocated.
    pub fn build(bodies: &[Body], samples: usize, period_hint: f64) -> Result<Self, OrreryError> {
        let too_many = OrreryError::TooManySamples {
            got: samples,
            max: MAX_PATH_SAMPLES,
        };
        if samples > MAX_PATH_SAMPLES {
            return Err(too_many);
        }
        let orbiting = bodies.len().saturating_sub(1);
        let capacity = orbiting.checked_mul(samples).ok_or(too_many)?;
        let mut paths = OrbitPaths {
            vertices: Vec::with_capacity(capacity),
            ranges: Vec::with_capacity(orbiting),
        };

        for (index, body) in bodies.iter().enumerate().skip(CENTRAL_BODY_INDEX + 1) {
            let path = sample_path(&body.orbit, samples, period_hint).map_err(|err| match err {
                OrreryError::UndefinedPeriod => OrreryError::ZeroAngularVelocity(body.name.clone()),
                other => other,
            })?;
            debug!(
                body = %body.name,
                vertices = path.len(),
                length = path_length(&path),
                "orbit path sampled"
            );

            paths.ranges.push(PathRange {
                body_index: index,
                first: paths.vertices.len(),
                count: path.len(),
            });
            paths.vertices.extend(path.iter().map(to_vertex));
        }

        Ok(paths)
    }
}

/// One draw call for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear the color and depth buffers to `color` (RGBA).
    Clear { color: [f32; 4] },
    /// Draw `count` vertices of the orbit buffer from `first` as a connected line strip.
    LineStrip { first: usize, count: usize, color: Rgb },
    /// Draw vertex `index` of the point buffer as a point of `size` pixels.
    Point { index: usize, color: Rgb, size: f32 },
}

/// Application context: everything the render loop reads or mutates.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    orbit_paths: OrbitPaths,
    points: Vec<[f32; 3]>,
    clock: SimulationClock,
    camera: OrbitCamera,
    frame_timer: FrameTimer,
    viewport: (u32, u32),
    should_close: bool,
}

impl Scene {
    /// Validate the bodies and build both vertex buffers.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::EmptyBodyList`] without a central body.
    /// * Any body validation error.
    /// * [`OrreryError::ZeroAngularVelocity`] for an orbiting body with no usable period.
    /// * [`OrreryError::TooFewSamples`], [`OrreryError::TooManySamples`] or
    ///   [`OrreryError::InvalidTimeScale`] for bad settings.
    pub fn new(bodies: Vec<Body>, settings: SceneSettings) -> Result<Self, OrreryError> {
        if bodies.is_empty() {
            return Err(OrreryError::EmptyBodyList);
        }
        for body in &bodies {
            body.validate()?;
            if body.orbit.eccentricity > MAX_ACCURATE_ECCENTRICITY {
                warn!(
                    body = %body.name,
                    eccentricity = body.orbit.eccentricity,
                    "eccentricity above {MAX_ACCURATE_ECCENTRICITY}: one-step Kepler solution will drift"
                );
            }
        }

        let clock = SimulationClock::new(settings.time_scale, settings.paused)?;
        let orbit_paths = OrbitPaths::build(&bodies, settings.path_samples, settings.period_hint)?;
        let points = vec![[0.0; 3]; bodies.len()];

        info!(
            bodies = bodies.len(),
            orbit_vertices = orbit_paths.vertices.len(),
            "scene ready"
        );

        Ok(Self {
            bodies,
            orbit_paths,
            points,
            clock,
            camera: settings.camera,
            frame_timer: FrameTimer::default(),
            viewport: settings.viewport,
            should_close: false,
        })
    }

    /// Build a scene from a parsed configuration.
    pub fn from_config(config: &OrreryConfig) -> Result<Self, OrreryError> {
        Self::new(config.bodies()?, SceneSettings::from(config))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn orbit_paths(&self) -> &OrbitPaths {
        &self.orbit_paths
    }

    /// Current content of the point buffer, one vertex per body.
    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn frame_timer(&self) -> &FrameTimer {
        &self.frame_timer
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Position of body `index` at simulation time `t`; the central body is pinned at the origin.
    pub fn body_position(&self, index: usize, t: f64) -> Option<Vector3<f64>> {
        let body = self.bodies.get(index)?;
        if index == CENTRAL_BODY_INDEX {
            Some(Vector3::zeros())
        } else {
            Some(position(t, &body.orbit))
        }
    }

    /// Rewrite the point buffer for simulation time `t`.
    pub fn update_positions(&mut self, t: f64) {
        for (index, (body, point)) in self.bodies.iter().zip(self.points.iter_mut()).enumerate() {
            *point = if index == CENTRAL_BODY_INDEX {
                [0.0; 3]
            } else {
                to_vertex(&position(t, &body.orbit))
            };
        }
    }

    /// Advance by one real frame: clock, frame timer, then body positions.
    ///
    /// Returns the new simulation time.
    pub fn advance(&mut self, real_dt: Duration) -> f64 {
        self.frame_timer.record(real_dt.to_seconds());
        let t = self.clock.tick(real_dt);
        self.update_positions(t);
        t
    }

    /// Draw calls for the current frame: a clear, every orbit polyline, then every body.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let clear = std::iter::once(DrawCommand::Clear { color: CLEAR_COLOR });
        let lines = self.orbit_paths.ranges.iter().map(|r| DrawCommand::LineStrip {
            first: r.first,
            count: r.count,
            color: ORBIT_LINE_COLOR,
        });
        let points = self.bodies.iter().enumerate().map(|(index, body)| DrawCommand::Point {
            index,
            color: body.color,
            size: if index == CENTRAL_BODY_INDEX {
                CENTRAL_POINT_SIZE
            } else {
                BODY_POINT_SIZE_SCALE * body.visual_radius
            },
        });

        clear.chain(lines).chain(points).collect()
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        let (width, height) = self.viewport;
        self.camera.view_projection_f32(width, height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_close = true,
            Command::TogglePause => self.clock.toggle_pause(),
            Command::SpeedUp => self.clock.speed_up(),
            Command::SlowDown => self.clock.slow_down(),
            Command::ResetCamera => self.camera.reset(),
        }
        debug!(?command, time_scale = self.clock.time_scale(), "command applied");
    }

    /// Key press or repeat. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: Key) {
        if let Some(command) = Command::from_key(key) {
            self.apply(command);
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, action: ButtonAction) {
        self.camera.mouse_button(button, action);
    }

    pub fn handle_cursor(&mut self, x: f64, y: f64) {
        self.camera.cursor(x, y);
    }

    pub fn handle_scroll(&mut self, y_offset: f64) {
        self.camera.scroll(y_offset);
    }

    /// Window title text, e.g. `Orrery | FPS: 60 | scale: 60.0x | RUN`.
    pub fn status_line(&self) -> String {
        format!(
            "Orrery | FPS: {:.0} | scale: {:.1}x | {}",
            self.frame_timer.fps(),
            self.clock.time_scale(),
            if self.clock.is_paused() { "PAUSED" } else { "RUN" }
        )
    }
}

fn to_vertex(p: &Vector3<f64>) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}
