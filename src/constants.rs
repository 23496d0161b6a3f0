//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **numerical constants**, **rendering defaults**, and **common type
//! aliases** used throughout the `orrery` crate.
//!
//! ## Overview
//!
//! - Angular constants and conversions
//! - Solver and path-sampling defaults
//! - Simulation clock tuning (time scale step and floor)
//! - Orbit camera defaults
//! - Colors and point sizes handed to the renderer

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full revolution in radians
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;

/// Normalized RGB color, each channel in `[0, 1]`
pub type Rgb = [f32; 3];

// -------------------------------------------------------------------------------------------------
// Solver
// -------------------------------------------------------------------------------------------------

/// Above this eccentricity the one-step eccentric anomaly drifts visibly from the true solution.
pub const MAX_ACCURATE_ECCENTRICITY: f64 = 0.3;

/// Number of vertices per orbit polyline
pub const DEFAULT_PATH_SAMPLES: usize = 256;

/// Upper bound on vertices per orbit polyline
pub const MAX_PATH_SAMPLES: usize = 65_536;

/// Index of the gravitational center in a body list
pub const CENTRAL_BODY_INDEX: usize = 0;

// -------------------------------------------------------------------------------------------------
// Simulation clock
// -------------------------------------------------------------------------------------------------

/// Simulation seconds per real second at startup (one real second = one simulated minute)
pub const DEFAULT_TIME_SCALE: f64 = 60.0;

/// Multiplicative step applied by speed-up / slow-down
pub const TIME_SCALE_STEP: f64 = 1.25;

/// Slowing down never goes below this time scale
pub const MIN_TIME_SCALE: f64 = 0.01;

/// Speeding up never goes above this time scale
pub const MAX_TIME_SCALE: f64 = 1.0e9;

/// Real seconds between two status-line refreshes
pub const TITLE_REFRESH_SECONDS: f64 = 0.25;

// -------------------------------------------------------------------------------------------------
// Camera
// -------------------------------------------------------------------------------------------------

pub const CAMERA_DEFAULT_YAW_DEG: f64 = 45.0;
pub const CAMERA_DEFAULT_PITCH_DEG: f64 = -20.0;
pub const CAMERA_DEFAULT_DISTANCE: f64 = 30.0;
pub const CAMERA_MIN_DISTANCE: f64 = 3.0;
pub const CAMERA_MAX_DISTANCE: f64 = 500.0;
pub const CAMERA_PITCH_LIMIT_DEG: f64 = 89.0;

/// Radians of yaw/pitch per pixel of cursor drag
pub const CAMERA_DRAG_SENSITIVITY: f64 = 0.005;

/// Distance factor for one scroll notch toward the target
pub const CAMERA_ZOOM_IN: f64 = 0.9;

/// Distance factor for one scroll notch away from the target
pub const CAMERA_ZOOM_OUT: f64 = 1.1;

pub const CAMERA_FOV_DEG: f64 = 50.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 2000.0;

// -------------------------------------------------------------------------------------------------
// Rendering defaults
// -------------------------------------------------------------------------------------------------

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;

/// Point size of the central body, in pixels
pub const CENTRAL_POINT_SIZE: f32 = 14.0;

/// Orbiting bodies are drawn with `BODY_POINT_SIZE_SCALE * visual_radius` pixels
pub const BODY_POINT_SIZE_SCALE: f32 = 6.0;

/// Color shared by every orbit polyline
pub const ORBIT_LINE_COLOR: Rgb = [0.5, 0.5, 0.55];

/// Background clear color (RGBA)
pub const CLEAR_COLOR: [f32; 4] = [0.06, 0.07, 0.10, 1.0];
