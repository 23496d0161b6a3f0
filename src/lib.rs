//! # Orrery
//!
//! Core of a small animated orbital-mechanics viewer: a fixed star and bodies on Keplerian
//! orbits, an orbit camera and an adjustable simulation time scale.
//!
//! The numerical heart is [`kepler`]: [`kepler::position`] maps a simulation time and an
//! [`orbit_type::Orbit`] to a 3D position, and [`kepler::sample_path`] discretizes an orbit into
//! a polyline. [`scene::Scene`] is the application context a render loop drives; it produces
//! the vertex arrays, draw calls and camera matrices, and leaves windowing and GPU work to the
//! caller.
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod frame_timer;
pub mod input;
pub mod kepler;
pub mod orbit_type;
pub mod orrery_errors;
pub mod ref_system;
pub mod scene;
pub mod seed;
