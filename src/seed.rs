//! Built-in star system used when no configuration supplies bodies.
//!
//! A fixed star at the center and five planets with illustrative, not-to-scale elements.
//! Angles are in radians, angular velocities in radians per simulation second.

use crate::orbit_type::{Body, Orbit};

struct SeedBody {
    name: &'static str,
    orbit: Orbit,
    color: [f32; 3],
    radius: f32,
}

const fn orbit(a: f64, e: f64, w: f64, i: f64, node: f64, n: f64, phi0: f64) -> Orbit {
    Orbit {
        semi_major_axis: a,
        eccentricity: e,
        periapsis_argument: w,
        inclination: i,
        ascending_node_longitude: node,
        mean_angular_velocity: n,
        initial_phase: phi0,
    }
}

const SEED: [SeedBody; 6] = [
    SeedBody {
        name: "Sun",
        orbit: Orbit::FIXED,
        color: [1.0, 0.95, 0.3],
        radius: 1.5,
    },
    SeedBody {
        name: "Timber Hearth",
        orbit: orbit(6.0, 0.02, 0.2, 0.05, 0.0, 0.6, 0.0),
        color: [0.3, 0.8, 0.9],
        radius: 0.5,
    },
    SeedBody {
        name: "Brittle Hollow",
        orbit: orbit(10.0, 0.05, 0.7, 0.1, 0.4, 0.35, 0.9),
        color: [0.9, 0.5, 0.2],
        radius: 0.6,
    },
    SeedBody {
        name: "Giant's Deep",
        orbit: orbit(14.0, 0.01, 0.1, 0.0, 0.2, 0.25, 1.7),
        color: [0.2, 0.9, 0.5],
        radius: 0.6,
    },
    SeedBody {
        name: "Hourglass Twins",
        orbit: orbit(4.0, 0.03, 0.5, 0.0, 0.0, 0.9, 0.4),
        color: [0.95, 0.75, 0.2],
        radius: 0.45,
    },
    SeedBody {
        name: "Dark Bramble",
        orbit: orbit(20.0, 0.2, 1.2, 0.25, 0.8, 0.12, 2.4),
        color: [0.8, 0.8, 0.9],
        radius: 0.7,
    },
];

/// The default system, central star first.
pub fn default_bodies() -> Vec<Body> {
    SEED.iter()
        .map(|s| Body {
            name: s.name.to_string(),
            orbit: s.orbit,
            color: s.color,
            visual_radius: s.radius,
        })
        .collect()
}
