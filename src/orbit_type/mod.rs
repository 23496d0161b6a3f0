//! # Orbit model
//!
//! Plain value types describing the scene:
//!
//! - [`orbit`](crate::orbit_type::orbit) – the element set `(a, e, ω, i, Ω, n, φ0)` of one
//!   Keplerian orbit and its validating builder.
//! - [`body`](crate::orbit_type::body) – a named, colored body riding an orbit.
//!
//! Both are immutable once built and hold no references, so they can be shared freely with
//! rendering code on other threads.

/// Orbital element set and builder.
pub mod orbit;

/// Named bodies with color and visual radius.
pub mod body;

pub use body::Body;
pub use orbit::{Orbit, OrbitBuilder};
