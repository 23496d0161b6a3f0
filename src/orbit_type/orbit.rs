//! # Orbital elements
//!
//! This module defines [`Orbit`](crate::orbit_type::orbit::Orbit), the element set driving every
//! moving body of the scene, together with its validating builder.
//!
//! ## Elements
//!
//! 1. **a** – Semi-major axis (scene units)
//! 2. **e** – Eccentricity (unitless, `[0, 1)`)
//! 3. **ω** – Argument of periapsis (radians)
//! 4. **i** – Inclination (radians)
//! 5. **Ω** – Longitude of ascending node (radians)
//! 6. **n** – Mean angular velocity (radians per simulation second)
//! 7. **φ0** – Initial phase, the mean anomaly at `t = 0` (radians)
//!
//! Unlike an osculating element set, the timing is given directly by `n` instead of being
//! derived from a gravitational parameter: the scene is not to scale and every body gets the
//! angular speed that looks right.
//!
//! ## Degenerate orbit
//!
//! The central body carries [`Orbit::FIXED`], every element set to zero. Its position is the
//! origin for all `t`, and it has no period: it must never be handed to
//! [`sample_path`](crate::kepler::sample_path).
//!
//! ## Example
//!
//! ```rust
//! use orrery::orbit_type::orbit::Orbit;
//!
//! let orbit = Orbit::builder()
//!     .semi_major_axis(6.0)
//!     .eccentricity(0.02)
//!     .periapsis_argument(0.2)
//!     .inclination(0.05)
//!     .mean_angular_velocity(0.6)
//!     .build()
//!     .unwrap();
//!
//! assert!(orbit.period().is_some());
//! ```

use std::fmt;

use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, DPI},
    orrery_errors::OrreryError,
    ref_system::perifocal_to_world,
};

/// Keplerian orbit of a body around the central focus.
///
/// Units
/// -----
/// * `semi_major_axis`: scene units.
/// * `eccentricity`: unitless.
/// * `periapsis_argument`: radians (ω).
/// * `inclination`: radians (i).
/// * `ascending_node_longitude`: radians (Ω).
/// * `mean_angular_velocity`: radians per simulation second (n).
/// * `initial_phase`: radians (φ0).
///
/// Notes
/// -----
/// Fields are public so the struct can be written as a literal, like any plain value type.
/// A literal skips validation; prefer [`Orbit::builder`] or call [`Orbit::validate`] when the
/// elements come from outside the program. An eccentricity outside `[0, 1)` makes the solver
/// return NaN coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Orbit {
    pub semi_major_axis: f64,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub periapsis_argument: Radian,
    #[serde(default)]
    pub inclination: Radian,
    #[serde(default)]
    pub ascending_node_longitude: Radian,
    pub mean_angular_velocity: f64,
    #[serde(default)]
    pub initial_phase: Radian,
}

impl Orbit {
    /// Degenerate orbit of the central body.
    pub const FIXED: Orbit = Orbit {
        semi_major_axis: 0.0,
        eccentricity: 0.0,
        periapsis_argument: 0.0,
        inclination: 0.0,
        ascending_node_longitude: 0.0,
        mean_angular_velocity: 0.0,
        initial_phase: 0.0,
    };

    /// Create a new [`OrbitBuilder`] starting from [`Orbit::FIXED`].
    pub fn builder() -> OrbitBuilder {
        OrbitBuilder::new()
    }

    /// True when every element is zero.
    pub fn is_fixed(&self) -> bool {
        *self == Orbit::FIXED
    }

    /// Check the elements against the solver's domain.
    ///
    /// Validation rules
    /// -----------------
    /// * Every element must be finite.
    /// * The fixed orbit is always accepted.
    /// * `0 ≤ e < 1`, otherwise `sqrt(1 − e²)` is not real.
    /// * `a > 0`.
    ///
    /// A zero angular velocity is legal here: whether the orbit can be sampled depends on
    /// the period hint, see [`crate::kepler::orbital_period`].
    pub fn validate(&self) -> Result<(), OrreryError> {
        let elements = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("periapsis_argument", self.periapsis_argument),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("mean_angular_velocity", self.mean_angular_velocity),
            ("initial_phase", self.initial_phase),
        ];
        if let Some(&(name, _)) = elements.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrreryError::NonFiniteElement(name));
        }

        if self.is_fixed() {
            return Ok(());
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrreryError::InvalidEccentricity(self.eccentricity));
        }

        if self.semi_major_axis <= 0.0 {
            return Err(OrreryError::InvalidSemiMajorAxis(self.semi_major_axis));
        }

        Ok(())
    }

    /// Time for the mean anomaly to advance by 2π, `2π / |n|`.
    ///
    /// Returns `None` when `n == 0`.
    pub fn period(&self) -> Option<f64> {
        if self.mean_angular_velocity == 0.0 {
            None
        } else {
            Some(DPI / self.mean_angular_velocity.abs())
        }
    }

    /// Rotation carrying perifocal coordinates of this orbit into the world frame.
    pub fn perifocal_rotation(&self) -> Rotation3<f64> {
        perifocal_to_world(
            self.periapsis_argument,
            self.inclination,
            self.ascending_node_longitude,
        )
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        if self.is_fixed() {
            return writeln!(f, "Fixed orbit (pinned at the origin)");
        }
        writeln!(f, "Orbit")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6}",
            self.semi_major_axis
        )?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  n   (mean angular velocity) = {:.6} rad/s",
            self.mean_angular_velocity
        )?;
        writeln!(
            f,
            "  φ0  (initial phase)         = {:.6} rad ({:.6}°)",
            self.initial_phase,
            self.initial_phase * rad_to_deg
        )
    }
}

/// Builder for [`Orbit`], with validation.
#[derive(Debug, Clone)]
pub struct OrbitBuilder {
    orbit: Orbit,
}

impl Default for OrbitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitBuilder {
    /// Create a new builder with every element at zero.
    pub fn new() -> Self {
        Self {
            orbit: Orbit::FIXED,
        }
    }

    pub fn semi_major_axis(mut self, v: f64) -> Self {
        self.orbit.semi_major_axis = v;
        self
    }
    pub fn eccentricity(mut self, v: f64) -> Self {
        self.orbit.eccentricity = v;
        self
    }
    pub fn periapsis_argument(mut self, v: Radian) -> Self {
        self.orbit.periapsis_argument = v;
        self
    }
    pub fn inclination(mut self, v: Radian) -> Self {
        self.orbit.inclination = v;
        self
    }
    pub fn ascending_node_longitude(mut self, v: Radian) -> Self {
        self.orbit.ascending_node_longitude = v;
        self
    }
    pub fn mean_angular_velocity(mut self, v: f64) -> Self {
        self.orbit.mean_angular_velocity = v;
        self
    }
    pub fn initial_phase(mut self, v: Radian) -> Self {
        self.orbit.initial_phase = v;
        self
    }

    /// Finalize the builder, running [`Orbit::validate`].
    pub fn build(self) -> Result<Orbit, OrreryError> {
        self.orbit.validate()?;
        Ok(self.orbit)
    }
}

#[cfg(test)]
mod test_orbit {
    use super::*;

    fn timber_hearth() -> Orbit {
        Orbit {
            semi_major_axis: 6.0,
            eccentricity: 0.02,
            periapsis_argument: 0.2,
            inclination: 0.05,
            ascending_node_longitude: 0.0,
            mean_angular_velocity: 0.6,
            initial_phase: 0.0,
        }
    }

    #[test]
    fn test_builder_matches_literal() {
        let built = Orbit::builder()
            .semi_major_axis(6.0)
            .eccentricity(0.02)
            .periapsis_argument(0.2)
            .inclination(0.05)
            .mean_angular_velocity(0.6)
            .build()
            .unwrap();
        assert_eq!(built, timber_hearth());
    }

    #[test]
    fn test_fixed_orbit_is_valid() {
        assert!(Orbit::FIXED.validate().is_ok());
        assert!(Orbit::FIXED.is_fixed());
        assert_eq!(Orbit::FIXED.period(), None);
        assert_eq!(Orbit::builder().build(), Ok(Orbit::FIXED));
    }

    #[test]
    fn test_rejects_out_of_range_eccentricity() {
        let err = Orbit::builder()
            .semi_major_axis(1.0)
            .eccentricity(1.0)
            .mean_angular_velocity(1.0)
            .build();
        assert_eq!(err, Err(OrreryError::InvalidEccentricity(1.0)));

        let err = Orbit::builder()
            .semi_major_axis(1.0)
            .eccentricity(-0.1)
            .build();
        assert_eq!(err, Err(OrreryError::InvalidEccentricity(-0.1)));
    }

    #[test]
    fn test_rejects_non_positive_axis() {
        let err = Orbit::builder().mean_angular_velocity(0.5).build();
        assert_eq!(err, Err(OrreryError::InvalidSemiMajorAxis(0.0)));
    }

    #[test]
    fn test_rejects_nan() {
        let orbit = Orbit {
            inclination: f64::NAN,
            ..timber_hearth()
        };
        assert_eq!(
            orbit.validate(),
            Err(OrreryError::NonFiniteElement("inclination"))
        );
    }

    #[test]
    fn test_period() {
        let orbit = timber_hearth();
        assert_eq!(orbit.period(), Some(DPI / 0.6));

        let retrograde = Orbit {
            mean_angular_velocity: -0.6,
            ..orbit
        };
        assert_eq!(retrograde.period(), Some(DPI / 0.6));
    }

    #[test]
    fn test_deserialize_defaults_angles() {
        let orbit: Orbit =
            toml::from_str("semi_major_axis = 14.0\nmean_angular_velocity = 0.25\n").unwrap();
        assert_eq!(
            orbit,
            Orbit {
                semi_major_axis: 14.0,
                mean_angular_velocity: 0.25,
                ..Orbit::FIXED
            }
        );
    }

    #[test]
    fn test_display_mentions_elements() {
        let text = format!("{}", timber_hearth());
        assert!(text.contains("semi-major axis"));
        assert!(text.contains("6.000000"));
        assert!(format!("{}", Orbit::FIXED).starts_with("Fixed orbit"));
    }
}
