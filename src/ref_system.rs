//! # Reference frames
//!
//! Rotations between the **perifocal frame** of an orbit (x toward periapsis, z along the
//! orbital angular momentum) and the **world frame** the central body is drawn in.
//!
//! The orientation of an orbit is given by three Euler angles applied as an intrinsic
//! z-x-z sequence:
//!
//! ```text
//! R = Rz(Ω) · Rx(i) · Rz(ω)
//! ```
//!
//! The rightmost rotation acts first on the perifocal vector: argument of periapsis ω,
//! then inclination i, then longitude of the ascending node Ω. The multiplication order
//! is what makes the orbit shapes match; any other composition draws different ellipses.

use nalgebra::{Rotation3, Vector3};

use crate::constants::Radian;

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary rotation of `alpha` radians about a coordinate axis.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians (counter-clockwise, right-handed).
/// * `axis`: the axis to rotate about.
///
/// Return
/// ------
/// * A proper rotation such that `rotmt(a, Axis::Z) * x̂ = (cos a, sin a, 0)`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Rotation3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha)
}

/// Rotation from the perifocal frame of an orbit to the world frame.
///
/// Arguments
/// ---------
/// * `periapsis_argument`: ω, radians.
/// * `inclination`: i, radians.
/// * `ascending_node_longitude`: Ω, radians.
///
/// Return
/// ------
/// * `Rz(Ω) · Rx(i) · Rz(ω)`.
///
/// See also
/// --------
/// * [`rotmt`] – elementary rotations composed here.
/// * [`crate::kepler::position`] – applies this rotation to the perifocal point.
pub fn perifocal_to_world(
    periapsis_argument: Radian,
    inclination: Radian,
    ascending_node_longitude: Radian,
) -> Rotation3<f64> {
    let node = rotmt(ascending_node_longitude, Axis::Z);
    let incl = rotmt(inclination, Axis::X);
    let peri = rotmt(periapsis_argument, Axis::Z);

    node * incl * peri
}
