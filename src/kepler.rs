//! # Orbital solver
//!
//! Stateless functions mapping a simulation time and an [`Orbit`] to a position, and an orbit
//! to a polyline approximating its path over one period.
//!
//! ## Position pipeline
//!
//! ```text
//! M = n·t + φ0                          mean anomaly, never wrapped
//! E = M + e·sin(M)                      one fixed-point step of Kepler's equation
//! p = (a(cos E − e), a√(1−e²) sin E, 0) perifocal frame, x toward periapsis
//! r = Rz(Ω) · Rx(i) · Rz(ω) · p         world frame
//! ```
//!
//! The eccentric anomaly is **not** iterated to convergence. For `e ≲ 0.3` the single step is
//! visually indistinguishable from the exact solution; above that the body visibly runs off its
//! true timing, which is accepted for a real-time display.
//!
//! ## Path sampling
//!
//! [`sample_path`] evaluates [`position`] at `N` instants evenly spread over one period,
//! `t_k = T·k/(N−1)`, so the first and last vertices sit at `t = 0` and `t = T` and coincide for
//! a periodic orbit. There is no explicit closing segment.

use itertools::Itertools;
use nalgebra::Vector3;

use crate::{
    constants::{Radian, DPI},
    orbit_type::orbit::Orbit,
    orrery_errors::OrreryError,
};

/// Mean anomaly at simulation time `t`, `n·t + φ0`.
#[inline]
pub fn mean_anomaly(t: f64, orbit: &Orbit) -> Radian {
    orbit.mean_angular_velocity * t + orbit.initial_phase
}

/// First-order eccentric anomaly, `E = M + e·sin(M)`.
///
/// This is a single fixed-point step of `E = M + e·sin(E)` started from `E₀ = M`.
/// Its error grows like `e²`.
#[inline]
pub fn eccentric_anomaly(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    mean_anomaly + eccentricity * mean_anomaly.sin()
}

/// Position in the perifocal frame for a given eccentric anomaly.
///
/// Return
/// ------
/// * `(a(cos E − e), a·sqrt(1 − e²)·sin E, 0)`. NaN components if `e ∉ [0, 1)`.
#[inline]
pub fn perifocal_position(orbit: &Orbit, eccentric_anomaly: Radian) -> Vector3<f64> {
    let a = orbit.semi_major_axis;
    let e = orbit.eccentricity;
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();

    Vector3::new(a * (cos_e - e), a * (1.0 - e * e).sqrt() * sin_e, 0.0)
}

/// Position of a body at simulation time `t`, relative to the focus of its orbit.
///
/// Arguments
/// ---------
/// * `t`: simulation time in seconds. Any real value is accepted, including large
///   accumulated times from a scaled or paused clock.
/// * `orbit`: the orbital elements.
///
/// Return
/// ------
/// * The world-frame position, in the units of `semi_major_axis`.
///
/// Remarks
/// -------
/// * Pure and deterministic: same inputs, same bits.
/// * The elements are not checked here. A validated orbit (see [`Orbit::validate`]) never
///   yields NaN.
/// * [`Orbit::FIXED`] maps every `t` to the origin.
///
/// See also
/// --------
/// * [`sample_path`] – polyline over one period.
/// * [`crate::ref_system::perifocal_to_world`] – the frame rotation.
pub fn position(t: f64, orbit: &Orbit) -> Vector3<f64> {
    let m = mean_anomaly(t, orbit);
    let e = eccentric_anomaly(m, orbit.eccentricity);
    let p = perifocal_position(orbit, e);

    orbit.perifocal_rotation() * p
}

/// Time span covered by one sampled path.
///
/// `period_hint` wins when it is strictly positive; otherwise the period is `2π / n`.
/// A negative `n` gives a negative span, which traces the same loop.
///
/// Errors
/// ------
/// * [`OrreryError::UndefinedPeriod`] when there is no hint and `n == 0`, or the
///   result is not finite.
pub fn orbital_period(orbit: &Orbit, period_hint: f64) -> Result<f64, OrreryError> {
    let period = if period_hint > 0.0 {
        period_hint
    } else {
        DPI / orbit.mean_angular_velocity
    };

    if period.is_finite() && period != 0.0 {
        Ok(period)
    } else {
        Err(OrreryError::UndefinedPeriod)
    }
}

/// Sample `sample_count` positions evenly spaced in time over one orbital period.
///
/// Arguments
/// ---------
/// * `orbit`: the orbital elements. Must not be the fixed orbit unless a hint is given.
/// * `sample_count`: number of vertices, at least 2.
/// * `period_hint`: span to cover in simulation seconds; `≤ 0` means "use `2π / n`".
///
/// Return
/// ------
/// * `sample_count` positions, `position(T·k/(N−1))` for `k = 0..N`.
///
/// Errors
/// ------
/// * [`OrreryError::TooFewSamples`] if `sample_count < 2`.
/// * [`OrreryError::UndefinedPeriod`], see [`orbital_period`].
///
/// The output depends only on the inputs, never on the live simulation clock.
pub fn sample_path(
    orbit: &Orbit,
    sample_count: usize,
    period_hint: f64,
) -> Result<Vec<Vector3<f64>>, OrreryError> {
    if sample_count < 2 {
        return Err(OrreryError::TooFewSamples(sample_count));
    }
    let period = orbital_period(orbit, period_hint)?;
    let last = (sample_count - 1) as f64;

    Ok((0..sample_count)
        .map(|k| position((period * k as f64) / last, orbit))
        .collect())
}

/// Total length of a polyline, summed over consecutive vertex pairs.
pub fn path_length(path: &[Vector3<f64>]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| (b - a).norm())
        .sum()
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn planar(a: f64, e: f64) -> Orbit {
        Orbit {
            semi_major_axis: a,
            eccentricity: e,
            mean_angular_velocity: 1.0,
            ..Orbit::FIXED
        }
    }

    #[test]
    fn test_circular_quarter_turn() {
        let orbit = planar(10.0, 0.0);

        let p0 = position(0.0, &orbit);
        assert_relative_eq!(p0.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(p0.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p0.z, 0.0, epsilon = 1e-12);

        let p1 = position(FRAC_PI_2, &orbit);
        assert_relative_eq!(p1.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p1.y, 10.0, epsilon = 1e-12);
        assert_relative_eq!(p1.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_one_step_anomaly() {
        assert_eq!(eccentric_anomaly(0.0, 0.2), 0.0);
        assert_relative_eq!(eccentric_anomaly(FRAC_PI_2, 0.2), FRAC_PI_2 + 0.2);
        // no convergence loop: E differs from the exact root of E - e sin E = M
        let m = 1.0;
        let e1 = eccentric_anomaly(m, 0.5);
        assert!((e1 - 0.5 * e1.sin() - m).abs() > 1e-3);
    }

    #[test]
    fn test_periapsis_and_apoapsis_distance() {
        let orbit = planar(10.0, 0.2);
        // M = 0 → E = 0 → periapsis at a(1 − e)
        assert_relative_eq!(position(0.0, &orbit).norm(), 8.0, epsilon = 1e-12);
        // M = π → E = π → apoapsis at a(1 + e)
        assert_relative_eq!(position(PI, &orbit).norm(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_orbit_at_origin() {
        for t in [0.0, 1.0, -3.5, 1e9] {
            assert_eq!(position(t, &Orbit::FIXED), Vector3::zeros());
        }
    }

    #[test]
    fn test_invalid_eccentricity_gives_nan() {
        let p = position(1.0, &planar(10.0, 1.5));
        assert!(p.y.is_nan());
    }

    #[test]
    fn test_sample_path_four_points() {
        let orbit = planar(10.0, 0.0);
        let path = sample_path(&orbit, 4, DPI).unwrap();
        assert_eq!(path.len(), 4);

        for (k, p) in path.iter().enumerate() {
            let expected = position(DPI * k as f64 / 3.0, &orbit);
            assert_eq!(*p, expected);
        }
        assert_relative_eq!(path[0].x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(path[3].x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(path[3].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_path_errors() {
        let orbit = planar(10.0, 0.0);
        assert_eq!(
            sample_path(&orbit, 1, 0.0),
            Err(OrreryError::TooFewSamples(1))
        );
        assert_eq!(
            sample_path(&Orbit::FIXED, 16, 0.0),
            Err(OrreryError::UndefinedPeriod)
        );
        // a hint makes even the fixed orbit sampleable
        let path = sample_path(&Orbit::FIXED, 3, 5.0).unwrap();
        assert!(path.iter().all(|p| *p == Vector3::zeros()));
    }

    #[test]
    fn test_orbital_period_prefers_hint() {
        let orbit = Orbit {
            mean_angular_velocity: 0.5,
            ..planar(1.0, 0.0)
        };
        assert_eq!(orbital_period(&orbit, 3.0), Ok(3.0));
        assert_eq!(orbital_period(&orbit, 0.0), Ok(DPI / 0.5));
        assert_eq!(orbital_period(&orbit, -1.0), Ok(DPI / 0.5));
    }

    #[test]
    fn test_path_length_of_circle() {
        let orbit = planar(10.0, 0.0);
        let path = sample_path(&orbit, 1024, 0.0).unwrap();
        assert_relative_eq!(path_length(&path), DPI * 10.0, max_relative = 1e-4);
        assert_eq!(path_length(&path[..1]), 0.0);
    }
}
