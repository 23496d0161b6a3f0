use approx::assert_relative_eq;
use nalgebra::Vector3;
use orrery::orbit_type::Orbit;

pub fn assert_vec_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// `{a=10, e=0, ω=i=Ω=0, n=1, φ0=0}`: a unit-rate circle in the XY plane.
pub fn reference_circle() -> Orbit {
    Orbit::builder()
        .semi_major_axis(10.0)
        .mean_angular_velocity(1.0)
        .build()
        .unwrap()
}
