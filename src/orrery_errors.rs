use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Eccentricity must lie in [0, 1), got {0}")]
    InvalidEccentricity(f64),

    #[error("Semi-major axis must be strictly positive, got {0}")]
    InvalidSemiMajorAxis(f64),

    #[error("Orbital element `{0}` is not a finite number")]
    NonFiniteElement(&'static str),

    #[error("Orbit of body `{0}` has zero mean angular velocity and no period hint")]
    ZeroAngularVelocity(String),

    #[error("Path sampling needs at least 2 samples, got {0}")]
    TooFewSamples(usize),

    #[error("Path sampling is limited to {max} samples per orbit, got {got}")]
    TooManySamples { got: usize, max: usize },

    #[error("Orbital period is undefined (zero angular velocity and no positive period hint)")]
    UndefinedPeriod,

    #[error("Color channels of body `{0}` must lie in [0, 1]")]
    InvalidColor(String),

    #[error("Visual radius of body `{0}` must be strictly positive, got {1}")]
    InvalidVisualRadius(String, f32),

    #[error("Body list is empty; at least the central body is required")]
    EmptyBodyList,

    #[error("Time scale must be finite and lie in (0, 1e9], got {0}")]
    InvalidTimeScale(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error while parsing the TOML configuration: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => a == b,
            (NonFiniteElement(a), NonFiniteElement(b)) => a == b,
            (ZeroAngularVelocity(a), ZeroAngularVelocity(b)) => a == b,
            (TooFewSamples(a), TooFewSamples(b)) => a == b,
            (TooManySamples { got: a, max: m1 }, TooManySamples { got: b, max: m2 }) => {
                a == b && m1 == m2
            }
            (InvalidColor(a), InvalidColor(b)) => a == b,
            (InvalidVisualRadius(a, r1), InvalidVisualRadius(b, r2)) => a == b && r1 == r2,
            (InvalidTimeScale(a), InvalidTimeScale(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,

            // Wrapped errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (ConfigParseError(_), ConfigParseError(_)) => true,

            (UndefinedPeriod, UndefinedPeriod) => true,
            (EmptyBodyList, EmptyBodyList) => true,

            _ => false,
        }
    }
}
