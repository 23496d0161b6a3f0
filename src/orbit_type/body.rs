//! # Celestial bodies
//!
//! A [`Body`] couples an [`Orbit`] with what the renderer needs to draw it: a display name,
//! a color and a visual radius. By convention the body at
//! [`CENTRAL_BODY_INDEX`](crate::constants::CENTRAL_BODY_INDEX) of a body list is the
//! gravitational center; it is drawn at the origin whatever its orbit says.

use crate::{
    constants::Rgb,
    orbit_type::orbit::Orbit,
    orrery_errors::OrreryError,
};

/// One body of the scene.
///
/// Units
/// -----
/// * `color`: normalized RGB, each channel in `[0, 1]`.
/// * `visual_radius`: scene units, purely cosmetic (drives the point size).
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub orbit: Orbit,
    pub color: Rgb,
    pub visual_radius: f32,
}

impl Body {
    /// Build and validate a body.
    ///
    /// Errors
    /// ------
    /// * Any error of [`Orbit::validate`].
    /// * [`OrreryError::InvalidColor`] if a channel is outside `[0, 1]`.
    /// * [`OrreryError::InvalidVisualRadius`] if the radius is not strictly positive.
    pub fn new(
        name: impl Into<String>,
        orbit: Orbit,
        color: Rgb,
        visual_radius: f32,
    ) -> Result<Self, OrreryError> {
        let body = Body {
            name: name.into(),
            orbit,
            color,
            visual_radius,
        };
        body.validate()?;
        Ok(body)
    }

    /// Build a body sitting on the [`Orbit::FIXED`] orbit.
    pub fn fixed(
        name: impl Into<String>,
        color: Rgb,
        visual_radius: f32,
    ) -> Result<Self, OrreryError> {
        Self::new(name, Orbit::FIXED, color, visual_radius)
    }

    pub fn validate(&self) -> Result<(), OrreryError> {
        self.orbit.validate()?;

        if !self.color.iter().all(|c| (0.0..=1.0).contains(c)) {
            return Err(OrreryError::InvalidColor(self.name.clone()));
        }

        // NaN fails this comparison too
        if !(self.visual_radius > 0.0) || !self.visual_radius.is_finite() {
            return Err(OrreryError::InvalidVisualRadius(
                self.name.clone(),
                self.visual_radius,
            ));
        }

        Ok(())
    }

    pub fn is_fixed(&self) -> bool {
        self.orbit.is_fixed()
    }
}
