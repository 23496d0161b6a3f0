//! # Orbit camera
//!
//! A camera circling a target point (normally the central body) on a sphere, driven by
//! yaw/pitch from mouse drags and distance from the scroll wheel.
//!
//! ## Placement
//!
//! ```text
//! eye = target + dist · (cos(pitch)·cos(yaw), sin(pitch), cos(pitch)·sin(yaw))
//! ```
//!
//! The view is a right-handed look-at from `eye` to `target` with +Y up, and the projection a
//! perspective with a fixed vertical field of view. Pitch is clamped short of ±90° so the
//! up vector never lines up with the viewing direction.

use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

use crate::{
    constants::{
        Radian, CAMERA_DEFAULT_DISTANCE, CAMERA_DEFAULT_PITCH_DEG, CAMERA_DEFAULT_YAW_DEG,
        CAMERA_DRAG_SENSITIVITY, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_MAX_DISTANCE,
        CAMERA_MIN_DISTANCE, CAMERA_NEAR, CAMERA_PITCH_LIMIT_DEG, CAMERA_ZOOM_IN,
        CAMERA_ZOOM_OUT, RADEG,
    },
    input::{ButtonAction, MouseButton},
};

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub yaw: Radian,
    pub pitch: Radian,
    pub distance: f64,
    pub target: Point3<f64>,
    rotating: bool,
    last_cursor: (f64, f64),
    /// Pose restored by [`OrbitCamera::reset`]
    home: (Radian, Radian, f64),
}

impl OrbitCamera {
    /// Camera at the given pose, looking at the origin.
    ///
    /// Pitch and distance are clamped to their allowed ranges.
    pub fn new(yaw: Radian, pitch: Radian, distance: f64) -> Self {
        let pitch = clamp_pitch(pitch);
        let distance = distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        Self {
            yaw,
            pitch,
            distance,
            target: Point3::origin(),
            rotating: false,
            last_cursor: (0.0, 0.0),
            home: (yaw, pitch, distance),
        }
    }

    /// Same as [`OrbitCamera::new`] with angles in degrees.
    pub fn from_degrees(yaw_deg: f64, pitch_deg: f64, distance: f64) -> Self {
        Self::new(yaw_deg * RADEG, pitch_deg * RADEG, distance)
    }

    /// Back to the pose the camera was created with, target at the origin.
    pub fn reset(&mut self) {
        let (yaw, pitch, distance) = self.home;
        *self = Self::new(yaw, pitch, distance);
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Left button press starts a drag, release ends it. Other buttons are ignored.
    pub fn mouse_button(&mut self, button: MouseButton, action: ButtonAction) {
        if button == MouseButton::Left {
            self.rotating = action == ButtonAction::Press;
        }
    }

    /// Cursor moved to `(x, y)` window pixels.
    pub fn cursor(&mut self, x: f64, y: f64) {
        let (last_x, last_y) = self.last_cursor;
        self.last_cursor = (x, y);
        if !self.rotating {
            return;
        }

        self.yaw += (x - last_x) * CAMERA_DRAG_SENSITIVITY;
        self.pitch = clamp_pitch(self.pitch + (y - last_y) * CAMERA_DRAG_SENSITIVITY);
    }

    /// Scroll wheel: positive offsets zoom in, negative zoom out, zero does nothing.
    pub fn scroll(&mut self, y_offset: f64) {
        let factor = if y_offset > 0.0 {
            CAMERA_ZOOM_IN
        } else if y_offset < 0.0 {
            CAMERA_ZOOM_OUT
        } else {
            return;
        };
        self.distance = (self.distance * factor).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn eye(&self) -> Point3<f64> {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vector3::new(cp * cy, sp, cp * sy)
    }

    /// World → camera transform.
    pub fn view(&self) -> Matrix4<f64> {
        Isometry3::look_at_rh(&self.eye(), &self.target, &Vector3::y()).to_homogeneous()
    }

    /// Perspective projection for a `width × height` viewport.
    ///
    /// A zero height (minimized window) is treated as 1 pixel.
    pub fn projection(&self, width: u32, height: u32) -> Matrix4<f64> {
        let aspect = width.max(1) as f64 / height.max(1) as f64;
        Perspective3::new(aspect, CAMERA_FOV_DEG * RADEG, CAMERA_NEAR, CAMERA_FAR).to_homogeneous()
    }

    /// `projection · view`.
    pub fn view_projection(&self, width: u32, height: u32) -> Matrix4<f64> {
        self.projection(width, height) * self.view()
    }

    /// [`OrbitCamera::view_projection`] in single precision, ready for a uniform upload.
    pub fn view_projection_f32(&self, width: u32, height: u32) -> Matrix4<f32> {
        self.view_projection(width, height).cast::<f32>()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_degrees(
            CAMERA_DEFAULT_YAW_DEG,
            CAMERA_DEFAULT_PITCH_DEG,
            CAMERA_DEFAULT_DISTANCE,
        )
    }
}

fn clamp_pitch(pitch: Radian) -> Radian {
    let limit = CAMERA_PITCH_LIMIT_DEG * RADEG;
    pitch.clamp(-limit, limit)
}

#[cfg(test)]
mod test_camera {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    #[test]
    fn test_default_pose() {
        let cam = OrbitCamera::default();
        assert_relative_eq!(cam.yaw, 45.0 * RADEG);
        assert_relative_eq!(cam.pitch, -20.0 * RADEG);
        assert_eq!(cam.distance, 30.0);
        assert_relative_eq!((cam.eye() - cam.target).norm(), 30.0, epsilon = 1e-12);
        // negative pitch puts the eye below the orbital plane seen from +Y
        assert!(cam.eye().y < 0.0);
    }

    #[test]
    fn test_drag_only_while_pressed() {
        let mut cam = OrbitCamera::default();
        let yaw0 = cam.yaw;

        cam.cursor(100.0, 100.0);
        cam.cursor(200.0, 100.0);
        assert_eq!(cam.yaw, yaw0);

        cam.mouse_button(MouseButton::Left, ButtonAction::Press);
        cam.cursor(300.0, 100.0);
        assert_relative_eq!(cam.yaw, yaw0 + 100.0 * CAMERA_DRAG_SENSITIVITY);

        cam.mouse_button(MouseButton::Right, ButtonAction::Release);
        assert!(cam.is_rotating());
        cam.mouse_button(MouseButton::Left, ButtonAction::Release);
        assert!(!cam.is_rotating());
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.mouse_button(MouseButton::Left, ButtonAction::Press);
        cam.cursor(0.0, 0.0);
        cam.cursor(0.0, 1.0e6);
        assert_relative_eq!(cam.pitch, 89.0 * RADEG);
        cam.cursor(0.0, -1.0e6);
        assert_relative_eq!(cam.pitch, -89.0 * RADEG);
    }

    #[test]
    fn test_scroll_zoom_and_clamp() {
        let mut cam = OrbitCamera::default();
        cam.scroll(1.0);
        assert_relative_eq!(cam.distance, 27.0, epsilon = 1e-12);
        cam.scroll(-1.0);
        assert_relative_eq!(cam.distance, 29.7, epsilon = 1e-12);
        cam.scroll(0.0);
        assert_relative_eq!(cam.distance, 29.7, epsilon = 1e-12);

        for _ in 0..100 {
            cam.scroll(1.0);
        }
        assert_eq!(cam.distance, CAMERA_MIN_DISTANCE);
        for _ in 0..200 {
            cam.scroll(-1.0);
        }
        assert_eq!(cam.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn test_reset_restores_home() {
        let mut cam = OrbitCamera::from_degrees(10.0, 5.0, 50.0);
        cam.scroll(1.0);
        cam.mouse_button(MouseButton::Left, ButtonAction::Press);
        cam.cursor(0.0, 0.0);
        cam.cursor(40.0, 40.0);
        cam.reset();
        assert_eq!(cam, OrbitCamera::from_degrees(10.0, 5.0, 50.0));
    }

    #[test]
    fn test_view_maps_target_in_front() {
        let cam = OrbitCamera::default();
        let v = cam.view() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        // right-handed: the camera looks down -Z
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(v.z, -30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_projection_handles_zero_height() {
        let cam = OrbitCamera::default();
        let p = cam.projection(1280, 0);
        assert!(p.iter().all(|x| x.is_finite()));
        let vp = cam.view_projection_f32(1280, 720);
        assert!(vp.iter().all(|x| x.is_finite()));
    }
}
