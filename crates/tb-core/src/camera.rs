//! View sources for the arcball
//!
//! The arcball only needs two things from whatever is looking at the
//! target: the orientation of the viewer, and the pixel rectangle that
//! pointer positions are measured against. [`ViewSource`] captures exactly
//! that, so orthographic and perspective cameras can be used alike.

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Pixel rectangle of the active viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport anchored at the window origin
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(1280, 720)
    }
}

/// Anything the arcball can be viewed through
pub trait ViewSource {
    /// Orientation of the viewer in world space.
    ///
    /// Rotates camera-space vectors (+Z out of the screen) into world space.
    fn orientation(&self) -> Quat;

    /// Viewport that pointer positions are relative to
    fn viewport(&self) -> Viewport;
}

/// View with a fixed orientation and viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedView {
    pub orientation: Quat,
    pub viewport: Viewport,
}

impl FixedView {
    pub fn new(orientation: Quat, viewport: Viewport) -> Self {
        Self {
            orientation: orientation.normalize(),
            viewport,
        }
    }
}

impl ViewSource for FixedView {
    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Orbit camera
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub viewport: Viewport,
    // Orbit state
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    /// Create a new camera with default parameters
    pub fn new(viewport: Viewport) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Z,
            viewport,
            yaw: 45.0_f32.to_radians(),
            pitch: 30.0_f32.to_radians(),
            distance: 5.0,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Create a camera at the given orbit angles (in degrees)
    pub fn with_orbit(viewport: Viewport, yaw_degrees: f32, pitch_degrees: f32, distance: f32) -> Self {
        let mut camera = Self::new(viewport);
        camera.yaw = yaw_degrees.to_radians();
        camera.pitch = pitch_degrees.clamp(-89.0, 89.0).to_radians();
        camera.distance = distance.max(0.1);
        camera.update_position_from_orbit();
        camera
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

impl ViewSource for OrbitCamera {
    fn orientation(&self) -> Quat {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);

        Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
