//! Constraint axis sets

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Group of candidate rotation axes a drag can be constrained to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisSet {
    /// Free rotation
    #[default]
    None,
    /// Screen-aligned axes
    Camera,
    /// Local axes of the target
    Body,
    /// Global axes
    World,
}

impl AxisSet {
    /// Axis set selected by the held modifiers.
    ///
    /// ctrl+shift picks world axes, ctrl alone body axes and shift alone
    /// camera axes.
    pub fn from_modifiers(ctrl: bool, shift: bool) -> Self {
        match (ctrl, shift) {
            (true, true) => AxisSet::World,
            (true, false) => AxisSet::Body,
            (false, true) => AxisSet::Camera,
            (false, false) => AxisSet::None,
        }
    }

    /// Write the candidate axes of this set, in camera space, into `axes`.
    ///
    /// Axes that must not turn with the camera are multiplied by the
    /// inverse camera orientation, which cancels the camera rotation that
    /// [`crate::geometry::drag_rotation`] applies.
    pub fn fill_axes(self, axes: &mut Vec<Vec3>, camera_orientation: Quat, target: Quat) {
        axes.clear();

        let inv = camera_orientation.conjugate();
        match self {
            AxisSet::None => {}
            AxisSet::Camera => axes.extend([Vec3::X, Vec3::Y, Vec3::Z]),
            AxisSet::Body => {
                let to_camera = inv * target;
                axes.extend([Vec3::X, Vec3::Y, Vec3::Z].map(|unit| to_camera * unit));
            }
            AxisSet::World => axes.extend([Vec3::X, Vec3::Y, Vec3::Z].map(|unit| inv * unit)),
        }
    }
}
