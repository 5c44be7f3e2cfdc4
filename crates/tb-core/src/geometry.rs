//! Trackball geometry
//!
//! Pure functions shared by the arcball controller and its visual helpers:
//! projecting pointer positions onto the ball, constraining ball points to
//! an axis, and turning ball points into rotations (and back).
//!
//! All ball points live in camera space: +X to the right, +Y up and +Z out
//! of the screen towards the viewer.

use glam::{IVec2, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::Viewport;
use crate::constants::{DEGENERATE_LENGTH, VIEW_AXIS_TOLERANCE};

/// Two points on the unit sphere joined by a great-circle arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallArc {
    pub from: Vec3,
    pub to: Vec3,
}

impl BallArc {
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }
}

impl Default for BallArc {
    fn default() -> Self {
        // Front pole of the ball, i.e. the center of the viewport
        Self {
            from: Vec3::Z,
            to: Vec3::Z,
        }
    }
}

/// Convert a pixel position to normalized device coordinates of the viewport.
///
/// Screen-down is ball-up, so the y axis is inverted. The returned z is
/// always zero.
pub fn window_coord(pointer: IVec2, viewport: &Viewport) -> Vec3 {
    let width = viewport.width.max(1) as f32;
    let height = viewport.height.max(1) as f32;

    Vec3::new(
        2.0 * (pointer.x - viewport.x) as f32 / width - 1.0,
        -(2.0 * (pointer.y - viewport.y) as f32 / height - 1.0),
        0.0,
    )
}

/// Project a pixel position onto the ball.
///
/// Positions inside the ball silhouette land on the front hemisphere.
/// Positions outside it are pulled in to the nearest point on the rim,
/// which lies on the equator facing the viewer (z = 0).
pub fn ball_coord(pointer: IVec2, viewport: &Viewport, radius: f32) -> Vec3 {
    let mut point = window_coord(pointer, viewport) / radius;

    let r = point.length_squared();
    if r > 1.0 {
        point *= 1.0 / r.sqrt();
    } else {
        point.z = (1.0 - r).sqrt();
    }

    point
}

/// Whether `axis` points straight into or out of the screen.
pub fn is_view_axis(axis: Vec3) -> bool {
    axis.z.abs() >= 1.0 - VIEW_AXIS_TOLERANCE
}

/// Constrain a ball point to the great circle perpendicular to `axis`.
///
/// The point is projected onto the plane through the origin perpendicular
/// to `axis` and renormalized. Results are flipped onto the front half of
/// the circle so that a constrained drag stays visually continuous.
///
/// When `point` is parallel to `axis` there is no projection, and a fixed
/// perpendicular is returned instead: `+X` for the view axis, otherwise the
/// axis turned a quarter turn within the screen plane.
pub fn constrain_to(point: Vec3, axis: Vec3) -> Vec3 {
    let proj = point - axis * axis.dot(point);

    let length = proj.length();
    if length > DEGENERATE_LENGTH {
        let mut s = 1.0 / length;
        if proj.z < 0.0 {
            s = -s;
        }
        proj * s
    } else if is_view_axis(axis) {
        Vec3::X
    } else {
        Vec3::new(-axis.y, axis.x, 0.0).normalize()
    }
}

/// Index of the axis whose constraint circle passes closest to `point`.
///
/// Closeness is measured by the dot product between `point` and its
/// constrained counterpart. Ties keep the lowest index, and an empty axis
/// list yields 0.
pub fn nearest_constraint(point: Vec3, axes: &[Vec3]) -> usize {
    let mut max = f32::NEG_INFINITY;
    let mut nearest = 0;

    for (i, axis) in axes.iter().enumerate() {
        let on_plane = constrain_to(point, *axis);
        let dot = on_plane.dot(point);
        if dot > max {
            max = dot;
            nearest = i;
        }
    }

    nearest
}

/// Rotation that carries ball point `from` to ball point `to`.
///
/// The rotation axis is computed in camera space and then brought into the
/// frame of `camera_orientation`, since the ball is aligned with the screen.
pub fn drag_rotation(from: Vec3, to: Vec3, camera_orientation: Quat) -> Quat {
    let w = from.dot(to);
    let v = camera_orientation * from.cross(to);

    Quat::from_xyzw(v.x, v.y, v.z, w).normalize()
}

/// Reconstruct the shortest arc on the ball that represents `orientation`.
///
/// The arc starts on the screen plane perpendicular to the rotation axis and
/// sweeps through half the rotation angle, which is how the arcball maps
/// arcs to rotations. Only used for feedback.
pub fn result_arc(orientation: Quat) -> BallArc {
    let q = orientation;

    let mut from = {
        let s = (q.x * q.x + q.y * q.y).sqrt();
        if s <= DEGENERATE_LENGTH {
            Vec3::Y
        } else {
            Vec3::new(-q.y / s, q.x / s, 0.0)
        }
    };

    let to = Vec3::new(
        q.w * from.x - q.z * from.y,
        q.w * from.y + q.z * from.x,
        q.x * from.y - q.y * from.x,
    );

    // q and -q are the same rotation; pick the shorter arc
    if q.w < 0.0 {
        from = Vec3::new(-from.x, -from.y, 0.0);
    }

    BallArc { from, to }
}
