//! Vertex format for helper geometry

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Position + color vertex for line and point helpers.
///
/// Positions are in normalized viewport coordinates, so an orthographic
/// `[-1, 1]` projection draws them on top of the scene.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct HelperVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Vertex color (RGB) with the helper opacity in alpha.
    pub color: [f32; 4],
}

impl HelperVertex {
    /// Create a vertex from a position, an RGB color and an opacity.
    pub fn new(position: Vec3, color: [f32; 3], opacity: f32) -> Self {
        Self {
            position: position.into(),
            color: [color[0], color[1], color[2], opacity],
        }
    }
}
