//! Default values for the arcball helpers

/// Arc tessellation
pub mod arc {
    /// Bisections used to seed an arc; an arc has `2^BISECTIONS` segments
    pub const BISECTIONS: u32 = 5;
    /// Upper bound on bisections, 65537 points per arc
    pub const MAX_BISECTIONS: u32 = 16;
    /// Segments of a full circle (rim and face-on constraint rings)
    pub const CIRCLE_SEGMENTS: u32 = 64;
    /// Squared length below which a bisector is considered degenerate
    pub const BISECT_EPSILON: f32 = 1.0e-8;
}

/// Helper colors (RGB)
pub mod colors {
    /// Unconstrained drag arc (yellow)
    pub const DRAG: [f32; 3] = [1.0, 1.0, 0.0];
    /// Result arc (orange)
    pub const RESULT: [f32; 3] = [1.0, 0.5, 0.0];
    /// Ball rim (gray)
    pub const RIM: [f32; 3] = [0.3, 0.3, 0.3];
    /// First, second and third constraint axis
    pub const AXES: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.2, 0.7]];
    /// Any axis beyond the third
    pub const OTHER_AXIS: [f32; 3] = [1.0, 1.0, 1.0];
}

/// Helper opacities
pub mod opacity {
    /// Fully opaque elements
    pub const FULL: f32 = 1.0;
    /// Ball rim
    pub const RIM: f32 = 0.4;
    /// Constraint rings other than the nearest one
    pub const DIMMED: f32 = 0.4;
}
