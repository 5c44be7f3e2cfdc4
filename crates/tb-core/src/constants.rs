//! Global constants for tb-core

/// Initial ball radius in normalized viewport units
pub const DEFAULT_RADIUS: f32 = 0.75;

/// Smallest ball radius reachable with the shrink key
pub const MIN_RADIUS: f32 = 0.25;

/// Largest ball radius reachable with the grow key
pub const MAX_RADIUS: f32 = 1.0;

/// Radius change per grow/shrink key press
pub const RADIUS_STEP: f32 = 0.25;

/// Vectors shorter than this are treated as zero-length before normalizing
pub const DEGENERATE_LENGTH: f32 = 1.0e-6;

/// Tolerance for deciding that an axis points straight out of the screen
pub const VIEW_AXIS_TOLERANCE: f32 = 1.0e-6;
