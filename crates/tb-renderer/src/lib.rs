//! Trackball renderer
//!
//! Tessellates the arcball's visual helpers into colored polylines. Drawing
//! them is left to the host; vertices are `Pod` and can be uploaded as-is.
//!
//! # Module Structure
//!
//! ```text
//! tb-renderer/
//! ├── arc.rs         # Great-circle arcs via bisection and recurrence
//! ├── config.rs      # Helper visibility, colors and tessellation (RON)
//! ├── constants.rs   # Default colors, opacities and segment counts
//! ├── helper.rs      # Drag, rim, result and constraint polylines
//! └── vertex.rs      # Position + color vertex
//! ```

pub mod arc;
pub mod config;
pub mod constants;
pub mod helper;
pub mod vertex;

pub use config::{HelperConfig, HelperConfigError};
pub use helper::{ArcballHelper, DrawBatch, DrawMode, Polyline};
pub use vertex::HelperVertex;
