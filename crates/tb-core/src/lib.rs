//! Trackball core
//!
//! Arcball rotation control for a single target orientation.
//!
//! # Module Structure
//!
//! ```text
//! tb-core/
//! ├── arcball/       # Controller state machine and constraint axis sets
//! ├── camera.rs      # ViewSource trait, viewports and an orbit camera
//! ├── config.rs      # Controller configuration (RON)
//! ├── constants.rs   # Default radius bounds and tolerances
//! ├── geometry.rs    # Ball projection, constraints and arc reconstruction
//! └── input.rs       # Per-frame pointer/key state with edge detection
//! ```

pub mod arcball;
pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod input;

pub use arcball::{Arcball, ArcballSnapshot, AxisSet};
pub use camera::{FixedView, OrbitCamera, ViewSource, Viewport};
pub use config::{ArcballConfig, ConfigError, KeyBindings};
pub use geometry::BallArc;
pub use input::{Button, Input, InputEvent, Key, State};
