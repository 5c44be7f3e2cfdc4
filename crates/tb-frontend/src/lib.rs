//! Trackball frontend
//!
//! Headless host for the arcball: replays recorded input sessions through
//! the controller and its helpers.
//!
//! # Module Structure
//!
//! ```text
//! tb-frontend/
//! ├── cli.rs         # Command line arguments
//! ├── report.rs      # Frame loop and per-frame report
//! ├── session.rs     # Recorded sessions (RON)
//! └── main.rs        # tb-replay entry point
//! ```

pub mod cli;
pub mod report;
pub mod session;

pub use cli::Args;
pub use report::{FrameReport, Report, replay};
pub use session::{CameraSetup, Frame, Session, SessionError, SessionView};
