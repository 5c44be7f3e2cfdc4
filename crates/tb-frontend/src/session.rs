//! Recorded input sessions
//!
//! A session describes the scene an arcball is driven in (camera, viewport,
//! initial target orientation) and the input events delivered on every
//! frame. Sessions are stored as RON.

use std::path::Path;

use glam::Quat;
use serde::{Deserialize, Serialize};
use tb_core::{FixedView, InputEvent, OrbitCamera, ViewSource, Viewport};

/// How the scene is viewed during a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraSetup {
    /// Z-up orbit camera around the origin
    Orbit {
        yaw_degrees: f32,
        pitch_degrees: f32,
        distance: f32,
    },
    /// Camera with an explicit orientation quaternion `[x, y, z, w]`
    Fixed { orientation: [f32; 4] },
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self::Fixed {
            orientation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Input delivered during one frame, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    pub events: Vec<InputEvent>,
}

/// A recorded session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub camera: CameraSetup,
    pub viewport: Viewport,
    /// Initial target orientation `[x, y, z, w]`
    pub target: [f32; 4],
    /// Enable constraint axes after the controller is built
    pub allow_constraints: bool,
    pub frames: Vec<Frame>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            camera: CameraSetup::default(),
            viewport: Viewport::default(),
            target: [0.0, 0.0, 0.0, 1.0],
            allow_constraints: false,
            frames: Vec::new(),
        }
    }
}

impl Session {
    /// Check that the scene can be built
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(SessionError::Invalid(format!(
                "viewport {}x{} is empty",
                self.viewport.width, self.viewport.height
            )));
        }
        check_quaternion("target", self.target)?;
        match self.camera {
            CameraSetup::Orbit {
                yaw_degrees,
                pitch_degrees,
                distance,
            } => {
                if !(yaw_degrees.is_finite() && pitch_degrees.is_finite()) {
                    return Err(SessionError::Invalid(
                        "orbit angles must be finite".to_string(),
                    ));
                }
                if !(distance > 0.0 && distance.is_finite()) {
                    return Err(SessionError::Invalid(format!(
                        "orbit distance {distance} must be positive"
                    )));
                }
            }
            CameraSetup::Fixed { orientation } => check_quaternion("camera orientation", orientation)?,
        }
        Ok(())
    }

    /// Parse and validate a session from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, SessionError> {
        let session: Session =
            ron::from_str(content).map_err(|e| SessionError::Parse(e.to_string()))?;
        session.validate()?;
        Ok(session)
    }

    /// Serialize the session to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, SessionError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SessionError::Parse(e.to_string()))
    }

    /// Load a session from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SessionError::Io(e.to_string()))?;
        let session = Self::from_ron_str(&content)?;
        tracing::debug!(
            "Loaded session from {} ({} frames)",
            path.display(),
            session.frames.len()
        );
        Ok(session)
    }

    /// Save the session to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| SessionError::Io(e.to_string()))?;
        Ok(())
    }

    /// Initial target orientation, normalized
    pub fn target_orientation(&self) -> Quat {
        Quat::from_array(self.target).normalize()
    }

    /// Build the view the session is replayed through
    pub fn view(&self) -> SessionView {
        match self.camera {
            CameraSetup::Orbit {
                yaw_degrees,
                pitch_degrees,
                distance,
            } => SessionView::Orbit(OrbitCamera::with_orbit(
                self.viewport,
                yaw_degrees,
                pitch_degrees,
                distance,
            )),
            CameraSetup::Fixed { orientation } => SessionView::Fixed(FixedView::new(
                Quat::from_array(orientation),
                self.viewport,
            )),
        }
    }
}

fn check_quaternion(name: &str, q: [f32; 4]) -> Result<(), SessionError> {
    let q = Quat::from_array(q);
    if !q.is_finite() || q.length_squared() < 1e-12 {
        return Err(SessionError::Invalid(format!(
            "{name} {q:?} is not a valid rotation"
        )));
    }
    Ok(())
}

/// Camera built from a [`CameraSetup`]
pub enum SessionView {
    Orbit(OrbitCamera),
    Fixed(FixedView),
}

impl ViewSource for SessionView {
    fn orientation(&self) -> Quat {
        match self {
            SessionView::Orbit(camera) => camera.orientation(),
            SessionView::Fixed(view) => view.orientation(),
        }
    }

    fn viewport(&self) -> Viewport {
        match self {
            SessionView::Orbit(camera) => camera.viewport(),
            SessionView::Fixed(view) => view.viewport(),
        }
    }
}

/// Session errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid session: {0}")]
    Invalid(String),
}
