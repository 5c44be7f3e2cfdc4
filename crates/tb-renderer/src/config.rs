//! Helper configuration
//!
//! Visibility, tessellation and colors of the arcball helpers. Stored as
//! RON alongside the controller configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{arc, colors, opacity};

/// Arcball helper configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HelperConfig {
    /// Draw the arc of the drag in progress
    pub show_drag: bool,
    /// Draw the ball rim
    pub show_rim: bool,
    /// Draw the result arc
    pub show_result: bool,
    /// Draw constraint rings
    pub show_constraints: bool,
    /// Bisections per arc; arcs have `2^arc_bisections + 1` points
    pub arc_bisections: u32,
    /// Points on the rim and face-on constraint rings
    pub circle_segments: u32,
    /// Unconstrained drag arc color (RGB)
    pub drag_color: [f32; 3],
    /// Result arc color (RGB)
    pub result_color: [f32; 3],
    /// Rim color (RGB)
    pub rim_color: [f32; 3],
    /// Rim opacity
    pub rim_opacity: f32,
    /// Opacity of constraint rings other than the nearest
    pub dimmed_opacity: f32,
    /// Colors of the three constraint axes (RGB)
    pub axis_colors: [[f32; 3]; 3],
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            show_drag: true,
            show_rim: true,
            show_result: true,
            show_constraints: true,
            arc_bisections: arc::BISECTIONS,
            circle_segments: arc::CIRCLE_SEGMENTS,
            drag_color: colors::DRAG,
            result_color: colors::RESULT,
            rim_color: colors::RIM,
            rim_opacity: opacity::RIM,
            dimmed_opacity: opacity::DIMMED,
            axis_colors: colors::AXES,
        }
    }
}

impl HelperConfig {
    /// Create a new helper configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of the constraint axis at `index`
    pub fn axis_color(&self, index: usize) -> [f32; 3] {
        self.axis_colors
            .get(index)
            .copied()
            .unwrap_or(colors::OTHER_AXIS)
    }

    /// Check tessellation and opacity settings
    pub fn validate(&self) -> Result<(), HelperConfigError> {
        if self.arc_bisections == 0 || self.arc_bisections > arc::MAX_BISECTIONS {
            return Err(HelperConfigError::Invalid(format!(
                "arc_bisections {} must be between 1 and {}",
                self.arc_bisections,
                arc::MAX_BISECTIONS
            )));
        }
        if self.circle_segments < 3 {
            return Err(HelperConfigError::Invalid(format!(
                "circle_segments {} must be at least 3",
                self.circle_segments
            )));
        }
        for (name, value) in [
            ("rim_opacity", self.rim_opacity),
            ("dimmed_opacity", self.dimmed_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(HelperConfigError::Invalid(format!(
                    "{name} {value} must be within [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, HelperConfigError> {
        let config: HelperConfig =
            ron::from_str(content).map_err(|e| HelperConfigError::Deserialize(e.to_string()))?;
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected helper config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Serialize the configuration to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, HelperConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| HelperConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HelperConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| HelperConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded helper config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HelperConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| HelperConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Helper configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum HelperConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(String),
    /// The configuration could not be written as RON
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// The file is not a valid RON configuration
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
