//! Arcball configuration
//!
//! Radius limits, constraint behaviour and key bindings for the
//! controller. Configurations are stored as RON and every field has a
//! default, so partial files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RADIUS, MAX_RADIUS, MIN_RADIUS, RADIUS_STEP};
use crate::input::{Button, Key};

/// Input bindings used by the controller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyBindings {
    /// Button that drags the ball
    pub drag_button: Button,
    /// Key that grows the ball radius
    pub grow_radius: Key,
    /// Key that shrinks the ball radius
    pub shrink_radius: Key,
    /// Key that restores the initial orientation
    pub reset: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            drag_button: Button::Left,
            grow_radius: Key::Plus,
            shrink_radius: Key::Minus,
            reset: Key::R,
        }
    }
}

/// Complete arcball configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcballConfig {
    /// Initial ball radius in normalized viewport units
    pub radius: f32,
    /// Lower radius bound
    pub min_radius: f32,
    /// Upper radius bound
    pub max_radius: f32,
    /// Radius change per grow/shrink press
    pub radius_step: f32,
    /// Whether modifier keys may select constraint axes
    pub allow_constraints: bool,
    /// Input bindings
    pub bindings: KeyBindings,
}

impl Default for ArcballConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            radius_step: RADIUS_STEP,
            allow_constraints: false,
            bindings: KeyBindings::default(),
        }
    }
}

impl ArcballConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a radius into the configured bounds.
    ///
    /// Never panics: with crossed bounds `max_radius` wins, and a NaN bound
    /// is ignored.
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.max(self.min_radius).min(self.max_radius)
    }

    /// Check that the radius bounds describe a usable ball
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_radius > 0.0 && self.max_radius <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "radius bounds [{}, {}] must lie within (0, 1]",
                self.min_radius, self.max_radius
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::Invalid(format!(
                "min_radius {} is larger than max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if !(self.radius_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "radius_step {} must be positive",
                self.radius_step
            )));
        }
        if !self.radius.is_finite() {
            return Err(ConfigError::Invalid("radius must be finite".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: ArcballConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected arcball config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Serialize the configuration to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded arcball config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
