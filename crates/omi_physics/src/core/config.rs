//! # Exporter Configuration
//!
//! Settings that control whether and how rigid-body physics is written into
//! the exported glTF file.
//!
//! ## Configuration Categories
//!
//! - **Physics Extension Config**: the user-facing switches of the exporter
//! - **Exporter Config**: top-level settings including logging

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

/// Custom property key that marks an object as a trigger volume by default
pub const DEFAULT_TRIGGER_PROPERTY: &str = "omi_trigger";

/// # Physics Extension Configuration
///
/// Mirrors the options shown in the host's export dialog and add-on
/// preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsExtensionConfig {
    /// Include the physics extensions in the exported file
    pub enabled: bool,
    /// Write the deprecated `OMI_collider` extension instead of
    /// `OMI_physics_body` / `OMI_physics_shape` (Godot 4.2 and older)
    pub use_legacy_collider_naming: bool,
    /// Name of the custom property whose presence turns a collider into a trigger
    pub trigger_property_name: String,
}

impl PhysicsExtensionConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self {
            enabled: true,
            use_legacy_collider_naming: false,
            trigger_property_name: DEFAULT_TRIGGER_PROPERTY.to_string(),
        }
    }

    /// Enable or disable the extension
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Select the legacy `OMI_collider` schema
    pub fn with_legacy_collider_naming(mut self, legacy: bool) -> Self {
        self.use_legacy_collider_naming = legacy;
        self
    }

    /// Change the custom property used to detect triggers
    pub fn with_trigger_property_name(mut self, name: impl Into<String>) -> Self {
        self.trigger_property_name = name.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_property_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Trigger property name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PhysicsExtensionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for PhysicsExtensionConfig {}

/// # Exporter Configuration
///
/// Top-level configuration for applications driving an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Log level filter passed to the logger (`error`, `warn`, `info`, ...)
    pub log_level: String,
    /// Pretty-print the JSON output
    pub pretty_output: bool,
    /// Physics extension settings
    pub physics: PhysicsExtensionConfig,
}

impl ExporterConfig {
    /// Create a new exporter configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty_output: true,
            physics: PhysicsExtensionConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }
        self.physics.validate()
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ExporterConfig {}
