//! # Core Exporter Module
//!
//! Shared configuration types used by the export session and by applications
//! embedding the exporter.
//!
//! ## Organization
//!
//! - **Config**: Exporter and physics extension settings

pub mod config;

// Re-export commonly used config types
pub use config::{
    ExporterConfig,
    PhysicsExtensionConfig,
    DEFAULT_TRIGGER_PROPERTY,
};
pub use crate::config::{Config, ConfigError};
