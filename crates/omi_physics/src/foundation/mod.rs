//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the exporter:
//! - Math types
//! - Coordinate system conversion
//! - Logging utilities

pub mod math;
pub mod coordinates;
pub mod logging;
