//! # OMI Physics
//!
//! Exports rigid-body physics from an authoring tool's scene into the
//! [OMI](https://github.com/omigroup/gltf-extensions) glTF physics extensions.
//!
//! ## Features
//!
//! - **`OMI_physics_body` / `OMI_physics_shape`**: motion bodies, colliders and triggers
//! - **Legacy `OMI_collider`**: for loaders that predate the split extensions (Godot 4.2 and older)
//! - **Shape Reuse**: objects sharing geometry and shape kind share one shape entry
//! - **Configuration**: TOML or RON settings files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use omi_physics::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scene = Scene::load("scene.toml")?;
//!     let session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
//!     let output = ExportPipeline::new().run(&scene, session);
//!     println!("{}", serde_json::to_string_pretty(&output.to_json())?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core exporter modules
pub mod core;

pub mod config;
pub mod foundation;
pub mod scene;
pub mod gltf;
pub mod physics;
pub mod export;

#[cfg(test)]
mod tests;

/// Common imports for exporter users
pub mod prelude {
    pub use crate::{
        core::config::{ExporterConfig, PhysicsExtensionConfig},
        config::{Config, ConfigError},
        export::{ExportHooks, ExportOutput, ExportPipeline},
        gltf::{ExportDocument, ExportNode, Extension, ExtensionHost},
        physics::{ExportError, ExtensionSchema, PhysicsExportSession},
        scene::{CollisionShapeKind, RigidBodySettings, RigidBodyType, Scene, SceneObject},
    };
}
