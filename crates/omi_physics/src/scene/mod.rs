//! Host scene model
//!
//! Read-only records describing the objects the host hands to the exporter:
//! rigid-body settings, bounding dimensions, mesh identity, parent linkage and
//! custom properties.

pub mod rigid_body;
pub mod object;
pub mod scene_graph;

pub use rigid_body::{CollisionShapeKind, RigidBodySettings, RigidBodyType};
pub use object::{PropertyValue, SceneObject};
pub use scene_graph::{Scene, SceneError};
