//! Physics extension builder
//!
//! Turns rigid-body settings into OMI glTF extension payloads.
//!
//! # Module Organization
//!
//! - [`schema`] - Extension names and the modern/legacy schema switch
//! - [`shape`] - Collision shape descriptors and their reuse key
//! - [`body`] - Per-node physics body payloads
//! - [`session`] - Per-export state: shape list, reuse table, both hooks

pub mod schema;
pub mod shape;
pub mod body;
pub mod session;

use thiserror::Error;

pub use schema::{
    ExtensionSchema,
    OMI_COLLIDER,
    OMI_PHYSICS_BODY,
    OMI_PHYSICS_SHAPE,
};
pub use shape::{ShapeDescriptor, ShapeGeometry, ShapeKey, ShapeSource};
pub use body::{MotionBody, MotionType, PhysicsBody, ShapeRef};
pub use session::PhysicsExportSession;

/// Errors raised while exporting a single node
///
/// A failed node gets no physics extension; other nodes are unaffected.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A mesh-based collision shape was requested for a node without a mesh
    #[error("Object {object} uses a {kind:?} collision shape but its node has no mesh")]
    MissingMesh {
        /// Object name
        object: String,
        /// Requested shape kind
        kind: crate::scene::CollisionShapeKind,
    },

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
