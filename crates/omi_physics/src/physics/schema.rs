//! Extension names and schema selection

use crate::core::PhysicsExtensionConfig;

/// Node-level physics body extension
pub const OMI_PHYSICS_BODY: &str = "OMI_physics_body";

/// Document-level shape list extension
pub const OMI_PHYSICS_SHAPE: &str = "OMI_physics_shape";

/// Deprecated combined collider extension
pub const OMI_COLLIDER: &str = "OMI_collider";

/// Which OMI extension layout to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionSchema {
    /// `OMI_physics_body` on nodes, `OMI_physics_shape` on the document
    PhysicsBody,
    /// `OMI_collider` on nodes and the document
    LegacyCollider,
}

impl ExtensionSchema {
    /// Schema selected by a configuration
    pub fn from_config(config: &PhysicsExtensionConfig) -> Self {
        if config.use_legacy_collider_naming {
            Self::LegacyCollider
        } else {
            Self::PhysicsBody
        }
    }

    /// Document extension name and the field holding the shape list
    pub fn document_extension(self) -> (&'static str, &'static str) {
        match self {
            Self::PhysicsBody => (OMI_PHYSICS_SHAPE, "shapes"),
            Self::LegacyCollider => (OMI_COLLIDER, "colliders"),
        }
    }

    /// Whether trigger state is part of a shape's identity
    ///
    /// Legacy colliders store `isTrigger` on the shape itself, so a trigger
    /// and a solid usage of the same geometry need separate entries.
    pub fn trigger_on_shape(self) -> bool {
        self == Self::LegacyCollider
    }
}
