//! Rigid-body settings as authored in the host application

use serde::{Deserialize, Serialize};

/// Whether the body is simulated or only collides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RigidBodyType {
    /// Moved by the simulation
    Active,
    /// Static collider, never moved by the simulation
    Passive,
}

/// Collision shape selected for a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollisionShapeKind {
    /// Axis-aligned box from the object's bounds
    Box,
    /// Sphere enclosing the object's bounds
    Sphere,
    /// Z-aligned cylinder
    Cylinder,
    /// Z-aligned capsule
    Capsule,
    /// Triangle mesh of the object's geometry
    Mesh,
    /// Convex hull of the object's geometry
    ConvexHull,
    /// Shape defined by the children of the object
    Compound,
}

impl CollisionShapeKind {
    /// All shape kinds in declaration order
    pub const ALL: [Self; 7] = [
        Self::Box,
        Self::Sphere,
        Self::Cylinder,
        Self::Capsule,
        Self::Mesh,
        Self::ConvexHull,
        Self::Compound,
    ];
}

/// Rigid-body settings attached to a scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidBodySettings {
    /// Body type
    #[serde(rename = "type")]
    pub body_type: RigidBodyType,
    /// Mass in kilograms
    pub mass: f64,
    /// Animated by the host instead of the simulation
    pub kinematic: bool,
    /// Simulation enabled for this body
    pub enabled: bool,
    /// Collision shape
    pub collision_shape: CollisionShapeKind,
}

impl RigidBodySettings {
    /// Active body with the host's defaults (1 kg, convex hull, simulated)
    pub fn active() -> Self {
        Self {
            body_type: RigidBodyType::Active,
            mass: 1.0,
            kinematic: false,
            enabled: true,
            collision_shape: CollisionShapeKind::ConvexHull,
        }
    }

    /// Passive body with the given collision shape
    pub fn passive(collision_shape: CollisionShapeKind) -> Self {
        Self {
            body_type: RigidBodyType::Passive,
            collision_shape,
            ..Self::active()
        }
    }

    /// Set mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set kinematic flag
    pub fn with_kinematic(mut self, kinematic: bool) -> Self {
        self.kinematic = kinematic;
        self
    }

    /// Enable or disable simulation
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set collision shape
    pub fn with_collision_shape(mut self, shape: CollisionShapeKind) -> Self {
        self.collision_shape = shape;
        self
    }

    /// Whether the body is moved by the simulation
    pub fn is_active(&self) -> bool {
        self.body_type == RigidBodyType::Active
    }
}

impl Default for RigidBodySettings {
    fn default() -> Self {
        Self::active()
    }
}
