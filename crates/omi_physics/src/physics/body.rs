//! Per-node physics body payloads

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::scene::RigidBodySettings;

/// How a motion body is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    /// Simulated
    Dynamic,
    /// Moved by animation, pushes dynamic bodies
    Kinematic,
    /// Never moves
    Static,
}

impl MotionType {
    /// Motion type for rigid-body settings
    ///
    /// A body with simulation disabled is static whatever its kinematic flag.
    pub fn from_settings(settings: &RigidBodySettings) -> Self {
        if !settings.enabled {
            Self::Static
        } else if settings.kinematic {
            Self::Kinematic
        } else {
            Self::Dynamic
        }
    }
}

/// `motion` payload of `OMI_physics_body`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionBody {
    /// Motion type
    #[serde(rename = "type")]
    pub motion_type: MotionType,
    /// Mass in kilograms
    pub mass: f64,
}

impl MotionBody {
    /// Build from rigid-body settings
    pub fn from_settings(settings: &RigidBodySettings) -> Self {
        Self {
            motion_type: MotionType::from_settings(settings),
            mass: settings.mass,
        }
    }
}

/// Reference from a node to its collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRef {
    /// Index into the document shape list
    Index(usize),
    /// Shape is made up of the node's children
    Compound,
}

impl ShapeRef {
    /// Render as the value of a `shape` field
    pub fn to_json(self) -> Value {
        match self {
            Self::Index(index) => json!(index),
            Self::Compound => json!({}),
        }
    }
}

/// Value of a node's `OMI_physics_body` extension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsBody {
    /// Body moved by the simulation
    Motion(MotionBody),
    /// Solid collider
    Collider(ShapeRef),
    /// Trigger volume
    Trigger(ShapeRef),
}

impl PhysicsBody {
    /// Collider or trigger referencing a shape
    pub fn with_shape(shape: ShapeRef, is_trigger: bool) -> Self {
        if is_trigger {
            Self::Trigger(shape)
        } else {
            Self::Collider(shape)
        }
    }

    /// Key of the payload inside the extension object
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Motion(_) => "motion",
            Self::Collider(_) => "collider",
            Self::Trigger(_) => "trigger",
        }
    }

    /// Render the extension object, e.g. `{"collider": {"shape": 0}}`
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let payload = match self {
            Self::Motion(motion) => serde_json::to_value(motion)?,
            Self::Collider(shape) | Self::Trigger(shape) => json!({ "shape": shape.to_json() }),
        };
        Ok(json!({ (self.kind_name()): payload }))
    }
}
