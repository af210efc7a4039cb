//! Collision shape descriptors
//!
//! One descriptor is written per distinct shape in the document-level shape
//! list. Nodes refer to descriptors by index.

use serde_json::{json, Value};

use super::schema::ExtensionSchema;
use super::ExportError;
use crate::foundation::coordinates::CoordinateConverter;
use crate::foundation::math::{max_component, max_planar_component, Vec3};
use crate::scene::{CollisionShapeKind, SceneObject};

/// What a shape's bounds come from
///
/// Geometry block names and object names live in separate namespaces, so an
/// empty never matches a geometry block that happens to share its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeSource {
    /// Geometry data block shared by one or more objects
    MeshData(String),
    /// Empty object without geometry, identified by its own name
    Empty(String),
}

impl ShapeSource {
    /// Source of an object's bounds
    pub fn of(object: &SceneObject) -> Self {
        object.mesh_data_name().map_or_else(
            || Self::Empty(object.name.clone()),
            |mesh_data| Self::MeshData(mesh_data.to_string()),
        )
    }
}

/// Identity of a shape within an export session
///
/// Objects sharing a geometry block and a collision shape kind resolve to the
/// same descriptor. `trigger` is only set when the schema stores trigger
/// state on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    /// Geometry block or empty the bounds come from
    pub source: ShapeSource,
    /// Collision shape kind
    pub kind: CollisionShapeKind,
    /// Trigger state, for schemas where it is part of the shape
    pub trigger: Option<bool>,
}

impl ShapeKey {
    /// Create a key
    pub fn new(source: ShapeSource, kind: CollisionShapeKind, trigger: Option<bool>) -> Self {
        Self {
            source,
            kind,
            trigger,
        }
    }

    /// Key for a geometry data block
    pub fn mesh_data(name: impl Into<String>, kind: CollisionShapeKind, trigger: Option<bool>) -> Self {
        Self::new(ShapeSource::MeshData(name.into()), kind, trigger)
    }
}

/// Geometry of a collision shape, in glTF axes
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    /// Box with full extents
    Box {
        /// Size along X, Y, Z
        size: [f64; 3],
    },
    /// Sphere
    Sphere {
        /// Radius
        radius: f64,
    },
    /// Y-aligned cylinder
    Cylinder {
        /// Full height
        height: f64,
        /// Radius
        radius: f64,
    },
    /// Y-aligned capsule
    Capsule {
        /// Full height
        height: f64,
        /// Radius
        radius: f64,
    },
    /// Triangle mesh
    Trimesh {
        /// Index of the glTF mesh
        mesh: usize,
    },
    /// Convex hull of a mesh
    Convex {
        /// Index of the glTF mesh
        mesh: usize,
    },
}

impl ShapeGeometry {
    /// Build the geometry for a shape kind from authored bounds
    ///
    /// Returns `Ok(None)` for compound shapes, which have no geometry of their
    /// own. Mesh-based kinds need the node's mesh index.
    pub fn from_bounds(
        kind: CollisionShapeKind,
        dimensions: &Vec3,
        mesh: Option<usize>,
        converter: &CoordinateConverter,
        object_name: &str,
    ) -> Result<Option<Self>, ExportError> {
        let missing_mesh = || ExportError::MissingMesh {
            object: object_name.to_string(),
            kind,
        };

        let geometry = match kind {
            CollisionShapeKind::Box => Self::Box {
                size: converter.convert_extent(dimensions),
            },
            CollisionShapeKind::Sphere => Self::Sphere {
                radius: max_component(dimensions) / 2.0,
            },
            CollisionShapeKind::Cylinder => Self::Cylinder {
                height: dimensions.z,
                radius: max_planar_component(dimensions) / 2.0,
            },
            CollisionShapeKind::Capsule => Self::Capsule {
                height: dimensions.z,
                radius: max_planar_component(dimensions) / 2.0,
            },
            CollisionShapeKind::Mesh => Self::Trimesh {
                mesh: mesh.ok_or_else(missing_mesh)?,
            },
            CollisionShapeKind::ConvexHull => Self::Convex {
                mesh: mesh.ok_or_else(missing_mesh)?,
            },
            CollisionShapeKind::Compound => return Ok(None),
        };
        Ok(Some(geometry))
    }

    /// Shape type name in the given schema
    pub fn type_name(&self, schema: ExtensionSchema) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Capsule { .. } => "capsule",
            Self::Trimesh { .. } => "trimesh",
            Self::Convex { .. } => match schema {
                ExtensionSchema::PhysicsBody => "convex",
                ExtensionSchema::LegacyCollider => "hull",
            },
        }
    }

    /// Type-specific properties, e.g. `{"radius": 0.5}`
    fn properties(&self) -> Value {
        match self {
            Self::Box { size } => json!({ "size": size }),
            Self::Sphere { radius } => json!({ "radius": radius }),
            Self::Cylinder { height, radius } | Self::Capsule { height, radius } => {
                json!({ "height": height, "radius": radius })
            }
            Self::Trimesh { mesh } | Self::Convex { mesh } => json!({ "mesh": mesh }),
        }
    }
}

/// One entry of the exported shape list
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    /// Shape geometry
    pub geometry: ShapeGeometry,
    /// Trigger flag, only written by the legacy schema
    pub is_trigger: bool,
}

impl ShapeDescriptor {
    /// Create a solid shape descriptor
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self {
            geometry,
            is_trigger: false,
        }
    }

    /// Mark the descriptor as a trigger
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Render the descriptor in the given schema
    ///
    /// `OMI_physics_shape` nests properties under the type name:
    /// `{"type": "box", "box": {"size": [...]}}`. `OMI_collider` keeps them
    /// flat and adds `isTrigger`: `{"type": "box", "size": [...]}`.
    pub fn to_json(&self, schema: ExtensionSchema) -> Value {
        let type_name = self.geometry.type_name(schema);
        let properties = self.geometry.properties();

        match schema {
            ExtensionSchema::PhysicsBody => json!({
                "type": type_name,
                (type_name): properties,
            }),
            ExtensionSchema::LegacyCollider => {
                let mut shape = properties;
                shape["type"] = json!(type_name);
                if self.is_trigger {
                    shape["isTrigger"] = json!(true);
                }
                shape
            }
        }
    }
}
