//! Export session state and the two export hooks
//!
//! A session lives for exactly one export. The host calls
//! [`PhysicsExportSession::process_node`] once per exported object, in its own
//! traversal order, then [`PhysicsExportSession::finalize`] once. Finalizing
//! consumes the session, so no node can be processed after the shape list has
//! been written.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use super::body::{MotionBody, PhysicsBody, ShapeRef};
use super::schema::{ExtensionSchema, OMI_COLLIDER, OMI_PHYSICS_BODY};
use super::shape::{ShapeDescriptor, ShapeGeometry, ShapeKey, ShapeSource};
use super::ExportError;
use crate::core::PhysicsExtensionConfig;
use crate::export::ExportHooks;
use crate::foundation::coordinates::CoordinateConverter;
use crate::gltf::{ExportDocument, ExportNode, Extension, ExtensionHost};
use crate::scene::{CollisionShapeKind, RigidBodySettings, SceneObject};

/// Per-export physics state
#[derive(Debug)]
pub struct PhysicsExportSession {
    config: PhysicsExtensionConfig,
    schema: ExtensionSchema,
    converter: CoordinateConverter,
    /// Shape list written to the document, in creation order
    shapes: Vec<ShapeDescriptor>,
    /// Shape identity -> index in `shapes`
    reuse_table: HashMap<ShapeKey, usize>,
}

impl PhysicsExportSession {
    /// Start a new export session
    pub fn new(config: PhysicsExtensionConfig) -> Self {
        let schema = ExtensionSchema::from_config(&config);
        log::debug!(
            "Starting physics export session (enabled: {}, schema: {:?})",
            config.enabled,
            schema
        );
        Self {
            config,
            schema,
            converter: CoordinateConverter::default(),
            shapes: Vec::new(),
            reuse_table: HashMap::new(),
        }
    }

    /// Schema the session writes
    pub fn schema(&self) -> ExtensionSchema {
        self.schema
    }

    /// Shapes collected so far
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// Index already assigned to a shape identity
    pub fn shape_index(&self, key: &ShapeKey) -> Option<usize> {
        self.reuse_table.get(key).copied()
    }

    /// Attach physics data for one exported object to its node
    ///
    /// Objects without rigid-body settings are skipped, as is everything when
    /// the extension is disabled. On error nothing is written to the node and
    /// the shape list is unchanged.
    pub fn process_node(
        &mut self,
        node: &mut ExportNode,
        object: &SceneObject,
        parent: Option<&SceneObject>,
    ) -> Result<(), ExportError> {
        if !self.config.enabled {
            return Ok(());
        }
        let Some(rigid_body) = object.rigid_body.as_ref() else {
            log::trace!("Skipping {}: no rigid body", object.name);
            return Ok(());
        };

        match self.schema {
            ExtensionSchema::PhysicsBody => self.build_physics_body(node, object, rigid_body, parent),
            ExtensionSchema::LegacyCollider => self.build_legacy_collider(node, object, rigid_body),
        }
    }

    /// Attach the collected shape list to the document and end the session
    pub fn finalize(self, document: &mut ExportDocument) {
        if !self.config.enabled {
            return;
        }
        if self.shapes.is_empty() {
            log::debug!("No collision shapes collected, skipping document extension");
            return;
        }

        let (extension_name, field) = self.schema.document_extension();
        let shapes: Vec<Value> = self
            .shapes
            .iter()
            .map(|shape| shape.to_json(self.schema))
            .collect();

        let mut payload = Map::new();
        payload.insert(field.to_string(), Value::Array(shapes));
        document.attach_extension(Extension::new(extension_name, Value::Object(payload)));

        log::info!(
            "Wrote {} collision shapes to {}",
            self.shapes.len(),
            extension_name
        );
    }

    fn build_physics_body(
        &mut self,
        node: &mut ExportNode,
        object: &SceneObject,
        rigid_body: &RigidBodySettings,
        parent: Option<&SceneObject>,
    ) -> Result<(), ExportError> {
        let parent_is_compound = parent
            .and_then(|parent| parent.rigid_body.as_ref())
            .is_some_and(|body| body.collision_shape == CollisionShapeKind::Compound);

        let body = if rigid_body.is_active() && !parent_is_compound {
            PhysicsBody::Motion(MotionBody::from_settings(rigid_body))
        } else {
            let is_trigger = self.is_trigger(object);
            let shape = self.resolve_shape(object, rigid_body.collision_shape, node.mesh, is_trigger)?;
            PhysicsBody::with_shape(shape, is_trigger)
        };

        log::debug!("{}: {} body", object.name, body.kind_name());
        node.attach_extension(Extension::new(OMI_PHYSICS_BODY, body.to_json()?));
        Ok(())
    }

    /// `OMI_collider` has no notion of motion; every rigid body becomes a collider.
    fn build_legacy_collider(
        &mut self,
        node: &mut ExportNode,
        object: &SceneObject,
        rigid_body: &RigidBodySettings,
    ) -> Result<(), ExportError> {
        let is_trigger = self.is_trigger(object);
        let shape = self.resolve_shape(object, rigid_body.collision_shape, node.mesh, is_trigger)?;

        // Compound bodies have no legacy collider entry; they get an empty
        // physics body collider instead
        let extension = match shape {
            ShapeRef::Compound => Extension::new(OMI_PHYSICS_BODY, json!({ "collider": {} })),
            ShapeRef::Index(index) => Extension::new(OMI_COLLIDER, json!({ "collider": index })),
        };
        node.attach_extension(extension);
        Ok(())
    }

    fn is_trigger(&self, object: &SceneObject) -> bool {
        object.has_property(&self.config.trigger_property_name)
    }

    /// Find or create the shape descriptor for an object
    ///
    /// Compound shapes have no geometry, so they never enter the shape list
    /// or the reuse table.
    fn resolve_shape(
        &mut self,
        object: &SceneObject,
        kind: CollisionShapeKind,
        mesh: Option<usize>,
        is_trigger: bool,
    ) -> Result<ShapeRef, ExportError> {
        let trigger_on_shape = self.schema.trigger_on_shape();
        let key = ShapeKey::new(
            ShapeSource::of(object),
            kind,
            trigger_on_shape.then_some(is_trigger),
        );
        if let Some(index) = self.shape_index(&key) {
            log::debug!("{}: reusing shape {} for {:?}", object.name, index, key);
            return Ok(ShapeRef::Index(index));
        }

        let Some(geometry) =
            ShapeGeometry::from_bounds(kind, &object.dimensions, mesh, &self.converter, &object.name)?
        else {
            return Ok(ShapeRef::Compound);
        };

        let mut descriptor = ShapeDescriptor::new(geometry);
        if trigger_on_shape && is_trigger {
            descriptor = descriptor.as_trigger();
        }

        let index = self.shapes.len();
        self.shapes.push(descriptor);
        self.reuse_table.insert(key, index);
        log::debug!("{}: created shape {} ({:?})", object.name, index, kind);
        Ok(ShapeRef::Index(index))
    }
}

impl ExportHooks for PhysicsExportSession {
    fn gather_node(
        &mut self,
        node: &mut ExportNode,
        object: &SceneObject,
        parent: Option<&SceneObject>,
    ) -> Result<(), ExportError> {
        self.process_node(node, object, parent)
    }

    fn gather_document(self, document: &mut ExportDocument) {
        self.finalize(document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passive(name: &str, kind: CollisionShapeKind) -> SceneObject {
        SceneObject::new(name)
            .with_dimensions(1.0, 2.0, 3.0)
            .with_rigid_body(RigidBodySettings::passive(kind))
    }

    #[test]
    fn test_disabled_session_writes_nothing() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::new().with_enabled(false));
        let mut node = ExportNode::new("Cube");
        session
            .process_node(&mut node, &passive("Cube", CollisionShapeKind::Box), None)
            .unwrap();
        assert!(node.extensions.is_empty());
        assert!(session.shapes().is_empty());

        let mut document = ExportDocument::new();
        session.finalize(&mut document);
        assert!(document.extensions.is_empty());
    }

    #[test]
    fn test_object_without_rigid_body_is_skipped() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
        let mut node = ExportNode::new("Lamp");
        session
            .process_node(&mut node, &SceneObject::new("Lamp"), None)
            .unwrap();
        assert!(node.extensions.is_empty());
    }

    #[test]
    fn test_reuse_table_tracks_shape_identity() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
        let a = passive("A", CollisionShapeKind::Sphere).with_mesh_data("Ball");
        let b = passive("B", CollisionShapeKind::Sphere).with_mesh_data("Ball");
        let c = passive("C", CollisionShapeKind::Box).with_mesh_data("Ball");

        for object in [&a, &b, &c] {
            let mut node = ExportNode::new(object.name.clone());
            session.process_node(&mut node, object, None).unwrap();
        }

        assert_eq!(session.shapes().len(), 2);
        assert_eq!(
            session.shape_index(&ShapeKey::mesh_data("Ball", CollisionShapeKind::Sphere, None)),
            Some(0)
        );
        assert_eq!(
            session.shape_index(&ShapeKey::mesh_data("Ball", CollisionShapeKind::Box, None)),
            Some(1)
        );
    }

    #[test]
    fn test_missing_mesh_leaves_node_untouched() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
        let mut node = ExportNode::new("Rock");
        let result = session.process_node(&mut node, &passive("Rock", CollisionShapeKind::Mesh), None);

        assert!(matches!(result, Err(ExportError::MissingMesh { .. })));
        assert!(node.extensions.is_empty());
        assert!(session.shapes().is_empty());
    }

    #[test]
    fn test_compound_parent_turns_active_child_into_collider() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
        let cart = SceneObject::new("Cart").with_rigid_body(
            RigidBodySettings::active().with_collision_shape(CollisionShapeKind::Compound),
        );
        let wheel = SceneObject::new("Wheel")
            .with_parent("Cart")
            .with_rigid_body(RigidBodySettings::active().with_collision_shape(CollisionShapeKind::Cylinder));

        let mut cart_node = ExportNode::new("Cart");
        session.process_node(&mut cart_node, &cart, None).unwrap();
        let mut wheel_node = ExportNode::new("Wheel");
        session.process_node(&mut wheel_node, &wheel, Some(&cart)).unwrap();

        assert_eq!(
            cart_node.extensions.value(OMI_PHYSICS_BODY),
            Some(&json!({"motion": {"type": "dynamic", "mass": 1.0}}))
        );
        assert_eq!(
            wheel_node.extensions.value(OMI_PHYSICS_BODY),
            Some(&json!({"collider": {"shape": 0}}))
        );
    }

    #[test]
    fn test_compound_stays_out_of_reuse_table() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
        let cart = passive("Cart", CollisionShapeKind::Compound);
        for _ in 0..2 {
            let mut node = ExportNode::new("Cart");
            session.process_node(&mut node, &cart, None).unwrap();
            assert_eq!(
                node.extensions.value(OMI_PHYSICS_BODY),
                Some(&json!({"collider": {"shape": {}}}))
            );
        }

        assert!(session.shapes().is_empty());
        assert_eq!(
            session.shape_index(&ShapeKey::mesh_data("Cart", CollisionShapeKind::Compound, None)),
            None
        );
    }

    #[test]
    fn test_empty_shape_list_skips_document() {
        let mut session = PhysicsExportSession::new(PhysicsExtensionConfig::default());
        let mut node = ExportNode::new("Ball");
        let ball = SceneObject::new("Ball").with_rigid_body(RigidBodySettings::active());
        session.process_node(&mut node, &ball, None).unwrap();

        let mut document = ExportDocument::new();
        session.finalize(&mut document);
        assert!(document.extensions.is_empty());
    }

    #[test]
    fn test_legacy_trigger_state_splits_shapes() {
        let config = PhysicsExtensionConfig::new().with_legacy_collider_naming(true);
        let mut session = PhysicsExportSession::new(config);

        let solid = passive("Solid", CollisionShapeKind::Box).with_mesh_data("Block");
        let sensor = passive("Sensor", CollisionShapeKind::Box)
            .with_mesh_data("Block")
            .with_property("omi_trigger", true);
        let solid_again = passive("SolidAgain", CollisionShapeKind::Box).with_mesh_data("Block");

        let mut indices = Vec::new();
        for object in [&solid, &sensor, &solid_again] {
            let mut node = ExportNode::new(object.name.clone());
            session.process_node(&mut node, object, None).unwrap();
            indices.push(node.extensions.value(OMI_COLLIDER).cloned());
        }

        assert_eq!(
            indices,
            vec![
                Some(json!({"collider": 0})),
                Some(json!({"collider": 1})),
                Some(json!({"collider": 0})),
            ]
        );
        assert!(!session.shapes()[0].is_trigger);
        assert!(session.shapes()[1].is_trigger);
    }
}
