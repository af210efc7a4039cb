//! Scene-to-extension scenarios for the `OMI_physics_body` schema

use serde_json::{json, Value};

use crate::core::PhysicsExtensionConfig;
use crate::export::{ExportOutput, ExportPipeline};
use crate::physics::{ExportError, PhysicsExportSession, OMI_PHYSICS_BODY, OMI_PHYSICS_SHAPE};
use crate::scene::{CollisionShapeKind, RigidBodySettings, Scene, SceneObject};

#[cfg(test)]
mod tests {
    use super::*;

    fn export(scene: &Scene, config: PhysicsExtensionConfig) -> ExportOutput {
        ExportPipeline::new().run(scene, PhysicsExportSession::new(config))
    }

    fn body_of<'a>(output: &'a ExportOutput, name: &str) -> Option<&'a Value> {
        output.node(name)?.extensions.value(OMI_PHYSICS_BODY)
    }

    fn shapes_of(output: &ExportOutput) -> Option<&Value> {
        output.document.extensions.value(OMI_PHYSICS_SHAPE).map(|ext| &ext["shapes"])
    }

    fn passive_box() -> SceneObject {
        SceneObject::new("Crate")
            .with_dimensions(1.0, 2.0, 3.0)
            .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Box))
    }

    #[test]
    fn test_passive_box_collider() {
        let scene = Scene::new().with_object(passive_box());
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(body_of(&output, "Crate"), Some(&json!({"collider": {"shape": 0}})));
        assert_eq!(
            shapes_of(&output),
            Some(&json!([{"type": "box", "box": {"size": [1.0, 3.0, 2.0]}}]))
        );
        assert!(output.failures.is_empty());
    }

    #[test]
    fn test_trigger_property_switches_body_type() {
        let scene = Scene::new().with_object(passive_box().with_property("omi_trigger", true));
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(body_of(&output, "Crate"), Some(&json!({"trigger": {"shape": 0}})));
        assert_eq!(shapes_of(&output).and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn test_custom_trigger_property_name() {
        let scene = Scene::new()
            .with_object(passive_box().with_property("sensor", true))
            .with_object(
                SceneObject::new("Other")
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Sphere))
                    .with_property("omi_trigger", true),
            );
        let config = PhysicsExtensionConfig::new().with_trigger_property_name("sensor");
        let output = export(&scene, config);

        assert_eq!(body_of(&output, "Crate"), Some(&json!({"trigger": {"shape": 0}})));
        assert_eq!(body_of(&output, "Other"), Some(&json!({"collider": {"shape": 1}})));
    }

    #[test]
    fn test_active_body_motion() {
        let scene = Scene::new().with_object(
            SceneObject::new("Ball").with_rigid_body(RigidBodySettings::active().with_mass(5.0)),
        );
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(
            body_of(&output, "Ball"),
            Some(&json!({"motion": {"type": "dynamic", "mass": 5.0}}))
        );
        assert!(shapes_of(&output).is_none());
    }

    #[test]
    fn test_motion_types() {
        let scene = Scene::new()
            .with_object(
                SceneObject::new("Kinematic")
                    .with_rigid_body(RigidBodySettings::active().with_kinematic(true)),
            )
            .with_object(
                SceneObject::new("Disabled")
                    .with_rigid_body(RigidBodySettings::active().with_enabled(false)),
            )
            .with_object(
                SceneObject::new("DisabledKinematic").with_rigid_body(
                    RigidBodySettings::active().with_enabled(false).with_kinematic(true),
                ),
            );
        let output = export(&scene, PhysicsExtensionConfig::default());

        let motion_type = |name: &str| body_of(&output, name).map(|body| body["motion"]["type"].clone());
        assert_eq!(motion_type("Kinematic"), Some(json!("kinematic")));
        assert_eq!(motion_type("Disabled"), Some(json!("static")));
        assert_eq!(motion_type("DisabledKinematic"), Some(json!("static")));
    }

    #[test]
    fn test_shared_sphere_mesh_is_deduplicated() {
        let sphere = RigidBodySettings::passive(CollisionShapeKind::Sphere);
        let scene = Scene::new()
            .with_object(
                SceneObject::new("BallA")
                    .with_mesh_data("Ball")
                    .with_dimensions(1.0, 1.0, 1.0)
                    .with_rigid_body(sphere.clone()),
            )
            .with_object(
                SceneObject::new("BallB")
                    .with_mesh_data("Ball")
                    .with_dimensions(1.0, 1.0, 1.0)
                    .with_rigid_body(sphere),
            );
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(body_of(&output, "BallA"), Some(&json!({"collider": {"shape": 0}})));
        assert_eq!(body_of(&output, "BallB"), Some(&json!({"collider": {"shape": 0}})));
        assert_eq!(
            shapes_of(&output),
            Some(&json!([{"type": "sphere", "sphere": {"radius": 0.5}}]))
        );
    }

    #[test]
    fn test_trigger_and_collider_share_shape() {
        let scene = Scene::new()
            .with_object(passive_box().with_mesh_data("Block"))
            .with_object(
                SceneObject::new("Zone")
                    .with_mesh_data("Block")
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Box))
                    .with_property("omi_trigger", true),
            );
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(body_of(&output, "Crate"), Some(&json!({"collider": {"shape": 0}})));
        assert_eq!(body_of(&output, "Zone"), Some(&json!({"trigger": {"shape": 0}})));
        assert_eq!(shapes_of(&output).and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn test_compound_collider_has_empty_shape() {
        let scene = Scene::new().with_object(
            SceneObject::new("Cart")
                .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Compound)),
        );
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(body_of(&output, "Cart"), Some(&json!({"collider": {"shape": {}}})));
        assert!(shapes_of(&output).is_none());
    }

    #[test]
    fn test_mesh_shapes_reference_node_meshes() {
        let scene = Scene::new()
            .with_object(
                SceneObject::new("Terrain")
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Mesh)),
            )
            .with_object(
                SceneObject::new("Rock")
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::ConvexHull)),
            );
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(
            shapes_of(&output),
            Some(&json!([
                {"type": "trimesh", "trimesh": {"mesh": 0}},
                {"type": "convex", "convex": {"mesh": 1}}
            ]))
        );
        assert_eq!(body_of(&output, "Rock"), Some(&json!({"collider": {"shape": 1}})));
    }

    #[test]
    fn test_mesh_shape_on_empty_is_reported() {
        let scene = Scene::new()
            .with_object(
                SceneObject::new("Marker")
                    .as_empty()
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Mesh)),
            )
            .with_object(passive_box());
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].node, "Marker");
        assert!(matches!(output.failures[0].error, ExportError::MissingMesh { .. }));
        assert!(body_of(&output, "Marker").is_none());
        // The failure does not consume an index
        assert_eq!(body_of(&output, "Crate"), Some(&json!({"collider": {"shape": 0}})));
    }

    #[test]
    fn test_empty_does_not_reuse_geometry_block_with_its_name() {
        let scene = Scene::new()
            .with_object(
                SceneObject::new("Crate")
                    .with_mesh_data("Marker")
                    .with_dimensions(1.0, 1.0, 1.0)
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Box)),
            )
            .with_object(
                SceneObject::new("Marker")
                    .as_empty()
                    .with_dimensions(5.0, 5.0, 5.0)
                    .with_rigid_body(RigidBodySettings::passive(CollisionShapeKind::Box)),
            );
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(body_of(&output, "Crate"), Some(&json!({"collider": {"shape": 0}})));
        assert_eq!(body_of(&output, "Marker"), Some(&json!({"collider": {"shape": 1}})));
        assert_eq!(
            shapes_of(&output),
            Some(&json!([
                {"type": "box", "box": {"size": [1.0, 1.0, 1.0]}},
                {"type": "box", "box": {"size": [5.0, 5.0, 5.0]}}
            ]))
        );
    }

    #[test]
    fn test_disabled_config_writes_nothing() {
        let scene = Scene::new()
            .with_object(passive_box())
            .with_object(SceneObject::new("Ball").with_rigid_body(RigidBodySettings::active()));
        let output = export(&scene, PhysicsExtensionConfig::new().with_enabled(false));

        assert!(output.nodes.iter().all(|node| node.extensions.is_empty()));
        assert!(output.document.extensions.is_empty());
        assert!(output.to_json().get("extensionsUsed").is_none());
    }

    #[test]
    fn test_full_document_json() {
        let scene = Scene::new()
            .with_object(passive_box())
            .with_object(SceneObject::new("Lamp").as_empty());
        let output = export(&scene, PhysicsExtensionConfig::default());

        assert_eq!(
            output.to_json(),
            json!({
                "extensionsUsed": ["OMI_physics_body", "OMI_physics_shape"],
                "nodes": [
                    {
                        "name": "Crate",
                        "mesh": 0,
                        "extensions": {"OMI_physics_body": {"collider": {"shape": 0}}}
                    },
                    {"name": "Lamp"}
                ],
                "extensions": {
                    "OMI_physics_shape": {
                        "shapes": [{"type": "box", "box": {"size": [1.0, 3.0, 2.0]}}]
                    }
                }
            })
        );
    }
}
