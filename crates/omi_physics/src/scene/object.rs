//! Scene objects as seen by the exporter

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rigid_body::RigidBodySettings;
use crate::foundation::math::Vec3;

/// Value of a custom property on a scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean property
    Bool(bool),
    /// Integer property
    Int(i64),
    /// Floating point property
    Float(f64),
    /// String property
    String(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An object in the host scene
///
/// Objects using the same geometry block share it in the host, which is what
/// lets the exporter reuse collision shapes between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneObject {
    /// Object name, unique within a scene
    pub name: String,
    /// Name of the geometry data block, when it differs from the object name
    pub mesh_data: Option<String>,
    /// Object carries no geometry (an empty); its node gets no mesh
    pub empty: bool,
    /// Bounding box dimensions in the host's Z-up axes
    pub dimensions: Vec3,
    /// Rigid-body settings, if the object takes part in physics
    pub rigid_body: Option<RigidBodySettings>,
    /// Name of the parent object
    pub parent: Option<String>,
    /// Arbitrary custom properties
    pub custom_properties: BTreeMap<String, PropertyValue>,
}

impl SceneObject {
    /// Create an object without physics whose geometry block shares its name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh_data: None,
            empty: false,
            dimensions: Vec3::new(2.0, 2.0, 2.0),
            rigid_body: None,
            parent: None,
            custom_properties: BTreeMap::new(),
        }
    }

    /// Set the geometry data block name
    pub fn with_mesh_data(mut self, mesh_data_name: impl Into<String>) -> Self {
        self.mesh_data = Some(mesh_data_name.into());
        self
    }

    /// Name of the geometry data block used by the object
    ///
    /// Empties have no geometry block and return `None`.
    pub fn mesh_data_name(&self) -> Option<&str> {
        if self.empty {
            None
        } else {
            Some(self.mesh_data.as_deref().unwrap_or(&self.name))
        }
    }

    /// Mark the object as an empty without geometry
    pub fn as_empty(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Set the bounding dimensions
    pub fn with_dimensions(mut self, x: f64, y: f64, z: f64) -> Self {
        self.dimensions = Vec3::new(x, y, z);
        self
    }

    /// Attach rigid-body settings
    pub fn with_rigid_body(mut self, rigid_body: RigidBodySettings) -> Self {
        self.rigid_body = Some(rigid_body);
        self
    }

    /// Set the parent object name
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Add a custom property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.custom_properties.insert(key.into(), value.into());
        self
    }

    /// Whether a custom property is present, regardless of its value
    pub fn has_property(&self, key: &str) -> bool {
        self.custom_properties.contains_key(key)
    }

    /// Toggle a flag-style custom property
    ///
    /// Removes the property if it is present and inserts `true` otherwise.
    /// Returns whether the property is present afterwards.
    pub fn toggle_custom_flag(&mut self, key: &str) -> bool {
        if self.custom_properties.remove(key).is_some() {
            false
        } else {
            self.custom_properties
                .insert(key.to_string(), PropertyValue::Bool(true));
            true
        }
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new("")
    }
}
