//! Ordered collection of scene objects with parent lookup

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::object::SceneObject;
use crate::config::{Config, ConfigError};

/// Scene loading and validation errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be read or parsed
    #[error("Failed to load scene: {0}")]
    Load(#[from] ConfigError),

    /// Two objects share a name
    #[error("Duplicate object name: {0}")]
    DuplicateName(String),

    /// An object names a parent that does not exist
    #[error("Object {object} references missing parent {parent}")]
    MissingParent {
        /// Child object name
        object: String,
        /// Referenced parent name
        parent: String,
    },
}

/// A scene as handed to the exporter
///
/// Object order is the host's traversal order and is preserved through
/// the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Objects in traversal order
    pub objects: Vec<SceneObject>,
}

impl Config for Scene {}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Load and validate a scene description (`.toml` or `.ron`)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let scene = Self::load_from_file(path)?;
        scene.validate()?;
        log::debug!("Loaded scene with {} objects", scene.objects.len());
        Ok(scene)
    }

    /// Check name uniqueness and parent references
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut names = HashSet::new();
        for object in &self.objects {
            if !names.insert(object.name.as_str()) {
                return Err(SceneError::DuplicateName(object.name.clone()));
            }
        }

        for object in &self.objects {
            if let Some(parent) = &object.parent {
                if !names.contains(parent.as_str()) {
                    return Err(SceneError::MissingParent {
                        object: object.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Find an object by name
    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Parent of an object, if it has one in this scene
    pub fn parent_of(&self, object: &SceneObject) -> Option<&SceneObject> {
        object.parent.as_deref().and_then(|parent| self.get(parent))
    }

    /// Number of objects carrying rigid-body settings
    pub fn rigid_body_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|object| object.rigid_body.is_some())
            .count()
    }
}
