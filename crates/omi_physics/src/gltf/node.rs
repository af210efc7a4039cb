//! Export node and document handles

use serde_json::{json, Value};

use super::extensions::{ExtensionHost, ExtensionTable};

/// A node being written to the glTF file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportNode {
    /// Node name
    pub name: String,
    /// Index of the node's mesh in the document, if it has one
    pub mesh: Option<usize>,
    /// Extensions attached to the node
    pub extensions: ExtensionTable,
}

impl ExportNode {
    /// Create a node without a mesh
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            extensions: ExtensionTable::new(),
        }
    }

    /// Set the mesh index
    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Render the node as JSON, omitting empty fields
    pub fn to_json(&self) -> Value {
        let mut node = json!({ "name": self.name });
        if let Some(mesh) = self.mesh {
            node["mesh"] = json!(mesh);
        }
        if !self.extensions.is_empty() {
            node["extensions"] = self.extensions.to_json();
        }
        node
    }
}

impl ExtensionHost for ExportNode {
    fn extensions(&self) -> &ExtensionTable {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut ExtensionTable {
        &mut self.extensions
    }
}

/// The root glTF document being written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportDocument {
    /// Document-level extensions
    pub extensions: ExtensionTable,
}

impl ExportDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExtensionHost for ExportDocument {
    fn extensions(&self) -> &ExtensionTable {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut ExtensionTable {
        &mut self.extensions
    }
}
