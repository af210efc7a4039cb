//! Drives export hooks over a scene

use std::collections::{BTreeSet, HashMap};

use serde_json::{json, Value};

use super::hooks::ExportHooks;
use crate::gltf::{ExportDocument, ExportNode, ExtensionHost};
use crate::physics::ExportError;
use crate::scene::Scene;

/// A node whose hook failed
#[derive(Debug)]
pub struct NodeFailure {
    /// Node name
    pub node: String,
    /// What went wrong
    pub error: ExportError,
}

/// Result of running the pipeline
#[derive(Debug, Default)]
pub struct ExportOutput {
    /// One node per scene object, in scene order
    pub nodes: Vec<ExportNode>,
    /// Root document
    pub document: ExportDocument,
    /// Nodes the hooks could not handle
    pub failures: Vec<NodeFailure>,
}

impl ExportOutput {
    /// Node by name
    pub fn node(&self, name: &str) -> Option<&ExportNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Names of all extensions used anywhere, sorted
    pub fn extensions_used(&self) -> BTreeSet<String> {
        self.extensions_matching(|_| true)
    }

    /// Names of extensions marked required, sorted
    pub fn extensions_required(&self) -> BTreeSet<String> {
        self.extensions_matching(|required| required)
    }

    fn extensions_matching(&self, filter: impl Fn(bool) -> bool) -> BTreeSet<String> {
        self.nodes
            .iter()
            .map(ExtensionHost::extensions)
            .chain(std::iter::once(self.document.extensions()))
            .flat_map(|table| table.iter())
            .filter(|extension| filter(extension.required))
            .map(|extension| extension.name.clone())
            .collect()
    }

    /// Render the glTF fragment touched by the export
    ///
    /// Only the parts the hooks can write are included: the extension
    /// declarations, the node list and the document extensions.
    pub fn to_json(&self) -> Value {
        let mut root = json!({
            "nodes": self.nodes.iter().map(ExportNode::to_json).collect::<Vec<_>>(),
        });

        let used = self.extensions_used();
        if !used.is_empty() {
            root["extensionsUsed"] = json!(used);
        }
        let required = self.extensions_required();
        if !required.is_empty() {
            root["extensionsRequired"] = json!(required);
        }
        if !self.document.extensions.is_empty() {
            root["extensions"] = self.document.extensions.to_json();
        }
        root
    }
}

/// Stand-in for the host's glTF export traversal
#[derive(Debug, Default)]
pub struct ExportPipeline;

impl ExportPipeline {
    /// Create a pipeline
    pub fn new() -> Self {
        Self
    }

    /// Export a scene through the given hooks
    ///
    /// Nodes are created in scene order. Objects sharing a geometry block
    /// share a mesh index, assigned in first-seen order; empties get none.
    pub fn run<H: ExportHooks>(&self, scene: &Scene, mut hooks: H) -> ExportOutput {
        let mut output = ExportOutput::default();
        let mut mesh_indices: HashMap<&str, usize> = HashMap::new();

        for object in &scene.objects {
            let mut node = ExportNode::new(object.name.clone());
            if let Some(mesh_data) = object.mesh_data_name() {
                let next = mesh_indices.len();
                node.mesh = Some(*mesh_indices.entry(mesh_data).or_insert(next));
            }

            if let Err(error) = hooks.gather_node(&mut node, object, scene.parent_of(object)) {
                log::warn!("Skipping physics for {}: {}", object.name, error);
                output.failures.push(NodeFailure {
                    node: object.name.clone(),
                    error,
                });
            }
            output.nodes.push(node);
        }

        hooks.gather_document(&mut output.document);
        log::info!(
            "Exported {} nodes ({} failed)",
            output.nodes.len(),
            output.failures.len()
        );
        output
    }
}
