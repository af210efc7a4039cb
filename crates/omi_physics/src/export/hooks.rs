//! Hook points exposed to the host export pipeline

use crate::gltf::{ExportDocument, ExportNode};
use crate::physics::ExportError;
use crate::scene::SceneObject;

/// Callbacks invoked by a glTF export pipeline
///
/// The pipeline calls [`gather_node`](Self::gather_node) once per exported
/// object in its own traversal order, then
/// [`gather_document`](Self::gather_document) exactly once. Implementors are
/// per-export values; the document hook consumes them.
pub trait ExportHooks {
    /// Called for each exported node with the object it was created from
    ///
    /// An error means the hook wrote nothing for this node. The pipeline
    /// continues with the next one.
    fn gather_node(
        &mut self,
        node: &mut ExportNode,
        object: &SceneObject,
        parent: Option<&SceneObject>,
    ) -> Result<(), ExportError>;

    /// Called once after every node has been gathered
    fn gather_document(self, document: &mut ExportDocument)
    where
        Self: Sized;
}
