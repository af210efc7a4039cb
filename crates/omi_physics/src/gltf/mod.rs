//! glTF export handles
//!
//! Minimal stand-ins for the node and document objects owned by the host's
//! glTF writer. The exporter only ever touches their extension tables.

pub mod extensions;
pub mod node;

pub use extensions::{Extension, ExtensionHost, ExtensionTable};
pub use node::{ExportDocument, ExportNode};
