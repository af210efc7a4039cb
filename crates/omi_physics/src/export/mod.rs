//! Export pipeline
//!
//! The host export pipeline calls extension hooks once per node and once for
//! the document. [`ExportPipeline`] plays the host's part so scenes can be
//! exported and tested without it.

pub mod hooks;
pub mod pipeline;

pub use hooks::ExportHooks;
pub use pipeline::{ExportOutput, ExportPipeline, NodeFailure};
