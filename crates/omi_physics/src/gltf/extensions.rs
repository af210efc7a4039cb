//! Extension tables attached to glTF objects
//!
//! glTF objects carry extension data in an `extensions` object keyed by the
//! extension name, e.g. `OMI_physics_body`. Each entry also records whether a
//! loader must understand it (`extensionsRequired`) or may ignore it.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// One extension entry on a glTF object
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    /// Extension name, also the key in the table
    pub name: String,
    /// Extension payload
    pub value: Value,
    /// Whether loaders must support the extension to read the file
    pub required: bool,
}

impl Extension {
    /// Create an optional extension entry
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            required: false,
        }
    }
}

/// Mapping from extension name to extension entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionTable {
    entries: BTreeMap<String, Extension>,
}

impl ExtensionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an extension, replacing any entry with the same name
    pub fn insert(&mut self, extension: Extension) -> Option<Extension> {
        self.entries.insert(extension.name.clone(), extension)
    }

    /// Look up an extension by name
    pub fn get(&self, name: &str) -> Option<&Extension> {
        self.entries.get(name)
    }

    /// Payload of an extension by name
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|extension| &extension.value)
    }

    /// Whether an extension is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of extensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in name order
    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.entries.values()
    }

    /// Render as the JSON `extensions` object
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(name, extension)| (name.clone(), extension.value.clone()))
            .collect();
        Value::Object(map)
    }
}

/// A glTF object the exporter can attach extensions to
pub trait ExtensionHost {
    /// Extension table of the object
    fn extensions(&self) -> &ExtensionTable;

    /// Mutable extension table of the object
    fn extensions_mut(&mut self) -> &mut ExtensionTable;

    /// Attach an extension entry
    fn attach_extension(&mut self, extension: Extension) {
        if let Some(previous) = self.extensions_mut().insert(extension) {
            log::debug!("Replaced existing {} extension", previous.name);
        }
    }
}
