//! The capability registry: the engine's read-only view of the concrete
//! content-module catalog.
//!
//! The catalog itself (field schemas, editors, renderers) is an external
//! collaborator; the engine only asks which fields a module type declares so
//! it can seed default attribute values. The trait is total: unknown module
//! types yield an empty field map, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One declared field of a content module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Field name → definition for one module type.
pub type FieldMap = HashMap<String, FieldDef>;

/// Read-only lookup into the module catalog, keyed by normalized module
/// type (lower-case, underscores).
pub trait ModuleRegistry {
    /// Returns the declared fields for a module type; empty for unknown
    /// types.
    fn fields(&self, module_type: &str) -> FieldMap;
}

/// A registry backed by an in-memory table. The default value knows no
/// module types, which is a valid (if spartan) catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModuleRegistry {
    modules: HashMap<String, FieldMap>,
}

impl InMemoryModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, module_type: impl Into<String>, fields: FieldMap) {
        self.modules.insert(module_type.into(), fields);
    }
}

impl ModuleRegistry for InMemoryModuleRegistry {
    fn fields(&self, module_type: &str) -> FieldMap {
        self.modules.get(module_type).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_types_return_empty_maps() {
        let registry = InMemoryModuleRegistry::new();
        assert!(registry.fields("heading").is_empty());
    }

    #[test]
    fn registered_defaults_come_back() {
        let mut registry = InMemoryModuleRegistry::new();
        registry.register(
            "button",
            FieldMap::from([(
                "text".to_owned(),
                FieldDef {
                    field_type: "text".to_owned(),
                    default: Some(json!("Click Here")),
                    options: Vec::new(),
                },
            )]),
        );
        let fields = registry.fields("button");
        assert_eq!(fields["text"].default, Some(json!("Click Here")));
    }
}
