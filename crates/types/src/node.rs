//! The universal tree element shared by every pipeline stage.
//!
//! A document is a tree of sections containing rows containing columns
//! containing leaf content modules. Nodes own their children exclusively;
//! there are no back-references and no sharing. Stages mutate the tree in
//! place (merging attrs, assigning ids, appending children); after the style
//! pass the tree is frozen from the engine's point of view.

use crate::ids::NodeId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open, string-keyed attribute map attached to every node.
///
/// The engine treats the contents as opaque except for a small reserved set
/// of keys ([`ATTR_PATTERN`], [`ATTR_VISUAL_CONTEXT`], [`ATTR_WIDTH`]).
pub type AttrMap = serde_json::Map<String, Value>;

/// Reserved attr key: the section's blueprint tag.
pub const ATTR_PATTERN: &str = "_pattern";
/// Reserved attr key: the section's LIGHT/DARK/ACCENT/PRIMARY classification.
pub const ATTR_VISUAL_CONTEXT: &str = "_visual_context";
/// Reserved attr key: a column's width as a fraction token.
pub const ATTR_WIDTH: &str = "width";
/// Reserved attr key: the semantic role carried over from a module reference.
pub const ATTR_ROLE: &str = "_role";

/// Distinguishes the three structural node kinds from leaf content modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Section,
    Row,
    Column,
    /// A leaf content module such as `heading` or `testimonial`.
    Module(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Section => "section",
            NodeKind::Row => "row",
            NodeKind::Column => "column",
            NodeKind::Module(name) => name,
        }
    }

    pub fn is_module(&self) -> bool {
        matches!(self, NodeKind::Module(_))
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "section" => NodeKind::Section,
            "row" => NodeKind::Row,
            "column" => NodeKind::Column,
            _ => NodeKind::Module(name),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Assigned by the identifier pass; `None` until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub attrs: AttrMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: None,
            kind,
            attrs: AttrMap::new(),
            children: Vec::new(),
        }
    }

    pub fn section() -> Self {
        Self::new(NodeKind::Section)
    }

    pub fn row() -> Self {
        Self::new(NodeKind::Row)
    }

    pub fn column() -> Self {
        Self::new(NodeKind::Column)
    }

    pub fn module(module_type: impl Into<String>) -> Self {
        Self::new(NodeKind::Module(module_type.into()))
    }

    /// Builder-style attr insertion used when synthesizing nodes.
    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_owned(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<Value>) {
        self.attrs.insert(key.to_owned(), value.into());
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// The module type name for leaf modules, `None` for structural nodes.
    pub fn module_type(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Module(name) => Some(name),
            _ => None,
        }
    }

    /// The section's blueprint tag, if one has been assigned.
    pub fn pattern(&self) -> Option<&str> {
        self.attr_str(ATTR_PATTERN)
    }

    /// Collects the module types nested anywhere under this node, in document
    /// order. Used by blueprint inference.
    pub fn collect_module_types(&self, out: &mut Vec<String>) {
        if let NodeKind::Module(name) = &self.kind {
            out.push(name.clone());
        }
        for child in &self.children {
            child.collect_module_types(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(NodeKind::from("section".to_owned()), NodeKind::Section);
        assert_eq!(
            NodeKind::from("testimonial".to_owned()),
            NodeKind::Module("testimonial".into())
        );
        assert_eq!(String::from(NodeKind::Row), "row");
    }

    #[test]
    fn collects_nested_module_types_in_order() {
        let tree = Node::section().with_children(vec![Node::row().with_children(vec![
            Node::column().with_children(vec![Node::module("heading"), Node::module("button")]),
            Node::column().with_children(vec![Node::module("image")]),
        ])]);
        let mut types = Vec::new();
        tree.collect_module_types(&mut types);
        assert_eq!(types, ["heading", "button", "image"]);
    }
}
