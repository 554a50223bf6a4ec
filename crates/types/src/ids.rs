//! Newtype wrapper for node identifiers and the run-wide allocator.
//!
//! Identifiers are deterministic: one monotonically increasing counter per
//! compilation run, formatted as `{prefix}_{level}_{counter}` where the
//! prefix identifies the region and the level tag identifies the tree depth.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An assigned identifier for a tree node, unique within a compilation run.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tree depth of an identifier: section, row, column or module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Section,
    Row,
    Column,
    Module,
}

impl Level {
    /// Single-letter tag embedded in the identifier.
    pub fn tag(self) -> char {
        match self {
            Level::Section => 's',
            Level::Row => 'r',
            Level::Column => 'c',
            Level::Module => 'm',
        }
    }
}

/// Allocates node identifiers for one compilation run.
///
/// The counter is shared across every region of the run, so identifiers are
/// unique site-wide even when region prefixes repeat across pages.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Counters start above zero so generated ids are visually distinct from
    /// positional indices in downstream tooling.
    const FIRST: u64 = 1000;

    pub fn new() -> Self {
        Self { next: Self::FIRST }
    }

    /// Produces the next identifier for the given region prefix and level.
    pub fn allocate(&mut self, prefix: &str, level: Level) -> NodeId {
        let id = format!("{}_{}_{}", prefix, level.tag(), self.next);
        self.next += 1;
        NodeId(id)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_across_regions() {
        let mut alloc = IdAllocator::new();
        let a = alloc.allocate("hdr", Level::Section);
        let b = alloc.allocate("hdr", Level::Row);
        let c = alloc.allocate("hom", Level::Module);
        assert_eq!(a.as_str(), "hdr_s_1000");
        assert_eq!(b.as_str(), "hdr_r_1001");
        assert_eq!(c.as_str(), "hom_m_1002");
    }
}
