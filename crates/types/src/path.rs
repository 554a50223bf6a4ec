//! Semantic path addresses and the path map.
//!
//! A path is the stable, human-readable join key between structure, content
//! and style: `{region}/{blueprint}` for a section, plus `/col{N}` for a
//! column and `/{moduleType}_{K}` for a module, where `K` counts earlier
//! same-type modules in the same column.

use crate::ids::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from path to node identifier, built in document
/// order and immutable after construction.
pub type PathMap = IndexMap<String, NodeId>;

/// Summary of one section, keyed by its path in [`SectionMetaMap`]. Consumed
/// by the rhythm and alternation passes and exposed for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMeta {
    pub blueprint: String,
    /// `None` for header/footer sections.
    pub page: Option<String>,
    /// Position of the section within its region.
    pub index: usize,
}

/// Insertion-ordered section metadata, in document order.
pub type SectionMetaMap = IndexMap<String, SectionMeta>;

/// Normalizes a module type or blueprint slug: lower-cased, hyphens folded to
/// underscores (`Site-Logo` → `site_logo`).
pub fn normalize_slug(raw: &str) -> String {
    slug::slugify(raw).replace('-', "_")
}

pub fn section_path(region_segment: &str, blueprint: &str) -> String {
    format!("{region_segment}/{blueprint}")
}

pub fn column_path(section: &str, index: usize) -> String {
    format!("{section}/col{index}")
}

pub fn module_path(column: &str, module_type: &str, occurrence: usize) -> String {
    format!("{column}/{module_type}_{occurrence}")
}

/// Which level of the tree a path addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Section,
    Column,
    Module,
}

/// Decomposed form of a path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    pub kind: PathKind,
    /// `header` or `footer`, when the path lives under one of those regions.
    pub region: Option<String>,
    /// The page name, for page regions.
    pub page: Option<String>,
    pub blueprint: String,
    pub column: Option<usize>,
    /// Normalized module type with the occurrence suffix stripped.
    pub module_type: Option<String>,
}

/// Parses a path back into its components. Returns `None` for strings that
/// do not follow the path grammar.
pub fn parse_path(path: &str) -> Option<PathInfo> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 2 || parts.len() > 4 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }

    let (region, page) = match parts[0] {
        "header" | "footer" => (Some(parts[0].to_owned()), None),
        name => (None, Some(name.to_owned())),
    };
    let blueprint = parts[1].to_owned();

    let column = match parts.get(2) {
        Some(segment) => Some(segment.strip_prefix("col")?.parse().ok()?),
        None => None,
    };

    let module_type = parts.get(3).map(|segment| {
        let trimmed = match segment.rsplit_once('_') {
            Some((head, tail)) if tail.chars().all(|c| c.is_ascii_digit()) => head,
            _ => segment,
        };
        normalize_slug(trimmed)
    });

    let kind = match (column, &module_type) {
        (None, _) => PathKind::Section,
        (Some(_), None) => PathKind::Column,
        (Some(_), Some(_)) => PathKind::Module,
    };

    Some(PathInfo {
        kind,
        region,
        page,
        blueprint,
        column,
        module_type,
    })
}
