//! Assigns deterministic node identifiers and derives the semantic path
//! map, in one depth-first walk per region.
//!
//! Identifiers come from a single run-wide counter; paths are
//! `{region}/{blueprint}` for sections, `/col{N}` for columns (the index
//! continues across a section's rows) and `/{type}_{K}` for modules, with
//! `K` counting earlier same-type modules in the same column. Rows receive
//! identifiers but no paths.

use crate::expand::Skeleton;
use sitewright_types::{
    IdAllocator, Level, Node, PathMap, Region, SectionMeta, SectionMetaMap, column_path,
    module_path, normalize_slug, section_path,
};
use std::collections::HashSet;

/// Output of the assignment walk: the path map plus the section metadata
/// summary consumed by the rhythm and alternation passes.
#[derive(Debug, Clone, Default)]
pub struct Assigned {
    pub path_map: PathMap,
    pub section_meta: SectionMetaMap,
}

/// Assigns identifiers to every node reachable from a region and builds the
/// path map in the same order. A region with no sections contributes
/// nothing; that is not an error.
pub fn assign(skeleton: &mut Skeleton) -> Assigned {
    let mut allocator = IdAllocator::new();
    let mut assigned = Assigned::default();

    assign_region(
        &Region::Header,
        &mut skeleton.header,
        &mut allocator,
        &mut assigned,
    );
    assign_region(
        &Region::Footer,
        &mut skeleton.footer,
        &mut allocator,
        &mut assigned,
    );

    for (name, page) in skeleton.pages.iter_mut() {
        let region = Region::page(name.clone());
        assign_region(&region, &mut page.sections, &mut allocator, &mut assigned);
    }

    assigned
}

fn assign_region(
    region: &Region,
    sections: &mut [Node],
    allocator: &mut IdAllocator,
    assigned: &mut Assigned,
) {
    let prefix = region.id_prefix();
    let segment = region.path_segment().to_owned();
    let page = match region {
        Region::Page(name) => Some(name.clone()),
        _ => None,
    };
    let mut used_segments: HashSet<String> = HashSet::new();

    for (index, section) in sections.iter_mut().enumerate() {
        let blueprint = section
            .pattern()
            .map(str::to_owned)
            .unwrap_or_else(|| format!("section_{index}"));

        // Duplicate blueprints within a region would collide on the same
        // path; later sections take an index-suffixed segment.
        let section_segment = if used_segments.insert(blueprint.clone()) {
            blueprint.clone()
        } else {
            let suffixed = format!("{blueprint}_{index}");
            used_segments.insert(suffixed.clone());
            suffixed
        };

        let id = allocator.allocate(&prefix, Level::Section);
        section.id = Some(id.clone());
        let spath = section_path(&segment, &section_segment);
        assigned.path_map.insert(spath.clone(), id);
        assigned.section_meta.insert(
            spath.clone(),
            SectionMeta {
                blueprint,
                page: page.clone(),
                index,
            },
        );

        let mut column_index = 0usize;
        for row in &mut section.children {
            row.id = Some(allocator.allocate(&prefix, Level::Row));

            for column in &mut row.children {
                let id = allocator.allocate(&prefix, Level::Column);
                column.id = Some(id.clone());
                let cpath = column_path(&spath, column_index);
                assigned.path_map.insert(cpath.clone(), id);
                column_index += 1;

                let mut occurrences: Vec<(String, usize)> = Vec::new();
                for module in &mut column.children {
                    let id = allocator.allocate(&prefix, Level::Module);
                    module.id = Some(id.clone());

                    let module_type = module
                        .module_type()
                        .map(normalize_slug)
                        .unwrap_or_else(|| "unknown".to_owned());
                    let occurrence = bump(&mut occurrences, &module_type);
                    assigned
                        .path_map
                        .insert(module_path(&cpath, &module_type, occurrence), id);
                }
            }
        }
    }
}

/// Returns the current occurrence index for a type and advances it.
fn bump(counters: &mut Vec<(String, usize)>, module_type: &str) -> usize {
    for (ty, count) in counters.iter_mut() {
        if ty == module_type {
            let current = *count;
            *count += 1;
            return current;
        }
    }
    counters.push((module_type.to_owned(), 1));
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::PageDoc;
    use sitewright_types::node::ATTR_PATTERN;

    fn page_with(sections: Vec<Node>) -> Skeleton {
        let mut skeleton = Skeleton::default();
        skeleton.pages.insert(
            "home".to_owned(),
            PageDoc {
                title: "Home".to_owned(),
                sections,
            },
        );
        skeleton
    }

    fn hero_section() -> Node {
        Node::section()
            .with_attr(ATTR_PATTERN, "hero")
            .with_children(vec![Node::row().with_children(vec![
                Node::column().with_children(vec![
                    Node::module("heading"),
                    Node::module("text"),
                    Node::module("text"),
                ]),
            ])])
    }

    #[test]
    fn occurrence_counters_reset_per_column() {
        let mut skeleton = page_with(vec![hero_section()]);
        let assigned = assign(&mut skeleton);
        assert!(assigned.path_map.contains_key("home/hero/col0/heading_0"));
        assert!(assigned.path_map.contains_key("home/hero/col0/text_0"));
        assert!(assigned.path_map.contains_key("home/hero/col0/text_1"));
    }

    #[test]
    fn duplicate_blueprints_get_suffixed_segments() {
        let mut skeleton = page_with(vec![hero_section(), hero_section()]);
        let assigned = assign(&mut skeleton);
        assert!(assigned.path_map.contains_key("home/hero"));
        assert!(assigned.path_map.contains_key("home/hero_1"));
        let paths: HashSet<&String> = assigned.path_map.keys().collect();
        assert_eq!(paths.len(), assigned.path_map.len());
    }

    #[test]
    fn empty_regions_contribute_nothing() {
        let mut skeleton = Skeleton::default();
        let assigned = assign(&mut skeleton);
        assert!(assigned.path_map.is_empty());
        assert!(assigned.section_meta.is_empty());
    }
}
