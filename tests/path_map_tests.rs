mod common;

use common::collect_ids;
use std::collections::HashSet;

#[test]
fn paths_are_unique_and_cover_the_tree() {
    common::init_logging();

    let site = common::pipeline()
        .compile_site(&common::empty_input(), &common::tech_options())
        .expect("compilation succeeds");

    // No two nodes share a path.
    let paths: HashSet<&String> = site.assigned.path_map.keys().collect();
    assert_eq!(paths.len(), site.assigned.path_map.len());

    // Every section, column and module id appears as a value exactly once;
    // row ids never do.
    let mapped: Vec<&str> = site
        .assigned
        .path_map
        .values()
        .map(|id| id.as_str())
        .collect();
    let unique: HashSet<&str> = mapped.iter().copied().collect();
    assert_eq!(unique.len(), mapped.len(), "an id appears under two paths");

    for (_, sections) in site.skeleton.regions() {
        for (kind, id) in collect_ids(sections) {
            match kind.as_str() {
                "row" => assert!(!unique.contains(id.as_str()), "row id {id} has a path"),
                _ => assert!(unique.contains(id.as_str()), "{kind} id {id} has no path"),
            }
        }
    }
}

#[test]
fn ids_carry_region_prefixes_and_level_tags() {
    let site = common::pipeline()
        .compile_site(&common::empty_input(), &common::tech_options())
        .expect("compilation succeeds");

    let header_id = site.assigned.path_map.get("header/header").expect("header path");
    assert!(header_id.as_str().starts_with("hdr_s_"));

    let home_hero = site.assigned.path_map.get("home/hero").expect("hero path");
    assert!(home_hero.as_str().starts_with("hom_s_"));

    let hero_col = site.assigned.path_map.get("home/hero/col0").expect("column path");
    assert!(hero_col.as_str().starts_with("hom_c_"));
}

#[test]
fn recompiling_yields_identical_paths() {
    let first = common::pipeline()
        .compile_site(&common::empty_input(), &common::tech_options())
        .expect("compilation succeeds");
    let second = common::pipeline()
        .compile_site(&common::empty_input(), &common::tech_options())
        .expect("compilation succeeds");

    let left: Vec<(&String, &str)> = first
        .assigned
        .path_map
        .iter()
        .map(|(path, id)| (path, id.as_str()))
        .collect();
    let right: Vec<(&String, &str)> = second
        .assigned
        .path_map
        .iter()
        .map(|(path, id)| (path, id.as_str()))
        .collect();
    assert_eq!(left, right);
}

#[test]
fn module_occurrences_disambiguate_repeats() {
    let site = common::pipeline()
        .compile_ast(&common::sample_ast(), "home", &common::tech_options())
        .expect("ast compilation succeeds");

    // Five blurbs in one column: blurb_0 through blurb_4.
    for occurrence in 0..5 {
        let path = format!("home/features/col0/blurb_{occurrence}");
        assert!(
            site.assigned.path_map.contains_key(&path),
            "missing {path}"
        );
    }
    assert!(!site
        .assigned
        .path_map
        .contains_key("home/features/col0/blurb_5"));
}

#[test]
fn section_metadata_summarizes_page_order() {
    let site = common::pipeline()
        .compile_ast(&common::sample_ast(), "home", &common::tech_options())
        .expect("ast compilation succeeds");

    let meta: Vec<(&str, usize)> = site
        .assigned
        .section_meta
        .values()
        .map(|m| (m.blueprint.as_str(), m.index))
        .collect();
    assert_eq!(meta, [("hero", 0), ("features", 1), ("cta", 2)]);
    for meta in site.assigned.section_meta.values() {
        assert_eq!(meta.page.as_deref(), Some("home"));
    }
}
