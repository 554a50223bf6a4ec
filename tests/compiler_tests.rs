mod common;

use common::TestResult;
use serde_json::Value;
use sitewright::core::{CompileOptions, compile};
use sitewright::{Industry, Node, NullRecorder, PageAst, StylePreset};
use std::collections::HashSet;

fn options() -> CompileOptions<'static> {
    CompileOptions {
        style: StylePreset::Modern,
        industry: Industry::Technology,
        recorder: &NullRecorder,
    }
}

#[test]
fn sample_ast_compiles_to_the_expected_shape() -> TestResult {
    common::init_logging();

    let sections = compile(&common::sample_ast(), &options());
    assert_eq!(sections.len(), 3);

    let hero = &sections[0];
    assert_eq!(hero.pattern(), Some("hero"));
    assert_eq!(hero.attr_str("_visual_context"), Some("DARK"));
    assert_eq!(hero.attr_str("_presentation"), Some("hero_asymmetric"));

    // 7 + 5 pack into one row of two columns.
    assert_eq!(hero.children.len(), 1);
    let row = &hero.children[0];
    assert_eq!(row.children.len(), 2);
    assert_eq!(row.attr_str("columns"), Some("7_12,5_12"));
    assert_eq!(row.children[0].attr_str("width"), Some("7_12"));
    Ok(())
}

#[test]
fn model_payloads_map_onto_module_attrs() {
    let sections = compile(&common::sample_ast(), &options());
    let headline = &sections[0].children[0].children[0].children[0];
    assert_eq!(headline.module_type(), Some("heading"));
    assert_eq!(headline.attr_str("text"), Some("Ship Faster"));
    // First headline of the first section promotes to h1.
    assert_eq!(headline.attr_str("level"), Some("h1"));
}

#[test]
fn payloadless_blurbs_draw_distinct_pool_entries() {
    let sections = compile(&common::sample_ast(), &options());
    let features = &sections[1];
    let column = &features.children[0].children[0];
    assert_eq!(column.children.len(), 5);

    let titles: Vec<&str> = column
        .children
        .iter()
        .filter_map(|m| m.attr_str("title"))
        .collect();
    let unique: HashSet<&str> = titles.iter().copied().collect();
    assert_eq!(unique.len(), 5, "blurb contents collided: {titles:?}");
}

#[test]
fn occurrence_indices_are_deterministic_across_runs() {
    let first = compile(&common::sample_ast(), &options());
    let second = compile(&common::sample_ast(), &options());
    assert_eq!(first, second);
}

#[test]
fn abstract_vocabulary_maps_through_the_fixed_table() -> TestResult {
    let ast = PageAst::from_json(
        r#"{"sections":[{"type":"faq","columns":[{"width":12,"elements":[
            {"type":"faq_item","content":{"question":"Why?","answer":"Because."}},
            {"type":"stat","content":{"value":"42%","label":"Better"}},
            {"type":"mystery_widget"}
        ]}]}]}"#,
    )?;
    let sections = compile(&ast, &options());
    let modules = &sections[0].children[0].children[0].children;

    assert_eq!(modules[0].module_type(), Some("accordion"));
    assert_eq!(modules[0].attr_str("title"), Some("Why?"));
    assert_eq!(modules[1].module_type(), Some("number_counter"));
    assert_eq!(modules[1].attr("percent_sign"), Some(&Value::Bool(true)));
    // Unknown abstract types fall back to plain text modules.
    assert_eq!(modules[2].module_type(), Some("text"));
    Ok(())
}

#[test]
fn visual_weight_drives_padding_and_context() -> TestResult {
    let ast = PageAst::from_json(
        r#"{"sections":[
            {"type":"hero","visual_weight":"high","columns":[{"elements":[{"type":"headline"}]}]},
            {"type":"features","visual_weight":"medium","columns":[{"elements":[{"type":"blurb"}]}]},
            {"type":"faq","visual_weight":"low","columns":[{"elements":[{"type":"faq_item"}]}]}
        ]}"#,
    )?;
    let sections = compile(&ast, &options());

    let padding_top = |section: &Node| -> i64 {
        section.attr("padding").and_then(|p| p["top"].as_i64()).unwrap_or(0)
    };
    assert_eq!(padding_top(&sections[0]), 120);
    assert_eq!(padding_top(&sections[1]), 80);
    assert_eq!(padding_top(&sections[2]), 40);

    assert_eq!(sections[0].attr_str("_visual_context"), Some("DARK"));
    assert_eq!(sections[1].attr_str("_visual_context"), Some("LIGHT"));
    assert_eq!(sections[2].attr_str("_visual_context"), Some("ACCENT"));
    assert_eq!(sections[2].attr_str("background_color"), Some("#f8fafc"));
    Ok(())
}

#[test]
fn malformed_sections_normalize_instead_of_failing() -> TestResult {
    // No type, no columns, widths that miss the grid.
    let ast = PageAst::from_json(
        r#"{"sections":[
            {},
            {"type":"about","columns":[{"width":7,"elements":[{"type":"body_text"}]},
                                        {"width":7,"elements":[{"type":"image_feature"}]}]}
        ]}"#,
    )?;
    let sections = compile(&ast, &options());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].pattern(), Some("features"));
    // 7 + 7 rescales to a single 6 + 6 row.
    let row = &sections[1].children[0];
    assert_eq!(row.attr_str("columns"), Some("1_2,1_2"));
    Ok(())
}

#[test]
fn pricing_variants_mark_the_featured_card() -> TestResult {
    let ast = PageAst::from_json(
        r#"{"sections":[{"type":"pricing","columns":[
            {"width":4,"elements":[{"type":"pricing_card"}]},
            {"width":4,"elements":[{"type":"pricing_card","variant":"featured"}]},
            {"width":4,"elements":[{"type":"pricing_card"}]}
        ]}]}"#,
    )?;
    let sections = compile(&ast, &options());
    let row = &sections[0].children[0];
    assert_eq!(row.children.len(), 3);

    // The declared featured card gets the emphasis treatment.
    let featured = &row.children[1].children[0];
    assert_eq!(featured.attr("featured"), Some(&Value::Bool(true)));
    Ok(())
}
