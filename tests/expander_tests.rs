mod common;

use common::TestResult;
use serde_json::json;
use sitewright::core::{ExpandOptions, expand};
use sitewright::{
    InMemoryModuleRegistry, Industry, Node, NullRecorder, PipelineOptions, RegionInput, SiteInput,
};

fn expand_default(industry: Industry, pages: &[&str]) -> sitewright::Skeleton {
    let registry = InMemoryModuleRegistry::new();
    let opts = ExpandOptions {
        industry,
        registry: &registry,
        recorder: &NullRecorder,
    };
    let pages: Vec<String> = pages.iter().map(|p| (*p).to_owned()).collect();
    expand(&SiteInput::default(), &pages, &opts)
}

#[test]
fn synthesizes_default_header_and_footer() {
    common::init_logging();

    let skeleton = expand_default(Industry::Technology, &["home"]);
    let header = &skeleton.header[0];
    assert_eq!(header.pattern(), Some("header"));
    // One row, three columns, one module each: logo, menu, button.
    let row = &header.children[0];
    assert_eq!(row.children.len(), 3);
    let types: Vec<&str> = row
        .children
        .iter()
        .filter_map(|col| col.children.first())
        .filter_map(Node::module_type)
        .collect();
    assert_eq!(types, ["site_logo", "menu", "button"]);

    let footer_row = &skeleton.footer[0].children[0];
    assert_eq!(footer_row.children.len(), 4);
}

#[test]
fn industry_aliases_reach_the_same_template() {
    let saas = expand_default(Industry::from_name("saas"), &["home"]);
    let tech = expand_default(Industry::Technology, &["home"]);
    let blueprints = |skeleton: &sitewright::Skeleton| -> Vec<String> {
        skeleton.pages["home"]
            .sections
            .iter()
            .filter_map(|s| s.pattern().map(str::to_owned))
            .collect()
    };
    assert_eq!(blueprints(&saas), blueprints(&tech));
    // The technology home leads hero → trust_logos → stats.
    assert_eq!(blueprints(&tech)[..3], ["hero", "trust_logos", "stats"]);
}

#[test]
fn unknown_industry_falls_back_to_the_generic_template() {
    let skeleton = expand_default(Industry::from_name("xyzzy"), &["home"]);
    let blueprints: Vec<&str> = skeleton.pages["home"]
        .sections
        .iter()
        .filter_map(Node::pattern)
        .collect();
    assert_eq!(blueprints, ["hero", "features", "testimonials", "cta"]);
}

#[test]
fn registry_defaults_seed_module_attrs() -> TestResult {
    let mut registry = InMemoryModuleRegistry::new();
    let mut fields = sitewright::core::FieldMap::new();
    fields.insert(
        "text".to_owned(),
        sitewright::core::FieldDef {
            field_type: "text".to_owned(),
            default: Some(json!("Menu")),
            options: Vec::new(),
        },
    );
    registry.register("menu", fields);

    let opts = ExpandOptions {
        industry: Industry::Generic,
        registry: &registry,
        recorder: &NullRecorder,
    };
    let skeleton = expand(&SiteInput::default(), &["home".to_owned()], &opts);
    let menu = skeleton.header[0].children[0].children[1].children
        .first()
        .ok_or("menu module missing")?;
    assert_eq!(menu.attr_str("text"), Some("Menu"));
    Ok(())
}

#[test]
fn explicit_columns_win_over_sequential_distribution() {
    let input: SiteInput = serde_json::from_value(json!({
        "pages": {
            "home": {
                "sections": [
                    {
                        "blueprint": "about",
                        "layout": "1_2,1_2",
                        "modules": [
                            { "type": "image", "column": 1 },
                            { "type": "heading", "column": 0 },
                            { "type": "text", "column": 0 }
                        ]
                    }
                ]
            }
        }
    }))
    .expect("site input parses");

    let registry = InMemoryModuleRegistry::new();
    let opts = ExpandOptions {
        industry: Industry::Generic,
        registry: &registry,
        recorder: &NullRecorder,
    };
    let skeleton = expand(&input, &["home".to_owned()], &opts);
    let row = &skeleton.pages["home"].sections[0].children[0];
    let first: Vec<&str> = row.children[0]
        .children
        .iter()
        .filter_map(Node::module_type)
        .collect();
    let second: Vec<&str> = row.children[1]
        .children
        .iter()
        .filter_map(Node::module_type)
        .collect();
    assert_eq!(first, ["heading", "text"]);
    assert_eq!(second, ["image"]);
}

#[test]
fn pass_through_sections_infer_their_blueprint() {
    let sections = vec![
        // Index 0, heading + button: hero.
        section_of(&["heading", "text", "button"]),
        // Three blurbs: features.
        section_of(&["blurb", "blurb", "blurb"]),
        // A testimonial beats the blurb count below threshold.
        section_of(&["blurb", "testimonial"]),
        // Heading + button late in the page: cta.
        section_of(&["heading", "button"]),
    ];
    let mut input = SiteInput::default();
    input
        .pages
        .insert("home".to_owned(), RegionInput::Sections { sections });

    let registry = InMemoryModuleRegistry::new();
    let opts = ExpandOptions {
        industry: Industry::Generic,
        registry: &registry,
        recorder: &NullRecorder,
    };
    let skeleton = expand(&input, &["home".to_owned()], &opts);
    let blueprints: Vec<&str> = skeleton.pages["home"]
        .sections
        .iter()
        .filter_map(Node::pattern)
        .collect();
    assert_eq!(blueprints, ["hero", "features", "testimonials", "cta"]);
}

#[test]
fn pipeline_options_normalize_free_form_names() {
    let opts = PipelineOptions::new("Clinic", "BOLD");
    assert_eq!(opts.industry, Industry::Healthcare);
    assert_eq!(opts.style, sitewright::StylePreset::Bold);
}

fn section_of(module_types: &[&str]) -> Node {
    Node::section().with_children(vec![Node::row().with_children(vec![
        Node::column().with_children(module_types.iter().map(|ty| Node::module(*ty)).collect()),
    ])])
}
