//! Shared fixtures for the integration tests.

use sitewright::{Node, PageAst, Pipeline, PipelineOptions, SiteInput};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn pipeline() -> Pipeline {
    Pipeline::new()
}

/// Options for the common "technology home page" fixture.
pub fn tech_options() -> PipelineOptions {
    PipelineOptions::new("technology", "modern")
}

/// An empty structural input: every region synthesizes from templates.
pub fn empty_input() -> SiteInput {
    SiteInput::default()
}

/// A small hand-built AST with a hero, a features grid and a final cta.
pub fn sample_ast() -> PageAst {
    PageAst::from_json(
        r#"{
            "goal": "Launch page for a developer tool",
            "style": "modern",
            "sections": [
                {
                    "type": "hero",
                    "intent": "capture",
                    "layout": "asymmetric",
                    "visual_weight": "high",
                    "columns": [
                        {
                            "width": 7,
                            "elements": [
                                { "type": "headline",
                                  "content": { "text": "Ship Faster" } },
                                { "type": "subheadline" },
                                { "type": "cta_primary" }
                            ]
                        },
                        { "width": 5, "elements": [ { "type": "image_hero" } ] }
                    ]
                },
                {
                    "type": "features",
                    "layout": "grid",
                    "visual_weight": "medium",
                    "columns": [
                        { "width": 12,
                          "elements": [ { "type": "blurb", "count": 5 } ] }
                    ]
                },
                {
                    "type": "cta",
                    "visual_weight": "high",
                    "columns": [
                        { "width": 12,
                          "elements": [
                              { "type": "headline" },
                              { "type": "cta_primary" }
                          ] }
                    ]
                }
            ]
        }"#,
    )
    .expect("sample AST parses")
}

/// Collects every node id reachable from the given sections, depth-first,
/// tagged with the node's kind name.
pub fn collect_ids(sections: &[Node]) -> Vec<(String, String)> {
    fn walk(node: &Node, out: &mut Vec<(String, String)>) {
        if let Some(id) = &node.id {
            out.push((node.kind.as_str().to_owned(), id.as_str().to_owned()));
        }
        for child in &node.children {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    for section in sections {
        walk(section, &mut out);
    }
    out
}
