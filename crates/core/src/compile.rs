//! Compiles an abstract layout description into the same tree shape the
//! skeleton expander produces.
//!
//! This is the alternate entry point used when the upstream source is a
//! generative layout description rather than a parsed mockup. Abstract
//! section and element vocabulary is mapped onto concrete blueprints and
//! module types through fixed tables; content comes from the model's
//! payloads when present and from the deterministic pools otherwise.

use crate::ast::{ColumnAst, ElementAst, PageAst, SectionAst, VisualWeight, normalize};
use crate::content::{ContentRequest, PoolKey, fallback_content};
use crate::grid;
use crate::object;
use crate::observe::Recorder;
use serde_json::{Value, json};
use sitewright_style::{Industry, StylePreset, VisualContext};
use sitewright_types::node::{ATTR_PATTERN, ATTR_VISUAL_CONTEXT, ATTR_WIDTH};
use sitewright_types::{AttrMap, ColumnWidth, Node, layout_string, normalize_slug};

/// Abstract element type → concrete module type. Unknown types become
/// plain text modules.
const ELEMENT_TO_MODULE: &[(&str, &str)] = &[
    // Text
    ("headline", "heading"),
    ("subheadline", "text"),
    ("body_text", "text"),
    ("label", "text"),
    // Actions
    ("cta_primary", "button"),
    ("cta_secondary", "button"),
    ("link", "button"),
    // Visual
    ("image_hero", "image"),
    ("image_feature", "image"),
    ("image_background", "image"),
    ("video", "video"),
    ("icon", "blurb"),
    ("divider", "divider"),
    // Data
    ("stat", "number_counter"),
    ("counter", "number_counter"),
    ("progress", "bar_counter"),
    // Social proof
    ("testimonial", "testimonial"),
    ("logo", "image"),
    ("logo_grid", "gallery"),
    ("rating", "text"),
    // Commerce
    ("pricing_card", "pricing_table"),
    ("feature_list", "text"),
    // Interactive
    ("faq_item", "accordion"),
    ("tab", "tabs"),
    ("accordion", "accordion"),
    // Forms
    ("form", "contact_form"),
    ("newsletter", "contact_form"),
    // Composite
    ("card", "blurb"),
    ("blurb", "blurb"),
    ("team_member", "team_member"),
];

/// Abstract section type → presentation pattern name. Unmapped types pass
/// through unchanged.
const SECTION_TO_PATTERN: &[(&str, &str)] = &[
    ("hero", "hero_asymmetric"),
    ("features", "grid_density"),
    ("testimonials", "testimonial_spotlight"),
    ("social_proof", "trust_metrics"),
    ("stats", "trust_metrics"),
    ("pricing", "pricing_tiered"),
    ("faq", "faq_expandable"),
    ("cta", "final_cta"),
    ("contact", "contact_gateway"),
    ("about", "zigzag_narrative"),
    ("team", "grid_density"),
    ("services", "grid_density"),
    ("benefits", "zigzag_narrative"),
    ("newsletter", "final_cta"),
    ("divider", "breathing_space"),
];

/// Abstract layout hint → pattern variant.
const LAYOUT_TO_VARIANT: &[(&str, &str)] = &[
    ("asymmetric", "image_right"),
    ("centered", "centered"),
    ("split", "split"),
    ("grid", "three_column"),
    ("alternating", "alternating"),
    ("stacked", "stacked"),
    ("masonry", "masonry"),
];

pub fn module_for_element(element_type: &str) -> &'static str {
    lookup(ELEMENT_TO_MODULE, element_type).unwrap_or("text")
}

fn pattern_for_section(section_type: &str) -> String {
    lookup(SECTION_TO_PATTERN, section_type)
        .map(str::to_owned)
        .unwrap_or_else(|| section_type.to_owned())
}

fn variant_for_layout(layout: &str) -> &'static str {
    lookup(LAYOUT_TO_VARIANT, layout).unwrap_or("default")
}

fn lookup(table: &'static [(&str, &str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub struct CompileOptions<'a> {
    pub style: StylePreset,
    pub industry: Industry,
    pub recorder: &'a dyn Recorder,
}

struct SectionContext {
    index: usize,
    is_first: bool,
    section_type: String,
    preset: StylePreset,
}

/// Compiles a page AST into section nodes. The input is normalized first,
/// so malformed descriptions compile to a complete tree instead of failing.
pub fn compile(ast: &PageAst, opts: &CompileOptions) -> Vec<Node> {
    let mut ast = ast.clone();
    normalize(&mut ast);

    let preset = ast
        .style
        .as_deref()
        .map(StylePreset::from_name)
        .unwrap_or(opts.style);

    let total = ast.sections.len();
    let sections: Vec<Node> = ast
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let ctx = SectionContext {
                index,
                is_first: index == 0,
                section_type: section.section_type.clone().unwrap_or_default(),
                preset,
            };
            compile_section(section, &ctx)
        })
        .collect();

    opts.recorder.record(
        "compile.page",
        &[("sections", &total.to_string()), ("style", preset.name())],
    );
    sections
}

fn compile_section(section: &SectionAst, ctx: &SectionContext) -> Node {
    let section_type = ctx.section_type.as_str();
    let layout = section.layout.as_deref().unwrap_or("stacked");
    let weight = VisualWeight::from_name(section.visual_weight.as_deref().unwrap_or("medium"));

    // Heroes specialize their pattern by declared layout.
    let pattern = if section_type == "hero" {
        match layout {
            "centered" => "hero_centered".to_owned(),
            "split" => "hero_split".to_owned(),
            _ => "hero_asymmetric".to_owned(),
        }
    } else {
        pattern_for_section(section_type)
    };

    let context = visual_context(section_type, weight);
    let padding = weight.padding();

    let mut attrs = object(json!({
        (ATTR_PATTERN): section_type,
        (ATTR_VISUAL_CONTEXT): context.name(),
        "_presentation": pattern,
        "_variant": variant_for_layout(layout),
        "full_width": true,
        "padding": { "top": padding, "right": 0, "bottom": padding, "left": 0 },
    }));
    match context {
        VisualContext::Dark => {
            attrs.insert("background_color".to_owned(), json!("#1a1a2e"));
            attrs.insert("text_color".to_owned(), json!("#ffffff"));
        }
        VisualContext::Accent => {
            attrs.insert("background_color".to_owned(), json!("#f8fafc"));
        }
        _ => {}
    }

    let mut node = Node::section();
    node.attrs = attrs;
    node.children = compile_rows(&section.columns, ctx);
    node
}

/// DARK for heavyweight hero/cta sections, ACCENT for lightweight ones,
/// LIGHT otherwise.
fn visual_context(section_type: &str, weight: VisualWeight) -> VisualContext {
    match weight {
        VisualWeight::High if matches!(section_type, "hero" | "cta") => VisualContext::Dark,
        VisualWeight::Low => VisualContext::Accent,
        _ => VisualContext::Light,
    }
}

fn compile_rows(columns: &[ColumnAst], ctx: &SectionContext) -> Vec<Node> {
    let widths: Vec<ColumnWidth> = columns
        .iter()
        .map(|c| ColumnWidth::new(c.width.unwrap_or(12).min(12) as u8))
        .collect();

    let mut rows = Vec::new();
    let mut cursor = 0usize;
    for length in grid::row_lengths(&widths) {
        let row_widths = &widths[cursor..cursor + length];
        let row_columns = columns[cursor..cursor + length]
            .iter()
            .zip(row_widths)
            .enumerate()
            .map(|(offset, (column, width))| {
                compile_column(column, *width, cursor + offset, ctx)
            })
            .collect();
        rows.push(
            Node::row()
                .with_attr("columns", layout_string(row_widths))
                .with_attr("column_gap", 32)
                .with_attr("row_gap", 40)
                .with_attr("vertical_align", "center")
                .with_children(row_columns),
        );
        cursor += length;
    }
    rows
}

fn compile_column(
    column: &ColumnAst,
    width: ColumnWidth,
    column_index: usize,
    ctx: &SectionContext,
) -> Node {
    let mut modules = Vec::new();
    let mut counters: Vec<(String, usize)> = Vec::new();

    for (element_index, element) in column.elements.iter().enumerate() {
        let element_type = element.element_type.clone().unwrap_or_default();
        let count = element.count.unwrap_or(1);
        for _ in 0..count {
            let occurrence = bump(&mut counters, &element_type);
            let key = PoolKey {
                section: ctx.index,
                column: column_index,
                occurrence,
            };
            modules.push(compile_element(element, element_index, key, ctx));
        }
    }

    Node::column()
        .with_attr(ATTR_WIDTH, width.fraction_token())
        .with_attr("vertical_align", "top")
        .with_children(modules)
}

fn bump(counters: &mut Vec<(String, usize)>, element_type: &str) -> usize {
    for (ty, count) in counters.iter_mut() {
        if ty == element_type {
            let current = *count;
            *count += 1;
            return current;
        }
    }
    counters.push((element_type.to_owned(), 1));
    0
}

fn compile_element(
    element: &ElementAst,
    element_index: usize,
    key: PoolKey,
    ctx: &SectionContext,
) -> Node {
    let element_type = element.element_type.as_deref().unwrap_or("body_text");
    let module_type = normalize_slug(module_for_element(element_type));
    let variant = element.variant.as_deref().unwrap_or("default");
    let featured = variant == "featured" || key.column == 1;

    let mut attrs = if element.content.is_empty() {
        fallback_content(&ContentRequest {
            module_type: &module_type,
            element_type,
            role: element.role.as_deref(),
            section_type: &ctx.section_type,
            is_first_section: ctx.is_first,
            featured,
            key,
        })
    } else {
        map_payload(&module_type, element_type, element, element_index, ctx)
    };

    apply_variant_styling(&mut attrs, &module_type, variant, featured, ctx.preset);

    let mut node = Node::module(module_type);
    node.attrs = attrs;
    node
}

/// Maps a model-supplied content payload onto the target module's attribute
/// names. Recognized keys transfer 1:1; unknown keys are dropped.
fn map_payload(
    module_type: &str,
    element_type: &str,
    element: &ElementAst,
    element_index: usize,
    ctx: &SectionContext,
) -> AttrMap {
    let content = &element.content;
    let style = &element.style;
    let text = |key: &str, fallback: &str| -> Value {
        content
            .get(key)
            .cloned()
            .unwrap_or_else(|| json!(fallback))
    };

    let mut attrs = match module_type {
        "heading" => {
            let is_headline = element_type == "headline";
            let mut attrs = object(json!({
                "text": text("text", "Heading"),
                "level": if is_headline { "h2" } else { "h3" },
                "font_size": style.get("font_size").cloned()
                    .unwrap_or_else(|| json!(if is_headline { 42 } else { 24 })),
                "font_weight": style.get("font_weight").cloned().unwrap_or_else(|| json!("700")),
                "text_color": style.get("text_color").cloned().unwrap_or_else(|| json!("#111827")),
            }));
            // The first headline of the first section is the page's h1.
            if is_headline && ctx.is_first && element_index <= 1 {
                attrs.insert("level".to_owned(), json!("h1"));
                attrs.insert(
                    "font_size".to_owned(),
                    style.get("font_size").cloned().unwrap_or_else(|| json!(52)),
                );
            }
            attrs
        }
        "text" => {
            let body = content
                .get("text")
                .or_else(|| content.get("description"))
                .and_then(Value::as_str)
                .unwrap_or("Text content");
            object(json!({
                "content": format!("<p>{body}</p>"),
                "font_size": style.get("font_size").cloned().unwrap_or_else(|| json!(16)),
                "text_color": style.get("text_color").cloned().unwrap_or_else(|| json!("#4b5563")),
                "line_height": 1.6,
            }))
        }
        "button" => object(json!({
            "text": text("text", "Click Here"),
            "link_url": text("url", "#"),
            "button_style": if element_type == "cta_primary" { "filled" } else { "outlined" },
            "size": "large",
            "background_color": style.get("background_color").cloned()
                .unwrap_or_else(|| json!("#4f46e5")),
            "text_color": style.get("text_color").cloned().unwrap_or_else(|| json!("#ffffff")),
        })),
        "blurb" => object(json!({
            "title": text("title", "Feature"),
            "content": text("description", "Feature description"),
            "font_icon": text("icon", "star"),
            "icon_color": style.get("text_color").cloned().unwrap_or_else(|| json!("#4f46e5")),
        })),
        "testimonial" => object(json!({
            "content": text("text", "Great product!"),
            "author": text("author", "Customer"),
            "job_title": text("role", ""),
            "company": text("company", ""),
        })),
        "number_counter" => {
            let value = content.get("value").cloned().unwrap_or_else(|| json!("100"));
            let percent = value.as_str().is_some_and(|v| v.contains('%'));
            object(json!({
                "number": value,
                "title": text("label", "Stat"),
                "percent_sign": percent,
            }))
        }
        "pricing_table" => {
            let features = content
                .get("features")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .unwrap_or_else(|| "Feature 1\nFeature 2\nFeature 3".to_owned());
            object(json!({
                "title": text("title", "Plan"),
                "price": text("price", "$0"),
                "period": text("period", "/month"),
                "content": features,
                "button_text": "Get Started",
            }))
        }
        "accordion" => object(json!({
            "title": text("question", "Question?"),
            "content": text("answer", "Answer."),
            "open": false,
        })),
        "image" => {
            let prompt = content
                .get("image_prompt")
                .and_then(Value::as_str)
                .unwrap_or("Image");
            object(json!({
                "src": format!(
                    "https://placehold.co/800x600/e2e8f0/64748b?text={}",
                    urlencoding::encode(prompt)
                ),
                "alt": prompt,
                "width": "100%",
            }))
        }
        _ => {
            let body = content
                .get("text")
                .or_else(|| content.get("description"))
                .cloned()
                .unwrap_or_else(|| json!("Content"));
            object(json!({ "content": body }))
        }
    };

    // Style overrides shared by every module type.
    for key in ["background_color", "padding", "border_radius"] {
        if let Some(value) = style.get(key) {
            attrs.insert(key.to_owned(), value.clone());
        }
    }
    if let Some(color) = style.get("text_color") {
        attrs
            .entry("text_color".to_owned())
            .or_insert_with(|| color.clone());
    }
    attrs
}

/// Merges style-preset adjustments keyed by module type and declared
/// variant on top of the content attrs.
fn apply_variant_styling(
    attrs: &mut AttrMap,
    module_type: &str,
    variant: &str,
    featured: bool,
    preset: StylePreset,
) {
    match module_type {
        "pricing_table" if featured || variant == "featured" => {
            let palette = preset.palette();
            attrs.insert("featured".to_owned(), json!(true));
            attrs.insert("card_background".to_owned(), json!(palette.primary));
            attrs.insert("title_color".to_owned(), json!("#FFFFFF"));
            attrs.insert("price_color".to_owned(), json!("#FFFFFF"));
        }
        "button" => {
            let radius = preset.control_radius();
            attrs.entry("border_radius".to_owned()).or_insert_with(|| {
                json!({
                    "top_left": radius,
                    "top_right": radius,
                    "bottom_right": radius,
                    "bottom_left": radius,
                })
            });
        }
        "blurb" => {
            attrs
                .entry("icon_color".to_owned())
                .or_insert_with(|| json!(preset.palette().primary));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PageAst;
    use crate::observe::NullRecorder;

    fn options() -> CompileOptions<'static> {
        CompileOptions {
            style: StylePreset::Modern,
            industry: Industry::Generic,
            recorder: &NullRecorder,
        }
    }

    #[test]
    fn unknown_element_types_become_text_modules() {
        assert_eq!(module_for_element("hologram"), "text");
        assert_eq!(module_for_element("faq_item"), "accordion");
    }

    #[test]
    fn high_weight_heroes_compile_dark() {
        let ast = PageAst::from_json(
            r#"{"sections":[{"type":"hero","visual_weight":"high",
                "columns":[{"width":12,"elements":[{"type":"headline"}]}]}]}"#,
        )
        .unwrap();
        let sections = compile(&ast, &options());
        let section = &sections[0];
        assert_eq!(section.attr_str("_visual_context"), Some("DARK"));
        assert_eq!(section.attr_str("background_color"), Some("#1a1a2e"));
        let heading = &section.children[0].children[0].children[0];
        assert_eq!(heading.attr_str("level"), Some("h1"));
    }

    #[test]
    fn count_expands_into_distinct_siblings() {
        let ast = PageAst::from_json(
            r#"{"sections":[{"type":"features","columns":[
                {"width":12,"elements":[{"type":"blurb","count":3}]}]}]}"#,
        )
        .unwrap();
        let sections = compile(&ast, &options());
        let column = &sections[0].children[0].children[0];
        assert_eq!(column.children.len(), 3);
        let titles: Vec<&str> = column
            .children
            .iter()
            .map(|m| m.attr_str("title").unwrap())
            .collect();
        let mut unique = titles.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }
}
