//! The style resolution engine: one pass per path in document order, then
//! the two cross-cutting passes (vertical rhythm and background
//! alternation) over the section metadata.
//!
//! Resolution layers, in precedence order: per-module base styles from the
//! (style preset × module type) table, contextual color overrides from the
//! section's visual context, creative overrides for the emphasis allow-list
//! and finally the rhythm/alternation adjustments.

mod creative;
mod modules;

pub use creative::{CREATIVE_SECTIONS, is_creative};
pub use modules::ModuleFlags;

use crate::assign::Assigned;
use crate::error::EngineError;
use crate::expand::Skeleton;
use crate::observe::Recorder;
use indexmap::IndexMap;
use itertools::Itertools as _;
use serde_json::{Value, json};
use sitewright_style::{ColorScheme, Industry, StylePreset, section_visual_context};
use sitewright_types::node::ATTR_ROLE;
use sitewright_types::{AttrMap, Node, PathKind, SectionMetaMap, parse_path};
use std::collections::HashMap;

/// Insertion-ordered mapping from path to resolved style attributes.
pub type StyleMap = IndexMap<String, AttrMap>;

pub struct ResolveOptions<'a> {
    pub style: StylePreset,
    pub industry: Industry,
    pub recorder: &'a dyn Recorder,
}

const HERO_BLUEPRINTS: &[&str] = &["hero", "fullwidth_hero"];
const CTA_BLUEPRINTS: &[&str] = &["cta", "call_to_action", "final_cta"];

/// Raised top padding for the emphasis gap above a call-to-action section
/// (the canonical hero → cta adjacency).
const RHYTHM_GAP_TOP: u32 = 140;

/// Resolves styles for every path in the map. The only failure is a missing
/// path map; malformed paths or unknown module types fall back, never error.
pub fn resolve(
    skeleton: &Skeleton,
    assigned: &Assigned,
    opts: &ResolveOptions,
) -> Result<StyleMap, EngineError> {
    if assigned.path_map.is_empty() {
        return Err(EngineError::MissingInput("path_map"));
    }

    let scheme = ColorScheme::new(opts.style, opts.industry);
    let roles = collect_roles(skeleton);
    let mut styles = StyleMap::new();

    for (path, id) in &assigned.path_map {
        let Some(info) = parse_path(path) else {
            continue;
        };
        let context = section_visual_context(&info.blueprint);
        let resolved = match info.kind {
            PathKind::Section => modules::section_styles(&info.blueprint, opts.style, context),
            PathKind::Column => modules::column_styles(opts.style),
            PathKind::Module => {
                let flags = modules::ModuleFlags {
                    blueprint: &info.blueprint,
                    context,
                    is_hero: HERO_BLUEPRINTS.contains(&info.blueprint.as_str()),
                    is_cta: CTA_BLUEPRINTS.contains(&info.blueprint.as_str()),
                    is_header: info.region.as_deref() == Some("header"),
                    is_footer: info.region.as_deref() == Some("footer"),
                    role: roles.get(id.as_str()).map(String::as_str),
                };
                let module_type = info.module_type.as_deref().unwrap_or_default();
                modules::module_styles(module_type, opts.style, &flags)
            }
        };
        styles.insert(path.clone(), resolved);
    }

    let mut creative_count = 0usize;
    for (path, meta) in &assigned.section_meta {
        let overrides =
            creative::section_overrides(&meta.blueprint, opts.style, opts.industry, &scheme);
        if let Some(overrides) = overrides {
            creative_count += 1;
            let entry = styles.entry(path.clone()).or_default();
            for (key, value) in overrides {
                entry.insert(key, value);
            }
        }
    }

    apply_rhythm(&mut styles, &assigned.section_meta);
    apply_alternation(&mut styles, &assigned.section_meta, opts.style, &scheme);

    opts.recorder.record(
        "resolve.styles",
        &[
            ("paths", &styles.len().to_string()),
            ("creative_sections", &creative_count.to_string()),
            ("style", opts.style.name()),
            ("industry", opts.industry.name()),
        ],
    );
    Ok(styles)
}

/// Index module roles by node id so path-level styling can see the semantic
/// role a template assigned.
fn collect_roles(skeleton: &Skeleton) -> HashMap<String, String> {
    let mut roles = HashMap::new();
    for (_, sections) in skeleton.regions() {
        for section in sections {
            collect_node_roles(section, &mut roles);
        }
    }
    roles
}

fn collect_node_roles(node: &Node, roles: &mut HashMap<String, String>) {
    if let (Some(id), Some(role)) = (&node.id, node.attr_str(ATTR_ROLE)) {
        roles.insert(id.as_str().to_owned(), role.to_owned());
    }
    for child in &node.children {
        collect_node_roles(child, roles);
    }
}

/// Vertical rhythm: a cta-family section with a predecessor takes the
/// raised emphasis gap as its top padding. Other transitions keep their
/// base padding; the gap below a hero comes from the hero's own creative
/// padding.
fn apply_rhythm(styles: &mut StyleMap, section_meta: &SectionMetaMap) {
    for (_, group) in &section_meta
        .iter()
        .filter(|(_, meta)| meta.page.is_some())
        .chunk_by(|(_, meta)| meta.page.clone())
    {
        for ((_, _), (path, meta)) in group.tuple_windows() {
            if !CTA_BLUEPRINTS.contains(&meta.blueprint.as_str()) {
                continue;
            }
            if let Some(attrs) = styles.get_mut(path) {
                set_top_padding(attrs, RHYTHM_GAP_TOP);
            }
        }
    }
}

fn set_top_padding(attrs: &mut AttrMap, top: u32) {
    match attrs.get_mut("padding") {
        Some(Value::Object(padding)) => {
            padding.insert("top".to_owned(), json!(top));
        }
        _ => {
            attrs.insert(
                "padding".to_owned(),
                json!({ "top": top, "right": 0, "bottom": top, "left": 0 }),
            );
        }
    }
}

/// Background alternation: plain sections alternate base → alt → base down
/// the page; creative sections keep their emphasis backgrounds, do not
/// count, and restart the alternation after themselves.
fn apply_alternation(
    styles: &mut StyleMap,
    section_meta: &SectionMetaMap,
    preset: StylePreset,
    scheme: &ColorScheme,
) {
    let palette = preset.palette();
    for (_, group) in &section_meta
        .iter()
        .filter(|(_, meta)| meta.page.is_some())
        .chunk_by(|(_, meta)| meta.page.clone())
    {
        let mut alternate = false;
        for (path, meta) in group {
            let entry = styles.entry(path.clone()).or_default();
            if creative::is_creative(&meta.blueprint) {
                ensure_creative_background(entry, &meta.blueprint, scheme);
                alternate = false;
                continue;
            }
            entry.insert("background_type".to_owned(), json!("color"));
            entry.insert(
                "background_color".to_owned(),
                json!(if alternate { palette.background_alt } else { palette.background }),
            );
            alternate = !alternate;
        }
    }
}

/// Creative sections always leave the pass with an explicit background
/// type, even when no creative override ran for their blueprint.
fn ensure_creative_background(attrs: &mut AttrMap, blueprint: &str, scheme: &ColorScheme) {
    if attrs.contains_key("background_type") {
        return;
    }
    if HERO_BLUEPRINTS.contains(&blueprint) || CTA_BLUEPRINTS.contains(&blueprint) {
        attrs.insert("background_type".to_owned(), json!("gradient"));
        attrs.insert("background_gradient_type".to_owned(), json!("linear"));
        attrs.insert("background_gradient_direction".to_owned(), json!(135));
        attrs.insert(
            "background_gradient_start".to_owned(),
            json!(scheme.primary),
        );
        attrs.insert(
            "background_gradient_end".to_owned(),
            json!(scheme.secondary),
        );
    } else {
        attrs.insert("background_type".to_owned(), json!("color"));
        attrs.insert("background_color".to_owned(), json!(scheme.dark));
    }
}
