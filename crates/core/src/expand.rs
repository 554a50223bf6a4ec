//! Expands a coarse region/page description into a fully shaped
//! section → row → column → module tree.
//!
//! Each region either passes through already-formed sections (back-filling
//! the `_pattern` blueprint, inferring it for pages when absent) or is
//! synthesized from the static template tables. Synthesis packs the
//! section's layout into rows, distributes modules over the packed columns
//! and seeds module attributes from the capability registry.

use crate::grid;
use crate::observe::Recorder;
use crate::registry::ModuleRegistry;
use crate::template::{self, CoarseBar, CoarseSection, ModuleRef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sitewright_style::Industry;
use sitewright_types::node::{ATTR_PATTERN, ATTR_ROLE, ATTR_WIDTH};
use sitewright_types::{Node, Region, layout_string, normalize_slug, parse_layout};

/// Structural input for one region, in whichever shape the upstream source
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionInput {
    /// Fully formed section nodes; passed through with blueprint backfill.
    Sections { sections: Vec<Node> },
    /// Coarse per-section descriptions (pages).
    Outline { sections: Vec<CoarseSection> },
    /// A flat module list over one layout string (headers/footers).
    Bar {
        modules: Vec<ModuleRef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<String>,
    },
}

/// The full structural input of a compilation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<RegionInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<RegionInput>,
    #[serde(default)]
    pub pages: IndexMap<String, RegionInput>,
}

/// One expanded page: a title plus its section nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDoc {
    pub title: String,
    pub sections: Vec<Node>,
}

/// The expanded (and later, addressed) document tree for a whole site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    pub header: Vec<Node>,
    pub footer: Vec<Node>,
    pub pages: IndexMap<String, PageDoc>,
}

impl Skeleton {
    /// Regions in document order: header, footer, then pages as declared.
    pub fn regions(&self) -> Vec<(Region, &Vec<Node>)> {
        let mut regions = vec![
            (Region::Header, &self.header),
            (Region::Footer, &self.footer),
        ];
        for (name, page) in &self.pages {
            regions.push((Region::page(name.clone()), &page.sections));
        }
        regions
    }

    pub fn section_count(&self) -> usize {
        self.regions().iter().map(|(_, sections)| sections.len()).sum()
    }
}

pub struct ExpandOptions<'a> {
    pub industry: Industry,
    pub registry: &'a dyn ModuleRegistry,
    pub recorder: &'a dyn Recorder,
}

/// Expands every requested region into a [`Skeleton`]. Missing regions are
/// synthesized from the template tables; nothing here can fail.
pub fn expand(input: &SiteInput, pages: &[String], opts: &ExpandOptions) -> Skeleton {
    let mut skeleton = Skeleton::default();

    skeleton.header = expand_region(input.header.as_ref(), &Region::Header, opts);
    skeleton.footer = expand_region(input.footer.as_ref(), &Region::Footer, opts);

    for name in pages {
        let region = Region::page(name.clone());
        let sections = expand_region(input.pages.get(name), &region, opts);
        skeleton.pages.insert(
            name.clone(),
            PageDoc {
                title: capitalize(name),
                sections,
            },
        );
    }

    opts.recorder.record(
        "expand.site",
        &[
            ("pages", &pages.len().to_string()),
            ("sections", &skeleton.section_count().to_string()),
        ],
    );
    skeleton
}

fn expand_region(input: Option<&RegionInput>, region: &Region, opts: &ExpandOptions) -> Vec<Node> {
    let sections = match (input, region) {
        (Some(RegionInput::Sections { sections }), _) => {
            let mut sections = sections.clone();
            backfill_patterns(&mut sections, region);
            sections
        }
        (Some(RegionInput::Outline { sections }), _) => expand_sections(sections, opts),
        (Some(RegionInput::Bar { modules, layout }), _) => {
            vec![expand_bar(
                &CoarseBar {
                    modules: modules.clone(),
                    layout: layout.clone().unwrap_or_else(|| default_bar_layout(region)),
                },
                region,
                opts,
            )]
        }
        (None, Region::Header) => vec![expand_bar(&template::default_header(), region, opts)],
        (None, Region::Footer) => vec![expand_bar(&template::default_footer(), region, opts)],
        (None, Region::Page(name)) => {
            let coarse = template::page_template(name, opts.industry);
            expand_sections(&coarse, opts)
        }
    };

    opts.recorder.record(
        "expand.region",
        &[
            ("region", region.path_segment()),
            ("sections", &sections.len().to_string()),
        ],
    );
    sections
}

fn default_bar_layout(region: &Region) -> String {
    match region {
        Region::Footer => template::default_footer().layout,
        _ => template::default_header().layout,
    }
}

/// Fills in the `_pattern` blueprint on pass-through sections. Header and
/// footer sections take the region's own name; page sections without a
/// blueprint go through pattern inference.
fn backfill_patterns(sections: &mut [Node], region: &Region) {
    for (index, section) in sections.iter_mut().enumerate() {
        if section.pattern().is_some() {
            continue;
        }
        let blueprint = match region {
            Region::Header => "header".to_owned(),
            Region::Footer => "footer".to_owned(),
            Region::Page(_) => infer_blueprint(section, index),
        };
        section.set_attr(ATTR_PATTERN, blueprint);
    }
}

/// Best-effort blueprint classifier over the module types nested in a
/// section. The precedence order is part of the engine's contract: changing
/// it silently changes downstream style selection.
pub fn infer_blueprint(section: &Node, index: usize) -> String {
    let mut types = Vec::new();
    section.collect_module_types(&mut types);

    let has = |ty: &str| types.iter().any(|t| t == ty);
    let count = |ty: &str| types.iter().filter(|t| *t == ty).count();

    if index == 0 && has("heading") && (has("button") || has("text")) {
        return "hero".to_owned();
    }
    if count("number_counter") >= 3 {
        return "stats".to_owned();
    }
    if count("blurb") >= 3 {
        return "features".to_owned();
    }
    if has("testimonial") {
        return "testimonials".to_owned();
    }
    if has("pricing_table") {
        return "pricing".to_owned();
    }
    if has("team_member") {
        return "team".to_owned();
    }
    if has("contact_form") {
        return "contact".to_owned();
    }
    if has("heading") && has("button") && index > 2 {
        return "cta".to_owned();
    }
    if has("gallery") {
        return "gallery".to_owned();
    }
    format!("section_{index}")
}

fn expand_sections(coarse: &[CoarseSection], opts: &ExpandOptions) -> Vec<Node> {
    coarse.iter().map(|cs| expand_section(cs, opts)).collect()
}

fn expand_section(cs: &CoarseSection, opts: &ExpandOptions) -> Node {
    let widths = parse_layout(&cs.layout);
    let buckets = distribute(&cs.modules, widths.len());

    let mut rows = Vec::new();
    let mut column_cursor = 0usize;
    for length in grid::row_lengths(&widths) {
        let row_widths = &widths[column_cursor..column_cursor + length];
        let mut columns = Vec::new();
        for (offset, width) in row_widths.iter().enumerate() {
            let modules = buckets[column_cursor + offset]
                .iter()
                .map(|module_ref| create_module(module_ref, opts.registry))
                .collect();
            columns.push(
                Node::column()
                    .with_attr(ATTR_WIDTH, width.fraction_token())
                    .with_children(modules),
            );
        }
        rows.push(
            Node::row()
                .with_attr("columns", layout_string(row_widths))
                .with_children(columns),
        );
        column_cursor += length;
    }

    let (top, bottom) = section_padding(&cs.blueprint);
    let mut section = Node::section()
        .with_attr(ATTR_PATTERN, cs.blueprint.clone())
        .with_attr("padding", padding_value(top, bottom))
        .with_children(rows);
    for (key, value) in &cs.attrs {
        section.set_attr(key, value.clone());
    }
    section
}

/// Distributes modules over `ncols` columns: explicit column tags win
/// (clamped into range), untagged modules are split into even sequential
/// chunks.
fn distribute(modules: &[ModuleRef], ncols: usize) -> Vec<Vec<ModuleRef>> {
    let mut buckets = vec![Vec::new(); ncols.max(1)];
    let mut untagged = Vec::new();
    for module_ref in modules {
        match module_ref.column() {
            Some(column) => buckets[column.min(ncols - 1)].push(module_ref.clone()),
            None => untagged.push(module_ref.clone()),
        }
    }
    if !untagged.is_empty() {
        let chunk = untagged.len().div_ceil(ncols.max(1));
        for (bucket, slice) in buckets.iter_mut().zip(untagged.chunks(chunk)) {
            bucket.extend(slice.iter().cloned());
        }
    }
    buckets
}

/// Expands a header/footer bar: one module per column, in order.
fn expand_bar(bar: &CoarseBar, region: &Region, opts: &ExpandOptions) -> Node {
    let blueprint = region.path_segment();
    let widths = parse_layout(&bar.layout);

    let mut columns = Vec::new();
    for (index, width) in widths.iter().enumerate() {
        let modules = match bar.modules.get(index) {
            Some(module_ref) => vec![create_module(module_ref, opts.registry)],
            None => Vec::new(),
        };
        columns.push(
            Node::column()
                .with_attr(ATTR_WIDTH, width.fraction_token())
                .with_children(modules),
        );
    }

    let row = Node::row()
        .with_attr("columns", bar.layout.clone())
        .with_children(columns);

    let (top, bottom) = section_padding(blueprint);
    Node::section()
        .with_attr(ATTR_PATTERN, blueprint)
        .with_attr("padding", padding_value(top, bottom))
        .with_attr("fullwidth", true)
        .with_children(vec![row])
}

/// Instantiates a module node: registry defaults first, explicit attrs and
/// role on top.
fn create_module(module_ref: &ModuleRef, registry: &dyn ModuleRegistry) -> Node {
    let module_type = normalize_slug(module_ref.module_type());
    let mut node = Node::module(module_type.clone());

    for (field, def) in registry.fields(&module_type) {
        if let Some(default) = def.default {
            node.set_attr(&field, default);
        }
    }
    if let Some(attrs) = module_ref.attrs() {
        for (key, value) in attrs {
            node.set_attr(key, value.clone());
        }
    }
    if let Some(role) = module_ref.role() {
        node.set_attr(ATTR_ROLE, role);
    }
    node
}

/// Default vertical padding per blueprint, in pixels.
fn section_padding(blueprint: &str) -> (u32, u32) {
    match blueprint {
        "hero" => (120, 120),
        "cta" => (100, 100),
        "stats" => (60, 60),
        "trust_logos" => (40, 40),
        "header" => (20, 20),
        "footer" => (60, 30),
        _ => (80, 80),
    }
}

fn padding_value(top: u32, bottom: u32) -> serde_json::Value {
    json!({ "top": top, "right": 0, "bottom": bottom, "left": 0 })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::NullRecorder;
    use crate::registry::InMemoryModuleRegistry;

    fn options(registry: &InMemoryModuleRegistry) -> ExpandOptions<'_> {
        ExpandOptions {
            industry: Industry::Technology,
            registry,
            recorder: &NullRecorder,
        }
    }

    #[test]
    fn inference_precedence_prefers_hero_then_stats() {
        let mut section = Node::section().with_children(vec![Node::row().with_children(vec![
            Node::column().with_children(vec![
                Node::module("heading"),
                Node::module("button"),
                Node::module("number_counter"),
                Node::module("number_counter"),
                Node::module("number_counter"),
            ]),
        ])]);
        assert_eq!(infer_blueprint(&section, 0), "hero");
        // Same content later in the page classifies as stats.
        assert_eq!(infer_blueprint(&section, 1), "stats");
        // Drop the counters below threshold and it falls through to cta.
        section.children[0].children[0].children.truncate(3);
        assert_eq!(infer_blueprint(&section, 3), "cta");
    }

    #[test]
    fn untagged_modules_split_evenly() {
        let registry = InMemoryModuleRegistry::new();
        let cs = CoarseSection::new(
            "features",
            "1_2,1_2",
            vec![
                ModuleRef::Simple("blurb".into()),
                ModuleRef::Simple("blurb".into()),
                ModuleRef::Simple("blurb".into()),
                ModuleRef::Simple("blurb".into()),
            ],
        );
        let section = expand_section(&cs, &options(&registry));
        let row = &section.children[0];
        assert_eq!(row.children.len(), 2);
        assert_eq!(row.children[0].children.len(), 2);
        assert_eq!(row.children[1].children.len(), 2);
    }

    #[test]
    fn default_regions_synthesize() {
        let registry = InMemoryModuleRegistry::new();
        let opts = options(&registry);
        let skeleton = expand(&SiteInput::default(), &["home".to_owned()], &opts);
        assert_eq!(skeleton.header.len(), 1);
        assert_eq!(skeleton.footer.len(), 1);
        assert_eq!(skeleton.pages["home"].title, "Home");
        // The technology home template leads with a hero.
        assert_eq!(skeleton.pages["home"].sections[0].pattern(), Some("hero"));
    }
}
