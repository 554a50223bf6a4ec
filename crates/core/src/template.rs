//! Static section templates used when a region arrives with no structure of
//! its own: per-industry home pages, defaults for common named pages, and
//! the stock header/footer bars.
//!
//! Module references are a tagged variant rather than a bare string or map:
//! a template either names a type (`Simple`) or pins attributes, a semantic
//! role and an explicit column (`Detailed`).

use serde::{Deserialize, Serialize};
use sitewright_style::Industry;
use sitewright_types::AttrMap;

/// Reference to a content module inside a coarse section description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleRef {
    /// Just a type name; attributes come from the capability registry.
    Simple(String),
    /// A type with explicit attributes, role and/or column placement.
    Detailed {
        #[serde(rename = "type")]
        module_type: String,
        #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
        attrs: AttrMap,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<usize>,
    },
}

impl ModuleRef {
    pub fn module_type(&self) -> &str {
        match self {
            ModuleRef::Simple(name) => name,
            ModuleRef::Detailed { module_type, .. } => module_type,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            ModuleRef::Simple(_) => None,
            ModuleRef::Detailed { column, .. } => *column,
        }
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            ModuleRef::Simple(_) => None,
            ModuleRef::Detailed { role, .. } => role.as_deref(),
        }
    }

    pub fn attrs(&self) -> Option<&AttrMap> {
        match self {
            ModuleRef::Simple(_) => None,
            ModuleRef::Detailed { attrs, .. } => Some(attrs),
        }
    }
}

/// A coarse, not-yet-expanded section: blueprint, layout string and the
/// modules to distribute over its columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoarseSection {
    pub blueprint: String,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default)]
    pub modules: Vec<ModuleRef>,
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub attrs: AttrMap,
}

fn default_layout() -> String {
    "1".to_owned()
}

impl CoarseSection {
    pub fn new(blueprint: &str, layout: &str, modules: Vec<ModuleRef>) -> Self {
        Self {
            blueprint: blueprint.to_owned(),
            layout: layout.to_owned(),
            modules,
            attrs: AttrMap::new(),
        }
    }
}

/// A coarse header/footer bar: a flat module list over a layout string, one
/// module per column.
#[derive(Debug, Clone, PartialEq)]
pub struct CoarseBar {
    pub modules: Vec<ModuleRef>,
    pub layout: String,
}

// Template construction helpers.

fn m(module_type: &str) -> ModuleRef {
    ModuleRef::Simple(module_type.to_owned())
}

fn role(module_type: &str, role: &str) -> ModuleRef {
    ModuleRef::Detailed {
        module_type: module_type.to_owned(),
        attrs: AttrMap::new(),
        role: Some(role.to_owned()),
        column: None,
    }
}

fn placed(module_type: &str, role_name: &str, column: usize) -> ModuleRef {
    ModuleRef::Detailed {
        module_type: module_type.to_owned(),
        attrs: AttrMap::new(),
        role: Some(role_name.to_owned()),
        column: Some(column),
    }
}

fn col(module_type: &str, column: usize) -> ModuleRef {
    ModuleRef::Detailed {
        module_type: module_type.to_owned(),
        attrs: AttrMap::new(),
        role: None,
        column: Some(column),
    }
}

/// Stock header: logo, menu, action button over a 1/4 · 1/2 · 1/4 split.
pub fn default_header() -> CoarseBar {
    CoarseBar {
        modules: vec![m("site_logo"), m("menu"), m("button")],
        layout: "1_4,1_2,1_4".to_owned(),
    }
}

/// Stock footer: logo, menu, social icons and a text blurb over four equal
/// columns.
pub fn default_footer() -> CoarseBar {
    CoarseBar {
        modules: vec![m("site_logo"), m("menu"), m("social_icons"), m("text")],
        layout: "1_4,1_4,1_4,1_4".to_owned(),
    }
}

/// Default template for a named page, industry-aware for `home` and for
/// pages with no template of their own.
pub fn page_template(page: &str, industry: Industry) -> Vec<CoarseSection> {
    match page {
        "about" => vec![
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("heading", "page_title", 0),
                    placed("text", "about_text", 0),
                    placed("image", "about_image", 1),
                ],
            ),
            CoarseSection::new(
                "team",
                "1_3,1_3,1_3",
                vec![col("team_member", 0), col("team_member", 1), col("team_member", 2)],
            ),
        ],
        "services" => vec![
            CoarseSection::new(
                "hero",
                "1",
                vec![role("heading", "page_title"), role("text", "page_intro")],
            ),
            CoarseSection::new(
                "services",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "service", 0),
                    placed("blurb", "service", 1),
                    placed("blurb", "service", 2),
                ],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![role("heading", "cta_title"), role("button", "cta_button")],
            ),
        ],
        "contact" => vec![
            CoarseSection::new(
                "contact",
                "1_2,1_2",
                vec![
                    placed("heading", "page_title", 0),
                    placed("text", "contact_info", 0),
                    placed("contact_form", "form", 1),
                ],
            ),
            CoarseSection::new("map", "1", vec![role("map", "location")]),
        ],
        "pricing" => vec![
            CoarseSection::new(
                "pricing",
                "1_3,1_3,1_3",
                vec![
                    role("heading", "section_title"),
                    col("pricing_table", 0),
                    col("pricing_table", 1),
                    col("pricing_table", 2),
                ],
            ),
            CoarseSection::new(
                "faq",
                "1",
                vec![role("heading", "faq_title"), role("accordion", "faq_items")],
            ),
        ],
        "faq" => vec![
            CoarseSection::new(
                "faq",
                "1",
                vec![
                    role("heading", "page_title"),
                    role("text", "page_intro"),
                    role("accordion", "faq_items"),
                ],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![role("heading", "cta_title"), role("button", "cta_button")],
            ),
        ],
        "blog" => vec![CoarseSection::new(
            "blog",
            "1",
            vec![role("heading", "page_title"), role("blog", "posts_grid")],
        )],
        "team" => vec![
            CoarseSection::new(
                "team",
                "1",
                vec![role("heading", "page_title"), role("text", "page_intro")],
            ),
            CoarseSection::new(
                "team_grid",
                "1_4,1_4,1_4,1_4",
                vec![
                    col("team_member", 0),
                    col("team_member", 1),
                    col("team_member", 2),
                    col("team_member", 3),
                ],
            ),
        ],
        _ => industry_home(industry),
    }
}

/// Industry-specific home page structures. Each industry leads with a hero
/// and ends on a conversion section, with its own emphasis in between.
pub fn industry_home(industry: Industry) -> Vec<CoarseSection> {
    match industry {
        Industry::Technology => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "subheadline", 0),
                    placed("button", "primary_cta", 0),
                    placed("image", "hero_image", 1),
                ],
            ),
            CoarseSection::new(
                "trust_logos",
                "1",
                vec![role("heading", "trust_title"), role("gallery", "logo_strip")],
            ),
            CoarseSection::new(
                "stats",
                "1_4,1_4,1_4,1_4",
                vec![
                    col("number_counter", 0),
                    col("number_counter", 1),
                    col("number_counter", 2),
                    col("number_counter", 3),
                ],
            ),
            CoarseSection::new(
                "features",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "feature", 0),
                    placed("blurb", "feature", 1),
                    placed("blurb", "feature", 2),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1_3,1_3,1_3",
                vec![col("testimonial", 0), col("testimonial", 1), col("testimonial", 2)],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![
                    role("heading", "cta_title"),
                    role("text", "cta_text"),
                    role("button", "cta_button"),
                ],
            ),
        ],
        Industry::Healthcare => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "subheadline", 0),
                    placed("button", "appointment_cta", 0),
                    placed("image", "hero_image", 1),
                ],
            ),
            CoarseSection::new(
                "services",
                "1_4,1_4,1_4,1_4",
                vec![
                    placed("blurb", "service", 0),
                    placed("blurb", "service", 1),
                    placed("blurb", "service", 2),
                    placed("blurb", "service", 3),
                ],
            ),
            CoarseSection::new(
                "team",
                "1_3,1_3,1_3",
                vec![col("team_member", 0), col("team_member", 1), col("team_member", 2)],
            ),
            CoarseSection::new(
                "testimonials",
                "1_2,1_2",
                vec![col("testimonial", 0), col("testimonial", 1)],
            ),
            CoarseSection::new(
                "contact",
                "1_2,1_2",
                vec![
                    placed("heading", "contact_title", 0),
                    placed("text", "contact_info", 0),
                    placed("contact_form", "form", 1),
                ],
            ),
        ],
        Industry::Restaurant => vec![
            CoarseSection::new(
                "hero",
                "1",
                vec![
                    role("heading", "h1_title"),
                    role("text", "tagline"),
                    role("button", "reservation_cta"),
                ],
            ),
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("image", "chef_image", 0),
                    placed("heading", "about_title", 1),
                    placed("text", "about_text", 1),
                ],
            ),
            CoarseSection::new(
                "menu",
                "1_2,1_2",
                vec![
                    placed("heading", "menu_title", 0),
                    placed("pricing_table", "menu_items", 0),
                    placed("pricing_table", "menu_items", 1),
                ],
            ),
            CoarseSection::new(
                "gallery",
                "1",
                vec![role("heading", "gallery_title"), role("gallery", "food_gallery")],
            ),
            CoarseSection::new(
                "testimonials",
                "1_3,1_3,1_3",
                vec![col("testimonial", 0), col("testimonial", 1), col("testimonial", 2)],
            ),
            CoarseSection::new(
                "contact",
                "1_2,1_2",
                vec![
                    placed("map", "location", 0),
                    placed("heading", "hours_title", 1),
                    placed("text", "hours_info", 1),
                    placed("button", "reservation_cta", 1),
                ],
            ),
        ],
        Industry::Ecommerce => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "promo_text", 0),
                    placed("button", "shop_cta", 0),
                    placed("image", "promo_image", 1),
                ],
            ),
            CoarseSection::new(
                "categories",
                "1_4,1_4,1_4,1_4",
                vec![
                    placed("blurb", "category", 0),
                    placed("blurb", "category", 1),
                    placed("blurb", "category", 2),
                    placed("blurb", "category", 3),
                ],
            ),
            CoarseSection::new(
                "products",
                "1",
                vec![role("heading", "featured_title"), role("shop", "featured_products")],
            ),
            CoarseSection::new(
                "features",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "benefit", 0),
                    placed("blurb", "benefit", 1),
                    placed("blurb", "benefit", 2),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1_2,1_2",
                vec![col("testimonial", 0), col("testimonial", 1)],
            ),
            CoarseSection::new(
                "newsletter",
                "1",
                vec![
                    role("heading", "newsletter_title"),
                    role("text", "newsletter_text"),
                    role("contact_form", "subscribe_form"),
                ],
            ),
        ],
        Industry::RealEstate => vec![
            CoarseSection::new(
                "hero",
                "1",
                vec![
                    role("heading", "h1_title"),
                    role("text", "tagline"),
                    role("search", "property_search"),
                ],
            ),
            CoarseSection::new(
                "stats",
                "1_3,1_3,1_3",
                vec![
                    placed("number_counter", "stat", 0),
                    placed("number_counter", "stat", 1),
                    placed("number_counter", "stat", 2),
                ],
            ),
            CoarseSection::new(
                "properties",
                "1_3,1_3,1_3",
                vec![
                    role("heading", "featured_title"),
                    placed("blurb", "property", 0),
                    placed("blurb", "property", 1),
                    placed("blurb", "property", 2),
                ],
            ),
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("image", "agent_image", 0),
                    placed("heading", "about_title", 1),
                    placed("text", "about_text", 1),
                    placed("button", "contact_cta", 1),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1_2,1_2",
                vec![col("testimonial", 0), col("testimonial", 1)],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![role("heading", "cta_title"), role("button", "cta_button")],
            ),
        ],
        Industry::Legal => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "tagline", 0),
                    placed("button", "consultation_cta", 0),
                    placed("image", "hero_image", 1),
                ],
            ),
            CoarseSection::new(
                "services",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "practice_area", 0),
                    placed("blurb", "practice_area", 1),
                    placed("blurb", "practice_area", 2),
                ],
            ),
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("heading", "about_title", 0),
                    placed("text", "about_text", 0),
                    placed("image", "office_image", 1),
                ],
            ),
            CoarseSection::new(
                "team",
                "1_3,1_3,1_3",
                vec![
                    placed("team_member", "attorney", 0),
                    placed("team_member", "attorney", 1),
                    placed("team_member", "attorney", 2),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1",
                vec![
                    role("heading", "testimonial_title"),
                    role("slider", "testimonial_slider"),
                ],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![
                    role("heading", "cta_title"),
                    role("text", "cta_text"),
                    role("button", "consultation_cta"),
                ],
            ),
        ],
        Industry::Education => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "tagline", 0),
                    placed("button", "enroll_cta", 0),
                    placed("image", "hero_image", 1),
                ],
            ),
            CoarseSection::new(
                "stats",
                "1_4,1_4,1_4,1_4",
                vec![
                    placed("number_counter", "students", 0),
                    placed("number_counter", "courses", 1),
                    placed("number_counter", "instructors", 2),
                    placed("number_counter", "success_rate", 3),
                ],
            ),
            CoarseSection::new(
                "courses",
                "1_3,1_3,1_3",
                vec![
                    role("heading", "courses_title"),
                    placed("blurb", "course", 0),
                    placed("blurb", "course", 1),
                    placed("blurb", "course", 2),
                ],
            ),
            CoarseSection::new(
                "features",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "benefit", 0),
                    placed("blurb", "benefit", 1),
                    placed("blurb", "benefit", 2),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1_2,1_2",
                vec![col("testimonial", 0), col("testimonial", 1)],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![role("heading", "cta_title"), role("button", "enroll_cta")],
            ),
        ],
        Industry::Fitness => vec![
            CoarseSection::new(
                "hero",
                "1",
                vec![
                    role("heading", "h1_title"),
                    role("text", "motivation_text"),
                    role("button", "join_cta"),
                ],
            ),
            CoarseSection::new(
                "features",
                "1_4,1_4,1_4,1_4",
                vec![
                    placed("blurb", "class", 0),
                    placed("blurb", "class", 1),
                    placed("blurb", "class", 2),
                    placed("blurb", "class", 3),
                ],
            ),
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("image", "gym_image", 0),
                    placed("heading", "about_title", 1),
                    placed("text", "about_text", 1),
                ],
            ),
            CoarseSection::new(
                "team",
                "1_3,1_3,1_3",
                vec![
                    placed("team_member", "trainer", 0),
                    placed("team_member", "trainer", 1),
                    placed("team_member", "trainer", 2),
                ],
            ),
            CoarseSection::new(
                "pricing",
                "1_3,1_3,1_3",
                vec![col("pricing_table", 0), col("pricing_table", 1), col("pricing_table", 2)],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![role("heading", "cta_title"), role("button", "trial_cta")],
            ),
        ],
        Industry::Agency => vec![
            CoarseSection::new(
                "hero",
                "1",
                vec![role("heading", "h1_title"), role("text", "tagline")],
            ),
            CoarseSection::new(
                "portfolio",
                "1",
                vec![role("heading", "work_title"), role("portfolio", "featured_work")],
            ),
            CoarseSection::new(
                "services",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "service", 0),
                    placed("blurb", "service", 1),
                    placed("blurb", "service", 2),
                ],
            ),
            CoarseSection::new(
                "trust_logos",
                "1",
                vec![role("heading", "clients_title"), role("gallery", "client_logos")],
            ),
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("heading", "about_title", 0),
                    placed("text", "about_text", 0),
                    placed("image", "team_image", 1),
                ],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![role("heading", "cta_title"), role("button", "contact_cta")],
            ),
        ],
        Industry::Nonprofit => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "mission_text", 0),
                    placed("button", "donate_cta", 0),
                    placed("image", "hero_image", 1),
                ],
            ),
            CoarseSection::new(
                "stats",
                "1_3,1_3,1_3",
                vec![
                    placed("number_counter", "impact_stat", 0),
                    placed("number_counter", "impact_stat", 1),
                    placed("number_counter", "impact_stat", 2),
                ],
            ),
            CoarseSection::new(
                "about",
                "1_2,1_2",
                vec![
                    placed("image", "mission_image", 0),
                    placed("heading", "about_title", 1),
                    placed("text", "about_text", 1),
                ],
            ),
            CoarseSection::new(
                "features",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "program", 0),
                    placed("blurb", "program", 1),
                    placed("blurb", "program", 2),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1",
                vec![role("heading", "stories_title"), role("slider", "success_stories")],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![
                    role("heading", "cta_title"),
                    role("text", "cta_text"),
                    role("button", "donate_cta"),
                ],
            ),
        ],
        Industry::Generic => vec![
            CoarseSection::new(
                "hero",
                "1_2,1_2",
                vec![
                    placed("heading", "h1_title", 0),
                    placed("text", "subheadline", 0),
                    placed("button", "primary_cta", 0),
                    placed("image", "hero_image", 1),
                ],
            ),
            CoarseSection::new(
                "features",
                "1_3,1_3,1_3",
                vec![
                    placed("blurb", "feature", 0),
                    placed("blurb", "feature", 1),
                    placed("blurb", "feature", 2),
                ],
            ),
            CoarseSection::new(
                "testimonials",
                "1_2,1_2",
                vec![col("testimonial", 0), col("testimonial", 1)],
            ),
            CoarseSection::new(
                "cta",
                "1",
                vec![
                    role("heading", "cta_title"),
                    role("text", "cta_text"),
                    role("button", "cta_button"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_industry_home_starts_with_a_hero() {
        for industry in Industry::ALL {
            let sections = industry_home(industry);
            assert!(!sections.is_empty());
            assert_eq!(sections[0].blueprint, "hero", "{industry} home");
        }
    }

    #[test]
    fn unknown_pages_fall_back_to_the_industry_home() {
        let fallback = page_template("landing", Industry::Generic);
        assert_eq!(fallback, industry_home(Industry::Generic));
    }
}
