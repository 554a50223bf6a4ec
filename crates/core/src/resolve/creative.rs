//! Creative overrides for the emphasis-section allow-list: hero, cta and
//! stats sections trade the plain background policy for industry- and
//! style-keyed gradients, overlays and padding.

use crate::object;
use serde_json::json;
use sitewright_style::{ColorScheme, Industry, StylePreset};
use sitewright_types::AttrMap;

/// Blueprints eligible for creative treatment. Everything else participates
/// in plain background alternation instead.
pub const CREATIVE_SECTIONS: &[&str] = &[
    "hero",
    "fullwidth_hero",
    "cta",
    "call_to_action",
    "final_cta",
    "stats",
    "counters",
];

pub fn is_creative(blueprint: &str) -> bool {
    CREATIVE_SECTIONS.contains(&blueprint)
}

/// Creative overrides for one section, dispatched on its blueprint family.
pub fn section_overrides(
    blueprint: &str,
    preset: StylePreset,
    industry: Industry,
    scheme: &ColorScheme,
) -> Option<AttrMap> {
    match blueprint {
        "hero" | "fullwidth_hero" => Some(hero_overrides(preset, industry, scheme)),
        "cta" | "call_to_action" | "final_cta" => Some(cta_overrides(preset, industry, scheme)),
        "stats" | "counters" => Some(stats_overrides(preset, industry, scheme)),
        _ => None,
    }
}

struct HeroEffect {
    angle: u32,
    radial: bool,
    overlay: Option<&'static str>,
    padding_top: u32,
}

fn hero_effect(industry: Industry) -> HeroEffect {
    let (angle, radial, overlay, padding_top) = match industry {
        Industry::Technology => (135, false, Some("rgba(0,0,0,0.1)"), 140),
        Industry::Healthcare => (180, false, None, 120),
        Industry::Restaurant => (0, true, Some("rgba(0,0,0,0.5)"), 200),
        Industry::Ecommerce => (135, false, None, 100),
        Industry::RealEstate => (180, false, Some("rgba(0,0,0,0.4)"), 180),
        Industry::Legal => (180, false, None, 120),
        Industry::Education => (135, false, None, 120),
        Industry::Fitness => (45, false, Some("rgba(0,0,0,0.6)"), 200),
        Industry::Agency => (135, true, None, 160),
        Industry::Nonprofit => (180, false, Some("rgba(0,0,0,0.3)"), 140),
        Industry::Generic => (135, false, None, 140),
    };
    HeroEffect {
        angle,
        radial,
        overlay,
        padding_top,
    }
}

fn hero_overrides(preset: StylePreset, industry: Industry, scheme: &ColorScheme) -> AttrMap {
    let effect = hero_effect(industry);
    let mut attrs = AttrMap::new();

    // The minimal preset keeps heroes flat; everything else gets a gradient.
    if preset != StylePreset::Minimal {
        let gradient = if effect.radial {
            format!(
                "radial-gradient(circle at 30% 50%, {} 0%, {} 100%)",
                scheme.primary, scheme.secondary
            )
        } else {
            style_gradient(preset, effect.angle, scheme)
        };
        attrs.insert("background_gradient".to_owned(), json!(gradient));
        attrs.insert("use_background_gradient".to_owned(), json!(true));
    }

    if let Some(overlay) = effect.overlay {
        attrs.insert("background_overlay".to_owned(), json!(overlay));
    } else if matches!(preset, StylePreset::Bold | StylePreset::Elegant) {
        attrs.insert("background_overlay".to_owned(), json!("rgba(0,0,0,0.4)"));
    }

    let top = effect.padding_top;
    attrs.insert("padding".to_owned(), padding_y(top, top));
    attrs.insert(
        "padding__tablet".to_owned(),
        padding_y(top * 3 / 4, top * 3 / 4),
    );
    attrs.insert("padding__phone".to_owned(), {
        json!({ "top": top / 2, "right": 20, "bottom": top / 2, "left": 20 })
    });
    attrs
}

fn style_gradient(preset: StylePreset, angle: u32, scheme: &ColorScheme) -> String {
    match preset {
        StylePreset::Bold => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.dark, scheme.primary
        ),
        StylePreset::Minimal => "linear-gradient(180deg, #F9FAFB 0%, #FFFFFF 100%)".to_owned(),
        StylePreset::Elegant => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.dark, scheme.secondary
        ),
        StylePreset::Playful => format!(
            "linear-gradient({angle}deg, {} 0%, {} 50%, {} 100%)",
            scheme.primary, scheme.secondary, scheme.accent
        ),
        StylePreset::Corporate => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.secondary, scheme.dark
        ),
        StylePreset::Dark => {
            format!("linear-gradient({angle}deg, #0f172a 0%, #1e293b 100%)")
        }
        _ => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.primary, scheme.secondary
        ),
    }
}

fn cta_overrides(preset: StylePreset, industry: Industry, scheme: &ColorScheme) -> AttrMap {
    let (angle, use_accent) = match industry {
        Industry::Technology => (135, false),
        Industry::Healthcare => (90, false),
        Industry::Restaurant => (45, true),
        Industry::Ecommerce => (135, true),
        Industry::RealEstate => (180, false),
        Industry::Legal => (180, false),
        Industry::Education => (135, true),
        Industry::Fitness => (45, true),
        Industry::Agency => (135, false),
        Industry::Nonprofit => (180, true),
        Industry::Generic => (135, false),
    };

    let gradient = match preset {
        StylePreset::Bold | StylePreset::Playful => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.accent, scheme.primary
        ),
        StylePreset::Elegant | StylePreset::Corporate => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.dark, scheme.secondary
        ),
        StylePreset::Dark => format!(
            "linear-gradient({angle}deg, {} 0%, #0f172a 100%)",
            scheme.primary
        ),
        _ if use_accent => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.accent, scheme.primary
        ),
        _ => format!(
            "linear-gradient({angle}deg, {} 0%, {} 100%)",
            scheme.primary, scheme.secondary
        ),
    };

    object(json!({
        "background_gradient": gradient,
        "use_background_gradient": true,
        "padding": padding_y(100, 100),
        "padding__tablet": padding_y(80, 80),
        "padding__phone": { "top": 60, "right": 20, "bottom": 60, "left": 20 },
    }))
}

fn stats_overrides(preset: StylePreset, industry: Industry, scheme: &ColorScheme) -> AttrMap {
    let (gradient, padding) = match industry {
        Industry::Technology => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                scheme.secondary, scheme.dark
            ),
            80,
        ),
        Industry::Healthcare => (
            format!(
                "linear-gradient(180deg, {} 0%, {} 100%)",
                scheme.secondary, scheme.primary
            ),
            60,
        ),
        Industry::Restaurant => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                scheme.dark, scheme.secondary
            ),
            60,
        ),
        Industry::Ecommerce => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                scheme.primary, scheme.accent
            ),
            60,
        ),
        Industry::RealEstate => (
            format!(
                "linear-gradient(180deg, {} 0%, {} 100%)",
                scheme.dark, scheme.secondary
            ),
            80,
        ),
        Industry::Legal => (
            format!(
                "linear-gradient(180deg, {} 0%, {} 100%)",
                scheme.secondary, scheme.dark
            ),
            60,
        ),
        Industry::Education => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                scheme.primary, scheme.secondary
            ),
            60,
        ),
        Industry::Fitness => (
            format!(
                "linear-gradient(45deg, {} 0%, {} 100%)",
                scheme.dark, scheme.primary
            ),
            80,
        ),
        Industry::Agency => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                scheme.dark, scheme.primary
            ),
            80,
        ),
        Industry::Nonprofit => (
            format!(
                "linear-gradient(180deg, {} 0%, {} 100%)",
                scheme.primary, scheme.secondary
            ),
            60,
        ),
        Industry::Generic => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                scheme.secondary, scheme.dark
            ),
            80,
        ),
    };

    let gradient = match preset {
        StylePreset::Minimal => "linear-gradient(180deg, #F3F4F6 0%, #E5E7EB 100%)".to_owned(),
        StylePreset::Dark => "linear-gradient(135deg, #1e293b 0%, #0f172a 100%)".to_owned(),
        _ => gradient,
    };

    object(json!({
        "background_gradient": gradient,
        "use_background_gradient": true,
        "padding": padding_y(padding, padding),
    }))
}

fn padding_y(top: u32, bottom: u32) -> serde_json::Value {
    json!({ "top": top, "right": 0, "bottom": bottom, "left": 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_allow_list_is_creative() {
        assert!(is_creative("hero"));
        assert!(is_creative("final_cta"));
        assert!(!is_creative("features"));
        assert!(!is_creative("testimonials"));
    }

    #[test]
    fn minimal_heroes_skip_the_gradient() {
        let scheme = ColorScheme::new(StylePreset::Minimal, Industry::Generic);
        let attrs = hero_overrides(StylePreset::Minimal, Industry::Generic, &scheme);
        assert!(!attrs.contains_key("background_gradient"));
        assert!(attrs.contains_key("padding"));
    }
}
