//! Visual-context classification and the color sets each context implies.
//!
//! Sections are classified LIGHT, DARK, ACCENT or PRIMARY; foreground
//! colors for headings, icons, buttons and dividers are then drawn from the
//! matching context color set so text stays readable on emphasized
//! backgrounds.

use crate::palette::Palette;
use crate::preset::StylePreset;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum VisualContext {
    #[default]
    Light,
    Dark,
    /// Subtle tinted background; foregrounds keep their light-context colors.
    Accent,
    /// Branded background (call-to-action sections).
    Primary,
}

impl VisualContext {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "DARK" => VisualContext::Dark,
            "ACCENT" => VisualContext::Accent,
            "PRIMARY" => VisualContext::Primary,
            _ => VisualContext::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualContext::Light => "LIGHT",
            VisualContext::Dark => "DARK",
            VisualContext::Accent => "ACCENT",
            VisualContext::Primary => "PRIMARY",
        }
    }

    /// Whether foreground colors must switch to the high-contrast set.
    pub fn needs_contrast(self) -> bool {
        matches!(self, VisualContext::Dark | VisualContext::Primary)
    }
}

impl From<String> for VisualContext {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<VisualContext> for String {
    fn from(context: VisualContext) -> Self {
        context.name().to_owned()
    }
}

impl fmt::Display for VisualContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies a section blueprint into its visual context: call-to-action
/// blueprints are PRIMARY, hero/stats/footer blueprints are DARK, everything
/// else is LIGHT.
pub fn section_visual_context(blueprint: &str) -> VisualContext {
    match blueprint {
        "cta" | "call_to_action" | "final_cta" => VisualContext::Primary,
        "hero" | "fullwidth_hero" | "stats" | "counters" | "trust_metrics" | "footer" => {
            VisualContext::Dark
        }
        _ => VisualContext::Light,
    }
}

/// The complete foreground/background color set for one visual context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextColors {
    pub background: String,
    pub background_alt: String,
    pub heading: String,
    pub text: String,
    pub text_light: String,
    pub card_background: String,
    pub card_border: String,
    pub card_shadow: String,
    pub icon: String,
    pub divider: String,
    pub button_primary_bg: String,
    pub button_primary_text: String,
    pub button_secondary_text: String,
    pub button_secondary_border: String,
}

impl ContextColors {
    pub fn for_context(context: VisualContext, preset: StylePreset) -> Self {
        let palette = preset.palette();
        match context {
            VisualContext::Dark => Self::dark(palette),
            VisualContext::Primary => Self::primary(palette),
            _ => Self::light(palette),
        }
    }

    fn dark(palette: &Palette) -> Self {
        Self {
            background: "#111827".into(),
            background_alt: "#1F2937".into(),
            heading: "#F9FAFB".into(),
            text: "#E5E7EB".into(),
            text_light: "#9CA3AF".into(),
            card_background: "#1F2937".into(),
            card_border: "#374151".into(),
            card_shadow: "0 4px 6px rgba(0,0,0,0.3)".into(),
            icon: "#60A5FA".into(),
            divider: "rgba(255,255,255,0.2)".into(),
            button_primary_bg: "#FFFFFF".into(),
            button_primary_text: palette.primary.into(),
            button_secondary_text: "#FFFFFF".into(),
            button_secondary_border: "rgba(255,255,255,0.5)".into(),
        }
    }

    fn primary(palette: &Palette) -> Self {
        Self {
            background: palette.primary.into(),
            background_alt: palette.secondary.into(),
            heading: "#FFFFFF".into(),
            text: "rgba(255,255,255,0.9)".into(),
            text_light: "rgba(255,255,255,0.7)".into(),
            card_background: "rgba(255,255,255,0.1)".into(),
            card_border: "rgba(255,255,255,0.2)".into(),
            card_shadow: "0 4px 6px rgba(0,0,0,0.2)".into(),
            icon: "#FFFFFF".into(),
            divider: "rgba(255,255,255,0.3)".into(),
            button_primary_bg: "#FFFFFF".into(),
            button_primary_text: palette.primary.into(),
            button_secondary_text: "#FFFFFF".into(),
            button_secondary_border: "rgba(255,255,255,0.5)".into(),
        }
    }

    fn light(palette: &Palette) -> Self {
        Self {
            background: "#FFFFFF".into(),
            background_alt: "#F9FAFB".into(),
            heading: palette.heading.into(),
            text: palette.text.into(),
            text_light: palette.text_light.into(),
            card_background: "#FFFFFF".into(),
            card_border: "#E5E7EB".into(),
            card_shadow: "0 4px 6px -1px rgba(0,0,0,0.1), 0 2px 4px -1px rgba(0,0,0,0.06)".into(),
            icon: palette.primary.into(),
            divider: "#E5E7EB".into(),
            button_primary_bg: palette.primary.into(),
            button_primary_text: "#FFFFFF".into(),
            button_secondary_text: palette.primary.into(),
            button_secondary_border: palette.primary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprints_classify() {
        assert_eq!(section_visual_context("cta"), VisualContext::Primary);
        assert_eq!(section_visual_context("hero"), VisualContext::Dark);
        assert_eq!(section_visual_context("footer"), VisualContext::Dark);
        assert_eq!(section_visual_context("features"), VisualContext::Light);
    }

    #[test]
    fn contrast_contexts_use_white_headings() {
        for context in [VisualContext::Dark, VisualContext::Primary] {
            let colors = ContextColors::for_context(context, StylePreset::Modern);
            assert!(context.needs_contrast());
            assert_ne!(colors.heading, StylePreset::Modern.palette().heading);
        }
    }
}
