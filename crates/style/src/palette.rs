//! Color palettes per style preset, and the merged run-time color scheme.

use crate::industry::Industry;
use crate::preset::StylePreset;

/// Static palette for one style preset. All values are `#rrggbb` hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_light: &'static str,
    pub background: &'static str,
    pub background_alt: &'static str,
    pub heading: &'static str,
}

impl Palette {
    pub fn for_preset(preset: StylePreset) -> &'static Palette {
        match preset {
            StylePreset::Modern => &MODERN,
            StylePreset::Minimal => &MINIMAL,
            StylePreset::Bold => &BOLD,
            StylePreset::Elegant => &ELEGANT,
            StylePreset::Playful => &PLAYFUL,
            StylePreset::Corporate => &CORPORATE,
            StylePreset::Dark => &DARK,
        }
    }
}

static MODERN: Palette = Palette {
    primary: "#3B82F6",
    secondary: "#1E40AF",
    accent: "#F59E0B",
    text: "#1F2937",
    text_light: "#6B7280",
    background: "#FFFFFF",
    background_alt: "#F9FAFB",
    heading: "#111827",
};

static MINIMAL: Palette = Palette {
    primary: "#18181B",
    secondary: "#3F3F46",
    accent: "#EF4444",
    text: "#27272A",
    text_light: "#71717A",
    background: "#FFFFFF",
    background_alt: "#FAFAFA",
    heading: "#09090B",
};

static BOLD: Palette = Palette {
    primary: "#7C3AED",
    secondary: "#4C1D95",
    accent: "#F97316",
    text: "#1E1B4B",
    text_light: "#6B7280",
    background: "#FFFFFF",
    background_alt: "#F5F3FF",
    heading: "#1E1B4B",
};

static ELEGANT: Palette = Palette {
    primary: "#78716C",
    secondary: "#44403C",
    accent: "#B45309",
    text: "#292524",
    text_light: "#78716C",
    background: "#FAFAF9",
    background_alt: "#F5F5F4",
    heading: "#1C1917",
};

static PLAYFUL: Palette = Palette {
    primary: "#EC4899",
    secondary: "#8B5CF6",
    accent: "#06B6D4",
    text: "#1F2937",
    text_light: "#6B7280",
    background: "#FFFFFF",
    background_alt: "#FDF2F8",
    heading: "#831843",
};

static CORPORATE: Palette = Palette {
    primary: "#1E40AF",
    secondary: "#1E3A8A",
    accent: "#059669",
    text: "#1F2937",
    text_light: "#6B7280",
    background: "#FFFFFF",
    background_alt: "#EFF6FF",
    heading: "#111827",
};

static DARK: Palette = Palette {
    primary: "#60A5FA",
    secondary: "#93C5FD",
    accent: "#FBBF24",
    text: "#E5E7EB",
    text_light: "#9CA3AF",
    background: "#111827",
    background_alt: "#1F2937",
    heading: "#F9FAFB",
};

/// The merged color scheme for one compilation run: the preset palette with
/// industry accents layered on top, plus derived shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub text: String,
    pub text_light: String,
    pub background: String,
    pub background_alt: String,
    pub heading: String,
}

impl ColorScheme {
    pub fn new(preset: StylePreset, industry: Industry) -> Self {
        let palette = preset.palette();
        let mut scheme = Self {
            primary: palette.primary.to_owned(),
            secondary: palette.secondary.to_owned(),
            accent: palette.accent.to_owned(),
            dark: darken(palette.primary, 30),
            text: palette.text.to_owned(),
            text_light: palette.text_light.to_owned(),
            background: palette.background.to_owned(),
            background_alt: palette.background_alt.to_owned(),
            heading: palette.heading.to_owned(),
        };
        if let Some(colors) = industry.colors() {
            scheme.primary = colors.primary.to_owned();
            scheme.secondary = colors.secondary.to_owned();
            scheme.accent = colors.accent.to_owned();
            scheme.dark = darken(colors.primary, 30);
        }
        scheme
    }
}

/// Darkens a `#rrggbb` color by a percentage of full scale. Malformed
/// colors pass through unchanged.
pub fn darken(hex: &str, percent: u8) -> String {
    let Some([r, g, b]) = parse_hex(hex) else {
        return hex.to_owned();
    };
    let delta = ((255u32 * u32::from(percent)) / 100).min(255) as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        r.saturating_sub(delta),
        g.saturating_sub(delta),
        b.saturating_sub(delta)
    )
}

/// Lightens a `#rrggbb` color towards white by a percentage of the distance
/// to white. Malformed colors pass through unchanged.
pub fn lighten(hex: &str, percent: u8) -> String {
    let Some([r, g, b]) = parse_hex(hex) else {
        return hex.to_owned();
    };
    let factor = f32::from(percent.min(100)) / 100.0;
    let up = |c: u8| (f32::from(c) + (255.0 - f32::from(c)) * factor).round().min(255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", up(r), up(g), up(b))
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_helpers_clamp() {
        assert_eq!(darken("#ffffff", 100), "#000000");
        assert_eq!(lighten("#000000", 100), "#ffffff");
        assert_eq!(darken("#102030", 30), "#000000");
    }

    #[test]
    fn malformed_colors_pass_through() {
        assert_eq!(darken("oops", 30), "oops");
        assert_eq!(lighten("#12345", 10), "#12345");
    }

    #[test]
    fn industry_overlay_replaces_brand_colors() {
        let plain = ColorScheme::new(StylePreset::Modern, Industry::Generic);
        let tech = ColorScheme::new(StylePreset::Modern, Industry::Technology);
        assert_ne!(plain.primary, tech.primary);
        assert_eq!(plain.background, tech.background);
    }
}
