//! The closed enumeration of style presets and their per-preset tables.

use crate::palette::Palette;
use crate::spacing::Spacing;
use crate::typography::Typography;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named visual style. Unknown names resolve to [`StylePreset::Modern`],
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum StylePreset {
    #[default]
    Modern,
    Minimal,
    Bold,
    Elegant,
    Playful,
    Corporate,
    Dark,
}

impl StylePreset {
    pub const ALL: [StylePreset; 7] = [
        StylePreset::Modern,
        StylePreset::Minimal,
        StylePreset::Bold,
        StylePreset::Elegant,
        StylePreset::Playful,
        StylePreset::Corporate,
        StylePreset::Dark,
    ];

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => StylePreset::Minimal,
            "bold" => StylePreset::Bold,
            "elegant" => StylePreset::Elegant,
            "playful" => StylePreset::Playful,
            "corporate" => StylePreset::Corporate,
            "dark" => StylePreset::Dark,
            _ => StylePreset::Modern,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StylePreset::Modern => "modern",
            StylePreset::Minimal => "minimal",
            StylePreset::Bold => "bold",
            StylePreset::Elegant => "elegant",
            StylePreset::Playful => "playful",
            StylePreset::Corporate => "corporate",
            StylePreset::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        Palette::for_preset(self)
    }

    pub fn typography(self) -> &'static Typography {
        Typography::for_preset(self)
    }

    pub fn spacing(self) -> &'static Spacing {
        Spacing::for_preset(self)
    }

    pub fn shadows(self) -> &'static Shadows {
        Shadows::for_preset(self)
    }

    /// Corner radius for buttons and inputs.
    pub fn control_radius(self) -> u32 {
        match self {
            StylePreset::Modern => 8,
            StylePreset::Minimal => 0,
            _ => 6,
        }
    }

    /// Corner radius for cards, images and media frames.
    pub fn card_radius(self) -> u32 {
        match self {
            StylePreset::Modern => 12,
            StylePreset::Minimal => 0,
            _ => 8,
        }
    }
}

impl From<String> for StylePreset {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<StylePreset> for String {
    fn from(preset: StylePreset) -> Self {
        preset.name().to_owned()
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Box-shadow presets per style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadows {
    pub card: &'static str,
    pub elevated: &'static str,
    pub image: &'static str,
    pub button: &'static str,
}

impl Shadows {
    pub fn for_preset(preset: StylePreset) -> &'static Shadows {
        match preset {
            StylePreset::Minimal => &MINIMAL_SHADOWS,
            StylePreset::Bold => &BOLD_SHADOWS,
            StylePreset::Elegant => &ELEGANT_SHADOWS,
            _ => &MODERN_SHADOWS,
        }
    }
}

static MODERN_SHADOWS: Shadows = Shadows {
    card: "0 4px 6px -1px rgba(0,0,0,0.1), 0 2px 4px -1px rgba(0,0,0,0.06)",
    elevated: "0 20px 25px -5px rgba(0,0,0,0.1), 0 10px 10px -5px rgba(0,0,0,0.04)",
    image: "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -2px rgba(0,0,0,0.05)",
    button: "0 4px 6px -1px rgba(0,0,0,0.1)",
};

static MINIMAL_SHADOWS: Shadows = Shadows {
    card: "none",
    elevated: "0 1px 3px rgba(0,0,0,0.12)",
    image: "none",
    button: "none",
};

static BOLD_SHADOWS: Shadows = Shadows {
    card: "0 10px 40px rgba(0,0,0,0.15)",
    elevated: "0 25px 50px rgba(0,0,0,0.2)",
    image: "0 10px 30px rgba(0,0,0,0.15)",
    button: "0 6px 20px rgba(0,0,0,0.15)",
};

static ELEGANT_SHADOWS: Shadows = Shadows {
    card: "0 2px 15px rgba(0,0,0,0.08)",
    elevated: "0 10px 40px rgba(0,0,0,0.1)",
    image: "0 5px 15px rgba(0,0,0,0.08)",
    button: "0 2px 8px rgba(0,0,0,0.1)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_modern() {
        assert_eq!(StylePreset::from_name("foo"), StylePreset::Modern);
        assert_eq!(StylePreset::from_name("  BOLD "), StylePreset::Bold);
    }

    #[test]
    fn every_preset_has_complete_tables() {
        for preset in StylePreset::ALL {
            assert!(!preset.palette().primary.is_empty());
            assert!(!preset.typography().heading_font.is_empty());
            assert!(preset.spacing().section_padding > 0);
            assert!(!preset.shadows().card.is_empty());
        }
    }
}
