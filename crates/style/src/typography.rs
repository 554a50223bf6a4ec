//! Typography tables per style preset.

use crate::preset::StylePreset;

#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub heading_font: &'static str,
    pub body_font: &'static str,
    pub h1_size: u32,
    pub h2_size: u32,
    pub h3_size: u32,
    pub body_size: u32,
    pub heading_weight: &'static str,
    pub body_weight: &'static str,
    pub line_height: f32,
    pub heading_line_height: f32,
    pub letter_spacing: &'static str,
}

impl Typography {
    pub fn for_preset(preset: StylePreset) -> &'static Typography {
        match preset {
            StylePreset::Minimal => &MINIMAL,
            StylePreset::Bold => &BOLD,
            StylePreset::Elegant => &ELEGANT,
            StylePreset::Playful => &PLAYFUL,
            StylePreset::Corporate => &CORPORATE,
            // The dark preset shares the modern type scale.
            _ => &MODERN,
        }
    }

    /// Heading size for a given level, `h1` through `h6`.
    pub fn heading_size(&self, level: &str) -> u32 {
        match level {
            "h1" => self.h1_size,
            "h2" => self.h2_size,
            "h3" => self.h3_size,
            "h4" => 24,
            "h5" => 20,
            _ => 18,
        }
    }
}

static MODERN: Typography = Typography {
    heading_font: "Inter",
    body_font: "Inter",
    h1_size: 56,
    h2_size: 42,
    h3_size: 32,
    body_size: 18,
    heading_weight: "700",
    body_weight: "400",
    line_height: 1.6,
    heading_line_height: 1.2,
    letter_spacing: "-0.02em",
};

static MINIMAL: Typography = Typography {
    heading_font: "Helvetica Neue",
    body_font: "Helvetica Neue",
    h1_size: 48,
    h2_size: 36,
    h3_size: 28,
    body_size: 16,
    heading_weight: "600",
    body_weight: "400",
    line_height: 1.7,
    heading_line_height: 1.3,
    letter_spacing: "0",
};

static BOLD: Typography = Typography {
    heading_font: "Poppins",
    body_font: "Poppins",
    h1_size: 64,
    h2_size: 48,
    h3_size: 36,
    body_size: 18,
    heading_weight: "800",
    body_weight: "400",
    line_height: 1.6,
    heading_line_height: 1.1,
    letter_spacing: "-0.03em",
};

static ELEGANT: Typography = Typography {
    heading_font: "Playfair Display",
    body_font: "Source Sans Pro",
    h1_size: 52,
    h2_size: 40,
    h3_size: 30,
    body_size: 17,
    heading_weight: "600",
    body_weight: "400",
    line_height: 1.7,
    heading_line_height: 1.3,
    letter_spacing: "0",
};

static PLAYFUL: Typography = Typography {
    heading_font: "Nunito",
    body_font: "Nunito",
    h1_size: 52,
    h2_size: 38,
    h3_size: 28,
    body_size: 18,
    heading_weight: "700",
    body_weight: "400",
    line_height: 1.6,
    heading_line_height: 1.25,
    letter_spacing: "0",
};

static CORPORATE: Typography = Typography {
    heading_font: "Roboto",
    body_font: "Roboto",
    h1_size: 48,
    h2_size: 36,
    h3_size: 28,
    body_size: 16,
    heading_weight: "700",
    body_weight: "400",
    line_height: 1.65,
    heading_line_height: 1.25,
    letter_spacing: "0",
};
