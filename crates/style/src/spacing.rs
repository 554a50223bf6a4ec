//! Spacing tables per style preset. All values are pixels.

use crate::preset::StylePreset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spacing {
    pub section_padding: u32,
    pub section_padding_mobile: u32,
    pub row_gap: u32,
    pub column_gap: u32,
    pub module_margin: u32,
    pub content_padding: u32,
}

impl Spacing {
    pub fn for_preset(preset: StylePreset) -> &'static Spacing {
        match preset {
            StylePreset::Minimal => &MINIMAL,
            StylePreset::Bold => &BOLD,
            StylePreset::Elegant => &ELEGANT,
            _ => &MODERN,
        }
    }
}

static MODERN: Spacing = Spacing {
    section_padding: 100,
    section_padding_mobile: 60,
    row_gap: 40,
    column_gap: 30,
    module_margin: 30,
    content_padding: 40,
};

static MINIMAL: Spacing = Spacing {
    section_padding: 120,
    section_padding_mobile: 80,
    row_gap: 60,
    column_gap: 40,
    module_margin: 40,
    content_padding: 60,
};

static BOLD: Spacing = Spacing {
    section_padding: 80,
    section_padding_mobile: 50,
    row_gap: 30,
    column_gap: 25,
    module_margin: 25,
    content_padding: 35,
};

static ELEGANT: Spacing = Spacing {
    section_padding: 110,
    section_padding_mobile: 70,
    row_gap: 50,
    column_gap: 35,
    module_margin: 35,
    content_padding: 50,
};
