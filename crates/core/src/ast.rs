//! The abstract layout description produced by a generative model: pages of
//! sections with intent/layout/visual-weight metadata and columns of typed
//! elements.
//!
//! The AST is deserialized from JSON, normalized once (missing fields fill
//! from the per-section-type defaults table, widths are clamped and
//! rescaled) and then consumed by the compiler.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use sitewright_types::AttrMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAst {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionAst>,
}

impl PageAst {
    pub fn from_json(source: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionAst {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_weight: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnAst>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnAst {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default)]
    pub elements: Vec<ElementAst>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementAst {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Model-supplied content payload; empty means "synthesize from pools".
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub content: AttrMap,
    /// Model-supplied style overrides.
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub style: AttrMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// How much visual emphasis a section carries. Drives base padding and the
/// dark-background eligibility of hero/cta sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualWeight {
    High,
    #[default]
    Medium,
    Low,
}

impl VisualWeight {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "high" => VisualWeight::High,
            "low" => VisualWeight::Low,
            _ => VisualWeight::Medium,
        }
    }

    /// Base vertical section padding in pixels.
    pub fn padding(self) -> u32 {
        match self {
            VisualWeight::High => 120,
            VisualWeight::Medium => 80,
            VisualWeight::Low => 40,
        }
    }
}

/// Per-section-type defaults used to fill missing AST metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDefaults {
    pub intent: &'static str,
    pub layout: &'static str,
    pub weight: &'static str,
}

pub fn section_defaults(section_type: &str) -> SectionDefaults {
    let (intent, layout, weight) = match section_type {
        "hero" => ("capture", "asymmetric", "high"),
        "features" => ("explain", "grid", "medium"),
        "testimonials" => ("prove", "grid", "medium"),
        "social_proof" => ("prove", "centered", "low"),
        "stats" => ("prove", "grid", "medium"),
        "pricing" => ("convert", "grid", "medium"),
        "faq" => ("reassure", "stacked", "low"),
        "cta" => ("convert", "centered", "high"),
        "contact" => ("connect", "split", "medium"),
        "about" => ("explain", "asymmetric", "medium"),
        "team" => ("prove", "grid", "medium"),
        "services" => ("explain", "grid", "medium"),
        "benefits" => ("convince", "alternating", "medium"),
        "newsletter" => ("convert", "centered", "low"),
        "divider" => ("breathe", "centered", "low"),
        _ => ("explain", "stacked", "medium"),
    };
    SectionDefaults {
        intent,
        layout,
        weight,
    }
}

/// Repairs a model-produced AST in place so compilation is total:
/// - a missing section type defaults to `features`
/// - missing intent/layout/weight fill from the defaults table
/// - a section without columns becomes one full-width text column
/// - widths outside 1..=12 become full-width
/// - a column set whose sum is not a multiple of the grid unit is rescaled
///   proportionally to 12, the last column absorbing rounding remainder
///   (multiples survive untouched so multi-row sections keep their shape)
/// - elements without a type become `body_text`
pub fn normalize(ast: &mut PageAst) {
    for section in &mut ast.sections {
        let section_type = section
            .section_type
            .get_or_insert_with(|| "features".to_owned())
            .clone();
        let defaults = section_defaults(&section_type);
        section.intent.get_or_insert_with(|| defaults.intent.to_owned());
        section.layout.get_or_insert_with(|| defaults.layout.to_owned());
        section
            .visual_weight
            .get_or_insert_with(|| defaults.weight.to_owned());

        if section.columns.is_empty() {
            section.columns.push(ColumnAst {
                width: Some(12),
                elements: vec![ElementAst {
                    element_type: Some("body_text".to_owned()),
                    ..ElementAst::default()
                }],
            });
        }

        for column in &mut section.columns {
            let width = column.width.unwrap_or(12);
            column.width = Some(if (1..=12).contains(&width) { width } else { 12 });
            for element in &mut column.elements {
                element.element_type.get_or_insert_with(|| "body_text".to_owned());
            }
        }

        rescale_widths(&mut section.columns);
    }
}

fn rescale_widths(columns: &mut [ColumnAst]) {
    let total: u32 = columns.iter().map(|c| c.width.unwrap_or(12)).sum();
    if total == 0 || total % 12 == 0 {
        return;
    }
    let scale = 12.0 / f64::from(total);
    let mut placed = 0u32;
    let last = columns.len() - 1;
    for (index, column) in columns.iter_mut().enumerate() {
        let width = if index == last {
            12u32.saturating_sub(placed).clamp(1, 12)
        } else {
            // Leave at least one unit for every column still to come.
            let reserve = (last - index) as u32;
            let upper = 12u32.saturating_sub(placed).saturating_sub(reserve).max(1);
            let scaled = (f64::from(column.width.unwrap_or(12)) * scale).round() as u32;
            scaled.clamp(1, upper)
        };
        column.width = Some(width);
        placed += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_missing_metadata_from_the_defaults_table() {
        let mut ast = PageAst {
            sections: vec![SectionAst {
                section_type: Some("hero".to_owned()),
                ..SectionAst::default()
            }],
            ..PageAst::default()
        };
        normalize(&mut ast);
        let section = &ast.sections[0];
        assert_eq!(section.intent.as_deref(), Some("capture"));
        assert_eq!(section.layout.as_deref(), Some("asymmetric"));
        assert_eq!(section.visual_weight.as_deref(), Some("high"));
        assert_eq!(section.columns.len(), 1);
    }

    #[test]
    fn rescales_widths_that_miss_the_grid() {
        let mut ast = PageAst {
            sections: vec![SectionAst {
                section_type: Some("features".to_owned()),
                columns: vec![
                    ColumnAst { width: Some(7), ..ColumnAst::default() },
                    ColumnAst { width: Some(7), ..ColumnAst::default() },
                ],
                ..SectionAst::default()
            }],
            ..PageAst::default()
        };
        normalize(&mut ast);
        let widths: Vec<u32> = ast.sections[0]
            .columns
            .iter()
            .map(|c| c.width.unwrap())
            .collect();
        assert_eq!(widths.iter().sum::<u32>(), 12);
        assert_eq!(widths, [6, 6]);
    }

    #[test]
    fn multiples_of_the_grid_survive_for_multi_row_sections() {
        let mut ast = PageAst {
            sections: vec![SectionAst {
                section_type: Some("features".to_owned()),
                columns: (0..4)
                    .map(|_| ColumnAst { width: Some(6), ..ColumnAst::default() })
                    .collect(),
                ..SectionAst::default()
            }],
            ..PageAst::default()
        };
        normalize(&mut ast);
        let widths: Vec<u32> = ast.sections[0]
            .columns
            .iter()
            .map(|c| c.width.unwrap())
            .collect();
        assert_eq!(widths, [6, 6, 6, 6]);
    }
}
