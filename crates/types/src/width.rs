//! Column widths in the fixed 12-unit grid.
//!
//! Widths travel in two interchangeable representations: a unit count
//! (1..=12) used by the packer arithmetic, and a reduced fraction token
//! (`"1_2"`, `"1_3"`, `"1"`) used in layout strings and column attrs. The
//! conversion is lossless in both directions for canonical tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of units in one full-width row.
pub const GRID_UNITS: u8 = 12;

/// A column width request, always within 1..=12.
///
/// Construction clamps out-of-range values instead of erroring: a width
/// greater than the grid unit is treated as full-width, zero as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct ColumnWidth(u8);

impl ColumnWidth {
    pub const FULL: ColumnWidth = ColumnWidth(GRID_UNITS);

    pub fn new(units: u8) -> Self {
        Self(units.clamp(1, GRID_UNITS))
    }

    pub fn units(self) -> u8 {
        self.0
    }

    /// Renders the width as a reduced fraction token: 6 → `"1_2"`,
    /// 4 → `"1_3"`, 12 → `"1"`, 5 → `"5_12"`.
    pub fn fraction_token(self) -> String {
        let divisor = gcd(self.0, GRID_UNITS);
        let num = self.0 / divisor;
        let den = GRID_UNITS / divisor;
        if den == 1 {
            "1".to_owned()
        } else {
            format!("{num}_{den}")
        }
    }

    /// Parses a fraction token back into units. Returns `None` for tokens
    /// that do not describe a whole number of grid units.
    pub fn from_fraction_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some((num, den)) = token.split_once('_') {
            let num: u32 = num.parse().ok()?;
            let den: u32 = den.parse().ok()?;
            if den == 0 || (num * u32::from(GRID_UNITS)) % den != 0 {
                return None;
            }
            let units = num * u32::from(GRID_UNITS) / den;
            if (1..=u32::from(GRID_UNITS)).contains(&units) {
                Some(Self(units as u8))
            } else {
                None
            }
        } else {
            // A bare "1" is a full-width column.
            match token.parse::<u32>().ok()? {
                1 => Some(Self::FULL),
                _ => None,
            }
        }
    }
}

impl From<u8> for ColumnWidth {
    fn from(units: u8) -> Self {
        Self::new(units)
    }
}

impl From<ColumnWidth> for u8 {
    fn from(width: ColumnWidth) -> Self {
        width.0
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction_token())
    }
}

/// Parses a comma-separated layout string (`"1_4,1_2,1_4"`) into widths.
///
/// Unrecognized tokens fall back to full width; an empty string yields a
/// single full-width column. Never errors.
pub fn parse_layout(layout: &str) -> Vec<ColumnWidth> {
    let widths: Vec<ColumnWidth> = layout
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| ColumnWidth::from_fraction_token(part).unwrap_or(ColumnWidth::FULL))
        .collect();
    if widths.is_empty() {
        vec![ColumnWidth::FULL]
    } else {
        widths
    }
}

/// Renders widths back into a comma-separated layout string.
pub fn layout_string(widths: &[ColumnWidth]) -> String {
    widths
        .iter()
        .map(|w| w.fraction_token())
        .collect::<Vec<_>>()
        .join(",")
}

fn gcd(mut a: u8, mut b: u8) -> u8 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_widths() {
        assert_eq!(ColumnWidth::new(0).units(), 1);
        assert_eq!(ColumnWidth::new(13).units(), 12);
        assert_eq!(ColumnWidth::new(7).units(), 7);
    }

    #[test]
    fn units_round_trip_through_tokens() {
        for units in 1..=GRID_UNITS {
            let width = ColumnWidth::new(units);
            let token = width.fraction_token();
            assert_eq!(
                ColumnWidth::from_fraction_token(&token),
                Some(width),
                "token {token} did not round-trip"
            );
        }
    }

    #[test]
    fn tokens_reduce() {
        assert_eq!(ColumnWidth::new(6).fraction_token(), "1_2");
        assert_eq!(ColumnWidth::new(4).fraction_token(), "1_3");
        assert_eq!(ColumnWidth::new(8).fraction_token(), "2_3");
        assert_eq!(ColumnWidth::new(12).fraction_token(), "1");
        assert_eq!(ColumnWidth::new(5).fraction_token(), "5_12");
    }

    #[test]
    fn layout_parsing_is_total() {
        let widths = parse_layout("1_4,1_2,1_4");
        assert_eq!(widths.iter().map(|w| w.units()).collect::<Vec<_>>(), [3, 6, 3]);
        assert_eq!(parse_layout(""), vec![ColumnWidth::FULL]);
        assert_eq!(parse_layout("bogus"), vec![ColumnWidth::FULL]);
        assert_eq!(layout_string(&widths), "1_4,1_2,1_4");
    }
}
