//! The closed enumeration of supported industries, the alias table that
//! normalizes free-form industry names onto it, and per-industry brand
//! colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported industry vertical. Unknown names resolve to
/// [`Industry::Generic`], never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    Technology,
    Healthcare,
    Restaurant,
    Ecommerce,
    RealEstate,
    Legal,
    Education,
    Fitness,
    Agency,
    Nonprofit,
    #[default]
    Generic,
}

/// Free-form name → canonical industry. Kept sorted for readability; lookup
/// is linear over a handful of entries.
const ALIASES: &[(&str, Industry)] = &[
    ("accounting", Industry::Legal),
    ("attorney", Industry::Legal),
    ("bar", Industry::Restaurant),
    ("cafe", Industry::Restaurant),
    ("charity", Industry::Nonprofit),
    ("clinic", Industry::Healthcare),
    ("consulting", Industry::Legal),
    ("courses", Industry::Education),
    ("creative", Industry::Agency),
    ("dental", Industry::Healthcare),
    ("design", Industry::Agency),
    ("digital", Industry::Agency),
    ("finance", Industry::Legal),
    ("food", Industry::Restaurant),
    ("foundation", Industry::Nonprofit),
    ("gym", Industry::Fitness),
    ("health", Industry::Healthcare),
    ("law", Industry::Legal),
    ("marketing", Industry::Agency),
    ("medical", Industry::Healthcare),
    ("ngo", Industry::Nonprofit),
    ("property", Industry::RealEstate),
    ("real_estate", Industry::RealEstate),
    ("realtor", Industry::RealEstate),
    ("retail", Industry::Ecommerce),
    ("saas", Industry::Technology),
    ("school", Industry::Education),
    ("shop", Industry::Ecommerce),
    ("software", Industry::Technology),
    ("spa", Industry::Fitness),
    ("startup", Industry::Technology),
    ("store", Industry::Ecommerce),
    ("tech", Industry::Technology),
    ("training", Industry::Education),
    ("university", Industry::Education),
    ("wellness", Industry::Fitness),
    ("yoga", Industry::Fitness),
];

impl Industry {
    pub const ALL: [Industry; 10] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Restaurant,
        Industry::Ecommerce,
        Industry::RealEstate,
        Industry::Legal,
        Industry::Education,
        Industry::Fitness,
        Industry::Agency,
        Industry::Nonprofit,
    ];

    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "technology" => Industry::Technology,
            "healthcare" => Industry::Healthcare,
            "restaurant" => Industry::Restaurant,
            "ecommerce" => Industry::Ecommerce,
            "realestate" => Industry::RealEstate,
            "legal" => Industry::Legal,
            "education" => Industry::Education,
            "fitness" => Industry::Fitness,
            "agency" => Industry::Agency,
            "nonprofit" => Industry::Nonprofit,
            other => ALIASES
                .iter()
                .find(|(alias, _)| *alias == other)
                .map(|(_, industry)| *industry)
                .unwrap_or(Industry::Generic),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Healthcare => "healthcare",
            Industry::Restaurant => "restaurant",
            Industry::Ecommerce => "ecommerce",
            Industry::RealEstate => "realestate",
            Industry::Legal => "legal",
            Industry::Education => "education",
            Industry::Fitness => "fitness",
            Industry::Agency => "agency",
            Industry::Nonprofit => "nonprofit",
            Industry::Generic => "generic",
        }
    }

    /// Brand color overrides for this industry; `None` for the generic
    /// default, which keeps the preset palette untouched.
    pub fn colors(self) -> Option<&'static IndustryColors> {
        match self {
            Industry::Technology => Some(&TECHNOLOGY),
            Industry::Healthcare => Some(&HEALTHCARE),
            Industry::Restaurant => Some(&RESTAURANT),
            Industry::Ecommerce => Some(&ECOMMERCE),
            Industry::RealEstate => Some(&REALESTATE),
            Industry::Legal => Some(&LEGAL),
            Industry::Education => Some(&EDUCATION),
            Industry::Fitness => Some(&FITNESS),
            Industry::Agency => Some(&AGENCY),
            Industry::Nonprofit => Some(&NONPROFIT),
            Industry::Generic => None,
        }
    }
}

impl From<String> for Industry {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.name().to_owned()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Brand colors layered over a preset palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

static TECHNOLOGY: IndustryColors = IndustryColors {
    primary: "#6366F1",
    secondary: "#4F46E5",
    accent: "#06B6D4",
};

static HEALTHCARE: IndustryColors = IndustryColors {
    primary: "#0D9488",
    secondary: "#115E59",
    accent: "#F97316",
};

static RESTAURANT: IndustryColors = IndustryColors {
    primary: "#DC2626",
    secondary: "#B91C1C",
    accent: "#F59E0B",
};

static ECOMMERCE: IndustryColors = IndustryColors {
    primary: "#DB2777",
    secondary: "#EC4899",
    accent: "#F59E0B",
};

static REALESTATE: IndustryColors = IndustryColors {
    primary: "#059669",
    secondary: "#047857",
    accent: "#0284C7",
};

static LEGAL: IndustryColors = IndustryColors {
    primary: "#1E3A5F",
    secondary: "#1E40AF",
    accent: "#B8860B",
};

static EDUCATION: IndustryColors = IndustryColors {
    primary: "#2563EB",
    secondary: "#1D4ED8",
    accent: "#F59E0B",
};

static FITNESS: IndustryColors = IndustryColors {
    primary: "#EF4444",
    secondary: "#DC2626",
    accent: "#F97316",
};

static AGENCY: IndustryColors = IndustryColors {
    primary: "#7C3AED",
    secondary: "#6D28D9",
    accent: "#EC4899",
};

static NONPROFIT: IndustryColors = IndustryColors {
    primary: "#16A34A",
    secondary: "#15803D",
    accent: "#F59E0B",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalize() {
        assert_eq!(Industry::from_name("saas"), Industry::Technology);
        assert_eq!(Industry::from_name("Clinic"), Industry::Healthcare);
        assert_eq!(Industry::from_name("real_estate"), Industry::RealEstate);
    }

    #[test]
    fn unknown_industries_fall_back_to_generic() {
        assert_eq!(Industry::from_name("xyzzy"), Industry::Generic);
        assert!(Industry::Generic.colors().is_none());
    }
}
