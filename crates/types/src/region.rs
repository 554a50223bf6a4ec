//! Top-level groupings of a compiled site: header, footer and named pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level region under which a list of section nodes lives.
///
/// Region names are unique within a compilation run; they determine both the
/// identifier prefix and the first path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Header,
    Footer,
    Page(String),
}

impl Region {
    pub fn page(name: impl Into<String>) -> Self {
        Region::Page(name.into())
    }

    /// First segment of every path under this region.
    pub fn path_segment(&self) -> &str {
        match self {
            Region::Header => "header",
            Region::Footer => "footer",
            Region::Page(name) => name,
        }
    }

    /// Short tag prefixed to every identifier in this region: `hdr`, `ftr`,
    /// or the first three letters of the page name.
    pub fn id_prefix(&self) -> String {
        match self {
            Region::Header => "hdr".to_owned(),
            Region::Footer => "ftr".to_owned(),
            Region::Page(name) => name.chars().take(3).collect(),
        }
    }
}

impl From<String> for Region {
    fn from(name: String) -> Self {
        match name.as_str() {
            "header" => Region::Header,
            "footer" => Region::Footer,
            _ => Region::Page(name),
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.path_segment().to_owned()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_truncate_page_names() {
        assert_eq!(Region::Header.id_prefix(), "hdr");
        assert_eq!(Region::Footer.id_prefix(), "ftr");
        assert_eq!(Region::page("home").id_prefix(), "hom");
        assert_eq!(Region::page("ab").id_prefix(), "ab");
    }
}
