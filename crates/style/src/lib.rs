//! Static style data for the compilation engine.
//!
//! Everything in this crate is constant configuration exposed through pure
//! lookup functions: style presets (palette, typography, spacing, shadows),
//! industry presets with their alias table, and the visual-context color
//! sets used for high-contrast overrides. Lookups never fail; unknown names
//! resolve to the documented defaults.

pub mod context;
pub mod industry;
pub mod palette;
pub mod preset;
pub mod spacing;
pub mod typography;

pub use context::{ContextColors, VisualContext, section_visual_context};
pub use industry::{Industry, IndustryColors};
pub use palette::{ColorScheme, Palette, darken, lighten};
pub use preset::{Shadows, StylePreset};
pub use spacing::Spacing;
pub use typography::Typography;
