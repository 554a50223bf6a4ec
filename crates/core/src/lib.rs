//! # sitewright-core
//!
//! The layout compilation and addressing engine: pure, synchronous
//! transformations from an abstract page description to a concrete,
//! addressable, styled document tree.
//!
//! Pipeline stages, leaves first:
//! - **grid**: packs weighted columns into fixed-width rows
//! - **expand**: turns coarse region descriptions into full trees
//! - **assign**: assigns node identifiers and builds the path map
//! - **compile**: the alternate entry point for generative layout ASTs
//! - **resolve**: the cascading style policy over the finished tree
//!
//! Everything here is in-memory and deterministic; network-bound concerns
//! (content generation, image lookup) live behind the narrow collaborator
//! traits in [`registry`] and [`observe`].

pub mod assign;
pub mod ast;
pub mod compile;
pub mod content;
pub mod error;
pub mod expand;
pub mod grid;
pub mod observe;
pub mod registry;
pub mod resolve;
pub mod template;

pub use assign::{Assigned, assign};
pub use ast::{ColumnAst, ElementAst, PageAst, SectionAst, VisualWeight, normalize};
pub use compile::{CompileOptions, compile};
pub use error::EngineError;
pub use expand::{ExpandOptions, PageDoc, RegionInput, SiteInput, Skeleton, expand};
pub use grid::pack;
pub use observe::{LogRecorder, NullRecorder, Recorder};
pub use registry::{FieldDef, FieldMap, InMemoryModuleRegistry, ModuleRegistry};
pub use resolve::{ResolveOptions, StyleMap, resolve};
pub use template::{CoarseSection, ModuleRef};

use sitewright_types::AttrMap;

/// Unwraps a `json!` object literal into an [`AttrMap`]; non-objects yield
/// an empty map rather than panicking.
pub(crate) fn object(value: serde_json::Value) -> AttrMap {
    match value {
        serde_json::Value::Object(map) => map,
        _ => AttrMap::new(),
    }
}
