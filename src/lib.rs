//! # sitewright
//!
//! Layout compilation and addressing engine for generated website
//! documents. Turns an abstract page description (a semantic skeleton
//! parsed from a mockup, or a generative-model layout AST) into a
//! concrete, addressable, styled document tree:
//!
//! - **types**: the node tree, regions, identifiers, paths, column widths
//! - **style**: static style/industry preset tables and visual contexts
//! - **core**: the pipeline stages (grid packer, skeleton expander,
//!   id/path assigner, abstract-layout compiler, style resolver)
//!
//! ## Design principle
//!
//! The engine performs only in-memory transformations: no filesystem, no
//! network, no async runtime. External collaborators (the module catalog,
//! observability) are injected through narrow traits.

// Re-export foundation crates
pub use sitewright_core as core;
pub use sitewright_style as style;
pub use sitewright_types as types;

pub mod pipeline;

// Commonly used types, re-exported at the crate root
pub use sitewright_core::{
    Assigned, CoarseSection, CompileOptions, EngineError, ExpandOptions, InMemoryModuleRegistry,
    LogRecorder, ModuleRef, ModuleRegistry, NullRecorder, PageAst, PageDoc, Recorder, RegionInput,
    ResolveOptions, SiteInput, Skeleton, StyleMap,
};
pub use sitewright_style::{ColorScheme, Industry, StylePreset, VisualContext};
pub use sitewright_types::{
    AttrMap, ColumnWidth, GRID_UNITS, Node, NodeId, NodeKind, PathMap, Region, SectionMeta,
    SectionMetaMap,
};

pub use pipeline::{CompiledSite, Pipeline, PipelineOptions};
