//! The unified error type for engine operations.
//!
//! Almost everything inside the engine is absorbed by stage-local fallbacks
//! (generic blueprints, default presets, even splits); the variants here are
//! the few conditions that must reach the caller, reported once at the outer
//! boundary rather than partway through a tree walk.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A required upstream input is entirely absent, e.g. styling was
    /// requested before a path map was built. The compilation fails
    /// atomically; no partial tree is returned.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// The abstract layout description could not be deserialized at all.
    #[error("invalid abstract layout description: {0}")]
    InvalidAst(#[from] serde_json::Error),
}
