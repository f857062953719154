//! Provenance and schema descriptors attached to generated graphs.

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Records which generator and parameters produced a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationProvenance {
    /// Schema version of the serialized graph payload.
    pub schema_version: SchemaVersion,
    /// Generator family label (for example `ws-flex`).
    pub method: String,
    /// Requested node count.
    pub n: usize,
    /// Requested mean degree.
    pub k: f64,
    /// Rewiring probability.
    pub p: f64,
    /// Seed used for the run, `None` when drawn from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Canonical hash of the resulting graph.
    pub graph_hash: String,
}
