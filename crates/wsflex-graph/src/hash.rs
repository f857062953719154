use sha2::{Digest, Sha256};
use wsflex_core::provenance::SchemaVersion;
use wsflex_core::UndirectedGraph;

use crate::graph::SimpleGraph;

/// Schema version of serialized and hashed graph payloads.
pub const GRAPH_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Computes the canonical structural hash for the provided graph.
///
/// Two graphs hash equal exactly when they share node count and edge set.
pub fn canonical_hash(graph: &SimpleGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"wsflex:undirected");
    encode_schema(GRAPH_SCHEMA, &mut hasher);
    hasher.update((graph.node_count() as u64).to_le_bytes());
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for (low, high) in graph.edge_list() {
        hasher.update(low.as_raw().to_le_bytes());
        hasher.update(high.as_raw().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

fn encode_schema(version: SchemaVersion, hasher: &mut Sha256) {
    hasher.update(version.major.to_le_bytes());
    hasher.update(version.minor.to_le_bytes());
    hasher.update(version.patch.to_le_bytes());
}
