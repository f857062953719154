#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the WSFLEX graph generators."]

use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, WsError};
pub use provenance::{GenerationProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::StructuralMetrics;

/// Identifier for a node within an [`UndirectedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Smallest and largest node degree observed in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeBounds {
    /// Minimum degree across all nodes.
    pub min_degree: Option<usize>,
    /// Maximum degree across all nodes.
    pub max_degree: Option<usize>,
}

impl DegreeBounds {
    /// Creates an empty descriptor where no degree information is known yet.
    pub fn unknown() -> Self {
        Self {
            min_degree: None,
            max_degree: None,
        }
    }
}

/// Read-only contract for simple undirected graphs.
///
/// Edges are unordered pairs of distinct nodes reported as `(low, high)`.
pub trait UndirectedGraph: Send + Sync {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in ascending order.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns an iterator over all edges in canonical `(low, high)` order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = (NodeId, NodeId)> + '_>;

    /// Returns the neighbours of the provided node in ascending order.
    fn neighbours(&self, node: NodeId) -> Result<Vec<NodeId>, WsError>;

    /// Returns the degree of the provided node.
    fn degree(&self, node: NodeId) -> Result<usize, WsError>;

    /// Returns whether the undirected edge `{a, b}` is present.
    fn has_edge(&self, a: NodeId, b: NodeId) -> bool;

    /// Returns degree bounds across the node set.
    fn degree_bounds(&self) -> DegreeBounds;
}

/// Seeded random-graph generator over a fixed node count.
///
/// Model parameters live on the implementing value; a harness sweeping
/// several families only needs the node count and an owned RNG.
pub trait GraphGenerator: Send + Sync {
    /// Graph type produced by the generator.
    type Output: UndirectedGraph;

    /// Short method label recorded in provenance (for example `ws-flex`).
    fn name(&self) -> &str;

    /// Generates a graph on `n_nodes` nodes drawing randomness from `rng`.
    fn generate(&self, n_nodes: usize, rng: &mut RngHandle) -> Result<Self::Output, WsError>;
}

/// Structural metric collaborator (clustering coefficient, path length).
pub trait GraphMetrics: Send + Sync {
    /// Computes the structural summary of the provided graph.
    fn metrics(&self, graph: &dyn UndirectedGraph) -> Result<StructuralMetrics, WsError>;
}
