use serde::{Deserialize, Serialize};

/// Structural summary reported by a [`GraphMetrics`](crate::GraphMetrics) collaborator.
///
/// Either value is `None` when the metric is undefined for the graph, for
/// example the average path length of a disconnected graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StructuralMetrics {
    /// Average local clustering coefficient.
    pub cluster_coefficient: Option<f64>,
    /// Average shortest-path length over all node pairs.
    pub avg_path_length: Option<f64>,
}
