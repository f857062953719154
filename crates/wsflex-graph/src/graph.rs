use wsflex_core::errors::WsError;
use wsflex_core::{DegreeBounds, NodeId, UndirectedGraph};

use crate::builder::unknown_node;
use crate::ids::{canonical_pair, make_node, node_index};

/// Immutable simple undirected graph returned by the generators.
///
/// Produced by [`GraphBuilder::freeze`](crate::GraphBuilder::freeze); there is no
/// way to mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
}

impl SimpleGraph {
    /// Both inputs must already be sorted and mutually consistent.
    pub(crate) fn from_parts(adjacency: Vec<Vec<NodeId>>, edges: Vec<(NodeId, NodeId)>) -> Self {
        Self { adjacency, edges }
    }

    /// Returns the sorted canonical edge list.
    pub fn edge_list(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Returns the degree of every node, indexed by node id.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Returns the mean degree `2|E| / |V|`, or `0.0` for an empty graph.
    pub fn mean_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        2.0 * self.edges.len() as f64 / self.adjacency.len() as f64
    }

    fn adjacent(&self, node: NodeId) -> Result<&[NodeId], WsError> {
        self.adjacency
            .get(node_index(node))
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_node(node))
    }
}

impl UndirectedGraph for SimpleGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new((0..self.adjacency.len()).map(make_node))
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = (NodeId, NodeId)> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn neighbours(&self, node: NodeId) -> Result<Vec<NodeId>, WsError> {
        Ok(self.adjacent(node)?.to_vec())
    }

    fn degree(&self, node: NodeId) -> Result<usize, WsError> {
        Ok(self.adjacent(node)?.len())
    }

    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.binary_search(&canonical_pair(a, b)).is_ok()
    }

    fn degree_bounds(&self) -> DegreeBounds {
        let degrees = self.adjacency.iter().map(Vec::len);
        DegreeBounds {
            min_degree: degrees.clone().min(),
            max_degree: degrees.max(),
        }
    }
}
