use std::collections::BTreeSet;

use wsflex_core::errors::{ErrorInfo, WsError};
use wsflex_core::NodeId;

use crate::graph::SimpleGraph;
use crate::ids::{canonical_pair, make_node, node_index};

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeRecord {
    pub(crate) neighbours: BTreeSet<NodeId>,
}

/// Mutable simple undirected graph used while a generator runs.
///
/// The node set is fixed at construction. Every mutation enforces the
/// no-self-loop and no-duplicate-edge invariants, so [`GraphBuilder::freeze`]
/// always yields a valid [`SimpleGraph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    nodes: Vec<NodeRecord>,
    edges: BTreeSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Creates an edgeless graph on nodes `0..n_nodes`.
    pub fn with_nodes(n_nodes: usize) -> Self {
        Self {
            nodes: vec![NodeRecord::default(); n_nodes],
            edges: BTreeSet::new(),
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all node identifiers in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.nodes.len()).map(make_node).collect()
    }

    /// Returns whether the undirected edge `{a, b}` is present.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains(&canonical_pair(a, b))
    }

    /// Returns the degree of the provided node.
    pub fn degree(&self, node: NodeId) -> Result<usize, WsError> {
        Ok(self.node(node)?.neighbours.len())
    }

    /// Adds the undirected edge `{a, b}`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), WsError> {
        self.node(a)?;
        self.node(b)?;
        if a == b {
            return Err(graph_error("self-loop", "self loops are not allowed")
                .with_context("node", a.as_raw()));
        }
        let pair = canonical_pair(a, b);
        if !self.edges.insert(pair) {
            return Err(graph_error("duplicate-edge", "edge already exists")
                .with_context("u", pair.0.as_raw())
                .with_context("v", pair.1.as_raw()));
        }
        self.node_mut(a)?.neighbours.insert(b);
        self.node_mut(b)?.neighbours.insert(a);
        Ok(())
    }

    /// Removes the undirected edge `{a, b}`.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), WsError> {
        let pair = canonical_pair(a, b);
        if !self.edges.remove(&pair) {
            return Err(graph_error("missing-edge", "edge does not exist")
                .with_context("u", pair.0.as_raw())
                .with_context("v", pair.1.as_raw()));
        }
        self.node_mut(a)?.neighbours.remove(&b);
        self.node_mut(b)?.neighbours.remove(&a);
        Ok(())
    }

    /// Consumes the builder and returns the immutable graph.
    pub fn freeze(self) -> SimpleGraph {
        let adjacency = self
            .nodes
            .into_iter()
            .map(|record| record.neighbours.into_iter().collect())
            .collect();
        SimpleGraph::from_parts(adjacency, self.edges.into_iter().collect())
    }

    fn node(&self, id: NodeId) -> Result<&NodeRecord, WsError> {
        self.nodes.get(node_index(id)).ok_or_else(|| unknown_node(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeRecord, WsError> {
        self.nodes
            .get_mut(node_index(id))
            .ok_or_else(|| unknown_node(id))
    }
}

pub(crate) fn unknown_node(id: NodeId) -> WsError {
    graph_error("unknown-node", "node does not exist").with_context("node", id.as_raw())
}

pub(crate) fn graph_error(code: impl Into<String>, message: impl Into<String>) -> WsError {
    WsError::Graph(ErrorInfo::new(code, message))
}

/// Returns whether the error is a recoverable collision rather than a hard failure.
pub(crate) fn is_soft_error(error: &WsError) -> bool {
    matches!(
        error,
        WsError::Graph(info) if matches!(info.code.as_str(), "duplicate-edge" | "self-loop")
    )
}
