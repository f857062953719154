use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wsflex_core::errors::{ErrorInfo, WsError};
use wsflex_core::provenance::SchemaVersion;
use wsflex_core::{NodeId, UndirectedGraph};

use crate::builder::GraphBuilder;
use crate::graph::SimpleGraph;
use crate::hash::GRAPH_SCHEMA;

/// Largest node count accepted when decoding a binary payload.
///
/// Isolated nodes cost nothing on the wire, so the declared count is bounded
/// explicitly before anything is allocated for it.
pub const MAX_DECODED_NODES: usize = 1 << 22;

/// Serializes the graph to node-link JSON.
///
/// The payload follows the common node-link layout
/// (`directed`, `multigraph`, `graph`, `nodes`, `links`) so generated graphs
/// can be loaded by external analysis tooling.
pub fn graph_to_node_link_json(graph: &SimpleGraph) -> Result<String, WsError> {
    let payload = NodeLinkGraph::from_graph(graph);
    serde_json::to_string(&payload)
        .map_err(|err| WsError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from node-link JSON, validating the simple-graph invariants.
pub fn graph_from_node_link_json(json: &str) -> Result<SimpleGraph, WsError> {
    let payload: NodeLinkGraph = serde_json::from_str(json)
        .map_err(|err| WsError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    payload.into_graph()
}

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &SimpleGraph) -> Result<Vec<u8>, WsError> {
    let payload = BinaryGraph::from_graph(graph);
    bincode::serialize(&payload)
        .map_err(|err| WsError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<SimpleGraph, WsError> {
    let payload: BinaryGraph = bincode::deserialize(bytes)
        .map_err(|err| WsError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    if payload.schema_version.major != GRAPH_SCHEMA.major {
        return Err(WsError::Serde(
            ErrorInfo::new("schema-mismatch", "unsupported graph schema version")
                .with_context("found", payload.schema_version.major)
                .with_context("expected", GRAPH_SCHEMA.major),
        ));
    }
    if payload.n_nodes > MAX_DECODED_NODES {
        return Err(WsError::Serde(
            ErrorInfo::new("node-count-too-large", "declared node count exceeds decode limit")
                .with_context("n_nodes", payload.n_nodes)
                .with_context("limit", MAX_DECODED_NODES),
        ));
    }
    rebuild(payload.n_nodes, payload.edges.into_iter())
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkGraph {
    directed: bool,
    multigraph: bool,
    #[serde(default)]
    graph: Map<String, Value>,
    nodes: Vec<NodeLinkNode>,
    links: Vec<NodeLinkEdge>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkNode {
    id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkEdge {
    source: u64,
    target: u64,
}

impl NodeLinkGraph {
    fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            directed: false,
            multigraph: false,
            graph: Map::new(),
            nodes: graph
                .nodes()
                .map(|id| NodeLinkNode { id: id.as_raw() })
                .collect(),
            links: graph
                .edges()
                .map(|(source, target)| NodeLinkEdge {
                    source: source.as_raw(),
                    target: target.as_raw(),
                })
                .collect(),
        }
    }

    fn into_graph(self) -> Result<SimpleGraph, WsError> {
        if self.directed || self.multigraph {
            return Err(WsError::Serde(
                ErrorInfo::new("unsupported-kind", "only simple undirected graphs are supported")
                    .with_context("directed", self.directed)
                    .with_context("multigraph", self.multigraph),
            ));
        }
        let mut ids: Vec<u64> = self.nodes.iter().map(|node| node.id).collect();
        ids.sort_unstable();
        let contiguous = ids.iter().enumerate().all(|(idx, id)| *id == idx as u64);
        if !contiguous {
            return Err(WsError::Serde(
                ErrorInfo::new("non-contiguous-nodes", "node ids must be exactly 0..n")
                    .with_context("nodes", ids.len()),
            ));
        }
        rebuild(
            ids.len(),
            self.links.into_iter().map(|link| (link.source, link.target)),
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BinaryGraph {
    schema_version: SchemaVersion,
    n_nodes: usize,
    edges: Vec<(u64, u64)>,
}

impl BinaryGraph {
    fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            schema_version: GRAPH_SCHEMA,
            n_nodes: graph.node_count(),
            edges: graph
                .edge_list()
                .iter()
                .map(|(a, b)| (a.as_raw(), b.as_raw()))
                .collect(),
        }
    }
}

fn rebuild(
    n_nodes: usize,
    edges: impl Iterator<Item = (u64, u64)>,
) -> Result<SimpleGraph, WsError> {
    let mut builder = GraphBuilder::with_nodes(n_nodes);
    for (index, (source, target)) in edges.enumerate() {
        builder
            .add_edge(NodeId::from_raw(source), NodeId::from_raw(target))
            .map_err(|err| err.with_context("link", index))?;
    }
    Ok(builder.freeze())
}
