use serde::{Deserialize, Serialize};
use tracing::debug;
use wsflex_core::errors::{ErrorInfo, WsError};
use wsflex_core::rng::RngHandle;
use wsflex_core::NodeId;

use crate::builder::GraphBuilder;
use crate::ids::make_node;
use crate::params::validate_probability;

/// Counters describing a rewiring pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewireOutcome {
    /// Ring edges selected for rewiring (draw fell below `p`).
    pub attempted: usize,
    /// Ring edges whose far endpoint was replaced.
    pub rewired: usize,
    /// Selected edges left in place because the source node was saturated.
    pub aborted: usize,
}

/// Rewires the ring edges `(u, u + j mod n)` for every offset `j` in `1..=half_degree`.
///
/// Offsets form the outer loop and nodes the inner loop, both ascending. Each
/// edge is selected with probability `p`; a selected edge keeps `u` and moves
/// its other endpoint to a uniformly drawn node `w` with `w != u` and `{u, w}`
/// absent. Redraws stop as soon as `u` is adjacent to every other node, in
/// which case the edge is left untouched. Edges outside the ring offsets are
/// never selected, though they may still gain endpoints through other moves.
///
/// Fails without touching `graph` when `p` lies outside `[0, 1]` or when a
/// ring edge is absent from the builder.
pub fn rewire_ring_edges(
    graph: &mut GraphBuilder,
    half_degree: usize,
    p: f64,
    rng: &mut RngHandle,
) -> Result<RewireOutcome, WsError> {
    validate_probability(p)?;
    let n_nodes = graph.node_count();
    ensure_ring_present(graph, half_degree)?;
    let nodes = graph.node_ids();
    let mut outcome = RewireOutcome::default();
    for offset in 1..=half_degree {
        for index in 0..n_nodes {
            if rng.uniform01() >= p {
                continue;
            }
            outcome.attempted += 1;
            let u = make_node(index);
            let v = make_node((index + offset) % n_nodes);
            match draw_target(graph, u, &nodes, rng)? {
                Some(w) => {
                    graph.remove_edge(u, v)?;
                    graph.add_edge(u, w)?;
                    outcome.rewired += 1;
                }
                None => {
                    debug!(
                        u = u.as_raw(),
                        v = v.as_raw(),
                        degree = graph.degree(u)?,
                        "no free target left, keeping ring edge"
                    );
                    outcome.aborted += 1;
                }
            }
        }
    }
    Ok(outcome)
}

fn ensure_ring_present(graph: &GraphBuilder, half_degree: usize) -> Result<(), WsError> {
    let n_nodes = graph.node_count();
    for offset in 1..=half_degree {
        for index in 0..n_nodes {
            let u = make_node(index);
            let v = make_node((index + offset) % n_nodes);
            if !graph.has_edge(u, v) {
                return Err(WsError::Graph(
                    ErrorInfo::new("missing-ring-edge", "ring edge absent before rewiring")
                        .with_context("u", u.as_raw())
                        .with_context("v", v.as_raw())
                        .with_context("offset", offset),
                ));
            }
        }
    }
    Ok(())
}

fn draw_target(
    graph: &GraphBuilder,
    u: NodeId,
    nodes: &[NodeId],
    rng: &mut RngHandle,
) -> Result<Option<NodeId>, WsError> {
    let saturated = nodes.len().saturating_sub(1);
    let mut w = pick(nodes, rng)?;
    while w == u || graph.has_edge(u, w) {
        w = pick(nodes, rng)?;
        if graph.degree(u)? >= saturated {
            return Ok(None);
        }
    }
    Ok(Some(w))
}

fn pick(nodes: &[NodeId], rng: &mut RngHandle) -> Result<NodeId, WsError> {
    rng.choice(nodes)
        .copied()
        .ok_or_else(|| WsError::Rng(ErrorInfo::new("empty-choice", "no nodes to draw from")))
}
