use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use wsflex_core::errors::WsError;
use wsflex_core::provenance::GenerationProvenance;
use wsflex_core::rng::RngHandle;
use wsflex_core::{GraphGenerator, UndirectedGraph};

use crate::builder::{is_soft_error, GraphBuilder};
use crate::graph::SimpleGraph;
use crate::hash::{canonical_hash, GRAPH_SCHEMA};
use crate::ids::make_node;
use crate::params::{half_degree, residual_target, validate_parameters, WsFlexParams};
use crate::rewire::{rewire_ring_edges, RewireOutcome};

/// Method label used in provenance records.
pub const WS_FLEX_METHOD: &str = "ws-flex";

/// Per-phase counters collected while generating a flexible small-world graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Whether `k == n` short-circuited to the complete graph.
    pub complete: bool,
    /// Ring neighbours on each side, `floor(k / 2)`.
    pub half_degree: usize,
    /// Edges placed by the ring lattice.
    pub ring_edges: usize,
    /// Residual edges requested, `floor(n*k/2) mod n`.
    pub residual_target: usize,
    /// Residual edges actually placed.
    pub residual_added: usize,
    /// Residual placements skipped because the edge already existed.
    pub residual_skipped: usize,
    /// Rewiring counters.
    pub rewire: RewireOutcome,
}

/// Returns the complete graph on `n_nodes` nodes.
pub fn complete_graph(n_nodes: usize) -> Result<SimpleGraph, WsError> {
    let mut graph = GraphBuilder::with_nodes(n_nodes);
    for u in 0..n_nodes {
        for v in (u + 1)..n_nodes {
            graph.add_edge(make_node(u), make_node(v))?;
        }
    }
    Ok(graph.freeze())
}

/// Returns the circulant ring lattice joining each node to `half_degree` neighbours per side.
pub fn ring_lattice(n_nodes: usize, half_degree: usize) -> Result<SimpleGraph, WsError> {
    let mut graph = GraphBuilder::with_nodes(n_nodes);
    add_ring_edges(&mut graph, half_degree)?;
    Ok(graph.freeze())
}

/// Generates a flexible Watts–Strogatz small-world graph.
///
/// Unlike the classic model the mean degree `k` may be any real in `(0, n]`.
/// The even part of the degree comes from a ring lattice with
/// `floor(k / 2)` neighbours per side, the remainder from
/// `floor(n*k/2) mod n` residual edges joining shuffled nodes to their
/// `floor(k/2) + 1`-th clockwise neighbour, and finally every ring edge is
/// rewired with probability `p`.
///
/// `k == n` yields the complete graph without touching `rng`.
pub fn watts_strogatz_flexible(
    n_nodes: usize,
    mean_degree: f64,
    rewire_probability: f64,
    rng: &mut RngHandle,
) -> Result<SimpleGraph, WsError> {
    watts_strogatz_flexible_with_report(n_nodes, mean_degree, rewire_probability, rng)
        .map(|(graph, _)| graph)
}

/// Same as [`watts_strogatz_flexible`] but also returns the per-phase counters.
#[instrument(
    name = "wsflex.generate",
    level = "debug",
    err,
    skip_all,
    fields(n = n_nodes, k = mean_degree, p = rewire_probability)
)]
pub fn watts_strogatz_flexible_with_report(
    n_nodes: usize,
    mean_degree: f64,
    rewire_probability: f64,
    rng: &mut RngHandle,
) -> Result<(SimpleGraph, GenerationReport), WsError> {
    validate_parameters(n_nodes, mean_degree, rewire_probability)?;

    if mean_degree == n_nodes as f64 {
        let graph = complete_graph(n_nodes)?;
        let report = GenerationReport {
            complete: true,
            ring_edges: graph.edge_count(),
            ..GenerationReport::default()
        };
        debug!(edges = report.ring_edges, "k equals n, returning complete graph");
        return Ok((graph, report));
    }

    let half = half_degree(mean_degree);
    let mut graph = GraphBuilder::with_nodes(n_nodes);
    let ring_edges = add_ring_edges(&mut graph, half)?;

    let target = residual_target(n_nodes, mean_degree);
    let (residual_added, residual_skipped) = add_residual_edges(&mut graph, half, target, rng)?;

    let rewire = rewire_ring_edges(&mut graph, half, rewire_probability, rng)?;

    let report = GenerationReport {
        complete: false,
        half_degree: half,
        ring_edges,
        residual_target: target,
        residual_added,
        residual_skipped,
        rewire,
    };
    debug!(
        ring_edges,
        residual_target = target,
        residual_added,
        residual_skipped,
        rewired = rewire.rewired,
        rewire_aborted = rewire.aborted,
        edges = graph.edge_count(),
        "flexible small-world graph generated"
    );
    Ok((graph.freeze(), report))
}

/// Generates a graph from a parameter set, seeding a fresh RNG from `params.seed`.
pub fn generate(params: &WsFlexParams) -> Result<SimpleGraph, WsError> {
    let mut rng = RngHandle::from_optional_seed(params.seed);
    watts_strogatz_flexible(params.n, params.k, params.p, &mut rng)
}

/// Generates a graph and the provenance record describing it.
pub fn generate_with_provenance(
    params: &WsFlexParams,
) -> Result<(SimpleGraph, GenerationProvenance), WsError> {
    let graph = generate(params)?;
    let provenance = GenerationProvenance {
        schema_version: GRAPH_SCHEMA,
        method: WS_FLEX_METHOD.to_string(),
        n: params.n,
        k: params.k,
        p: params.p,
        seed: params.seed,
        graph_hash: canonical_hash(&graph),
    };
    Ok((graph, provenance))
}

/// [`GraphGenerator`] adapter for the flexible model with fixed `k` and `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WsFlexGenerator {
    /// Target mean degree.
    pub mean_degree: f64,
    /// Rewiring probability.
    pub rewire_probability: f64,
}

impl WsFlexGenerator {
    /// Creates a generator with the provided mean degree and rewiring probability.
    pub fn new(mean_degree: f64, rewire_probability: f64) -> Self {
        Self {
            mean_degree,
            rewire_probability,
        }
    }
}

impl GraphGenerator for WsFlexGenerator {
    type Output = SimpleGraph;

    fn name(&self) -> &str {
        WS_FLEX_METHOD
    }

    fn generate(&self, n_nodes: usize, rng: &mut RngHandle) -> Result<SimpleGraph, WsError> {
        watts_strogatz_flexible(n_nodes, self.mean_degree, self.rewire_probability, rng)
    }
}

fn add_ring_edges(graph: &mut GraphBuilder, half_degree: usize) -> Result<usize, WsError> {
    let n_nodes = graph.node_count();
    let before = graph.edge_count();
    for offset in 1..=half_degree {
        for index in 0..n_nodes {
            let target = (index + offset) % n_nodes;
            match graph.add_edge(make_node(index), make_node(target)) {
                Ok(()) => {}
                Err(err) if is_soft_error(&err) => continue,
                Err(err) => return Err(err),
            }
        }
    }
    Ok(graph.edge_count() - before)
}

fn add_residual_edges(
    graph: &mut GraphBuilder,
    half_degree: usize,
    target: usize,
    rng: &mut RngHandle,
) -> Result<(usize, usize), WsError> {
    let n_nodes = graph.node_count();
    let mut order: Vec<usize> = (0..n_nodes).collect();
    rng.shuffle(&mut order);

    let mut added = 0usize;
    let mut skipped = 0usize;
    for index in order {
        if added == target {
            break;
        }
        let partner = (index + half_degree + 1) % n_nodes;
        match graph.add_edge(make_node(index), make_node(partner)) {
            Ok(()) => added += 1,
            Err(err) if is_soft_error(&err) => {
                // small n can wrap the residual offset back onto a ring edge
                trace!(u = index, v = partner, "residual edge collides, skipping");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }
    if added < target {
        debug!(
            requested = target,
            added, "residual placement exhausted before reaching target"
        );
    }
    Ok((added, skipped))
}
