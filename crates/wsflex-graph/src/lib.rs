#![deny(missing_docs)]

//! Seeded generation of simple undirected small-world graphs.
//!
//! The centrepiece is [`watts_strogatz_flexible`], a Watts–Strogatz variant
//! that accepts a fractional mean degree. Graphs are assembled in a
//! [`GraphBuilder`] and handed out as an immutable [`SimpleGraph`].

mod builder;
mod generators;
mod graph;
mod hash;
mod ids;
mod params;
mod rewire;
mod serialization;

pub use builder::GraphBuilder;
pub use generators::{
    complete_graph, generate, generate_with_provenance, ring_lattice, watts_strogatz_flexible,
    watts_strogatz_flexible_with_report, GenerationReport, WsFlexGenerator, WS_FLEX_METHOD,
};
pub use graph::SimpleGraph;
pub use hash::{canonical_hash, GRAPH_SCHEMA};
pub use params::WsFlexParams;
pub use rewire::{rewire_ring_edges, RewireOutcome};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    graph_from_bytes, graph_from_node_link_json, graph_to_bytes, graph_to_node_link_json,
    MAX_DECODED_NODES,
};
