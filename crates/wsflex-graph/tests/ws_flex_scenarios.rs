use std::collections::BTreeSet;

use wsflex_core::errors::WsError;
use wsflex_core::rng::RngHandle;
use wsflex_core::{NodeId, UndirectedGraph};
use wsflex_graph::{
    canonical_hash, generate, watts_strogatz_flexible, watts_strogatz_flexible_with_report,
    WsFlexParams,
};

fn node(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

#[test]
fn even_degree_without_rewiring_is_a_ring() {
    let graph = generate(&WsFlexParams::new(10, 4.0, 0.0, 1)).unwrap();
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 20);
    for i in 0..10u64 {
        let expected: BTreeSet<u64> = [(i + 1) % 10, (i + 2) % 10, (i + 8) % 10, (i + 9) % 10]
            .into_iter()
            .collect();
        let actual: BTreeSet<u64> = graph
            .neighbours(node(i))
            .unwrap()
            .into_iter()
            .map(|id| id.as_raw())
            .collect();
        assert_eq!(actual, expected, "neighbours of node {i}");
        assert_eq!(graph.degree(node(i)).unwrap(), 4);
    }
}

#[test]
fn k_equal_to_n_is_complete_regardless_of_p_and_seed() {
    for (p, seed) in [(0.0, 0), (0.5, 7), (1.0, 99)] {
        let graph = generate(&WsFlexParams::new(5, 5.0, p, seed)).unwrap();
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.degree_bounds().min_degree, Some(4));
        assert_eq!(graph.degree_bounds().max_degree, Some(4));
    }
}

#[test]
fn k_equal_to_n_consumes_no_randomness() {
    let mut rng = RngHandle::from_seed(11);
    let mut untouched = RngHandle::from_seed(11);
    let (_, report) = watts_strogatz_flexible_with_report(6, 6.0, 0.7, &mut rng).unwrap();
    assert!(report.complete);
    assert_eq!(rng.uniform01(), untouched.uniform01());
}

#[test]
fn full_rewiring_keeps_edge_count_but_moves_edges() {
    let ring = generate(&WsFlexParams::new(10, 4.0, 0.0, 42)).unwrap();
    let rewired = generate(&WsFlexParams::new(10, 4.0, 1.0, 42)).unwrap();
    assert_eq!(rewired.edge_count(), ring.edge_count());
    assert_ne!(rewired.edge_list(), ring.edge_list());
}

#[test]
fn k_above_n_is_invalid_degree() {
    let err = generate(&WsFlexParams::new(5, 6.0, 0.1, 0)).unwrap_err();
    match err {
        WsError::InvalidDegree(info) => {
            assert_eq!(info.code, "k-exceeds-n");
            assert_eq!(info.context.get("n"), Some(&"5".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn degenerate_parameters_are_rejected() {
    let mut rng = RngHandle::from_seed(0);
    let cases = [
        (0usize, 1.0, 0.0, "empty-graph"),
        (8, 0.0, 0.0, "non-positive-degree"),
        (8, -2.0, 0.0, "non-positive-degree"),
        (8, f64::NAN, 0.0, "non-finite-degree"),
        (8, 4.0, 1.5, "invalid-probability"),
        (8, 4.0, f64::NAN, "invalid-probability"),
    ];
    for (n, k, p, code) in cases {
        let err = watts_strogatz_flexible(n, k, p, &mut rng).unwrap_err();
        assert_eq!(err.code(), code, "n={n} k={k} p={p}");
    }
}

#[test]
fn fractional_degree_reaches_target_edge_count() {
    let mut rng = RngHandle::from_seed(3);
    let (graph, report) = watts_strogatz_flexible_with_report(64, 8.5, 0.0, &mut rng).unwrap();
    assert_eq!(report.half_degree, 4);
    assert_eq!(report.ring_edges, 256);
    assert_eq!(report.residual_target, 16);
    assert_eq!(report.residual_added, 16);
    assert_eq!(report.residual_skipped, 0);
    assert_eq!(graph.edge_count(), 272);

    let bounds = graph.degree_bounds();
    assert!(bounds.min_degree.unwrap() >= 8);
    // a node may receive one residual edge as source and one as partner
    assert!(bounds.max_degree.unwrap() <= 10);
    let total: usize = graph.degree_sequence().iter().sum();
    assert_eq!(total, 2 * 272);
    assert!((graph.mean_degree() - 8.5).abs() < 1e-12);
}

#[test]
fn odd_integer_degree_on_small_ring_fills_in_diagonals() {
    let mut rng = RngHandle::from_seed(5);
    let (graph, report) = watts_strogatz_flexible_with_report(4, 3.0, 0.0, &mut rng).unwrap();
    assert_eq!(report.residual_target, 2);
    assert_eq!(report.residual_added, 2);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn saturated_nodes_skip_residuals_and_rewires() {
    let mut rng = RngHandle::from_seed(8);
    let (graph, report) = watts_strogatz_flexible_with_report(5, 4.5, 1.0, &mut rng).unwrap();
    // ring offsets 1 and 2 already cover every pair on five nodes
    assert_eq!(report.ring_edges, 10);
    assert_eq!(report.residual_target, 1);
    assert_eq!(report.residual_added, 0);
    assert_eq!(report.residual_skipped, 5);
    assert_eq!(report.rewire.attempted, 10);
    assert_eq!(report.rewire.rewired, 0);
    assert_eq!(report.rewire.aborted, 10);
    assert_eq!(graph.edge_count(), 10);
}

#[test]
fn small_mean_degree_yields_sparse_graph() {
    let mut rng = RngHandle::from_seed(2);
    let (graph, report) = watts_strogatz_flexible_with_report(10, 1.0, 0.3, &mut rng).unwrap();
    assert_eq!(report.half_degree, 0);
    assert_eq!(report.ring_edges, 0);
    assert_eq!(report.residual_target, 5);
    assert_eq!(report.rewire.attempted, 0);
    assert_eq!(graph.edge_count(), report.residual_added);
}

#[test]
fn equal_seeds_replay_identical_graphs() {
    let params = WsFlexParams::new(48, 7.3, 0.4, 2024);
    let first = generate(&params).unwrap();
    let second = generate(&params).unwrap();
    assert_eq!(first, second);
    assert_eq!(canonical_hash(&first), canonical_hash(&second));

    let other = generate(&WsFlexParams { seed: Some(2025), ..params }).unwrap();
    assert_ne!(canonical_hash(&first), canonical_hash(&other));
}

#[test]
fn unseeded_generation_still_satisfies_invariants() {
    let params = WsFlexParams {
        n: 30,
        k: 5.5,
        p: 0.2,
        seed: None,
    };
    let graph = generate(&params).unwrap();
    assert_eq!(graph.node_count(), 30);
    assert!(graph.edge_list().iter().all(|(a, b)| a < b));
}
