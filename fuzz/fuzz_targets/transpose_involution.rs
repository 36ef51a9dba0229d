#![no_main]

use libfuzzer_sys::fuzz_target;

use digraph_walk::infra::{arbitrary::ArbitraryGraph, testing::adjacency_multisets};

fuzz_target!(|graph: ArbitraryGraph| {
    let graph = graph.into_inner();
    let transposed = graph.transpose().unwrap();

    assert_eq!(transposed.vertex_count(), graph.vertex_count());
    assert_eq!(transposed.edge_count(), graph.edge_count());
    assert_eq!(
        adjacency_multisets(&transposed.transpose().unwrap()),
        adjacency_multisets(&graph)
    );
});
