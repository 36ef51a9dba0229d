#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;

use digraph_walk::{
    algo::{is_path_between, StronglyConnectedComponents},
    infra::arbitrary::ArbitraryGraph,
};

fuzz_target!(|graph: ArbitraryGraph| {
    let graph = graph.into_inner();
    let scc = StronglyConnectedComponents::on(&graph).run().unwrap();

    let mut seen = HashSet::new();

    for component in scc.iter() {
        let first = &component[0];

        for vertex in component {
            assert!(seen.insert(vertex.clone()), "{vertex} in multiple components");
            assert!(is_path_between(&graph, first, vertex).unwrap());
            assert!(is_path_between(&graph, vertex, first).unwrap());
        }
    }

    assert_eq!(seen.len(), graph.vertex_count());
});
