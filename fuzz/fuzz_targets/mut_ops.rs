#![no_main]

use libfuzzer_sys::fuzz_target;

use digraph_walk::{
    algo::{strongly_connected_components, topological_sort},
    core::Error,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = Graph::new("fuzz");

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    // Dangling edges are the only failure a traversal may report here.
    match strongly_connected_components(&graph) {
        Ok(_) | Err(Error::NotFound(_)) => {}
        Err(error) => panic!("unexpected error: {error}"),
    }

    match topological_sort(&graph) {
        Ok(_) | Err(Error::NotFound(_)) | Err(Error::Cycle { .. }) => {}
        Err(error) => panic!("unexpected error: {error}"),
    }
});
