#![no_main]

use libfuzzer_sys::fuzz_target;

use dipath::{
    algo::{all_paths_bfs, all_paths_dfs, find_path_bfs, has_path_bfs, has_path_dfs},
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    path::is_path,
};

fuzz_target!(|input: (MutOpsSeq<u8>, u8, u8)| {
    let (ops, src, dst) = input;
    let graph = ops.replay();

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let reachable = has_path_dfs(&graph, &src, &dst);
    assert_eq!(reachable, has_path_bfs(&graph, &src, &dst));

    let path = find_path_bfs(&graph, &src, &dst);
    assert_eq!(reachable, !path.is_empty());
    assert!(is_path(&graph, &path));

    // Enumeration is exponential, keep it to small graphs.
    if graph.vertex_count() <= 10 {
        let mut dfs = all_paths_dfs(&graph, &src, &dst).into_vec();
        let mut bfs = all_paths_bfs(&graph, &src, &dst).into_vec();
        dfs.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));
        bfs.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));

        assert_eq!(dfs, bfs);
        assert_eq!(reachable, !dfs.is_empty());
    }
});
