mod common;

use common::{petgraph_random_directed, random_directed, RANDOM_SEED};
use dipath::algo::{AllPaths, FindPath, HasPath};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn has_path_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| HasPath::on(&graph).dfs().run(&0, &(N - 1)));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn has_path_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| HasPath::on(&graph).bfs().run(&0, &(N - 1)));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn petgraph_has_path_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::has_path_connecting(&graph, 0, N - 1, None));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn find_path_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| FindPath::on(&graph).dfs().run(&0, &(N - 1)));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1])]
fn find_path_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| FindPath::on(&graph).bfs().run(&0, &(N - 1)));
}

#[divan::bench(consts = [8, 10], args = [0.3])]
fn all_paths_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| AllPaths::on(&graph).dfs().run(&0, &(N - 1)));
}

#[divan::bench(consts = [8, 10], args = [0.3])]
fn all_paths_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| AllPaths::on(&graph).bfs().run(&0, &(N - 1)));
}

#[divan::bench(consts = [8, 10], args = [0.3])]
fn petgraph_all_paths_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        petgraph::algo::all_simple_paths::<Vec<_>, _>(&graph, 0, N - 1, 0, None).count()
    });
}
