use proptest::{
    collection,
    strategy::{BoxedStrategy, Just, NewTree, Strategy},
    test_runner::TestRunner,
};

use crate::core::Graph;

/// Strategy generating directed graphs with vertices `0..n`.
pub fn graph_directed() -> GraphStrategy {
    GraphStrategy::new()
}

#[derive(Debug, Clone)]
pub struct GraphStrategy {
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
            }
        }
    }
}

impl GraphStrategy {
    pub fn new() -> Self {
        Self::with_params(StrategyParams::default())
    }

    pub fn with_params(params: StrategyParams) -> Self {
        Self { params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed().max_size(8).sparse()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);

    fn inner(&self) -> BoxedStrategy<Graph<usize>> {
        let StrategyParams {
            max_size,
            allow_loops,
            density,
        } = self.params;

        (0..=max_size)
            .prop_flat_map(move |n| {
                // Empty range strategies are not allowed, endpoints out of
                // range are filtered below.
                let endpoint = 0..n.max(1);
                let max_edges = ((n * n) as f32 * density).ceil() as usize;

                (
                    Just(n),
                    collection::vec((endpoint.clone(), endpoint), 0..=max_edges),
                )
            })
            .prop_map(move |(n, edges)| {
                let mut graph = Graph::with_capacity(n);
                graph.extend_with_vertices(0..n);

                for (src, dst) in edges {
                    if src >= n || dst >= n || (src == dst && !allow_loops) {
                        continue;
                    }

                    graph.add_edge(src, dst);
                }

                graph
            })
            .boxed()
    }
}

impl Default for GraphStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for GraphStrategy {
    type Tree = <BoxedStrategy<Graph<usize>> as Strategy>::Tree;
    type Value = Graph<usize>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.inner().new_tree(runner)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    // (0, 1] - ratio of the maximum number of generated edges to the number of
    // all possible vertex pairs
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            allow_loops: false,
            density: 0.25,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}
