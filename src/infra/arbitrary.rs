use arbitrary::Arbitrary;

use crate::core::{AddEdgeError, Graph, VertexType};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Single mutation of a graph, generated by the fuzzer.
///
/// Existing vertices are referred to by [`Index`] into the sequence of
/// vertices added so far, so that the generated operations hit existing
/// vertices most of the time.
#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V> {
    AddVertex(V),
    AddEdge(Index, Index),
    AddEdgeDangling(Index, V),
    AddEdgeConnecting(V, V),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<V> {
    AddVertex(bool),
    AddEdge(Result<bool, AddEdgeError<V>>),
    AddEdgeConnecting(bool),
    Noop,
}

impl<V: VertexType> MutOp<V> {
    /// Applies the operation on the graph. `added` is the history of inserted
    /// vertices used to resolve indices.
    pub fn apply(self, graph: &mut Graph<V>, added: &mut Vec<V>) -> MutOpResult<V> {
        let n = added.len();

        match self {
            MutOp::AddVertex(vertex) => {
                let inserted = graph.add_vertex(vertex.clone());
                if inserted {
                    added.push(vertex);
                }
                MutOpResult::AddVertex(inserted)
            }
            MutOp::AddEdge(src, dst) => match (src.get(n), dst.get(n)) {
                (Some(src), Some(dst)) => {
                    MutOpResult::AddEdge(graph.try_add_edge(added[src].clone(), added[dst].clone()))
                }
                _ => MutOpResult::Noop,
            },
            MutOp::AddEdgeDangling(src, dst) => match src.get(n) {
                Some(src) => MutOpResult::AddEdge(graph.try_add_edge(added[src].clone(), dst)),
                None => MutOpResult::Noop,
            },
            MutOp::AddEdgeConnecting(src, dst) => {
                if !graph.contains_vertex(&src) {
                    added.push(src.clone());
                }
                if src != dst && !graph.contains_vertex(&dst) {
                    added.push(dst.clone());
                }
                MutOpResult::AddEdgeConnecting(graph.add_edge_connecting(src, dst))
            }
        }
    }
}

#[derive(Debug, Arbitrary)]
pub struct MutOpsSeq<V>(pub Vec<MutOp<V>>);

impl<V> IntoIterator for MutOpsSeq<V> {
    type Item = MutOp<V>;
    type IntoIter = std::vec::IntoIter<MutOp<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V> MutOpsSeq<V> {
    /// Applies all operations on an empty graph and returns it.
    pub fn replay(self) -> Graph<V>
    where
        V: VertexType,
    {
        let mut graph = Graph::new();
        let mut added = Vec::new();

        for op in self {
            op.apply(&mut graph, &mut added);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;
    use assert_matches::assert_matches;

    use crate::{core::AddEdgeErrorKind, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn apply_ops() {
        let mut graph = Graph::new();
        let mut added = Vec::new();

        assert_eq!(
            MutOp::AddVertex(1u8).apply(&mut graph, &mut added),
            MutOpResult::AddVertex(true)
        );
        assert_eq!(
            MutOp::AddVertex(2).apply(&mut graph, &mut added),
            MutOpResult::AddVertex(true)
        );
        assert_eq!(
            MutOp::AddVertex(1).apply(&mut graph, &mut added),
            MutOpResult::AddVertex(false)
        );
        assert_eq!(
            MutOp::AddEdge(Index(0), Index(3)).apply(&mut graph, &mut added),
            MutOpResult::AddEdge(Ok(true))
        );
        assert_matches!(
            MutOp::AddEdgeDangling(Index(1), 9).apply(&mut graph, &mut added),
            MutOpResult::AddEdge(Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent,
                ..
            }))
        );
        assert_eq!(
            MutOp::AddEdgeConnecting(3, 3).apply(&mut graph, &mut added),
            MutOpResult::AddEdgeConnecting(true)
        );

        assert_eq!(added, vec![1, 2, 3]);
        assert!(graph.is_edge(&1, &2));
        assert!(graph.is_edge(&3, &3));
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn replay_arbitrary() {
        let data = (0..=255u8).cycle().take(1024).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);
        let ops = MutOpsSeq::<u8>::arbitrary(&mut u).unwrap();

        let graph = ops.replay();
        assert_eq!(check_consistency(&graph), Ok(()));
    }
}
