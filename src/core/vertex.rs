use std::hash::Hash;

/// Trait bound for values that can be used as vertices in a
/// [`Graph`](crate::core::Graph).
///
/// Vertices are identified by equality and used as keys in hash-based sets and
/// maps, both in the graph storage and in the discovery state of traversal
/// algorithms.
///
/// This trait is implemented for all types satisfying the bounds.
pub trait VertexType: Clone + Eq + Hash {}

impl<T> VertexType for T where T: Clone + Eq + Hash {}
