//! Graph storage and its basic vocabulary.

pub mod error;
pub mod graph;
pub mod iter;
pub mod vertex;

pub use error::{AddEdgeError, AddEdgeErrorKind};
pub use graph::Graph;
pub use iter::{Edges, Successors, Vertices};
pub use vertex::VertexType;
