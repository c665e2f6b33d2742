use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V> {
    pub src: V,
    pub dst: V,
    pub kind: AddEdgeErrorKind,
}

impl<V> AddEdgeError<V> {
    pub fn new(src: V, dst: V, kind: AddEdgeErrorKind) -> Self {
        Self { src, dst, kind }
    }

    /// Returns the endpoints of the rejected edge.
    pub fn into_endpoints(self) -> (V, V) {
        (self.src, self.dst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}
