//! Collections shared by the traversal algorithms.

pub mod collection;
pub mod compact_index;
pub mod queue;

pub use collection::{Stack, TraversalCollection};
pub use compact_index::CompactIndexMap;
pub use queue::Queue;
