use super::Queue;

/// Frontier of a traversal, that is, the collection of elements that were
/// scheduled for expansion but were not expanded yet.
///
/// The discipline of the collection determines the traversal: [`Stack`] gives
/// depth-first search and [`Queue`] gives breadth-first search.
pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.enqueue(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.try_dequeue()
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}
