use std::collections::{vec_deque, VecDeque};

/// First-in first-out queue with unbounded capacity.
///
/// This is the frontier of the breadth-first algorithms, but it is a general
/// purpose collection on its own.
///
/// # Examples
///
/// ```
/// use dipath::Queue;
///
/// let mut queue = Queue::new();
///
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.head(), &1);
/// assert_eq!(queue.dequeue(), 1);
/// assert_eq!(queue.dequeue(), 2);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends the value to the tail of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the value at the head of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Check [`is_empty`](Queue::is_empty)
    /// before or use [`try_dequeue`](Queue::try_dequeue).
    pub fn dequeue(&mut self) -> T {
        match self.items.pop_front() {
            Some(value) => value,
            None => panic!("dequeue from an empty queue"),
        }
    }

    /// Returns a reference to the value at the head of the queue without
    /// removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn head(&self) -> &T {
        match self.items.front() {
            Some(value) => value,
            None => panic!("head of an empty queue"),
        }
    }

    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn try_head(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator from the head to the tail of the queue.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
