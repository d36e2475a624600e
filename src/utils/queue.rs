//! First-in, first-out queue.
//!
//! [`Queue`] is the ordering primitive behind breadth-first search. It takes ownership of
//! enqueued items and hands them back in insertion order.

use std::collections::VecDeque;

use crate::{Error, Result};

/// A FIFO queue.
///
/// # Examples
///
/// ```rust
/// use graphical::utils::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.dequeue()?, 2);
/// assert!(queue.is_empty());
/// assert!(queue.dequeue().is_err());
/// # Ok::<(), graphical::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the earliest enqueued item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue holds no items.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyQueue)
    }

    /// Returns the item that the next [`dequeue`](Self::dequeue) would return.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns `true` if the queue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue() {
        let mut queue: Queue<i32> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
    }

    #[test]
    fn test_enqueue_single_item() {
        let mut queue = Queue::new();
        queue.enqueue(42);
        assert!(!queue.is_empty());

        assert_eq!(queue.dequeue().unwrap(), 42);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_multiple_items() {
        let mut queue = Queue::with_capacity(3);
        for i in 0..3 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&0));

        for i in 0..3 {
            assert_eq!(queue.dequeue().unwrap(), i);
        }
        assert!(queue.dequeue().is_err());
    }

    #[test]
    fn test_interleaved_operations() {
        let mut queue: Queue<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(queue.dequeue().unwrap(), "a");
        queue.extend(["c", "d"]);
        queue.enqueue("e");

        let drained: Vec<&str> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(drained, vec!["b", "c", "d", "e"]);
    }
}
