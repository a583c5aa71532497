use std::collections::VecDeque;

use crate::error::{Error, Result};

/// First-in, first-out queue backed by a `VecDeque`, so both ends are O(1).
///
/// # Examples
///
/// ```
/// use orderstat::cs::structures::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.peek(), Ok(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Adds an item to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or(Error::empty_collection("queue"))
    }

    /// Returns the front item without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(Error::empty_collection("queue"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_peek() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        for c in ['a', 'b', 'c'] {
            queue.enqueue(c);
        }
        assert_eq!(queue.dequeue(), Ok('a'));
        queue.enqueue('d');
        assert_eq!(queue.dequeue(), Ok('b'));
        assert_eq!(queue.dequeue(), Ok('c'));
        assert_eq!(queue.dequeue(), Ok('d'));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: Queue<String> = Queue::default();
        assert_eq!(queue.dequeue(), Err(Error::EmptyCollection("queue")));
        assert_eq!(queue.peek(), Err(Error::EmptyCollection("queue")));
    }
}
