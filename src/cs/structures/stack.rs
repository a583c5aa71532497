use crate::error::{Error, Result};

/// Last-in, first-out stack backed by a `Vec`.
///
/// # Examples
///
/// ```
/// use orderstat::cs::structures::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Adds an item to the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::empty_collection("stack"))
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::empty_collection("stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
