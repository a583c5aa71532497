//! Elementary containers: a LIFO stack, a FIFO queue and a singly linked list.
//!
//! `pop`, `peek` and `dequeue` on an empty container fail with
//! [`Error::EmptyCollection`](crate::error::Error::EmptyCollection) instead
//! of returning a sentinel.

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
