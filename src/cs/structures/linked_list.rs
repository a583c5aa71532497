type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list. The head exclusively owns the chain of nodes.
///
/// # Examples
///
/// ```
/// use orderstat::cs::structures::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.insert_at_head(1);
/// list.insert_at_head(2);
/// assert_eq!(list.traverse(), vec![2, 1]);
/// ```
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Inserts `value` in front of the current head.
    pub fn insert_at_head(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Unlinks the first node whose value equals `value`.
    ///
    /// Returns `false`, leaving the list unchanged, if no node matches.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let head_matches = match &self.head {
            None => return false,
            Some(node) => node.value == *value,
        };
        if head_matches {
            self.head = self.head.take().and_then(|mut node| node.next.take());
            self.len -= 1;
            return true;
        }

        // `current` trails the node being compared so it can be unlinked.
        let mut current = match self.head.as_mut() {
            Some(node) => node,
            None => return false,
        };
        loop {
            let next_matches = match &current.next {
                None => return false,
                Some(next) => next.value == *value,
            };
            if next_matches {
                let removed = current.next.take();
                current.next = removed.and_then(|mut node| node.next.take());
                self.len -= 1;
                return true;
            }
            current = match current.next.as_mut() {
                Some(next) => next,
                None => return false,
            };
        }
    }

    /// Values from head to tail.
    pub fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    // Unlink node by node; the default recursive drop can overflow on long lists.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Borrowing iterator over a [`LinkedList`], head first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> LinkedList<i32> {
        // insert in reverse so traversal matches `values`
        let mut list = LinkedList::new();
        for &v in values.iter().rev() {
            list.insert_at_head(v);
        }
        list
    }

    #[test]
    fn test_insert_at_head_traverse() {
        let mut list = LinkedList::new();
        list.insert_at_head(1);
        list.insert_at_head(2);
        assert_eq!(list.traverse(), vec![2, 1]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_head() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete(&1));
        assert_eq!(list.traverse(), vec![2, 3]);
    }

    #[test]
    fn test_delete_middle_and_tail() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert!(list.delete(&3));
        assert_eq!(list.traverse(), vec![1, 2, 4]);
        assert!(list.delete(&4));
        assert_eq!(list.traverse(), vec![1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_first_match_only() {
        let mut list = list_of(&[7, 5, 7, 5]);
        assert!(list.delete(&5));
        assert_eq!(list.traverse(), vec![7, 7, 5]);
    }

    #[test]
    fn test_delete_missing() {
        let mut list = list_of(&[1, 2]);
        assert!(!list.delete(&9));
        assert_eq!(list.traverse(), vec![1, 2]);

        let mut empty: LinkedList<i32> = LinkedList::default();
        assert!(!empty.delete(&1));
        assert!(empty.is_empty());
        assert!(empty.traverse().is_empty());
    }

    #[test]
    fn test_iter() {
        let list = list_of(&[3, 1, 4]);
        let sum: i32 = list.iter().sum();
        assert_eq!(sum, 8);
        let collected: Vec<&i32> = (&list).into_iter().collect();
        assert_eq!(collected, vec![&3, &1, &4]);
    }

    #[test]
    fn test_long_list_drop() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.insert_at_head(i);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
