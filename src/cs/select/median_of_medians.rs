//! Deterministic selection with the median-of-medians pivot rule
//! (Blum, Floyd, Pratt, Rivest and Tarjan, 1973).
//!
//! The collection is cut into groups of five, the median of each group is
//! taken, and the median of those medians is found recursively. That pivot
//! is guaranteed to have at least ~3n/10 elements on each side, so every
//! partitioning step discards a constant fraction of the input and the
//! total work is O(n) even on adversarial inputs.
//!
//! Descent into the side that holds the rank is a loop over owned
//! sub-collections; the only recursion is the pivot computation on the
//! medians, which is a fifth of the size, so stack depth stays O(log n).

use log::{debug, trace};

use super::partition::partition;
use super::{validate_rank, Selector};
use crate::error::Result;

/// Size of the groups whose medians feed the pivot search. Also the size at
/// or below which a collection is simply sorted.
pub const GROUP_SIZE: usize = 5;

/// Median-of-medians selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfMedians;

impl MedianOfMedians {
    pub fn new() -> Self {
        MedianOfMedians
    }
}

impl<T: Ord + Clone> Selector<T> for MedianOfMedians {
    fn select(&mut self, data: &[T], k: usize) -> Result<T> {
        median_of_medians(data, k)
    }
}

/// Returns the k-th smallest element (1-based) of `data` in worst-case
/// linear time.
///
/// # Arguments
/// * `data` - The collection to select from; it is not modified
/// * `k` - 1-based rank, `1 <= k <= data.len()`
///
/// # Returns
/// * `Ok(element)` - The element that would sit at index `k - 1` after sorting
/// * `Err(Error::EmptyInput)` - If `data` is empty
/// * `Err(Error::InvalidRank)` - If `k` is out of range
///
/// # Examples
/// ```
/// use orderstat::cs::select::median_of_medians;
///
/// let data = [9, 3, 7, 1, 8, 2, 5];
/// assert_eq!(median_of_medians(&data, 4).unwrap(), 5);
/// assert_eq!(median_of_medians(&[5, 5, 5, 5, 5], 3).unwrap(), 5);
/// ```
///
/// # Complexity
/// * Time: O(n) worst case
/// * Space: O(n) for the materialized sub-collections
pub fn median_of_medians<T: Ord + Clone>(data: &[T], k: usize) -> Result<T> {
    validate_rank(data.len(), k)?;
    debug!("median of medians: len={}, k={}", data.len(), k);
    Ok(select_in(data.to_vec(), k))
}

/// Core loop. Requires `1 <= k <= data.len()`.
fn select_in<T: Ord + Clone>(mut data: Vec<T>, mut k: usize) -> T {
    loop {
        if data.len() <= GROUP_SIZE {
            data.sort_unstable();
            return data.swap_remove(k - 1);
        }

        let pivot = pivot_of(&data);
        let parts = partition(&data, &pivot);
        trace!(
            "median of medians: len={}, less={}, equal={}, greater={}, k={}",
            data.len(),
            parts.less.len(),
            parts.pivot_count,
            parts.greater.len(),
            k
        );

        match parts.into_side(k) {
            Some((side, rank)) => {
                data = side;
                k = rank;
            }
            None => return pivot,
        }
    }
}

/// Median of the group medians, taken at rank `len / 2 + 1` (the upper
/// median when there is an even number of groups).
fn pivot_of<T: Ord + Clone>(data: &[T]) -> T {
    let medians: Vec<T> = data.chunks(GROUP_SIZE).map(group_median).collect();
    let rank = medians.len() / 2 + 1;
    select_in(medians, rank)
}

/// Element at index `len / 2` of the sorted group.
fn group_median<T: Ord + Clone>(group: &[T]) -> T {
    let mut group = group.to_vec();
    group.sort_unstable();
    let mid = group.len() / 2;
    group.swap_remove(mid)
}
