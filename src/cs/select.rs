//! Order-statistic selection.
//!
//! This module finds the k-th smallest element of an unordered collection
//! without sorting all of it:
//! - Median of medians (deterministic, worst-case O(n))
//! - Randomized quickselect (expected O(n), worst-case O(n^2))
//!
//! Ranks are 1-based: `k = 1` is the minimum and `k = len` the maximum.
//! Both algorithms leave the caller's slice untouched and work on owned
//! sub-collections, so duplicates and repeated calls are safe.
//!
//! # Examples
//!
//! ```rust
//! use orderstat::cs::select::{select_deterministic, select_randomized, Selector};
//! use orderstat::cs::select::RandomizedQuickselect;
//!
//! let data = [9, 3, 7, 1, 8, 2, 5];
//! assert_eq!(select_deterministic(&data, 4).unwrap(), 5);
//! assert_eq!(select_randomized(&data, 4).unwrap(), 5);
//!
//! let mut selector = RandomizedQuickselect::with_seed(42);
//! assert_eq!(selector.median(&data).unwrap(), 5);
//! ```

use rand::Rng;

use crate::error::{Error, Result};

pub mod median_of_medians;
pub mod partition;
pub mod randomized_quickselect;

pub use median_of_medians::{median_of_medians, MedianOfMedians};
pub use partition::{partition, Partition, Side};
pub use randomized_quickselect::{randomized_quickselect, RandomizedQuickselect};

/// Trait for k-th smallest element selection
pub trait Selector<T: Ord + Clone> {
    /// Returns the element of 1-based rank `k` in the sorted order of `data`.
    ///
    /// Fails with [`Error::EmptyInput`] on an empty slice and with
    /// [`Error::InvalidRank`] unless `1 <= k <= data.len()`.
    fn select(&mut self, data: &[T], k: usize) -> Result<T>;

    /// Smallest element.
    fn min(&mut self, data: &[T]) -> Result<T> {
        self.select(data, 1)
    }

    /// Largest element.
    fn max(&mut self, data: &[T]) -> Result<T> {
        self.select(data, data.len())
    }

    /// Upper median: rank `len / 2 + 1`.
    fn median(&mut self, data: &[T]) -> Result<T> {
        self.select(data, data.len() / 2 + 1)
    }
}

/// Checks that `k` is a valid 1-based rank for a collection of `len` elements.
///
/// An empty collection is reported as [`Error::EmptyInput`] whatever `k` is.
pub fn validate_rank(len: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyInput);
    }
    if k < 1 || k > len {
        return Err(Error::invalid_rank(k, len));
    }
    Ok(())
}

/// Selects the k-th smallest element with the median-of-medians algorithm.
pub fn select_deterministic<T: Ord + Clone>(data: &[T], k: usize) -> Result<T> {
    median_of_medians(data, k)
}

/// Selects the k-th smallest element with randomized quickselect, drawing
/// pivots from a generator seeded from OS entropy.
pub fn select_randomized<T: Ord + Clone>(data: &[T], k: usize) -> Result<T> {
    RandomizedQuickselect::new().select(data, k)
}

/// Selects the k-th smallest element with randomized quickselect, drawing
/// pivots from `rng`.
///
/// ```
/// use orderstat::cs::select::select_randomized_with;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// assert_eq!(select_randomized_with(&[4, 4, 1, 9], 3, &mut rng).unwrap(), 4);
/// ```
pub fn select_randomized_with<T, R>(data: &[T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    randomized_quickselect(data, k, rng)
}
