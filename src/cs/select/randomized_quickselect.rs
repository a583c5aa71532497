use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::partition::partition;
use super::{validate_rank, Selector};
use crate::error::{Error, Result};

/// Randomized quickselect that owns its random source.
///
/// The default source is a `ChaCha20Rng`, so a seeded selector picks the
/// same pivots on every platform. Any other `Rng` can be injected with
/// [`RandomizedQuickselect::from_rng`].
#[derive(Debug, Clone)]
pub struct RandomizedQuickselect<R = ChaCha20Rng> {
    rng: R,
}

impl RandomizedQuickselect<ChaCha20Rng> {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_entropy())
    }

    /// Creates a selector with a fixed seed, for reproducible pivot sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Default for RandomizedQuickselect<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomizedQuickselect<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomizedQuickselect { rng }
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<T: Ord + Clone, R: Rng> Selector<T> for RandomizedQuickselect<R> {
    fn select(&mut self, data: &[T], k: usize) -> Result<T> {
        randomized_quickselect(data, k, &mut self.rng)
    }
}

/// Returns the k-th smallest element (1-based) of `data`, picking each
/// pivot uniformly at random with `rng`.
///
/// Expected time is O(n). A pathological pivot sequence can push it to
/// O(n^2), but the descent is a loop, so it never deepens the call stack.
///
/// ```
/// use orderstat::cs::select::randomized_quickselect;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// assert_eq!(randomized_quickselect(&[7, 1, 3, 4, 6, 2, 5], 4, &mut rng).unwrap(), 4);
/// ```
pub fn randomized_quickselect<T, R>(data: &[T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    validate_rank(data.len(), k)?;
    debug!("randomized quickselect: len={}, k={}", data.len(), k);

    let mut data = data.to_vec();
    let mut k = k;
    loop {
        if data.len() == 1 {
            // Only rank 1 exists here; anything else means the rank arithmetic broke.
            if k != 1 {
                return Err(Error::invalid_rank(k, 1));
            }
            return Ok(data.swap_remove(0));
        }

        let pivot_index = rng.gen_range(0..data.len());
        let pivot = data[pivot_index].clone();
        let parts = partition(&data, &pivot);
        trace!(
            "randomized quickselect: len={}, less={}, equal={}, greater={}, k={}",
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
            None => return Ok(pivot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_randomized_quickselect() {
        let arr = [7, 1, 3, 4, 6, 2, 5];
        let mut sorted = arr;
        sorted.sort();
        let mut selector = RandomizedQuickselect::with_seed(5);
        for k in 1..=arr.len() {
            assert_eq!(selector.select(&arr, k).unwrap(), sorted[k - 1]);
        }
    }

    #[test]
    fn test_single_element() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(randomized_quickselect(&[99], 1, &mut rng).unwrap(), 99);
        assert_eq!(
            randomized_quickselect(&[99], 2, &mut rng),
            Err(Error::invalid_rank(2, 1))
        );
    }

    #[test]
    fn test_all_duplicates() {
        let mut selector = RandomizedQuickselect::with_seed(9);
        for k in 1..=5 {
            assert_eq!(selector.select(&[5, 5, 5, 5, 5], k).unwrap(), 5);
        }
    }

    #[test]
    fn test_many_seeds_agree() {
        let data = [9, 3, 7, 1, 8, 2, 5];
        for seed in 0..500 {
            let mut selector = RandomizedQuickselect::with_seed(seed);
            assert_eq!(selector.select(&data, 4).unwrap(), 5);
        }
    }

    #[test]
    fn test_seeded_selectors_are_reproducible() {
        let mut a = RandomizedQuickselect::with_seed(123).into_rng();
        let mut b = RandomizedQuickselect::with_seed(123).into_rng();
        let draws_a: Vec<u64> = (0..8).map(|_| a.gen()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_degenerate_random_source() {
        // A source that always yields zero always picks the first element,
        // the quadratic worst case on sorted input. The answer must not change.
        let data: Vec<u32> = (0..2000).collect();
        let mut selector = RandomizedQuickselect::from_rng(StepRng::new(0, 0));
        assert_eq!(selector.select(&data, 1999).unwrap(), 1998);
        assert_eq!(selector.select(&data, 2000).unwrap(), 1999);
    }

    #[test]
    fn test_unsized_rng() {
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert_eq!(randomized_quickselect(&[3, 1, 2], 2, dyn_rng).unwrap(), 2);
    }

    #[test]
    fn test_errors() {
        let mut selector = RandomizedQuickselect::with_seed(1);
        let empty: [i32; 0] = [];
        assert_eq!(selector.select(&empty, 1), Err(Error::EmptyInput));
        assert_eq!(selector.select(&[3, 1, 2], 0), Err(Error::invalid_rank(0, 3)));
        assert_eq!(selector.select(&[3, 1, 2], 4), Err(Error::invalid_rank(4, 3)));
    }
}
