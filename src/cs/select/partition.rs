//! Three-way partitioning around a pivot value.
//!
//! Both selectors shrink their problem the same way: split the current
//! collection into the elements strictly less than the pivot, the elements
//! equal to it, and the elements strictly greater, then use the group sizes
//! to decide which side holds the requested rank. Equal elements are only
//! counted, never copied, since they are all interchangeable with the pivot.

/// Output of [`partition`].
///
/// `less.len() + pivot_count + greater.len()` always equals the length of
/// the partitioned input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements strictly less than the pivot
    pub less: Vec<T>,
    /// Number of elements equal to the pivot, the pivot itself included
    pub pivot_count: usize,
    /// Elements strictly greater than the pivot
    pub greater: Vec<T>,
}

/// Where a 1-based rank falls relative to a [`Partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The rank lies in `less`; carries the rank within `less` (unchanged).
    Less(usize),
    /// The rank lands on one of the copies of the pivot value.
    Pivot,
    /// The rank lies in `greater`; carries the rank within `greater`.
    Greater(usize),
}

impl<T> Partition<T> {
    /// Total number of elements classified.
    pub fn len(&self) -> usize {
        self.less.len() + self.pivot_count + self.greater.len()
    }

    /// Returns `true` if no elements were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a 1-based rank `k` of the partitioned collection onto one side.
    ///
    /// With `L = less.len()` and `P = pivot_count`:
    /// * `k <= L` → `Side::Less(k)`
    /// * `k > L + P` → `Side::Greater(k - L - P)`
    /// * otherwise → `Side::Pivot`
    ///
    /// The caller is responsible for `1 <= k <= self.len()`.
    pub fn locate(&self, k: usize) -> Side {
        let lower = self.less.len();
        let upper = lower + self.pivot_count;
        if k <= lower {
            Side::Less(k)
        } else if k > upper {
            Side::Greater(k - upper)
        } else {
            Side::Pivot
        }
    }

    /// Consumes the partition and returns the side holding rank `k`
    /// together with the rank inside it, or `None` when the pivot value is
    /// the answer.
    pub fn into_side(self, k: usize) -> Option<(Vec<T>, usize)> {
        match self.locate(k) {
            Side::Less(k) => Some((self.less, k)),
            Side::Greater(k) => Some((self.greater, k)),
            Side::Pivot => None,
        }
    }
}

/// Splits `data` into elements `<`, `==` and `>` `pivot` in a single pass.
///
/// The relative order inside `less` and `greater` follows the input, but
/// callers must not rely on it. If `pivot` does not occur in `data` the
/// resulting `pivot_count` is zero; the selectors always draw the pivot from
/// the collection being partitioned, so they never observe that case.
///
/// # Examples
///
/// ```
/// use orderstat::cs::select::partition::partition;
///
/// let p = partition(&[4, 1, 4, 7, 2, 4], &4);
/// assert_eq!(p.less, vec![1, 2]);
/// assert_eq!(p.pivot_count, 3);
/// assert_eq!(p.greater, vec![7]);
/// ```
pub fn partition<T: Ord + Clone>(data: &[T], pivot: &T) -> Partition<T> {
    let mut less = Vec::new();
    let mut greater = Vec::new();
    let mut pivot_count = 0;

    for x in data {
        match x.cmp(pivot) {
            std::cmp::Ordering::Less => less.push(x.clone()),
            std::cmp::Ordering::Greater => greater.push(x.clone()),
            std::cmp::Ordering::Equal => pivot_count += 1,
        }
    }

    Partition {
        less,
        pivot_count,
        greater,
    }
}
