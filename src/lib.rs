//! Order-statistic selection and elementary containers.
//!
//! ```rust
//! use orderstat::{select_deterministic, select_randomized, Error};
//!
//! let data = [9, 3, 7, 1, 8, 2, 5];
//! assert_eq!(select_deterministic(&data, 4), Ok(5));
//! assert_eq!(select_randomized(&data, 1), Ok(1));
//! assert_eq!(select_deterministic(&data, 8), Err(Error::InvalidRank { k: 8, len: 7 }));
//! ```

pub mod cs;
pub mod error;

pub use cs::select::{
    select_deterministic, select_randomized, select_randomized_with, MedianOfMedians,
    RandomizedQuickselect, Selector,
};
pub use cs::{select, structures};
pub use error::{Error, Result};
