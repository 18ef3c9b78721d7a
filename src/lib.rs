//! In-place quicksort for numeric slices, using Hoare partitioning around the midpoint value.
//!
//! ```text
//! let mut v = [2, 4, 1, 6, 8, 3, 4, 3, 9, 23, 5, 4];
//! hoare_quicksort::quick_sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 3, 4, 4, 4, 5, 6, 8, 9, 23]);
//! ```
//!
//! [`quick_sort`] is the reference recursive driver. [`stack::quick_sort`] performs the same
//! partition steps with an explicit stack, `parallel::quick_sort` (feature `parallel`) sorts
//! independent sub-ranges concurrently.

mod error;
mod numeric;
mod partition;
mod quicksort;
mod stats;

pub mod stack;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::SortError;
pub use numeric::Numeric;
pub use partition::{exchange, partition, pivot_index};
pub use quicksort::{quick_sort, quick_sort_by, quick_sort_range, quick_sort_with_stats};
pub use stats::SortStats;
