//! Non-recursive quicksort driver.
//!
//! Performs the same partition steps as [`crate::quick_sort`], pending ranges are kept in an
//! explicit stack instead of the call stack. The ranges are disjoint so the order they are
//! processed in doesn't change the result.

use std::cmp::Ordering;

use crate::error::{check_range, SortError};
use crate::numeric::Numeric;
use crate::partition::partition_range;
use crate::stats::{Recorder, SortStats};

/// Sorts `v` in ascending order without recursion.
#[inline]
pub fn quick_sort<T: Numeric>(v: &mut [T]) {
    sort_full(v, &mut |a, b| a.lt(b), &mut ());
}

/// Sorts `v` in ascending order with respect to `compare`, see [`crate::quick_sort_by`].
#[inline]
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Numeric,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_full(v, &mut |a, b| compare(a, b) == Ordering::Less, &mut ());
}

/// Sorts the inclusive range `[left, right]` of `v`, everything outside the range stays as is.
pub fn quick_sort_range<T: Numeric>(
    v: &mut [T],
    left: usize,
    right: usize,
) -> Result<(), SortError> {
    check_range(v.len(), left, right)?;

    quicksort(v, left, right, &mut |a, b| a.lt(b), &mut ());
    Ok(())
}

/// Sorts `v` in ascending order and reports what it did. Yields the same stats as
/// [`crate::quick_sort_with_stats`].
pub fn quick_sort_with_stats<T: Numeric>(v: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let mut comparisons = 0u64;

    sort_full(
        v,
        &mut |a, b| {
            comparisons += 1;
            a.lt(b)
        },
        &mut stats,
    );

    stats.comparisons = comparisons;
    stats
}

fn sort_full<T, F, R>(v: &mut [T], is_less: &mut F, recorder: &mut R)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    R: Recorder,
{
    if v.len() < 2 {
        return;
    }

    let right = v.len() - 1;
    quicksort(v, 0, right, is_less, recorder);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quicksort<T, F, R>(v: &mut [T], left: usize, right: usize, is_less: &mut F, recorder: &mut R)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    R: Recorder,
{
    // Same whole-sequence guard as the recursive driver.
    if v.len() < 2 {
        return;
    }

    // Entries are `(left, right, depth)`. Pushing the larger side first means the smaller side is
    // popped next, which limits the stack to `O(log(n))` entries.
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(usize::BITS as usize);
    stack.push((left, right, 1));

    while let Some((left, right, depth)) = stack.pop() {
        recorder.on_partition(depth);
        let index = partition_range(v, left, right, is_less, recorder);

        let lower = (left < index - 1).then(|| (left, index - 1, depth + 1));
        let upper = (index < right).then(|| (index, right, depth + 1));

        match (lower, upper) {
            (Some(lower), Some(upper)) => {
                if lower.1 - lower.0 < upper.1 - upper.0 {
                    stack.push(upper);
                    stack.push(lower);
                } else {
                    stack.push(lower);
                    stack.push(upper);
                }
            }
            (Some(range), None) | (None, Some(range)) => stack.push(range),
            (None, None) => {}
        }
    }
}
