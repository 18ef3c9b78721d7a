//! Recursive quicksort driver.

use std::cmp::Ordering;

use crate::error::{check_range, SortError};
use crate::numeric::Numeric;
use crate::partition::partition_range;
use crate::stats::{Recorder, SortStats};

/// Sorts `v` in ascending order.
///
/// Not stable. The call stack stays within `O(log(n))` frames, but inputs that defeat the midpoint
/// pivot, like a pipe organ of consecutive integers, take `O(n^2)` comparisons.
#[inline]
pub fn quick_sort<T: Numeric>(v: &mut [T]) {
    sort_full(v, &mut |a, b| a.lt(b), &mut ());
}

/// Sorts `v` in ascending order with respect to `compare`.
///
/// `compare` has to implement a total order. If it doesn't, the sort may panic, fail to terminate
/// or leave `v` in an unspecified order. Should `compare` panic, `v` is left as a permutation of
/// the input.
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

    quicksort(v, left, right, 1, &mut |a, b| a.lt(b), &mut ());
    Ok(())
}

/// Sorts `v` in ascending order, exactly like [`quick_sort`], and reports what it did.
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
    quicksort(v, 0, right, 1, is_less, recorder);
}

/// Sorts `[left, right]`, the caller guarantees `left <= right < v.len()`.
///
/// Recurses into the smaller side of each partition and loops on the larger one, so the call stack
/// stays within `O(log(n))` frames even when the midpoint pivot splits off only a few elements per
/// partition. `depth` counts partition nesting, not stack frames.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn quicksort<T, F, R>(
    v: &mut [T],
    mut left: usize,
    mut right: usize,
    mut depth: usize,
    is_less: &mut F,
    recorder: &mut R,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    R: Recorder,
{
    // Guards on the length of the whole sequence, not of the range. Once past the first call it
    // always holds, sorting ends through the two range checks below.
    if v.len() < 2 {
        return;
    }

    loop {
        recorder.on_partition(depth);
        let index = partition_range(v, left, right, is_less, recorder);
        depth += 1;

        // `index > left` always, so `index - 1` can't underflow.
        let sort_lower = left < index - 1;
        let sort_upper = index < right;

        match (sort_lower, sort_upper) {
            (true, true) => {
                if index - left <= right + 1 - index {
                    quicksort(v, left, index - 1, depth, is_less, recorder);
                    left = index;
                } else {
                    quicksort(v, index, right, depth, is_less, recorder);
                    right = index - 1;
                }
            }
            (true, false) => right = index - 1,
            (false, true) => left = index,
            (false, false) => return,
        }
    }
}
