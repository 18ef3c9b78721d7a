//! Hoare partitioning around the midpoint value.

use crate::error::{check_range, SortError};
use crate::numeric::Numeric;
use crate::stats::Recorder;

/// Swaps the elements at `i` and `j`.
///
/// This is the only way the sorts mutate the sequence.
///
/// # Panics
///
/// Panics if `i` or `j` are out of bounds.
#[inline]
pub fn exchange<T>(v: &mut [T], i: usize, j: usize) {
    v.swap(i, j);
}

/// Index the pivot is read from when partitioning `[left, right]`, the truncated midpoint.
#[inline]
pub fn pivot_index(left: usize, right: usize) -> usize {
    // Slice lengths never exceed isize::MAX, the sum of two in-bounds indices can't overflow.
    (left + right) / 2
}

/// Partitions the inclusive range `[left, right]` of `v` around the value at
/// [`pivot_index`]`(left, right)` and returns the split index.
///
/// Afterwards every element in `left..split` is `<=` the pivot and every element in
/// `split..=right` is `>=` the pivot. Elements outside the range are not touched.
pub fn partition<T: Numeric>(v: &mut [T], left: usize, right: usize) -> Result<usize, SortError> {
    check_range(v.len(), left, right)?;

    Ok(partition_range(v, left, right, &mut |a, b| a.lt(b), &mut ()))
}

/// Unchecked flavor of [`partition`] shared by all drivers. The caller guarantees
/// `left <= right < v.len()`.
///
/// The returned split is always in `left + 1..=right + 1`, the first round of the loop exchanges
/// at least once.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_range<T, F, R>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
    recorder: &mut R,
) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    R: Recorder,
{
    debug_assert!(left <= right && right < v.len());

    let pivot = v[pivot_index(left, right)];

    let mut i = left;
    let mut j = right;

    while i <= j {
        // The pivot value, or after the first round the element just exchanged to the left of
        // `i`, stops this scan.
        while is_less(&v[i], &pivot) {
            i += 1;
        }

        // Symmetric, stops at the pivot or the element just exchanged to the right of `j`.
        while is_less(&pivot, &v[j]) {
            j -= 1;
        }

        if i <= j {
            exchange(v, i, j);
            recorder.on_exchange();

            i += 1;
            if j == 0 {
                // `j` would drop to -1, which is below `i` in any case.
                break;
            }
            j -= 1;
        }
    }

    i
}
