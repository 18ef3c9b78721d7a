//! Parallel quicksort driver, enabled by the `parallel` feature.
//!
//! After a range is partitioned its two sides are disjoint, so they are sorted concurrently as
//! tasks of one `rayon::scope`. Ranges are handled as sub-slices, which doesn't change any
//! partition since the midpoint rule is translation invariant: `(l + r) / 2 == l + (r - l) / 2`.

use std::cmp::Ordering;
use std::mem;

use crate::numeric::Numeric;
use crate::partition::partition_range;
use crate::quicksort::quicksort;

/// Ranges shorter than this are sorted on the current thread.
pub const PARALLEL_THRESHOLD: usize = 2048;

/// Sorts `v` in ascending order, sorting independent sub-ranges on the rayon thread pool.
///
/// The result is the same as [`crate::quick_sort`].
#[inline]
pub fn quick_sort<T>(v: &mut [T])
where
    T: Numeric + Send,
{
    sort_full(v, &|a: &T, b: &T| a.lt(b));
}

/// Sorts `v` in ascending order with respect to `compare`, see [`crate::quick_sort_by`].
///
/// The comparison is shared between threads, hence `Fn + Sync` instead of `FnMut`.
#[inline]
pub fn quick_sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Numeric + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    sort_full(v, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn sort_full<T, F>(v: &mut [T], is_less: &F)
where
    T: Numeric + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 {
        return;
    }

    rayon::scope(|s| sort_in_scope(s, v, is_less));
}

/// Partitions `v` and hands the smaller side to the pool, the larger side is handled by this loop.
/// Spawned tasks don't nest on the call stack, so deep partition chains can't overflow it.
///
/// The caller guarantees `v.len() >= 2`.
fn sort_in_scope<'s, T, F>(s: &rayon::Scope<'s>, mut v: &'s mut [T], is_less: &'s F)
where
    T: Numeric + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    while v.len() >= PARALLEL_THRESHOLD {
        let right = v.len() - 1;
        let index = partition_range(v, 0, right, &mut |a, b| is_less(a, b), &mut ());
        let (lower, upper) = mem::take(&mut v).split_at_mut(index);

        let (smaller, larger) = if lower.len() < upper.len() {
            (lower, upper)
        } else {
            (upper, lower)
        };

        // Same conditions as `0 < index - 1` and `index < right` in the sequential driver.
        if smaller.len() > 1 {
            s.spawn(move |s| sort_in_scope(s, smaller, is_less));
        }

        // At least half of `v`, so never shorter than 2.
        v = larger;
    }

    let right = v.len() - 1;
    quicksort(v, 0, right, 1, &mut |a, b| is_less(a, b), &mut ());
}
