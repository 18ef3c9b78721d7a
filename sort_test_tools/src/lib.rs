use std::cmp::Ordering;

use hoare_quicksort::Numeric;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Numeric;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Numeric,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
