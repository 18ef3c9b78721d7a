/// Reinterprets the fuzzer input as little-endian `i32` values, trailing bytes are ignored.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Checks that `sorted` is `original` in ascending order, holding exactly the same values.
pub fn check_sorted<T: Ord + Clone + std::fmt::Debug>(original: &[T], sorted: &[T]) {
    let mut expected = original.to_vec();
    expected.sort_unstable();

    assert_eq!(expected, sorted, "original: {original:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_whole_words_only() {
        let data = [1, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 7];
        assert_eq!(u8_as_i32(&data), [1, -1]);
    }

    #[test]
    fn accepts_sorted_permutation() {
        check_sorted(&[3, 1, 2, 1], &[1, 1, 2, 3]);
        check_sorted::<i32>(&[], &[]);
    }

    #[test]
    #[should_panic]
    fn rejects_sorted_non_permutation() {
        // Ordered and the same length, but a value was replaced.
        check_sorted(&[3, 1, 2], &[1, 1, 3]);
    }

    #[test]
    #[should_panic]
    fn rejects_unsorted() {
        check_sorted(&[2, 1], &[2, 1]);
    }
}
