#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzz_util as util;

// The first two bytes pick the range, the rest is the sequence.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let v = util::u8_as_i32(&data[2..]);
    let (left, right) = (data[0] as usize, data[1] as usize);

    let mut ranged = v.clone();
    match hoare_quicksort::quick_sort_range(&mut ranged, left, right) {
        Ok(()) => {
            util::check_sorted(&v[left..=right], &ranged[left..=right]);
            assert_eq!(ranged[..left], v[..left]);
            assert_eq!(ranged[right + 1..], v[right + 1..]);
        }
        Err(_) => {
            assert!(left > right || right >= v.len());
            assert_eq!(ranged, v);
        }
    }
});
