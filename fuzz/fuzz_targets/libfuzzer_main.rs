#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzz_util as util;

fuzz_target!(|data: &[u8]| {
    let mut bytes = data.to_vec();
    hoare_quicksort::quick_sort(&mut bytes);
    util::check_sorted(data, &bytes);

    let ints = util::u8_as_i32(data);
    let mut stacked = ints.clone();
    hoare_quicksort::stack::quick_sort(&mut stacked);
    util::check_sorted(&ints, &stacked);

    let mut recursive = ints;
    hoare_quicksort::quick_sort(&mut recursive);
    assert_eq!(recursive, stacked);
});
