use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// Provides a set of patterns useful for testing and benchmarking sorting algorithms.
/// Values are i32, tests map them into the other numeric types.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size.max(1)) {
        chunk.sort_unstable();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size.max(1)) {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

/// The seed the next random pattern is derived from.
///
/// Fixed per process, unless `OVERRIDE_SEED` pins it or [`use_random_seed_each_time`] was called.
pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn new_seed() -> StdRng {
    // Random seed, but printed by the test harness for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
