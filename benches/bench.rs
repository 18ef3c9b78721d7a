use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use hoare_quicksort::{stack, Numeric, SortStats};
use sort_test_tools::patterns;

#[inline(never)]
fn bench_sort<T: Numeric>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn measure_comp_count<T: Numeric>(
    name: &str,
    test_size: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: &fn(usize) -> Vec<i32>,
    instrumented_sort_func: impl Fn(&mut [T]) -> SortStats,
) {
    // Measure how many comparisons and exchanges are performed by a specific implementation and
    // input combination.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else if test_size < 100_000 {
        1000
    } else {
        100
    };

    let mut comparisons = 0u64;
    let mut exchanges = 0u64;
    let mut max_depth = 0usize;
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_size));
        let stats = instrumented_sort_func(black_box(test_data.as_mut_slice()));

        comparisons += stats.comparisons;
        exchanges += stats.exchanges;
        max_depth = max_depth.max(stats.max_depth);
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let run_count = run_count as u64;
    println!(
        "{name}: mean comparisons: {} mean exchanges: {} max depth: {max_depth}",
        comparisons / run_count,
        exchanges / run_count
    );
}

fn bench_impl<T: Numeric + Send>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if env::var("MEASURE_COMP").is_ok() {
        // The stack driver performs the same steps, measuring it too would only repeat the numbers.
        let name = format!(
            "hoare_quicksort-comp-{}-{}-{}",
            transform_name, pattern_name, test_size
        );
        measure_comp_count(
            &name,
            test_size,
            transform,
            pattern_provider,
            hoare_quicksort::quick_sort_with_stats,
        );
        return;
    }

    bench_sort(
        c,
        test_size,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "hoare_quicksort_recursive",
        hoare_quicksort::quick_sort,
    );

    bench_sort(
        c,
        test_size,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "hoare_quicksort_stack",
        stack::quick_sort,
    );

    #[cfg(feature = "parallel")]
    bench_sort(
        c,
        test_size,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "hoare_quicksort_parallel",
        hoare_quicksort::parallel::quick_sort,
    );

    bench_sort(
        c,
        test_size,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "rust_std_unstable",
        |v: &mut [T]| v.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap()),
    );
}

fn bench_patterns<T: Numeric + Send>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let mut pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size.max(1) as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size.max(1) as f64).log2().round()) as usize)
        }),
    ];

    // Patterns that hurt a midpoint pivot.
    let mut extra_pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("saws_short", |size| {
            patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        pattern_providers.append(&mut extra_pattern_providers);
    }

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 8, 11, 16, 20, 24, 36, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
        1_000_000,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_size in test_sizes {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_size, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        bench_patterns(c, test_size, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        bench_patterns(c, test_size, "f64", |values| {
            values.iter().map(|val| *val as f64).collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
