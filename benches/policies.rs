//! Policy benchmarks: FIFO vs LRU vs Optimal on the same trace.
//!
//! Run with:
//!     cargo bench --bench policies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagesim::{compare, simulate, PageId, PolicyKind, DEFAULT_FRAME_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// References per synthetic trace.
const REFS: usize = 2_000;

/// Distinct pages the trace draws from.
const PAGES: i64 = 32;

/// Seed for the synthetic trace, fixed so runs are comparable.
const SEED: u64 = 0x5EED;

/// Seeded random trace with some locality.
fn synthetic_trace() -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut last = 0i64;
    (0..REFS)
        .map(|_| {
            // Half the time stay near the previous page.
            last = if rng.gen_bool(0.5) {
                (last + rng.gen_range(0..3)) % PAGES
            } else {
                rng.gen_range(0..PAGES)
            };
            PageId::new(last)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Group 1: single policy
// ---------------------------------------------------------------------------

fn bench_policies(c: &mut Criterion) {
    let trace = synthetic_trace();
    let mut group = c.benchmark_group("simulate");
    group.throughput(Throughput::Elements(REFS as u64));

    for policy in PolicyKind::ALL {
        for frame_size in [DEFAULT_FRAME_SIZE, 8, 16] {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), frame_size),
                &frame_size,
                |b, &frame_size| b.iter(|| simulate(policy, black_box(&trace), frame_size)),
            );
        }
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Group 2: full comparison
// ---------------------------------------------------------------------------

fn bench_compare(c: &mut Criterion) {
    let trace = synthetic_trace();
    c.bench_function("compare_all", |b| {
        b.iter(|| compare(black_box(&trace), DEFAULT_FRAME_SIZE))
    });
}

criterion_group!(benches, bench_policies, bench_compare);
criterion_main!(benches);
