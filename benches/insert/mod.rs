use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_search_tree::{MultiValueSearchTree, SearchTree};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    tree: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.tree), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_single(&mut g, n_values);
        bench_multi(&mut g, n_values);
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// intervals into an empty single-value tree.
fn bench_single<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        tree: "single",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (SearchTree::<u16, usize>::default(), Lfsr::default()),
            |(t, mut rand)| {
                for _i in 0..n_values {
                    let range = rand.next_range();
                    t.insert(range, 42_usize).unwrap();
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}

/// As [`bench_single()`], appending a single value per key into a
/// multi-value tree.
fn bench_multi<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        tree: "multi",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (MultiValueSearchTree::<u16, usize>::default(), Lfsr::default()),
            |(t, mut rand)| {
                for _i in 0..n_values {
                    let range = rand.next_range();
                    t.insert(range, [42_usize]).unwrap();
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
