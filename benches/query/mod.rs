use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_search_tree::SearchTree;

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let t = SearchTree::<u16, usize>::default();

    for _i in 0..n_values {
        let range = rand.next_range();
        t.insert(range, 42_usize).unwrap();
    }

    bench_entries(n_values, g, &t);
    bench_any_intersection(n_values, g, &t);
    bench_all_intersections(n_values, g, &t);
    bench_ceil(n_values, g, &t);
    bench_floor(n_values, g, &t);
    bench_rank(n_values, g, &t);
}

fn bench_entries<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &SearchTree<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "entries",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.entries() {
                black_box(v);
            }
        })
    });
}

macro_rules! query_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &SearchTree<u16, usize>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                // Queries per second
                g.throughput(Throughput::Elements(1));
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box(t.$name(&(4_200..=10_000))))
                });
            }
        }
    }
}

query_bench!(any_intersection);
query_bench!(all_intersections);
query_bench!(ceil);
query_bench!(floor);
query_bench!(rank);
