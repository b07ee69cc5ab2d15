use bench::Op;
use bench::RuntimeConfig;
use bench::Workload;
use bench::default_rng;
use bench::generate_ops;
use bench::generate_ranges;
use bench::generate_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rand::Rng;
use segment_tree::{AggregatePolicy, Gcd, Min, SegmentTree, Sum};
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

fn bench_ops<M, P>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &[P::Value],
    ops: &[Op<P::Value>],
) where
    M: Measurement,
    P: AggregatePolicy,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let mut st = SegmentTree::<P>::from(black_box(values));
            for op in ops {
                match op {
                    Op::Query(l, r) => {
                        black_box(st.query(black_box(*l), black_box(*r)).unwrap());
                    }
                    Op::Update(i, v) => st.update(*i, v.clone()).unwrap(),
                }
            }
            black_box(st);
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("segment_tree/build");

    for &size in &SIZES {
        RuntimeConfig::for_size(size).apply(&mut group);
        let values = generate_values(&mut rng, size, VALUE_RANGE);
        group.bench_function(BenchmarkId::new("min", size), |bencher| {
            bencher.iter(|| SegmentTree::<Min<i64>>::from(black_box(values.as_slice())))
        });
        group.bench_function(BenchmarkId::new("rebuild", size), |bencher| {
            let mut st = SegmentTree::<Min<i64>>::from(values.as_slice());
            bencher.iter(|| {
                st.build();
                black_box(st.height());
            })
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("segment_tree/query");

    for &size in &SIZES {
        RuntimeConfig::for_size(size).apply(&mut group);
        let values = generate_values(&mut rng, size, VALUE_RANGE);
        let ranges = generate_ranges(&mut rng, size, size);
        let st = SegmentTree::<Min<i64>>::from(values.as_slice());

        group.bench_function(BenchmarkId::new("min", size), |bencher| {
            bencher.iter(|| {
                let mut acc = 0_i64;
                for &(l, r) in &ranges {
                    acc ^= st.query(black_box(l), black_box(r)).unwrap();
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

fn bench_workloads(c: &mut Criterion) {
    let mut rng = default_rng();

    for workload in Workload::ALL {
        let mut group = c.benchmark_group(format!("segment_tree/workload/{}", workload.label()));

        for &size in &SIZES {
            RuntimeConfig::for_size(size).apply(&mut group);

            let values = generate_values(&mut rng, size, VALUE_RANGE);
            let ops = generate_ops(&mut rng, size, size, workload, |rng| {
                rng.random_range(VALUE_RANGE)
            });
            bench_ops::<_, Min<i64>>(&mut group, "min", size, &values, &ops);
            bench_ops::<_, Sum<i64>>(&mut group, "sum", size, &values, &ops);

            let values: Vec<u64> = (0..size).map(|_| 6 * rng.random_range(1..=1_000_000)).collect();
            let ops = generate_ops(&mut rng, size, size, workload, |rng| {
                6 * rng.random_range(1..=1_000_000)
            });
            bench_ops::<_, Gcd>(&mut group, "gcd", size, &values, &ops);
        }

        group.finish();
    }
}

criterion_group!(benches, bench_build, bench_query, bench_workloads);
criterion_main!(benches);
