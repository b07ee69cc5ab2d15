use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion sample size / warm-up / measurement time for one size tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub sample_size: usize,
    pub warm_up: Duration,
    pub measurement: Duration,
}

pub const SMALL_RUNTIME: RuntimeConfig = RuntimeConfig {
    sample_size: 15,
    warm_up: Duration::from_millis(100),
    measurement: Duration::from_millis(200),
};

pub const MEDIUM_RUNTIME: RuntimeConfig = RuntimeConfig {
    sample_size: 15,
    warm_up: Duration::from_millis(500),
    measurement: Duration::from_millis(1000),
};

pub const LARGE_RUNTIME: RuntimeConfig = RuntimeConfig {
    sample_size: 10,
    warm_up: Duration::from_millis(800),
    measurement: Duration::from_millis(1500),
};

impl RuntimeConfig {
    pub fn for_size(size: usize) -> Self {
        if size <= 4_096 {
            SMALL_RUNTIME
        } else if size <= 16_384 {
            MEDIUM_RUNTIME
        } else {
            LARGE_RUNTIME
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(self.warm_up);
        group.measurement_time(self.measurement);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Mix of point updates and range queries issued against a tree of size `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workload {
    QueryOnly,
    Mixed,
    UpdateHeavy,
}

impl Workload {
    pub const ALL: [Workload; 3] = [Self::QueryOnly, Self::Mixed, Self::UpdateHeavy];

    pub fn label(self) -> &'static str {
        match self {
            Self::QueryOnly => "query_only",
            Self::Mixed => "mixed",
            Self::UpdateHeavy => "update_heavy",
        }
    }

    /// Percentage of operations that are updates.
    pub fn update_percent(self) -> u32 {
        match self {
            Self::QueryOnly => 0,
            Self::Mixed => 50,
            Self::UpdateHeavy => 90,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op<T> {
    Query(usize, usize),
    Update(usize, T),
}

pub fn generate_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// Non-empty half-open ranges inside `[0, n)`.
pub fn generate_ranges<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<(usize, usize)> {
    assert!(n > 0);
    (0..count)
        .map(|_| {
            let l = rng.random_range(0..n);
            let r = rng.random_range((l + 1)..=n);
            (l, r)
        })
        .collect()
}

/// `count` operations over `[0, n)` following `workload`; update values come from `value`.
pub fn generate_ops<R, T, F>(
    rng: &mut R,
    n: usize,
    count: usize,
    workload: Workload,
    mut value: F,
) -> Vec<Op<T>>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    assert!(n > 0);
    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        if rng.random_range(0..100) < workload.update_percent() {
            let i = rng.random_range(0..n);
            ops.push(Op::Update(i, value(rng)));
        } else {
            let l = rng.random_range(0..n);
            let r = rng.random_range((l + 1)..=n);
            ops.push(Op::Query(l, r));
        }
    }
    ops
}
