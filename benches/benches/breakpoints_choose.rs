// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_breakpoints::{Breakpoint, BreakpointSet, Lazy};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_scalars(count: usize, max: f64) -> Vec<f64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_f64() * max).collect()
}

fn standard_set() -> BreakpointSet<u32> {
    let mut set = BreakpointSet::empty();
    for (i, bp) in Breakpoint::ALL.into_iter().enumerate() {
        set.set(bp, Some(i as u32));
    }
    set
}

fn custom_heavy_set(n: usize) -> BreakpointSet<u32> {
    let mut set = standard_set();
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for i in 0..n {
        set.set_custom(rng.next_f64() * 4000.0, Some(100 + i as u32));
    }
    set
}

fn bench_choose(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose");
    let scalars = gen_scalars(1024, 2000.0);
    group.throughput(Throughput::Elements(scalars.len() as u64));

    let sparse = BreakpointSet::empty()
        .with(Breakpoint::Sm, 1_u32)
        .with(Breakpoint::Xl, 2_u32);
    group.bench_function("sparse_standard", |b| {
        b.iter(|| {
            for &x in &scalars {
                black_box(sparse.choose(black_box(x)).ok());
            }
        });
    });

    let full = standard_set();
    group.bench_function("full_standard", |b| {
        b.iter(|| {
            for &x in &scalars {
                black_box(full.choose(black_box(x)).ok());
            }
        });
    });

    for &n in &[8usize, 64, 512] {
        let set = custom_heavy_set(n);
        group.bench_function(format!("custom_n{}", n), |b| {
            b.iter(|| {
                for &x in &scalars {
                    black_box(set.choose(black_box(x)).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_lazy(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy");
    let eager = BreakpointSet::empty()
        .with(Breakpoint::Xs, vec![0_u8; 64])
        .with(Breakpoint::Md, vec![1_u8; 256])
        .with(Breakpoint::Xl, vec![2_u8; 1024]);
    group.bench_function("into_lazy", |b| {
        b.iter_batched(
            || eager.clone(),
            |set| black_box(set.into_lazy::<()>()),
            BatchSize::SmallInput,
        );
    });

    let lazy: BreakpointSet<Lazy<'_, (), Vec<u8>>> = eager.clone().into_lazy();
    group.bench_function("choose_and_realize", |b| {
        b.iter(|| {
            let producer = lazy.choose(black_box(900.0)).ok();
            black_box(producer.map(|p| p.realize(&())));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_choose, bench_lazy);
criterion_main!(benches);
