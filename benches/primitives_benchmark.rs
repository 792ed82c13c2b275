/*!
 * Concurrency Primitives Benchmarks
 *
 * Channel hand-off throughput and parallel-reduce scaling against the
 * sequential fold
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::thread;
use sync_core::{parallel_reduce_with, swap, BoundedChannel, Peer, ReduceConfig, RwCoordinator};

fn bench_channel_handoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_handoff");

    for capacity in [1usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let chan = Arc::new(BoundedChannel::new(capacity).unwrap());
                    let chan_clone = chan.clone();

                    let consumer = thread::spawn(move || {
                        for _ in 0..1_000u64 {
                            black_box(chan_clone.take());
                        }
                    });

                    for i in 0..1_000u64 {
                        chan.put(i);
                    }
                    consumer.join().unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_parallel_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_reduce");
    let data: Vec<u64> = (0..1_000_000).collect();

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(data.iter().sum::<u64>()))
    });

    for workers in [2usize, 4, 8] {
        let config = ReduceConfig {
            min_block_size: 1_024,
            max_workers: Some(workers),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &config,
            |b, config| {
                b.iter(|| {
                    black_box(parallel_reduce_with(&data, 0, |a, b| a + b, config).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_uncontended_read(c: &mut Criterion) {
    let coord = RwCoordinator::new(4, 0u64).unwrap();
    c.bench_function("rw_uncontended_read", |b| {
        b.iter(|| black_box(coord.read(|v| *v)))
    });
}

fn bench_uncontended_swap(c: &mut Criterion) {
    let a = Peer::new(1u64);
    let other = Peer::new(2u64);
    c.bench_function("swap_uncontended", |b| {
        b.iter(|| swap(black_box(&a), black_box(&other)))
    });
}

criterion_group!(
    benches,
    bench_channel_handoff,
    bench_parallel_reduce,
    bench_uncontended_read,
    bench_uncontended_swap
);
criterion_main!(benches);
