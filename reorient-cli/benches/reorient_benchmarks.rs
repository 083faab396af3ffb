use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use reorient_core::algorithms::intervals::{Interval, difference, merge};
use reorient_core::config::ReorientConfig;
use reorient_core::oracle::GeneFinder;
use reorient_core::sequence::Record;
use reorient_core::{Reorienter, reorient};

use criterion_config::configure_criterion;

// Gene-dense synthetic plasmid: `genes` GCC genes separated by TTAA
// spacers, rotated so the first gene is cut by the ends.
fn synthetic_plasmid(genes: usize) -> Vec<u8> {
    let mut sequence = Vec::new();
    for i in 0..genes {
        sequence.extend_from_slice(b"ATG");
        sequence.extend(b"GCC".repeat(40 + i % 20));
        sequence.extend_from_slice(b"TAA");
        sequence.extend(b"TTAA".repeat(10 + i % 7));
    }
    sequence.rotate_left(60);
    sequence
}

fn synthetic_intervals(count: usize, step: usize, width: usize) -> Vec<Interval> {
    (0..count)
        .map(|i| Interval::new(i * step, i * step + width))
        .collect()
}

fn benchmark_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("intervals");

    for count in [100, 1_000, 10_000] {
        let genes = synthetic_intervals(count, 1_000, 900);
        let whole = [Interval::new(0, count * 1_000)];

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("merge", count), &genes, |b, genes| {
            b.iter(|| merge(black_box(genes)));
        });
        group.bench_with_input(BenchmarkId::new("difference", count), &genes, |b, genes| {
            b.iter(|| difference(black_box(&whole), black_box(genes)));
        });
    }

    group.finish();
}

fn benchmark_rotation_search(c: &mut Criterion) {
    let oracle = GeneFinder::default();
    let config = ReorientConfig {
        threads: 1,
        ..Default::default()
    };
    let mut group = c.benchmark_group("rotation_search");

    for genes in [10, 100, 1_000] {
        let sequence = synthetic_plasmid(genes);
        group.throughput(Throughput::Bytes(sequence.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(genes), &sequence, |b, sequence| {
            b.iter(|| {
                let record = Record::new("plasmid", black_box(sequence.clone()), &oracle).unwrap();
                reorient(record, &oracle, &config).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_thread_scaling(c: &mut Criterion) {
    let mut input = Vec::new();
    for i in 0..64 {
        input.extend_from_slice(format!(">plasmid_{i}\n").as_bytes());
        input.extend(synthetic_plasmid(20 + i % 10));
        input.push(b'\n');
    }

    let mut group = c.benchmark_group("thread_scaling");
    group.throughput(Throughput::Bytes(input.len() as u64));

    for threads in [1, 2, 4, 8] {
        let reorienter = Reorienter::new(
            ReorientConfig {
                threads,
                ..Default::default()
            },
            GeneFinder::default(),
        );
        group.bench_with_input(BenchmarkId::from_parameter(threads), &input, |b, input| {
            b.iter(|| {
                let mut output = Vec::with_capacity(input.len() * 2);
                reorienter
                    .run(black_box(&input[..]), &mut output, None)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets = benchmark_intervals,
    benchmark_rotation_search,
    benchmark_thread_scaling
);
criterion_main!(benches);
