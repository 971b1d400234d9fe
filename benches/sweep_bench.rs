//! Benchmarks for sweeping and analysis

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::fs::{self, File};
use std::io::Write;
use temp_sweeper::sweeper::{analyze, RenameProbe, SweepTarget, Sweeper};
use tempfile::TempDir;

/// Create a benchmark directory with the given number of files spread over directories
fn create_benchmark_dir(file_count: usize, dir_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let files_per_dir = file_count / dir_count.max(1);

    for d in 0..dir_count {
        let subdir = root.join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();

        for f in 0..files_per_dir {
            let mut file = File::create(subdir.join(format!("file{}.tmp", f))).unwrap();
            file.write_all(&[b'x'; 1024]).unwrap();
        }
    }

    let remaining = file_count - (files_per_dir * dir_count);
    for f in 0..remaining {
        let mut file = File::create(root.join(format!("root_file{}.tmp", f))).unwrap();
        file.write_all(&[b'y'; 1024]).unwrap();
    }

    dir
}

fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(20);

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("platform_probe", size), size, |b, &size| {
            let sweeper = Sweeper::new();
            b.iter_batched(
                || create_benchmark_dir(size, 10),
                |dir| sweeper.sweep(&SweepTarget::new(dir.path()).with_remove_empty_dirs(true)),
                BatchSize::PerIteration,
            )
        });

        group.bench_with_input(BenchmarkId::new("rename_probe", size), size, |b, &size| {
            let sweeper = Sweeper::new().with_probe(RenameProbe);
            b.iter_batched(
                || create_benchmark_dir(size, 10),
                |dir| sweeper.sweep(&SweepTarget::new(dir.path())),
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

fn benchmark_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for size in [100, 1000].iter() {
        let dir = create_benchmark_dir(*size, 10);
        let target = SweepTarget::new(dir.path());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| analyze(black_box(&target)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sweep, benchmark_analyze);
criterion_main!(benches);
