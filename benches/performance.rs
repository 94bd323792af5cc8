use assoc_array::AssociativeArray;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sequential_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_set");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("distinct_keys", size), size, |b, &size| {
            b.iter(|| {
                let mut array = AssociativeArray::new();

                for i in 0..size {
                    black_box(array.set(i, i));
                }

                black_box(array.size())
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get_present", size), size, |b, &size| {
            let array: AssociativeArray<_, _> = (0..size).map(|i| (format!("key_{i}"), i)).collect();
            let keys: Vec<_> = (0..size).map(|i| format!("key_{i}")).collect();

            b.iter(|| {
                for key in &keys {
                    let _ = black_box(array.get(key));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("has_key_absent", size), size, |b, &size| {
            let array: AssociativeArray<_, _> = (0..size).map(|i| (i, i)).collect();

            b.iter(|| black_box(array.has_key(&usize::MAX)));
        });
    }
    group.finish();
}

fn bench_remove_and_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_and_reuse");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("churn", size), size, |b, &size| {
            b.iter(|| {
                let mut array: AssociativeArray<_, _> = (0..size).map(|i| (i, i)).collect();

                for i in (0..size).step_by(2) {
                    black_box(array.remove(&i));
                }
                for i in size..size + size / 2 {
                    array.set(i, i);
                }

                black_box(array.capacity())
            });
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let array: AssociativeArray<_, _> = (0..size).map(|i| (i, i)).collect();

            b.iter(|| {
                for pair in black_box(&array) {
                    black_box(pair);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_set,
    bench_lookup,
    bench_remove_and_reuse,
    bench_iteration
);
criterion_main!(benches);
