use criterion::{black_box, criterion_group, criterion_main, Criterion};
use batch_splitter::{prepare, process_blocking, BatchConfig, OperationDescriptor, ReturnKind};
use serde_json::{json, Value};

fn insert_all() -> OperationDescriptor {
    let name = OperationDescriptor::qualify("UserMapper", "insert_all");
    OperationDescriptor::new(name, ReturnKind::Integer).param("List<User>")
}

fn benchmark_prepare(c: &mut Criterion) {
    let descriptor = insert_all();
    let args = vec![Value::Array((0..10_000).map(|i| json!(i)).collect())];
    let config = BatchConfig::default();

    c.bench_function("prepare_10k", |b| {
        b.iter(|| prepare(black_box(&descriptor), black_box(&args), &config))
    });
}

fn benchmark_process_blocking(c: &mut Criterion) {
    let descriptor = insert_all();
    let args = vec![Value::Array((0..10_000).map(|i| json!(i)).collect())];
    let config = BatchConfig::default();

    c.bench_function("process_blocking_10k", |b| {
        b.iter(|| {
            process_blocking(&descriptor, args.clone(), &config, |sub_args| {
                Ok::<_, String>(json!(sub_args[0].as_array().map_or(0, Vec::len)))
            })
        })
    });
}

criterion_group!(benches, benchmark_prepare, benchmark_process_blocking);
criterion_main!(benches);
