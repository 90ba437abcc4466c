use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use json_workload::{decode, encode, generate, validate, Format, Shape};

fn encode_benchmark(c: &mut Criterion) {
    let document = generate(Shape::default());
    let mut group = c.benchmark_group("Encode");

    group.sample_size(10);

    for format in [Format::Pretty, Format::Compact] {
        let len = encode(&document, format).unwrap().len();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", format)),
            &document,
            |b, data| {
                b.iter(|| {
                    let _ = encode(black_box(data), format).unwrap();
                })
            },
        );
    }
}

fn decode_benchmark(c: &mut Criterion) {
    let document = generate(Shape::default());
    let mut group = c.benchmark_group("Decode");

    group.sample_size(10);

    for format in [Format::Pretty, Format::Compact] {
        let json = encode(&document, format).unwrap();

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", format)),
            &json,
            |b, data| {
                b.iter(|| {
                    let _ = decode(black_box(data)).unwrap();
                })
            },
        );
    }
}

fn validate_benchmark(c: &mut Criterion) {
    let shape = Shape::default();
    let value = decode(&encode(&generate(shape), Format::Compact).unwrap()).unwrap();

    c.bench_function("Validate", |b| {
        b.iter(|| {
            let _ = validate(black_box(&value), shape).unwrap();
        })
    });
}

criterion_group!(benches, encode_benchmark, decode_benchmark, validate_benchmark);
criterion_main!(benches);
