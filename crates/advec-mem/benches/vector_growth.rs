use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use advec_mem::Vector;

fn push_back(c: &mut Criterion) {
    c.bench_function("push 10k u64", |b| {
        b.iter(|| {
            let mut vec = Vector::new();
            for i in 0..10_000u64 {
                vec.push(black_box(i)).unwrap();
            }
            vec
        })
    });
    c.bench_function("push 10k u64 reserved", |b| {
        b.iter(|| {
            let mut vec = Vector::with_capacity(10_000).unwrap();
            for i in 0..10_000u64 {
                vec.push(black_box(i)).unwrap();
            }
            vec
        })
    });
}

fn insert_erase_front(c: &mut Criterion) {
    c.bench_function("insert + erase front of 1k strings", |b| {
        let mut vec: Vector<String> = (0..1_000).map(|i| i.to_string()).collect();
        vec.reserve(1_001).unwrap();
        b.iter(|| {
            vec.insert(0, black_box(String::from("front"))).unwrap();
            vec.erase(0);
        })
    });
}

criterion_group!(benches, push_back, insert_erase_front);
criterion_main!(benches);
