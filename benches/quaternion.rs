use criterion::{Criterion, criterion_group, criterion_main};
use ember_math::{quaternion::Quaternion, vector::Vector3};
use std::hint::black_box;

fn bench_quaternion(c: &mut Criterion) {
    let a = Quaternion::from_euler_degrees(Vector3::new(30.0, 45.0, 60.0));
    let b = Quaternion::from_euler_degrees(Vector3::new(10.0, 20.0, 30.0));

    c.bench_function("quaternion_mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b));
    });

    let angles = Vector3::new(30.0, 45.0, 60.0);

    c.bench_function("quaternion_from_euler_degrees", |bencher| {
        bencher.iter(|| Quaternion::from_euler_degrees(black_box(angles)));
    });
}

criterion_group!(benches, bench_quaternion);
criterion_main!(benches);
