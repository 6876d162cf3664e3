use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linea::Vec3;
use linea_bench::*;

fn mat3_lu(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat3/lu");
    let m = random_mat3f64(1)[0];

    group.bench_function("decompose", |b| {
        b.iter(|| black_box(black_box(m).decompose()))
    });

    group.bench_function("solve_lu", |b| {
        let (l, u) = m.decompose();
        let rhs = Vec3::new(1.0, -1.0, 0.5);
        b.iter(|| black_box(u.solve_u(l.solve_l(black_box(rhs)))))
    });

    group.bench_function("invert", |b| {
        b.iter(|| {
            let mut m = black_box(m);
            m.invert();
            black_box(m)
        })
    });

    group.bench_function("determinant", |b| {
        b.iter(|| black_box(black_box(m).determinant()))
    });

    group.finish();
}

fn mat4_lu(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4/lu");

    group.bench_function("decompose_f64", |b| {
        let m = random_mat4f64(1)[0];
        b.iter(|| black_box(black_box(m).decompose()))
    });

    group.bench_function("invert_f64", |b| {
        let m = random_mat4f64(1)[0];
        b.iter(|| black_box(black_box(m).inverted()))
    });

    group.bench_function("invert_f32", |b| {
        let m = random_mat4f32(1)[0];
        b.iter(|| black_box(black_box(m).inverted()))
    });

    group.finish();
}

criterion_group!(benches, mat3_lu, mat4_lu);
criterion_main!(benches);
