use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tang_gl::{Mat4, Quat, Vec3};
use tang_gl_bench::*;

// ============================================================
// Vec3
// ============================================================

fn vec3_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/normalize");

    group.bench_function("tang_f32", |b| {
        let v = random_vec3f32(1)[0];
        b.iter(|| black_box(black_box(v).normalize()))
    });

    group.bench_function("tang_f64", |b| {
        let v = random_vec3f64(1)[0];
        b.iter(|| black_box(black_box(v).normalize()))
    });

    group.bench_function("glam", |b| {
        let v = to_glam_vec3(random_vec3f32(1)[0]);
        b.iter(|| black_box(black_box(v).normalize()))
    });

    group.finish();
}

fn vec3_transform_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/transform_mat4");

    group.bench_function("tang", |b| {
        let v = random_vec3f32(1)[0];
        let m = random_mat4f32(1)[0];
        b.iter(|| black_box(black_box(v).transform_mat4(black_box(&m))))
    });

    group.bench_function("glam", |b| {
        let v = to_glam_vec3(random_vec3f32(1)[0]);
        let m = to_glam_mat4(random_mat4f32(1)[0]);
        b.iter(|| black_box(black_box(m).project_point3(black_box(v))))
    });

    group.finish();
}

fn vec3_transform_quat(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/transform_quat");

    group.bench_function("tang", |b| {
        let v = random_vec3f32(1)[0];
        let q = random_quatf32(1)[0];
        b.iter(|| black_box(black_box(v).transform_quat(black_box(&q))))
    });

    group.bench_function("glam", |b| {
        let v = to_glam_vec3(random_vec3f32(1)[0]);
        let q = to_glam_quat(random_quatf32(1)[0]);
        b.iter(|| black_box(black_box(q) * black_box(v)))
    });

    group.finish();
}

// ============================================================
// Mat4
// ============================================================

fn mat4_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4/mul");
    let ms = random_mat4f32(2);

    group.bench_function("tang", |b| {
        let (x, y) = (ms[0], ms[1]);
        b.iter(|| black_box(black_box(x) * black_box(y)))
    });

    group.bench_function("nalgebra", |b| {
        let (x, y) = (to_nalgebra_mat4(ms[0]), to_nalgebra_mat4(ms[1]));
        b.iter(|| black_box(black_box(x) * black_box(y)))
    });

    group.bench_function("glam", |b| {
        let (x, y) = (to_glam_mat4(ms[0]), to_glam_mat4(ms[1]));
        b.iter(|| black_box(black_box(x) * black_box(y)))
    });

    group.finish();
}

fn mat4_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4/inverse");
    let m = random_mat4f32(1)[0];

    group.bench_function("tang", |b| {
        b.iter(|| black_box(black_box(m).try_inverse()))
    });

    group.bench_function("nalgebra", |b| {
        let n = to_nalgebra_mat4(m);
        b.iter(|| black_box(black_box(n).try_inverse()))
    });

    group.bench_function("glam", |b| {
        let g = to_glam_mat4(m);
        b.iter(|| black_box(black_box(g).inverse()))
    });

    group.finish();
}

fn mat4_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4/decompose");
    let m = random_mat4f32(1)[0];

    group.bench_function("tang", |b| {
        b.iter(|| black_box(black_box(m).decompose()))
    });

    group.bench_function("glam", |b| {
        let g = to_glam_mat4(m);
        b.iter(|| black_box(black_box(g).to_scale_rotation_translation()))
    });

    group.finish();
}

fn mat4_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4/camera");
    let eye = Vec3::new(3.0_f32, 4.0, 5.0);

    group.bench_function("look_at", |b| {
        b.iter(|| black_box(Mat4::look_at(black_box(eye), Vec3::zero(), Vec3::y())))
    });

    group.bench_function("perspective", |b| {
        b.iter(|| black_box(Mat4::perspective(black_box(1.0_f32), 1.5, 0.1, Some(100.0))))
    });

    group.finish();
}

// ============================================================
// Quat
// ============================================================

fn quat_slerp(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/slerp");
    let qs = random_quatf32(2);

    group.bench_function("tang", |b| {
        let (x, y) = (qs[0], qs[1]);
        b.iter(|| black_box(black_box(x).slerp(black_box(&y), 0.3)))
    });

    group.bench_function("nalgebra", |b| {
        let (x, y) = (to_nalgebra_quat(qs[0]), to_nalgebra_quat(qs[1]));
        b.iter(|| black_box(black_box(x).slerp(black_box(&y), 0.3)))
    });

    group.bench_function("glam", |b| {
        let (x, y) = (to_glam_quat(qs[0]), to_glam_quat(qs[1]));
        b.iter(|| black_box(black_box(x).slerp(black_box(y), 0.3)))
    });

    group.finish();
}

fn quat_from_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/from_mat4");
    let m = Mat4::from_quat(&random_quatf32(1)[0]);

    group.bench_function("tang", |b| {
        b.iter(|| black_box(Quat::from_mat3(&black_box(m).upper_left_3x3())))
    });

    group.bench_function("glam", |b| {
        let g = to_glam_mat4(m);
        b.iter(|| black_box(glam::Quat::from_mat4(&black_box(g))))
    });

    group.finish();
}

criterion_group!(
    benches,
    vec3_normalize,
    vec3_transform_mat4,
    vec3_transform_quat,
    mat4_mul,
    mat4_inverse,
    mat4_decompose,
    mat4_camera,
    quat_slerp,
    quat_from_mat4,
);
criterion_main!(benches);
