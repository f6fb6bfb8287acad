use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tang_gl::{for_each, DualQuat, Vec3};
use tang_gl_bench::*;

fn for_each_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch/for_each_vec3");

    for n in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let m = random_mat4f32(1)[0];

        group.bench_with_input(BenchmarkId::new("transform_mat4", n), &n, |b, &n| {
            let mut buf = random_packed_f32(n);
            b.iter(|| {
                for_each(black_box(&mut buf), 0, 0, 0, |v: &mut Vec3<f32>| {
                    *v = v.transform_mat4(&m)
                })
            })
        });

        group.bench_with_input(BenchmarkId::new("manual_loop", n), &n, |b, &n| {
            let mut buf = random_packed_f32(n);
            b.iter(|| {
                for chunk in black_box(&mut buf).chunks_exact_mut(3) {
                    let v = Vec3::from_slice(chunk).transform_mat4(&m);
                    chunk.copy_from_slice(&v.to_array());
                }
            })
        });
    }

    group.finish();
}

fn dual_quat_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch/dual_quat_points");
    let n = 10_000;
    group.throughput(Throughput::Elements(n as u64));

    let dq = DualQuat::from_rotation_translation(&random_quatf32(1)[0], Vec3::new(1.0, 2.0, 3.0));
    group.bench_function("transform_point", |b| {
        let mut buf = random_packed_f32(n);
        b.iter(|| {
            for_each(black_box(&mut buf), 0, 0, 0, |v: &mut Vec3<f32>| {
                *v = dq.transform_point(*v)
            })
        })
    });

    group.finish();
}

criterion_group!(benches, for_each_transform, dual_quat_points);
criterion_main!(benches);
