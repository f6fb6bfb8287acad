//! Randomized property tests over the public API.
//!
//! Every test draws from a fixed seed so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tang_gl::*;

const CASES: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_1234)
}

fn vec3(rng: &mut StdRng, r: f64) -> Vec3<f64> {
    Vec3::new(rng.gen_range(-r..r), rng.gen_range(-r..r), rng.gen_range(-r..r))
}

fn affine(rng: &mut StdRng) -> (Quat<f64>, Vec3<f64>, Vec3<f64>) {
    let q = Quat::random(rng);
    let t = vec3(rng, 10.0);
    let s = Vec3::new(rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0));
    (q, t, s)
}

// ============================================================
// Inversion
// ============================================================

#[test]
fn mat4_inverse_is_an_involution() {
    let mut rng = rng();
    for _ in 0..CASES {
        let (q, t, s) = affine(&mut rng);
        let m = Mat4::from_rotation_translation_scale(&q, t, s);
        let inv = m.try_inverse().unwrap();
        assert_approx_eq!(m * inv, Mat4::identity());
        assert_approx_eq!(inv.try_inverse().unwrap(), m);
    }
}

#[test]
fn mat2_mat2d_mat3_inverse_roundtrip() {
    let mut rng = rng();
    let mut checked = 0;
    while checked < CASES {
        let a: [f64; 9] = core::array::from_fn(|_| rng.gen_range(-1.0..1.0));
        let m3 = Mat3::from_cols_array(&a);
        let m2 = Mat2::from_cols_array(&[a[0], a[1], a[2], a[3]]);
        let m2d = Mat2d::from_cols_array(&[a[0], a[1], a[2], a[3], a[4], a[5]]);
        if m3.determinant().abs() < 0.1 || m2.determinant().abs() < 0.1 {
            continue;
        }
        assert_approx_eq!(m3 * m3.try_inverse().unwrap(), Mat3::identity());
        assert_approx_eq!(m3.try_inverse().unwrap().try_inverse().unwrap(), m3);
        assert_approx_eq!(m2 * m2.try_inverse().unwrap(), Mat2::identity());
        assert_approx_eq!(m2d * m2d.try_inverse().unwrap(), Mat2d::identity());
        checked += 1;
    }
}

#[test]
fn small_scale_matrices_are_invertible() {
    let mut rng = rng();
    for _ in 0..CASES {
        let (q, t, _) = affine(&mut rng);
        let scale = rng.gen_range(1e-4..1e-2);
        let m = Mat4::from_rotation_translation_scale(&q, t * scale, Vec3::splat(scale));
        let inv = m.try_inverse().unwrap();
        assert_approx_eq!(m * inv, Mat4::identity(), Config::new(1e-9).unwrap());
        assert!(Mat3::normal_from_mat4(&m).is_some());
    }
}

#[test]
fn zero_row_is_singular() {
    let mut rng = rng();
    for _ in 0..CASES {
        let mut a: [f64; 16] = core::array::from_fn(|_| rng.gen_range(-5.0..5.0));
        let row = rng.gen_range(0..4);
        for col in 0..4 {
            a[col * 4 + row] = 0.0;
        }
        assert_eq!(Mat4::from_cols_array(&a).try_inverse(), None);

        let mut b: [f64; 9] = core::array::from_fn(|_| rng.gen_range(-5.0..5.0));
        let row = rng.gen_range(0..3);
        for col in 0..3 {
            b[col * 3 + row] = 0.0;
        }
        assert_eq!(Mat3::from_cols_array(&b).try_inverse(), None);
        assert_eq!(Mat2::from_cols_array(&[0.0, b[1], 0.0, b[3]]).try_inverse(), None);
        assert_eq!(Mat2d::from_cols_array(&[0.0, b[1], 0.0, b[3], b[4], b[5]]).try_inverse(), None);
    }
}

#[test]
fn ldu_reconstructs_random_matrices() {
    let mut rng = rng();
    for _ in 0..CASES {
        let a = Mat2::new(
            rng.gen_range(0.5..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        let (l, d, u) = a.ldu().unwrap();
        assert_eq!((l.c0.x, l.c1.x, l.c1.y), (1.0, 0.0, 1.0));
        assert_eq!((d.c0.y, d.c1.x), (0.0, 0.0));
        assert_eq!((u.c0.x, u.c0.y, u.c1.y), (1.0, 0.0, 1.0));
        assert_approx_eq!(l * d * u, a);
    }
}

// ============================================================
// Quaternions
// ============================================================

#[test]
fn random_quats_are_unit_and_self_slerp_is_identity() {
    let mut rng = rng();
    for _ in 0..CASES {
        let q = Quat::<f64>::random(&mut rng);
        assert!(approx_eq(q.norm(), 1.0));
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_approx_eq!(q.slerp(&q, t), q);
        }
    }
}

#[test]
fn slerp_endpoints_and_short_arc() {
    let mut rng = rng();
    for _ in 0..CASES {
        let a = Quat::<f64>::random(&mut rng);
        let b = Quat::<f64>::random(&mut rng);
        assert_approx_eq!(a.slerp(&b, 0.0), a);
        let end = a.slerp(&b, 1.0);
        // b and -b are the same rotation; slerp lands on the one nearer a
        let near_b = if a.dot(&b) < 0.0 { -b } else { b };
        assert_approx_eq!(end, near_b);

        let mid = a.slerp(&b, 0.5);
        assert_approx_eq!(mid, a.slerp(&-b, 0.5));
        // Midpoint is equidistant and no further than half the short arc
        let half = a.angle_between(&b) / 2.0;
        assert!((a.angle_between(&mid) - half).abs() < 1e-6);
        assert!(mid.dot(&a) >= 0.0);
    }
}

#[test]
fn half_turn_axis_angle() {
    let q = Quat::from_axis_angle(Vec3::z(), core::f64::consts::PI);
    let (axis, angle) = q.axis_angle();
    assert!(approx_eq(angle, core::f64::consts::PI));
    assert_approx_eq!(axis, Vec3::z());
}

#[test]
fn axis_angle_roundtrip() {
    let mut rng = rng();
    for _ in 0..CASES {
        let axis = vec3(&mut rng, 1.0).normalize();
        let angle = rng.gen_range(0.01..6.2);
        let (a, t) = Quat::from_axis_angle(axis, angle).axis_angle();
        assert!((t - angle).abs() < 1e-9);
        assert_approx_eq!(a, axis);
    }
}

#[test]
fn rotation_paths_agree() {
    let mut rng = rng();
    for _ in 0..CASES {
        let q = Quat::<f64>::random(&mut rng);
        let v = vec3(&mut rng, 5.0);
        let by_quat = v.transform_quat(&q);
        assert_approx_eq!(by_quat, v.transform_mat3(&Mat3::from_quat(&q)));
        assert_approx_eq!(by_quat, v.transform_mat4(&Mat4::from_quat(&q)));
        assert_approx_eq!(by_quat, DualQuat::from_rotation(&q).transform_point(v));
    }
}

#[test]
fn rotation_to_maps_a_onto_b() {
    let mut rng = rng();
    for _ in 0..CASES {
        let a = vec3(&mut rng, 1.0).normalize();
        let b = vec3(&mut rng, 1.0).normalize();
        assert_approx_eq!(Quat::rotation_to(a, b).rotate(a), b);
        assert_approx_eq!(Quat::rotation_to(a, -a).rotate(a), -a);
    }
}

// ============================================================
// Decomposition
// ============================================================

#[test]
fn uniform_scale_decomposition_roundtrip() {
    let mut rng = rng();
    for _ in 0..CASES {
        let (q, t, _) = affine(&mut rng);
        let s = Vec3::splat(rng.gen_range(0.25..4.0));
        let m = Mat4::from_rotation_translation_scale(&q, t, s);
        assert_approx_eq!(m.translation(), t);
        assert_approx_eq!(m.scaling(), s);
        // Sign of q is not observable
        let r = m.rotation();
        assert!(approx_eq(r.dot(&q).abs(), 1.0));
    }
}

#[test]
fn dual_quat_mat4_roundtrip() {
    let mut rng = rng();
    for _ in 0..CASES {
        let (q, t, _) = affine(&mut rng);
        let dq = DualQuat::from_rotation_translation(&q, t);
        let m = Mat4::from_dual_quat(&dq);
        assert_approx_eq!(m, Mat4::from_rotation_translation(&q, t));
        let back = DualQuat::from_mat4(&m);
        assert_approx_eq!(back.translation(), t);
        let p = vec3(&mut rng, 3.0);
        assert_approx_eq!(back.transform_point(p), dq.transform_point(p));
    }
}

// ============================================================
// Cameras
// ============================================================

#[test]
fn perspective_near_plane_scenario() {
    let p = Mat4::perspective(core::f64::consts::FRAC_PI_2, 1.0, 1.0, Some(10.0));
    let clip = p * Vec4::new(0.0, 0.0, -1.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.z.is_finite());
    assert!(approx_eq(ndc.z, -1.0));
}

#[test]
fn look_at_puts_target_on_negative_z() {
    let mut rng = rng();
    for _ in 0..CASES {
        let eye = vec3(&mut rng, 10.0);
        let center = vec3(&mut rng, 10.0);
        let Some(view) = Mat4::try_look_at(eye, center, Vec3::y()) else {
            continue;
        };
        assert_approx_eq!(view.transform_point(eye), Vec3::zero());
        let target = view.transform_point(center);
        let dist = eye.distance(center);
        assert_approx_eq!(target, Vec3::new(0.0, 0.0, -dist), Config::new(1e-6).unwrap());
        assert_approx_eq!(Mat4::look_at(eye, center, Vec3::y()), view);
    }
}

// ============================================================
// Equality and configuration
// ============================================================

#[test]
fn approx_eq_is_reflexive_symmetric_and_weaker_than_exact() {
    let mut rng = rng();
    for _ in 0..CASES {
        let a = vec3(&mut rng, 100.0);
        let b = a + Vec3::splat(1e-9);
        assert!(a.approx_eq(&a));
        assert_eq!(a.approx_eq(&b), b.approx_eq(&a));
        assert!(a.approx_eq(&b));
        let c = a;
        assert!(a == c && a.approx_eq(&c));
        assert!(!a.approx_eq(&(a + Vec3::splat(1.0))));
    }
}

#[test]
fn config_validation() {
    assert!(Config::new(1e-3_f32).is_ok());
    assert_eq!(Config::new(0.0_f64), Err(ConfigError::NonPositiveEpsilon(0.0)));
    assert_eq!(Config::new(f32::NAN), Err(ConfigError::NonFiniteEpsilon));
    let err = Config::new(-2.0_f64).unwrap_err();
    assert_eq!(err.to_string(), "epsilon must be positive, got -2");
    assert_eq!(Config::<f64>::default().epsilon, f32::EPSILON as f64);
}

#[test]
fn looser_config_accepts_what_default_rejects() {
    let a = Mat4::<f64>::identity();
    let b = a.mul_scalar_and_add(&Mat4::identity(), 1e-4);
    assert!(!a.approx_eq(&b));
    assert!(a.approx_eq_with(&b, &Config::new(1e-3).unwrap()));
}

// ============================================================
// Batch iteration
// ============================================================

#[test]
fn for_each_matches_manual_indexing() {
    let mut rng = rng();
    for _ in 0..CASES {
        let len = rng.gen_range(0..64);
        let stride = rng.gen_range(0..6);
        let offset = rng.gen_range(0..8);
        let count = rng.gen_range(0..10);
        let initial: Vec<f64> = (0..len).map(|i| i as f64).collect();

        let mut buf = initial.clone();
        let visited = for_each(&mut buf, stride, offset, count, |v: &mut Vec2<f64>| {
            *v = *v + Vec2::splat(1000.0)
        });

        let step = if stride == 0 { 2 } else { stride };
        let end = if count == 0 { len } else { (count * step + offset).min(len) };
        let mut expected = initial.clone();
        let mut n = 0;
        let mut i = offset;
        while i < end && i + 2 <= len {
            expected[i] += 1000.0;
            expected[i + 1] += 1000.0;
            n += 1;
            i += step;
        }
        assert_eq!(visited, n);
        assert_eq!(buf, expected);
    }
}
