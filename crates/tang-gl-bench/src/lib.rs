//! Shared helpers for tang-gl benchmarks: seeded RNG, input generators.

use tang_gl::{Mat4, Quat, Vec3};

/// Simple xoshiro256** PRNG for reproducible benchmarks.
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        self.f64() as f32
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

// --- tang-gl generators ---

pub fn random_vec3f32(n: usize) -> Vec<Vec3<f32>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f32(), rng.f32(), rng.f32()))
        .collect()
}

pub fn random_vec3f64(n: usize) -> Vec<Vec3<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f64(), rng.f64(), rng.f64()))
        .collect()
}

/// Unit quaternions from random axes and angles.
pub fn random_quatf32(n: usize) -> Vec<Quat<f32>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let axis = Vec3::new(rng.f32(), rng.f32(), rng.f32() + 2.0).normalize();
            Quat::from_axis_angle(axis, rng.f32() * 3.0)
        })
        .collect()
}

/// Invertible affine matrices: rotation, translation and positive scale.
pub fn random_mat4f32(n: usize) -> Vec<Mat4<f32>> {
    let mut rng = make_rng();
    random_quatf32(n)
        .into_iter()
        .map(|q| {
            let t = Vec3::new(rng.f32(), rng.f32(), rng.f32()) * 10.0;
            let s = Vec3::new(rng.f32(), rng.f32(), rng.f32()) * 0.5 + Vec3::splat(1.0);
            Mat4::from_rotation_translation_scale(&q, t, s)
        })
        .collect()
}

/// Flat buffer of `n` tightly packed xyz triples.
pub fn random_packed_f32(n: usize) -> Vec<f32> {
    let mut rng = make_rng();
    (0..n * 3).map(|_| rng.f32()).collect()
}

// --- conversions for the comparison libraries ---

pub fn to_glam_vec3(v: Vec3<f32>) -> glam::Vec3 {
    glam::Vec3::new(v.x, v.y, v.z)
}

pub fn to_glam_quat(q: Quat<f32>) -> glam::Quat {
    glam::Quat::from_xyzw(q.v.x, q.v.y, q.v.z, q.w)
}

pub fn to_glam_mat4(m: Mat4<f32>) -> glam::Mat4 {
    glam::Mat4::from_cols_array(&m.to_array())
}

pub fn to_nalgebra_mat4(m: Mat4<f32>) -> nalgebra::Matrix4<f32> {
    nalgebra::Matrix4::from_column_slice(&m.to_array())
}

pub fn to_nalgebra_quat(q: Quat<f32>) -> nalgebra::UnitQuaternion<f32> {
    nalgebra::UnitQuaternion::new_unchecked(nalgebra::Quaternion::new(q.w, q.v.x, q.v.y, q.v.z))
}
