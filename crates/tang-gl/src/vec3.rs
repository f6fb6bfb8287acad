use crate::{Mat3, Mat4, Quat, Scalar, Vec4};
use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn zero() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn splat(v: S) -> Self { Self::new(v, v, v) }

    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE, S::ZERO) }

    #[inline]
    pub fn z() -> Self { Self::new(S::ZERO, S::ZERO, S::ONE) }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn norm_sq(self) -> S { self.dot(self) }

    #[inline]
    pub fn norm(self) -> S { self.norm_sq().sqrt() }

    #[inline]
    pub fn distance(self, other: Self) -> S { (other - self).norm() }

    #[inline]
    pub fn distance_sq(self, other: Self) -> S { (other - self).norm_sq() }

    /// Divides by the length. A zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        let n = self.norm();
        self / n
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let n = self.norm();
        if n > S::EPSILON { Some(self / n) } else { None }
    }

    /// `self + t * (other - self)`, not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self + (other - self) * t
    }

    /// `self + other * scale`
    #[inline]
    pub fn scale_and_add(self, other: Self, scale: S) -> Self {
        self + other * scale
    }

    /// Spherical interpolation between two directions.
    ///
    /// Falls back to `lerp` when the inputs are (anti)parallel, where the arc is undefined.
    pub fn slerp(self, other: Self, t: S) -> Self {
        let angle = self.dot(other).clamp(-S::ONE, S::ONE).acos();
        let sin_total = angle.sin();
        if sin_total.abs() <= S::TOLERANCE {
            return self.lerp(other, t);
        }
        let ratio_a = ((S::ONE - t) * angle).sin() / sin_total;
        let ratio_b = (t * angle).sin() / sin_total;
        self * ratio_a + other * ratio_b
    }

    /// Cubic Hermite curve through `self` (t=0) and `b` (t=1) with tangents `a_tan`, `b_tan`.
    pub fn hermite(self, a_tan: Self, b_tan: Self, b: Self, t: S) -> Self {
        let three = S::from_f64(3.0);
        let t2 = t * t;
        let f1 = t2 * (S::TWO * t - three) + S::ONE;
        let f2 = t2 * (t - S::TWO) + t;
        let f3 = t2 * (t - S::ONE);
        let f4 = t2 * (three - S::TWO * t);
        self * f1 + a_tan * f2 + b_tan * f3 + b * f4
    }

    /// Cubic Bezier curve with control points `self, c1, c2, b`.
    pub fn bezier(self, c1: Self, c2: Self, b: Self, t: S) -> Self {
        let three = S::from_f64(3.0);
        let inv = S::ONE - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        self * (inv2 * inv) + c1 * (three * t * inv2) + c2 * (three * t2 * inv) + b * (t2 * t)
    }

    /// Component-wise reciprocal
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.x.recip(), self.y.recip(), self.z.recip())
    }

    #[inline]
    pub fn ceil(self) -> Self { Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil()) }

    #[inline]
    pub fn floor(self) -> Self { Self::new(self.x.floor(), self.y.floor(), self.z.floor()) }

    #[inline]
    pub fn round(self) -> Self { Self::new(self.x.round(), self.y.round(), self.z.round()) }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Angle between two vectors, in [0, π]. Zero-length input gives π/2.
    pub fn angle(self, other: Self) -> S {
        let mag = (self.norm_sq() * other.norm_sq()).sqrt();
        let cosine = if mag == S::ZERO { S::ZERO } else { self.dot(other) / mag };
        cosine.clamp(-S::ONE, S::ONE).acos()
    }

    /// Rotate about the X axis passing through `origin`.
    pub fn rotate_x(self, origin: Self, rad: S) -> Self {
        let p = self - origin;
        let (s, c) = rad.sin_cos();
        Self::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c) + origin
    }

    /// Rotate about the Y axis passing through `origin`.
    pub fn rotate_y(self, origin: Self, rad: S) -> Self {
        let p = self - origin;
        let (s, c) = rad.sin_cos();
        Self::new(p.z * s + p.x * c, p.y, p.z * c - p.x * s) + origin
    }

    /// Rotate about the Z axis passing through `origin`.
    pub fn rotate_z(self, origin: Self, rad: S) -> Self {
        let p = self - origin;
        let (s, c) = rad.sin_cos();
        Self::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z) + origin
    }

    #[inline]
    pub fn transform_mat3(self, m: &Mat3<S>) -> Self {
        m.mul_vec(self)
    }

    /// Treats `self` as a point (w = 1) and divides by the resulting w.
    /// A resulting w of exactly zero is treated as 1.
    pub fn transform_mat4(self, m: &Mat4<S>) -> Self {
        let r = m.mul_vec4(self.extend(S::ONE));
        let w = if r.w == S::ZERO { S::ONE } else { r.w };
        r.truncate() / w
    }

    /// Rotate by a unit quaternion.
    pub fn transform_quat(self, q: &Quat<S>) -> Self {
        let uv = q.v.cross(self);
        let uuv = q.v.cross(uv);
        self + uv * (q.w * S::TWO) + uuv * S::TWO
    }

    /// Random direction scaled to length `scale`, uniform on the sphere.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, scale: S) -> Self {
        let r = S::from_f64(rng.gen::<f64>()) * S::TAU;
        let z = S::from_f64(rng.gen::<f64>()) * S::TWO - S::ONE;
        let z_scale = (S::ONE - z * z).sqrt() * scale;
        let (s, c) = r.sin_cos();
        Self::new(c * z_scale, s * z_scale, z * scale)
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: S) -> Vec4<S> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Construct from a slice (panics if len < 3)
    #[inline]
    pub fn from_slice(s: &[S]) -> Self {
        Self::new(s[0], s[1], s[2])
    }

    #[inline]
    pub fn to_array(&self) -> [S; 3] {
        [self.x, self.y, self.z]
    }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self { Self::zero() }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self { [v.x, v.y, v.z] }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Component-wise
impl<S: Scalar> Mul for Vec3<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<S: Scalar> Div<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// Component-wise
impl<S: Scalar> Div for Vec3<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z;
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z;
    }
}

impl<S: Scalar> MulAssign<S> for Vec3<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs;
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    #[inline] fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> { rhs * self }
}

impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;
    #[inline] fn mul(self, rhs: Vec3<f32>) -> Vec3<f32> { rhs * self }
}

impl<S: Scalar> core::fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

crate::config::impl_approx_eq!(Vec3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, ApproxEq};
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn cross_product() {
        let x = Vec3::<f64>::x();
        let y = Vec3::<f64>::y();
        let z = x.cross(y);
        assert_eq!(z, Vec3::z());
        // Anti-commutative
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        let n = v.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_zero_is_nan_not_panic() {
        let n = Vec3::<f64>::zero().normalize();
        assert!(n.x.is_nan());
        assert_eq!(Vec3::<f64>::zero().try_normalize(), None);
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
    }

    #[test]
    fn lerp() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 10.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(a.lerp(b, -0.5), Vec3::new(-5.0, -5.0, -5.0));
    }

    #[test]
    fn hermite_and_bezier_hit_endpoints() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let c1 = Vec3::new(1.0, 2.0, 0.0);
        let c2 = Vec3::new(3.0, 2.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 1.0);
        assert_approx_eq!(a.hermite(c1, c2, b, 0.0), a);
        assert_approx_eq!(a.hermite(c1, c2, b, 1.0), b);
        assert_approx_eq!(a.bezier(c1, c2, b, 0.0), a);
        assert_approx_eq!(a.bezier(c1, c2, b, 1.0), b);
        // Weights at t = 0.5 are 1/8, 3/8, 3/8, 1/8
        assert_approx_eq!(a.bezier(c1, c2, b, 0.5), Vec3::new(2.0, 1.5, 0.125));
    }

    #[test]
    fn angle() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        assert!((a.angle(Vec3::new(0.0, 3.0, 0.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((a.angle(Vec3::new(-2.0, 0.0, 0.0)) - PI).abs() < 1e-12);
        assert_eq!(a.angle(a), 0.0);
    }

    #[test]
    fn slerp_directions() {
        let a = Vec3::<f64>::x();
        let b = Vec3::<f64>::y();
        let mid = a.slerp(b, 0.5);
        let h = core::f64::consts::FRAC_1_SQRT_2;
        assert_approx_eq!(mid, Vec3::new(h, h, 0.0));
        assert_approx_eq!(a.slerp(a, 0.3), a);
    }

    #[test]
    fn rotate_about_axes() {
        let origin = Vec3::new(0.0, 0.0, 1.0);
        let p = Vec3::new(0.0, 1.0, 1.0);
        assert_approx_eq!(p.rotate_x(origin, FRAC_PI_2), Vec3::new(0.0, 0.0, 2.0));
        let p = Vec3::new(1.0, 0.0, 0.0);
        assert_approx_eq!(p.rotate_y(Vec3::zero(), FRAC_PI_2), Vec3::new(0.0, 0.0, -1.0));
        assert_approx_eq!(p.rotate_z(Vec3::zero(), FRAC_PI_2), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn transform_mat4_divides_by_w() {
        let mut m = Mat4::<f64>::identity();
        m.c3.w = 2.0;
        let v = Vec3::new(2.0, 4.0, 6.0).transform_mat4(&m);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn transform_quat_quarter_turn() {
        let q = Quat::from_axis_angle(Vec3::z(), FRAC_PI_2);
        let v = Vec3::new(1.0, 0.0, 0.0).transform_quat(&q);
        assert!(v.approx_eq(&Vec3::new(0.0, 1.0, 0.0)));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_has_requested_length() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for _ in 0..16 {
            let v = Vec3::<f64>::random(&mut rng, 2.0);
            assert!((v.norm() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn f32_vec3() {
        let v = Vec3::<f32>::new(1.0, 0.0, 0.0);
        assert_eq!(v.norm(), 1.0f32);
    }
}
