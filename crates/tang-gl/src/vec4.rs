use crate::{Mat4, Quat, Scalar, Vec3};
use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Vec4<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self { Self { x, y, z, w } }

    #[inline]
    pub fn zero() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn splat(v: S) -> Self { Self::new(v, v, v, v) }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
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
    pub fn normalize(self) -> Self { self / self.norm() }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let n = self.norm();
        if n > S::EPSILON { Some(self / n) } else { None }
    }

    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn scale_and_add(self, other: Self, scale: S) -> Self {
        self + other * scale
    }

    /// Four-dimensional cross product: the vector orthogonal to `self`, `v` and `w`.
    pub fn cross(self, v: Self, w: Self) -> Self {
        let a = v.x * w.y - v.y * w.x;
        let b = v.x * w.z - v.z * w.x;
        let c = v.x * w.w - v.w * w.x;
        let d = v.y * w.z - v.z * w.y;
        let e = v.y * w.w - v.w * w.y;
        let f = v.z * w.w - v.w * w.z;
        let Self { x: g, y: h, z: i, w: j } = self;
        Self::new(
            h * f - i * e + j * d,
            -(g * f) + i * c - j * b,
            g * e - h * c + j * a,
            -(g * d) + h * b - i * a,
        )
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.x.recip(), self.y.recip(), self.z.recip(), self.w.recip())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil(), self.w.ceil())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor(), self.w.floor())
    }

    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round(), self.w.round())
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    #[inline]
    pub fn transform_mat4(self, m: &Mat4<S>) -> Self {
        m.mul_vec4(self)
    }

    /// Rotates the xyz part by a unit quaternion; w passes through.
    #[inline]
    pub fn transform_quat(self, q: &Quat<S>) -> Self {
        self.truncate().transform_quat(q).extend(self.w)
    }

    /// Random vector scaled to length `scale` (Marsaglia's method).
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, scale: S) -> Self {
        let mut pair = || loop {
            let a = S::from_f64(rng.gen::<f64>()) * S::TWO - S::ONE;
            let b = S::from_f64(rng.gen::<f64>()) * S::TWO - S::ONE;
            let s = a * a + b * b;
            if s < S::ONE {
                return (a, b, s);
            }
        };
        let (v1, v2, s1) = pair();
        let (v3, v4, s2) = pair();
        let d = ((S::ONE - s1) / s2).sqrt();
        Self::new(v1 * scale, v2 * scale, v3 * d * scale, v4 * d * scale)
    }

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Construct from a slice (panics if len < 4)
    #[inline]
    pub fn from_slice(s: &[S]) -> Self {
        Self::new(s[0], s[1], s[2], s[3])
    }

    #[inline]
    pub fn to_array(&self) -> [S; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<S: Scalar> Default for Vec4<S> {
    fn default() -> Self { Self::zero() }
}

impl<S: Scalar> From<[S; 4]> for Vec4<S> {
    fn from(a: [S; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl<S: Scalar> From<Vec4<S>> for [S; 4] {
    fn from(v: Vec4<S>) -> Self { v.to_array() }
}

impl<S: Scalar> Add for Vec4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<S: Scalar> Sub for Vec4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<S: Scalar> Neg for Vec4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl<S: Scalar> Mul<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// Component-wise
impl<S: Scalar> Mul for Vec4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl<S: Scalar> Div<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

// Component-wise
impl<S: Scalar> Div for Vec4<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl<S: Scalar> AddAssign for Vec4<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z; self.w += rhs.w;
    }
}

impl<S: Scalar> SubAssign for Vec4<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z; self.w -= rhs.w;
    }
}

impl<S: Scalar> MulAssign<S> for Vec4<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs; self.w *= rhs;
    }
}

impl<S: Scalar> core::fmt::Display for Vec4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vec4({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

crate::config::impl_approx_eq!(Vec4);
