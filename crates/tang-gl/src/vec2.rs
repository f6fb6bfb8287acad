use crate::{Mat2, Mat2d, Mat3, Mat4, Scalar, Vec3};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(S::ONE, S::ZERO)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(S::ZERO, S::ONE)
    }

    /// Construct from a slice (panics if len < 2)
    #[inline]
    pub fn from_slice(s: &[S]) -> Self {
        Self::new(s[0], s[1])
    }

    #[inline]
    pub fn to_array(&self) -> [S; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Cross product of two in-plane vectors. The result is always along Z.
    #[inline]
    pub fn cross(self, rhs: Self) -> Vec3<S> {
        Vec3::new(S::ZERO, S::ZERO, self.x * rhs.y - self.y * rhs.x)
    }

    #[inline]
    pub fn norm_sq(self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> S {
        self.norm_sq().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> S {
        (other - self).norm()
    }

    #[inline]
    pub fn distance_sq(self, other: Self) -> S {
        (other - self).norm_sq()
    }

    /// Divides by the length. A zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.norm()
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

    /// Component-wise reciprocal
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.x.recip(), self.y.recip())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Unsigned angle between two vectors, in [0, π].
    pub fn angle(self, other: Self) -> S {
        (self.y * other.x - self.x * other.y)
            .atan2(self.x * other.x + self.y * other.y)
            .abs()
    }

    /// Extend to Vec3 with a given z component
    #[inline]
    pub fn extend(self, z: S) -> Vec3<S> {
        Vec3::new(self.x, self.y, z)
    }

    /// Rotate about `origin` by `rad` (counter-clockwise).
    pub fn rotate(self, origin: Self, rad: S) -> Self {
        let p = self - origin;
        let (s, c) = rad.sin_cos();
        Self::new(p.x * c - p.y * s + origin.x, p.x * s + p.y * c + origin.y)
    }

    #[inline]
    pub fn transform_mat2(self, m: &Mat2<S>) -> Self {
        m.c0 * self.x + m.c1 * self.y
    }

    /// Treats `self` as a point (implicit third component 1).
    #[inline]
    pub fn transform_mat2d(self, m: &Mat2d<S>) -> Self {
        m.c0 * self.x + m.c1 * self.y + m.c2
    }

    /// Implicit third component 1; the third output row is discarded, no divide.
    #[inline]
    pub fn transform_mat3(self, m: &Mat3<S>) -> Self {
        Self::new(
            m.c0.x * self.x + m.c1.x * self.y + m.c2.x,
            m.c0.y * self.x + m.c1.y * self.y + m.c2.y,
        )
    }

    /// Implicit z = 0 and w = 1; no perspective divide.
    #[inline]
    pub fn transform_mat4(self, m: &Mat4<S>) -> Self {
        Self::new(
            m.c0.x * self.x + m.c1.x * self.y + m.c3.x,
            m.c0.y * self.x + m.c1.y * self.y + m.c3.y,
        )
    }

    /// Random direction scaled to length `scale`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, scale: S) -> Self {
        let r = S::from_f64(rng.gen::<f64>()) * S::TAU;
        let (s, c) = r.sin_cos();
        Self::new(c * scale, s * scale)
    }
}

impl<S: Scalar> Default for Vec2<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(a: [S; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl<S: Scalar> From<Vec2<S>> for [S; 2] {
    fn from(v: Vec2<S>) -> Self {
        [v.x, v.y]
    }
}

impl<S: Scalar> Add for Vec2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Scalar> Neg for Vec2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<S: Scalar> Mul<S> for Vec2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// Component-wise
impl<S: Scalar> Mul for Vec2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<S: Scalar> Div<S> for Vec2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

// Component-wise
impl<S: Scalar> Div for Vec2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<S: Scalar> AddAssign for Vec2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<S: Scalar> SubAssign for Vec2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<S: Scalar> MulAssign<S> for Vec2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

// Scalar * Vec2 (commutative)
impl Mul<Vec2<f64>> for f64 {
    type Output = Vec2<f64>;
    #[inline]
    fn mul(self, rhs: Vec2<f64>) -> Vec2<f64> {
        rhs * self
    }
}

impl Mul<Vec2<f32>> for f32 {
    type Output = Vec2<f32>;
    #[inline]
    fn mul(self, rhs: Vec2<f32>) -> Vec2<f32> {
        rhs * self
    }
}

impl<S: Scalar> core::fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vec2({}, {})", self.x, self.y)
    }
}

crate::config::impl_approx_eq!(Vec2);
