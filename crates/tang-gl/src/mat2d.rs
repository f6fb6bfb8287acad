use crate::{Scalar, Vec2};
use core::ops::{Add, Index, Mul, Sub};

/// 2x3 affine matrix for 2D transforms.
///
/// Packed as `[a, b, c, d, tx, ty]`, the first two columns of a 3x3 matrix
/// whose implicit last row is `[0, 0, 1]`:
/// ```text
/// | a c tx |
/// | b d ty |
/// | 0 0 1  |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2d<S> {
    pub c0: Vec2<S>,
    pub c1: Vec2<S>,
    /// Translation
    pub c2: Vec2<S>,
}

impl<S: Scalar> Mat2d<S> {
    #[inline]
    pub fn new(a: S, b: S, c: S, d: S, tx: S, ty: S) -> Self {
        Self::from_cols(Vec2::new(a, b), Vec2::new(c, d), Vec2::new(tx, ty))
    }

    #[inline]
    pub fn from_cols(c0: Vec2<S>, c1: Vec2<S>, c2: Vec2<S>) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn from_cols_array(a: &[S; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    #[inline]
    pub fn to_array(&self) -> [S; 6] {
        [self.c0.x, self.c0.y, self.c1.x, self.c1.y, self.c2.x, self.c2.y]
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec2::zero(), Vec2::zero(), Vec2::zero())
    }

    pub fn from_rotation(rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, s, -s, c, S::ZERO, S::ZERO)
    }

    pub fn from_scaling(v: Vec2<S>) -> Self {
        Self::new(v.x, S::ZERO, S::ZERO, v.y, S::ZERO, S::ZERO)
    }

    pub fn from_translation(v: Vec2<S>) -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ONE, v.x, v.y)
    }

    /// `self * from_rotation(rad)`
    pub fn rotate(&self, rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols(self.c0 * c + self.c1 * s, self.c1 * c - self.c0 * s, self.c2)
    }

    /// `self * from_scaling(v)`
    pub fn scale(&self, v: Vec2<S>) -> Self {
        Self::from_cols(self.c0 * v.x, self.c1 * v.y, self.c2)
    }

    /// `self * from_translation(v)`
    pub fn translate(&self, v: Vec2<S>) -> Self {
        Self::from_cols(self.c0, self.c1, self.c0 * v.x + self.c1 * v.y + self.c2)
    }

    #[inline]
    pub fn determinant(&self) -> S {
        self.c0.x * self.c1.y - self.c0.y * self.c1.x
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let Some(inv_det) = det.try_recip() else {
            trace!(det = det.to_f64(), "mat2d is singular");
            return None;
        };
        let [a, b, c, d, tx, ty] = self.to_array();
        Some(Self::new(
            d * inv_det,
            -b * inv_det,
            -c * inv_det,
            a * inv_det,
            (c * ty - d * tx) * inv_det,
            (b * tx - a * ty) * inv_det,
        ))
    }

    /// Apply to a point (implicit third component 1).
    #[inline]
    pub fn transform_point(&self, p: Vec2<S>) -> Vec2<S> {
        self.c0 * p.x + self.c1 * p.y + self.c2
    }

    pub fn mul_mat(&self, rhs: &Mat2d<S>) -> Mat2d<S> {
        Self::from_cols(
            self.c0 * rhs.c0.x + self.c1 * rhs.c0.y,
            self.c0 * rhs.c1.x + self.c1 * rhs.c1.y,
            self.transform_point(rhs.c2),
        )
    }

    /// Frobenius norm of the full 3x3 form, including the implicit 1.
    #[inline]
    pub fn frob(&self) -> S {
        (self.c0.norm_sq() + self.c1.norm_sq() + self.c2.norm_sq() + S::ONE).sqrt()
    }

    #[inline]
    pub fn mul_scalar_and_add(&self, rhs: &Self, scale: S) -> Self {
        *self + *rhs * scale
    }
}

// Packed index: [a, b, c, d, tx, ty]
impl<S: Scalar> Index<usize> for Mat2d<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        let c = match i / 2 {
            0 => &self.c0,
            1 => &self.c1,
            _ => &self.c2,
        };
        if i % 2 == 0 { &c.x } else { &c.y }
    }
}

impl<S: Scalar> Default for Mat2d<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat2d<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> Sub for Mat2d<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<S: Scalar> Mul<S> for Mat2d<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

impl<S: Scalar> Mul for Mat2d<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Mat2d<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d, tx, ty] = self.to_array();
        write!(f, "mat2d({}, {}, {}, {}, {}, {})", a, b, c, d, tx, ty)
    }
}

crate::config::impl_approx_eq!(Mat2d);
