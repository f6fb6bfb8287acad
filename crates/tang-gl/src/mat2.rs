use crate::{Scalar, Vec2};
use core::ops::{Add, Index, Mul, Neg, Sub};

/// 2x2 matrix, column-major storage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2<S> {
    pub c0: Vec2<S>,
    pub c1: Vec2<S>,
}

impl<S: Scalar> Mat2<S> {
    /// Construct from elements in row-major argument order.
    #[inline]
    pub fn new(m00: S, m01: S, m10: S, m11: S) -> Self {
        Self {
            c0: Vec2::new(m00, m10),
            c1: Vec2::new(m01, m11),
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec2<S>, c1: Vec2<S>) -> Self {
        Self { c0, c1 }
    }

    /// From the packed column-major layout `[m00, m10, m01, m11]`.
    #[inline]
    pub fn from_cols_array(a: &[S; 4]) -> Self {
        Self::from_cols(Vec2::new(a[0], a[1]), Vec2::new(a[2], a[3]))
    }

    #[inline]
    pub fn to_array(&self) -> [S; 4] {
        [self.c0.x, self.c0.y, self.c1.x, self.c1.y]
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec2::zero(), Vec2::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ONE)
    }

    /// Counter-clockwise rotation by `rad`.
    pub fn from_rotation(rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, -s, s, c)
    }

    pub fn from_scaling(v: Vec2<S>) -> Self {
        Self::new(v.x, S::ZERO, S::ZERO, v.y)
    }

    /// `self * from_rotation(rad)`
    pub fn rotate(&self, rad: S) -> Self {
        self.mul_mat(&Self::from_rotation(rad))
    }

    /// `self * from_scaling(v)`
    pub fn scale(&self, v: Vec2<S>) -> Self {
        Self::from_cols(self.c0 * v.x, self.c1 * v.y)
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.c0.x, self.c0.y, self.c1.x, self.c1.y)
    }

    #[inline]
    pub fn determinant(&self) -> S {
        self.c0.x * self.c1.y - self.c1.x * self.c0.y
    }

    /// Transposed cofactor matrix.
    #[inline]
    pub fn adjoint(&self) -> Self {
        Self::new(self.c1.y, -self.c1.x, -self.c0.y, self.c0.x)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let Some(inv_det) = det.try_recip() else {
            trace!(det = det.to_f64(), "mat2 is singular");
            return None;
        };
        Some(self.adjoint() * inv_det)
    }

    #[inline]
    pub fn mul_vec(&self, v: Vec2<S>) -> Vec2<S> {
        self.c0 * v.x + self.c1 * v.y
    }

    #[inline]
    pub fn mul_mat(&self, rhs: &Mat2<S>) -> Mat2<S> {
        Mat2::from_cols(self.mul_vec(rhs.c0), self.mul_vec(rhs.c1))
    }

    /// Frobenius norm
    #[inline]
    pub fn frob(&self) -> S {
        (self.c0.norm_sq() + self.c1.norm_sq()).sqrt()
    }

    /// `self + rhs * scale`, element-wise.
    #[inline]
    pub fn mul_scalar_and_add(&self, rhs: &Self, scale: S) -> Self {
        *self + *rhs * scale
    }

    /// Factor into unit-lower `L`, diagonal `D` and unit-upper `U` with `L * D * U == self`.
    ///
    /// `None` when the leading element is zero and the elimination has no pivot.
    pub fn ldu(&self) -> Option<(Self, Self, Self)> {
        let pivot = self.c0.x;
        let inv_pivot = pivot.try_recip()?;
        let l10 = self.c0.y * inv_pivot;
        let u01 = self.c1.x * inv_pivot;
        let l = Self::new(S::ONE, S::ZERO, l10, S::ONE);
        let d = Self::new(pivot, S::ZERO, S::ZERO, self.c1.y - l10 * self.c1.x);
        let u = Self::new(S::ONE, u01, S::ZERO, S::ONE);
        Some((l, d, u))
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat2<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        let c = if col == 0 { &self.c0 } else { &self.c1 };
        if row == 0 { &c.x } else { &c.y }
    }
}

// Packed column-major index: col * 2 + row
impl<S: Scalar> Index<usize> for Mat2<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self[(i % 2, i / 2)]
    }
}

impl<S: Scalar> Default for Mat2<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<S: Scalar> Sub for Mat2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl<S: Scalar> Neg for Mat2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1)
    }
}

impl<S: Scalar> Mul<S> for Mat2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs)
    }
}

impl<S: Scalar> Mul<Vec2<S>> for Mat2<S> {
    type Output = Vec2<S>;
    #[inline]
    fn mul(self, rhs: Vec2<S>) -> Vec2<S> {
        self.mul_vec(rhs)
    }
}

impl<S: Scalar> Mul for Mat2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Mat2<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a0, a1, a2, a3] = self.to_array();
        write!(f, "mat2({}, {}, {}, {})", a0, a1, a2, a3)
    }
}

crate::config::impl_approx_eq!(Mat2);
