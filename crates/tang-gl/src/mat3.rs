use crate::{Mat2d, Mat4, Quat, Scalar, Vec2, Vec3};
use core::ops::{Add, Index, Mul, Neg, Sub};

/// 3x3 matrix, column-major storage.
///
/// Used both for 3D rotation/normal matrices and for 2D homogeneous transforms.
/// Stored as three column vectors for natural column access.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S> {
    /// Column 0
    pub c0: Vec3<S>,
    /// Column 1
    pub c1: Vec3<S>,
    /// Column 2
    pub c2: Vec3<S>,
}

impl<S: Scalar> Mat3<S> {
    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self {
            c0: Vec3::new(m00, m10, m20),
            c1: Vec3::new(m01, m11, m21),
            c2: Vec3::new(m02, m12, m22),
        }
    }

    /// Construct from column vectors
    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn from_rows(r0: Vec3<S>, r1: Vec3<S>, r2: Vec3<S>) -> Self {
        Self::from_cols(r0, r1, r2).transpose()
    }

    /// From the packed column-major layout (element `col * 3 + row`).
    #[inline]
    pub fn from_cols_array(a: &[S; 9]) -> Self {
        Self::from_cols(
            Vec3::new(a[0], a[1], a[2]),
            Vec3::new(a[3], a[4], a[5]),
            Vec3::new(a[6], a[7], a[8]),
        )
    }

    #[inline]
    pub fn to_array(&self) -> [S; 9] {
        [
            self.c0.x, self.c0.y, self.c0.z,
            self.c1.x, self.c1.y, self.c1.z,
            self.c2.x, self.c2.y, self.c2.z,
        ]
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE, S::ZERO, S::ZERO,
            S::ZERO, S::ONE, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Upper-left 3x3 block of a 4x4 matrix
    #[inline]
    pub fn from_mat4(m: &Mat4<S>) -> Self {
        m.upper_left_3x3()
    }

    /// Promote a 2D affine matrix to its homogeneous 3x3 form.
    pub fn from_mat2d(m: &Mat2d<S>) -> Self {
        Self::from_cols(m.c0.extend(S::ZERO), m.c1.extend(S::ZERO), m.c2.extend(S::ONE))
    }

    /// Rotation matrix of a unit quaternion.
    pub fn from_quat(q: &Quat<S>) -> Self {
        let Vec3 { x, y, z } = q.v;
        let w = q.w;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;
        Self::from_cols(
            Vec3::new(S::ONE - yy - zz, yx + wz, zx - wy),
            Vec3::new(yx - wz, S::ONE - xx - zz, zy + wx),
            Vec3::new(zx + wy, zy - wx, S::ONE - xx - yy),
        )
    }

    /// Inverse-transpose of the upper-left 3x3 block, for transforming normals
    /// under non-uniform scale. `None` when that block is singular.
    pub fn normal_from_mat4(m: &Mat4<S>) -> Option<Self> {
        Self::from_mat4(m).try_inverse().map(|inv| inv.transpose())
    }

    /// 2D projection mapping `[0, width] x [0, height]` (y down) onto clip space.
    pub fn projection(width: S, height: S) -> Self {
        Self::from_cols(
            Vec3::new(S::TWO / width, S::ZERO, S::ZERO),
            Vec3::new(S::ZERO, -S::TWO / height, S::ZERO),
            Vec3::new(-S::ONE, S::ONE, S::ONE),
        )
    }

    /// 2D homogeneous translation
    pub fn from_translation(v: Vec2<S>) -> Self {
        Self::from_cols(Vec3::x(), Vec3::y(), v.extend(S::ONE))
    }

    /// 2D homogeneous rotation, counter-clockwise
    pub fn from_rotation(rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols(Vec3::new(c, s, S::ZERO), Vec3::new(-s, c, S::ZERO), Vec3::z())
    }

    /// 2D homogeneous scale
    pub fn from_scaling(v: Vec2<S>) -> Self {
        Self::from_cols(Vec3::x() * v.x, Vec3::y() * v.y, Vec3::z())
    }

    /// `self * from_translation(v)`
    pub fn translate(&self, v: Vec2<S>) -> Self {
        Self::from_cols(self.c0, self.c1, self.c0 * v.x + self.c1 * v.y + self.c2)
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

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    /// Column access
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<S> {
        match i {
            0 => self.c0,
            1 => self.c1,
            _ => self.c2,
        }
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<S> {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z,
            self.c1.x, self.c1.y, self.c1.z,
            self.c2.x, self.c2.y, self.c2.z,
        )
    }

    #[inline]
    pub fn determinant(&self) -> S {
        self.c0.x * (self.c1.y * self.c2.z - self.c2.y * self.c1.z)
            - self.c1.x * (self.c0.y * self.c2.z - self.c2.y * self.c0.z)
            + self.c2.x * (self.c0.y * self.c1.z - self.c1.y * self.c0.z)
    }

    /// Transposed cofactor matrix. Its rows are the pairwise cross products of the columns.
    #[inline]
    pub fn adjoint(&self) -> Self {
        Self::from_rows(
            self.c1.cross(self.c2),
            self.c2.cross(self.c0),
            self.c0.cross(self.c1),
        )
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let Some(inv_det) = det.try_recip() else {
            trace!(det = det.to_f64(), "mat3 is singular");
            return None;
        };
        Some(self.adjoint() * inv_det)
    }

    /// Matrix-vector product
    #[inline]
    pub fn mul_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }

    /// Matrix-matrix product
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3<S>) -> Mat3<S> {
        Mat3::from_cols(
            self.mul_vec(rhs.c0),
            self.mul_vec(rhs.c1),
            self.mul_vec(rhs.c2),
        )
    }

    /// Frobenius norm squared
    #[inline]
    pub fn norm_sq(&self) -> S {
        self.c0.norm_sq() + self.c1.norm_sq() + self.c2.norm_sq()
    }

    /// Frobenius norm
    #[inline]
    pub fn frob(&self) -> S {
        self.norm_sq().sqrt()
    }

    /// Trace
    #[inline]
    pub fn trace(&self) -> S {
        self.c0.x + self.c1.y + self.c2.z
    }

    #[inline]
    pub fn mul_scalar_and_add(&self, rhs: &Self, scale: S) -> Self {
        *self + *rhs * scale
    }

    /// Rotation matrix about X axis
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO, c, -s, S::ZERO, s, c)
    }

    /// Rotation matrix about Y axis
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, S::ZERO, s, S::ZERO, S::ONE, S::ZERO, -s, S::ZERO, c)
    }

    /// Rotation matrix about Z axis
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, S::ZERO, s, c, S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// Rotation about a unit axis (Rodrigues' formula)
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis;
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat3<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        let c = match col {
            0 => &self.c0,
            1 => &self.c1,
            _ => &self.c2,
        };
        match row {
            0 => &c.x,
            1 => &c.y,
            _ => &c.z,
        }
    }
}

// Packed column-major index: col * 3 + row
impl<S: Scalar> Index<usize> for Mat3<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self[(i % 3, i / 3)]
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "mat3(")?;
        for (i, v) in self.to_array().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

crate::config::impl_approx_eq!(Mat3);
