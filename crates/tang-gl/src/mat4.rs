use crate::{to_radians, DualQuat, Mat3, Quat, Scalar, Vec3, Vec4};
use core::ops::{Add, Index, Mul, Neg, Sub};

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms (affine: rotation + translation + scale)
/// and for camera projections.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    pub c0: Vec4<S>,
    pub c1: Vec4<S>,
    pub c2: Vec4<S>,
    pub c3: Vec4<S>,
}

/// Asymmetric field of view, in degrees from the view axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldOfView<S> {
    pub up_degrees: S,
    pub down_degrees: S,
    pub left_degrees: S,
    pub right_degrees: S,
}

impl<S: Scalar> Mat4<S> {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self {
            c0: Vec4::new(m00, m10, m20, m30),
            c1: Vec4::new(m01, m11, m21, m31),
            c2: Vec4::new(m02, m12, m22, m32),
            c3: Vec4::new(m03, m13, m23, m33),
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self { c0, c1, c2, c3 }
    }

    /// From the packed column-major layout (element `col * 4 + row`).
    pub fn from_cols_array(a: &[S; 16]) -> Self {
        Self::from_cols(
            Vec4::from_slice(&a[0..4]),
            Vec4::from_slice(&a[4..8]),
            Vec4::from_slice(&a[8..12]),
            Vec4::from_slice(&a[12..16]),
        )
    }

    pub fn to_array(&self) -> [S; 16] {
        let mut out = [S::ZERO; 16];
        for (i, c) in [self.c0, self.c1, self.c2, self.c3].iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&c.to_array());
        }
        out
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, S::ONE,  S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,  S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Embed a 3x3 linear part and a translation.
    fn from_mat3_translation(rot: Mat3<S>, trans: Vec3<S>) -> Self {
        Self::from_cols(
            rot.c0.extend(S::ZERO),
            rot.c1.extend(S::ZERO),
            rot.c2.extend(S::ZERO),
            trans.extend(S::ONE),
        )
    }

    pub fn from_translation(v: Vec3<S>) -> Self {
        Self::from_mat3_translation(Mat3::identity(), v)
    }

    /// Non-uniform scale matrix
    pub fn from_scaling(v: Vec3<S>) -> Self {
        Self::new(
            v.x,     S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, v.y,     S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, v.z,     S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation by `rad` about `axis`. The axis need not be unit length;
    /// `None` when it is (nearly) zero.
    pub fn from_rotation(axis: Vec3<S>, rad: S) -> Option<Self> {
        let Some(axis) = axis.try_normalize() else {
            trace!("zero-length rotation axis");
            return None;
        };
        Some(Self::from_mat3_translation(Mat3::rotation_axis(axis, rad), Vec3::zero()))
    }

    /// Rotation about X axis
    pub fn from_x_rotation(rad: S) -> Self {
        Self::from_mat3_translation(Mat3::rotation_x(rad), Vec3::zero())
    }

    /// Rotation about Y axis
    pub fn from_y_rotation(rad: S) -> Self {
        Self::from_mat3_translation(Mat3::rotation_y(rad), Vec3::zero())
    }

    /// Rotation about Z axis
    pub fn from_z_rotation(rad: S) -> Self {
        Self::from_mat3_translation(Mat3::rotation_z(rad), Vec3::zero())
    }

    pub fn from_quat(q: &Quat<S>) -> Self {
        Self::from_mat3_translation(Mat3::from_quat(q), Vec3::zero())
    }

    /// `from_translation(v) * from_quat(q)`
    pub fn from_rotation_translation(q: &Quat<S>, v: Vec3<S>) -> Self {
        Self::from_mat3_translation(Mat3::from_quat(q), v)
    }

    /// `from_translation(v) * from_quat(q) * from_scaling(s)`
    pub fn from_rotation_translation_scale(q: &Quat<S>, v: Vec3<S>, s: Vec3<S>) -> Self {
        let r = Mat3::from_quat(q);
        Self::from_mat3_translation(Mat3::from_cols(r.c0 * s.x, r.c1 * s.y, r.c2 * s.z), v)
    }

    /// Like [`from_rotation_translation_scale`](Self::from_rotation_translation_scale),
    /// but rotation and scale are applied about `origin`.
    pub fn from_rotation_translation_scale_origin(
        q: &Quat<S>,
        v: Vec3<S>,
        s: Vec3<S>,
        origin: Vec3<S>,
    ) -> Self {
        let r = Mat3::from_quat(q);
        let rs = Mat3::from_cols(r.c0 * s.x, r.c1 * s.y, r.c2 * s.z);
        Self::from_mat3_translation(rs, v + origin - rs.mul_vec(origin))
    }

    /// Rigid transform encoded by a dual quaternion. The real part need not be unit length.
    pub fn from_dual_quat(dq: &DualQuat<S>) -> Self {
        let mag = dq.real.norm_sq();
        let t = if mag > S::ZERO {
            (dq.dual * dq.real.conjugate()).v * (S::TWO / mag)
        } else {
            Vec3::zero()
        };
        Self::from_rotation_translation(&dq.real, t)
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    /// Extract the upper-left 3x3 submatrix
    #[inline]
    pub fn upper_left_3x3(&self) -> Mat3<S> {
        Mat3::from_cols(self.c0.truncate(), self.c1.truncate(), self.c2.truncate())
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z, self.c0.w,
            self.c1.x, self.c1.y, self.c1.z, self.c1.w,
            self.c2.x, self.c2.y, self.c2.z, self.c2.w,
            self.c3.x, self.c3.y, self.c3.z, self.c3.w,
        )
    }

    /// `self * from_translation(v)`
    pub fn translate(&self, v: Vec3<S>) -> Self {
        let c3 = self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3;
        Self::from_cols(self.c0, self.c1, self.c2, c3)
    }

    /// `self * from_scaling(v)`
    pub fn scale(&self, v: Vec3<S>) -> Self {
        Self::from_cols(self.c0 * v.x, self.c1 * v.y, self.c2 * v.z, self.c3)
    }

    /// `self * from_rotation(axis, rad)`
    pub fn rotate(&self, axis: Vec3<S>, rad: S) -> Option<Self> {
        Self::from_rotation(axis, rad).map(|r| self.mul_mat(&r))
    }

    /// `self * from_x_rotation(rad)`
    pub fn rotate_x(&self, rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols(self.c0, self.c1 * c + self.c2 * s, self.c2 * c - self.c1 * s, self.c3)
    }

    /// `self * from_y_rotation(rad)`
    pub fn rotate_y(&self, rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols(self.c0 * c - self.c2 * s, self.c1, self.c0 * s + self.c2 * c, self.c3)
    }

    /// `self * from_z_rotation(rad)`
    pub fn rotate_z(&self, rad: S) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols(self.c0 * c + self.c1 * s, self.c1 * c - self.c0 * s, self.c2, self.c3)
    }

    /// Translation column
    #[inline]
    pub fn translation(&self) -> Vec3<S> {
        self.c3.truncate()
    }

    /// Lengths of the three basis columns.
    pub fn scaling(&self) -> Vec3<S> {
        Vec3::new(
            self.c0.truncate().norm(),
            self.c1.truncate().norm(),
            self.c2.truncate().norm(),
        )
    }

    /// Rotation of the upper 3x3 block after dividing out [`scaling`](Self::scaling).
    ///
    /// Exact only when the scale is uniform; a non-uniform scale combined with
    /// rotation leaves shear the quaternion cannot represent.
    pub fn rotation(&self) -> Quat<S> {
        let s = self.scaling().recip();
        let m = self.upper_left_3x3();
        Quat::from_mat3(&Mat3::from_cols(m.c0 * s.x, m.c1 * s.y, m.c2 * s.z))
    }

    /// Inverse of [`from_rotation_translation_scale`](Self::from_rotation_translation_scale):
    /// `(rotation, translation, scale)`, with the same uniform-scale caveat as
    /// [`rotation`](Self::rotation).
    pub fn decompose(&self) -> (Quat<S>, Vec3<S>, Vec3<S>) {
        (self.rotation(), self.translation(), self.scaling())
    }

    /// Matrix-Vec4 product
    #[inline]
    pub fn mul_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }

    /// Transform a point by the affine part (w = 1, no perspective divide).
    #[inline]
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(p.extend(S::ONE)).truncate()
    }

    /// Matrix-matrix product
    pub fn mul_mat(&self, rhs: &Mat4<S>) -> Mat4<S> {
        Mat4::from_cols(
            self.mul_vec4(rhs.c0),
            self.mul_vec4(rhs.c1),
            self.mul_vec4(rhs.c2),
            self.mul_vec4(rhs.c3),
        )
    }

    // 2x2 minors of the top two rows (s) and bottom two rows (c)
    fn minors(&self) -> ([S; 6], [S; 6]) {
        let m = |r, c| self.get(r, c);
        let s = [
            m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
            m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2),
            m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3),
            m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2),
            m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3),
            m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3),
        ];
        let c = [
            m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1),
            m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2),
            m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3),
            m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2),
            m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3),
            m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3),
        ];
        (s, c)
    }

    pub fn determinant(&self) -> S {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Transposed cofactor matrix, via cofactor expansion.
    pub fn adjoint(&self) -> Self {
        let m = |r, c| self.get(r, c);
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        Self::new(
            m(1, 1) * c5 - m(1, 2) * c4 + m(1, 3) * c3,
            -m(0, 1) * c5 + m(0, 2) * c4 - m(0, 3) * c3,
            m(3, 1) * s5 - m(3, 2) * s4 + m(3, 3) * s3,
            -m(2, 1) * s5 + m(2, 2) * s4 - m(2, 3) * s3,
            -m(1, 0) * c5 + m(1, 2) * c2 - m(1, 3) * c1,
            m(0, 0) * c5 - m(0, 2) * c2 + m(0, 3) * c1,
            -m(3, 0) * s5 + m(3, 2) * s2 - m(3, 3) * s1,
            m(2, 0) * s5 - m(2, 2) * s2 + m(2, 3) * s1,
            m(1, 0) * c4 - m(1, 1) * c2 + m(1, 3) * c0,
            -m(0, 0) * c4 + m(0, 1) * c2 - m(0, 3) * c0,
            m(3, 0) * s4 - m(3, 1) * s2 + m(3, 3) * s0,
            -m(2, 0) * s4 + m(2, 1) * s2 - m(2, 3) * s0,
            -m(1, 0) * c3 + m(1, 1) * c1 - m(1, 2) * c0,
            m(0, 0) * c3 - m(0, 1) * c1 + m(0, 2) * c0,
            -m(3, 0) * s3 + m(3, 1) * s1 - m(3, 2) * s0,
            m(2, 0) * s3 - m(2, 1) * s1 + m(2, 2) * s0,
        )
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let Some(inv_det) = det.try_recip() else {
            trace!(det = det.to_f64(), "mat4 is singular");
            return None;
        };
        Some(self.adjoint() * inv_det)
    }

    /// Frobenius norm
    pub fn frob(&self) -> S {
        (self.c0.norm_sq() + self.c1.norm_sq() + self.c2.norm_sq() + self.c3.norm_sq()).sqrt()
    }

    #[inline]
    pub fn mul_scalar_and_add(&self, rhs: &Self, scale: S) -> Self {
        *self + *rhs * scale
    }

    /// Perspective projection from view-frustum planes, clip depth [-1, 1].
    pub fn frustum(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let rl = (right - left).recip();
        let tb = (top - bottom).recip();
        let nf = (near - far).recip();
        Self::new(
            near * S::TWO * rl, S::ZERO, (right + left) * rl, S::ZERO,
            S::ZERO, near * S::TWO * tb, (top + bottom) * tb, S::ZERO,
            S::ZERO, S::ZERO, (far + near) * nf, far * near * S::TWO * nf,
            S::ZERO, S::ZERO, -S::ONE, S::ZERO,
        )
    }

    /// Symmetric perspective projection, clip depth [-1, 1].
    ///
    /// `far = None` (or an infinite `far`) builds the infinite-far-plane form.
    pub fn perspective(fovy: S, aspect: S, near: S, far: Option<S>) -> Self {
        let f = (fovy * S::HALF).tan().recip();
        let (m22, m23) = match far.filter(|v| v.is_finite()) {
            Some(far) => {
                let nf = (near - far).recip();
                ((far + near) * nf, S::TWO * far * near * nf)
            }
            None => (-S::ONE, -S::TWO * near),
        };
        Self::perspective_from_parts(f / aspect, f, m22, m23)
    }

    /// As [`perspective`](Self::perspective) with clip depth [0, 1].
    pub fn perspective_zo(fovy: S, aspect: S, near: S, far: Option<S>) -> Self {
        let f = (fovy * S::HALF).tan().recip();
        let (m22, m23) = match far.filter(|v| v.is_finite()) {
            Some(far) => {
                let nf = (near - far).recip();
                (far * nf, far * near * nf)
            }
            None => (-S::ONE, -near),
        };
        Self::perspective_from_parts(f / aspect, f, m22, m23)
    }

    fn perspective_from_parts(sx: S, sy: S, m22: S, m23: S) -> Self {
        Self::new(
            sx, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, sy, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, m22, m23,
            S::ZERO, S::ZERO, -S::ONE, S::ZERO,
        )
    }

    /// Off-axis perspective projection (e.g. per-eye VR fields of view), clip depth [-1, 1].
    pub fn perspective_from_field_of_view(fov: &FieldOfView<S>, near: S, far: S) -> Self {
        let up = to_radians(fov.up_degrees).tan();
        let down = to_radians(fov.down_degrees).tan();
        let left = to_radians(fov.left_degrees).tan();
        let right = to_radians(fov.right_degrees).tan();
        let x_scale = S::TWO / (left + right);
        let y_scale = S::TWO / (up + down);
        let nf = (near - far).recip();
        Self::new(
            x_scale, S::ZERO, -((left - right) * x_scale * S::HALF), S::ZERO,
            S::ZERO, y_scale, (up - down) * y_scale * S::HALF, S::ZERO,
            S::ZERO, S::ZERO, (far + near) * nf, S::TWO * far * near * nf,
            S::ZERO, S::ZERO, -S::ONE, S::ZERO,
        )
    }

    /// Orthographic projection, clip depth [-1, 1].
    pub fn ortho(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let nf = (near - far).recip();
        Self::ortho_from_parts(left, right, bottom, top, S::TWO * nf, (far + near) * nf)
    }

    /// Orthographic projection, clip depth [0, 1].
    pub fn ortho_zo(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let nf = (near - far).recip();
        Self::ortho_from_parts(left, right, bottom, top, nf, near * nf)
    }

    fn ortho_from_parts(left: S, right: S, bottom: S, top: S, m22: S, m23: S) -> Self {
        let lr = (left - right).recip();
        let bt = (bottom - top).recip();
        Self::new(
            -S::TWO * lr, S::ZERO, S::ZERO, (left + right) * lr,
            S::ZERO, -S::TWO * bt, S::ZERO, (top + bottom) * bt,
            S::ZERO, S::ZERO, m22, m23,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// Requires `eye != center` and a view direction not parallel to `up`.
    /// When `eye` and `center` coincide the identity is returned; when the
    /// direction is parallel to `up` the x and y rows are zero. Use
    /// [`try_look_at`](Self::try_look_at) to detect either case.
    pub fn look_at(eye: Vec3<S>, center: Vec3<S>, up: Vec3<S>) -> Self {
        let d = eye - center;
        if d.x.abs() < S::EPSILON && d.y.abs() < S::EPSILON && d.z.abs() < S::EPSILON {
            trace!("look_at eye and center coincide");
            return Self::identity();
        }
        let z = d.normalize();
        let x = up.cross(z).try_normalize().unwrap_or_else(|| {
            trace!("look_at direction is parallel to up");
            Vec3::zero()
        });
        let y = z.cross(x).try_normalize().unwrap_or_else(Vec3::zero);
        Self::view_from_basis(x, y, z, eye)
    }

    /// [`look_at`](Self::look_at), or `None` for a degenerate basis.
    pub fn try_look_at(eye: Vec3<S>, center: Vec3<S>, up: Vec3<S>) -> Option<Self> {
        let z = (eye - center).try_normalize()?;
        let x = up.cross(z).try_normalize()?;
        let y = z.cross(x);
        Some(Self::view_from_basis(x, y, z, eye))
    }

    // Rows x, y, z; translation moves the eye to the origin
    fn view_from_basis(x: Vec3<S>, y: Vec3<S>, z: Vec3<S>, eye: Vec3<S>) -> Self {
        Self::new(
            x.x, x.y, x.z, -x.dot(eye),
            y.x, y.y, y.z, -y.dot(eye),
            z.x, z.y, z.z, -z.dot(eye),
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Model matrix placing an object at `eye` oriented toward `target`.
    ///
    /// Same precondition as [`look_at`](Self::look_at): the direction must not be parallel to `up`.
    pub fn target_to(eye: Vec3<S>, target: Vec3<S>, up: Vec3<S>) -> Self {
        let mut z = eye - target;
        if z.norm_sq() > S::ZERO {
            z = z.normalize();
        }
        let mut x = up.cross(z);
        if x.norm_sq() > S::ZERO {
            x = x.normalize();
        } else {
            trace!("target_to direction is parallel to up");
        }
        let y = z.cross(x);
        Self::from_cols(x.extend(S::ZERO), y.extend(S::ZERO), z.extend(S::ZERO), eye.extend(S::ONE))
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat4<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        let c = match col { 0 => &self.c0, 1 => &self.c1, 2 => &self.c2, _ => &self.c3 };
        match row { 0 => &c.x, 1 => &c.y, 2 => &c.z, _ => &c.w }
    }
}

// Packed column-major index: col * 4 + row
impl<S: Scalar> Index<usize> for Mat4<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self[(i % 4, i / 4)]
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2, self.c3 + rhs.c3)
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2, self.c3 - rhs.c3)
    }
}

impl<S: Scalar> Neg for Mat4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline] fn mul(self, rhs: Vec4<S>) -> Vec4<S> { self.mul_vec4(rhs) }
}

// Mat4 * Mat4
impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

impl<S: Scalar> core::fmt::Display for Mat4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "mat4(")?;
        for (i, v) in self.to_array().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

crate::config::impl_approx_eq!(Mat4);
