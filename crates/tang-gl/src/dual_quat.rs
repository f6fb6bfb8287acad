use crate::{Mat4, Quat, Scalar, Vec3};
use core::ops::{Add, Mul};

/// Dual quaternion `real + ε dual` encoding a rigid transform.
///
/// `real` holds the rotation, `dual` holds half the translation multiplied
/// onto it: `dual = ½ (t, 0) * real`. Packed as eight scalars, real part first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualQuat<S> {
    pub real: Quat<S>,
    pub dual: Quat<S>,
}

impl<S: Scalar> DualQuat<S> {
    #[inline]
    pub fn new(real: Quat<S>, dual: Quat<S>) -> Self {
        Self { real, dual }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Quat::identity(), Quat::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO))
    }

    /// Rotate by `q`, then translate by `t`.
    pub fn from_rotation_translation(q: &Quat<S>, t: Vec3<S>) -> Self {
        let half_t = Quat { v: t * S::HALF, w: S::ZERO };
        Self::new(*q, half_t * *q)
    }

    pub fn from_translation(t: Vec3<S>) -> Self {
        Self::new(Quat::identity(), Quat { v: t * S::HALF, w: S::ZERO })
    }

    pub fn from_rotation(q: &Quat<S>) -> Self {
        Self::new(*q, Quat::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO))
    }

    /// Rigid part of an affine matrix. Any scale in `m` is discarded.
    pub fn from_mat4(m: &Mat4<S>) -> Self {
        Self::from_rotation_translation(&m.rotation(), m.translation())
    }

    /// Translation encoded by a unit dual quaternion.
    pub fn translation(&self) -> Vec3<S> {
        (self.dual * self.real.conjugate()).v * S::TWO
    }

    /// `self * from_translation(v)`
    pub fn translate(&self, v: Vec3<S>) -> Self {
        *self * Self::from_translation(v)
    }

    // Swap in a new rotation while keeping the world-space translation
    fn with_rotation(&self, real: Quat<S>) -> Self {
        let half_t = self.dual * self.real.conjugate();
        Self::new(real, half_t * real)
    }

    /// Rotate about the local X axis; the translation is kept.
    pub fn rotate_x(&self, rad: S) -> Self {
        self.with_rotation(self.real.rotate_x(rad))
    }

    /// Rotate about the local Y axis; the translation is kept.
    pub fn rotate_y(&self, rad: S) -> Self {
        self.with_rotation(self.real.rotate_y(rad))
    }

    /// Rotate about the local Z axis; the translation is kept.
    pub fn rotate_z(&self, rad: S) -> Self {
        self.with_rotation(self.real.rotate_z(rad))
    }

    /// `self * q`, with `q` as a pure rotation.
    pub fn rotate_by_quat_append(&self, q: &Quat<S>) -> Self {
        Self::new(self.real * *q, self.dual * *q)
    }

    /// `q * self`, with `q` as a pure rotation.
    pub fn rotate_by_quat_prepend(&self, q: &Quat<S>) -> Self {
        Self::new(*q * self.real, *q * self.dual)
    }

    /// Appends a rotation of `rad` about `axis`. The axis need not be unit
    /// length; a zero axis or a zero angle leaves `self` unchanged.
    pub fn rotate_around_axis(&self, axis: Vec3<S>, rad: S) -> Self {
        if rad.abs() < S::EPSILON {
            return *self;
        }
        let Some(axis) = axis.try_normalize() else {
            trace!("zero-length rotation axis");
            return *self;
        };
        self.rotate_by_quat_append(&Quat::from_axis_angle(axis, rad))
    }

    /// Dot product of the real parts
    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        self.real.dot(&other.real)
    }

    /// Linear blend, flipping `other` onto the same hemisphere first. Not normalized.
    pub fn lerp(&self, other: &Self, t: S) -> Self {
        let mt = S::ONE - t;
        let t = if self.dot(other) < S::ZERO { -t } else { t };
        *self * mt + *other * t
    }

    /// `None` when the real part is zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let n = self.norm_sq();
        let Some(inv) = n.try_recip() else {
            trace!(norm_sq = n.to_f64(), "dual quat has no inverse");
            return None;
        };
        Some(Self::new(self.real.conjugate() * inv, self.dual.conjugate() * inv))
    }

    /// Conjugates both parts; the inverse of a unit dual quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.conjugate(), self.dual.conjugate())
    }

    /// Squared length of the real part
    #[inline]
    pub fn norm_sq(&self) -> S {
        self.real.norm_sq()
    }

    #[inline]
    pub fn norm(&self) -> S {
        self.norm_sq().sqrt()
    }

    /// Unit real part, and the dual part made orthogonal to it.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n <= S::ZERO {
            return *self;
        }
        let real = self.real * n.recip();
        let dual = self.dual * n.recip();
        Self::new(real, dual - real * real.dot(&dual))
    }

    /// Apply the rigid transform to a point.
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.real.rotate(p) + self.translation()
    }

    pub fn to_array(&self) -> [S; 8] {
        let [a, b, c, d] = self.real.to_array();
        let [e, f, g, h] = self.dual.to_array();
        [a, b, c, d, e, f, g, h]
    }
}

impl<S: Scalar> Default for DualQuat<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Add for DualQuat<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<S: Scalar> Mul<S> for DualQuat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.real * rhs, self.dual * rhs)
    }
}

// Composition: `(a * b)` applies `b` first
impl<S: Scalar> Mul for DualQuat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self {
        Self::new(self.real * rhs.real, self.real * rhs.dual + self.dual * rhs.real)
    }
}

impl<S: Scalar> core::fmt::Display for DualQuat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d, e, g, h, i] = self.to_array();
        write!(f, "quat2({}, {}, {}, {}, {}, {}, {}, {})", a, b, c, d, e, g, h, i)
    }
}

crate::config::impl_approx_eq!(DualQuat);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use core::f64::consts::FRAC_PI_2;

    fn sample() -> (Quat<f64>, Vec3<f64>, DualQuat<f64>) {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 2.0) * (1.0 / 3.0), 0.8);
        let t = Vec3::new(3.0, -1.0, 2.0);
        (q, t, DualQuat::from_rotation_translation(&q, t))
    }

    #[test]
    fn encodes_rotation_then_translation() {
        let (q, t, dq) = sample();
        assert_approx_eq!(dq.translation(), t);
        let p = Vec3::new(0.5, 1.0, -2.0);
        assert_approx_eq!(dq.transform_point(p), q.rotate(p) + t);
        assert_approx_eq!(dq.transform_point(p), Mat4::from_rotation_translation(&q, t).transform_point(p));
    }

    #[test]
    fn mat4_roundtrip() {
        let (q, t, dq) = sample();
        let m = Mat4::from_rotation_translation(&q, t);
        assert_approx_eq!(DualQuat::from_mat4(&m), dq);
        assert_approx_eq!(Mat4::from_dual_quat(&dq), m);
    }

    #[test]
    fn composition_applies_right_first() {
        let (_, _, a) = sample();
        let b = DualQuat::from_rotation_translation(&Quat::from_axis_angle(Vec3::z(), 0.3), Vec3::new(0.0, 1.0, 0.0));
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_approx_eq!((a * b).transform_point(p), a.transform_point(b.transform_point(p)));
    }

    #[test]
    fn translate_is_post_multiply() {
        let (q, t, dq) = sample();
        let v = Vec3::new(1.0, 0.0, 0.0);
        let moved = dq.translate(v);
        assert_approx_eq!(moved.real, q);
        // Local offset is rotated before it is added
        assert_approx_eq!(moved.translation(), t + q.rotate(v));
    }

    #[test]
    fn axis_rotations_keep_translation() {
        let (q, t, dq) = sample();
        let rx = dq.rotate_x(0.5);
        assert_approx_eq!(rx.translation(), t);
        assert_approx_eq!(rx.real, q.rotate_x(0.5));
        assert_approx_eq!(dq.rotate_y(0.5).translation(), t);
        assert_approx_eq!(dq.rotate_z(0.5).real, q.rotate_z(0.5));
    }

    #[test]
    fn rotate_by_quat() {
        let (_, _, dq) = sample();
        let r = Quat::from_axis_angle(Vec3::y(), FRAC_PI_2);
        assert_approx_eq!(dq.rotate_by_quat_append(&r), dq * DualQuat::from_rotation(&r));
        assert_approx_eq!(dq.rotate_by_quat_prepend(&r), DualQuat::from_rotation(&r) * dq);
        assert_approx_eq!(dq.rotate_around_axis(Vec3::new(0.0, 4.0, 0.0), FRAC_PI_2), dq.rotate_by_quat_append(&r));
        assert_eq!(dq.rotate_around_axis(Vec3::zero(), 1.0), dq);
        assert_eq!(dq.rotate_around_axis(Vec3::y(), 0.0), dq);
    }

    #[test]
    fn inverse_undoes_transform() {
        let (_, _, dq) = sample();
        assert_approx_eq!(dq * dq.try_inverse().unwrap(), DualQuat::identity());
        assert_approx_eq!(dq.try_inverse().unwrap(), dq.conjugate());
        let zero = DualQuat::new(Quat::new(0.0, 0.0, 0.0, 0.0), Quat::identity());
        assert_eq!(zero.try_inverse(), None);
        let small = DualQuat::new(Quat::new(0.0, 0.0, 0.0, 1e-4_f64), Quat::identity());
        let expected = DualQuat::new(Quat::new(0.0, 0.0, 0.0, 1e4), Quat::new(0.0, 0.0, 0.0, 1e8));
        assert_approx_eq!(small.try_inverse().unwrap(), expected);
    }

    #[test]
    fn normalize_restores_unit_form() {
        let (_, _, dq) = sample();
        let scaled = dq * 2.5;
        assert!((scaled.norm() - 2.5).abs() < 1e-12);
        let n = scaled.normalize();
        assert_approx_eq!(n, dq);
        assert!(n.real.dot(&n.dual).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_hemisphere() {
        let (_, _, a) = sample();
        let b = DualQuat::from_translation(Vec3::new(1.0, 1.0, 1.0));
        assert_approx_eq!(a.lerp(&b, 0.0), a);
        assert_approx_eq!(a.lerp(&b, 1.0), b);
        let flipped = b * -1.0;
        assert_approx_eq!(a.lerp(&flipped, 1.0), b);
    }

    #[test]
    fn addition_and_dot() {
        let a = DualQuat::<f64>::identity();
        let sum = a + a;
        assert_eq!(sum.real, Quat::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(a.dot(&sum), 2.0);
    }

    #[test]
    fn display() {
        let dq = DualQuat::<f64>::from_translation(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(std::format!("{}", dq), "quat2(0, 0, 0, 1, 1, 2, 3, 0)");
    }
}
