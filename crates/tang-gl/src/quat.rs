use crate::{Mat3, Scalar, Vec3};
use core::ops::{Add, Mul, Neg, Sub};

/// Quaternion: xi + yj + zk + w
///
/// Stored as vector part `v = (x, y, z)` followed by scalar part `w`, so the
/// packed layout is `[x, y, z, w]`. Represents rotations when unit-length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub v: Vec3<S>,
    pub w: S,
}

/// Axis order for [`Quat::from_euler`]. `Xyz` means `qx * qy * qz`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    #[default]
    Zyx,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { v: Vec3::new(x, y, z), w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { v: Vec3::zero(), w: S::ONE }
    }

    /// Quaternion from axis-angle representation. `axis` must be unit length.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = (angle * S::HALF).sin_cos();
        Self { v: axis * s, w: c }
    }

    /// Rotation axis and angle, with the angle in `[0, 2π)`.
    ///
    /// For a (near) zero angle the axis is arbitrary and `(1, 0, 0)` is returned.
    pub fn axis_angle(&self) -> (Vec3<S>, S) {
        let mut angle = self.w.clamp(-S::ONE, S::ONE).acos() * S::TWO;
        if angle >= S::TAU {
            angle = angle - S::TAU;
        }
        let s = (angle * S::HALF).sin();
        if s > S::TOLERANCE {
            (self.v / s, angle)
        } else {
            (Vec3::x(), angle)
        }
    }

    /// Angular distance between two unit quaternions, in `[0, π]`.
    pub fn angle_between(&self, other: &Self) -> S {
        let d = self.dot(other);
        (S::TWO * d * d - S::ONE).clamp(-S::ONE, S::ONE).acos()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        self.v.dot(other.v) + self.w * other.w
    }

    #[inline]
    pub fn norm_sq(&self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> S { self.norm_sq().sqrt() }

    /// Divides by the length. A zero quaternion yields NaN components.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        Self { v: self.v / n, w: self.w / n }
    }

    /// Quaternion multiplication (Hamilton product)
    pub fn mul(&self, other: &Quat<S>) -> Quat<S> {
        Quat {
            v: other.v * self.w + self.v * other.w + self.v.cross(other.v),
            w: self.w * other.w - self.v.dot(other.v),
        }
    }

    /// `self * rotation about X by rad`
    pub fn rotate_x(&self, rad: S) -> Self {
        let (s, c) = (rad * S::HALF).sin_cos();
        self.mul(&Self::new(s, S::ZERO, S::ZERO, c))
    }

    /// `self * rotation about Y by rad`
    pub fn rotate_y(&self, rad: S) -> Self {
        let (s, c) = (rad * S::HALF).sin_cos();
        self.mul(&Self::new(S::ZERO, s, S::ZERO, c))
    }

    /// `self * rotation about Z by rad`
    pub fn rotate_z(&self, rad: S) -> Self {
        let (s, c) = (rad * S::HALF).sin_cos();
        self.mul(&Self::new(S::ZERO, S::ZERO, s, c))
    }

    /// Recompute `w` from `x, y, z`, assuming a unit quaternion. Ignores the current `w`.
    pub fn calculate_w(&self) -> Self {
        let w = (S::ONE - self.v.norm_sq()).abs().sqrt();
        Self { v: self.v, w }
    }

    /// Quaternion exponential
    pub fn exp(&self) -> Self {
        let r = self.v.norm();
        let et = self.w.exp();
        let s = if r > S::ZERO { et * r.sin() / r } else { S::ZERO };
        Self { v: self.v * s, w: et * r.cos() }
    }

    /// Quaternion natural logarithm
    pub fn ln(&self) -> Self {
        let r = self.v.norm();
        let t = if r > S::ZERO { r.atan2(self.w) / r } else { S::ZERO };
        Self { v: self.v * t, w: S::HALF * self.norm_sq().ln() }
    }

    /// `exp(b * ln(self))`
    pub fn pow(&self, b: S) -> Self {
        (self.ln() * b).exp()
    }

    /// Component-wise linear interpolation, not normalized.
    pub fn lerp(&self, other: &Self, t: S) -> Self {
        *self + (*other - *self) * t
    }

    /// Spherical linear interpolation along the shorter arc.
    pub fn slerp(&self, other: &Quat<S>, t: S) -> Quat<S> {
        let mut dot = self.dot(other);
        let mut other = *other;

        // Ensure shortest path
        if dot < S::ZERO {
            other = -other;
            dot = -dot;
        }

        // Fall back to lerp for nearly-parallel quaternions
        if S::ONE - dot <= S::TOLERANCE {
            return self.lerp(&other, t).normalize();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((S::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        *self * a + other * b
    }

    /// Spherical quadrangle interpolation through `self, b, c, d`.
    pub fn sqlerp(&self, b: &Self, c: &Self, d: &Self, t: S) -> Self {
        let outer = self.slerp(d, t);
        let inner = b.slerp(c, t);
        outer.slerp(&inner, S::TWO * t * (S::ONE - t))
    }

    /// `None` for a zero quaternion.
    pub fn try_inverse(&self) -> Option<Self> {
        let n = self.norm_sq();
        let Some(inv) = n.try_recip() else {
            trace!(norm_sq = n.to_f64(), "quat has no inverse");
            return None;
        };
        Some(Self { v: -self.v * inv, w: self.w * inv })
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { v: -self.v, w: self.w }
    }

    /// Convert from a rotation matrix (Shepperd's method for numerical stability)
    pub fn from_mat3(m: &Mat3<S>) -> Self {
        let trace = m.trace();
        let quarter = |s: S| s * S::HALF * S::HALF;

        if trace > S::ZERO {
            let s = (trace + S::ONE).sqrt() * S::TWO;
            let inv_s = s.recip();
            Quat::new(
                (m.get(2, 1) - m.get(1, 2)) * inv_s,
                (m.get(0, 2) - m.get(2, 0)) * inv_s,
                (m.get(1, 0) - m.get(0, 1)) * inv_s,
                quarter(s),
            )
        } else {
            // Largest diagonal element, first index wins ties
            let mut major = 0;
            if m.get(1, 1) > m.get(0, 0) {
                major = 1;
            }
            if m.get(2, 2) > m.get(major, major) {
                major = 2;
            }

            match major {
                0 => {
                    let s = (S::ONE + m.get(0, 0) - m.get(1, 1) - m.get(2, 2)).sqrt() * S::TWO;
                    let inv_s = s.recip();
                    Quat::new(
                        quarter(s),
                        (m.get(0, 1) + m.get(1, 0)) * inv_s,
                        (m.get(0, 2) + m.get(2, 0)) * inv_s,
                        (m.get(2, 1) - m.get(1, 2)) * inv_s,
                    )
                }
                1 => {
                    let s = (S::ONE + m.get(1, 1) - m.get(0, 0) - m.get(2, 2)).sqrt() * S::TWO;
                    let inv_s = s.recip();
                    Quat::new(
                        (m.get(0, 1) + m.get(1, 0)) * inv_s,
                        quarter(s),
                        (m.get(1, 2) + m.get(2, 1)) * inv_s,
                        (m.get(0, 2) - m.get(2, 0)) * inv_s,
                    )
                }
                _ => {
                    let s = (S::ONE + m.get(2, 2) - m.get(0, 0) - m.get(1, 1)).sqrt() * S::TWO;
                    let inv_s = s.recip();
                    Quat::new(
                        (m.get(0, 2) + m.get(2, 0)) * inv_s,
                        (m.get(1, 2) + m.get(2, 1)) * inv_s,
                        quarter(s),
                        (m.get(1, 0) - m.get(0, 1)) * inv_s,
                    )
                }
            }
        }
    }

    /// Rotation from Euler angles in degrees, composed in the given axis order.
    pub fn from_euler(x: S, y: S, z: S, order: EulerOrder) -> Self {
        let half_to_rad = S::PI / S::from_f64(360.0);
        let (sx, cx) = (x * half_to_rad).sin_cos();
        let (sy, cy) = (y * half_to_rad).sin_cos();
        let (sz, cz) = (z * half_to_rad).sin_cos();
        let qx = Self::new(sx, S::ZERO, S::ZERO, cx);
        let qy = Self::new(S::ZERO, sy, S::ZERO, cy);
        let qz = Self::new(S::ZERO, S::ZERO, sz, cz);
        match order {
            EulerOrder::Xyz => qx * qy * qz,
            EulerOrder::Xzy => qx * qz * qy,
            EulerOrder::Yxz => qy * qx * qz,
            EulerOrder::Yzx => qy * qz * qx,
            EulerOrder::Zxy => qz * qx * qy,
            EulerOrder::Zyx => qz * qy * qx,
        }
    }

    /// Shortest rotation taking unit vector `a` onto unit vector `b`.
    ///
    /// For opposite vectors the half-turn axis is `X x a`, or `Y x a` when `a` lies on X.
    pub fn rotation_to(a: Vec3<S>, b: Vec3<S>) -> Self {
        let threshold = S::from_f64(0.999999);
        let dot = a.dot(b);
        if dot < -threshold {
            let mut axis = Vec3::x().cross(a);
            if axis.norm() < S::from_f64(1e-6) {
                axis = Vec3::y().cross(a);
            }
            trace!("rotation_to with opposite vectors");
            Self::from_axis_angle(axis.normalize(), S::PI)
        } else if dot > threshold {
            Self::identity()
        } else {
            Self { v: a.cross(b), w: S::ONE + dot }.normalize()
        }
    }

    /// Orientation of a camera with the given orthonormal `view`, `right` and `up` axes.
    pub fn set_axes(view: Vec3<S>, right: Vec3<S>, up: Vec3<S>) -> Self {
        Self::from_mat3(&Mat3::from_rows(right, up, -view)).normalize()
    }

    /// Rotate a vector by this (unit) quaternion.
    #[inline]
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        v.transform_quat(self)
    }

    /// Uniformly distributed unit quaternion (Shoemake's method).
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let u1 = S::from_f64(rng.gen::<f64>());
        let u2 = S::from_f64(rng.gen::<f64>());
        let u3 = S::from_f64(rng.gen::<f64>());
        let a = (S::ONE - u1).sqrt();
        let b = u1.sqrt();
        let (s2, c2) = (u2 * S::TAU).sin_cos();
        let (s3, c3) = (u3 * S::TAU).sin_cos();
        Self::new(a * s2, a * c2, b * s3, b * c3)
    }

    /// Construct from a slice `[x, y, z, w]` (panics if len < 4)
    #[inline]
    pub fn from_slice(s: &[S]) -> Self {
        Self::new(s[0], s[1], s[2], s[3])
    }

    #[inline]
    pub fn to_array(&self) -> [S; 4] {
        [self.v.x, self.v.y, self.v.z, self.w]
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Add for Quat<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self { v: self.v + rhs.v, w: self.w + rhs.w }
    }
}

impl<S: Scalar> Sub for Quat<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self { v: self.v - rhs.v, w: self.w - rhs.w }
    }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self { v: -self.v, w: -self.w } }
}

impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self { v: self.v * rhs, w: self.w * rhs }
    }
}

// Hamilton product
impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Quat::mul(&self, &rhs) }
}

impl<S: Scalar> core::fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "quat({}, {}, {}, {})", self.v.x, self.v.y, self.v.z, self.w)
    }
}

crate::config::impl_approx_eq!(Quat);
