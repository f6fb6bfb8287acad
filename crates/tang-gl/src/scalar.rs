use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point component type shared by every vector, matrix and quaternion.
///
/// Implemented for `f32` and `f64`. The width is picked at compile time through
/// the type parameter, so a build never mixes precisions behind the caller's back.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const TAU: Self;
    const FRAC_PI_2: Self;
    /// Machine epsilon of the type itself.
    const EPSILON: Self;
    /// Default tolerance for approximate comparisons: the machine epsilon of
    /// 32-bit floats, regardless of the storage width.
    const TOLERANCE: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, lo: Self, hi: Self) -> Self;
    fn recip(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn is_finite(self) -> bool;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    /// `1 / self`, or `None` when `self` is zero or the reciprocal overflows.
    #[inline]
    fn try_recip(self) -> Option<Self> {
        let r = self.recip();
        (self != Self::ZERO && r.is_finite()).then_some(r)
    }
}

/// Degrees to radians.
#[inline]
pub fn to_radians<S: Scalar>(degrees: S) -> S {
    degrees * (S::PI / S::from_f64(180.0))
}

/// Radians to degrees.
#[inline]
pub fn to_degrees<S: Scalar>(radians: S) -> S {
    radians * (S::from_f64(180.0) / S::PI)
}

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    macro_rules! std_ops {
        ($t:ident) => {
            ::paste::paste! {
                #[inline(always)] pub fn [<sqrt_ $t>](x: $t) -> $t { x.sqrt() }
                #[inline(always)] pub fn [<abs_ $t>](x: $t) -> $t { x.abs() }
                #[inline(always)] pub fn [<sin_ $t>](x: $t) -> $t { x.sin() }
                #[inline(always)] pub fn [<cos_ $t>](x: $t) -> $t { x.cos() }
                #[inline(always)] pub fn [<tan_ $t>](x: $t) -> $t { x.tan() }
                #[inline(always)] pub fn [<acos_ $t>](x: $t) -> $t { x.acos() }
                #[inline(always)] pub fn [<atan2_ $t>](y: $t, x: $t) -> $t { y.atan2(x) }
                #[inline(always)] pub fn [<sin_cos_ $t>](x: $t) -> ($t, $t) { x.sin_cos() }
                #[inline(always)] pub fn [<floor_ $t>](x: $t) -> $t { x.floor() }
                #[inline(always)] pub fn [<ceil_ $t>](x: $t) -> $t { x.ceil() }
                #[inline(always)] pub fn [<round_ $t>](x: $t) -> $t { x.round() }
                #[inline(always)] pub fn [<exp_ $t>](x: $t) -> $t { x.exp() }
                #[inline(always)] pub fn [<ln_ $t>](x: $t) -> $t { x.ln() }
            }
        };
    }

    std_ops!(f32);
    std_ops!(f64);
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)] pub fn sqrt_f32(x: f32) -> f32 { libm::sqrtf(x) }
    #[inline(always)] pub fn sqrt_f64(x: f64) -> f64 { libm::sqrt(x) }
    #[inline(always)] pub fn abs_f32(x: f32) -> f32 { libm::fabsf(x) }
    #[inline(always)] pub fn abs_f64(x: f64) -> f64 { libm::fabs(x) }
    #[inline(always)] pub fn sin_f32(x: f32) -> f32 { libm::sinf(x) }
    #[inline(always)] pub fn sin_f64(x: f64) -> f64 { libm::sin(x) }
    #[inline(always)] pub fn cos_f32(x: f32) -> f32 { libm::cosf(x) }
    #[inline(always)] pub fn cos_f64(x: f64) -> f64 { libm::cos(x) }
    #[inline(always)] pub fn tan_f32(x: f32) -> f32 { libm::tanf(x) }
    #[inline(always)] pub fn tan_f64(x: f64) -> f64 { libm::tan(x) }
    #[inline(always)] pub fn acos_f32(x: f32) -> f32 { libm::acosf(x) }
    #[inline(always)] pub fn acos_f64(x: f64) -> f64 { libm::acos(x) }
    #[inline(always)] pub fn atan2_f32(y: f32, x: f32) -> f32 { libm::atan2f(y, x) }
    #[inline(always)] pub fn atan2_f64(y: f64, x: f64) -> f64 { libm::atan2(y, x) }
    #[inline(always)] pub fn sin_cos_f32(x: f32) -> (f32, f32) { libm::sincosf(x) }
    #[inline(always)] pub fn sin_cos_f64(x: f64) -> (f64, f64) { libm::sincos(x) }
    #[inline(always)] pub fn floor_f32(x: f32) -> f32 { libm::floorf(x) }
    #[inline(always)] pub fn floor_f64(x: f64) -> f64 { libm::floor(x) }
    #[inline(always)] pub fn ceil_f32(x: f32) -> f32 { libm::ceilf(x) }
    #[inline(always)] pub fn ceil_f64(x: f64) -> f64 { libm::ceil(x) }
    #[inline(always)] pub fn round_f32(x: f32) -> f32 { libm::roundf(x) }
    #[inline(always)] pub fn round_f64(x: f64) -> f64 { libm::round(x) }
    #[inline(always)] pub fn exp_f32(x: f32) -> f32 { libm::expf(x) }
    #[inline(always)] pub fn exp_f64(x: f64) -> f64 { libm::exp(x) }
    #[inline(always)] pub fn ln_f32(x: f32) -> f32 { libm::logf(x) }
    #[inline(always)] pub fn ln_f64(x: f64) -> f64 { libm::log(x) }
}

macro_rules! impl_scalar_float {
    ($t:ident) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;
            const FRAC_PI_2: Self = core::$t::consts::FRAC_PI_2;
            const EPSILON: Self = $t::EPSILON;
            const TOLERANCE: Self = f32::EPSILON as $t;
            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $t>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $t>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $t>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $t>](self) }
            #[inline] fn tan(self) -> Self { float_ops::[<tan_ $t>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $t>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $t>](self, other) }
            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $t>](self) }
            #[inline] fn floor(self) -> Self { float_ops::[<floor_ $t>](self) }
            #[inline] fn ceil(self) -> Self { float_ops::[<ceil_ $t>](self) }
            #[inline] fn round(self) -> Self { float_ops::[<round_ $t>](self) }
            #[inline] fn exp(self) -> Self { float_ops::[<exp_ $t>](self) }
            #[inline] fn ln(self) -> Self { float_ops::[<ln_ $t>](self) }
            #[inline] fn is_finite(self) -> bool { $t::is_finite(self) }

            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            #[inline] fn clamp(self, lo: Self, hi: Self) -> Self {
                if self < lo { lo } else if self > hi { hi } else { self }
            }
            #[inline] fn recip(self) -> Self { 1.0 / self }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);
