use crate::Scalar;

/// Rejected [`Config`] values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("epsilon must be positive, got {0}")]
    NonPositiveEpsilon(f64),
    #[error("epsilon must be finite")]
    NonFiniteEpsilon,
}

/// Comparison settings, fixed when the caller builds them.
///
/// The only option is the component tolerance used by every `approx_eq`.
/// Hand the same `Config` to every comparison that has to agree.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config<S> {
    pub epsilon: S,
}

impl<S: Scalar> Config<S> {
    pub fn new(epsilon: S) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() {
            return Err(ConfigError::NonFiniteEpsilon);
        }
        if epsilon <= S::ZERO {
            return Err(ConfigError::NonPositiveEpsilon(epsilon.to_f64()));
        }
        Ok(Self { epsilon })
    }

    /// `|a - b| <= epsilon * max(1, |a|, |b|)`.
    ///
    /// Absolute near zero, relative for large magnitudes.
    #[inline]
    pub fn approx_eq(&self, a: S, b: S) -> bool {
        (a - b).abs() <= self.epsilon * S::ONE.max(a.abs().max(b.abs()))
    }
}

impl<S: Scalar> Default for Config<S> {
    fn default() -> Self {
        Self { epsilon: S::TOLERANCE }
    }
}

/// Approximate scalar equality under the default tolerance.
#[inline]
pub fn approx_eq<S: Scalar>(a: S, b: S) -> bool {
    Config::default().approx_eq(a, b)
}

/// Component-wise approximate equality.
///
/// Exact equality is `PartialEq`; the two are never interchangeable.
pub trait ApproxEq<S: Scalar> {
    fn approx_eq_with(&self, other: &Self, config: &Config<S>) -> bool;

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &Config::default())
    }
}

impl ApproxEq<f32> for f32 {
    #[inline]
    fn approx_eq_with(&self, other: &Self, config: &Config<f32>) -> bool {
        config.approx_eq(*self, *other)
    }
}

impl ApproxEq<f64> for f64 {
    #[inline]
    fn approx_eq_with(&self, other: &Self, config: &Config<f64>) -> bool {
        config.approx_eq(*self, *other)
    }
}

impl<S: Scalar, T: ApproxEq<S>> ApproxEq<S> for Option<T> {
    fn approx_eq_with(&self, other: &Self, config: &Config<S>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.approx_eq_with(b, config),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Implements [`ApproxEq`] through the type's flat component array.
macro_rules! impl_approx_eq {
    ($t:ident) => {
        impl<S: $crate::Scalar> $crate::ApproxEq<S> for $t<S> {
            fn approx_eq_with(&self, other: &Self, config: &$crate::Config<S>) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| config.approx_eq(*a, *b))
            }
        }
    };
}

pub(crate) use impl_approx_eq;

/// Asserts that two values are equal under [`ApproxEq`].
///
/// An optional third argument supplies the [`Config`] to compare with.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !$crate::ApproxEq::approx_eq(left, right) {
                    panic!(
                        "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                        left, right
                    );
                }
            }
        }
    };
    ($left:expr, $right:expr, $config:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !$crate::ApproxEq::approx_eq_with(left, right, &$config) {
                    panic!(
                        "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                        left, right
                    );
                }
            }
        }
    };
}
