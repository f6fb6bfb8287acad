//! tang-gl: vector, matrix and quaternion math for real-time 3D
//!
//! The transform, projection and interpolation layer a renderer or scene
//! graph sits on. Generic over scalar type so a build picks f32 or f64 once.
//!
//! # Conventions
//! - Column-major storage, element `col * rows + row`, `#[repr(C)]` packed
//! - Post-multiply: `(A * B) * p` applies `B` first
//! - Right-handed view space, clip depth in [-1, 1] unless a `_zo` builder says otherwise
//! - Quaternions are `(x, y, z, w)`
//! - "No result" (singular inverse, degenerate basis) is `None`, never NaN
//! - Approximate equality goes through one shared [`Config`]

#![no_std]

#[cfg(feature = "std")]
extern crate std;

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

mod scalar;
mod config;
mod vec2;
mod vec3;
mod vec4;
mod mat2;
mod mat2d;
mod mat3;
mod mat4;
mod quat;
mod dual_quat;
mod batch;

pub use scalar::{to_degrees, to_radians, Scalar};
pub use config::{approx_eq, ApproxEq, Config, ConfigError};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat2::Mat2;
pub use mat2d::Mat2d;
pub use mat3::Mat3;
pub use mat4::{FieldOfView, Mat4};
pub use quat::{EulerOrder, Quat};
pub use dual_quat::DualQuat;
pub use batch::{for_each, Packed};

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ident),*) => {
            $(
                // SAFETY: All fields are the same float type, #[repr(C)], no padding
                unsafe impl bytemuck::Zeroable for $t<f32> {}
                unsafe impl bytemuck::Pod for $t<f32> {}
                unsafe impl bytemuck::Zeroable for $t<f64> {}
                unsafe impl bytemuck::Pod for $t<f64> {}
            )*
        };
    }

    impl_pod!(Vec2, Vec3, Vec4, Mat2, Mat2d, Mat3, Mat4, Quat, DualQuat);
}
