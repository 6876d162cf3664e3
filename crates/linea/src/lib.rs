//! linea: fixed-size linear algebra for rendering and physics code
//!
//! Small `Copy` value types: [`Vec3`], [`Vec4`], [`Mat3`], [`Mat4`] and
//! [`Quat`], generic over `f32`/`f64` through [`Scalar`].
//!
//! # Design principles
//! - `#[repr(C)]` everywhere; `data()` hands out the raw storage for graphics
//!   APIs (matrices are row-major: element `(r, c)` at `r * n + c`)
//! - Matrix inversion is Doolittle LU plus forward/backward substitution,
//!   without pivoting, so results are reproducible across callers
//! - Numeric failure (zero pivot, zero-length normalize) is not an error: it
//!   surfaces as IEEE-754 infinity/NaN
//! - Bad component or element indices panic; `try_get` returns [`Error`]
//!   instead
//! - `normalize`, `transpose` and `invert` mutate in place and return
//!   `&mut Self`; `normalized`, `transposed` and `inverted` return copies

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("linea needs either the `std` or the `libm` feature for float functions");

mod axis;
mod error;
mod lu;
mod mat3;
mod mat4;
mod quat;
mod scalar;
mod vec3;
mod vec4;

pub use axis::Axis;
pub use error::Error;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec3::Vec3;
pub use vec4::Vec4;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Vec4<f32>);
    impl_pod!(Vec4<f64>);
    impl_pod!(Mat3<f32>);
    impl_pod!(Mat3<f64>);
    impl_pod!(Mat4<f32>);
    impl_pod!(Mat4<f64>);
    impl_pod!(Quat<f32>);
    impl_pod!(Quat<f64>);
}
