//! Double-word floating-point arithmetic.
//!
//! A double-word number is the unevaluated sum of two floating-point limbs, `value + error`.
//! This crate offers two flavors of it:
//!
//! - [`Twofold`] keeps the limbs as they come out of each operation. The leading limb is exactly
//!   what plain arithmetic would have computed, and the error limb accumulates its rounding error.
//! - [`Coupled`] renormalizes after every operation, so that `error` is below half an ulp of
//!   `value`. It behaves like a number with twice the mantissa of its limbs.
//!
//! Both work on scalars (`f32`, `f64`) and on the packed lanes [`Floatx`] and [`Doublex`], whose
//! width follows the vector extension of the target; see [`config`].
//!
//! ```rust
//! use twofold::Coupled;
//!
//! let tiny = 2f64.powi(-60);
//! let x = Coupled::<f64>::from(1.0f64) + tiny - 1.0f64;
//! assert_eq!(x.value, tiny);
//!
//! let third = 1.0f64 / Coupled::<f64>::from(3.0f64);
//! println!("{third:e}");
//! ```
//!
//! The raw algorithms on limbs live in [`exact`], [`renorm`] and [`arith`].

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(tfcp_simd = "avx", not(tfcp_fma)))]
compile_error!("256-bit lanes require a hardware fused multiply-add");

#[cfg(all(feature = "fma", not(tfcp_fma)))]
compile_error!("the `fma` feature is enabled but the target has no hardware fused multiply-add");

pub mod arith;
pub mod config;
pub mod exact;
pub mod lane;
pub mod renorm;
pub mod value;

pub use config::{LaneConfig, SimdExtension, UnsupportedConfig};
pub use lane::{as_lanes, as_lanes_mut, Doublex, Floatx, Lane, Packed, Real};
pub use value::{
    error_of, value_of, AmbiguousComparison, Comparison, Coupled, PDouble, PDoublex, PFloat,
    PFloatx, Shaped, TDouble, TDoublex, TFloat, TFloatx, TryCompare, Twofold,
};
