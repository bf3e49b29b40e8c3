//! Floating-point lanes.
//!
//! Every algorithm in this crate is written once against [`Lane`] and instantiated for the four
//! lane types: [`f32`], [`f64`], [`Floatx`] and [`Doublex`]. The width of the packed types is
//! chosen at build time, see [`crate::config`].

use core::fmt::{Debug, Display, LowerExp};
use core::ops::{Add, Div, Mul, Neg, Sub};

mod packed;
pub use packed::Packed;

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "avx2",
    target_feature = "fma",
    tfcp_simd = "avx"
))]
#[cfg_attr(
    docsrs,
    doc(cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "avx2",
        target_feature = "fma"
    )))
)]
pub mod x86;

/// Packed single precision lanes, as wide as the active vector extension allows.
#[cfg(tfcp_simd = "avx")]
pub type Floatx = x86::F32x8;
/// Packed double precision lanes, as wide as the active vector extension allows.
#[cfg(tfcp_simd = "avx")]
pub type Doublex = x86::F64x4;

/// Packed single precision lanes, as wide as the active vector extension allows.
#[cfg(tfcp_simd = "sse")]
pub type Floatx = Packed<f32, 4>;
/// Packed double precision lanes, as wide as the active vector extension allows.
#[cfg(tfcp_simd = "sse")]
pub type Doublex = Packed<f64, 2>;

/// Packed single precision lanes, as wide as the active vector extension allows.
#[cfg(not(any(tfcp_simd = "avx", tfcp_simd = "sse")))]
pub type Floatx = f32;
/// Packed double precision lanes, as wide as the active vector extension allows.
#[cfg(not(any(tfcp_simd = "avx", tfcp_simd = "sse")))]
pub type Doublex = f64;

/// A floating-point value made of [`Lane::LANES`] independent scalars.
///
/// Arithmetic is elementwise and IEEE-754 conformant in every lane: `+ - * /` and [`Lane::sqrt`]
/// are correctly rounded.
pub trait Lane:
    Copy
    + Debug
    + PartialEq
    + bytemuck::Pod
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Scalar: Real;

    const LANES: usize;

    fn splat(value: Self::Scalar) -> Self;

    fn sqrt(self) -> Self;

    /// Computes $\operatorname{fl}(xy - z)$ with a single rounding.
    ///
    /// Only available when the target has a hardware fused multiply-add; there is no
    /// software fallback.
    #[cfg(tfcp_fma)]
    fn fmsub(self, y: Self, z: Self) -> Self;

    /// Returns lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::LANES`.
    fn extract(self, index: usize) -> Self::Scalar;

    fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self;
}

/// A native scalar floating-point type.
pub trait Real: Lane<Scalar = Self> + PartialOrd + Default + Display + LowerExp {
    const ZERO: Self;

    /// Number of significant bits, including the implicit one.
    const MANTISSA_DIGITS: u32;

    /// Dekker–Veltkamp splitting constant, $2^{\lceil p/2 \rceil} + 1$.
    const SPLITTER: Self;

    fn abs(self) -> Self;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    /// Exact widening to `f64`.
    fn to_f64(self) -> f64;

    /// Rounds to nearest, ties to even.
    fn from_f64(value: f64) -> Self;

    /// Returns the nearest value to `value` and the integral residual, rounded to nearest.
    fn round_i128(value: i128) -> (Self, Self);
}

macro_rules! impl_real {
    ($ty: ty, $splitter: expr) => {
        impl Lane for $ty {
            type Scalar = $ty;

            const LANES: usize = 1;

            #[inline(always)]
            fn splat(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[cfg(tfcp_fma)]
            #[inline(always)]
            fn fmsub(self, y: Self, z: Self) -> Self {
                <$ty>::mul_add(self, y, -z)
            }

            #[inline(always)]
            fn extract(self, index: usize) -> Self {
                assert_eq!(index, 0);
                self
            }

            #[inline(always)]
            fn from_fn(mut f: impl FnMut(usize) -> Self) -> Self {
                f(0)
            }
        }

        impl Real for $ty {
            const ZERO: Self = 0.0;
            const MANTISSA_DIGITS: u32 = <$ty>::MANTISSA_DIGITS;
            const SPLITTER: Self = $splitter;

            #[inline(always)]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline(always)]
            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn round_i128(value: i128) -> (Self, Self) {
                let head = value as $ty;
                let tail = value.wrapping_sub(head as i128) as $ty;
                (head, tail)
            }
        }
    };
}

impl_real!(f32, 4097.0);
impl_real!(f64, 134217729.0);

/// Splits `values` into the longest prefix viewed as lanes of type `L`, and the scalar remainder.
pub fn as_lanes<L: Lane>(values: &[L::Scalar]) -> (&[L], &[L::Scalar]) {
    let (head, tail) = values.split_at(values.len() - values.len() % L::LANES);
    (bytemuck::cast_slice(head), tail)
}

/// Mutable version of [`as_lanes`].
pub fn as_lanes_mut<L: Lane>(values: &mut [L::Scalar]) -> (&mut [L], &mut [L::Scalar]) {
    let len = values.len() - values.len() % L::LANES;
    let (head, tail) = values.split_at_mut(len);
    (bytemuck::cast_slice_mut(head), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitter_keeps_half_the_mantissa() {
        assert_eq!(f32::SPLITTER, (1u32 << 12) as f32 + 1.0);
        assert_eq!(f64::SPLITTER, (1u64 << 27) as f64 + 1.0);
    }

    #[test]
    fn test_round_i128() {
        let big = (1i64 << 60) + 3;
        let (head, tail) = f64::round_i128(big as i128);
        assert_eq!(head as i128 + tail as i128, big as i128);
        assert_eq!(tail, 3.0);

        let (head, tail) = f32::round_i128(16_777_217);
        assert_eq!(head, 16_777_216.0);
        assert_eq!(tail, 1.0);
    }

    #[test]
    fn test_extract_from_fn() {
        let x = Doublex::from_fn(|i| i as f64 + 0.5);
        for i in 0..Doublex::LANES {
            assert_eq!(x.extract(i), i as f64 + 0.5);
        }
        let y = Floatx::splat(-2.0);
        for i in 0..Floatx::LANES {
            assert_eq!(y.extract(i), -2.0);
        }
    }

    #[test]
    fn test_as_lanes() {
        let mut values: Vec<f64> = (0..11).map(|i| i as f64).collect();
        {
            let (lanes, rest) = as_lanes_mut::<Doublex>(&mut values);
            assert_eq!(rest.len(), 11 % Doublex::LANES);
            for lane in lanes.iter_mut() {
                *lane = -*lane;
            }
        }
        let (lanes, rest) = as_lanes::<Doublex>(&values);
        assert_eq!(lanes.len() * Doublex::LANES + rest.len(), 11);
        for (i, lane) in lanes.iter().enumerate() {
            for j in 0..Doublex::LANES {
                assert_eq!(lane.extract(j), -((i * Doublex::LANES + j) as f64));
            }
        }
    }

    #[cfg(tfcp_fma)]
    #[test]
    fn test_fmsub_smoke() {
        assert_eq!(Lane::fmsub(1.0f32, 2.0, 3.0), -1.0);
        assert_eq!(Lane::fmsub(1.0f64, 2.0, 3.0), -1.0);

        let one = Floatx::splat(1.0);
        let r = one.fmsub(Floatx::splat(2.0), Floatx::splat(3.0));
        assert_eq!(r, Floatx::splat(-1.0));

        let one = Doublex::splat(1.0);
        let r = one.fmsub(Doublex::splat(2.0), Doublex::splat(3.0));
        assert_eq!(r, Doublex::splat(-1.0));
    }
}
