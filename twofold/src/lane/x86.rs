//! 256-bit lanes backed by AVX2 and FMA.
//!
//! This module is only compiled when both extensions are statically enabled for the whole build,
//! so the [`V3`] token can be materialized without a runtime check.

use super::Lane;
use core::ops::{Add, Div, Mul, Neg, Sub};
use pulp::{cast, f32x8, f64x4, x86::V3};

#[inline(always)]
fn simd() -> V3 {
    // SAFETY: `tfcp_simd = "avx"` is only set by the build script when the target enables both
    // avx2 and fma.
    unsafe { V3::new_unchecked() }
}

/// Eight packed `f32` lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct F32x8(pub f32x8);

/// Four packed `f64` lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct F64x4(pub f64x4);

// SAFETY: transparent wrappers around plain-old-data vector registers.
unsafe impl bytemuck::Zeroable for F32x8 {}
// SAFETY: see above.
unsafe impl bytemuck::Pod for F32x8 {}
// SAFETY: see above.
unsafe impl bytemuck::Zeroable for F64x4 {}
// SAFETY: see above.
unsafe impl bytemuck::Pod for F64x4 {}

macro_rules! impl_binary {
    ($ty: ident, $trait: ident, $fn: ident, $simd_fn: ident) => {
        impl $trait for $ty {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: Self) -> Self {
                Self(simd().$simd_fn(self.0, rhs.0))
            }
        }
    };
}

impl_binary!(F32x8, Add, add, add_f32x8);
impl_binary!(F32x8, Sub, sub, sub_f32x8);
impl_binary!(F32x8, Mul, mul, mul_f32x8);
impl_binary!(F32x8, Div, div, div_f32x8);

impl_binary!(F64x4, Add, add, add_f64x4);
impl_binary!(F64x4, Sub, sub, sub_f64x4);
impl_binary!(F64x4, Mul, mul, mul_f64x4);
impl_binary!(F64x4, Div, div, div_f64x4);

impl Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        let simd = simd();
        Self(simd.xor_f32x8(self.0, simd.splat_f32x8(-0.0)))
    }
}

impl Neg for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        let simd = simd();
        Self(simd.xor_f64x4(self.0, simd.splat_f64x4(-0.0)))
    }
}

impl Lane for F32x8 {
    type Scalar = f32;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self(simd().splat_f32x8(value))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        let simd = simd();
        Self(cast(simd.avx._mm256_sqrt_ps(cast(self.0))))
    }

    #[cfg(tfcp_fma)]
    #[inline(always)]
    fn fmsub(self, y: Self, z: Self) -> Self {
        Self(simd().mul_sub_f32x8(self.0, y.0, z.0))
    }

    #[inline(always)]
    fn extract(self, index: usize) -> f32 {
        let lanes: [f32; 8] = cast(self.0);
        lanes[index]
    }

    #[inline(always)]
    fn from_fn(f: impl FnMut(usize) -> f32) -> Self {
        let lanes: [f32; 8] = core::array::from_fn(f);
        Self(cast(lanes))
    }
}

impl Lane for F64x4 {
    type Scalar = f64;

    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self(simd().splat_f64x4(value))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        let simd = simd();
        Self(cast(simd.avx._mm256_sqrt_pd(cast(self.0))))
    }

    #[cfg(tfcp_fma)]
    #[inline(always)]
    fn fmsub(self, y: Self, z: Self) -> Self {
        Self(simd().mul_sub_f64x4(self.0, y.0, z.0))
    }

    #[inline(always)]
    fn extract(self, index: usize) -> f64 {
        let lanes: [f64; 4] = cast(self.0);
        lanes[index]
    }

    #[inline(always)]
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
        let lanes: [f64; 4] = core::array::from_fn(f);
        Self(cast(lanes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg_flips_sign_of_zero() {
        let x = F64x4::from_fn(|i| if i % 2 == 0 { 0.0 } else { -0.0 });
        let y = -x;
        for i in 0..4 {
            assert_eq!(
                y.extract(i).is_sign_negative(),
                !x.extract(i).is_sign_negative()
            );
        }
    }

    #[test]
    fn test_sqrt_matches_scalar() {
        let x = F32x8::from_fn(|i| (i * i + 2) as f32);
        let r = Lane::sqrt(x);
        for i in 0..8 {
            assert_eq!(r.extract(i), ((i * i + 2) as f32).sqrt());
        }
    }
}
