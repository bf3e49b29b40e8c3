use super::{Lane, Real};
use core::ops::{Add, Div, Mul, Neg, Sub};

/// `N` scalar lanes stored contiguously and operated on elementwise.
///
/// This is the packed representation used for 128-bit vector builds, where the compiler lowers
/// the elementwise loops to the target's vector instructions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct Packed<T, const N: usize>(pub [T; N]);

// SAFETY: `Packed` is a transparent wrapper around `[T; N]`, which is `Pod` whenever `T` is.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Packed<T, N> {}
// SAFETY: see above.
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Packed<T, N> {}

macro_rules! elementwise {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: Real, const N: usize> $trait for Packed<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: Self) -> Self {
                Self(core::array::from_fn(|i| self.0[i] $op rhs.0[i]))
            }
        }
    };
}

elementwise!(Add, add, +);
elementwise!(Sub, sub, -);
elementwise!(Mul, mul, *);
elementwise!(Div, div, /);

impl<T: Real, const N: usize> Neg for Packed<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.map(|x| -x))
    }
}

impl<T: Real, const N: usize> Lane for Packed<T, N> {
    type Scalar = T;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self(self.0.map(Lane::sqrt))
    }

    #[cfg(tfcp_fma)]
    #[inline(always)]
    fn fmsub(self, y: Self, z: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i].fmsub(y.0[i], z.0[i])))
    }

    #[inline(always)]
    fn extract(self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(core::array::from_fn(f))
    }
}
