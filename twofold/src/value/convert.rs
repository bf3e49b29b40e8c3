//! Conversions between plain ("dotted"), twofold and coupled values of either precision.
//!
//! The functions are named `<dest>by<source>` with `d` for dotted, `t` for [`Twofold`] and `p` for
//! [`Coupled`]; `T` is the destination precision and `S` the source precision. Narrowing keeps the
//! dropped bits in the error limb, widening is exact. Narrowing casts round to nearest, ties to
//! even.

use super::{zero, Coupled, Twofold};
use crate::lane::{Lane, Real};
use crate::renorm::{fast_renorm, renormalize};

/// A plain number that can be split into a leading value and a residual of precision `T`.
pub trait Dotted: Copy {
    /// Returns `(value, error)` with `value` the nearest `T` and `error` the rounded residual.
    fn limbs<T: Real>(self) -> (T, T);
}

macro_rules! impl_dotted_float {
    ($($ty: ty),*) => {$(
        impl Dotted for $ty {
            #[inline]
            fn limbs<T: Real>(self) -> (T, T) {
                let wide = self as f64;
                let value = T::from_f64(wide);
                (value, T::from_f64(wide - value.to_f64()))
            }
        }
    )*};
}

macro_rules! impl_dotted_int {
    ($($ty: ty),*) => {$(
        impl Dotted for $ty {
            #[inline]
            fn limbs<T: Real>(self) -> (T, T) {
                T::round_i128(self as i128)
            }
        }
    )*};
}

impl_dotted_float!(f32, f64);
impl_dotted_int!(i32, i64, u32, u64);

/// Changes the precision of a pair, folding what the leading limb loses into the error limb.
#[inline]
fn retype<T: Real, S: Real>(value: S, error: S) -> (T, T) {
    let head = T::from_f64(value.to_f64());
    let rest = error + (value - S::from_f64(head.to_f64()));
    (head, T::from_f64(rest.to_f64()))
}

#[inline]
pub fn dbyd<T: Real, S: Dotted>(x: S) -> T {
    x.limbs::<T>().0
}

#[inline]
pub fn tbyd<T: Real, S: Dotted>(x: S) -> Twofold<T> {
    let (value, error) = x.limbs();
    Twofold { value, error }
}

#[inline]
pub fn pbyd<T: Real, S: Dotted>(x: S) -> Coupled<T> {
    let (value, error) = x.limbs();
    Coupled { value, error }
}

/// Keeps the leading limb only.
#[inline]
pub fn dbyt<T: Real, S: Real>(x: Twofold<S>) -> T {
    T::from_f64(x.value.to_f64())
}

#[inline]
pub fn tbyt<T: Real, S: Real>(x: Twofold<S>) -> Twofold<T> {
    let (value, error) = retype(x.value, x.error);
    Twofold { value, error }
}

#[inline]
pub fn pbyt<T: Real, S: Real>(x: Twofold<S>) -> Coupled<T> {
    let (value, error) = if T::MANTISSA_DIGITS >= S::MANTISSA_DIGITS {
        let (value, error) = retype::<T, S>(x.value, x.error);
        renormalize(value, error)
    } else {
        let (value, error) = renormalize(x.value, x.error);
        let (value, error) = retype::<T, S>(value, error);
        fast_renorm(value, error)
    };
    Coupled { value, error }
}

/// Rounds the full sum of the limbs.
#[inline]
pub fn dbyp<T: Real, S: Real>(x: Coupled<S>) -> T {
    T::from_f64(x.value.to_f64() + x.error.to_f64())
}

#[inline]
pub fn tbyp<T: Real, S: Real>(x: Coupled<S>) -> Twofold<T> {
    let (value, error) = retype::<T, S>(x.value, x.error);
    let (value, error) = if T::MANTISSA_DIGITS > S::MANTISSA_DIGITS {
        fast_renorm(value, error)
    } else {
        (value, error)
    };
    Twofold { value, error }
}

#[inline]
pub fn pbyp<T: Real, S: Real>(x: Coupled<S>) -> Coupled<T> {
    let (value, error) = retype::<T, S>(x.value, x.error);
    let (value, error) = fast_renorm(value, error);
    Coupled { value, error }
}

impl<T: Lane> From<T> for Twofold<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self {
            value,
            error: zero(),
        }
    }
}

impl<T: Lane> From<T> for Coupled<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self {
            value,
            error: zero(),
        }
    }
}

impl<T: Lane> From<Coupled<T>> for Twofold<T> {
    #[inline]
    fn from(x: Coupled<T>) -> Self {
        Self {
            value: x.value,
            error: x.error,
        }
    }
}

impl<T: Lane> From<Twofold<T>> for Coupled<T> {
    #[inline]
    fn from(x: Twofold<T>) -> Self {
        Self::from_sum(x.value, x.error)
    }
}

macro_rules! impl_from_other_precision {
    ($dst: ty, $src: ty) => {
        impl From<Twofold<$src>> for Twofold<$dst> {
            #[inline]
            fn from(x: Twofold<$src>) -> Self {
                tbyt(x)
            }
        }

        impl From<Coupled<$src>> for Coupled<$dst> {
            #[inline]
            fn from(x: Coupled<$src>) -> Self {
                pbyp(x)
            }
        }

        impl From<Twofold<$src>> for Coupled<$dst> {
            #[inline]
            fn from(x: Twofold<$src>) -> Self {
                pbyt(x)
            }
        }

        impl From<Coupled<$src>> for Twofold<$dst> {
            #[inline]
            fn from(x: Coupled<$src>) -> Self {
                tbyp(x)
            }
        }
    };
}

impl_from_other_precision!(f32, f64);
impl_from_other_precision!(f64, f32);

macro_rules! impl_from_dotted {
    ($dst: ty; $($src: ty),*) => {$(
        impl From<$src> for Twofold<$dst> {
            #[inline]
            fn from(x: $src) -> Self {
                tbyd(x)
            }
        }

        impl From<$src> for Coupled<$dst> {
            #[inline]
            fn from(x: $src) -> Self {
                pbyd(x)
            }
        }
    )*};
}

impl_from_dotted!(f32; f64, i32, i64, u32, u64);
impl_from_dotted!(f64; f32, i32, i64, u32, u64);

macro_rules! impl_into_dotted {
    ($dst: ty; $($src: ty),*) => {$(
        impl From<Twofold<$src>> for $dst {
            #[inline]
            fn from(x: Twofold<$src>) -> Self {
                dbyt(x)
            }
        }

        impl From<Coupled<$src>> for $dst {
            #[inline]
            fn from(x: Coupled<$src>) -> Self {
                dbyp(x)
            }
        }
    )*};
}

impl_into_dotted!(f32; f32, f64);
impl_into_dotted!(f64; f32, f64);
