//! Double-word value types.
//!
//! [`Twofold`] keeps the unevaluated sum of its two limbs and is mostly useful to track the
//! rounding error of a computation carried out in plain precision. [`Coupled`] is kept
//! renormalized after every operation and behaves as a number with twice the mantissa.
//!
//! Both are generic over any [`Lane`]; conversions, comparisons and formatting are defined for the
//! scalar precisions `f32` and `f64`.

use crate::arith::{coupled, twofold};
use crate::lane::{Doublex, Floatx, Lane, Real};
use crate::renorm::renormalize;
use core::fmt;

mod compare;
mod convert;
mod ops;

pub use compare::{AmbiguousComparison, Comparison, TryCompare};
pub use convert::{dbyd, dbyp, dbyt, pbyd, pbyp, pbyt, tbyd, tbyp, tbyt, Dotted};

/// Unevaluated sum `value + error`.
///
/// No relation between the limbs is assumed. Mixing a `Twofold` with a [`Coupled`] operand
/// discards the error term of the `Twofold` and yields a `Coupled`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Twofold<T> {
    pub value: T,
    pub error: T,
}

/// Renormalized sum `value + error`, where `error` is the rounding error of `value`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Coupled<T> {
    pub value: T,
    pub error: T,
}

#[inline(always)]
fn zero<T: Lane>() -> T {
    T::splat(<T::Scalar as Real>::ZERO)
}

/// Replaces the lanes of a square root `(r0, r1)` where `x` is zero or infinite, which the Newton
/// step turns into `NaN`. `fix` receives the scalars of `x` and `r0` in such a lane.
#[inline]
fn fix_sqrt_lanes<T: Lane>(
    x: T,
    (r0, r1): (T, T),
    fix: impl Fn(T::Scalar, T::Scalar) -> (T::Scalar, T::Scalar),
) -> (T, T) {
    let singular = |x: T::Scalar| x == <T::Scalar as Real>::ZERO || x.is_infinite();
    if !(0..T::LANES).any(|i| singular(x.extract(i))) {
        return (r0, r1);
    }
    let lane = |i: usize| {
        let xi = x.extract(i);
        if singular(xi) {
            fix(xi, r0.extract(i))
        } else {
            (r0.extract(i), r1.extract(i))
        }
    };
    (T::from_fn(|i| lane(i).0), T::from_fn(|i| lane(i).1))
}

impl<T: Lane> Twofold<T> {
    #[inline]
    pub fn new(value: T, error: T) -> Self {
        Self { value, error }
    }

    #[inline]
    pub fn limbs(self) -> (T, T) {
        (self.value, self.error)
    }

    /// The leading limb is the plain square root of `value`.
    ///
    /// A zero or infinite `value + error` gives a zero or infinite result, never `NaN`.
    #[inline]
    pub fn sqrt(self) -> Self {
        let r = twofold::tsqrt(self.value, self.error);
        let (sum, _) = renormalize(self.value, self.error);
        let (value, error) = fix_sqrt_lanes(sum, r, |sum, r0| {
            if r0.is_infinite() {
                (r0, <T::Scalar as Real>::ZERO)
            } else {
                (r0, sum.sqrt() - r0)
            }
        });
        Self { value, error }
    }
}

impl<T: Lane> Coupled<T> {
    /// Builds a value from limbs that are already renormalized.
    #[inline]
    pub fn new(value: T, error: T) -> Self {
        Self { value, error }
    }

    /// Builds the renormalized form of `x0 + x1`, whatever the magnitudes of the limbs.
    #[inline]
    pub fn from_sum(x0: T, x1: T) -> Self {
        let (value, error) = renormalize(x0, x1);
        Self { value, error }
    }

    #[inline]
    pub fn limbs(self) -> (T, T) {
        (self.value, self.error)
    }

    /// Square root, with `sqrt(±0) = (±0, 0)` and `sqrt(inf) = (inf, 0)`.
    #[inline]
    pub fn sqrt(self) -> Self {
        let r = coupled::psqrt(self.value, self.error);
        let (value, error) = fix_sqrt_lanes(self.value, r, |x, _| {
            (x.sqrt(), <T::Scalar as Real>::ZERO)
        });
        Self { value, error }
    }
}

macro_rules! impl_real_methods {
    ($ty: ident) => {
        impl<T: Real> $ty<T> {
            #[inline]
            pub fn abs(self) -> Self {
                if self.value < T::ZERO {
                    -self
                } else {
                    self
                }
            }

            #[inline]
            pub fn is_nan(self) -> bool {
                self.value.is_nan() || self.error.is_nan()
            }

            #[inline]
            pub fn is_infinite(self) -> bool {
                self.value.is_infinite() || self.error.is_infinite()
            }
        }

        impl<T: Real> fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.value, f)?;
                f.write_str("[")?;
                fmt::Display::fmt(&self.error, f)?;
                f.write_str("]")
            }
        }

        impl<T: Real> fmt::LowerExp for $ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerExp::fmt(&self.value, f)?;
                f.write_str("[")?;
                fmt::LowerExp::fmt(&self.error, f)?;
                f.write_str("]")
            }
        }

        impl<T: Real> Shaped for $ty<T> {
            type Limb = T;

            #[inline]
            fn value_of(self) -> T {
                self.value
            }

            #[inline]
            fn error_of(self) -> T {
                self.error
            }
        }
    };
}

impl_real_methods!(Twofold);
impl_real_methods!(Coupled);

/// Uniform access to the limbs of plain and double-word scalars.
pub trait Shaped: Copy {
    type Limb: Real;

    fn value_of(self) -> Self::Limb;

    /// Zero for plain scalars.
    fn error_of(self) -> Self::Limb;
}

impl Shaped for f32 {
    type Limb = f32;

    #[inline]
    fn value_of(self) -> f32 {
        self
    }

    #[inline]
    fn error_of(self) -> f32 {
        0.0
    }
}

impl Shaped for f64 {
    type Limb = f64;

    #[inline]
    fn value_of(self) -> f64 {
        self
    }

    #[inline]
    fn error_of(self) -> f64 {
        0.0
    }
}

#[inline]
pub fn value_of<X: Shaped>(x: X) -> X::Limb {
    x.value_of()
}

#[inline]
pub fn error_of<X: Shaped>(x: X) -> X::Limb {
    x.error_of()
}

pub type PFloat = Coupled<f32>;
pub type PDouble = Coupled<f64>;
pub type PFloatx = Coupled<Floatx>;
pub type PDoublex = Coupled<Doublex>;

/// `f32` that tracks its rounding error in debug builds.
#[cfg(debug_assertions)]
pub type TFloat = Twofold<f32>;
/// `f32` that tracks its rounding error in debug builds.
#[cfg(not(debug_assertions))]
pub type TFloat = f32;

/// `f64` that tracks its rounding error in debug builds.
#[cfg(debug_assertions)]
pub type TDouble = Twofold<f64>;
/// `f64` that tracks its rounding error in debug builds.
#[cfg(not(debug_assertions))]
pub type TDouble = f64;

#[cfg(debug_assertions)]
pub type TFloatx = Twofold<Floatx>;
#[cfg(not(debug_assertions))]
pub type TFloatx = Floatx;

#[cfg(debug_assertions)]
pub type TDoublex = Twofold<Doublex>;
#[cfg(not(debug_assertions))]
pub type TDoublex = Doublex;
