//! Comparisons.
//!
//! Coupled values compare through the sign of their difference, so `NaN` operands are unordered
//! and compare unequal to everything. Twofold values may not determine their order at all; see
//! [`TryCompare`].

use super::{Coupled, Shaped, Twofold};
use crate::lane::Real;
use core::cmp::Ordering;
use core::fmt;

#[inline]
fn sign_of<X: Shaped>(difference: X) -> Option<Ordering> {
    difference
        .value_of()
        .partial_cmp(&<X::Limb as Real>::ZERO)
}

macro_rules! impl_coupled_cmp {
    (@ $($gen: ident: $bound: ident),*; $lhs: ty, $rhs: ty) => {
        impl<$($gen: $bound),*> PartialEq<$rhs> for $lhs {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                sign_of(*self - *other) == Some(Ordering::Equal)
            }
        }

        impl<$($gen: $bound),*> PartialOrd<$rhs> for $lhs {
            #[inline]
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                sign_of(*self - *other)
            }
        }
    };
    ($lhs: ty, $rhs: ty) => {
        impl_coupled_cmp!(@; $lhs, $rhs);
    };
}

impl_coupled_cmp!(@ T: Real; Coupled<T>, Coupled<T>);
impl_coupled_cmp!(@ T: Real; Coupled<T>, T);
impl_coupled_cmp!(f32, Coupled<f32>);
impl_coupled_cmp!(f64, Coupled<f64>);
impl_coupled_cmp!(Coupled<f32>, Coupled<f64>);
impl_coupled_cmp!(Coupled<f64>, Coupled<f32>);
impl_coupled_cmp!(Coupled<f32>, f64);
impl_coupled_cmp!(Coupled<f64>, f32);
impl_coupled_cmp!(f32, Coupled<f64>);
impl_coupled_cmp!(f64, Coupled<f32>);

/// A binary comparison operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    #[inline]
    pub fn test<A: PartialOrd<B>, B>(self, a: &A, b: &B) -> bool {
        match self {
            Comparison::Eq => a == b,
            Comparison::Ne => a != b,
            Comparison::Lt => a < b,
            Comparison::Le => a <= b,
            Comparison::Gt => a > b,
            Comparison::Ge => a >= b,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when the order of twofold operands is not determined by their limbs.
///
/// The leading limbs satisfy the comparison but the renormalized values do not. Callers usually
/// fall back to comparing the operands as [`Coupled`] values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AmbiguousComparison {
    pub op: Comparison,
}

impl fmt::Display for AmbiguousComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ambiguous twofold comparison: `{}` holds for the leading limbs but not for the \
             renormalized values",
            self.op
        )
    }
}

impl std::error::Error for AmbiguousComparison {}

/// Comparison that refuses to guess when the operands overlap within their error terms.
///
/// The leading limbs are compared first and a `false` outcome is returned as is. Otherwise the
/// operands are renormalized and compared again: if that agrees the result is `true`, if not the
/// comparison fails with [`AmbiguousComparison`].
///
/// An operand with a `NaN` in either limb is unordered: only `Ne` holds and the comparison never
/// fails.
pub trait TryCompare<Rhs = Self> {
    fn try_compare(&self, other: &Rhs, op: Comparison) -> Result<bool, AmbiguousComparison>;

    fn try_eq(&self, other: &Rhs) -> Result<bool, AmbiguousComparison> {
        self.try_compare(other, Comparison::Eq)
    }

    fn try_ne(&self, other: &Rhs) -> Result<bool, AmbiguousComparison> {
        self.try_compare(other, Comparison::Ne)
    }

    fn try_lt(&self, other: &Rhs) -> Result<bool, AmbiguousComparison> {
        self.try_compare(other, Comparison::Lt)
    }

    fn try_le(&self, other: &Rhs) -> Result<bool, AmbiguousComparison> {
        self.try_compare(other, Comparison::Le)
    }

    fn try_gt(&self, other: &Rhs) -> Result<bool, AmbiguousComparison> {
        self.try_compare(other, Comparison::Gt)
    }

    fn try_ge(&self, other: &Rhs) -> Result<bool, AmbiguousComparison> {
        self.try_compare(other, Comparison::Ge)
    }
}

fn decide<X: fmt::Debug, Y: fmt::Debug>(
    x: &X,
    y: &Y,
    op: Comparison,
    unordered: bool,
    leading: bool,
    renormalized: impl FnOnce() -> bool,
) -> Result<bool, AmbiguousComparison> {
    if unordered {
        return Ok(op == Comparison::Ne);
    }
    if !leading {
        return Ok(false);
    }
    if renormalized() {
        Ok(true)
    } else {
        log::debug!("ambiguous comparison {x:?} {op} {y:?}");
        Err(AmbiguousComparison { op })
    }
}

impl<T: Real, S: Real> TryCompare<Twofold<S>> for Twofold<T>
where
    Coupled<T>: PartialOrd<Coupled<S>>,
{
    fn try_compare(&self, other: &Twofold<S>, op: Comparison) -> Result<bool, AmbiguousComparison> {
        let leading = op.test(&self.value.to_f64(), &other.value.to_f64());
        let unordered = self.is_nan() || other.is_nan();
        decide(self, other, op, unordered, leading, || {
            op.test(&Coupled::<T>::from(*self), &Coupled::<S>::from(*other))
        })
    }
}

impl<T: Real> TryCompare<Coupled<T>> for Twofold<T> {
    fn try_compare(&self, other: &Coupled<T>, op: Comparison) -> Result<bool, AmbiguousComparison> {
        let leading = op.test(&self.value, &other.value);
        let unordered = self.is_nan() || other.is_nan();
        decide(self, other, op, unordered, leading, || {
            op.test(&Coupled::<T>::from(*self), other)
        })
    }
}

impl<T: Real> TryCompare<Twofold<T>> for Coupled<T> {
    fn try_compare(&self, other: &Twofold<T>, op: Comparison) -> Result<bool, AmbiguousComparison> {
        let leading = op.test(&self.value, &other.value);
        let unordered = self.is_nan() || other.is_nan();
        decide(self, other, op, unordered, leading, || {
            op.test(self, &Coupled::<T>::from(*other))
        })
    }
}

macro_rules! impl_try_compare_dotted {
    ($($ty: ty),*) => {$(
        impl<T: Real> TryCompare<$ty> for Twofold<T>
        where
            Twofold<T>: TryCompare<Twofold<$ty>>,
        {
            fn try_compare(&self, other: &$ty, op: Comparison) -> Result<bool, AmbiguousComparison> {
                self.try_compare(&Twofold::<$ty>::from(*other), op)
            }
        }

        impl<S: Real> TryCompare<Twofold<S>> for $ty
        where
            Twofold<$ty>: TryCompare<Twofold<S>>,
        {
            fn try_compare(&self, other: &Twofold<S>, op: Comparison) -> Result<bool, AmbiguousComparison> {
                Twofold::<$ty>::from(*self).try_compare(other, op)
            }
        }
    )*};
}

impl_try_compare_dotted!(f32, f64);

// Across precisions the twofold operand is widened before it is compared with the coupled one.
macro_rules! impl_try_compare_widened {
    ($lhs: ty, $rhs: ty, |$x: ident, $y: ident| ($l: expr, $r: expr)) => {
        impl TryCompare<$rhs> for $lhs {
            fn try_compare(&self, other: &$rhs, op: Comparison) -> Result<bool, AmbiguousComparison> {
                let ($x, $y) = (*self, *other);
                $l.try_compare(&$r, op)
            }
        }
    };
}

impl_try_compare_widened!(Twofold<f32>, Coupled<f64>, |x, y| (Twofold::<f64>::from(x), y));
impl_try_compare_widened!(Twofold<f64>, Coupled<f32>, |x, y| (x, Coupled::<f64>::from(y)));
impl_try_compare_widened!(Coupled<f32>, Twofold<f64>, |x, y| (Coupled::<f64>::from(x), y));
impl_try_compare_widened!(Coupled<f64>, Twofold<f32>, |x, y| (x, Twofold::<f64>::from(y)));
