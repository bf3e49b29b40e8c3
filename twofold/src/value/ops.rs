use super::{Coupled, Twofold};
use crate::arith::coupled::{
    padd, padd1, padd2, pdiv, pdiv1, pdiv2, pmul, pmul1, pmul2, psub, psub1, psub2,
};
use crate::arith::twofold::{
    tadd, tadd1, tadd2, tdiv, tdiv1, tdiv2, tmul, tmul1, tmul2, tsub, tsub1, tsub2,
};
use crate::lane::Lane;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: Lane> Neg for Twofold<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            error: -self.error,
        }
    }
}

impl<T: Lane> Neg for Coupled<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            error: -self.error,
        }
    }
}

macro_rules! impl_op {
    (
        $trait: ident, $fn: ident,
        $assign_trait: ident, $assign_fn: ident,
        $t: ident, $t1: ident, $t2: ident,
        $p: ident, $p1: ident, $p2: ident
    ) => {
        impl<T: Lane> $trait for Twofold<T> {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: Self) -> Self {
                let (value, error) = $t(self.value, self.error, rhs.value, rhs.error);
                Self { value, error }
            }
        }

        impl<T: Lane> $trait<T> for Twofold<T> {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: T) -> Self {
                let (value, error) = $t1(self.value, self.error, rhs);
                Self { value, error }
            }
        }

        impl<T: Lane> $trait for Coupled<T> {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: Self) -> Self {
                let (value, error) = $p(self.value, self.error, rhs.value, rhs.error);
                Self { value, error }
            }
        }

        impl<T: Lane> $trait<T> for Coupled<T> {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: T) -> Self {
                let (value, error) = $p1(self.value, self.error, rhs);
                Self { value, error }
            }
        }

        // the error term of the twofold operand is dropped
        impl<T: Lane> $trait<Coupled<T>> for Twofold<T> {
            type Output = Coupled<T>;

            #[inline(always)]
            fn $fn(self, rhs: Coupled<T>) -> Coupled<T> {
                let (value, error) = $p2(self.value, rhs.value, rhs.error);
                Coupled { value, error }
            }
        }

        impl<T: Lane> $trait<Twofold<T>> for Coupled<T> {
            type Output = Coupled<T>;

            #[inline(always)]
            fn $fn(self, rhs: Twofold<T>) -> Coupled<T> {
                let (value, error) = $p1(self.value, self.error, rhs.value);
                Coupled { value, error }
            }
        }

        impl<T: Lane, R> $assign_trait<R> for Twofold<T>
        where
            Twofold<T>: $trait<R>,
            <Twofold<T> as $trait<R>>::Output: Into<Twofold<T>>,
        {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: R) {
                *self = (*self).$fn(rhs).into();
            }
        }

        impl<T: Lane, R> $assign_trait<R> for Coupled<T>
        where
            Coupled<T>: $trait<R>,
            <Coupled<T> as $trait<R>>::Output: Into<Coupled<T>>,
        {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: R) {
                *self = (*self).$fn(rhs).into();
            }
        }

        impl_op!(@lhs $trait, $fn, $t2, $p2, f32);
        impl_op!(@lhs $trait, $fn, $t2, $p2, f64);
        #[cfg(any(tfcp_simd = "avx", tfcp_simd = "sse"))]
        impl_op!(@lhs $trait, $fn, $t2, $p2, crate::Floatx);
        #[cfg(any(tfcp_simd = "avx", tfcp_simd = "sse"))]
        impl_op!(@lhs $trait, $fn, $t2, $p2, crate::Doublex);
    };
    (@lhs $trait: ident, $fn: ident, $t2: ident, $p2: ident, $ty: ty) => {
        impl $trait<Twofold<$ty>> for $ty {
            type Output = Twofold<$ty>;

            #[inline(always)]
            fn $fn(self, rhs: Twofold<$ty>) -> Twofold<$ty> {
                let (value, error) = $t2(self, rhs.value, rhs.error);
                Twofold { value, error }
            }
        }

        impl $trait<Coupled<$ty>> for $ty {
            type Output = Coupled<$ty>;

            #[inline(always)]
            fn $fn(self, rhs: Coupled<$ty>) -> Coupled<$ty> {
                let (value, error) = $p2(self, rhs.value, rhs.error);
                Coupled { value, error }
            }
        }
    };
}

impl_op!(Add, add, AddAssign, add_assign, tadd, tadd1, tadd2, padd, padd1, padd2);
impl_op!(Sub, sub, SubAssign, sub_assign, tsub, tsub1, tsub2, psub, psub1, psub2);
impl_op!(Mul, mul, MulAssign, mul_assign, tmul, tmul1, tmul2, pmul, pmul1, pmul2);
impl_op!(Div, div, DivAssign, div_assign, tdiv, tdiv1, tdiv2, pdiv, pdiv1, pdiv2);

/// Operators between operands of different precisions.
///
/// `$x` and `$y` are bound to the operands, which are then converted to `$l` and `$r`; the result
/// of `$l op $r` is converted into `$out`.
macro_rules! impl_mixed {
    ($lhs: ty, $rhs: ty => $out: ty, |$x: ident, $y: ident| ($l: expr, $r: expr)) => {
        impl_mixed!(@op Add, add, +, $lhs, $rhs, $out, $x, $y, $l, $r);
        impl_mixed!(@op Sub, sub, -, $lhs, $rhs, $out, $x, $y, $l, $r);
        impl_mixed!(@op Mul, mul, *, $lhs, $rhs, $out, $x, $y, $l, $r);
        impl_mixed!(@op Div, div, /, $lhs, $rhs, $out, $x, $y, $l, $r);
    };
    (
        @op $trait: ident, $fn: ident, $op: tt,
        $lhs: ty, $rhs: ty, $out: ty,
        $x: ident, $y: ident, $l: expr, $r: expr
    ) => {
        impl $trait<$rhs> for $lhs {
            type Output = $out;

            #[inline(always)]
            fn $fn(self, rhs: $rhs) -> $out {
                let ($x, $y) = (self, rhs);
                <$out>::from($l $op $r)
            }
        }
    };
}

impl_mixed!(Twofold<f32>, Twofold<f64> => Twofold<f64>, |x, y| (Twofold::<f64>::from(x), y));
impl_mixed!(Twofold<f64>, Twofold<f32> => Twofold<f64>, |x, y| (x, Twofold::<f64>::from(y)));
impl_mixed!(f32, Twofold<f64> => Twofold<f64>, |x, y| (f64::from(x), y));
impl_mixed!(Twofold<f64>, f32 => Twofold<f64>, |x, y| (x, f64::from(y)));
impl_mixed!(f64, Twofold<f32> => Twofold<f64>, |x, y| (x, Twofold::<f64>::from(y)));
impl_mixed!(Twofold<f32>, f64 => Twofold<f64>, |x, y| (Twofold::<f64>::from(x), y));

// A coupled f32 collapses exactly into a single f64.
impl_mixed!(Coupled<f32>, Coupled<f64> => Coupled<f64>, |x, y| (f64::from(x), y));
impl_mixed!(Coupled<f64>, Coupled<f32> => Coupled<f64>, |x, y| (x, f64::from(y)));
impl_mixed!(f32, Coupled<f64> => Coupled<f64>, |x, y| (f64::from(x), y));
impl_mixed!(Coupled<f64>, f32 => Coupled<f64>, |x, y| (x, f64::from(y)));
impl_mixed!(Coupled<f32>, f64 => f64, |x, y| (f64::from(x), y));
impl_mixed!(f64, Coupled<f32> => Coupled<f64>, |x, y| (x, f64::from(y)));

impl_mixed!(Coupled<f32>, Twofold<f64> => Twofold<f64>, |x, y| (f64::from(x), y));
impl_mixed!(Twofold<f32>, Coupled<f64> => Coupled<f64>, |x, y| (f64::from(x), y));
impl_mixed!(Twofold<f64>, Coupled<f32> => Twofold<f64>, |x, y| (x, f64::from(y)));
impl_mixed!(Coupled<f64>, Twofold<f32> => Coupled<f64>, |x, y| (x, f64::from(y)));
