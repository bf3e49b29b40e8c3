//! Arithmetic on unevaluated two-limb operands.
//!
//! An operand `(x0, x1)` stands for $x_0 + x_1$, with no relation required between the limbs.
//! Functions are suffixed by the shape of their operands: no suffix when both are two-limb, `1`
//! when only `x` is, `2` when only `y` is, and `0` when both are plain lanes. The `p` variants
//! require both operands to be renormalized.
//!
//! Addition, subtraction and multiplication (except `tmulp`) are computed from exact transforms of
//! the leading limbs. Division and square root perform a single refinement step.
//!
//! The square roots expect a positive finite leading limb: the refinement step divides by twice the
//! root, so a zero or infinite `x0` yields a `NaN` second limb. [`Twofold::sqrt`] handles those
//! lanes.
//!
//! [`Twofold::sqrt`]: crate::Twofold::sqrt

use crate::exact::{fnmadd, padd0, pmul0, psub0};
use crate::lane::Lane;

#[inline(always)]
pub fn tadd<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = padd0(x0, y0);
    (r0, r1 + (x1 + y1))
}

#[inline(always)]
pub fn tadd1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (r0, r1) = padd0(x0, y0);
    (r0, r1 + x1)
}

#[inline(always)]
pub fn tadd2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = padd0(x0, y0);
    (r0, r1 + y1)
}

#[inline(always)]
pub fn tadd0<L: Lane>(x0: L, y0: L) -> (L, L) {
    padd0(x0, y0)
}

#[inline(always)]
pub fn tsub<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = psub0(x0, y0);
    (r0, r1 + (x1 - y1))
}

#[inline(always)]
pub fn tsub1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (r0, r1) = psub0(x0, y0);
    (r0, r1 + x1)
}

#[inline(always)]
pub fn tsub2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = psub0(x0, y0);
    (r0, r1 - y1)
}

#[inline(always)]
pub fn tsub0<L: Lane>(x0: L, y0: L) -> (L, L) {
    psub0(x0, y0)
}

#[inline(always)]
pub fn tmul<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = pmul0(x0, y0);
    let p01 = x0 * y1;
    let p10 = x1 * y0;
    let p11 = x1 * y1;
    (r0, r1 + p11 + (p01 + p10))
}

#[inline(always)]
pub fn tmul1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (r0, r1) = pmul0(x0, y0);
    (r0, r1 + x1 * y0)
}

#[inline(always)]
pub fn tmul2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = pmul0(x0, y0);
    (r0, r1 + x0 * y1)
}

#[inline(always)]
pub fn tmul0<L: Lane>(x0: L, y0: L) -> (L, L) {
    pmul0(x0, y0)
}

/// Multiplies renormalized operands, dropping the $x_1 y_1$ term.
#[inline(always)]
pub fn tmulp<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (r0, r1) = pmul0(x0, y0);
    let p01 = x0 * y1;
    let p10 = x1 * y0;
    (r0, r1 + (p01 + p10))
}

#[inline(always)]
pub fn tdiv<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let q0 = x0 / y0;
    let r0 = fnmadd(q0, y0, x0);
    let r1 = fnmadd(q0, y1, x1);
    (q0, (r0 + r1) / (y0 + y1))
}

#[inline(always)]
pub fn tdiv1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let q0 = x0 / y0;
    let r0 = fnmadd(q0, y0, x0);
    (q0, (r0 + x1) / y0)
}

#[inline(always)]
pub fn tdiv2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let q0 = x0 / y0;
    let r0 = fnmadd(q0, y0, x0);
    let r1 = -(q0 * y1);
    (q0, (r0 + r1) / (y0 + y1))
}

#[inline(always)]
pub fn tdiv0<L: Lane>(x0: L, y0: L) -> (L, L) {
    let q0 = x0 / y0;
    let r0 = fnmadd(q0, y0, x0);
    (q0, r0 / y0)
}

/// Divides renormalized operands.
#[inline(always)]
pub fn tdivp<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let q0 = x0 / y0;
    let r0 = fnmadd(q0, y0, x0);
    let r1 = fnmadd(q0, y1, x1);
    (q0, (r0 + r1) / y0)
}

/// Square root of a plain lane, with `x0 > 0` finite.
#[inline(always)]
pub fn tsqrt0<L: Lane>(x0: L) -> (L, L) {
    let r0 = x0.sqrt();
    (r0, fnmadd(r0, r0, x0) / (r0 + r0))
}

/// Square root of a renormalized operand, with `x0 > 0` finite.
#[inline(always)]
pub fn tsqrtp<L: Lane>(x0: L, x1: L) -> (L, L) {
    let r0 = x0.sqrt();
    let r1 = fnmadd(r0, r0, x0) + x1;
    (r0, r1 / (r0 + r0))
}

/// The leading limb is the plain root of `x0`; the sum `x0 + x1` must be positive and finite.
#[inline(always)]
pub fn tsqrt<L: Lane>(x0: L, x1: L) -> (L, L) {
    let r0 = x0.sqrt();
    let (u0, u1) = padd0(x0, x1);
    let (v0, v1) = tsqrtp(u0, u1);
    let (w0, w1) = tsub1(v0, v1, r0);
    (r0, w0 + w1)
}
