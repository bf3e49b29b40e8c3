//! Arithmetic on renormalized (coupled) operands.
//!
//! Every function is the corresponding two-limb operation followed by [`fast_renorm`], so both
//! inputs and outputs satisfy $z_0 = \operatorname{fl}(z_0 + z_1)$. Operands are named as in
//! [`crate::arith::twofold`].

use super::twofold::{
    tadd, tadd1, tadd2, tdiv1, tdiv2, tdivp, tmul1, tmul2, tmulp, tsqrt0, tsqrtp, tsub, tsub1,
    tsub2,
};
use crate::lane::Lane;
use crate::renorm::fast_renorm;

pub use crate::exact::{padd0, pmul0, psub0};

#[inline(always)]
pub fn padd<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tadd(x0, x1, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn padd1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (z0, z1) = tadd1(x0, x1, y0);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn padd2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tadd2(x0, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn psub<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tsub(x0, x1, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn psub1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (z0, z1) = tsub1(x0, x1, y0);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn psub2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tsub2(x0, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn pmul<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tmulp(x0, x1, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn pmul1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (z0, z1) = tmul1(x0, x1, y0);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn pmul2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tmul2(x0, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn pdiv<L: Lane>(x0: L, x1: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tdivp(x0, x1, y0, y1);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn pdiv1<L: Lane>(x0: L, x1: L, y0: L) -> (L, L) {
    let (z0, z1) = tdiv1(x0, x1, y0);
    fast_renorm(z0, z1)
}

#[inline(always)]
pub fn pdiv2<L: Lane>(x0: L, y0: L, y1: L) -> (L, L) {
    let (z0, z1) = tdiv2(x0, y0, y1);
    fast_renorm(z0, z1)
}

/// Divides two plain lanes. The quotient refinement is already renormalized.
#[inline(always)]
pub fn pdiv0<L: Lane>(x0: L, y0: L) -> (L, L) {
    super::twofold::tdiv0(x0, y0)
}

/// Square root of a renormalized operand, with `x0 > 0` finite. See [`Coupled::sqrt`] for zero and
/// infinite values.
///
/// [`Coupled::sqrt`]: crate::Coupled::sqrt
#[inline(always)]
pub fn psqrt<L: Lane>(x0: L, x1: L) -> (L, L) {
    let (z0, z1) = tsqrtp(x0, x1);
    fast_renorm(z0, z1)
}

/// Square root of a plain lane, with `x0 > 0` finite. The Newton correction is already
/// renormalized.
#[inline(always)]
pub fn psqrt0<L: Lane>(x0: L) -> (L, L) {
    tsqrt0(x0)
}
