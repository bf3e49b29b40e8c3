//! Renormalization of two-limb pairs.
//!
//! Both functions return `(r0, r1)` with $r_0 = \operatorname{fl}(x_0 + x_1)$ and $r_1$ the exact
//! residual, i.e. the canonical double-word form of $x_0 + x_1$.

use crate::exact::{fast_padd0, padd0};
use crate::lane::Lane;

/// Renormalizes an arbitrary pair, without any assumption on the magnitudes of the limbs.
#[inline(always)]
pub fn renormalize<L: Lane>(x0: L, x1: L) -> (L, L) {
    padd0(x0, x1)
}

/// Renormalizes a pair whose leading limb dominates.
/// Assumes $|x_0| \geq |x_1|$.
#[inline(always)]
pub fn fast_renorm<L: Lane>(x0: L, x1: L) -> (L, L) {
    fast_padd0(x0, x1)
}
