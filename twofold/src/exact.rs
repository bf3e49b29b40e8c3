//! Error-free transformations.
//!
//! Each function returns a pair `(r0, r1)` with $r_0 = \operatorname{fl}(x \circ y)$ and
//! $r_0 + r_1 = x \circ y$ exactly, for every finite input that does not overflow. NaN and
//! infinities propagate without special handling.

use crate::lane::{Lane, Real};

/// Computes $\operatorname{fl}(x+y)$ and $\operatorname{err}(x+y)$.
/// Assumes $|x| \geq |y|$.
#[inline(always)]
pub fn fast_padd0<L: Lane>(x: L, y: L) -> (L, L) {
    let r0 = x + y;
    let yt = r0 - x;
    (r0, y - yt)
}

/// Computes $\operatorname{fl}(x-y)$ and $\operatorname{err}(x-y)$.
/// Assumes $|x| \geq |y|$.
#[inline(always)]
pub fn fast_psub0<L: Lane>(x: L, y: L) -> (L, L) {
    let r0 = x - y;
    let yt = x - r0;
    (r0, yt - y)
}

/// Computes $\operatorname{fl}(x+y)$ and $\operatorname{err}(x+y)$.
#[inline(always)]
pub fn padd0<L: Lane>(x: L, y: L) -> (L, L) {
    let r0 = x + y;
    let yt = r0 - x;
    let xt = r0 - yt;
    let ey = y - yt;
    let ex = x - xt;
    (r0, ex + ey)
}

/// Computes $\operatorname{fl}(x-y)$ and $\operatorname{err}(x-y)$.
#[inline(always)]
pub fn psub0<L: Lane>(x: L, y: L) -> (L, L) {
    let r0 = x - y;
    let yt = r0 - x;
    let xt = r0 - yt;
    let ey = y + yt;
    let ex = x - xt;
    (r0, ex - ey)
}

/// Splits `x` into `h + l` where both halves fit in half the mantissa.
#[inline(always)]
pub fn psplit0<L: Lane>(x: L) -> (L, L) {
    let c = L::splat(<L::Scalar as Real>::SPLITTER) * x;
    let h = c - (c - x);
    (h, x - h)
}

/// Computes $\operatorname{fl}(xy)$ and $\operatorname{err}(xy)$ without a fused multiply-add.
#[inline(always)]
pub fn nofma_pmul0<L: Lane>(x: L, y: L) -> (L, L) {
    let r0 = x * y;
    let (x0, x1) = psplit0(x);
    let (y0, y1) = psplit0(y);
    let e0 = r0 - x0 * y0;
    let e1 = e0 - x0 * y1;
    let e2 = e1 - x1 * y0;
    (r0, x1 * y1 - e2)
}

/// Computes $\operatorname{fl}(xy)$ and $\operatorname{err}(xy)$.
#[cfg(tfcp_fma)]
#[inline(always)]
pub fn pmul0<L: Lane>(x: L, y: L) -> (L, L) {
    let r0 = x * y;
    (r0, x.fmsub(y, r0))
}

/// Computes $\operatorname{fl}(xy)$ and $\operatorname{err}(xy)$.
#[cfg(not(tfcp_fma))]
#[inline(always)]
pub fn pmul0<L: Lane>(x: L, y: L) -> (L, L) {
    nofma_pmul0(x, y)
}

/// Computes $z - xy$, used for the residuals of division and square root.
///
/// With a hardware FMA the result is rounded once. Otherwise the exact product is subtracted limb
/// by limb, which is exact whenever $z - xy$ is representable.
#[inline(always)]
pub fn fnmadd<L: Lane>(x: L, y: L, z: L) -> L {
    #[cfg(tfcp_fma)]
    {
        -x.fmsub(y, z)
    }
    #[cfg(not(tfcp_fma))]
    {
        let (p, e) = nofma_pmul0(x, y);
        (z - p) - e
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Doublex, Floatx};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    pub(crate) const ITERATIONS: usize = 1000;

    /// Samples a lane with every scalar uniform in `[lo, hi)`.
    pub(crate) fn uniform<L: Lane>(rng: &mut StdRng, lo: f64, hi: f64) -> L {
        L::from_fn(|_| <L::Scalar as Real>::from_f64(rng.gen_range(lo..hi)))
    }

    fn ref_padd0<T: Real>(x: T, y: T) -> (T, T) {
        if x.abs() >= y.abs() {
            fast_padd0(x, y)
        } else {
            fast_padd0(y, x)
        }
    }

    fn ref_psub0<T: Real>(x: T, y: T) -> (T, T) {
        if x.abs() >= y.abs() {
            fast_psub0(x, y)
        } else {
            let (r0, r1) = fast_psub0(y, x);
            (-r0, -r1)
        }
    }

    /// Checks each lane of `f` against `reference` applied to the scalars of that lane.
    fn check_lanes<L: Lane>(
        seed: u64,
        f: impl Fn(L, L) -> (L, L),
        reference: impl Fn(L::Scalar, L::Scalar) -> (L::Scalar, L::Scalar),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..ITERATIONS {
            let x: L = uniform(&mut rng, -10.0, 10.0);
            let y: L = uniform(&mut rng, -10.0, 10.0);
            let (r0, r1) = f(x, y);
            for i in 0..L::LANES {
                let (s0, s1) = reference(x.extract(i), y.extract(i));
                assert_eq!((r0.extract(i), r1.extract(i)), (s0, s1));
            }
        }
    }

    fn check_all_exact<L: Lane>(seed: u64) {
        check_lanes::<L>(seed, padd0, ref_padd0);
        check_lanes::<L>(seed + 1, psub0, ref_psub0);
        check_lanes::<L>(seed + 2, pmul0, nofma_pmul0);
    }

    #[test]
    fn test_exact_float() {
        check_all_exact::<f32>(0);
    }

    #[test]
    fn test_exact_double() {
        check_all_exact::<f64>(10);
    }

    #[test]
    fn test_exact_floatx() {
        check_all_exact::<Floatx>(20);
    }

    #[test]
    fn test_exact_doublex() {
        check_all_exact::<Doublex>(30);
    }

    #[test]
    fn test_pmul0_exact_product() {
        assert_eq!(pmul0(2.0f64, 3.0), (6.0, 0.0));
        assert_eq!(pmul0(2.0f32, 3.0), (6.0, 0.0));
        assert_eq!(nofma_pmul0(2.0f64, 3.0), (6.0, 0.0));
    }

    #[test]
    fn test_pmul0_recovers_residual() {
        let x = 1.0 + f64::EPSILON;
        let (r0, r1) = pmul0(x, x);
        assert_eq!(r0, 1.0 + 2.0 * f64::EPSILON);
        assert_eq!(r1, f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn test_psplit0() {
        let x = 1e16f64 + 1.0;
        let (h, l) = psplit0(x);
        assert_eq!(h + l, x);
        assert_eq!(h.to_bits() & ((1 << 27) - 1), 0);

        let (h, l) = psplit0(core::f32::consts::PI);
        assert_eq!(h + l, core::f32::consts::PI);
    }

    #[test]
    fn test_fast_variants_match_general_when_ordered() {
        let mut rng = StdRng::seed_from_u64(40);
        for _ in 0..ITERATIONS {
            let x: f64 = rng.gen_range(-10.0..10.0);
            let y: f64 = rng.gen_range(-1.0..1.0) * x;
            assert_eq!(fast_padd0(x, y), padd0(x, y));
            assert_eq!(fast_psub0(x, y), psub0(x, y));
        }
    }

    #[test]
    fn test_fnmadd() {
        let mut rng = StdRng::seed_from_u64(50);
        for _ in 0..ITERATIONS {
            let y: f64 = rng.gen_range(0.5..2.0);
            let x: f64 = rng.gen_range(0.5..2.0);
            let q = x / y;
            // the division residual is exactly representable
            let r = fnmadd(q, y, x);
            let (p, e) = nofma_pmul0(q, y);
            assert_eq!(r, (x - p) - e);
        }
    }

    /// The fused residual of a rounded product must be the exact one of the split product, and
    /// packed lanes must round as their scalars do.
    #[cfg(tfcp_fma)]
    fn check_fmsub<L: Lane>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..ITERATIONS {
            let x: L = uniform(&mut rng, -10.0, 10.0);
            let y: L = uniform(&mut rng, -10.0, 10.0);
            let z: L = uniform(&mut rng, -10.0, 10.0);

            let (_, e) = nofma_pmul0(x, y);
            assert_eq!(x.fmsub(y, x * y), e);

            let r = x.fmsub(y, z);
            for i in 0..L::LANES {
                let (xi, yi, zi) = (x.extract(i), y.extract(i), z.extract(i));
                assert_eq!(r.extract(i), xi.fmsub(yi, zi));
            }
        }
    }

    #[cfg(tfcp_fma)]
    #[test]
    fn test_fmsub_correctly_rounded() {
        check_fmsub::<f32>(60);
        check_fmsub::<f64>(61);
        check_fmsub::<Floatx>(62);
        check_fmsub::<Doublex>(63);
    }

    #[cfg(tfcp_fma)]
    #[test]
    fn test_fmsub_single_rounding() {
        // the product of two f32 is exact in f64, and so is its difference with a close z
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..ITERATIONS {
            let x: f32 = rng.gen_range(1.0..2.0);
            let y: f32 = rng.gen_range(1.0..2.0);
            let z: f32 = x * y + rng.gen_range(-1.0..1.0) * f32::EPSILON;
            let exact = f64::from(x) * f64::from(y) - f64::from(z);
            assert_eq!(x.fmsub(y, z), exact as f32);
        }
    }
}
