use more_asserts::{assert_gt, assert_le};
use rand::{rngs::StdRng, Rng, SeedableRng};
use twofold::arith::coupled::{padd, pmul};
use twofold::{
    as_lanes, as_lanes_mut, error_of, value_of, AmbiguousComparison, Comparison, Coupled,
    Doublex, Lane, PDouble, PFloat, TDouble, TryCompare, Twofold,
};

/// Sum of `values` with the correction terms of every partial sum.
fn coupled_sum(values: &[f64]) -> PDouble {
    let mut acc = PDouble::default();
    for &v in values {
        acc += v;
    }
    acc
}

#[test]
fn test_ill_conditioned_sum() {
    // 1e16 + 1 - 1e16 loses the 1 in plain f64
    let values = [1e16, 1.0, -1e16, 1.0, 1e-3];
    let naive: f64 = values.iter().sum();
    assert_le!(naive, 1.5);
    let sum = coupled_sum(&values);
    assert_eq!(sum.value, 2.0 + 1e-3);

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<f64> = (0..1000)
        .map(|_| rng.gen_range(-1.0..1.0) * 10f64.powi(rng.gen_range(-8..8)))
        .collect();
    let exact = coupled_sum(&values);
    // cancel the whole sum but a known remainder
    values.push(-exact.value);
    values.push(-exact.error);
    values.push(0.125);
    let sum = coupled_sum(&values);
    assert_le!((sum.value - 0.125).abs(), 1e-15);
}

#[test]
fn test_twofold_tracks_rounding_error() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut plain = 0.0f64;
    let mut tracked = Twofold::<f64>::default();
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(0.0..1.0);
        plain += x * 0.1;
        tracked += Twofold::<f64>::from(x) * 0.1f64;
    }
    // the leading limb is what plain arithmetic computes
    assert_eq!(tracked.value, plain);
    assert!(tracked.error != 0.0);

    let total = Coupled::<f64>::from(tracked);
    assert_eq!(total.value, tracked.value + tracked.error);
}

#[test]
fn test_lane_buffers() {
    let mut rng = StdRng::seed_from_u64(2);
    let x0: Vec<f64> = (0..37).map(|_| rng.gen_range(1.0..2.0)).collect();
    let x1 = vec![0.0; 37];
    let mut r0 = vec![0.0; 37];
    let mut r1 = vec![0.0; 37];

    let (x0_lanes, x0_rest) = as_lanes::<Doublex>(&x0);
    let (x1_lanes, x1_rest) = as_lanes::<Doublex>(&x1);
    {
        let (r0_lanes, r0_rest) = as_lanes_mut::<Doublex>(&mut r0);
        let (r1_lanes, r1_rest) = as_lanes_mut::<Doublex>(&mut r1);
        for i in 0..x0_lanes.len() {
            let (a, b) = pmul(x0_lanes[i], x1_lanes[i], x0_lanes[i], x1_lanes[i]);
            let (a, b) = padd(a, b, x0_lanes[i], x1_lanes[i]);
            r0_lanes[i] = a;
            r1_lanes[i] = b;
        }
        for i in 0..x0_rest.len() {
            let (a, b) = pmul(x0_rest[i], x1_rest[i], x0_rest[i], x1_rest[i]);
            let (a, b) = padd(a, b, x0_rest[i], x1_rest[i]);
            r0_rest[i] = a;
            r1_rest[i] = b;
        }
    }

    for i in 0..37 {
        let x = Coupled::new(x0[i], 0.0);
        let expected = x * x + x;
        assert_eq!((r0[i], r1[i]), expected.limbs());
    }
}

#[test]
fn test_packed_values_match_scalars() {
    let x = Doublex::from_fn(|i| 1.0 / (i as f64 + 3.0));
    let y = Doublex::from_fn(|i| i as f64 + 7.0);
    let p = Coupled::<Doublex>::from(x) / y + Coupled::<Doublex>::from(y).sqrt();
    for i in 0..Doublex::LANES {
        let s = Coupled::<f64>::from(x.extract(i)) / y.extract(i)
            + Coupled::<f64>::from(y.extract(i)).sqrt();
        assert_eq!(p.value.extract(i), s.value);
        assert_eq!(p.error.extract(i), s.error);
    }
}

#[test]
fn test_mixed_precision_promotes() {
    let x: PFloat = Coupled::from(0.1f64);
    let y: PDouble = Coupled::from(0.1f64);
    let r: PDouble = y - x;
    // a coupled f32 holds about 48 bits of 0.1
    assert_gt!(r.value.abs(), 0.0);
    assert_le!(r.value.abs(), 1e-14);

    let z: f64 = x + 0.0f64;
    assert_eq!(z, f64::from(x));
}

#[test]
fn test_comparisons() {
    let a = PDouble::from(1.0f64) + 2f64.powi(-80);
    let b = PDouble::from(1.0f64);
    assert!(a > b);
    assert!(a != b);
    assert!(b == 1.0f64);

    let ta = Twofold::new(a.value, a.error);
    let tb = Twofold::new(b.value, b.error);
    assert_eq!(
        ta.try_eq(&tb),
        Err(AmbiguousComparison { op: Comparison::Eq })
    );
    assert_eq!(ta.try_gt(&tb), Ok(false));
    assert_eq!(ta.try_ge(&tb), Ok(true));
    assert_eq!(ta.try_lt(&2.0f64), Ok(true));
    assert_eq!(ta.try_compare(&a, Comparison::Eq), Ok(true));
}

#[test]
fn test_shaped_debug_alias() {
    let x: TDouble = 0.1f64.into();
    let y = x * 3.0f64;
    assert_eq!(value_of(y), 0.1f64 * 3.0);
    if cfg!(debug_assertions) {
        // 0.1 * 3 rounds up
        assert!(error_of(y) < 0.0);
    } else {
        assert_eq!(error_of(y), 0.0);
    }
}

#[test]
fn test_display() {
    let x = Coupled::new(1.0f64, 2f64.powi(-60));
    assert_eq!(format!("{x:e}"), format!("1e0[{:e}]", 2f64.powi(-60)));
    assert_eq!(Twofold::new(0.5f32, 0.0).to_string(), "0.5[0]");
}
