//! Division hazard suppression and mask surface behavior.

use rand::Rng;

use lanewise::simd::ops::{Binary, Comparison};
use lanewise::simd::{Mask, Vector};

#[test]
fn masked_division_never_faults_when_zero_divisors_are_unset() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let a = Vector::<i32, 8>::from_fn(|_| rng.random());
        // sprinkle zero divisors, then unset the mask exactly there
        let b = Vector::<i32, 8>::from_fn(|_| {
            if rng.random_range(0..3) == 0 {
                0
            } else {
                rng.random_range(1..100)
            }
        });
        let mask = b.compare_scalar(Comparison::Ne, 0);
        let q = a.lanewise_masked(Binary::Div, b, mask);
        for i in 0..8 {
            if mask.lane_is_set(i) {
                assert_eq!(q.lane(i), a.lane(i).wrapping_div(b.lane(i)));
            } else {
                assert_eq!(q.lane(i), a.lane(i));
            }
        }
    }
}

#[test]
fn masked_division_concrete_scenario() {
    // 8-bit lanes; the first four lanes carry the scenario, the rest are benign
    let a = Vector::<i8, 8>::from_array([1, 2, 3, 4, 1, 1, 1, 1]);
    let b = Vector::<i8, 8>::from_array([10, 0, 30, 0, 1, 1, 1, 1]);
    let mask = Mask::<i8, 8>::from_array([true, false, true, false, true, true, true, true]);
    let q = a.lanewise_masked(Binary::Div, b, mask);
    // lane 0: 1/10 = 0; lane 1 masked off keeps 2; lane 2: 3/30 = 0; lane 3 keeps 4
    assert_eq!(&q.to_array()[..4], &[0, 2, 0, 4]);
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_faults_when_a_zero_divisor_is_set() {
    let a = Vector::<i32, 4>::broadcast(6);
    let b = Vector::<i32, 4>::from_array([3, 2, 0, 1]);
    let mask = Mask::<i32, 4>::from_array([true, true, true, false]);
    let _ = a.lanewise_masked(Binary::Div, b, mask);
}

#[test]
fn comparison_masking_is_plain_intersection() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = Vector::<i16, 8>::from_fn(|_| rng.random());
        let b = Vector::<i16, 8>::from_fn(|_| rng.random());
        let m = Mask::<i16, 8>::from_fn(|_| rng.random());
        assert_eq!(
            a.compare_masked(Comparison::Lt, b, m),
            a.compare(Comparison::Lt, b).and(m)
        );
    }
}

#[test]
fn bitmask_roundtrip_for_every_lane_count() {
    fn roundtrip<const N: usize>() {
        let m = Mask::<i8, N>::from_fn(|i| i % 3 != 1);
        assert_eq!(Mask::<i8, N>::from_bitmask(m.to_bitmask()), m);
        assert_eq!(m.to_bitmask().count_ones() as usize, m.true_count());
    }
    roundtrip::<8>();
    roundtrip::<16>();
    roundtrip::<32>();
    roundtrip::<64>();
}

#[test]
fn mask_queries_agree_with_boolean_algebra() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = Mask::<i64, 4>::from_fn(|_| rng.random());
        let b = Mask::<i64, 4>::from_fn(|_| rng.random());
        assert_eq!(a.and(b).true_count() + a.and_not(b).true_count(), a.true_count());
        assert_eq!(a.xor(a).any_true(), false);
        assert_eq!(a.or(a.flip()).all_true(), true);
        assert_eq!(a.eq_lanes(b), a.xor(b).flip());
    }
}
