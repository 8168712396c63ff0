//! Cross-lane movement laws: slice/unslice inversion, rearrange, shuffles.

use rand::Rng;

use lanewise::simd::{Mask, Shuffle, SimdElement, Vector};

fn random_vector<T: SimdElement, const N: usize>(rng: &mut impl Rng) -> Vector<T, N>
where
    rand::distr::StandardUniform: rand::distr::Distribution<T>,
{
    Vector::from_fn(|_| rng.random())
}

#[test]
fn unslice_inverts_slice_at_every_origin() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let v1: Vector<i32, 8> = random_vector(&mut rng);
        let v2: Vector<i32, 8> = random_vector(&mut rng);
        for origin in 0..=8 {
            let s = v1.slice_with(origin, v2);
            assert_eq!(s.unslice_with(origin, v1, 0), v1, "origin {origin}");
            assert_eq!(s.unslice_with(origin, v2, 1), v2, "origin {origin}");
        }
    }
}

#[test]
fn slice_boundaries_are_inclusive_of_lane_count() {
    let v1 = Vector::<i16, 8>::from_fn(|i| i as i16);
    let v2 = Vector::<i16, 8>::from_fn(|i| 100 + i as i16);
    assert_eq!(v1.slice_with(0, v2), v1);
    assert_eq!(v1.slice_with(8, v2), v2);
}

#[test]
fn identity_shuffle_rearranges_to_self() {
    fn check<T: SimdElement, const N: usize>()
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        let mut rng = rand::rng();
        let v: Vector<T, N> = Vector::from_fn(|_| rng.random());
        assert_eq!(v.rearrange(Shuffle::iota()), v);
    }
    check::<i8, 16>();
    check::<i16, 8>();
    check::<i32, 4>();
    check::<i64, 2>();
    check::<f32, 4>();
    check::<f64, 2>();
}

#[test]
fn opposite_rotations_cancel() {
    let mut rng = rand::rng();
    let v: Vector<i32, 8> = random_vector(&mut rng);
    for k in 0..8 {
        let fwd = Shuffle::<i32, 8>::iota_with(k, 1, true);
        let back = Shuffle::<i32, 8>::iota_with(-k, 1, true);
        assert_eq!(v.rearrange(fwd).rearrange(back), v);
        // composing the two shuffles directly gives the identity table
        assert_eq!(fwd.rearrange(back), Shuffle::iota());
    }
}

#[test]
fn wrap_indexes_maps_exceptional_entries_into_range() {
    let s = Shuffle::<i32, 8>::from_fn(|i| i as i32 - 8);
    assert!(!s.is_valid());
    let w = s.wrap_indexes();
    assert!(w.is_valid());
    assert_eq!(w, Shuffle::iota());
}

#[test]
fn masked_rearrange_zeroes_unset_lanes() {
    let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
    // exceptional entries sit only where the mask is unset
    let s = Shuffle::<i32, 4>::from_array([2, -1, 1, -3]);
    let m = Mask::<i32, 4>::from_array([true, false, true, false]);
    assert_eq!(v.rearrange_masked(s, m).to_array(), [3, 0, 2, 0]);
}

#[test]
fn two_vector_rearrange_crosses_the_boundary() {
    let a = Vector::<i8, 8>::from_fn(|i| i as i8);
    let b = Vector::<i8, 8>::from_fn(|i| 10 + i as i8);
    // interleave: even output lanes from a, odd from b (as exceptional entries)
    let s = Shuffle::<i8, 8>::from_fn(|i| {
        let half = (i / 2) as i32;
        if i % 2 == 0 {
            half
        } else {
            half - 8
        }
    });
    assert_eq!(
        a.rearrange_with(s, b).to_array(),
        [0, 10, 1, 11, 2, 12, 3, 13]
    );
}

#[test]
fn select_from_is_rearrange_through_lane_values() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let table: Vector<i32, 8> = random_vector(&mut rng);
        let indexes = Vector::<i32, 8>::from_fn(|_| rng.random_range(0..8));
        let selected = indexes.select_from(table);
        for i in 0..8 {
            assert_eq!(selected.lane(i), table.lane(indexes.lane(i) as usize));
        }
    }
}
