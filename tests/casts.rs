//! Reinterpretation round-trips and part-addressed expansion/contraction.

use rand::Rng;

use lanewise::simd::{SimdElement, Vector};

macro_rules! byte_roundtrip {
    ($ty:ty, $n:expr, $bytes:expr, $rng:expr) => {{
        let v = Vector::<$ty, $n>::from_fn(|_| $rng.random());
        let back = v.reinterpret_as_bytes::<$bytes>().reinterpret::<$ty, $n>();
        assert_eq!(back, v, "byte round-trip broke for {}x{}", stringify!($ty), $n);
    }};
}

#[test]
fn reinterpret_through_bytes_preserves_bits_for_every_species() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        byte_roundtrip!(i8, 8, 8, rng);
        byte_roundtrip!(i16, 4, 8, rng);
        byte_roundtrip!(i32, 2, 8, rng);
        byte_roundtrip!(i64, 1, 8, rng);
        byte_roundtrip!(i8, 16, 16, rng);
        byte_roundtrip!(i16, 8, 16, rng);
        byte_roundtrip!(i32, 4, 16, rng);
        byte_roundtrip!(i64, 2, 16, rng);
        byte_roundtrip!(i32, 8, 32, rng);
        byte_roundtrip!(i64, 4, 32, rng);
        byte_roundtrip!(i32, 16, 64, rng);
        byte_roundtrip!(i64, 8, 64, rng);
    }
}

#[test]
fn float_byte_roundtrip_preserves_payloads() {
    let v = Vector::<f32, 4>::from_array([f32::NAN, -0.0, f32::MIN_POSITIVE, -1.5]);
    let back = v.reinterpret_as_bytes::<16>().reinterpret::<f32, 4>();
    for i in 0..4 {
        assert_eq!(back.lane(i).to_bits(), v.lane(i).to_bits());
    }

    let d = Vector::<f64, 4>::from_array([f64::NAN, -0.0, 1e300, -1e-300]);
    let dback = d.reinterpret_as_bytes::<32>().reinterpret::<f64, 4>();
    for i in 0..4 {
        assert_eq!(dback.lane(i).to_bits(), d.lane(i).to_bits());
    }
}

#[test]
fn reinterpret_view_pairs_are_mutually_inverse() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let v = Vector::<i64, 4>::from_fn(|_| rng.random());
        assert_eq!(v.reinterpret::<f64, 4>().reinterpret::<i64, 4>(), v);
        assert_eq!(v.reinterpret::<i16, 16>().reinterpret::<i64, 4>(), v);
        assert_eq!(v.reinterpret::<i8, 32>().reinterpret::<i64, 4>(), v);
    }
}

#[test]
fn expansion_parts_tile_the_input_exactly() {
    let mut rng = rand::rng();
    let v = Vector::<i8, 32>::from_fn(|_| rng.random());

    let mut seen = Vec::new();
    for part in 0..4 {
        let slice = v.reinterpret_shape::<i8, 8>(part);
        seen.extend_from_slice(&slice.to_array());
    }
    assert_eq!(seen, v.to_array());
}

#[test]
fn contraction_then_expansion_restores_the_slice() {
    let mut rng = rand::rng();
    let v = Vector::<i16, 4>::from_fn(|_| rng.random());
    for part in 0..4i32 {
        let wide = v.reinterpret_shape::<i16, 16>(-part);
        let narrow = wide.reinterpret_shape::<i16, 4>(part);
        assert_eq!(narrow, v, "mirrored parts {} and {}", -part, part);
    }
}

#[test]
fn conversion_follows_cast_semantics() {
    let v = Vector::<i16, 8>::from_array([-1, 0, 300, -300, i16::MAX, i16::MIN, 7, -7]);

    let widened = v.convert_shape::<i32, 8>(0);
    for i in 0..8 {
        assert_eq!(widened.lane(i), v.lane(i) as i32);
    }

    let narrowed = v.convert_shape::<i8, 8>(0);
    for i in 0..8 {
        assert_eq!(narrowed.lane(i), v.lane(i) as i8);
    }

    let floated = v.convert_shape::<f32, 8>(0);
    for i in 0..8 {
        assert_eq!(floated.lane(i), v.lane(i) as f32);
    }
}

#[test]
fn shape_invariant_conversion_splits_into_parts() {
    let v = Vector::<i8, 16>::from_fn(|i| i as i8 - 8);
    // 16 logical i64 results, 2 per 128-bit output: 8 parts
    for part in 0..8 {
        let wide = v.convert::<i64, 2>(part);
        assert_eq!(wide.lane(0), (part as i64 * 2) - 8);
        assert_eq!(wide.lane(1), (part as i64 * 2) - 7);
    }
}

#[test]
fn contracting_conversion_steers_into_the_zero_padded_output() {
    let v = Vector::<i64, 2>::from_array([-5, 5]);
    for part in 0..8i32 {
        let packed = v.convert::<i8, 16>(-part);
        let out = packed.to_array();
        for (i, &lane) in out.iter().enumerate() {
            let start = part as usize * 2;
            if i == start {
                assert_eq!(lane, -5);
            } else if i == start + 1 {
                assert_eq!(lane, 5);
            } else {
                assert_eq!(lane, 0);
            }
        }
    }
}

#[test]
fn widening_and_renarrowing_is_lossless_for_in_range_values() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let v = Vector::<i8, 16>::from_fn(|_| rng.random());
        let there = v.convert_shape::<i32, 16>(0);
        assert_eq!(there.convert_shape::<i8, 16>(0), v);

        let f = v.convert_shape::<f32, 16>(0);
        assert_eq!(f.convert_shape::<i8, 16>(0), v);
    }
}
