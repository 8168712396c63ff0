//! Reinterpretation and value conversion between species.
//!
//! Two independent transformation families, both addressed by a *part*
//! number when the logical result does not fill the physical output:
//!
//! - **Reinterpretation** copies raw bits, redrawing lane boundaries
//!   under a little-endian convention; no lane value is translated.
//! - **Conversion** translates each lane value with `as`-cast semantics
//!   (truncation, sign extension, rounding, and the saturating
//!   float-to-int rule with NaN mapping to zero).
//!
//! When the sizes differ, exactly one of three regimes applies:
//!
//! - *in-place* (`M = 1`): the part must be `0`;
//! - *expanding* (logical result `M` times larger than the output): the
//!   part selects one output-sized slice, valid range `[0, M)`;
//! - *contracting* (logical result `M` times smaller): the part steers
//!   the result into one slot of the zero-padded output, valid range
//!   `(-M, 0]`.
//!
//! A part of the wrong sign or magnitude for the regime is an indexing
//! error, caught before any data moves.

use num::traits::AsPrimitive;

use crate::error;
use crate::simd::lane::SimdElement;
use crate::simd::species::Species;
use crate::simd::vector::Vector;

/// Largest vector payload, in bytes (one 512-bit vector).
const MAX_VECTOR_BYTES: usize = 64;

/// How a logical result of `in_units` relates to an output of `out_units`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Resize {
    InPlace,
    Expand { ratio: usize },
    Contract { ratio: usize },
}

#[inline(always)]
fn resize_for(in_units: usize, out_units: usize) -> Resize {
    if in_units == out_units {
        Resize::InPlace
    } else if in_units > out_units {
        Resize::Expand {
            ratio: in_units / out_units,
        }
    } else {
        Resize::Contract {
            ratio: out_units / in_units,
        }
    }
}

/// Validates `part` against the resize regime, before any data movement.
#[inline(always)]
fn check_part(part: i32, resize: Resize) {
    let (lower, upper) = match resize {
        Resize::InPlace => (0, 1),
        Resize::Expand { ratio } => (0, ratio as i64),
        Resize::Contract { ratio } => (-(ratio as i64) + 1, 1),
    };
    assert!(
        (part as i64) >= lower && (part as i64) < upper,
        "{}",
        error::index_out_of_range("part", part as i64, lower, upper)
    );
}

impl<T: SimdElement, const N: usize> Vector<T, N> {
    /// Reinterprets this vector's bits as a vector of a differently sized
    /// or typed species, selecting `part` of the result when the total bit
    /// widths differ.
    ///
    /// Lane bytes are laid out little-endian: lane 0's least significant
    /// byte is byte 0 of the payload, regardless of the host's byte order.
    ///
    /// # Panics
    ///
    /// Panics if `part` is outside the legal range for the size change;
    /// see the [module documentation](self) for the regimes.
    pub fn reinterpret_shape<U: SimdElement, const M: usize>(self, part: i32) -> Vector<U, M> {
        Species::<U, M>::check_shape();
        let in_bytes = N * T::LANE_BYTES;
        let out_bytes = M * U::LANE_BYTES;
        let resize = resize_for(in_bytes, out_bytes);
        check_part(part, resize);

        let mut src = [0u8; MAX_VECTOR_BYTES];
        let lanes = self.to_array();
        for (i, lane) in lanes.iter().enumerate() {
            lane.write_le(&mut src[i * T::LANE_BYTES..][..T::LANE_BYTES]);
        }

        let mut dst = [0u8; MAX_VECTOR_BYTES];
        match resize {
            Resize::InPlace => dst[..out_bytes].copy_from_slice(&src[..in_bytes]),
            Resize::Expand { .. } => {
                let start = part as usize * out_bytes;
                dst[..out_bytes].copy_from_slice(&src[start..start + out_bytes]);
            }
            Resize::Contract { .. } => {
                let start = (-part) as usize * in_bytes;
                dst[start..start + in_bytes].copy_from_slice(&src[..in_bytes]);
            }
        }

        Vector::from_fn(|i| U::read_le(&dst[i * U::LANE_BYTES..][..U::LANE_BYTES]))
    }

    /// Reinterprets this vector's bits as another species of the same
    /// total bit width.
    ///
    /// # Panics
    ///
    /// Panics if the target species has a different total bit width.
    #[inline(always)]
    pub fn reinterpret<U: SimdElement, const M: usize>(self) -> Vector<U, M> {
        assert!(
            N * T::LANE_BITS == M * U::LANE_BITS,
            "{}",
            error::unsupported_shape(M * U::LANE_BITS, U::KIND.name(), M)
        );
        self.reinterpret_shape::<U, M>(0)
    }

    /// Views this vector's bits as `i8` lanes; `M` must be the vector's
    /// size in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `M` differs from the vector's byte size.
    #[inline(always)]
    pub fn reinterpret_as_bytes<const M: usize>(self) -> Vector<i8, M> {
        self.reinterpret::<i8, M>()
    }

    /// Converts each lane value to `U`, into a target species of any
    /// shape, selecting `part` of the logical result when the lane counts
    /// differ.
    ///
    /// The logical result has one `U` lane per input lane; with `M` output
    /// lanes, a lane-count ratio above one makes the call expanding
    /// (`part` in `[0, ratio)`) or contracting (`part` in `(-ratio, 0]`,
    /// remaining output lanes zero).
    ///
    /// # Panics
    ///
    /// Panics if `part` is outside the legal range for the lane-count
    /// change.
    pub fn convert_shape<U: SimdElement, const M: usize>(self, part: i32) -> Vector<U, M>
    where
        T: AsPrimitive<U>,
    {
        Species::<U, M>::check_shape();
        let resize = resize_for(N, M);
        check_part(part, resize);

        let lanes = self.to_array();
        match resize {
            Resize::InPlace => Vector::from_fn(|i| lanes[i].as_()),
            Resize::Expand { .. } => {
                let start = part as usize * M;
                Vector::from_fn(|i| lanes[start + i].as_())
            }
            Resize::Contract { .. } => {
                let start = (-part) as usize * N;
                Vector::from_fn(|i| {
                    if i >= start && i < start + N {
                        lanes[i - start].as_()
                    } else {
                        U::ZERO
                    }
                })
            }
        }
    }

    /// Shape-invariant conversion: converts each lane value to `U` while
    /// keeping the physical vector size, selecting `part` of the logical
    /// result when the lane sizes differ.
    ///
    /// # Panics
    ///
    /// Panics if the target species has a different total bit width, or if
    /// `part` is outside the legal range.
    #[inline(always)]
    pub fn convert<U: SimdElement, const M: usize>(self, part: i32) -> Vector<U, M>
    where
        T: AsPrimitive<U>,
    {
        assert!(
            N * T::LANE_BITS == M * U::LANE_BITS,
            "{}",
            error::unsupported_shape(M * U::LANE_BITS, U::KIND.name(), M)
        );
        self.convert_shape::<U, M>(part)
    }
}
