//! Species: the (lane type, lane count) identity of a vector family.
//!
//! A species names one point in the cross-product of element kinds and
//! vector shapes, e.g. "8 lanes of `i32` in a 256-bit vector". Every
//! [`Vector`], [`Mask`](crate::simd::mask::Mask) and
//! [`Shuffle`](crate::simd::shuffle::Shuffle) is permanently associated
//! with exactly one species, and the association is carried in the type:
//! two values can only meet in a joint lane-wise operation when their
//! species parameters unify, so cross-species misuse fails at compile time.
//!
//! The species token itself is a zero-sized value, used Java-style as the
//! factory hub for vectors of its family:
//!
//! ```rust
//! use lanewise::simd::species::Species;
//!
//! let s = Species::<i32, 8>::of();
//! let v = s.iota();
//! assert_eq!(v.lane(7), 7);
//! assert_eq!(s.lane_count() * s.element_size_bits(), s.vector_bit_size());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error;
use crate::simd::lane::{ElementKind, SimdElement};
use crate::simd::mask::Mask;
use crate::simd::memory::ByteOrder;
use crate::simd::vector::Vector;

/// Total bit width of the widest vector shape the build platform prefers.
///
/// Decided at build time from the CPU feature probe in `build.rs`: 512 bits
/// where AVX-512 was detected, 256 bits for AVX2, and 128 bits for
/// SSE/NEON or when nothing was detected.
#[cfg(avx512)]
pub const PREFERRED_BITS: usize = 512;

/// Total bit width of the widest vector shape the build platform prefers.
///
/// Decided at build time from the CPU feature probe in `build.rs`: 512 bits
/// where AVX-512 was detected, 256 bits for AVX2, and 128 bits for
/// SSE/NEON or when nothing was detected.
#[cfg(avx2)]
pub const PREFERRED_BITS: usize = 256;

/// Total bit width of the widest vector shape the build platform prefers.
///
/// Decided at build time from the CPU feature probe in `build.rs`: 512 bits
/// where AVX-512 was detected, 256 bits for AVX2, and 128 bits for
/// SSE/NEON or when nothing was detected.
#[cfg(any(sse, neon, fallback))]
pub const PREFERRED_BITS: usize = 128;

/// Lane count of the preferred shape for lane type `T`.
pub const fn preferred_lane_count<T: SimdElement>() -> usize {
    PREFERRED_BITS / T::LANE_BITS
}

/// `true` if `bits` is a supported total vector width.
#[inline(always)]
pub const fn is_supported_shape(bits: usize) -> bool {
    matches!(bits, 64 | 128 | 256 | 512)
}

/// The species token for `N` lanes of `T`.
///
/// Zero-sized; all capacity queries are compile-time constants. See the
/// [module documentation](self) for the role species play.
pub struct Species<T: SimdElement, const N: usize>(PhantomData<T>);

impl<T: SimdElement, const N: usize> Clone for Species<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const N: usize> Copy for Species<T, N> {}

impl<T: SimdElement, const N: usize> PartialEq for Species<T, N> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: SimdElement, const N: usize> Eq for Species<T, N> {}

impl<T: SimdElement, const N: usize> fmt::Debug for Species<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Species[{}x{}]", T::KIND.name(), N)
    }
}

impl<T: SimdElement, const N: usize> fmt::Display for Species<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Species[{}x{}]", T::KIND.name(), N)
    }
}

impl<T: SimdElement, const N: usize> Species<T, N> {
    /// Total bit width of vectors of this species.
    pub const SHAPE_BITS: usize = N * T::LANE_BITS;

    /// Obtains the species token for `N` lanes of `T`.
    ///
    /// # Panics
    ///
    /// Panics if `N * T::LANE_BITS` is not one of the supported shapes
    /// (64, 128, 256 or 512 bits). An unsupported pairing is a
    /// configuration error and is reported here, at construction, not at
    /// first use.
    #[inline(always)]
    pub fn of() -> Self {
        Self::check_shape();
        Species(PhantomData)
    }

    /// Validates the shape of this species; every vector constructor
    /// funnels through this check.
    #[inline(always)]
    pub(crate) fn check_shape() {
        assert!(
            is_supported_shape(Self::SHAPE_BITS),
            "{}",
            error::unsupported_shape(Self::SHAPE_BITS, T::KIND.name(), N)
        );
    }

    /// Number of lanes in vectors of this species.
    #[inline(always)]
    pub const fn lane_count(self) -> usize {
        N
    }

    /// Size of one lane, in bits.
    #[inline(always)]
    pub const fn element_size_bits(self) -> usize {
        T::LANE_BITS
    }

    /// Size of one lane, in bytes.
    #[inline(always)]
    pub const fn element_size_bytes(self) -> usize {
        T::LANE_BYTES
    }

    /// Total vector size, in bits. Always equals
    /// `lane_count() * element_size_bits()`.
    #[inline(always)]
    pub const fn vector_bit_size(self) -> usize {
        Self::SHAPE_BITS
    }

    /// Total vector size, in bytes.
    #[inline(always)]
    pub const fn vector_byte_size(self) -> usize {
        Self::SHAPE_BITS / 8
    }

    /// Runtime identity of the lane type.
    #[inline(always)]
    pub const fn element_kind(self) -> ElementKind {
        T::KIND
    }

    /// The vector with every lane zero.
    #[inline(always)]
    pub fn zero(self) -> Vector<T, N> {
        self.broadcast(T::ZERO)
    }

    /// The vector with every lane set to `e`.
    #[inline(always)]
    pub fn broadcast(self, e: T) -> Vector<T, N> {
        Vector::from_array([e; N])
    }

    /// The vector with every lane set to `value`, if `value` is exactly
    /// representable in the lane type.
    ///
    /// Broadcasting `300` into 8-bit lanes, or `2^24 + 1` into `f32`
    /// lanes, reports an unrepresentable-value error.
    #[inline(always)]
    pub fn try_broadcast_i64(self, value: i64) -> error::Result<Vector<T, N>> {
        match T::from_i64_exact(value) {
            Some(e) => Ok(self.broadcast(e)),
            None => Err(error::unrepresentable(value, T::KIND.name())),
        }
    }

    /// The vector with every lane set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not exactly representable in the lane type;
    /// see [`Species::try_broadcast_i64`] for the checked form.
    #[inline(always)]
    pub fn broadcast_i64(self, value: i64) -> Vector<T, N> {
        match self.try_broadcast_i64(value) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// The index vector `[0, 1, 2, ..., N-1]`.
    ///
    /// The building block for index-based idioms: slice and rotate
    /// implementations compare against iota, and
    /// [`Shuffle::iota`](crate::simd::shuffle::Shuffle::iota) is its
    /// shuffle-typed sibling.
    #[inline(always)]
    pub fn iota(self) -> Vector<T, N> {
        Vector::from_fn(T::from_lane_index)
    }

    /// Builds a vector by evaluating `f` on every lane index.
    #[inline(always)]
    pub fn from_fn(self, f: impl FnMut(usize) -> T) -> Vector<T, N> {
        Vector::from_fn(f)
    }

    /// Wraps an existing lane array as a vector.
    #[inline(always)]
    pub fn from_array(self, lanes: [T; N]) -> Vector<T, N> {
        Vector::from_array(lanes)
    }

    /// Loads `N` lanes from `slice` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + N > slice.len()`.
    #[inline(always)]
    pub fn from_slice(self, slice: &[T], offset: usize) -> Vector<T, N> {
        Vector::from_slice(slice, offset)
    }

    /// Loads `N` lanes from raw bytes in the given byte order.
    ///
    /// # Panics
    ///
    /// Panics if `offset + N * element_size_bytes() > bytes.len()`.
    #[inline(always)]
    pub fn from_byte_slice(self, bytes: &[u8], offset: usize, order: ByteOrder) -> Vector<T, N> {
        Vector::from_byte_slice(bytes, offset, order)
    }

    /// The mask with every lane set to `bit`.
    #[inline(always)]
    pub fn mask_all(self, bit: bool) -> Mask<T, N> {
        Mask::from_array([bit; N])
    }
}
