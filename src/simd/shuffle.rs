//! Per-lane source-index tables for cross-lane data movement.
//!
//! A [`Shuffle`] stores one source index per lane. An index is *valid*
//! when it lies in `[0, N)` and *exceptional* when it lies in `[-N, -1]`.
//! Valid indexes steer an ordinary rearrange; exceptional indexes are
//! tolerated only where a masked rearrange leaves the output lane unset,
//! or in a two-vector rearrange, where an exceptional index `e` selects
//! lane `e + N` of the second source vector.
//!
//! Construction rejects anything outside `[-N, N)`, so every stored index
//! is either valid or exceptional by construction.

use std::fmt;
use std::marker::PhantomData;

use num::traits::AsPrimitive;

use crate::error;
use crate::simd::lane::SimdElement;
use crate::simd::mask::Mask;
use crate::simd::species::Species;
use crate::simd::vector::Vector;

/// A per-lane source-index table tied to the species `(T, N)`.
pub struct Shuffle<T: SimdElement, const N: usize> {
    sources: [i32; N],
    _species: PhantomData<T>,
}

impl<T: SimdElement, const N: usize> Clone for Shuffle<T, N> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const N: usize> Copy for Shuffle<T, N> {}

impl<T: SimdElement, const N: usize> PartialEq for Shuffle<T, N> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.sources == other.sources
    }
}

impl<T: SimdElement, const N: usize> Eq for Shuffle<T, N> {}

impl<T: SimdElement, const N: usize> fmt::Debug for Shuffle<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shuffle[{}x{}]{:?}", T::KIND.name(), N, self.sources)
    }
}

impl<T: SimdElement, const N: usize> Shuffle<T, N> {
    /// Builds a shuffle from explicit source indexes, if every index lies
    /// in `[-N, N)`.
    #[inline(always)]
    pub fn try_from_array(sources: [i32; N]) -> error::Result<Self> {
        Species::<T, N>::check_shape();
        for &s in sources.iter() {
            if s < -(N as i32) || s >= N as i32 {
                return Err(error::index_out_of_range(
                    "shuffle entry",
                    s as i64,
                    -(N as i64),
                    N as i64,
                ));
            }
        }
        Ok(Shuffle {
            sources,
            _species: PhantomData,
        })
    }

    /// Builds a shuffle from explicit source indexes.
    ///
    /// # Panics
    ///
    /// Panics if any index lies outside `[-N, N)`; see
    /// [`Shuffle::try_from_array`] for the checked form.
    #[inline(always)]
    pub fn from_array(sources: [i32; N]) -> Self {
        match Self::try_from_array(sources) {
            Ok(s) => s,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds a shuffle by evaluating `f` on every lane index.
    ///
    /// # Panics
    ///
    /// Panics if `f` produces an index outside `[-N, N)`.
    #[inline(always)]
    pub fn from_fn(mut f: impl FnMut(usize) -> i32) -> Self {
        let mut sources = [0i32; N];
        for (i, s) in sources.iter_mut().enumerate() {
            *s = f(i);
        }
        Self::from_array(sources)
    }

    /// The identity shuffle `[0, 1, ..., N-1]`.
    #[inline(always)]
    pub fn iota() -> Self {
        Self::from_fn(|i| i as i32)
    }

    /// The affine index sequence `start + i * step`.
    ///
    /// With `wrap` set, each entry is reduced into the valid range
    /// `[0, N)` by flooring modulus; this is the form slice and unslice
    /// are built on. Without `wrap`, every entry must already lie in
    /// `[-N, N)`.
    ///
    /// # Panics
    ///
    /// Panics if `wrap` is unset and an entry lies outside `[-N, N)`.
    #[inline(always)]
    pub fn iota_with(start: i32, step: i32, wrap: bool) -> Self {
        Self::from_fn(|i| {
            let e = start.wrapping_add((i as i32).wrapping_mul(step));
            if wrap {
                e.rem_euclid(N as i32)
            } else {
                e
            }
        })
    }

    /// The stored source index for output lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline(always)]
    pub fn lane_source(self, i: usize) -> i32 {
        assert!(
            i < N,
            "{}",
            error::index_out_of_range("lane index", i as i64, 0, N as i64)
        );
        self.sources[i]
    }

    /// The stored source indexes as an array.
    #[inline(always)]
    pub fn to_array(self) -> [i32; N] {
        self.sources
    }

    /// `true` if the entry for lane `i` is valid (in `[0, N)`).
    #[inline(always)]
    pub fn is_valid_at(self, i: usize) -> bool {
        self.sources[i] >= 0
    }

    /// The mask of lanes whose entries are valid.
    #[inline(always)]
    pub fn valid_mask(self) -> Mask<T, N> {
        Mask::from_fn(|i| self.sources[i] >= 0)
    }

    /// `true` if every entry is valid.
    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self.valid_mask().all_true()
    }

    /// Asserts that every entry is valid, reporting the first exceptional
    /// entry otherwise.
    ///
    /// # Panics
    ///
    /// Panics if any entry is exceptional.
    #[inline(always)]
    pub fn check_indexes(self) -> Self {
        for &s in self.sources.iter() {
            assert!(
                s >= 0,
                "{}",
                error::index_out_of_range("shuffle entry", s as i64, 0, N as i64)
            );
        }
        self
    }

    /// Maps every exceptional entry `e` into the valid range as `e + N`,
    /// leaving valid entries unchanged.
    #[inline(always)]
    pub fn wrap_indexes(self) -> Self {
        Self::from_fn(|i| {
            let s = self.sources[i];
            if s < 0 {
                s + N as i32
            } else {
                s
            }
        })
    }

    /// Composes two shuffles: entry `i` of the result is this shuffle's
    /// entry at `other`'s entry `i`. Exceptional entries of `self` are
    /// carried through.
    ///
    /// # Panics
    ///
    /// Panics if `other` contains an exceptional entry, since there is no
    /// lane of `self` for it to select.
    #[inline(always)]
    pub fn rearrange(self, other: Self) -> Self {
        let other = other.check_indexes();
        Self::from_fn(|i| self.sources[other.sources[i] as usize])
    }

    /// The shuffle's entries as a vector of lane values.
    #[inline(always)]
    pub fn to_vector(self) -> Vector<T, N>
    where
        i32: AsPrimitive<T>,
    {
        Vector::from_fn(|i| self.sources[i].as_())
    }

    /// Reinterprets the shuffle as belonging to another species with the
    /// same lane count. Entries are preserved verbatim.
    #[inline(always)]
    pub fn cast<U: SimdElement>(self) -> Shuffle<U, N> {
        Shuffle {
            sources: self.sources,
            _species: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type S = Shuffle<i32, 4>;

    mod construction_tests {
        use super::*;

        #[test]
        fn test_valid_and_exceptional_entries() {
            let s = S::from_array([0, 3, -1, -4]);
            assert!(s.is_valid_at(0));
            assert!(!s.is_valid_at(2));
            assert_eq!(s.valid_mask().to_array(), [true, true, false, false]);
            assert!(!s.is_valid());
        }

        #[test]
        fn test_out_of_range_entry_rejected() {
            assert!(S::try_from_array([0, 1, 2, 4]).is_err());
            assert!(S::try_from_array([0, 1, 2, -5]).is_err());
            assert!(S::try_from_array([0, 1, 2, -4]).is_ok());
        }

        #[test]
        #[should_panic(expected = "shuffle entry 4 out of range")]
        fn test_from_array_panics() {
            let _ = S::from_array([0, 1, 2, 4]);
        }

        #[test]
        fn test_iota_with_wrap() {
            assert_eq!(S::iota().to_array(), [0, 1, 2, 3]);
            assert_eq!(S::iota_with(2, 1, true).to_array(), [2, 3, 0, 1]);
            assert_eq!(S::iota_with(-1, 1, true).to_array(), [3, 0, 1, 2]);
        }
    }

    mod wrap_tests {
        use super::*;

        #[test]
        fn test_wrap_indexes() {
            let s = S::from_array([0, -1, 2, -4]);
            assert_eq!(s.wrap_indexes().to_array(), [0, 3, 2, 0]);
        }

        #[test]
        #[should_panic(expected = "shuffle entry -1 out of range")]
        fn test_check_indexes_panics_on_exceptional() {
            let _ = S::from_array([0, -1, 2, 3]).check_indexes();
        }
    }

    mod composition_tests {
        use super::*;

        #[test]
        fn test_rearrange_composition() {
            let reverse = S::from_array([3, 2, 1, 0]);
            let rotate = S::iota_with(1, 1, true);
            // reverse-after-rotate: entry i is reverse[rotate[i]]
            assert_eq!(reverse.rearrange(rotate).to_array(), [2, 1, 0, 3]);
            assert_eq!(reverse.rearrange(S::iota()), reverse);
        }

        #[test]
        fn test_to_vector() {
            let s = S::from_array([1, 0, -2, 3]);
            assert_eq!(s.to_vector().to_array(), [1, 0, -2, 3]);
        }
    }
}
