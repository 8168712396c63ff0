//! Cross-lane data movement: slice, unslice, rearrange and select-from.
//!
//! Slice and unslice treat two vectors as one logical sequence of `2 * N`
//! lanes and move an `N`-lane window across it; both are built from the
//! same two primitives, a wrapped iota shuffle and a threshold-compare
//! blend. Rearrange gathers lanes through an explicit
//! [`Shuffle`](crate::simd::shuffle::Shuffle); select-from is its dual,
//! using the vector's own lane values as the index table.

use num::traits::AsPrimitive;

use crate::error;
use crate::simd::backend;
use crate::simd::lane::SimdElement;
use crate::simd::mask::Mask;
use crate::simd::ops::Comparison;
use crate::simd::shuffle::Shuffle;
use crate::simd::species::Species;
use crate::simd::vector::Vector;

impl<T: SimdElement, const N: usize> Vector<T, N> {
    #[inline(always)]
    fn check_origin(origin: usize) {
        assert!(
            origin <= N,
            "{}",
            error::index_out_of_range("origin", origin as i64, 0, N as i64 + 1)
        );
    }

    /// The `N`-lane window starting at `origin` of the logical `2 * N`-lane
    /// sequence `self ++ that`.
    ///
    /// `origin` ranges over `[0, N]` inclusive: `0` returns `self`
    /// unchanged and `N` returns `that` unchanged. Built as a wrapped
    /// rotation of both inputs blended at the window edge.
    ///
    /// # Panics
    ///
    /// Panics if `origin > N`.
    #[inline(always)]
    pub fn slice_with(self, origin: usize, that: Self) -> Self {
        Self::check_origin(origin);
        let edge = Species::<T, N>::of()
            .iota()
            .compare_scalar(Comparison::Lt, T::from_lane_index(N - origin));
        let rotate = Shuffle::<T, N>::iota_with(origin as i32, 1, true);
        that.rearrange(rotate).blend(self.rearrange(rotate), edge)
    }

    /// [`Vector::slice_with`] against an all-zero second vector: lanes past
    /// the end of `self` are zero.
    ///
    /// # Panics
    ///
    /// Panics if `origin > N`.
    #[inline(always)]
    pub fn slice(self, origin: usize) -> Self {
        self.slice_with(origin, Self::broadcast(T::ZERO))
    }

    /// Masked slice: the sliced window where `m` is set, zero elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `origin > N`.
    #[inline(always)]
    pub fn slice_masked(self, origin: usize, that: Self, m: Mask<T, N>) -> Self {
        Self::broadcast(T::ZERO).blend(self.slice_with(origin, that), m)
    }

    /// The inverse of [`Vector::slice_with`]: inserts `self` as the window
    /// at `origin` into the logical `2 * N`-lane background `w ++ w`, and
    /// returns copy `part` (0 or 1) of the result.
    ///
    /// For any `s = v1.slice_with(origin, v2)`, reinserting restores both
    /// inputs: `s.unslice_with(origin, v1, 0) == v1` and
    /// `s.unslice_with(origin, v2, 1) == v2`.
    ///
    /// # Panics
    ///
    /// Panics if `origin > N` or `part > 1`.
    #[inline(always)]
    pub fn unslice_with(self, origin: usize, w: Self, part: usize) -> Self {
        Self::check_origin(origin);
        assert!(
            part <= 1,
            "{}",
            error::index_out_of_range("part", part as i64, 0, 2)
        );
        let threshold = T::from_lane_index(origin);
        let iota = Species::<T, N>::of().iota();
        let keep_window = if part == 0 {
            iota.compare_scalar(Comparison::Ge, threshold)
        } else {
            iota.compare_scalar(Comparison::Lt, threshold)
        };
        let rotate = Shuffle::<T, N>::iota_with(-(origin as i32), 1, true);
        w.blend(self.rearrange(rotate), keep_window)
    }

    /// [`Vector::unslice_with`] against an all-zero background, part 0.
    ///
    /// # Panics
    ///
    /// Panics if `origin > N`.
    #[inline(always)]
    pub fn unslice(self, origin: usize) -> Self {
        self.unslice_with(origin, Self::broadcast(T::ZERO), 0)
    }

    /// Masked unslice: only lanes of the window selected by `m` replace
    /// the background.
    ///
    /// # Panics
    ///
    /// Panics if `origin > N` or `part > 1`.
    #[inline(always)]
    pub fn unslice_masked(self, origin: usize, w: Self, part: usize, m: Mask<T, N>) -> Self {
        let window = w.slice_with(origin, w).blend(self, m);
        window.unslice_with(origin, w, part)
    }

    /// Gathers lanes: output lane `i` is `self.lane(s.lane_source(i))`.
    ///
    /// # Panics
    ///
    /// Panics if the shuffle contains any exceptional entry.
    #[inline(always)]
    pub fn rearrange(self, s: Shuffle<T, N>) -> Self {
        let s = s.check_indexes();
        Self::from_array(backend::rearrange_op(&self.to_array(), &s.to_array()))
    }

    /// Masked gather: unset output lanes are zero, and exceptional shuffle
    /// entries are tolerated in unset lanes only.
    ///
    /// # Panics
    ///
    /// Panics if the shuffle has an exceptional entry in a lane where `m`
    /// is set.
    #[inline(always)]
    pub fn rearrange_masked(self, s: Shuffle<T, N>, m: Mask<T, N>) -> Self {
        let sources = s.to_array();
        for (i, &src) in sources.iter().enumerate() {
            assert!(
                src >= 0 || !m.lane_is_set(i),
                "{}",
                error::index_out_of_range("shuffle entry", src as i64, 0, N as i64)
            );
        }
        let lanes = self.to_array();
        let gathered = Self::from_fn(|i| {
            if sources[i] < 0 {
                T::ZERO
            } else {
                lanes[sources[i] as usize]
            }
        });
        Self::broadcast(T::ZERO).blend(gathered, m)
    }

    /// Two-input gather: valid entries of `s` index `self`, exceptional
    /// entries `e` index lane `e + N` of `second`.
    #[inline(always)]
    pub fn rearrange_with(self, s: Shuffle<T, N>, second: Self) -> Self {
        let valid = s.valid_mask();
        let wrapped = s.wrap_indexes();
        let from_first = self.rearrange(wrapped);
        let from_second = second.rearrange(wrapped);
        from_second.blend(from_first, valid)
    }

    /// Converts the lane values of this vector into a shuffle, casting
    /// each lane to an index.
    ///
    /// # Panics
    ///
    /// Panics if any lane value falls outside `[-N, N)` after truncation
    /// to an integer.
    #[inline(always)]
    pub fn to_shuffle(self) -> Shuffle<T, N> {
        let lanes = self.to_array();
        let mut sources = [0i32; N];
        for (i, s) in sources.iter_mut().enumerate() {
            let v: i64 = lanes[i].as_();
            assert!(
                v >= -(N as i64) && v < N as i64,
                "{}",
                error::index_out_of_range("shuffle entry", v, -(N as i64), N as i64)
            );
            *s = v as i32;
        }
        Shuffle::from_array(sources)
    }

    /// Uses this vector's lane values as indexes into `table`; equivalent
    /// to `table.rearrange(self.to_shuffle())`.
    ///
    /// # Panics
    ///
    /// Panics if any lane value falls outside `[0, N)`.
    #[inline(always)]
    pub fn select_from(self, table: Self) -> Self {
        table.rearrange(self.to_shuffle())
    }

    /// Masked select-from: unset output lanes are zero.
    ///
    /// # Panics
    ///
    /// Panics if a lane value falls outside `[0, N)` where `m` is set, or
    /// outside `[-N, N)` anywhere.
    #[inline(always)]
    pub fn select_from_masked(self, table: Self, m: Mask<T, N>) -> Self {
        table.rearrange_masked(self.to_shuffle(), m)
    }
}
