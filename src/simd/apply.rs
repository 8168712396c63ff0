//! Bulk application of lane-wise operators over slices.
//!
//! These helpers stream a slice (or a pair of slices) through vectors of a
//! chosen species, apply one operator token per chunk, and collect the
//! results. A trailing partial chunk is padded into a full vector and the
//! surplus lanes discarded, so every element still travels through the
//! same dispatch pipeline as a standalone vector operation.
//!
//! The `par_*` forms split the work into blocks and fan them out with
//! rayon; block boundaries are multiples of the lane count, so the
//! parallel results are identical to the sequential ones.

use rayon::prelude::*;

use crate::error;
use crate::simd::lane::SimdElement;
use crate::simd::ops::{Binary, Unary};
use crate::simd::vector::Vector;

/// Elements per parallel block, as a multiple of the lane count.
const BLOCK_LANES: usize = 16;

/// Applies one binary chunk, padding a trailing partial chunk.
///
/// The divisor-side padding is `1`, so a DIV tail cannot introduce a
/// spurious zero-divisor hazard in the discarded lanes.
#[inline(always)]
fn zip_chunk<T: SimdElement, const N: usize>(op: Binary, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    if a.len() == N {
        let r = Vector::<T, N>::from_slice(a, 0).lanewise(op, Vector::from_slice(b, 0));
        r.write_to_slice(out, 0);
    } else {
        let mut pa = [T::ZERO; N];
        let mut pb = [T::ONE; N];
        pa[..a.len()].copy_from_slice(a);
        pb[..b.len()].copy_from_slice(b);
        let r = Vector::<T, N>::from_array(pa).lanewise(op, Vector::from_array(pb));
        out.copy_from_slice(&r.to_array()[..out.len()]);
    }
}

/// Applies one unary chunk, padding a trailing partial chunk with zeros.
#[inline(always)]
fn map_chunk<T: SimdElement, const N: usize>(op: Unary, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), out.len());
    if a.len() == N {
        let r = Vector::<T, N>::from_slice(a, 0).lanewise_unary(op);
        r.write_to_slice(out, 0);
    } else {
        let mut pa = [T::ZERO; N];
        pa[..a.len()].copy_from_slice(a);
        let r = Vector::<T, N>::from_array(pa).lanewise_unary(op);
        out.copy_from_slice(&r.to_array()[..out.len()]);
    }
}

#[inline(always)]
fn zip_block<T: SimdElement, const N: usize>(op: Binary, a: &[T], b: &[T], out: &mut [T]) {
    for ((a_chunk, b_chunk), out_chunk) in
        a.chunks(N).zip(b.chunks(N)).zip(out.chunks_mut(N))
    {
        zip_chunk::<T, N>(op, a_chunk, b_chunk, out_chunk);
    }
}

#[inline(always)]
fn map_block<T: SimdElement, const N: usize>(op: Unary, a: &[T], out: &mut [T]) {
    for (a_chunk, out_chunk) in a.chunks(N).zip(out.chunks_mut(N)) {
        map_chunk::<T, N>(op, a_chunk, out_chunk);
    }
}

/// Applies a binary operator element-wise over two slices, `N` lanes at a
/// time.
///
/// # Errors
///
/// Returns a length-mismatch error if the slices disagree in length.
///
/// # Panics
///
/// Panics exactly where the equivalent vector operation would: on an
/// operator the lane kind does not support, or on an unmasked integer
/// division by zero.
pub fn zip_lanewise<T: SimdElement, const N: usize>(
    op: Binary,
    a: &[T],
    b: &[T],
) -> error::Result<Vec<T>> {
    if a.len() != b.len() {
        return Err(error::length_mismatch(a.len(), b.len()));
    }
    let mut out = vec![T::ZERO; a.len()];
    zip_block::<T, N>(op, a, b, &mut out);
    Ok(out)
}

/// Parallel form of [`zip_lanewise`]; produces identical results.
pub fn par_zip_lanewise<T: SimdElement, const N: usize>(
    op: Binary,
    a: &[T],
    b: &[T],
) -> error::Result<Vec<T>> {
    if a.len() != b.len() {
        return Err(error::length_mismatch(a.len(), b.len()));
    }
    let block = N * BLOCK_LANES;
    let mut out = vec![T::ZERO; a.len()];
    out.par_chunks_mut(block)
        .zip(a.par_chunks(block))
        .zip(b.par_chunks(block))
        .for_each(|((out_block, a_block), b_block)| {
            zip_block::<T, N>(op, a_block, b_block, out_block);
        });
    Ok(out)
}

/// Applies a unary operator element-wise over a slice, `N` lanes at a
/// time.
///
/// # Panics
///
/// Panics on an operator the lane kind does not support.
pub fn map_lanewise<T: SimdElement, const N: usize>(op: Unary, a: &[T]) -> Vec<T> {
    let mut out = vec![T::ZERO; a.len()];
    map_block::<T, N>(op, a, &mut out);
    out
}

/// Parallel form of [`map_lanewise`]; produces identical results.
pub fn par_map_lanewise<T: SimdElement, const N: usize>(op: Unary, a: &[T]) -> Vec<T> {
    let block = N * BLOCK_LANES;
    let mut out = vec![T::ZERO; a.len()];
    out.par_chunks_mut(block)
        .zip(a.par_chunks(block))
        .for_each(|(out_block, a_block)| {
            map_block::<T, N>(op, a_block, out_block);
        });
    out
}
