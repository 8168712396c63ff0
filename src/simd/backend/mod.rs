//! The execution seam between generic dispatch and lane execution.
//!
//! Every lane-wise operation reaches this module carrying its operator
//! token, its operand lane buffers and a *fallback*: a pure scalar
//! closure of the form "for lane `i`, compute `f(i, a[i], ...)`". A
//! backend may execute the token any way it likes — the contract is that
//! the result must be bit-identical to applying the fallback
//! independently to every lane index in `[0, N)`, with no partial
//! application.
//!
//! The shipped backend is [`scalar`], which executes the fallback loop
//! directly; the operator token is forwarded for backends that select an
//! accelerated path from it.

pub(crate) mod scalar;

use crate::simd::lane::SimdElement;
use crate::simd::ops::{Associative, Binary, Comparison, Ternary, Test, Unary};

#[inline(always)]
pub(crate) fn unary_op<T: SimdElement, const N: usize>(
    _op: Unary,
    a: &[T; N],
    fallback: fn(usize, T) -> T,
) -> [T; N] {
    scalar::unary(a, fallback)
}

#[inline(always)]
pub(crate) fn binary_op<T: SimdElement, const N: usize>(
    _op: Binary,
    a: &[T; N],
    b: &[T; N],
    fallback: fn(usize, T, T) -> T,
) -> [T; N] {
    scalar::binary(a, b, fallback)
}

#[inline(always)]
pub(crate) fn ternary_op<T: SimdElement, const N: usize>(
    _op: Ternary,
    a: &[T; N],
    b: &[T; N],
    c: &[T; N],
    fallback: fn(usize, T, T, T) -> T,
) -> [T; N] {
    scalar::ternary(a, b, c, fallback)
}

#[inline(always)]
pub(crate) fn compare_op<T: SimdElement, const N: usize>(
    _op: Comparison,
    a: &[T; N],
    b: &[T; N],
    fallback: fn(usize, T, T) -> bool,
) -> [bool; N] {
    scalar::compare(a, b, fallback)
}

#[inline(always)]
pub(crate) fn test_op<T: SimdElement, const N: usize>(
    _op: Test,
    a: &[T; N],
    fallback: fn(usize, T) -> bool,
) -> [bool; N] {
    scalar::test(a, fallback)
}

/// Folds the lanes left to right, starting from `identity`. The fixed
/// evaluation order keeps floating-point reductions deterministic.
#[inline(always)]
pub(crate) fn reduce_op<T: SimdElement, const N: usize>(
    _op: Associative,
    a: &[T; N],
    identity: T,
    fallback: fn(usize, T, T) -> T,
) -> T {
    scalar::reduce(a, identity, fallback)
}

/// Gathers `a[sources[i]]` into lane `i`. Callers are responsible for
/// index validation; `sources` must already be fully in range.
#[inline(always)]
pub(crate) fn rearrange_op<T: SimdElement, const N: usize>(
    a: &[T; N],
    sources: &[i32; N],
) -> [T; N] {
    scalar::rearrange(a, sources)
}
