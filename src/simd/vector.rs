//! The generic vector value type and lane-wise operation dispatch.
//!
//! A [`Vector`] is an immutable, `Copy` sequence of exactly `N` lanes of
//! `T`. Every "modifying" operation returns a new vector; a vector is
//! never written after construction, so shared instances may be read from
//! any number of threads freely.
//!
//! # Dispatch protocol
//!
//! A lane-wise call travels through a fixed pipeline:
//!
//! 1. species compatibility is enforced by the type system (both operands
//!    are `Vector<T, N>`);
//! 2. the operator token's capability flags are checked against the lane
//!    kind, rejecting e.g. `LSHL` on `f32` lanes;
//! 3. *special* tokens are rewritten into simpler ones
//!    (`NOT(x) = XOR(x, -1)`, `AND_NOT(a, b) = AND(a, NOT(b))`,
//!    `ROL(x, n) = OR(LSHL(x, n), LSHR(x, -n))`, ...);
//! 4. shift counts are reduced modulo the lane bit width;
//! 5. the operation is handed to the [backend](crate::simd::backend)
//!    together with its scalar fallback closure.
//!
//! # Masking
//!
//! `lanewise*_masked(op, ..., mask)` is equivalent to computing the
//! unmasked result and blending it with the first operand under the mask
//! — except where the unmasked computation could fault. Integer division
//! is the one hazardous case: a zero divisor in a *set* lane is an error,
//! while a zero divisor in an *unset* lane is silently suppressed by
//! replacing it before the division executes. A masked-off lane never
//! raises an error.

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use num::traits::AsPrimitive;

use crate::error;
use crate::simd::backend;
use crate::simd::lane::{lane_uge, lane_ugt, FloatingElement, IntegralElement, SimdElement};
use crate::simd::mask::Mask;
use crate::simd::ops::{Associative, Binary, Comparison, Ternary, Test, Unary};
use crate::simd::species::Species;

/// An immutable sequence of `N` lanes of `T`, tied to the species `(T, N)`.
pub struct Vector<T: SimdElement, const N: usize> {
    lanes: [T; N],
}

impl<T: SimdElement, const N: usize> Clone for Vector<T, N> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const N: usize> Copy for Vector<T, N> {}

impl<T: SimdElement, const N: usize> PartialEq for Vector<T, N> {
    /// Lane-wise value equality, with the lane type's own semantics
    /// (`NaN != NaN` on floating lanes).
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.lanes == other.lanes
    }
}

impl<T: SimdElement, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector[{}x{}]{:?}", T::KIND.name(), N, self.lanes)
    }
}

impl<T: SimdElement, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lane}")?;
        }
        write!(f, "]")
    }
}

impl<T: SimdElement, const N: usize> Vector<T, N> {
    /// The species this vector belongs to.
    #[inline(always)]
    pub fn species(self) -> Species<T, N> {
        Species::of()
    }

    /// Wraps a lane array as a vector.
    #[inline(always)]
    pub fn from_array(lanes: [T; N]) -> Self {
        Species::<T, N>::check_shape();
        Vector { lanes }
    }

    /// Builds a vector by evaluating `f` on every lane index.
    #[inline(always)]
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut lanes = [T::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = f(i);
        }
        Self::from_array(lanes)
    }

    /// The vector with every lane set to `e`.
    #[inline(always)]
    pub fn broadcast(e: T) -> Self {
        Self::from_array([e; N])
    }

    /// The lane values as an array.
    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.lanes
    }

    /// Value of lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline(always)]
    pub fn lane(self, i: usize) -> T {
        assert!(
            i < N,
            "{}",
            error::index_out_of_range("lane index", i as i64, 0, N as i64)
        );
        self.lanes[i]
    }

    /// A copy of this vector with lane `i` replaced by `e`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline(always)]
    pub fn with_lane(self, i: usize, e: T) -> Self {
        assert!(
            i < N,
            "{}",
            error::index_out_of_range("lane index", i as i64, 0, N as i64)
        );
        let mut lanes = self.lanes;
        lanes[i] = e;
        Vector { lanes }
    }

    /// Selects per lane between `self` (where the mask is unset) and
    /// `other` (where it is set).
    #[inline(always)]
    pub fn blend(self, other: Self, m: Mask<T, N>) -> Self {
        let bits = m.to_array();
        Self::from_fn(|i| if bits[i] { other.lanes[i] } else { self.lanes[i] })
    }

    /// Selects per lane between `self` (where the mask is unset) and the
    /// broadcast scalar `e` (where it is set).
    #[inline(always)]
    pub fn blend_scalar(self, e: T, m: Mask<T, N>) -> Self {
        self.blend(Self::broadcast(e), m)
    }

    /// Rejects an operator token that is undefined for this lane kind.
    #[inline(always)]
    fn require(supported: bool, name: &'static str) {
        assert!(
            supported,
            "{}",
            error::unsupported_operation(name, T::KIND.name())
        );
    }

    /// The mask of lanes whose raw bit pattern is nonzero.
    #[inline(always)]
    fn nonzero_bits_mask(self) -> Mask<T, N> {
        Mask::from_fn(|i| self.lanes[i].bits_nonzero())
    }

    // --- lane-wise dispatch -------------------------------------------------

    /// Executes a unary token through the backend, bypassing rewrites.
    #[inline(always)]
    fn unary_backend(self, op: Unary) -> Self {
        let f: fn(usize, T) -> T = match op {
            Unary::Neg => |_, a| a.lane_neg(),
            Unary::Abs => |_, a| a.lane_abs(),
            Unary::Not => |_, a| a.lane_not(),
            Unary::Zomo => |_, a| if a.bits_nonzero() { T::ALL_BITS } else { T::ZERO },
            Unary::BitCount => |_, a| a.lane_bit_count(),
            Unary::Sqrt => |_, a| a.lane_sqrt(),
        };
        Vector {
            lanes: backend::unary_op(op, &self.lanes, f),
        }
    }

    /// Executes a binary token through the backend, bypassing the
    /// capability check and rewrites. Shift counts are reduced modulo the
    /// lane width inside the fallback, so pre-masked and raw counts agree.
    #[inline(always)]
    fn binary_backend(self, op: Binary, other: Self) -> Self {
        let f: fn(usize, T, T) -> T = match op {
            Binary::Add => |_, a, b| a.lane_add(b),
            Binary::Sub => |_, a, b| a.lane_sub(b),
            Binary::Mul => |_, a, b| a.lane_mul(b),
            Binary::Div => |_, a, b| a.lane_div(b),
            Binary::Min => |_, a, b| a.lane_min(b),
            Binary::Max => |_, a, b| a.lane_max(b),
            Binary::And => |_, a, b| a.lane_and(b),
            Binary::AndNot => |_, a, b| a.lane_and(b.lane_not()),
            Binary::Or => |_, a, b| a.lane_or(b),
            Binary::Xor => |_, a, b| a.lane_xor(b),
            Binary::FirstNonzero => |_, a, b| if a.bits_nonzero() { a } else { b },
            Binary::Lshl => |_, a, n| a.lane_shl(shift_count::<T>(n)),
            Binary::Lshr => |_, a, n| a.lane_lshr(shift_count::<T>(n)),
            Binary::Ashr => |_, a, n| a.lane_ashr(shift_count::<T>(n)),
            Binary::Rol => |_, a, n| {
                let bits = T::LANE_BITS as u32;
                let c = shift_count::<T>(n);
                a.lane_shl(c).lane_or(a.lane_lshr((bits - c) % bits))
            },
            Binary::Ror => |_, a, n| {
                let bits = T::LANE_BITS as u32;
                let c = shift_count::<T>(n);
                a.lane_lshr(c).lane_or(a.lane_shl((bits - c) % bits))
            },
        };
        Vector {
            lanes: backend::binary_op(op, &self.lanes, &other.lanes, f),
        }
    }

    /// Applies a unary operator to every lane.
    ///
    /// # Panics
    ///
    /// Panics if the token is undefined for this lane kind.
    #[inline(always)]
    pub fn lanewise_unary(self, op: Unary) -> Self {
        Self::require(op.supported_for(T::KIND), op.name());
        if op.is_special() {
            // Fixed rewrites into simpler tokens, applied before dispatch
            match op {
                Unary::Not => {
                    return self.binary_backend(Binary::Xor, Self::broadcast(T::ALL_BITS));
                }
                Unary::Neg if T::KIND.is_integral() => {
                    return Self::broadcast(T::ZERO).binary_backend(Binary::Sub, self);
                }
                Unary::Zomo => {
                    return Self::broadcast(T::ZERO)
                        .blend(Self::broadcast(T::ALL_BITS), self.nonzero_bits_mask());
                }
                // floating NEG executes directly so that NEG(0.0) is -0.0
                _ => {}
            }
        }
        self.unary_backend(op)
    }

    /// Masked form of [`Vector::lanewise_unary`]: unset lanes keep their
    /// original value.
    #[inline(always)]
    pub fn lanewise_unary_masked(self, op: Unary, m: Mask<T, N>) -> Self {
        self.blend(self.lanewise_unary(op), m)
    }

    /// Applies a binary operator to corresponding lanes of `self` and
    /// `other`.
    ///
    /// # Panics
    ///
    /// Panics if the token is undefined for this lane kind, or on integer
    /// division when `other` has any zero lane.
    #[inline(always)]
    pub fn lanewise(self, op: Binary, other: Self) -> Self {
        Self::require(op.supported_for(T::KIND), op.name());
        let mut that = other;
        let mut op = op;
        if op.is_special() || op.is_shift() {
            if op == Binary::FirstNonzero {
                // Zero the second operand where the first is already
                // nonzero, then merge the disjoint bit patterns with OR.
                that = that.blend(Self::broadcast(T::ZERO), self.nonzero_bits_mask());
                return self.binary_backend(Binary::Or, that);
            }
            if op.is_shift() {
                // Reduce every shift count modulo the lane width before
                // dispatch; out-of-range counts must behave identically on
                // every backend.
                let width_mask = Self::broadcast(T::from_lane_index(T::LANE_BITS - 1));
                that = that.binary_backend(Binary::And, width_mask);
            }
            match op {
                Binary::Rol | Binary::Ror => {
                    let neg = Self::broadcast(T::ZERO).binary_backend(Binary::Sub, that);
                    let (hi_n, lo_n) = if op == Binary::Rol {
                        (that, neg)
                    } else {
                        (neg, that)
                    };
                    let hi = self.lanewise(Binary::Lshl, hi_n);
                    let lo = self.lanewise(Binary::Lshr, lo_n);
                    return hi.binary_backend(Binary::Or, lo);
                }
                Binary::AndNot => {
                    that = that.lanewise_unary(Unary::Not);
                    op = Binary::And;
                }
                Binary::Div if T::KIND.is_integral() => {
                    let eqz = that.compare(Comparison::Eq, Self::broadcast(T::ZERO));
                    assert!(!eqz.any_true(), "{}", error::division_by_zero());
                }
                _ => {}
            }
        }
        self.binary_backend(op, that)
    }

    /// Masked form of [`Vector::lanewise`]: unset lanes keep the value of
    /// `self`.
    ///
    /// Equivalent to `self.blend(self.lanewise(op, other), m)` for every
    /// non-hazardous token. For integer DIV, zero divisors in unset lanes
    /// are suppressed *before* the division executes: only a zero divisor
    /// in a set lane is an error.
    ///
    /// # Panics
    ///
    /// Panics if the token is undefined for this lane kind, or on integer
    /// division when `other` has a zero lane where `m` is set.
    #[inline(always)]
    pub fn lanewise_masked(self, op: Binary, other: Self, m: Mask<T, N>) -> Self {
        if op == Binary::Div && T::KIND.is_integral() {
            let eqz = other.compare(Comparison::Eq, Self::broadcast(T::ZERO));
            assert!(!(eqz & m).any_true(), "{}", error::division_by_zero());
            // Replace the suppressed zero divisors so the full-width
            // division cannot fault, then blend the hazard lanes away.
            let safe = other.blend(other.lanewise_unary(Unary::Not), eqz);
            return self.blend(self.lanewise(op, safe), m);
        }
        self.blend(self.lanewise(op, other), m)
    }

    /// Broadcast-operand form of [`Vector::lanewise`].
    #[inline(always)]
    pub fn lanewise_scalar(self, op: Binary, e: T) -> Self {
        self.lanewise(op, Self::broadcast(e))
    }

    /// Broadcast-operand form of [`Vector::lanewise_masked`].
    #[inline(always)]
    pub fn lanewise_scalar_masked(self, op: Binary, e: T, m: Mask<T, N>) -> Self {
        self.lanewise_masked(op, Self::broadcast(e), m)
    }

    /// Applies a ternary operator to corresponding lanes of the three
    /// operands.
    ///
    /// # Panics
    ///
    /// Panics if the token is undefined for this lane kind.
    #[inline(always)]
    pub fn lanewise_ternary(self, op: Ternary, b: Self, c: Self) -> Self {
        Self::require(op.supported_for(T::KIND), op.name());
        if op.is_special() {
            // BITWISE_BLEND(a, b, c) = a ^ ((a ^ b) & c)
            let picked = self.binary_backend(Binary::Xor, b).binary_backend(Binary::And, c);
            return self.binary_backend(Binary::Xor, picked);
        }
        let f: fn(usize, T, T, T) -> T = match op {
            Ternary::Fma => |_, a, b, c| a.lane_fma(b, c),
            Ternary::BitwiseBlend => |_, a, b, c| {
                a.lane_and(c.lane_not()).lane_or(b.lane_and(c))
            },
        };
        Vector {
            lanes: backend::ternary_op(op, &self.lanes, &b.lanes, &c.lanes, f),
        }
    }

    /// Masked form of [`Vector::lanewise_ternary`]: unset lanes keep the
    /// value of `self`.
    #[inline(always)]
    pub fn lanewise_ternary_masked(self, op: Ternary, b: Self, c: Self, m: Mask<T, N>) -> Self {
        self.blend(self.lanewise_ternary(op, b, c), m)
    }

    // --- comparisons and tests ----------------------------------------------

    /// Compares corresponding lanes, producing the mask of lanes where the
    /// predicate holds.
    ///
    /// # Panics
    ///
    /// Panics if an unsigned predicate is applied to floating lanes.
    #[inline(always)]
    pub fn compare(self, op: Comparison, other: Self) -> Mask<T, N> {
        Self::require(op.supported_for(T::KIND), op.name());
        let f: fn(usize, T, T) -> bool = match op {
            Comparison::Eq => |_, a, b| a == b,
            Comparison::Ne => |_, a, b| a != b,
            Comparison::Lt => |_, a, b| a < b,
            Comparison::Le => |_, a, b| a <= b,
            Comparison::Gt => |_, a, b| a > b,
            Comparison::Ge => |_, a, b| a >= b,
            Comparison::Ult => |_, a, b| a.lane_ult(b),
            Comparison::Ule => |_, a, b| a.lane_ule(b),
            Comparison::Ugt => |_, a, b| lane_ugt(a, b),
            Comparison::Uge => |_, a, b| lane_uge(a, b),
        };
        Mask::from_array(backend::compare_op(op, &self.lanes, &other.lanes, f))
    }

    /// Broadcast-operand form of [`Vector::compare`].
    #[inline(always)]
    pub fn compare_scalar(self, op: Comparison, e: T) -> Mask<T, N> {
        self.compare(op, Self::broadcast(e))
    }

    /// Masked comparison: the comparison result intersected with `m`.
    /// Comparisons cannot fault, so masking is plain intersection.
    #[inline(always)]
    pub fn compare_masked(self, op: Comparison, other: Self, m: Mask<T, N>) -> Mask<T, N> {
        self.compare(op, other).and(m)
    }

    /// Tests every lane, producing the mask of lanes where the test holds.
    ///
    /// # Panics
    ///
    /// Panics if a floating-only test is applied to integral lanes.
    #[inline(always)]
    pub fn test(self, op: Test) -> Mask<T, N> {
        Self::require(op.supported_for(T::KIND), op.name());
        let f: fn(usize, T) -> bool = match op {
            Test::IsDefault => |_, a| !a.bits_nonzero(),
            Test::IsNegative => |_, a| a.sign_bit(),
            Test::IsNan => |_, a| a.lane_is_nan(),
            Test::IsFinite => |_, a| a.lane_is_finite(),
            Test::IsInfinite => |_, a| a.lane_is_infinite(),
        };
        Mask::from_array(backend::test_op(op, &self.lanes, f))
    }

    /// Masked test: the test result intersected with `m`.
    #[inline(always)]
    pub fn test_masked(self, op: Test, m: Mask<T, N>) -> Mask<T, N> {
        self.test(op).and(m)
    }

    // --- reductions ---------------------------------------------------------

    /// Folds all lanes into one scalar with an associative operator.
    ///
    /// Evaluation is sequential from lane 0 upward, seeded with the
    /// operator's identity; floating ADD and MUL therefore produce one
    /// deterministic association on every platform. FIRST_NONZERO is a
    /// left-to-right scan for the lowest lane with a nonzero bit pattern,
    /// returning `0` when there is none.
    ///
    /// # Panics
    ///
    /// Panics if the token is undefined for this lane kind.
    #[inline(always)]
    pub fn reduce(self, op: Associative) -> T {
        Self::require(op.supported_for(T::KIND), op.name());
        if op == Associative::FirstNonzero {
            return match self.nonzero_bits_mask().first_true() {
                Some(i) => self.lanes[i],
                None => T::ZERO,
            };
        }
        let f: fn(usize, T, T) -> T = match op {
            Associative::Add => |_, acc, x| acc.lane_add(x),
            Associative::Mul => |_, acc, x| acc.lane_mul(x),
            Associative::Min => |_, acc, x| acc.lane_min(x),
            Associative::Max => |_, acc, x| acc.lane_max(x),
            Associative::And => |_, acc, x| acc.lane_and(x),
            Associative::Or => |_, acc, x| acc.lane_or(x),
            Associative::Xor => |_, acc, x| acc.lane_xor(x),
            Associative::FirstNonzero => |_, acc, x| if acc.bits_nonzero() { acc } else { x },
        };
        backend::reduce_op(op, &self.lanes, op.identity::<T>(), f)
    }

    /// Masked reduction: unset lanes contribute the operator's identity.
    ///
    /// A reduction over an all-unset mask returns exactly the identity
    /// (`1` for MUL, `0` for ADD, and so on).
    #[inline(always)]
    pub fn reduce_masked(self, op: Associative, m: Mask<T, N>) -> T {
        Self::require(op.supported_for(T::KIND), op.name());
        Self::broadcast(op.identity::<T>()).blend(self, m).reduce(op)
    }

    // --- named conveniences -------------------------------------------------

    /// Lane-wise wrapping addition.
    #[inline(always)]
    pub fn add_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Add, other)
    }

    /// Masked lane-wise addition.
    #[inline(always)]
    pub fn add_masked(self, other: Self, m: Mask<T, N>) -> Self {
        self.lanewise_masked(Binary::Add, other, m)
    }

    /// Lane-wise wrapping subtraction.
    #[inline(always)]
    pub fn sub_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Sub, other)
    }

    /// Masked lane-wise subtraction.
    #[inline(always)]
    pub fn sub_masked(self, other: Self, m: Mask<T, N>) -> Self {
        self.lanewise_masked(Binary::Sub, other, m)
    }

    /// Lane-wise wrapping multiplication.
    #[inline(always)]
    pub fn mul_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Mul, other)
    }

    /// Masked lane-wise multiplication.
    #[inline(always)]
    pub fn mul_masked(self, other: Self, m: Mask<T, N>) -> Self {
        self.lanewise_masked(Binary::Mul, other, m)
    }

    /// Lane-wise division; see [`Vector::lanewise`] for the integer
    /// zero-divisor rule.
    #[inline(always)]
    pub fn div_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Div, other)
    }

    /// Masked lane-wise division; see [`Vector::lanewise_masked`] for the
    /// hazard-suppression rule.
    #[inline(always)]
    pub fn div_masked(self, other: Self, m: Mask<T, N>) -> Self {
        self.lanewise_masked(Binary::Div, other, m)
    }

    /// Lane-wise minimum.
    #[inline(always)]
    pub fn min_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Min, other)
    }

    /// Masked lane-wise minimum.
    #[inline(always)]
    pub fn min_masked(self, other: Self, m: Mask<T, N>) -> Self {
        self.lanewise_masked(Binary::Min, other, m)
    }

    /// Lane-wise maximum.
    #[inline(always)]
    pub fn max_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Max, other)
    }

    /// Masked lane-wise maximum.
    #[inline(always)]
    pub fn max_masked(self, other: Self, m: Mask<T, N>) -> Self {
        self.lanewise_masked(Binary::Max, other, m)
    }

    /// Lane-wise wrapping absolute value.
    #[inline(always)]
    pub fn abs(self) -> Self {
        self.lanewise_unary(Unary::Abs)
    }

    /// Lane-wise negation.
    #[inline(always)]
    pub fn neg_lanes(self) -> Self {
        self.lanewise_unary(Unary::Neg)
    }

    /// The mask of lanes equal to the corresponding lane of `other`.
    #[inline(always)]
    pub fn eq_lanes(self, other: Self) -> Mask<T, N> {
        self.compare(Comparison::Eq, other)
    }

    /// The mask of lanes less than the corresponding lane of `other`.
    #[inline(always)]
    pub fn lt_lanes(self, other: Self) -> Mask<T, N> {
        self.compare(Comparison::Lt, other)
    }
}

impl<T: IntegralElement, const N: usize> Vector<T, N> {
    /// Lane-wise bitwise AND.
    #[inline(always)]
    pub fn and_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::And, other)
    }

    /// Lane-wise bitwise OR.
    #[inline(always)]
    pub fn or_lanes(self, other: Self) -> Self {
        self.lanewise(Binary::Or, other)
    }
}

impl<T: FloatingElement, const N: usize> Vector<T, N> {
    /// Lane-wise square root.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        self.lanewise_unary(Unary::Sqrt)
    }

    /// Lane-wise fused multiply-add `self * b + c`.
    #[inline(always)]
    pub fn fma(self, b: Self, c: Self) -> Self {
        self.lanewise_ternary(Ternary::Fma, b, c)
    }
}

/// Reduces a shift-count lane modulo the lane bit width.
#[inline(always)]
fn shift_count<T: SimdElement>(n: T) -> u32 {
    (n.as_() & (T::LANE_BITS as i64 - 1)) as u32
}

// Operator sugar. The token API above is the primary surface; these make
// expression-shaped code read naturally.

impl<T: SimdElement, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.lanewise(Binary::Add, rhs)
    }
}

impl<T: SimdElement, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.lanewise(Binary::Sub, rhs)
    }
}

impl<T: SimdElement, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.lanewise(Binary::Mul, rhs)
    }
}

impl<T: SimdElement, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    /// Lane-wise division.
    ///
    /// # Panics
    ///
    /// Panics on integer lanes if `rhs` contains a zero lane.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.lanewise(Binary::Div, rhs)
    }
}

impl<T: SimdElement, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.lanewise_unary(Unary::Neg)
    }
}

impl<T: IntegralElement, const N: usize> BitAnd for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.lanewise(Binary::And, rhs)
    }
}

impl<T: IntegralElement, const N: usize> BitOr for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.lanewise(Binary::Or, rhs)
    }
}

impl<T: IntegralElement, const N: usize> BitXor for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        self.lanewise(Binary::Xor, rhs)
    }
}

impl<T: IntegralElement, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.lanewise_unary(Unary::Not)
    }
}
