//! Error types for lanewise operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.
//! Operations whose misuse is a programming error panic with the `Display`
//! text of the corresponding error; `try_*` entry points return it instead.

use std::fmt;

/// Errors that can occur during lanewise operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A (lane type, lane count) pair does not form a supported vector shape.
    UnsupportedShape {
        /// The total bit width that was requested.
        shape_bits: usize,
        /// Name of the lane type involved.
        lane_type: &'static str,
        /// Number of lanes requested.
        lane_count: usize,
    },
    /// A scalar value is not exactly representable in the target lane type.
    UnrepresentableValue {
        /// The offending value, rendered as text.
        value: String,
        /// Name of the target lane type.
        lane_type: &'static str,
    },
    /// A lane index, slice origin, part number or shuffle entry is out of range.
    IndexOutOfRange {
        /// What kind of index was out of range ("lane index", "origin", ...).
        what: &'static str,
        /// The offending index.
        index: i64,
        /// Inclusive lower bound of the valid range.
        lower: i64,
        /// Exclusive upper bound of the valid range.
        upper: i64,
    },
    /// A memory operation would read or write past the end of a buffer.
    OutOfBounds {
        /// Starting offset of the access.
        offset: usize,
        /// Number of elements or bytes the access requires.
        required: usize,
        /// Length of the buffer.
        len: usize,
    },
    /// Integer division or remainder by zero in an unmasked lane.
    DivisionByZero,
    /// The requested operator is not defined for the vector's lane type.
    UnsupportedOperation {
        /// Name of the operator token.
        op: &'static str,
        /// Name of the lane type it was applied to.
        lane_type: &'static str,
    },
    /// Two slices that must agree in length do not.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::UnsupportedShape {
                shape_bits,
                lane_type,
                lane_count,
            } => write!(
                f,
                "Unsupported vector shape: {} x {} = {} bits (supported shapes: 64, 128, 256, 512)",
                lane_count, lane_type, shape_bits
            ),
            VectorError::UnrepresentableValue { value, lane_type } => write!(
                f,
                "Value {} is not exactly representable as {}",
                value, lane_type
            ),
            VectorError::IndexOutOfRange {
                what,
                index,
                lower,
                upper,
            } => write!(
                f,
                "{} {} out of range [{}, {})",
                what, index, lower, upper
            ),
            VectorError::OutOfBounds {
                offset,
                required,
                len,
            } => write!(
                f,
                "Access at offset {} requires {} elements but the buffer holds {}",
                offset, required, len
            ),
            VectorError::DivisionByZero => {
                write!(f, "Integer division by zero in an unmasked lane")
            }
            VectorError::UnsupportedOperation { op, lane_type } => {
                write!(f, "Operator {} is not defined for {} lanes", op, lane_type)
            }
            VectorError::LengthMismatch { left, right } => write!(
                f,
                "Slices must have the same length (left: {}, right: {})",
                left, right
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Creates an unsupported-shape error.
pub fn unsupported_shape(
    shape_bits: usize,
    lane_type: &'static str,
    lane_count: usize,
) -> VectorError {
    VectorError::UnsupportedShape {
        shape_bits,
        lane_type,
        lane_count,
    }
}

/// Creates an unrepresentable-value error.
pub fn unrepresentable(value: impl ToString, lane_type: &'static str) -> VectorError {
    VectorError::UnrepresentableValue {
        value: value.to_string(),
        lane_type,
    }
}

/// Creates an index-out-of-range error for the half-open range `[lower, upper)`.
pub fn index_out_of_range(what: &'static str, index: i64, lower: i64, upper: i64) -> VectorError {
    VectorError::IndexOutOfRange {
        what,
        index,
        lower,
        upper,
    }
}

/// Creates a buffer out-of-bounds error.
pub fn out_of_bounds(offset: usize, required: usize, len: usize) -> VectorError {
    VectorError::OutOfBounds {
        offset,
        required,
        len,
    }
}

/// Creates a division-by-zero error.
pub fn division_by_zero() -> VectorError {
    VectorError::DivisionByZero
}

/// Creates an unsupported-operation error.
pub fn unsupported_operation(op: &'static str, lane_type: &'static str) -> VectorError {
    VectorError::UnsupportedOperation { op, lane_type }
}

/// Creates a length-mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> VectorError {
    VectorError::LengthMismatch { left, right }
}
