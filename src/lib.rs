//! Portable SIMD abstraction: fixed-width vectors of numeric lanes with
//! lane-wise arithmetic, masked execution, cross-lane movement and
//! bit-reinterpretation, uniform across lane types and vector shapes.
//!
//! ```rust
//! use lanewise::simd::ops::Binary;
//! use lanewise::simd::{Mask, Species};
//!
//! let s = Species::<i32, 4>::of();
//! let a = s.from_array([1, 2, 3, 4]);
//! let b = s.broadcast(10);
//! let m = Mask::from_array([true, false, true, false]);
//! assert_eq!(a.lanewise_masked(Binary::Add, b, m).to_array(), [11, 2, 13, 4]);
//! ```

pub mod error;
pub mod simd;
