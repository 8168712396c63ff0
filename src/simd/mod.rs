//! The portable SIMD model: species, vectors, masks and shuffles.
//!
//! Values come in three kinds, all immutable and all tied to a
//! [`Species`] — a (lane type, lane count) pair carried in the type
//! parameters:
//!
//! - [`Vector`]: `N` numeric lanes, with lane-wise arithmetic,
//!   comparisons, reductions, cross-lane movement and conversions;
//! - [`Mask`]: `N` booleans gating masked operations;
//! - [`Shuffle`]: `N` source indexes steering rearrangement.
//!
//! Operations are named by tokens from [`ops`] and executed through the
//! scalar-fallback contract in [`backend`](self); the supported shapes
//! and the platform-preferred width live in [`species`].

pub mod apply;
pub(crate) mod backend;
pub mod lane;
pub mod mask;
pub mod memory;
pub mod ops;
pub mod shuffle;
pub mod species;
pub mod types;
pub mod vector;

mod cast;
mod motion;

pub use lane::{ElementKind, FloatingElement, IntegralElement, SimdElement};
pub use mask::Mask;
pub use memory::ByteOrder;
pub use shuffle::Shuffle;
pub use species::{preferred_lane_count, Species, PREFERRED_BITS};
pub use vector::Vector;
