//! Per-shape vector aliases.
//!
//! One alias per supported (lane type, shape) pairing; each is a plain
//! instantiation of the generic [`Vector`] and adds no semantics of its
//! own. The [`preferred`] module names the widest shape the build
//! platform supports, per lane type.

use crate::simd::vector::Vector;

macro_rules! shape_aliases {
    ($($name:ident = $ty:ty | $n:literal @ $bits:literal;)*) => {
        $(
            #[doc = concat!(
                "`", stringify!($n), "` lanes of `", stringify!($ty),
                "` in a ", stringify!($bits), "-bit vector."
            )]
            pub type $name = Vector<$ty, $n>;
        )*
    };
}

shape_aliases! {
    I8x8 = i8 | 8 @ 64;
    I16x4 = i16 | 4 @ 64;
    I32x2 = i32 | 2 @ 64;
    I64x1 = i64 | 1 @ 64;
    F32x2 = f32 | 2 @ 64;
    F64x1 = f64 | 1 @ 64;

    I8x16 = i8 | 16 @ 128;
    I16x8 = i16 | 8 @ 128;
    I32x4 = i32 | 4 @ 128;
    I64x2 = i64 | 2 @ 128;
    F32x4 = f32 | 4 @ 128;
    F64x2 = f64 | 2 @ 128;

    I8x32 = i8 | 32 @ 256;
    I16x16 = i16 | 16 @ 256;
    I32x8 = i32 | 8 @ 256;
    I64x4 = i64 | 4 @ 256;
    F32x8 = f32 | 8 @ 256;
    F64x4 = f64 | 4 @ 256;

    I8x64 = i8 | 64 @ 512;
    I16x32 = i16 | 32 @ 512;
    I32x16 = i32 | 16 @ 512;
    I64x8 = i64 | 8 @ 512;
    F32x16 = f32 | 16 @ 512;
    F64x8 = f64 | 8 @ 512;
}

/// The platform-preferred (widest supported) shape per lane type,
/// selected by the build-time CPU feature probe.
pub mod preferred {
    #[cfg(avx512)]
    pub use super::{
        F32x16 as F32, F64x8 as F64, I16x32 as I16, I32x16 as I32, I64x8 as I64, I8x64 as I8,
    };

    #[cfg(avx2)]
    pub use super::{
        F32x8 as F32, F64x4 as F64, I16x16 as I16, I32x8 as I32, I64x4 as I64, I8x32 as I8,
    };

    #[cfg(any(sse, neon, fallback))]
    pub use super::{
        F32x4 as F32, F64x2 as F64, I16x8 as I16, I32x4 as I32, I64x2 as I64, I8x16 as I8,
    };
}
