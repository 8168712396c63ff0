//! Typed and byte-order-aware loads and stores.
//!
//! These are the boundary primitives between vectors and flat buffers.
//! The range check is explicit and happens before any element moves:
//! a typed access needs `offset + N` elements, a byte access needs
//! `offset + N * LANE_BYTES` bytes. Byte accesses take a [`ByteOrder`]
//! deciding how each lane's bytes are arranged; the lane order itself is
//! always lane 0 first.

use crate::error;
use crate::simd::lane::SimdElement;
use crate::simd::vector::Vector;

/// Byte arrangement of a single lane in a byte buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl<T: SimdElement, const N: usize> Vector<T, N> {
    /// Loads `N` lanes from `slice` starting at `offset`, if the slice is
    /// long enough.
    #[inline(always)]
    pub fn try_from_slice(slice: &[T], offset: usize) -> error::Result<Self> {
        if offset.checked_add(N).is_none_or(|end| end > slice.len()) {
            return Err(error::out_of_bounds(offset, N, slice.len()));
        }
        Ok(Self::from_fn(|i| slice[offset + i]))
    }

    /// Loads `N` lanes from `slice` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + N > slice.len()`.
    #[inline(always)]
    pub fn from_slice(slice: &[T], offset: usize) -> Self {
        match Self::try_from_slice(slice, offset) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Stores the lanes into `dst` starting at `offset`, if `dst` is long
    /// enough.
    #[inline(always)]
    pub fn try_write_to_slice(self, dst: &mut [T], offset: usize) -> error::Result<()> {
        if offset.checked_add(N).is_none_or(|end| end > dst.len()) {
            return Err(error::out_of_bounds(offset, N, dst.len()));
        }
        let lanes = self.to_array();
        dst[offset..offset + N].copy_from_slice(&lanes);
        Ok(())
    }

    /// Stores the lanes into `dst` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + N > dst.len()`.
    #[inline(always)]
    pub fn write_to_slice(self, dst: &mut [T], offset: usize) {
        if let Err(e) = self.try_write_to_slice(dst, offset) {
            panic!("{e}");
        }
    }

    /// Loads `N` lanes from raw bytes starting at `offset`, if the buffer
    /// is long enough. Each lane occupies `LANE_BYTES` bytes in `order`.
    #[inline(always)]
    pub fn try_from_byte_slice(
        bytes: &[u8],
        offset: usize,
        order: ByteOrder,
    ) -> error::Result<Self> {
        let required = N * T::LANE_BYTES;
        if offset.checked_add(required).is_none_or(|end| end > bytes.len()) {
            return Err(error::out_of_bounds(offset, required, bytes.len()));
        }
        Ok(Self::from_fn(|i| {
            let lane = &bytes[offset + i * T::LANE_BYTES..][..T::LANE_BYTES];
            match order {
                ByteOrder::LittleEndian => T::read_le(lane),
                ByteOrder::BigEndian => T::read_be(lane),
            }
        }))
    }

    /// Loads `N` lanes from raw bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + N * LANE_BYTES > bytes.len()`.
    #[inline(always)]
    pub fn from_byte_slice(bytes: &[u8], offset: usize, order: ByteOrder) -> Self {
        match Self::try_from_byte_slice(bytes, offset, order) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Stores the lanes as raw bytes starting at `offset`, if the buffer
    /// is long enough.
    #[inline(always)]
    pub fn try_write_byte_slice(
        self,
        dst: &mut [u8],
        offset: usize,
        order: ByteOrder,
    ) -> error::Result<()> {
        let required = N * T::LANE_BYTES;
        if offset.checked_add(required).is_none_or(|end| end > dst.len()) {
            return Err(error::out_of_bounds(offset, required, dst.len()));
        }
        let lanes = self.to_array();
        for (i, lane) in lanes.iter().enumerate() {
            let out = &mut dst[offset + i * T::LANE_BYTES..][..T::LANE_BYTES];
            match order {
                ByteOrder::LittleEndian => lane.write_le(out),
                ByteOrder::BigEndian => lane.write_be(out),
            }
        }
        Ok(())
    }

    /// Stores the lanes as raw bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + N * LANE_BYTES > dst.len()`.
    #[inline(always)]
    pub fn write_byte_slice(self, dst: &mut [u8], offset: usize, order: ByteOrder) {
        if let Err(e) = self.try_write_byte_slice(dst, offset, order) {
            panic!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod typed_tests {
        use super::*;

        #[test]
        fn test_slice_roundtrip_with_offset() {
            let data = [9i32, 1, 2, 3, 4, 9];
            let v = Vector::<i32, 4>::from_slice(&data, 1);
            assert_eq!(v.to_array(), [1, 2, 3, 4]);

            let mut out = [0i32; 6];
            v.write_to_slice(&mut out, 2);
            assert_eq!(out, [0, 0, 1, 2, 3, 4]);
        }

        #[test]
        fn test_range_check() {
            let data = [0i32; 5];
            assert!(Vector::<i32, 4>::try_from_slice(&data, 1).is_ok());
            assert_eq!(
                Vector::<i32, 4>::try_from_slice(&data, 2),
                Err(error::out_of_bounds(2, 4, 5))
            );
        }

        #[test]
        #[should_panic(expected = "requires 4 elements")]
        fn test_load_past_end_panics() {
            let data = [0i32; 3];
            let _ = Vector::<i32, 4>::from_slice(&data, 0);
        }
    }

    mod byte_tests {
        use super::*;

        #[test]
        fn test_byte_order() {
            let bytes = [0x12u8, 0x34, 0x56, 0x78];
            let le = Vector::<i16, 2>::from_byte_slice(&bytes, 0, ByteOrder::LittleEndian);
            assert_eq!(le.to_array(), [0x3412, 0x7856]);
            let be = Vector::<i16, 2>::from_byte_slice(&bytes, 0, ByteOrder::BigEndian);
            assert_eq!(be.to_array(), [0x1234, 0x5678]);
        }

        #[test]
        fn test_byte_roundtrip_both_orders() {
            let v = Vector::<i64, 2>::from_array([i64::MIN, 0x0102_0304_0506_0708]);
            for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
                let mut buf = [0u8; 20];
                v.write_byte_slice(&mut buf, 4, order);
                let back = Vector::<i64, 2>::from_byte_slice(&buf, 4, order);
                assert_eq!(back, v);
            }
        }

        #[test]
        fn test_byte_range_check_uses_lane_bytes() {
            let buf = [0u8; 15];
            assert_eq!(
                Vector::<i32, 4>::try_from_byte_slice(&buf, 0, ByteOrder::LittleEndian),
                Err(error::out_of_bounds(0, 16, 15))
            );
        }

        #[test]
        fn test_float_bytes_preserve_bit_patterns() {
            let v = Vector::<f32, 4>::from_array([f32::NAN, -0.0, 1.0, f32::MIN_POSITIVE]);
            let mut buf = [0u8; 16];
            v.write_byte_slice(&mut buf, 0, ByteOrder::LittleEndian);
            let back = Vector::<f32, 4>::from_byte_slice(&buf, 0, ByteOrder::LittleEndian);
            for i in 0..4 {
                assert_eq!(back.lane(i).to_bits(), v.lane(i).to_bits());
            }
        }
    }
}
