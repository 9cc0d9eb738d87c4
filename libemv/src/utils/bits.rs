//! Integer and single-bit helpers.
//!
//! Bit indices are zero based from the least significant bit, so bit 7 of a
//! byte is `0x80`.

use crate::{Error, Result};

/// Decode up to four big-endian bytes into an unsigned integer.
pub fn bytes_to_int(bytes: &[u8]) -> Result<u32> {
    if bytes.len() > 4 {
        return Err(Error::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        });
    }
    Ok(bytes.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
}

/// Return true when `bit_index` is set in `value`. Indices outside 0..=31
/// are never set.
pub fn is_bit_set(value: u32, bit_index: u32) -> bool {
    bit_index <= 31 && value & (1 << bit_index) != 0
}

/// Switch a single bit of `byte` on or off. `bit_index` must be in 0..=7.
pub fn set_bit(byte: u8, bit_index: u32, on: bool) -> u8 {
    debug_assert!(bit_index <= 7);
    let mask = 1u8 << (bit_index & 7);
    if on { byte | mask } else { byte & !mask }
}
