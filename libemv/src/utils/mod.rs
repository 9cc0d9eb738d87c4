//! Utilities for libemv: small byte-level helpers used across the crate.
//!
//! `hex` covers hex string conversion (track-2 digits, tag lookup keys and
//! log output); `bits` covers big-endian integer decoding and single-bit
//! manipulation.

pub mod bits;
pub mod hex;

// Re-export the helpers at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex(...)` etc.
pub use self::bits::*;
pub use self::hex::*;
