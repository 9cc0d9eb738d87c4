//! Hexadecimal helpers used for track-2 decoding, tag lookup and logging.
//!
//! Output is upper-case to match how EMV tags and AIDs are usually written
//! (`9F38`, `A0000000031010`). The parser accepts either case and ignores
//! ASCII whitespace so fixtures can be written as `"6F 1A 84 0E"`.

use crate::{Error, Result};

/// Convert a byte slice to an upper-case hex string without separators.
///
/// Example: `&[0x9f, 0x38]` -> `"9F38"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Convert a byte slice to an upper-case hex string with a single space
/// between each byte.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidHex("hex string has odd length".to_string()));
    }

    ::hex::decode(&cleaned).map_err(|e| Error::InvalidHex(format!("'{}': {}", s, e)))
}
