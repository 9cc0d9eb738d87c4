// libemv/src/card/track2.rs

//! Track 2 equivalent data: `PAN 'D' YYMM [service code] discretionary`,
//! read as a string of hex nibbles.

use crate::constants::{MAX_PAN_DIGITS, TRACK2_SEPARATOR};
use crate::utils::bytes_to_hex;

/// Fields of a parsed track 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track2 {
    /// Primary account number, 1 to 19 digits.
    pub pan: String,
    /// `YY`
    pub expiry_year: String,
    /// `MM`
    pub expiry_month: String,
    /// Three digits when present.
    pub service_code: Option<String>,
    /// Everything after the service code, padding nibble included.
    pub discretionary: String,
}

impl Track2 {
    /// Parse track 2 bytes. `None` when the nibbles do not start with 1 to 19
    /// digits, the separator and four expiry digits.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        Self::parse_str(&bytes_to_hex(raw))
    }

    /// Parse an upper-case nibble string such as
    /// `"4000000000000002D25121010000000000000F"`.
    pub fn parse_str(s: &str) -> Option<Self> {
        let pan_len = s.bytes().take_while(u8::is_ascii_digit).count();
        if pan_len == 0 || pan_len > MAX_PAN_DIGITS {
            return None;
        }
        let rest = s[pan_len..].strip_prefix(TRACK2_SEPARATOR)?;

        let expiry = leading_digits(rest, 4)?;
        let rest = &rest[4..];

        let service_code = leading_digits(rest, 3);
        let discretionary = match service_code {
            Some(_) => &rest[3..],
            None => rest,
        };

        Some(Self {
            pan: s[..pan_len].to_string(),
            expiry_year: expiry[..2].to_string(),
            expiry_month: expiry[2..].to_string(),
            service_code: service_code.map(str::to_string),
            discretionary: discretionary.to_string(),
        })
    }
}

fn leading_digits(s: &str, n: usize) -> Option<&str> {
    let head = s.get(..n)?;
    head.bytes().all(|b| b.is_ascii_digit()).then_some(head)
}
