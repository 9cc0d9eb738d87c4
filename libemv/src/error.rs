// libemv/src/error.rs

//! Error and Result types

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The physical link failed (card pulled away, radio error, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// A buffer or field had the wrong size.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Size required.
        expected: usize,
        /// Size found.
        actual: usize,
    },

    /// Input ended in the middle of a field.
    #[error("unexpected end of data: needed {needed} bytes, {available} available")]
    UnexpectedEndOfData {
        /// Bytes the field needs.
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },

    /// Bytes that do not form a valid BER-TLV object.
    #[error("malformed tlv: {0}")]
    MalformedTlv(String),

    /// The card answered with a status word other than 9000.
    #[error("card rejected command: status=({sw1:#04x}, {sw2:#04x})")]
    StatusWord {
        /// Status byte 1
        sw1: u8,
        /// Status byte 2
        sw2: u8,
    },

    /// Text that is not an even run of hex digits.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The card was read but yielded no card number.
    #[error("no usable card data could be extracted")]
    NoUsableData,

    /// The request cannot be carried out as configured.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// True when the error originated on the physical link rather than in
    /// decoding or in the card's answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
