// libemv/src/types.rs

//! Shared value types

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Class of a BER-TLV tag, bits 8-7 of the first identifier byte.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    /// Bits 00.
    #[display(fmt = "universal")]
    Universal,
    /// Bits 01.
    #[display(fmt = "application")]
    Application,
    /// Bits 10.
    #[display(fmt = "context-specific")]
    ContextSpecific,
    /// Bits 11.
    #[display(fmt = "private")]
    Private,
}

impl TagClass {
    /// Class encoded in the first identifier byte.
    pub fn from_first_byte(b: u8) -> Self {
        match (b >> 6) & 0x03 {
            0x01 => Self::Application,
            0x02 => Self::ContextSpecific,
            0x03 => Self::Private,
            _ => Self::Universal,
        }
    }
}

/// Bit 6 of the first identifier byte.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagStructure {
    /// The value is a data element.
    #[display(fmt = "primitive")]
    Primitive,
    /// The value is itself a sequence of TLV objects (a template).
    #[display(fmt = "constructed")]
    Constructed,
}

impl TagStructure {
    /// Structure encoded in the first identifier byte.
    pub fn from_first_byte(b: u8) -> Self {
        if b & 0x20 != 0 {
            Self::Constructed
        } else {
            Self::Primitive
        }
    }
}

/// Hint about how the value bytes of a tag are formatted.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// Raw bytes.
    #[display(fmt = "binary")]
    Binary,
    /// BCD digits.
    #[display(fmt = "numeric")]
    Numeric,
    /// Alphanumeric text.
    #[display(fmt = "text")]
    Text,
    /// Digits and text mixed.
    #[display(fmt = "mixed")]
    Mixed,
    /// A data object list.
    #[display(fmt = "dol")]
    Dol,
    /// Nested data objects.
    #[display(fmt = "template")]
    Template,
}

/// Application identifier - Newtype Pattern (5-16 bytes on real cards,
/// but directory entries are taken as-is).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid(Vec<u8>);

impl Aid {
    /// Wrap identifier bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Upper-case hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Registered application provider identifier (first five bytes).
    pub fn rid(&self) -> Option<&[u8]> {
        self.0.get(..5)
    }

    /// Append extra bytes (e.g. a kernel identifier) to the identifier.
    pub fn extend(&mut self, suffix: &[u8]) {
        self.0.extend_from_slice(suffix);
    }
}

impl From<Vec<u8>> for Aid {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for Aid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// One entry of an Application File Locator: a record range inside a
/// short file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationFileLocator {
    /// Short file identifier.
    pub sfi: u8,
    /// First record to read.
    pub first_record: u8,
    /// Last record to read, inclusive.
    pub last_record: u8,
    /// Records of this range take part in offline data authentication.
    pub offline_authentication: bool,
}

impl ApplicationFileLocator {
    /// Split AFL bytes into 4-byte groups. A trailing partial group is
    /// ignored.
    pub fn parse_list(afl: &[u8]) -> Vec<Self> {
        afl.chunks_exact(4)
            .filter_map(|chunk| Self::try_from(chunk).ok())
            .collect()
    }

    /// Record numbers covered by this entry, in ascending order. Empty when
    /// the range is inverted.
    pub fn records(&self) -> std::ops::RangeInclusive<u8> {
        self.first_record..=self.last_record
    }
}

impl TryFrom<&[u8]> for ApplicationFileLocator {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            sfi: bytes[0] >> 3,
            first_record: bytes[1],
            last_record: bytes[2],
            offline_authentication: bytes[3] & 0x01 == 0x01,
        })
    }
}
