// libemv/src/protocol/tlv.rs

//! BER-TLV decoding and encoding.
//!
//! ISO/IEC 7816 uses neither `00` nor `FF` as a tag value; those bytes may
//! appear as padding before, between and after objects and are skipped.

use super::parser::Cursor;
use crate::tags::{TagCatalog, TagDescriptor};
use crate::{Error, Result};

/// Longest tag identifier accepted, in bytes.
pub const MAX_TAG_ID_LEN: usize = 4;

/// Longest length field accepted (first byte plus big-endian octets).
pub const MAX_LENGTH_FIELD_LEN: usize = 4;

const INDEFINITE_LENGTH: u8 = 0x80;
const END_OF_CONTENTS: [u8; 2] = [0x00, 0x00];

/// One decoded data object. Value bytes are owned, so the response buffer
/// can be dropped once decoding is done.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TlvRecord {
    /// Tag of this object, a placeholder if it is not catalogued.
    pub tag: TagDescriptor,
    /// Number of value bytes. For indefinite-length objects this is the
    /// length recovered before the end-of-contents marker.
    pub length: usize,
    /// Length field exactly as it appeared on the wire.
    pub raw_length: Vec<u8>,
    /// Value bytes.
    pub value: Vec<u8>,
}

impl TlvRecord {
    /// Tag identifier bytes.
    pub fn tag_id(&self) -> &[u8] {
        self.tag.id()
    }

    /// The value holds nested objects.
    pub fn is_constructed(&self) -> bool {
        self.tag.is_constructed()
    }

    /// Encoded with the `80` indefinite length form.
    pub fn is_indefinite(&self) -> bool {
        self.raw_length == [INDEFINITE_LENGTH]
    }
}

/// Decoded length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// Exact number of value bytes.
    Definite(usize),
    /// Value runs until `00 00`.
    Indefinite,
}

pub(crate) fn is_padding(b: u8) -> bool {
    b == 0x00 || b == 0xFF
}

/// Read a tag identifier. When the low five bits of the first byte are all
/// set, continuation bytes follow for as long as bit 8 is set and the other
/// seven bits are not all zero.
pub fn read_tag_id(cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
    let first = cursor.read_u8()?;
    let mut id = vec![first];
    if first & 0x1F == 0x1F {
        loop {
            let next = cursor.read_u8()?;
            id.push(next);
            let more = next & 0x80 != 0 && next & 0x7F != 0;
            if !more {
                break;
            }
            if id.len() == MAX_TAG_ID_LEN {
                return Err(Error::MalformedTlv(format!(
                    "tag identifier longer than {} bytes",
                    MAX_TAG_ID_LEN
                )));
            }
        }
    }
    Ok(id)
}

/// Read a length field, returning the decoded length together with the raw
/// bytes that encoded it.
pub fn read_length(cursor: &mut Cursor<'_>) -> Result<(Length, Vec<u8>)> {
    let first = cursor.read_u8()?;
    if first < INDEFINITE_LENGTH {
        return Ok((Length::Definite(first as usize), vec![first]));
    }
    if first == INDEFINITE_LENGTH {
        return Ok((Length::Indefinite, vec![first]));
    }

    let count = (first & 0x7F) as usize;
    if count + 1 > MAX_LENGTH_FIELD_LEN {
        return Err(Error::MalformedTlv(format!(
            "length field of {} bytes exceeds {}",
            count + 1,
            MAX_LENGTH_FIELD_LEN
        )));
    }
    let octets = cursor.read_bytes(count)?;
    let len = octets.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);

    let mut raw = Vec::with_capacity(count + 1);
    raw.push(first);
    raw.extend_from_slice(octets);
    Ok((Length::Definite(len), raw))
}

/// Decode the next data object from `cursor`.
///
/// Returns `Ok(None)` once fewer than two non-padding bytes remain. On a
/// malformed object the cursor is left somewhere inside it; callers are
/// expected to stop scanning.
pub fn decode_next(cursor: &mut Cursor<'_>) -> Result<Option<TlvRecord>> {
    cursor.skip_while(is_padding);
    if cursor.remaining() < 2 {
        return Ok(None);
    }

    let id = read_tag_id(cursor)?;
    let (length, raw_length) = read_length(cursor)?;

    let value = match length {
        Length::Definite(n) => cursor.read_bytes(n)?.to_vec(),
        Length::Indefinite => {
            let end = cursor
                .rest()
                .windows(2)
                .position(|w| w == END_OF_CONTENTS)
                .ok_or_else(|| {
                    Error::MalformedTlv(
                        "indefinite length reached end of data before 00 00".to_string(),
                    )
                })?;
            let value = cursor.read_bytes(end)?.to_vec();
            cursor.read_bytes(END_OF_CONTENTS.len())?;
            value
        }
    };

    cursor.skip_while(is_padding);

    Ok(Some(TlvRecord {
        tag: TagCatalog::find(&id),
        length: value.len(),
        raw_length,
        value,
    }))
}

/// Decode every top-level object in `data`.
pub fn decode_all(data: &[u8]) -> Result<Vec<TlvRecord>> {
    let mut cursor = Cursor::new(data);
    let mut out = Vec::new();
    while let Some(record) = decode_next(&mut cursor)? {
        out.push(record);
    }
    Ok(out)
}

/// Encode a definite length: short form below 128, long form otherwise.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let octets: Vec<u8> = len
        .to_be_bytes()
        .iter()
        .copied()
        .skip_while(|&b| b == 0)
        .collect();
    let mut out = Vec::with_capacity(octets.len() + 1);
    out.push(0x80 | octets.len() as u8);
    out.extend(octets);
    out
}

/// Encode one primitive or constructed object with a definite length.
pub fn encode_tlv(tag: &[u8], value: &[u8]) -> Vec<u8> {
    let len = encode_length(value.len());
    let mut out = Vec::with_capacity(tag.len() + len.len() + value.len());
    out.extend_from_slice(tag);
    out.extend(len);
    out.extend_from_slice(value);
    out
}
