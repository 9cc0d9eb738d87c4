// libemv/src/protocol/dol.rs

//! Data object lists (PDOL, CDOL, ...): tag and length pairs without values,
//! sent by the card to ask the terminal for data.

use super::parser::Cursor;
use super::tlv::{Length, encode_length, encode_tlv, read_length, read_tag_id};
use crate::constants::{
    MAX_SHORT_LC, TTQ_CONTACTLESS_EMV_MODE_BIT, TTQ_LEN, TTQ_OFFLINE_ONLY_BIT,
};
use crate::tags::{self, TagCatalog, TagDescriptor};
use crate::utils::set_bit;
use crate::{Error, Result};

/// One requested data object: the tag and how many bytes the card wants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagAndLength {
    /// Requested tag.
    pub tag: TagDescriptor,
    /// Number of bytes the card wants.
    pub length: usize,
}

impl TagAndLength {
    /// Request `length` bytes of `tag`.
    pub fn new(tag: TagDescriptor, length: usize) -> Self {
        Self { tag, length }
    }

    /// Terminal-side value for this request, exactly `length` bytes long.
    ///
    /// Only the Terminal Transaction Qualifiers are filled in (contactless
    /// EMV mode supported, reader is offline only); every other tag gets
    /// zeros.
    pub fn construct_value(&self) -> Vec<u8> {
        let mut value = vec![0u8; self.length];
        if self.tag.matches(tags::TERMINAL_TRANSACTION_QUALIFIERS) {
            let mut ttq = [0u8; TTQ_LEN];
            ttq[0] = set_bit(ttq[0], TTQ_CONTACTLESS_EMV_MODE_BIT, true);
            ttq[0] = set_bit(ttq[0], TTQ_OFFLINE_ONLY_BIT, true);
            let n = ttq.len().min(value.len());
            value[..n].copy_from_slice(&ttq[..n]);
        }
        value
    }
}

/// Read tag and length pairs while at least two bytes remain. A pair that
/// cannot be decoded ends the list.
pub fn parse_tag_and_length_list(data: &[u8]) -> Vec<TagAndLength> {
    let mut cursor = Cursor::new(data);
    let mut out = Vec::new();
    while cursor.remaining() >= 2 {
        let id = match read_tag_id(&mut cursor) {
            Ok(id) => id,
            Err(e) => {
                log::trace!("dol: stopping at offset {}: {}", cursor.position(), e);
                break;
            }
        };
        let length = match read_length(&mut cursor) {
            Ok((Length::Definite(n), _)) => n,
            // A bare 0x80 is taken as a length of 128 here.
            Ok((Length::Indefinite, _)) => 0x80,
            Err(e) => {
                log::trace!("dol: stopping at offset {}: {}", cursor.position(), e);
                break;
            }
        };
        out.push(TagAndLength::new(TagCatalog::find(&id), length));
    }
    out
}

/// Encode a list back into DOL form (tag followed by length, no values).
pub fn encode_tag_and_length_list(list: &[TagAndLength]) -> Vec<u8> {
    let mut out = Vec::new();
    for item in list {
        out.extend_from_slice(item.tag.id());
        out.extend(encode_length(item.length));
    }
    out
}

/// Sum of the requested lengths, saturating.
pub fn total_length(list: &[TagAndLength]) -> usize {
    list.iter().fold(0, |acc, t| acc.saturating_add(t.length))
}

/// Build the GET PROCESSING OPTIONS data field: a command template (`83`)
/// holding the terminal values for every tag the PDOL requests. Without a
/// PDOL the template is empty (`83 00`).
///
/// The requested lengths are checked before any value is built; a template
/// that would not fit a short APDU is an `InvalidLength` error.
pub fn build_gpo_data(pdol: Option<&[u8]>) -> Result<Vec<u8>> {
    let list = pdol.map(parse_tag_and_length_list).unwrap_or_default();
    let total = total_length(&list);
    let encoded = total.saturating_add(1 + encode_length(total.min(MAX_SHORT_LC)).len());
    if encoded > MAX_SHORT_LC {
        return Err(Error::InvalidLength {
            expected: MAX_SHORT_LC,
            actual: encoded,
        });
    }

    let mut values = Vec::with_capacity(total);
    for item in &list {
        values.extend(item.construct_value());
    }
    Ok(encode_tlv(tags::COMMAND_TEMPLATE, &values))
}
