// libemv/src/protocol/search.rs

//! Depth-first tag search over BER-TLV buffers.
//!
//! Constructed objects that do not match are searched recursively before the
//! scan moves on, so results come back in encoding order. Templates nested
//! deeper than [`MAX_NESTING`] are treated as malformed.

use super::parser::Cursor;
use super::tlv::{TlvRecord, decode_next};
use crate::{Error, Result};

/// Deepest template nesting the search descends into. EMV responses use a
/// handful of levels.
pub const MAX_NESTING: usize = 32;

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_NESTING {
        return Err(Error::MalformedTlv(format!(
            "templates nested deeper than {}",
            MAX_NESTING
        )));
    }
    Ok(())
}

fn wanted(record: &TlvRecord, tags: &[&[u8]]) -> bool {
    tags.iter().any(|t| record.tag.matches(t))
}

/// Value of the first object whose tag is in `tags`, or `Ok(None)`.
/// Decode failures are returned as errors.
pub fn try_find_value(data: &[u8], tags: &[&[u8]]) -> Result<Option<Vec<u8>>> {
    find_at(data, tags, 0)
}

fn find_at(data: &[u8], tags: &[&[u8]], depth: usize) -> Result<Option<Vec<u8>>> {
    check_depth(depth)?;
    let mut cursor = Cursor::new(data);
    while let Some(record) = decode_next(&mut cursor)? {
        if wanted(&record, tags) {
            return Ok(Some(record.value));
        }
        if record.is_constructed() {
            if let Some(v) = find_at(&record.value, tags, depth + 1)? {
                return Ok(Some(v));
            }
        }
    }
    Ok(None)
}

/// Best-effort form of [`try_find_value`]: malformed data counts as "not
/// found".
pub fn find_value(data: &[u8], tags: &[&[u8]]) -> Option<Vec<u8>> {
    try_find_value(data, tags).unwrap_or_else(|e| {
        log::trace!("tlv search: giving up: {}", e);
        None
    })
}

/// Every object whose tag is in `tags`, across the whole tree.
///
/// Scanning stops at the first malformed object (or too deep a template);
/// matches found before it are kept.
pub fn find_all(data: &[u8], tags: &[&[u8]]) -> Vec<TlvRecord> {
    let mut out = Vec::new();
    collect(data, tags, 0, &mut out);
    out
}

fn collect(data: &[u8], tags: &[&[u8]], depth: usize, out: &mut Vec<TlvRecord>) -> bool {
    if let Err(e) = check_depth(depth) {
        log::trace!("tlv search: {}", e);
        return false;
    }
    let mut cursor = Cursor::new(data);
    loop {
        match decode_next(&mut cursor) {
            Ok(Some(record)) => {
                if wanted(&record, tags) {
                    out.push(record);
                } else if record.is_constructed() && !collect(&record.value, tags, depth + 1, out) {
                    return false;
                }
            }
            Ok(None) => return true,
            Err(e) => {
                log::trace!("tlv search: stopping at offset {}: {}", cursor.position(), e);
                return false;
            }
        }
    }
}
