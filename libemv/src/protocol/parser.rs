// libemv/src/protocol/parser.rs

//! Bounds-checked byte access.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Forward-only reader over a response buffer.
///
/// Every read is bounds checked and reports `UnexpectedEndOfData` instead of
/// panicking, so the TLV decoder can run over untrusted card responses.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start at the first byte of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Nothing left to read.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes not yet consumed.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = byte_at(self.data, self.pos).map_err(|_| self.eof(1))?;
        self.pos += 1;
        Ok(b)
    }

    /// Consume `len` bytes. Nothing is consumed when fewer remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let s = slice_at(self.data, self.pos, len).map_err(|_| self.eof(len))?;
        self.pos += len;
        Ok(s)
    }

    /// Advance past any run of bytes for which `pred` holds.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    fn eof(&self, needed: usize) -> Error {
        Error::UnexpectedEndOfData {
            needed,
            available: self.remaining(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_at_out_of_range() {
        match byte_at(&[0x01], 1) {
            Err(Error::InvalidLength {
                expected: 2,
                actual: 1,
            }) => {}
            other => panic!("expected InvalidLength, got: {:?}", other),
        }
    }

    #[test]
    fn cursor_reads_in_order() {
        let data = [0x6F, 0x02, 0xAA, 0xBB];
        let mut c = Cursor::new(&data);
        assert_eq!(c.read_u8().unwrap(), 0x6F);
        assert_eq!(c.read_u8().unwrap(), 0x02);
        assert_eq!(c.read_bytes(2).unwrap(), &[0xAA, 0xBB]);
        assert!(c.is_empty());
        assert_eq!(c.position(), 4);
    }

    #[test]
    fn cursor_short_read_does_not_advance() {
        let data = [0x01, 0x02];
        let mut c = Cursor::new(&data);
        match c.read_bytes(3) {
            Err(Error::UnexpectedEndOfData {
                needed: 3,
                available: 2,
            }) => {}
            other => panic!("expected UnexpectedEndOfData, got: {:?}", other),
        }
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn cursor_empty_read_u8() {
        let mut c = Cursor::new(&[]);
        match c.read_u8() {
            Err(Error::UnexpectedEndOfData { needed: 1, .. }) => {}
            other => panic!("expected UnexpectedEndOfData, got: {:?}", other),
        }
    }

    #[test]
    fn skip_while_stops_at_first_mismatch() {
        let data = [0x00, 0xFF, 0x00, 0x57, 0x00];
        let mut c = Cursor::new(&data);
        c.skip_while(|b| b == 0x00 || b == 0xFF);
        assert_eq!(c.peek(), Some(0x57));
        assert_eq!(c.rest(), &[0x57, 0x00]);
    }
}
