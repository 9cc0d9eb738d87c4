// libemv/src/protocol/responses/mod.rs

//! Response APDUs.

pub mod status;

pub use status::StatusWord;

use crate::protocol::parser::{ensure_len, slice_at};
use crate::{Error, Result};

/// A response APDU split into its data field and trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    /// Everything before the status word.
    pub data: Vec<u8>,
    /// Last two bytes.
    pub status: StatusWord,
}

impl ApduResponse {
    /// Split a raw response. Anything shorter than the two status bytes is
    /// rejected.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        ensure_len(raw, 2)?;
        let split = raw.len() - 2;
        let sw = slice_at(raw, split, 2)?;
        Ok(Self {
            data: raw[..split].to_vec(),
            status: StatusWord::new(sw[0], sw[1]),
        })
    }

    /// Status is 90 00.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `Some(le)` when the card answered 6C XX.
    pub fn wrong_length(&self) -> Option<u8> {
        self.status.corrected_le()
    }

    /// Data field on 90 00, `Error::StatusWord` otherwise.
    pub fn into_result(self) -> Result<Vec<u8>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(Error::StatusWord {
                sw1: self.status.sw1,
                sw2: self.status.sw2,
            })
        }
    }
}
