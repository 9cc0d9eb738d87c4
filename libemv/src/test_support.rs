//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize card-answer building and MockTransport setup so
//! tests across the crate, the tests/ directory and the demos can reuse the
//! same logic.
#![allow(dead_code)]

use crate::constants::{PPSE_DIRECTORY, PSE_DIRECTORY};
use crate::protocol::encode_tlv;
use crate::tags;
use crate::transport::{MockTransport, Transport};
use crate::{Error, Result};
use std::collections::HashMap;

/// `data` followed by `90 00`.
#[doc(hidden)]
pub fn ok(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.extend_from_slice(&[0x90, 0x00]);
    out
}

/// A bare status word.
#[doc(hidden)]
pub fn sw(sw1: u8, sw2: u8) -> Vec<u8> {
    vec![sw1, sw2]
}

/// Directory FCI (`6F`) listing `aids` under `A5 / BF0C / 61`.
#[doc(hidden)]
pub fn directory_fci(name: &[u8], aids: &[&[u8]]) -> Vec<u8> {
    let entries: Vec<u8> = aids
        .iter()
        .flat_map(|aid| encode_tlv(&[0x61], &encode_tlv(tags::AID_CARD, aid)))
        .collect();
    let mut body = encode_tlv(&[0x84], name);
    body.extend(encode_tlv(&[0xA5], &encode_tlv(&[0xBF, 0x0C], &entries)));
    encode_tlv(&[0x6F], &body)
}

/// Directory FCI that points at a short file (tag 88) instead of listing
/// applications inline.
#[doc(hidden)]
pub fn directory_fci_with_sfi(name: &[u8], sfi: u8) -> Vec<u8> {
    let mut body = encode_tlv(&[0x84], name);
    body.extend(encode_tlv(&[0xA5], &encode_tlv(tags::SFI, &[sfi])));
    encode_tlv(&[0x6F], &body)
}

/// Application FCI, with a PDOL when one is given.
#[doc(hidden)]
pub fn application_fci(aid: &[u8], pdol: Option<&[u8]>) -> Vec<u8> {
    let mut prop = encode_tlv(&[0x50], b"TEST CARD");
    if let Some(p) = pdol {
        prop.extend(encode_tlv(tags::PDOL, p));
    }
    let mut body = encode_tlv(&[0x84], aid);
    body.extend(encode_tlv(&[0xA5], &prop));
    encode_tlv(&[0x6F], &body)
}

/// Track 2 nibbles (`"4000...D2512121..."`) packed into bytes. An odd
/// number of nibbles is padded with `F`.
#[doc(hidden)]
pub fn track2(nibbles: &str) -> Vec<u8> {
    let mut s = nibbles.to_string();
    if s.len() % 2 == 1 {
        s.push('F');
    }
    hex::decode(s).unwrap_or_default()
}

/// Format 2 GPO answer carrying track 2 inline.
#[doc(hidden)]
pub fn gpo_with_track2(track2: &[u8]) -> Vec<u8> {
    let mut body = encode_tlv(&[0x82], &[0x00, 0x80]);
    body.extend(encode_tlv(tags::TRACK_2_EQV_DATA, track2));
    encode_tlv(&[0x77], &body)
}

/// Format 2 GPO answer carrying only an AFL.
#[doc(hidden)]
pub fn gpo_with_afl(afl: &[u8]) -> Vec<u8> {
    let mut body = encode_tlv(&[0x82], &[0x19, 0x80]);
    body.extend(encode_tlv(tags::APPLICATION_FILE_LOCATOR, afl));
    encode_tlv(&[0x77], &body)
}

/// Record template (`70`) with track 2 and optionally a cardholder name.
#[doc(hidden)]
pub fn record_with_track2(track2: &[u8], holder: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(name) = holder {
        body.extend(encode_tlv(tags::CARDHOLDER_NAME, name.as_bytes()));
    }
    body.extend(encode_tlv(tags::TRACK_2_EQV_DATA, track2));
    encode_tlv(&[0x70], &body)
}

/// A MockTransport pre-seeded with the given raw answers.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Same as [`mock_with_responses`], boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport + Send> {
    Box::new(mock_with_responses(responses))
}

/// A scripted card that answers by command rather than by position.
///
/// It knows the two payment directories, a set of applications and the
/// records of their short files. Anything else gets `6A 82` (file not
/// found) or `6D 00` (instruction not supported).
#[doc(hidden)]
#[derive(Debug, Default, Clone)]
pub struct SimulatedCard {
    ppse: Option<Vec<u8>>,
    pse: Option<Vec<u8>>,
    applications: Vec<SimulatedApplication>,
    records: HashMap<(u8, u8), Vec<u8>>,
    selected: Option<usize>,
    /// Raw commands received, oldest first.
    pub received: Vec<Vec<u8>>,
    /// Between `connect` and `close`.
    pub connected: bool,
}

#[derive(Debug, Clone)]
struct SimulatedApplication {
    aid: Vec<u8>,
    fci: Vec<u8>,
    gpo: Vec<u8>,
}

impl SimulatedCard {
    /// A card with no directories and no applications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the contactless directory with an FCI listing `aids`.
    pub fn with_ppse(mut self, aids: &[&[u8]]) -> Self {
        self.ppse = Some(directory_fci(PPSE_DIRECTORY, aids));
        self
    }

    /// Answer the contact directory with an FCI listing `aids`.
    pub fn with_pse(mut self, aids: &[&[u8]]) -> Self {
        self.pse = Some(directory_fci(PSE_DIRECTORY, aids));
        self
    }

    /// Add an application answering SELECT with an FCI and GPO with `gpo`.
    pub fn with_application(mut self, aid: &[u8], pdol: Option<&[u8]>, gpo: Vec<u8>) -> Self {
        self.applications.push(SimulatedApplication {
            aid: aid.to_vec(),
            fci: application_fci(aid, pdol),
            gpo,
        });
        self
    }

    /// Add record `record` of short file `sfi`.
    pub fn with_record(mut self, sfi: u8, record: u8, data: Vec<u8>) -> Self {
        self.records.insert((sfi, record), data);
        self
    }

    fn answer(&mut self, apdu: &[u8]) -> Vec<u8> {
        let &[_, ins, p1, p2, ..] = apdu else {
            return sw(0x67, 0x00);
        };
        match ins {
            0xA4 => {
                let name = apdu.get(5..apdu.len().saturating_sub(1)).unwrap_or(&[]);
                self.select(name)
            }
            0xA8 => match self.selected.and_then(|i| self.applications.get(i)) {
                Some(app) => ok(&app.gpo),
                None => sw(0x69, 0x85),
            },
            0xB2 => match self.records.get(&(p2 >> 3, p1)) {
                Some(data) => ok(data),
                None => sw(0x6A, 0x83),
            },
            _ => sw(0x6D, 0x00),
        }
    }

    fn select(&mut self, name: &[u8]) -> Vec<u8> {
        let directory = if name == PPSE_DIRECTORY {
            Some(&self.ppse)
        } else if name == PSE_DIRECTORY {
            Some(&self.pse)
        } else {
            None
        };
        if let Some(fci) = directory {
            let answer = fci.as_deref().map(ok).unwrap_or_else(|| sw(0x6A, 0x82));
            self.selected = None;
            return answer;
        }
        match self.applications.iter().position(|a| a.aid == name) {
            Some(i) => {
                self.selected = Some(i);
                ok(&self.applications[i].fci)
            }
            None => sw(0x6A, 0x82),
        }
    }
}

impl Transport for SimulatedCard {
    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(Error::Transport("not connected".to_string()));
        }
        self.received.push(command.to_vec());
        Ok(self.answer(command))
    }

    fn close(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }
}
