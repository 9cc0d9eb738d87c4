// libemv/src/session/directory.rs

use super::{EmvSession, SessionState};
use crate::protocol::{Command, find_all, find_value};
use crate::schemes::SchemeCatalog;
use crate::tags;
use crate::transport::Transport;
use crate::types::Aid;
use crate::utils::bytes_to_int;
use crate::Result;

impl<T: Transport + ?Sized> EmvSession<'_, T> {
    /// Select a payment directory and try every application it lists.
    ///
    /// With `capture_second` the walk keeps going after the first success
    /// and stops once a second, different card number has been read.
    /// Otherwise the first success ends it.
    pub(super) fn read_directory(&mut self, name: &[u8], capture_second: bool) -> bool {
        let label = String::from_utf8_lossy(name).into_owned();
        let aids = match self.directory_entries(name) {
            Ok(Some(data)) => application_ids(&data),
            Ok(None) => return false,
            Err(e) => {
                self.note_failure(&label, &e);
                return false;
            }
        };
        log::debug!("{}: {} application(s) listed", label, aids.len());

        let mut success = false;
        for aid in &aids {
            let ok = self.extract_application(aid);
            if ok && success && self.card.second_card_number().is_some() {
                break;
            } else if ok {
                success = true;
                self.card.unlock();
                if !capture_second {
                    break;
                }
            }
        }
        success
    }

    /// Try every registered scheme AID until one yields data.
    pub(super) fn read_with_scheme_aids(&mut self) -> bool {
        for scheme in SchemeCatalog::all() {
            log::trace!("fallback: trying {} ({})", scheme.id, scheme.aid_hex());
            if self.extract_application(&Aid::from_bytes(scheme.aid)) {
                self.card.unlock();
                return true;
            }
        }
        false
    }

    /// Select the directory and return the data its applications are listed
    /// in: the record named by the SFI when there is one, the select answer
    /// otherwise. `None` when the card turns either command down.
    fn directory_entries(&mut self, name: &[u8]) -> Result<Option<Vec<u8>>> {
        self.enter(SessionState::DirectorySelect);
        let fci = self.exchange(&Command::Select { name: name.to_vec() })?;
        if !fci.is_success() {
            log::debug!("directory select refused: {}", fci.status);
            return Ok(None);
        }

        let Some(sfi) = find_value(&fci.data, &[tags::SFI]).and_then(|v| sfi_number(&v)) else {
            return Ok(Some(fci.data));
        };
        // P1 carries the SFI here, not a record number.
        let record = self.exchange_with_le_retry(&Command::ReadRecord { record: sfi, sfi })?;
        if !record.is_success() {
            log::debug!("directory record refused: {}", record.status);
            return Ok(None);
        }
        Ok(Some(record.data))
    }
}

fn sfi_number(value: &[u8]) -> Option<u8> {
    bytes_to_int(value).ok().and_then(|n| u8::try_from(n).ok())
}

/// Application identifiers listed in directory data, in encoding order.
///
/// A kernel identifier directly after an AID is appended to that AID once
/// at least two AIDs have been collected; any other kernel identifier is
/// taken as an identifier of its own.
pub(crate) fn application_ids(data: &[u8]) -> Vec<Aid> {
    let mut aids: Vec<Aid> = Vec::new();
    let mut after_aid = false;
    for record in find_all(data, &[tags::AID_CARD, tags::KERNEL_IDENTIFIER]) {
        let is_kernel = record.tag.matches(tags::KERNEL_IDENTIFIER);
        let collected = aids.len();
        match aids.last_mut() {
            Some(last) if is_kernel && after_aid && collected >= 2 => {
                last.extend(&record.value);
            }
            _ => aids.push(Aid::from(record.value)),
        }
        after_aid = !is_kernel;
    }
    aids
}
