// libemv/src/session/application.rs

use super::{EmvSession, SessionState};
use crate::protocol::{ApduResponse, Command, find_value};
use crate::tags;
use crate::transport::Transport;
use crate::types::{Aid, ApplicationFileLocator};
use crate::Result;

impl<T: Transport + ?Sized> EmvSession<'_, T> {
    /// Select one application and pull card data out of it. A link failure
    /// abandons this application only.
    pub(super) fn extract_application(&mut self, aid: &Aid) -> bool {
        match self.try_extract_application(aid) {
            Ok(found) => found,
            Err(e) => {
                self.note_failure(&format!("application {}", aid), &e);
                false
            }
        }
    }

    fn try_extract_application(&mut self, aid: &Aid) -> Result<bool> {
        self.enter(SessionState::ApplicationSelect);
        let selected = self.exchange(&Command::Select {
            name: aid.as_bytes().to_vec(),
        })?;
        if !selected.is_success() {
            log::debug!("application {} not selectable: {}", aid, selected.status);
            return Ok(false);
        }

        self.enter(SessionState::ProcessingOptions);
        let pdol = find_value(&selected.data, &[tags::PDOL]);
        let Some(gpo) = self.processing_options(pdol)? else {
            log::debug!("application {}: processing options refused", aid);
            return Ok(false);
        };

        let found = self.read_application_data(&gpo.data)?;
        if found {
            self.card.set_aid_if_unset(aid);
        }
        Ok(found)
    }

    /// GET PROCESSING OPTIONS with the card's PDOL, then once more with an
    /// empty list if that is refused.
    fn processing_options(&mut self, pdol: Option<Vec<u8>>) -> Result<Option<ApduResponse>> {
        let with_pdol = pdol.is_some();
        match self.exchange(&Command::GetProcessingOptions { pdol }) {
            Ok(resp) if resp.is_success() => return Ok(Some(resp)),
            Err(e) if e.is_transport() => return Err(e),
            Ok(resp) => log::debug!("GPO refused ({}), pdol={}", resp.status, with_pdol),
            Err(e) => log::debug!("GPO not sent: {}", e),
        }
        let retry = self.exchange(&Command::GetProcessingOptions { pdol: None })?;
        Ok(retry.is_success().then_some(retry))
    }

    /// Find the card number in the GPO answer or in the records its AFL
    /// points at.
    fn read_application_data(&mut self, gpo: &[u8]) -> Result<bool> {
        let afl = if let Some(format1) = find_value(gpo, &[tags::RESPONSE_MESSAGE_TEMPLATE_1]) {
            match format1.len() {
                0 | 1 => Vec::new(),
                n => format1[1..n - 1].to_vec(),
            }
        } else if self.card.apply_track2(gpo) {
            self.card.apply_holder_name(gpo);
            return Ok(true);
        } else {
            match find_value(gpo, &[tags::APPLICATION_FILE_LOCATOR]) {
                Some(afl) => afl,
                None => return Ok(false),
            }
        };

        self.enter(SessionState::RecordRead);
        for entry in ApplicationFileLocator::parse_list(&afl) {
            for record in entry.records() {
                let resp = self.exchange_with_le_retry(&Command::ReadRecord {
                    record,
                    sfi: entry.sfi,
                })?;
                if !resp.is_success() {
                    log::trace!("sfi {} record {}: {}", entry.sfi, record, resp.status);
                    continue;
                }
                self.card.apply_holder_name(&resp.data);
                if self.card.apply_track2(&resp.data) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
