// libemv/src/session/mod.rs

//! The EMV read flow.
//!
//! A session owns one open connection and one [`CardRecord`]. It walks the
//! contactless directory, the contact directory and finally the known
//! scheme AIDs, stopping as soon as card data has been captured (see
//! [`ReaderConfig`] for the knobs).
//!
//! A transport failure aborts the application attempt in flight; outer
//! loops carry on with the next candidate. The only retry is the single
//! `6C XX` length correction on READ RECORD.

mod application;
mod directory;

use crate::card::CardRecord;
use crate::config::ReaderConfig;
use crate::constants::{PPSE_DIRECTORY, PSE_DIRECTORY};
use crate::protocol::{ApduCommand, ApduResponse, Command};
use crate::transport::{ConnectionGuard, Transport};
use crate::{Error, Result};
use derive_more::Display;

/// Where the session is in the read flow.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Opened, nothing sent yet.
    Start,
    /// Reading a payment directory.
    DirectorySelect,
    /// Selecting an application.
    ApplicationSelect,
    /// Waiting on GET PROCESSING OPTIONS.
    ProcessingOptions,
    /// Reading the records the AFL names.
    RecordRead,
    /// A card number was captured.
    Done,
    /// Every stage ran without capturing a card number.
    Failed,
}

/// One open connection being read, plus the record built so far.
pub struct EmvSession<'a, T: Transport + ?Sized> {
    link: ConnectionGuard<'a, T>,
    config: ReaderConfig,
    card: CardRecord,
    state: SessionState,
    transport_failures: usize,
}

impl<'a, T: Transport + ?Sized> EmvSession<'a, T> {
    /// Connect `transport`. The connection is closed when the session is
    /// dropped or finished.
    pub fn open(transport: &'a mut T, config: ReaderConfig) -> Result<Self> {
        let link = ConnectionGuard::open(transport)?;
        Ok(Self {
            link,
            config,
            card: CardRecord::new(),
            state: SessionState::Start,
            transport_failures: 0,
        })
    }

    /// Run every enabled stage. Returns true once a card number is known.
    pub fn run(&mut self) -> bool {
        let config = self.config;
        let mut found = config.use_ppse
            && self.read_directory(PPSE_DIRECTORY, config.capture_second_card);
        if !found && config.use_pse {
            found = self.read_directory(PSE_DIRECTORY, false);
        }
        if !found && config.scheme_fallback {
            self.read_with_scheme_aids();
        }

        self.state = if self.card.is_ready() {
            SessionState::Done
        } else {
            SessionState::Failed
        };
        log::debug!(
            "session finished: {} ({} transport failures)",
            self.state,
            self.transport_failures
        );
        self.card.is_ready()
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The record built so far.
    pub fn card(&self) -> &CardRecord {
        &self.card
    }

    /// Number of application attempts cut short by a link failure.
    pub fn transport_failures(&self) -> usize {
        self.transport_failures
    }

    /// Close the connection and hand over the record.
    pub fn finish(self) -> CardRecord {
        self.card
    }

    fn enter(&mut self, state: SessionState) {
        if self.state != state {
            log::trace!("session: {} -> {}", self.state, state);
            self.state = state;
        }
    }

    /// Send one command and split the answer.
    fn exchange(&mut self, cmd: &Command) -> Result<ApduResponse> {
        self.send(&cmd.to_apdu()?)
    }

    /// Like [`exchange`](Self::exchange), but a `6C XX` answer is retried
    /// once with `Le = XX`.
    fn exchange_with_le_retry(&mut self, cmd: &Command) -> Result<ApduResponse> {
        let apdu = cmd.to_apdu()?;
        let resp = self.send(&apdu)?;
        match resp.wrong_length() {
            Some(le) => {
                log::debug!("{}: card asked for Le={:#04x}, retrying", apdu, le);
                self.send(&apdu.with_le(le))
            }
            None => Ok(resp),
        }
    }

    fn send(&mut self, apdu: &ApduCommand) -> Result<ApduResponse> {
        let bytes = apdu.encode()?;
        log::trace!("-> {}", apdu);
        let raw = self.link.transceive(&bytes)?;
        let resp = ApduResponse::parse(&raw)?;
        log::log!(
            resp.status.log_level(),
            "<- {} {} ({} data bytes)",
            apdu.command_type.name(),
            resp.status,
            resp.data.len()
        );
        Ok(resp)
    }

    fn note_failure(&mut self, what: &str, err: &Error) {
        if err.is_transport() {
            self.transport_failures += 1;
            log::warn!("{}: link failure, abandoning attempt: {}", what, err);
        } else {
            log::debug!("{}: {}", what, err);
        }
    }
}

/// Open a session on `transport`, run it and return the record. Fails only
/// when the connection cannot be opened.
pub fn read<T: Transport + ?Sized>(transport: &mut T, config: ReaderConfig) -> Result<CardRecord> {
    let mut session = EmvSession::open(transport, config)?;
    session.run();
    Ok(session.finish())
}
