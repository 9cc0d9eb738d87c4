// libemv/src/reader/mod.rs

//! Entry points that run a full read and report the result.
//!
//! Every read ends in exactly one [`ReadOutcome`]: the card data, a
//! transient failure (nothing usable, try another tap) or a permanent one
//! (the link could not be opened). Callers either match on the outcome or
//! hand a [`ReadCallback`] to [`read_card`].

pub mod builder;

pub use builder::ReaderBuilder;

use crate::card::CardRecord;
use crate::config::ReaderConfig;
use crate::session;
use crate::transport::Transport;
use crate::{Error, Result};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

/// Receives the result of a read. Exactly one method is called per read.
pub trait ReadCallback {
    /// A card number was read.
    fn on_card_ready(&mut self, card: CardRecord);
    /// Nothing usable came back; the card may be tapped again.
    fn on_card_unreadable_transient(&mut self);
    /// The card could not be talked to at all.
    fn on_card_unreadable_permanent(&mut self);
}

/// How a read ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A card number was captured.
    Ready(CardRecord),
    /// The card answered but gave nothing usable, or left mid-read.
    Transient,
    /// The connection could not be opened.
    Permanent,
}

impl ReadOutcome {
    /// A card number was captured.
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadOutcome::Ready(_))
    }

    /// Call the callback method matching this outcome.
    pub fn dispatch<C: ReadCallback + ?Sized>(self, callback: &mut C) {
        match self {
            ReadOutcome::Ready(card) => callback.on_card_ready(card),
            ReadOutcome::Transient => callback.on_card_unreadable_transient(),
            ReadOutcome::Permanent => callback.on_card_unreadable_permanent(),
        }
    }

    /// The record, or `NoUsableData` / the connect error.
    pub fn into_result(self) -> Result<CardRecord> {
        match self {
            ReadOutcome::Ready(card) => Ok(card),
            ReadOutcome::Transient => Err(Error::NoUsableData),
            ReadOutcome::Permanent => Err(Error::Transport("connection could not be opened".into())),
        }
    }
}

/// Run one read on `transport`. The connection is closed before this
/// returns, whatever the outcome.
pub fn read_outcome<T: Transport + ?Sized>(transport: &mut T, config: ReaderConfig) -> ReadOutcome {
    match session::read(transport, config) {
        Ok(card) if card.is_ready() => {
            log::info!("card read: {}", card.card_number());
            ReadOutcome::Ready(card)
        }
        Ok(_) => {
            log::info!("card read: no usable data");
            ReadOutcome::Transient
        }
        Err(e) => {
            log::warn!("card read: cannot connect: {}", e);
            ReadOutcome::Permanent
        }
    }
}

/// Run one read and report it to `callback`.
pub fn read_card<T, C>(transport: &mut T, config: ReaderConfig, callback: &mut C)
where
    T: Transport + ?Sized,
    C: ReadCallback + ?Sized,
{
    read_outcome(transport, config).dispatch(callback);
}

/// Run [`read_card`] on a worker thread. The join handle gives back the
/// transport and the callback.
pub fn spawn_read<T, C>(mut transport: T, config: ReaderConfig, mut callback: C) -> JoinHandle<(T, C)>
where
    T: Transport + Send + 'static,
    C: ReadCallback + Send + 'static,
{
    thread::spawn(move || {
        read_card(&mut transport, config, &mut callback);
        (transport, callback)
    })
}

/// Run a read on a worker thread and deliver the outcome over a channel.
pub fn read_in_background<T>(mut transport: T, config: ReaderConfig) -> mpsc::Receiver<ReadOutcome>
where
    T: Transport + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = read_outcome(&mut transport, config);
        if tx.send(outcome).is_err() {
            log::debug!("read finished after the receiver was dropped");
        }
    });
    rx
}

/// Run a read on tokio's blocking pool.
#[cfg(feature = "async")]
pub async fn read_card_async<T>(mut transport: T, config: ReaderConfig) -> Result<(T, ReadOutcome)>
where
    T: Transport + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let outcome = read_outcome(&mut transport, config);
        (transport, outcome)
    })
    .await
    .map_err(|e| Error::UnsupportedOperation(format!("read task failed: {}", e)))
}

/// A transport paired with a configuration, ready for repeated reads.
pub struct CardReader {
    transport: Box<dyn Transport + Send>,
    config: ReaderConfig,
}

impl CardReader {
    /// Start building a reader.
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    /// Config used for each read.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read the card currently in the field.
    pub fn read(&mut self) -> ReadOutcome {
        read_outcome(&mut self.transport, self.config)
    }

    /// Read and report through `callback`.
    pub fn read_with<C: ReadCallback + ?Sized>(&mut self, callback: &mut C) {
        self.read().dispatch(callback);
    }

    /// Give the transport back.
    pub fn into_transport(self) -> Box<dyn Transport + Send> {
        self.transport
    }
}
