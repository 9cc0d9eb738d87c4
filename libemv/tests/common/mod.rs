// Shared helpers for the integration test crates. Each aggregator pulls this
// in through `#[path]`, so not every helper is used by every crate.
#![allow(dead_code)]

pub mod fixtures;

use libemv::prelude::*;

/// Callback that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingCallback {
    pub ready: Vec<CardRecord>,
    pub transient: usize,
    pub permanent: usize,
}

impl RecordingCallback {
    pub fn calls(&self) -> usize {
        self.ready.len() + self.transient + self.permanent
    }
}

impl ReadCallback for RecordingCallback {
    fn on_card_ready(&mut self, card: CardRecord) {
        self.ready.push(card);
    }

    fn on_card_unreadable_transient(&mut self) {
        self.transient += 1;
    }

    fn on_card_unreadable_permanent(&mut self) {
        self.permanent += 1;
    }
}

/// Initialise env_logger once so `RUST_LOG=libemv=trace cargo test` shows
/// the exchange.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
