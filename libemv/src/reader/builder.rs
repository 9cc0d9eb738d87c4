// libemv/src/reader/builder.rs

//! Builder for [`CardReader`](crate::reader::CardReader).

use crate::config::ReaderConfig;
use crate::reader::CardReader;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a CardReader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport + Send>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Empty builder with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport + Send>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `config` instead of the default.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Requires a transport.
    pub fn build(self) -> Result<CardReader> {
        match self.transport {
            Some(transport) => Ok(CardReader {
                transport,
                config: self.config,
            }),
            None => Err(Error::UnsupportedOperation(
                "reader needs a transport".to_string(),
            )),
        }
    }
}
