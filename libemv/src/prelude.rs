// libemv/src/prelude.rs

//! Common re-exports: `use libemv::prelude::*;`

pub use crate::card::{CardNumber, CardRecord, ServiceCode, Track2};
pub use crate::config::ReaderConfig;
pub use crate::protocol::{ApduCommand, ApduResponse, Command, StatusWord, TlvRecord};
pub use crate::reader::{
    CardReader, ReadCallback, ReadOutcome, ReaderBuilder, read_card, read_outcome,
};
pub use crate::schemes::{CardScheme, SchemeCatalog};
pub use crate::session::{EmvSession, SessionState};
pub use crate::tags::{TagCatalog, TagDescriptor};
pub use crate::transport::Transport;
pub use crate::{Aid, ApplicationFileLocator, Error, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
