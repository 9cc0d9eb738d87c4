// libemv/src/lib.rs

//! libemv
//!
//! Pure Rust EMV contactless payment card reader: BER-TLV decoding,
//! ISO 7816-4 command APDUs and the EMV read flow that pulls the card
//! number, expiry, service code and cardholder name off a tapped card.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod schemes;
pub mod session;
pub mod tags;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
