// libemv/src/protocol/mod.rs

//! Wire formats: BER-TLV, data object lists and command/response APDUs.

pub mod commands;
pub mod dol;
pub mod parser;
pub mod responses;
pub mod search;
pub mod tlv;

pub use commands::{ApduCommand, Command, CommandType};
pub use dol::{TagAndLength, build_gpo_data, parse_tag_and_length_list};
pub use parser::Cursor;
pub use responses::{ApduResponse, StatusWord};
pub use search::{find_all, find_value, try_find_value};
pub use tlv::{TlvRecord, decode_all, decode_next, encode_length, encode_tlv};
