// libemv/src/protocol/commands/read_record.rs

//! READ RECORD

use super::{ApduCommand, CommandType};

/// READ RECORD `record` of short file `sfi`. P2 carries the SFI in its
/// high five bits and `100` ("P1 is a record number") below.
pub fn read_record(record: u8, sfi: u8) -> ApduCommand {
    ApduCommand::new(CommandType::ReadRecord).with_params(record, (sfi << 3) | 0x04)
}
