// libemv/src/protocol/commands/get_data.rs

//! GET DATA

use super::{ApduCommand, CommandType};

/// GET DATA for a primitive object; P1/P2 hold the two tag bytes
/// (a one-byte tag goes in P2 with P1 = 00).
pub fn get_data(tag: [u8; 2]) -> ApduCommand {
    ApduCommand::new(CommandType::GetData).with_params(tag[0], tag[1])
}
