// libemv/src/protocol/commands/select.rs

//! SELECT

use super::{ApduCommand, CommandType};

/// SELECT by DF name (P1 = 04): a directory name such as `2PAY.SYS.DDF01`
/// or an application identifier.
pub fn select(name: &[u8]) -> ApduCommand {
    ApduCommand::new(CommandType::Select).with_data(name)
}
