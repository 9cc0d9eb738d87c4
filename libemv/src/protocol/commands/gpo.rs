// libemv/src/protocol/commands/gpo.rs

//! GET PROCESSING OPTIONS

use super::{ApduCommand, CommandType};
use crate::Result;
use crate::protocol::dol::build_gpo_data;

/// GET PROCESSING OPTIONS. The data field is the command template built
/// from `pdol`, or an empty template when the card sent none. Fails when the
/// PDOL asks for more data than a short APDU can carry.
pub fn get_processing_options(pdol: Option<&[u8]>) -> Result<ApduCommand> {
    Ok(ApduCommand::new(CommandType::GetProcessingOptions).with_data(build_gpo_data(pdol)?))
}
