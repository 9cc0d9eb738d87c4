// libemv/src/protocol/commands/mod.rs

//! Command APDUs for the EMV read flow.

pub mod get_data;
pub mod gpo;
pub mod read_record;
pub mod select;

pub use get_data::get_data;
pub use gpo::get_processing_options;
pub use read_record::read_record;
pub use select::select;

use crate::constants::{DEFAULT_LE, MAX_SHORT_LC};
use crate::{Error, Result};

/// Command kinds used by the EMV read flow, each with fixed CLA/INS and
/// default P1/P2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    /// SELECT by name.
    Select,
    /// READ RECORD from a short file.
    ReadRecord,
    /// GET PROCESSING OPTIONS.
    GetProcessingOptions,
    /// GET DATA for a single tag.
    GetData,
}

impl CommandType {
    /// `(CLA, INS, P1, P2)`
    pub const fn header(&self) -> (u8, u8, u8, u8) {
        match self {
            Self::Select => (0x00, 0xA4, 0x04, 0x00),
            Self::ReadRecord => (0x00, 0xB2, 0x00, 0x00),
            Self::GetProcessingOptions => (0x80, 0xA8, 0x00, 0x00),
            Self::GetData => (0x80, 0xCA, 0x00, 0x00),
        }
    }

    /// Class byte.
    pub const fn cla(&self) -> u8 {
        self.header().0
    }

    /// Instruction byte.
    pub const fn ins(&self) -> u8 {
        self.header().1
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::ReadRecord => "READ RECORD",
            Self::GetProcessingOptions => "GET PROCESSING OPTIONS",
            Self::GetData => "GET DATA",
        }
    }
}

/// A command APDU before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduCommand {
    /// Fixes CLA and INS.
    pub command_type: CommandType,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data; Lc is its length.
    pub data: Vec<u8>,
    /// Expected response length, 0 for "up to 256".
    pub le: u8,
}

impl ApduCommand {
    /// Command with the table's default parameters, no data and `Le = 0`.
    pub fn new(command_type: CommandType) -> Self {
        let (_, _, p1, p2) = command_type.header();
        Self {
            command_type,
            p1,
            p2,
            data: Vec::new(),
            le: DEFAULT_LE,
        }
    }

    /// Override P1 and P2.
    pub fn with_params(mut self, p1: u8, p2: u8) -> Self {
        self.p1 = p1;
        self.p2 = p2;
        self
    }

    /// Set the data field.
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the expected length.
    pub fn with_le(mut self, le: u8) -> Self {
        self.le = le;
        self
    }

    /// Encode as `CLA INS P1 P2 [Lc data] Le`. Lc and the data field are
    /// present only when there is data.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > MAX_SHORT_LC {
            return Err(Error::InvalidLength {
                expected: MAX_SHORT_LC,
                actual: self.data.len(),
            });
        }

        let mut buf = Vec::with_capacity(6 + self.data.len());
        buf.push(self.command_type.cla());
        buf.push(self.command_type.ins());
        buf.push(self.p1);
        buf.push(self.p2);
        if !self.data.is_empty() {
            buf.push(self.data.len() as u8);
            buf.extend_from_slice(&self.data);
        }
        buf.push(self.le);
        Ok(buf)
    }
}

impl std::fmt::Display for ApduCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} p1={:02X} p2={:02X} lc={} le={:02X}",
            self.command_type.name(),
            self.p1,
            self.p2,
            self.data.len(),
            self.le
        )
    }
}

/// High-level Command enum. Per-command builders live in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a directory or application by name.
    Select {
        /// Directory name or AID.
        name: Vec<u8>,
    },
    /// Read one record of a short file.
    ReadRecord {
        /// Record number, from 1.
        record: u8,
        /// Short file identifier.
        sfi: u8,
    },
    /// GET PROCESSING OPTIONS, built from the card's PDOL if it sent one.
    GetProcessingOptions {
        /// PDOL value from the application FCI.
        pdol: Option<Vec<u8>>,
    },
    /// GET DATA for a two-byte tag.
    GetData {
        /// Tag to fetch, sent as P1 P2.
        tag: [u8; 2],
    },
}

impl Command {
    /// Table entry for this command.
    pub fn command_type(&self) -> CommandType {
        match self {
            Self::Select { .. } => CommandType::Select,
            Self::ReadRecord { .. } => CommandType::ReadRecord,
            Self::GetProcessingOptions { .. } => CommandType::GetProcessingOptions,
            Self::GetData { .. } => CommandType::GetData,
        }
    }

    /// Build the APDU. Only GET PROCESSING OPTIONS can fail, when the PDOL
    /// asks for more than a short APDU carries.
    pub fn to_apdu(&self) -> Result<ApduCommand> {
        Ok(match self {
            Self::Select { name } => select(name),
            Self::ReadRecord { record, sfi } => read_record(*record, *sfi),
            Self::GetProcessingOptions { pdol } => get_processing_options(pdol.as_deref())?,
            Self::GetData { tag } => get_data(*tag),
        })
    }

    /// Encode with the default expected length.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_apdu()?.encode()
    }
}
