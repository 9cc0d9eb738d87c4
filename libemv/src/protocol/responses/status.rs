// libemv/src/protocol/responses/status.rs

//! ISO 7816-4 status words (SW1 SW2).

use crate::constants::{SW1_SUCCESS, SW1_WRONG_LE, SW2_SUCCESS};
use std::fmt;

/// Two-byte result code that ends every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// Status byte 1
    pub sw1: u8,
    /// Status byte 2
    pub sw2: u8,
}

impl StatusWord {
    /// 90 00
    pub const SUCCESS: StatusWord = StatusWord::new(SW1_SUCCESS, SW2_SUCCESS);

    /// Status from its two bytes.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// SW1 in the high byte.
    pub const fn to_u16(&self) -> u16 {
        ((self.sw1 as u16) << 8) | (self.sw2 as u16)
    }

    /// 90 00
    pub const fn is_success(&self) -> bool {
        self.sw1 == SW1_SUCCESS && self.sw2 == SW2_SUCCESS
    }

    /// 6C XX: the command should be repeated with `Le = XX`.
    pub const fn corrected_le(&self) -> Option<u8> {
        if self.sw1 == SW1_WRONG_LE {
            Some(self.sw2)
        } else {
            None
        }
    }

    /// Log level for a response carrying this status.
    pub fn log_level(&self) -> log::Level {
        if self.is_success() {
            log::Level::Trace
        } else {
            log::Level::Debug
        }
    }

    /// Short ISO 7816-4 meaning, for logs.
    pub const fn description(&self) -> &'static str {
        match (self.sw1, self.sw2) {
            (0x90, 0x00) => "Success",
            (0x61, _) => "More data available",
            (0x62, 0x83) => "Selected file invalidated",
            (0x67, 0x00) => "Wrong length",
            (0x69, 0x82) => "Security status not satisfied",
            (0x69, 0x84) => "Referenced data invalidated",
            (0x69, 0x85) => "Conditions of use not satisfied",
            (0x69, 0x86) => "Command not allowed",
            (0x6A, 0x81) => "Function not supported",
            (0x6A, 0x82) => "File not found",
            (0x6A, 0x83) => "Record not found",
            (0x6A, 0x86) => "Incorrect parameters P1-P2",
            (0x6A, 0x88) => "Referenced data not found",
            (0x6C, _) => "Wrong Le field",
            (0x6D, 0x00) => "Instruction code not supported or invalid",
            (0x6E, 0x00) => "Class not supported",
            _ => "Unknown status word",
        }
    }
}

impl From<(u8, u8)> for StatusWord {
    fn from(tuple: (u8, u8)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X} ({})", self.sw1, self.sw2, self.description())
    }
}
