// libemv/src/constants.rs
//! Common protocol constants used across the crate

/// Proximity Payment System Environment (contactless directory)
pub const PPSE_DIRECTORY: &[u8] = b"2PAY.SYS.DDF01";

/// Payment System Environment (contact directory)
pub const PSE_DIRECTORY: &[u8] = b"1PAY.SYS.DDF01";

/// SW1 of a successful response (90 00)
pub const SW1_SUCCESS: u8 = 0x90;
/// SW2 of a successful response
pub const SW2_SUCCESS: u8 = 0x00;

/// SW1 of "wrong Le field, SW2 holds the exact length" (6C XX)
pub const SW1_WRONG_LE: u8 = 0x6C;

/// Expected-length byte sent with every command. 0 means "up to 256 bytes".
pub const DEFAULT_LE: u8 = 0x00;

/// Largest data field a short APDU can carry
pub const MAX_SHORT_LC: usize = 255;

/// Terminal Transaction Qualifiers are 4 bytes long
pub const TTQ_LEN: usize = 4;

/// TTQ byte 1, bit 6: contactless EMV mode supported
pub const TTQ_CONTACTLESS_EMV_MODE_BIT: u32 = 5;

/// TTQ byte 1, bit 4: offline-only reader
pub const TTQ_OFFLINE_ONLY_BIT: u32 = 3;

/// Track 2 field separator nibble
pub const TRACK2_SEPARATOR: char = 'D';

/// Longest primary account number accepted from track 2
pub const MAX_PAN_DIGITS: usize = 19;
