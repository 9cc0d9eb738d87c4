// fixtures.rs — provides commonly used AIDs and card answers

use libemv::test_support;

pub const VISA_CREDIT: &[u8] = &[0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10];
pub const MASTERCARD: &[u8] = &[0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10];
pub const UNKNOWN_AID: &[u8] = &[0xA0, 0x00, 0x00, 0x09, 0x99, 0x10, 0x10];

pub const VISA_PAN: &str = "4000000000000002";
pub const MASTERCARD_PAN: &str = "5413330089010434";

/// Track 2 for the Visa test card: expires 2025-12, service code 121.
pub fn visa_track2() -> Vec<u8> {
    test_support::track2("4000000000000002D25121210000000000000")
}

/// Track 2 for the Mastercard test card: expires 2027-01, service code 201.
pub fn mastercard_track2() -> Vec<u8> {
    test_support::track2("5413330089010434D2701201")
}

/// Record 1 of SFI 1 for the Visa card, with a cardholder name.
pub fn visa_record() -> Vec<u8> {
    test_support::record_with_track2(&visa_track2(), Some("CARDHOLDER/VISA"))
}

/// AFL naming SFI 1, records 1 to 2.
pub fn afl_sfi1_two_records() -> Vec<u8> {
    vec![0x08, 0x01, 0x02, 0x00]
}

pub const MAESTRO: &[u8] = &[0xA0, 0x00, 0x00, 0x00, 0x04, 0x30, 0x60];
pub const MAESTRO_PAN: &str = "6759649826438453";

/// Track 2 for the Maestro test card: expires 2028-06, service code 221.
pub fn maestro_track2() -> Vec<u8> {
    test_support::track2("6759649826438453D2806221")
}
