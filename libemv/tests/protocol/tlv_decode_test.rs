#[path = "../common/mod.rs"]
mod common;

use libemv::prelude::*;
use libemv::protocol::{decode_all, find_all, find_value, try_find_value};
use libemv::tags;
use libemv::utils::parse_hex;

// PPSE answer from a Visa debit card, two application entries.
const PPSE_FCI: &str = "6F 3A 84 0E 32 50 41 59 2E 53 59 53 2E 44 44 46 30 31 \
                        A5 28 BF 0C 25 \
                        61 10 4F 07 A0 00 00 00 03 10 10 87 01 01 9F 2A 01 03 \
                        61 11 4F 07 A0 00 00 00 03 20 10 87 01 02 9F 2A 02 00 03";

#[test]
fn ppse_fci_top_level() {
    let data = parse_hex(PPSE_FCI).unwrap();
    let records = decode_all(&data).unwrap();
    assert_eq!(records.len(), 1);
    let fci = &records[0];
    assert_eq!(fci.tag_id(), &[0x6F]);
    assert!(fci.is_constructed());
    assert_eq!(fci.length, 0x3A);
    assert_eq!(fci.raw_length, vec![0x3A]);
    assert_eq!(fci.tag.name(), "File Control Information (FCI) Template");
}

#[test]
fn ppse_fci_lists_aids_and_kernels_in_order() {
    let data = parse_hex(PPSE_FCI).unwrap();
    let found = find_all(&data, &[tags::AID_CARD, tags::KERNEL_IDENTIFIER]);
    let ids: Vec<String> = found.iter().map(|r| bytes_to_hex(&r.value)).collect();
    assert_eq!(ids, vec!["A0000000031010", "03", "A0000000032010", "0003"]);
}

#[test]
fn nested_value_is_found() {
    let data = parse_hex(PPSE_FCI).unwrap();
    assert_eq!(
        find_value(&data, &[tags::SFI, &[0x87]]),
        Some(vec![0x01])
    );
    assert_eq!(find_value(&data, &[tags::TRACK_2_EQV_DATA]), None);
}

#[test]
fn long_form_length() {
    let value = vec![0x5A; 0x81];
    let mut data = vec![0x70, 0x81, 0x81];
    data.extend_from_slice(&value);
    let records = decode_all(&data).unwrap();
    assert_eq!(records[0].length, 0x81);
    assert_eq!(records[0].raw_length, vec![0x81, 0x81]);
    assert_eq!(records[0].value, value);
}

#[test]
fn truncated_buffer_is_an_error_for_strict_search_only() {
    let data = parse_hex("70 0A 57 08 40 00 00").unwrap();
    match try_find_value(&data, &[tags::TRACK_2_EQV_DATA]) {
        Err(Error::UnexpectedEndOfData { .. }) => {}
        other => panic!("expected UnexpectedEndOfData, got: {:?}", other),
    }
    assert_eq!(find_value(&data, &[tags::TRACK_2_EQV_DATA]), None);
}

#[test]
fn padding_between_records_is_skipped() {
    let data = parse_hex("00 00 5F 20 03 41 42 43 FF FF 57 02 12 34 00").unwrap();
    let records = decode_all(&data).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].value, b"ABC".to_vec());
    assert_eq!(records[1].value, vec![0x12, 0x34]);
}

#[test]
fn unknown_tag_keeps_its_bytes() {
    let data = parse_hex("DF 7F 01 AA").unwrap();
    let records = decode_all(&data).unwrap();
    assert!(records[0].tag.is_unknown());
    assert_eq!(records[0].tag_id(), &[0xDF, 0x7F]);
    assert_eq!(records[0].tag.name(), tags::UNKNOWN_TAG_NAME);
}
