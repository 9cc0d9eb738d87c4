#[path = "../common/mod.rs"]
mod common;

use libemv::prelude::*;
use libemv::protocol::CommandType;

#[test]
fn select_ppse_frame() {
    let frame = Command::Select {
        name: b"2PAY.SYS.DDF01".to_vec(),
    }
    .encode()
    .unwrap();
    assert_eq!(bytes_to_hex(&frame), "00A404000E325041592E5359532E444446303100");
}

#[test]
fn read_record_frame() {
    let frame = Command::ReadRecord { record: 3, sfi: 2 }.encode().unwrap();
    assert_eq!(frame, vec![0x00, 0xB2, 0x03, 0x14, 0x00]);
}

#[test]
fn gpo_without_pdol_sends_empty_template() {
    let frame = Command::GetProcessingOptions { pdol: None }.encode().unwrap();
    assert_eq!(frame, vec![0x80, 0xA8, 0x00, 0x00, 0x02, 0x83, 0x00, 0x00]);
}

#[test]
fn gpo_fills_ttq_and_zeroes_the_rest() {
    // TTQ (4), amount authorised (6), terminal country code (2)
    let pdol = parse_hex("9F66 04 9F02 06 9F1A 02").unwrap();
    let frame = Command::GetProcessingOptions { pdol: Some(pdol) }
        .encode()
        .unwrap();
    assert_eq!(frame[4], 14);
    assert_eq!(&frame[5..7], &[0x83, 12]);
    assert_eq!(&frame[7..11], &[0x28, 0x00, 0x00, 0x00]);
    assert!(frame[11..19].iter().all(|&b| b == 0));
    assert_eq!(frame.len(), 20);
}

#[test]
fn get_data_frame() {
    let frame = Command::GetData { tag: [0x9F, 0x36] }.encode().unwrap();
    assert_eq!(frame, vec![0x80, 0xCA, 0x9F, 0x36, 0x00]);
}

#[test]
fn oversized_data_is_rejected() {
    let apdu = ApduCommand::new(CommandType::Select).with_data(vec![0u8; 256]);
    match apdu.encode() {
        Err(Error::InvalidLength {
            expected: 255,
            actual: 256,
        }) => {}
        other => panic!("expected InvalidLength, got: {:?}", other),
    }
}
